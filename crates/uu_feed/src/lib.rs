pub mod client;

pub use client::{load_articles, ArticleSource, FeedClient, DEFAULT_ENDPOINT};

pub mod prelude {
    pub use crate::client::{ArticleSource, FeedClient};
    pub use uu_core::{Article, Error, Result};
}
