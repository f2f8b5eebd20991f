pub mod article;
pub mod error;
pub mod format;
pub mod theme;

pub use article::Article;
pub use error::Error;
pub type Result<T> = std::result::Result<T, Error>;

pub mod prelude {
    pub use crate::article::Article;
    pub use crate::theme::ThemeClasses;
    pub use crate::{Error, Result};
}
