use async_trait::async_trait;
use tracing::{error, info};
use url::Url;
use uu_core::article::sort_recent_first;
use uu_core::{Article, Error, Result};

/// The feed endpoint the site reads from. One GET, no parameters, no
/// pagination; the response is a JSON array of articles.
pub const DEFAULT_ENDPOINT: &str = "https://api.unbiasedupdates.com/articles/recent";

/// Where articles come from. The web layer only depends on this trait so
/// tests can swap in a canned or failing source.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Fetch the recent articles, newest first.
    async fn fetch_recent(&self) -> Result<Vec<Article>>;
}

pub struct FeedClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl FeedClient {
    pub fn new() -> Result<Self> {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    pub fn with_endpoint(endpoint: &str) -> Result<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| Error::InvalidUrl(format!("{}: {}", endpoint, e)))?;
        Ok(Self {
            http: reqwest::Client::new(),
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }
}

#[async_trait]
impl ArticleSource for FeedClient {
    async fn fetch_recent(&self) -> Result<Vec<Article>> {
        let response = self
            .http
            .get(self.endpoint.as_str())
            .send()
            .await?
            .error_for_status()?;
        let mut articles: Vec<Article> = response.json().await?;
        sort_recent_first(&mut articles);
        Ok(articles)
    }
}

/// Startup fetch. A failure is logged and surfaced as an empty feed; the
/// site renders its empty state instead of an error page.
pub async fn load_articles(source: &dyn ArticleSource) -> Vec<Article> {
    match source.fetch_recent().await {
        Ok(articles) => {
            info!("Fetched {} articles", articles.len());
            articles
        }
        Err(e) => {
            error!("Failed to fetch articles: {}", e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedSource(Vec<Article>);

    #[async_trait]
    impl ArticleSource for CannedSource {
        async fn fetch_recent(&self) -> Result<Vec<Article>> {
            Ok(self.0.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl ArticleSource for FailingSource {
        async fn fetch_recent(&self) -> Result<Vec<Article>> {
            Err(Error::Feed("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_load_articles_passes_through() {
        let source = CannedSource(vec![Article {
            title: "One".to_string(),
            ..Article::default()
        }]);
        let articles = load_articles(&source).await;
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].title, "One");
    }

    #[tokio::test]
    async fn test_load_articles_swallows_failure() {
        let articles = load_articles(&FailingSource).await;
        assert!(articles.is_empty());
    }

    #[test]
    fn test_with_endpoint_rejects_bad_urls() {
        assert!(FeedClient::with_endpoint("not a url").is_err());
        assert!(FeedClient::with_endpoint(DEFAULT_ENDPOINT).is_ok());
    }
}
