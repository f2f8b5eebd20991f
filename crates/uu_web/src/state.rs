use tokio::sync::RwLock;
use uu_core::Article;
use uu_prefs::ThemePrefs;

/// Shared request state: the article snapshot fetched at startup (held
/// immutably for the life of the process, so card indices stay valid) and
/// the persisted theme flag, whose only mutation path is the toggle.
pub struct AppState {
    pub articles: Vec<Article>,
    pub theme: RwLock<ThemePrefs>,
}

impl AppState {
    pub fn new(articles: Vec<Article>, theme: ThemePrefs) -> Self {
        Self {
            articles,
            theme: RwLock::new(theme),
        }
    }
}
