//! Server-side HTML for the two views. Pages are assembled as strings in
//! one pass; all feed-supplied text goes through [`html_escape`]. Styling
//! is Tailwind utility classes picked from the active palette.

use uu_core::format::{display_date_long, display_date_short, split_paragraphs, split_sentences, summary_preview};
use uu_core::theme::{category_color, ThemeClasses};
use uu_core::Article;

const SITE_NAME: &str = "Unbiased Updates";

const TAILWIND_CDN: &str =
    r#"<script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4"></script>"#;

/// Shown when an article image fails to load.
const FALLBACK_THUMBNAIL_CARD: &str =
    "https://images.unsplash.com/photo-1504711434969-e33886168f5c?w=400&h=300&fit=crop&crop=center";
const FALLBACK_THUMBNAIL_DETAIL: &str =
    "https://images.unsplash.com/photo-1504711434969-e33886168f5c?w=800&h=400&fit=crop&crop=center";

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// The home view: hero, one card per article, empty state when the
/// startup fetch produced nothing.
pub fn render_feed(articles: &[Article], dark_mode: bool) -> String {
    let theme = ThemeClasses::for_mode(dark_mode);
    let mut body = String::new();

    body.push_str(r#"<main class="max-w-7xl mx-auto px-6 py-8">"#);
    body.push_str(&format!(
        "<div class=\"text-center mb-12\">\
         <h2 class=\"text-4xl md:text-5xl font-bold {} mb-4\">Stay <span class=\"bg-gradient-to-r from-blue-600 to-cyan-600 bg-clip-text text-transparent\">Informed</span></h2>\
         <p class=\"text-lg max-w-2xl mx-auto {}\">Your trusted source for unbiased news and updates from around the world</p>\
         </div>",
        theme.text_primary, theme.text_secondary
    ));

    if articles.is_empty() {
        body.push_str(&format!(
            "<div class=\"text-center py-12\">\
             <div class=\"{} text-lg mb-4\">No articles available</div>\
             <p class=\"{}\">Please check back later for updates</p>\
             </div>",
            theme.text_secondary, theme.text_muted
        ));
    } else {
        body.push_str(r#"<div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">"#);
        for (index, article) in articles.iter().enumerate() {
            body.push_str(&render_card(article, index, dark_mode, theme));
        }
        body.push_str("</div>");
    }
    body.push_str("</main>");

    page(SITE_NAME, dark_mode, "/", &body)
}

fn render_card(article: &Article, index: usize, dark_mode: bool, theme: &ThemeClasses) -> String {
    let mut card = String::new();
    card.push_str(&format!(
        "<a href=\"/article/{}\" class=\"group {} rounded-2xl overflow-hidden transition-all duration-300 hover:scale-105 block\">",
        index, theme.card
    ));

    let thumbnail = article.thumbnail.as_deref().unwrap_or(FALLBACK_THUMBNAIL_CARD);
    card.push_str(&format!(
        "<div class=\"relative overflow-hidden\">\
         <img src=\"{}\" alt=\"Article thumbnail\" class=\"w-full h-48 object-cover group-hover:scale-110 transition-transform duration-500\" onerror=\"this.onerror=null;this.src='{}'\">",
        html_escape(thumbnail),
        FALLBACK_THUMBNAIL_CARD
    ));
    if let Some(category) = article.category.as_deref() {
        card.push_str(&format!(
            "<div class=\"absolute top-4 left-4 {} text-white px-3 py-1 rounded-full text-sm font-medium\">{}</div>",
            category_color(category, dark_mode),
            html_escape(category)
        ));
    }
    card.push_str("</div>");

    card.push_str(&format!(
        "<div class=\"p-6\"><h3 class=\"text-xl font-bold {} mb-3 {} transition-colors\">{}</h3>",
        theme.text_primary,
        theme.accent_hover,
        html_escape(&article.title)
    ));
    if let Some(summary) = article.summary.as_deref() {
        card.push_str(&format!(
            "<p class=\"{} text-sm mb-4\">{}</p>",
            theme.text_secondary,
            html_escape(&summary_preview(summary))
        ));
    }
    card.push_str(r#"<div class="flex items-center justify-between">"#);
    if let Some(raw) = article.published_date.as_deref() {
        card.push_str(&format!(
            "<time class=\"{} text-sm\">{}</time>",
            theme.text_muted,
            html_escape(&display_date_short(raw))
        ));
    }
    card.push_str(&format!(
        "<span class=\"{} text-sm font-medium {} transition-colors\">Read more &rarr;</span></div></div></a>",
        theme.accent, theme.accent_hover
    ));
    card
}

/// The detail view for one article.
pub fn render_article(article: &Article, index: usize, dark_mode: bool) -> String {
    let theme = ThemeClasses::for_mode(dark_mode);
    let border = if dark_mode { "border-gray-700" } else { "border-gray-200" };
    let mut body = String::new();

    body.push_str(r#"<main class="max-w-4xl mx-auto px-6 py-8">"#);
    body.push_str(&format!(
        "<div class=\"mb-8\"><a href=\"/\" class=\"inline-flex items-center space-x-2 {} {} transition-colors font-medium\">&larr; Back to homepage</a></div>",
        theme.accent, theme.accent_hover
    ));

    body.push_str(&format!(
        "<article class=\"{} rounded-2xl overflow-hidden\">",
        theme.card
    ));

    body.push_str(r#"<div class="relative">"#);
    if let Some(thumbnail) = article.thumbnail.as_deref() {
        body.push_str(&format!(
            "<img src=\"{}\" alt=\"{}\" class=\"w-full h-64 md:h-80 object-cover\" onerror=\"this.onerror=null;this.src='{}'\">",
            html_escape(thumbnail),
            html_escape(&article.title),
            FALLBACK_THUMBNAIL_DETAIL
        ));
    }
    if let Some(category) = article.category.as_deref() {
        body.push_str(&format!(
            "<div class=\"absolute top-6 left-6 {} text-white px-4 py-2 rounded-full text-sm font-medium\">{}</div>",
            category_color(category, dark_mode),
            html_escape(category)
        ));
    }
    body.push_str("</div>");

    body.push_str(&format!(
        "<div class=\"p-8\"><h1 class=\"text-3xl md:text-4xl font-bold {} mb-6 leading-tight\">{}</h1>",
        theme.text_primary,
        html_escape(&article.title)
    ));

    body.push_str(&format!(
        "<div class=\"flex flex-wrap items-center gap-6 {} text-sm mb-8 pb-6 border-b {}\">",
        theme.text_muted, border
    ));
    if let Some(raw) = article.published_date.as_deref() {
        body.push_str(&format!(
            "<time>{}</time>",
            html_escape(&display_date_long(raw))
        ));
    }
    // Fixed label, not computed from content.
    body.push_str("<span>5 min read</span></div>");

    if let Some(summary) = article.summary.as_deref() {
        body.push_str(&format!(
            "<div class=\"mb-8\"><h2 class=\"text-xl font-semibold {} mb-4\">Summary</h2><div class=\"text-lg leading-relaxed {} space-y-4\">",
            theme.text_primary, theme.text_secondary
        ));
        for paragraph in split_paragraphs(summary) {
            body.push_str(&format!("<p>{}</p>", html_escape(paragraph)));
        }
        body.push_str("</div></div>");
    }

    if let Some(insights) = article.insights.as_deref() {
        body.push_str(&format!(
            "<div class=\"mb-8\"><h2 class=\"text-2xl font-bold {} mb-6\">Key Insights</h2><div class=\"space-y-4\">",
            theme.text_primary
        ));
        for sentence in split_sentences(insights) {
            body.push_str(&format!(
                "<p class=\"text-lg leading-relaxed {} pl-4 border-l-4 border-blue-500/30\">{}</p>",
                theme.text_secondary,
                html_escape(&sentence)
            ));
        }
        body.push_str("</div></div>");
    }

    if let Some(url) = article.url.as_deref() {
        let cta_box = if dark_mode {
            "bg-gray-700/30 border-gray-600"
        } else {
            "bg-blue-50/50 border-blue-100"
        };
        body.push_str(&format!(
            "<div class=\"mt-12 p-6 rounded-xl border {}\">\
             <h3 class=\"text-lg font-semibold {} mb-3\">Want to read the full story?</h3>\
             <p class=\"{} mb-4\">Get the complete details and original reporting from the source.</p>\
             <a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\" class=\"inline-flex items-center space-x-2 px-6 py-3 {} rounded-lg transition-colors font-medium\">Read Original Article &nearr;</a>\
             </div>",
            cta_box,
            theme.text_primary,
            theme.text_secondary,
            html_escape(url),
            theme.button
        ));
    }

    body.push_str("</div></article>");
    body.push_str(&format!(
        "<div class=\"mt-12\"><a href=\"/\" class=\"inline-flex items-center space-x-2 {} px-6 py-3 rounded-lg transition-colors font-medium\">&larr; Browse More Articles</a></div>",
        theme.button
    ));
    body.push_str("</main>");

    page(&article.title, dark_mode, &format!("/article/{}", index), &body)
}

/// Placeholder for an index that resolves to nothing. There is no
/// separate still-loading state; any unresolvable index gets this page.
pub fn render_missing(dark_mode: bool, current_path: &str) -> String {
    let theme = ThemeClasses::for_mode(dark_mode);
    let body = format!(
        "<main class=\"flex items-center justify-center min-h-screen\"><div class=\"text-center\">\
         <div class=\"animate-spin rounded-full h-16 w-16 border-t-2 border-b-2 mx-auto mb-4 {}\"></div>\
         <p class=\"text-lg {}\">Loading article or article not found...</p>\
         <a href=\"/\" class=\"inline-block mt-4 {} {} transition-colors\">&larr; Back to homepage</a>\
         </div></main>",
        theme.spinner, theme.text_secondary, theme.accent, theme.accent_hover
    );
    page(SITE_NAME, dark_mode, current_path, &body)
}

/// Shared page chrome: head, sticky header with the theme toggle, footer.
/// The toggle form carries the current path so the handler can send the
/// reader back where they were.
fn page(title: &str, dark_mode: bool, current_path: &str, body: &str) -> String {
    let theme = ThemeClasses::for_mode(dark_mode);
    let toggle_icon = if dark_mode { "&#9728;" } else { "&#127769;" };

    let mut html = String::with_capacity(body.len() + 2048);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
    html.push_str(TAILWIND_CDN);
    html.push_str("\n</head>\n");
    html.push_str(&format!("<body class=\"min-h-screen {}\">\n", theme.background));

    html.push_str(&format!(
        "<header class=\"{} sticky top-0 z-50\"><div class=\"max-w-7xl mx-auto px-6 py-4\"><div class=\"flex items-center justify-between\">\
         <a href=\"/\" class=\"text-2xl font-bold bg-gradient-to-r from-blue-600 to-cyan-600 bg-clip-text text-transparent\">&#128478; {}</a>\
         <form method=\"post\" action=\"/theme/toggle\">\
         <input type=\"hidden\" name=\"redirect\" value=\"{}\">\
         <button type=\"submit\" class=\"p-2 rounded-lg transition-all duration-200 {}\" aria-label=\"Toggle theme\">{}</button>\
         </form>\
         </div></div></header>\n",
        theme.header,
        SITE_NAME,
        html_escape(current_path),
        theme.toggle,
        toggle_icon
    ));

    html.push_str(body);

    html.push_str(&format!(
        "\n<footer class=\"{} mt-16\"><div class=\"max-w-7xl mx-auto px-6 py-8\"><div class=\"text-center\"><p class=\"{}\">&copy; 2024 {}. All rights reserved.</p></div></div></footer>\n",
        theme.footer, theme.text_muted, SITE_NAME
    ));
    html.push_str("</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use uu_core::theme::{DARK, LIGHT};

    fn sample_article() -> Article {
        Article {
            title: "Rates held steady".to_string(),
            summary: Some("The central bank held rates.\nMarkets were calm.".to_string()),
            insights: Some("borrowing stays expensive. savers benefit.".to_string()),
            thumbnail: Some("https://example.com/thumb.jpg".to_string()),
            category: Some("Finance".to_string()),
            published_date: Some("2024-03-15T08:00:00Z".to_string()),
            url: Some("https://example.com/full-story".to_string()),
        }
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<b>"a" & b</b>"#),
            "&lt;b&gt;&quot;a&quot; &amp; b&lt;/b&gt;"
        );
    }

    #[test]
    fn test_feed_renders_cards_in_order() {
        let articles = vec![
            Article { title: "First".to_string(), ..Article::default() },
            Article { title: "Second".to_string(), ..Article::default() },
        ];
        let html = render_feed(&articles, true);
        let first = html.find("First").unwrap();
        let second = html.find("Second").unwrap();
        assert!(first < second);
        assert!(html.contains("/article/0"));
        assert!(html.contains("/article/1"));
    }

    #[test]
    fn test_feed_empty_state() {
        let html = render_feed(&[], true);
        assert!(html.contains("No articles available"));
        assert!(!html.contains("/article/0"));
    }

    #[test]
    fn test_feed_card_preview_is_truncated() {
        let articles = vec![Article {
            title: "Long".to_string(),
            summary: Some("s".repeat(200)),
            ..Article::default()
        }];
        let html = render_feed(&articles, true);
        assert!(html.contains(&format!("{}...", "s".repeat(150))));
        assert!(!html.contains(&"s".repeat(151)));
    }

    #[test]
    fn test_article_page_renders_all_sections() {
        let html = render_article(&sample_article(), 0, true);
        assert!(html.contains("Rates held steady"));
        assert!(html.contains("March 15, 2024"));
        assert!(html.contains("5 min read"));
        assert!(html.contains("<p>The central bank held rates.</p>"));
        assert!(html.contains("<p>Markets were calm.</p>"));
        // Insight sentences come back capitalized.
        assert!(html.contains("Borrowing stays expensive."));
        assert!(html.contains("Savers benefit."));
        assert!(html.contains("https://example.com/full-story"));
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains(category_color("Finance", true)));
    }

    #[test]
    fn test_article_page_omits_missing_sections() {
        let article = Article {
            title: "Bare".to_string(),
            ..Article::default()
        };
        let html = render_article(&article, 0, false);
        assert!(!html.contains("Summary"));
        assert!(!html.contains("Key Insights"));
        assert!(!html.contains("Read Original Article"));
    }

    #[test]
    fn test_broken_image_falls_back_to_placeholder() {
        let html = render_article(&sample_article(), 0, true);
        assert!(html.contains(FALLBACK_THUMBNAIL_DETAIL));
        let feed = render_feed(&[sample_article()], true);
        assert!(feed.contains(FALLBACK_THUMBNAIL_CARD));
    }

    #[test]
    fn test_missing_page_links_home() {
        let html = render_missing(true, "/article/99");
        assert!(html.contains("Loading article or article not found..."));
        assert!(html.contains("href=\"/\""));
    }

    #[test]
    fn test_missing_page_toggle_returns_to_requested_path() {
        let html = render_missing(true, "/article/99");
        assert!(html.contains("name=\"redirect\" value=\"/article/99\""));
    }

    #[test]
    fn test_theme_flag_flips_every_page_token() {
        let dark = render_feed(&[sample_article()], true);
        let light = render_feed(&[sample_article()], false);
        assert!(dark.contains(DARK.background));
        assert!(!dark.contains(LIGHT.background));
        assert!(light.contains(LIGHT.background));
        assert!(dark.contains(DARK.card));
        assert!(light.contains(LIGHT.card));
        assert!(dark.contains(category_color("Finance", true)));
        assert!(light.contains(category_color("Finance", false)));
    }

    #[test]
    fn test_feed_text_is_escaped() {
        let articles = vec![Article {
            title: "<script>alert(1)</script>".to_string(),
            ..Article::default()
        }];
        let html = render_feed(&articles, true);
        assert!(!html.contains("<script>alert(1)</script>"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
