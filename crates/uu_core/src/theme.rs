//! The light/dark palette. One persisted boolean selects between two fixed
//! sets of Tailwind utility tokens; categories get a fixed color lookup
//! with a gray fallback for anything unrecognized.

/// Preferences key the theme flag is persisted under.
pub const THEME_KEY: &str = "darkMode";

/// Dark mode is the default when no preference has been saved.
pub const DEFAULT_DARK_MODE: bool = true;

/// Style tokens for one palette. All tokens are static class strings;
/// nothing is computed at render time beyond picking the palette.
#[derive(Debug, Clone, Copy)]
pub struct ThemeClasses {
    pub background: &'static str,
    pub header: &'static str,
    pub footer: &'static str,
    pub text_primary: &'static str,
    pub text_secondary: &'static str,
    pub text_muted: &'static str,
    pub card: &'static str,
    pub accent: &'static str,
    pub accent_hover: &'static str,
    pub button: &'static str,
    pub toggle: &'static str,
    pub spinner: &'static str,
}

pub const DARK: ThemeClasses = ThemeClasses {
    background: "bg-gradient-to-br from-gray-900 via-slate-900 to-gray-900",
    header: "bg-black/20 backdrop-blur-sm border-b border-gray-700/50",
    footer: "bg-black/20 backdrop-blur-sm border-t border-gray-700/50",
    text_primary: "text-white",
    text_secondary: "text-gray-300",
    text_muted: "text-gray-400",
    card: "bg-gray-800/50 backdrop-blur-sm border border-gray-700/50 hover:border-blue-500/50",
    accent: "text-blue-400",
    accent_hover: "hover:text-blue-300",
    button: "bg-blue-600 hover:bg-blue-700 text-white",
    toggle: "bg-gray-700 hover:bg-gray-600 text-yellow-400",
    spinner: "border-blue-400",
};

pub const LIGHT: ThemeClasses = ThemeClasses {
    background: "bg-gradient-to-br from-gray-50 via-blue-50 to-gray-50",
    header: "bg-white/80 backdrop-blur-sm border-b border-gray-200/50 shadow-sm",
    footer: "bg-white/80 backdrop-blur-sm border-t border-gray-200/50",
    text_primary: "text-gray-900",
    text_secondary: "text-gray-600",
    text_muted: "text-gray-500",
    card: "bg-white/80 backdrop-blur-sm border border-gray-200/50 hover:border-blue-300/50 shadow-sm",
    accent: "text-blue-600",
    accent_hover: "hover:text-blue-700",
    button: "bg-blue-500 hover:bg-blue-600 text-white",
    toggle: "bg-gray-100 hover:bg-gray-200 text-gray-700",
    spinner: "border-blue-600",
};

impl ThemeClasses {
    pub fn for_mode(dark_mode: bool) -> &'static ThemeClasses {
        if dark_mode {
            &DARK
        } else {
            &LIGHT
        }
    }
}

/// Badge color for a category label. Ten recognized categories; anything
/// else gets gray.
pub fn category_color(category: &str, dark_mode: bool) -> &'static str {
    match category {
        "Environment" => pick(dark_mode, "bg-emerald-600", "bg-emerald-500"),
        "Technology" => pick(dark_mode, "bg-blue-600", "bg-blue-500"),
        "Finance" => pick(dark_mode, "bg-amber-600", "bg-amber-500"),
        "Science" => pick(dark_mode, "bg-violet-600", "bg-violet-500"),
        "Health" => pick(dark_mode, "bg-rose-600", "bg-rose-500"),
        "Culture" => pick(dark_mode, "bg-pink-600", "bg-pink-500"),
        "Politics" => pick(dark_mode, "bg-indigo-600", "bg-indigo-500"),
        "Sports" => pick(dark_mode, "bg-orange-600", "bg-orange-500"),
        "World" => pick(dark_mode, "bg-teal-600", "bg-teal-500"),
        "Business" => pick(dark_mode, "bg-cyan-600", "bg-cyan-500"),
        _ => pick(dark_mode, "bg-gray-600", "bg-gray-500"),
    }
}

fn pick(dark_mode: bool, dark: &'static str, light: &'static str) -> &'static str {
    if dark_mode {
        dark
    } else {
        light
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palettes_differ_on_every_token() {
        assert_ne!(DARK.background, LIGHT.background);
        assert_ne!(DARK.header, LIGHT.header);
        assert_ne!(DARK.footer, LIGHT.footer);
        assert_ne!(DARK.text_primary, LIGHT.text_primary);
        assert_ne!(DARK.text_secondary, LIGHT.text_secondary);
        assert_ne!(DARK.text_muted, LIGHT.text_muted);
        assert_ne!(DARK.card, LIGHT.card);
        assert_ne!(DARK.accent, LIGHT.accent);
        assert_ne!(DARK.accent_hover, LIGHT.accent_hover);
        assert_ne!(DARK.button, LIGHT.button);
        assert_ne!(DARK.toggle, LIGHT.toggle);
        assert_ne!(DARK.spinner, LIGHT.spinner);
    }

    #[test]
    fn test_for_mode() {
        assert_eq!(ThemeClasses::for_mode(true).accent, DARK.accent);
        assert_eq!(ThemeClasses::for_mode(false).accent, LIGHT.accent);
    }

    #[test]
    fn test_known_categories_map_per_mode() {
        assert_eq!(category_color("Finance", true), "bg-amber-600");
        assert_eq!(category_color("Finance", false), "bg-amber-500");
        assert_eq!(category_color("World", true), "bg-teal-600");
    }

    #[test]
    fn test_unknown_category_falls_back_to_gray() {
        assert_eq!(category_color("Astrology", true), "bg-gray-600");
        assert_eq!(category_color("", false), "bg-gray-500");
    }
}
