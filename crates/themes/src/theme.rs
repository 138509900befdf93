use serde::{Deserialize, Serialize};

/// A visual style: piece models, board material and lighting environment.
///
/// Asset paths are opaque locators handed to the asset pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub pieces_path: String,
    pub board_texture: String,
    pub environment_map: String,
    pub has_animations: bool,
}

impl Theme {
    /// A theme whose assets follow the `themes/<slug>/...` layout.
    fn conventional(name: &str, description: &str, has_animations: bool) -> Self {
        let slug = name.to_lowercase();
        Self {
            name: name.to_string(),
            description: description.to_string(),
            pieces_path: format!("themes/{slug}/pieces/"),
            board_texture: format!("themes/{slug}/board.jpg"),
            environment_map: format!("themes/{slug}/environment.hdr"),
            has_animations,
        }
    }
}

/// The compiled-in catalogue. Classic comes first and is the default.
pub fn builtin_themes() -> Vec<Theme> {
    vec![
        Theme::conventional("Classic", "Traditional wooden chess set", false),
        Theme::conventional("Modern", "Contemporary glass and metal design", true),
        Theme::conventional("Fantasy", "Medieval fantasy themed pieces", true),
        Theme::conventional("Camo", "Military camouflage theme", false),
    ]
}

/// Exact, case-sensitive name lookup.
pub fn find_theme<'a>(themes: &'a [Theme], name: &str) -> Option<&'a Theme> {
    themes.iter().find(|theme| theme.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalogue() {
        let themes = builtin_themes();
        let names: Vec<_> = themes.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Classic", "Modern", "Fantasy", "Camo"]);
        let animated: Vec<_> = themes.iter().map(|t| t.has_animations).collect();
        assert_eq!(animated, [false, true, true, false]);
    }

    #[test]
    fn builtin_paths_follow_layout() {
        let themes = builtin_themes();
        let classic = &themes[0];
        assert_eq!(classic.description, "Traditional wooden chess set");
        assert_eq!(classic.pieces_path, "themes/classic/pieces/");
        assert_eq!(classic.board_texture, "themes/classic/board.jpg");
        assert_eq!(classic.environment_map, "themes/classic/environment.hdr");
        for theme in &themes {
            let prefix = format!("themes/{}/", theme.name.to_lowercase());
            assert!(theme.pieces_path.starts_with(&prefix));
            assert!(theme.board_texture.starts_with(&prefix));
            assert!(theme.environment_map.starts_with(&prefix));
        }
    }

    #[test]
    fn find_is_exact_and_case_sensitive() {
        let themes = builtin_themes();
        assert_eq!(find_theme(&themes, "Modern").map(|t| t.name.as_str()), Some("Modern"));
        assert!(find_theme(&themes, "modern").is_none());
        assert!(find_theme(&themes, "Mod").is_none());
        assert!(find_theme(&[], "Classic").is_none());
    }
}
