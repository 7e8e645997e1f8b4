// ============================================================================
// THEME - Paleta clara/oscura (puro, sin DOM)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub page_background: &'static str,
    pub page_text: &'static str,
    pub sidebar_background: &'static str,
    pub button_background: &'static str,
    pub heading: &'static str,
}

pub const LIGHT: Theme = Theme {
    page_background: "#f4f4f4",
    page_text: "#000",
    sidebar_background: "#003366",
    button_background: "#004080",
    heading: "#003366",
};

pub const DARK: Theme = Theme {
    page_background: "#333",
    page_text: "#fff",
    sidebar_background: "#222",
    button_background: "#444",
    heading: "#fff",
};

const BUTTON_BASE: &str = "color: #fff; padding: 10px 15px; border: none; border-radius: 5px; \
    text-align: center; margin-bottom: 10px; cursor: pointer; transition: background 0.3s;";

const INPUT_STYLE: &str = "padding: 5px; font-size: 14px; border-radius: 4px; \
    border: 1px solid #ccc; width: 300px; transition: all 0.3s;";

impl Theme {
    pub fn for_mode(dark_mode: bool) -> Theme {
        if dark_mode {
            DARK
        } else {
            LIGHT
        }
    }

    pub fn page_style(&self) -> String {
        format!(
            "display: flex; font-family: Arial, sans-serif; height: 100vh; background-color: {}; color: {};",
            self.page_background, self.page_text
        )
    }

    pub fn sidebar_style(&self) -> String {
        format!(
            "width: 250px; background-color: {}; color: #fff; padding: 20px; display: flex; \
             flex-direction: column; justify-content: space-between; height: 100%;",
            self.sidebar_background
        )
    }

    /// Botones del sidebar
    pub fn nav_button_style(&self) -> String {
        format!("{} background-color: {};", BUTTON_BASE, self.button_background)
    }

    /// "Find Route" mantiene el azul en ambos modos
    pub fn submit_button_style(&self) -> String {
        format!("{} background: #003366; margin-left: 10px;", BUTTON_BASE)
    }

    pub fn heading_style(&self) -> String {
        format!("color: {};", self.heading)
    }

    pub fn label_style(&self) -> String {
        format!(
            "font-size: 16px; font-weight: bold; color: {}; margin-right: 10px;",
            self.heading
        )
    }

    pub fn input_style(&self) -> &'static str {
        INPUT_STYLE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_selects_palette() {
        assert_eq!(Theme::for_mode(false), LIGHT);
        assert_eq!(Theme::for_mode(true), DARK);
    }

    #[test]
    fn test_styles_carry_palette_colors() {
        let dark = Theme::for_mode(true);
        assert!(dark.page_style().contains("background-color: #333"));
        assert!(dark.sidebar_style().contains("#222"));
        assert!(dark.nav_button_style().ends_with("background-color: #444;"));

        let light = Theme::for_mode(false);
        assert!(light.page_style().contains("color: #000"));
        assert_eq!(light.heading_style(), "color: #003366;");
        assert!(light.submit_button_style().contains("background: #003366"));
    }
}
