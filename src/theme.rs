/// Light/dark switch owned by the app shell. Pages only read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Label on the footer toggle button.
    pub fn interface_label(&self) -> &'static str {
        match self {
            ThemeMode::Light => "Solar Interface",
            ThemeMode::Dark => "Lunar Interface",
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Light => Palette {
                accent: "#B76E79",
                highlight: "#C5A381",
                text: "#1A050A",
                background: "#FDF2F2",
                surface: "rgba(255, 255, 255, 0.7)",
                border: "rgba(217, 187, 174, 0.4)",
                footer: "#1A050A",
                qr: "1a050a",
            },
            ThemeMode::Dark => Palette {
                accent: "#C5A381",
                highlight: "#B76E79",
                text: "#FEE2E2",
                background: "#0D0204",
                surface: "rgba(0, 0, 0, 0.4)",
                border: "rgba(183, 110, 121, 0.4)",
                footer: "#000000",
                qr: "fee2e2",
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub accent: &'static str,
    pub highlight: &'static str,
    pub text: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub border: &'static str,
    pub footer: &'static str,
    /// QR foreground, hex without `#`.
    pub qr: &'static str,
}

impl Palette {
    /// CSS custom properties consumed by the inline stylesheets.
    pub fn css_vars(&self) -> String {
        format!(
            "--accent: {}; --highlight: {}; --text: {}; --bg: {}; --surface: {}; --border: {}; --footer: {};",
            self.accent, self.highlight, self.text, self.background, self.surface, self.border, self.footer
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_is_identity() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.toggled().toggled(), mode);
            assert_ne!(mode.toggled(), mode);
        }
    }

    #[test]
    fn starts_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn qr_colors_are_bare_hex() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            let qr = mode.palette().qr;
            assert_eq!(qr.len(), 6);
            assert!(qr.chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn css_vars_carry_the_accent() {
        let vars = ThemeMode::Dark.palette().css_vars();
        assert!(vars.contains("--accent: #C5A381;"));
    }
}
