use ratatui::style::Color;

/// Orange-on-slate palette of the form
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub accent: Color,
    pub dimmed: Color,
    pub danger: Color,
    pub guidance: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::ember()
    }
}

impl Theme {
    pub fn ember() -> Self {
        Self {
            background: Color::Rgb(24, 24, 27), // #18181B
            text: Color::Rgb(228, 228, 231),    // #E4E4E7
            accent: Color::Rgb(249, 115, 22),   // #F97316
            dimmed: Color::Rgb(113, 113, 122),  // #71717A
            danger: Color::Rgb(239, 68, 68),    // #EF4444
            guidance: Color::Rgb(96, 165, 250), // #60A5FA
        }
    }

    pub fn current() -> Self {
        Self::ember()
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn background() -> Color {
        Theme::current().background
    }
    pub fn text() -> Color {
        Theme::current().text
    }
    pub fn accent() -> Color {
        Theme::current().accent
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
    pub fn danger() -> Color {
        Theme::current().danger
    }
    pub fn guidance() -> Color {
        Theme::current().guidance
    }
}
