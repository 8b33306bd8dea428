pub const THEME_LIGHT: &str = "☀️";
pub const THEME_DARK: &str = "🌙";
