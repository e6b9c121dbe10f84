//! Visual theme and styling.

use console::Style;

/// Terminal styles used across appdesc output.
#[derive(Debug, Clone)]
pub struct AppdescTheme {
    /// Satisfied / compatible (green).
    pub success: Style,
    /// Warnings and unsatisfied optional interfaces (orange).
    pub warning: Style,
    /// Errors and unsatisfied requirements (red bold).
    pub error: Style,
    /// Secondary text (dim).
    pub dim: Style,
    /// Section headers (bold magenta).
    pub header: Style,
    /// Ids and other emphasized values (bold).
    pub highlight: Style,
}

impl Default for AppdescTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl AppdescTheme {
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            header: Style::new().bold().magenta(),
            highlight: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            header: Style::new(),
            highlight: Style::new(),
        }
    }

    /// Pick the colored or plain theme.
    pub fn for_color(use_color: bool) -> Self {
        if use_color {
            Self::new()
        } else {
            Self::plain()
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    pub fn format_header(&self, title: &str) -> String {
        format!("{}", self.header.apply_to(title))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    console::Term::stdout().is_term()
}
