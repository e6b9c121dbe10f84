//! Terminal UI.

use console::Term;
use std::io::Write;

use super::{should_use_colors, AppdescTheme, OutputMode, UserInterface};

/// Terminal UI implementation.
///
/// Results and status go to stdout; warnings and errors go to stderr.
pub struct TerminalUI {
    out: Term,
    err: Term,
    theme: AppdescTheme,
    use_color: bool,
    mode: OutputMode,
}

impl TerminalUI {
    /// Create a new terminal UI.
    pub fn new(mode: OutputMode, use_color: bool) -> Self {
        Self {
            out: Term::stdout(),
            err: Term::stderr(),
            theme: AppdescTheme::for_color(use_color),
            use_color,
            mode,
        }
    }
}

impl UserInterface for TerminalUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn set_output_mode(&mut self, mode: OutputMode) {
        self.mode = mode;
    }

    fn use_color(&self) -> bool {
        self.use_color
    }

    fn output(&mut self, text: &str) {
        if self.mode.shows_results() {
            write!(self.out, "{}", text).ok();
            if !text.ends_with('\n') {
                writeln!(self.out).ok();
            }
        }
    }

    fn message(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", msg).ok();
        }
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "{}", self.theme.format_success(msg)).ok();
        }
    }

    fn warning(&mut self, msg: &str) {
        if self.mode.shows_results() {
            writeln!(self.err, "{}", self.theme.format_warning(msg)).ok();
        }
    }

    fn error(&mut self, msg: &str) {
        writeln!(self.err, "{}", self.theme.format_error(msg)).ok();
    }

    fn show_header(&mut self, title: &str) {
        if self.mode.shows_status() {
            writeln!(self.out, "\n{}\n", self.theme.format_header(title)).ok();
        }
    }
}

/// Create the terminal UI, honoring `--no-color` and `NO_COLOR`.
pub fn create_ui(no_color: bool, mode: OutputMode) -> Box<dyn UserInterface> {
    let use_color = !no_color && should_use_colors();
    Box::new(TerminalUI::new(mode, use_color))
}
