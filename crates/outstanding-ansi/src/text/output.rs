//! Output modes for rendering styled text.

use crate::style::Escape;

/// How escapes are written when styled text is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputMode {
    /// Raw ANSI escape sequences, ready for a terminal.
    #[default]
    Term,
    /// Characters only, no escapes.
    Text,
    /// Escapes spelled out as tags such as `{fg.red}`, for logs and tests.
    Debug,
}

impl OutputMode {
    pub fn should_use_color(self) -> bool {
        matches!(self, OutputMode::Term)
    }

    pub fn is_debug(self) -> bool {
        matches!(self, OutputMode::Debug)
    }

    pub(crate) fn write_escape(self, escape: &Escape, out: &mut String) {
        match self {
            OutputMode::Term => out.push_str(escape.sequence()),
            OutputMode::Text => {}
            OutputMode::Debug => out.push_str(&escape.tag()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::Color;

    #[test]
    fn test_write_escape_per_mode() {
        let escape = Color::Magenta.foreground_escape();

        let mut term = String::new();
        OutputMode::Term.write_escape(&escape, &mut term);
        assert_eq!(term, "\x1b[35m");

        let mut text = String::new();
        OutputMode::Text.write_escape(&escape, &mut text);
        assert_eq!(text, "");

        let mut debug = String::new();
        OutputMode::Debug.write_escape(&escape, &mut debug);
        assert_eq!(debug, "{fg.magenta}");
    }

    #[test]
    fn test_mode_predicates() {
        assert!(OutputMode::default().should_use_color());
        assert!(!OutputMode::Text.should_use_color());
        assert!(OutputMode::Debug.is_debug());
    }
}
