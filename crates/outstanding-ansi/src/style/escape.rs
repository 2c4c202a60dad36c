//! Single escape sequences as values.

use std::fmt;

use super::error::Result;
use super::registry::{self, Table};

/// One registry entry: a raw escape sequence plus the table and name it
/// came from.
///
/// The name is kept so that output can show escapes symbolically, the way
/// [`OutputMode::Debug`](crate::OutputMode::Debug) does.
///
/// # Example
///
/// ```rust
/// use outstanding_ansi::{Color, Escape};
///
/// let red = Color::Red.foreground_escape();
/// assert_eq!(red.sequence(), "\x1b[31m");
/// assert_eq!(red.tag(), "{fg.red}");
///
/// let reset = Escape::control("reset").unwrap();
/// assert_eq!(reset.to_string(), "\x1b[0m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Escape {
    table: Table,
    name: &'static str,
    sequence: &'static str,
}

impl Escape {
    pub(crate) fn new(table: Table, name: &'static str, sequence: &'static str) -> Self {
        Self {
            table,
            name,
            sequence,
        }
    }

    /// Looks up a control sequence such as `reset`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownStyleName`](crate::Error::UnknownStyleName)
    /// for names outside the control table.
    pub fn control(name: &str) -> Result<Self> {
        registry::control_escape(name)
    }

    pub fn table(&self) -> Table {
        self.table
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The raw bytes sent to the terminal.
    pub fn sequence(&self) -> &'static str {
        self.sequence
    }

    /// Symbolic form, e.g. `{attr.unbold}`.
    pub fn tag(&self) -> String {
        format!("{{{}.{}}}", self.table.prefix(), self.name)
    }
}

impl fmt::Display for Escape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sequence)
    }
}
