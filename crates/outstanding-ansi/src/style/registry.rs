//! Static registry of ANSI SGR escape codes.
//!
//! The registry maps symbolic names to escape sequences, partitioned into
//! four tables:
//!
//! | Table | Names | Codes |
//! |-------|-------|-------|
//! | [`Table::Foreground`] | `black` .. `white`, `default` | 30-37, 39 |
//! | [`Table::Background`] | `black` .. `white`, `default` | 40-47, 49 |
//! | [`Table::Attribute`] | `bold` .. `strike` and their `un` forms | 1-9, 21-29 |
//! | [`Table::Control`] | `reset` | 0 |
//!
//! Every color and attribute entry is exposed as a [`StyleCode`]: the
//! sequence that opens it and the one that closes it again. The `default`
//! pseudo-color opens "back to terminal default" and is what a color closes
//! with when nothing encloses it.
//!
//! The tables are read-only and built lazily on first access, so lookups are
//! safe from any thread.

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use once_cell::sync::Lazy;

use super::error::{Error, Result};
use super::escape::Escape;
use super::value::{Attribute, Color, Toggle};

macro_rules! sgr {
    ($code:literal) => {
        concat!("\x1b[", $code, "m")
    };
}

/// Colors in [`Color`] declaration order: (color, foreground, background).
const COLORS: [(Color, &str, &str); 9] = [
    (Color::Black, sgr!(30), sgr!(40)),
    (Color::Red, sgr!(31), sgr!(41)),
    (Color::Green, sgr!(32), sgr!(42)),
    (Color::Yellow, sgr!(33), sgr!(43)),
    (Color::Blue, sgr!(34), sgr!(44)),
    (Color::Magenta, sgr!(35), sgr!(45)),
    (Color::Cyan, sgr!(36), sgr!(46)),
    (Color::White, sgr!(37), sgr!(47)),
    (Color::Default, sgr!(39), sgr!(49)),
];

/// Attributes in [`Attribute`] declaration order: (attribute, on, off).
const ATTRIBUTES: [(Attribute, &str, &str); 8] = [
    (Attribute::Bold, sgr!(1), sgr!(21)),
    (Attribute::Faint, sgr!(2), sgr!(22)),
    (Attribute::Italic, sgr!(3), sgr!(23)),
    (Attribute::Underline, sgr!(4), sgr!(24)),
    (Attribute::Blink, sgr!(5), sgr!(25)),
    (Attribute::Reverse, sgr!(7), sgr!(27)),
    (Attribute::Conceal, sgr!(8), sgr!(28)),
    (Attribute::Strike, sgr!(9), sgr!(29)),
];

const CONTROLS: [(&str, &str); 1] = [("reset", sgr!(0))];

static COLOR_NAMES: Lazy<HashMap<&'static str, Color>> =
    Lazy::new(|| COLORS.iter().map(|(color, _, _)| (color.name(), *color)).collect());

static TOGGLE_NAMES: Lazy<HashMap<&'static str, Toggle>> = Lazy::new(|| {
    ATTRIBUTES
        .iter()
        .flat_map(|(attribute, _, _)| [Toggle::on(*attribute), Toggle::off(*attribute)])
        .map(|toggle| (toggle.name(), toggle))
        .collect()
});

/// One of the registry's lookup tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Foreground,
    Background,
    Attribute,
    Control,
}

impl Table {
    /// Short prefix used in debug renderings, e.g. `fg` in `{fg.red}`.
    pub fn prefix(self) -> &'static str {
        match self {
            Table::Foreground => "fg",
            Table::Background => "bg",
            Table::Attribute => "attr",
            Table::Control => "ctl",
        }
    }

    /// Human-readable table name.
    pub fn as_str(self) -> &'static str {
        match self {
            Table::Foreground => "foreground",
            Table::Background => "background",
            Table::Attribute => "attribute",
            Table::Control => "control",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A paired open/close escape for one registry entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleCode {
    open: Escape,
    close: Escape,
}

impl StyleCode {
    pub(crate) fn new(open: Escape, close: Escape) -> Self {
        Self { open, close }
    }

    /// The escape that switches this entry on.
    pub fn open(&self) -> Escape {
        self.open
    }

    /// The escape that switches this entry off again.
    pub fn close(&self) -> Escape {
        self.close
    }
}

pub(crate) fn foreground_escape(color: Color) -> Escape {
    let (_, sequence, _) = COLORS[color as usize];
    Escape::new(Table::Foreground, color.name(), sequence)
}

pub(crate) fn background_escape(color: Color) -> Escape {
    let (_, _, sequence) = COLORS[color as usize];
    Escape::new(Table::Background, color.name(), sequence)
}

pub(crate) fn toggle_escape(toggle: Toggle) -> Escape {
    let (_, on, off) = ATTRIBUTES[toggle.attribute() as usize];
    let sequence = if toggle.is_on() { on } else { off };
    Escape::new(Table::Attribute, toggle.name(), sequence)
}

fn unknown(table: Table, name: &str) -> Error {
    tracing::debug!(table = table.as_str(), name, "style name not found");
    Error::UnknownStyleName {
        table,
        name: name.to_string(),
    }
}

/// Resolves a color name in the foreground or background table.
pub(crate) fn resolve_color(table: Table, name: &str) -> Result<Color> {
    COLOR_NAMES
        .get(name)
        .copied()
        .ok_or_else(|| unknown(table, name))
}

/// Resolves an attribute name, including the `un` forms.
pub(crate) fn resolve_toggle(name: &str) -> Result<Toggle> {
    TOGGLE_NAMES
        .get(name)
        .copied()
        .ok_or_else(|| unknown(Table::Attribute, name))
}

/// Looks up a foreground color by name.
///
/// Closing a foreground color resets the channel to the terminal default.
///
/// # Errors
///
/// Returns [`Error::UnknownStyleName`] if `name` is not a color.
pub fn lookup_foreground(name: &str) -> Result<StyleCode> {
    let color = resolve_color(Table::Foreground, name)?;
    Ok(StyleCode::new(
        foreground_escape(color),
        foreground_escape(Color::Default),
    ))
}

/// Looks up a background color by name.
///
/// # Errors
///
/// Returns [`Error::UnknownStyleName`] if `name` is not a color.
pub fn lookup_background(name: &str) -> Result<StyleCode> {
    let color = resolve_color(Table::Background, name)?;
    Ok(StyleCode::new(
        background_escape(color),
        background_escape(Color::Default),
    ))
}

/// Looks up an attribute by name.
///
/// `bold` opens with `ESC[1m` and closes with `ESC[21m`; `unbold` is the
/// same pair the other way around.
///
/// # Errors
///
/// Returns [`Error::UnknownStyleName`] if `name` is not an attribute.
pub fn lookup_attribute(name: &str) -> Result<StyleCode> {
    let toggle = resolve_toggle(name)?;
    Ok(StyleCode::new(toggle.escape(), toggle.inverse().escape()))
}

/// Looks up a raw control sequence such as `reset`.
///
/// # Errors
///
/// Returns [`Error::UnknownStyleName`] if `name` is not a control sequence.
pub fn lookup_control(name: &str) -> Result<&'static str> {
    control_escape(name).map(|escape| escape.sequence())
}

pub(crate) fn control_escape(name: &str) -> Result<Escape> {
    CONTROLS
        .iter()
        .find(|(control, _)| *control == name)
        .map(|(control, sequence)| Escape::new(Table::Control, *control, *sequence))
        .ok_or_else(|| unknown(Table::Control, name))
}

/// Returns every valid key of a table, sorted.
pub fn names(table: Table) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = match table {
        Table::Foreground | Table::Background => COLOR_NAMES.keys().copied().collect(),
        Table::Attribute => TOGGLE_NAMES.keys().copied().collect(),
        Table::Control => CONTROLS.iter().map(|(name, _)| *name).collect(),
    };
    names.sort_unstable();
    names
}

/// Names accepted as foreground colors.
pub fn available_foregrounds() -> BTreeSet<&'static str> {
    names(Table::Foreground).into_iter().collect()
}

/// Names accepted as background colors.
pub fn available_backgrounds() -> BTreeSet<&'static str> {
    names(Table::Background).into_iter().collect()
}

/// Names accepted as attributes, `un` forms included.
pub fn available_attributes() -> BTreeSet<&'static str> {
    names(Table::Attribute).into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_follow_declaration_order() {
        for (index, (color, _, _)) in COLORS.iter().enumerate() {
            assert_eq!(*color as usize, index, "color table out of order");
        }
        for (index, (attribute, _, _)) in ATTRIBUTES.iter().enumerate() {
            assert_eq!(*attribute as usize, index, "attribute table out of order");
        }
    }

    #[test]
    fn test_lookup_foreground() {
        let code = lookup_foreground("white").unwrap();
        assert_eq!(code.open().sequence(), "\x1b[37m");
        assert_eq!(code.close().sequence(), "\x1b[39m");
    }

    #[test]
    fn test_lookup_background() {
        let code = lookup_background("red").unwrap();
        assert_eq!(code.open().sequence(), "\x1b[41m");
        assert_eq!(code.close().sequence(), "\x1b[49m");
    }

    #[test]
    fn test_lookup_default_colors() {
        assert_eq!(
            lookup_foreground("default").unwrap().open().sequence(),
            "\x1b[39m"
        );
        assert_eq!(
            lookup_background("default").unwrap().open().sequence(),
            "\x1b[49m"
        );
    }

    #[test]
    fn test_lookup_attribute_pairs() {
        let bold = lookup_attribute("bold").unwrap();
        assert_eq!(bold.open().sequence(), "\x1b[1m");
        assert_eq!(bold.close().sequence(), "\x1b[21m");

        let unbold = lookup_attribute("unbold").unwrap();
        assert_eq!(unbold.open().sequence(), "\x1b[21m");
        assert_eq!(unbold.close().sequence(), "\x1b[1m");

        let strike = lookup_attribute("strike").unwrap();
        assert_eq!(strike.open().sequence(), "\x1b[9m");
        assert_eq!(strike.close().sequence(), "\x1b[29m");
    }

    #[test]
    fn test_lookup_control() {
        assert_eq!(lookup_control("reset").unwrap(), "\x1b[0m");
    }

    #[test]
    fn test_lookup_unknown_names() {
        assert_eq!(
            lookup_foreground("purple"),
            Err(Error::UnknownStyleName {
                table: Table::Foreground,
                name: "purple".to_string(),
            })
        );
        assert!(matches!(
            lookup_background("bold"),
            Err(Error::UnknownStyleName {
                table: Table::Background,
                ..
            })
        ));
        assert!(matches!(
            lookup_attribute("red"),
            Err(Error::UnknownStyleName {
                table: Table::Attribute,
                ..
            })
        ));
        assert!(matches!(
            lookup_control("clear"),
            Err(Error::UnknownStyleName {
                table: Table::Control,
                ..
            })
        ));
    }

    #[test]
    fn test_names_are_sorted() {
        assert_eq!(
            names(Table::Foreground),
            vec!["black", "blue", "cyan", "default", "green", "magenta", "red", "white", "yellow"]
        );
        assert_eq!(names(Table::Control), vec!["reset"]);
    }

    #[test]
    fn test_available_attributes() {
        let attributes: Vec<_> = available_attributes().into_iter().collect();
        assert_eq!(
            attributes,
            vec![
                "blink",
                "bold",
                "conceal",
                "faint",
                "italic",
                "reverse",
                "strike",
                "unblink",
                "unbold",
                "unconceal",
                "underline",
                "unfaint",
                "unitalic",
                "unreverse",
                "unstrike",
                "ununderline",
            ]
        );
    }

    #[test]
    fn test_available_colors_match() {
        assert_eq!(available_foregrounds(), available_backgrounds());
        assert!(available_foregrounds().contains("default"));
    }

    #[test]
    fn test_table_display() {
        assert_eq!(Table::Background.to_string(), "background");
        assert_eq!(Table::Attribute.prefix(), "attr");
    }
}
