//! Typed style values: colors, attributes and the [`Style`] builder.

use super::escape::Escape;
use super::registry;
use crate::text::StyledText;

/// One of the eight basic terminal colors, or the terminal default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    #[default]
    Default,
}

impl Color {
    pub const ALL: [Color; 9] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::Default,
    ];

    /// Registry name, e.g. `"magenta"`.
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Magenta => "magenta",
            Color::Cyan => "cyan",
            Color::White => "white",
            Color::Default => "default",
        }
    }

    pub fn is_default(self) -> bool {
        self == Color::Default
    }

    pub fn foreground_escape(self) -> Escape {
        registry::foreground_escape(self)
    }

    pub fn background_escape(self) -> Escape {
        registry::background_escape(self)
    }
}

/// A text attribute that can be switched on and off independently of the
/// others.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Bold,
    Faint,
    Italic,
    Underline,
    Blink,
    Reverse,
    Conceal,
    Strike,
}

impl Attribute {
    pub const ALL: [Attribute; 8] = [
        Attribute::Bold,
        Attribute::Faint,
        Attribute::Italic,
        Attribute::Underline,
        Attribute::Blink,
        Attribute::Reverse,
        Attribute::Conceal,
        Attribute::Strike,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Attribute::Bold => "bold",
            Attribute::Faint => "faint",
            Attribute::Italic => "italic",
            Attribute::Underline => "underline",
            Attribute::Blink => "blink",
            Attribute::Reverse => "reverse",
            Attribute::Conceal => "conceal",
            Attribute::Strike => "strike",
        }
    }

    /// Name of the switch-off form, e.g. `"unbold"`.
    pub fn negated_name(self) -> &'static str {
        match self {
            Attribute::Bold => "unbold",
            Attribute::Faint => "unfaint",
            Attribute::Italic => "unitalic",
            Attribute::Underline => "ununderline",
            Attribute::Blink => "unblink",
            Attribute::Reverse => "unreverse",
            Attribute::Conceal => "unconceal",
            Attribute::Strike => "unstrike",
        }
    }
}

/// An attribute switched on (`bold`) or off (`unbold`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Toggle {
    attribute: Attribute,
    on: bool,
}

impl Toggle {
    pub fn on(attribute: Attribute) -> Self {
        Self {
            attribute,
            on: true,
        }
    }

    pub fn off(attribute: Attribute) -> Self {
        Self {
            attribute,
            on: false,
        }
    }

    pub fn attribute(self) -> Attribute {
        self.attribute
    }

    pub fn is_on(self) -> bool {
        self.on
    }

    #[must_use]
    pub fn inverse(self) -> Self {
        Self {
            attribute: self.attribute,
            on: !self.on,
        }
    }

    pub fn name(self) -> &'static str {
        if self.on {
            self.attribute.name()
        } else {
            self.attribute.negated_name()
        }
    }

    pub fn escape(self) -> Escape {
        registry::toggle_escape(self)
    }
}

impl From<Attribute> for Toggle {
    fn from(attribute: Attribute) -> Self {
        Toggle::on(attribute)
    }
}

/// A resolved style: an optional foreground, an optional background and an
/// ordered list of attribute toggles.
///
/// Unset colors leave whatever encloses the styled text in place. Applying a
/// style never fails, unlike applying a [`StyleSpec`](crate::StyleSpec)
/// whose names still need resolving.
///
/// # Example
///
/// ```rust
/// use outstanding_ansi::{Color, Style};
///
/// let alert = Style::new().fg(Color::Red).bold();
/// assert_eq!(alert.apply_to("fire").render(), "\x1b[31m\x1b[1mfire\x1b[21m\x1b[39m");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Style {
    foreground: Option<Color>,
    background: Option<Color>,
    toggles: Vec<Toggle>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn fg(mut self, color: Color) -> Self {
        self.foreground = Some(color);
        self
    }

    #[must_use]
    pub fn bg(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Adds an attribute toggle; toggles apply in the order they are added.
    #[must_use]
    pub fn toggle<T: Into<Toggle>>(mut self, toggle: T) -> Self {
        self.toggles.push(toggle.into());
        self
    }

    #[must_use]
    pub fn bold(self) -> Self {
        self.toggle(Attribute::Bold)
    }

    #[must_use]
    pub fn faint(self) -> Self {
        self.toggle(Attribute::Faint)
    }

    #[must_use]
    pub fn italic(self) -> Self {
        self.toggle(Attribute::Italic)
    }

    #[must_use]
    pub fn underline(self) -> Self {
        self.toggle(Attribute::Underline)
    }

    #[must_use]
    pub fn blink(self) -> Self {
        self.toggle(Attribute::Blink)
    }

    #[must_use]
    pub fn reverse(self) -> Self {
        self.toggle(Attribute::Reverse)
    }

    #[must_use]
    pub fn conceal(self) -> Self {
        self.toggle(Attribute::Conceal)
    }

    #[must_use]
    pub fn strike(self) -> Self {
        self.toggle(Attribute::Strike)
    }

    pub fn foreground(&self) -> Option<Color> {
        self.foreground
    }

    pub fn background(&self) -> Option<Color> {
        self.background
    }

    pub fn toggles(&self) -> &[Toggle] {
        &self.toggles
    }

    /// True if applying this style changes nothing.
    pub fn is_empty(&self) -> bool {
        self.foreground.is_none() && self.background.is_none() && self.toggles.is_empty()
    }

    /// Wraps `text` in this style.
    pub fn apply_to<T: Into<StyledText>>(&self, text: T) -> StyledText {
        text.into().styled(self)
    }
}
