//! # Outstanding ANSI - composable styled terminal text
//!
//! Wrap text in ANSI colors and attributes, then combine the pieces freely:
//! when styled text ends up inside other styled text, closing the inner
//! style restores the enclosing one instead of resetting the terminal.
//!
//! ```rust
//! use outstanding_ansi::{concat, render, style, StyleSpec};
//!
//! let blue = StyleSpec::new().fg("blue");
//! let you = style("You", &StyleSpec::new().fg("red"))?;
//! let text = concat(
//!     &style("Hello, Are ", &blue)?,
//!     &concat(&you, &style(" Well", &blue)?),
//! );
//!
//! // " Well" is blue again after the red word.
//! assert_eq!(
//!     render(&text),
//!     "\x1b[34mHello, Are \x1b[31mYou\x1b[34m Well\x1b[39m"
//! );
//! # Ok::<(), outstanding_ansi::Error>(())
//! ```
//!
//! ## Building blocks
//!
//! - The **registry** ([`lookup_foreground`], [`lookup_background`],
//!   [`lookup_attribute`], [`lookup_control`], [`names`]) maps names such as
//!   `red` or `bold` to paired open/close escapes.
//! - **Styles** come as names ([`StyleSpec`], e.g. from configuration) or as
//!   typed values ([`Style`], [`Color`], [`Attribute`], [`Toggle`]).
//! - [`StyledText`] is the immutable composable value; [`OutputMode`] picks
//!   between raw escapes, plain characters and debug tags when rendering.
//!
//! ## Limitation
//!
//! Composition only works on [`StyledText`] values. Text that was already
//! flattened to a `String` (for example with `format!`) carries its escapes
//! as plain characters, and styling it again cannot restore anything inside
//! it. Use [`StyledText::interpolate`] to substitute styled values into a
//! template without flattening them.

pub mod style;
pub mod text;

pub use style::{
    available_attributes, available_backgrounds, available_foregrounds, lookup_attribute,
    lookup_background, lookup_control, lookup_foreground, names, Attribute, Color, Error, Escape,
    Result, Style, StyleCode, StyleSpec, Table, Toggle,
};
pub use text::{OutputMode, StyleState, StyledText};

/// Wraps plain characters.
pub fn plain(text: impl Into<String>) -> StyledText {
    StyledText::plain(text)
}

/// Applies a named style to plain text or to existing styled text.
///
/// # Errors
///
/// Returns [`Error::UnknownStyleName`] if the spec names an unknown color or
/// attribute.
pub fn style<T: Into<StyledText>>(source: T, spec: &StyleSpec) -> Result<StyledText> {
    spec.apply_to(source)
}

/// Returns `a` followed by `b`.
pub fn concat(a: &StyledText, b: &StyledText) -> StyledText {
    a.concat(b)
}

/// Concatenates all parts left to right.
pub fn join<I>(parts: I) -> StyledText
where
    I: IntoIterator<Item = StyledText>,
{
    StyledText::join(parts)
}

/// Renders styled text with raw ANSI escapes.
pub fn render(text: &StyledText) -> String {
    text.render()
}
