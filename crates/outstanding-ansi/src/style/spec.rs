//! Name-based style specifications.

use serde::{Deserialize, Serialize};

use super::error::Result;
use super::registry::{self, Table};
use super::value::Style;
use crate::text::StyledText;

/// A style selected by registry names, as it appears in configuration.
///
/// Names are resolved when the spec is applied, so an unknown name surfaces
/// as [`Error::UnknownStyleName`](crate::Error::UnknownStyleName) at that
/// point.
///
/// Specs deserialize from configuration with either the short or the long
/// field names:
///
/// ```rust
/// use outstanding_ansi::StyleSpec;
///
/// let spec: StyleSpec = serde_json::from_str(
///     r#"{ "fg": "black", "background": "blue", "attrs": ["bold"] }"#,
/// ).unwrap();
/// assert_eq!(spec, StyleSpec::new().fg("black").bg("blue").attr("bold"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StyleSpec {
    #[serde(default, alias = "foreground", skip_serializing_if = "Option::is_none")]
    pub fg: Option<String>,
    #[serde(default, alias = "background", skip_serializing_if = "Option::is_none")]
    pub bg: Option<String>,
    #[serde(default, alias = "attributes", skip_serializing_if = "Vec::is_empty")]
    pub attrs: Vec<String>,
}

impl StyleSpec {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn fg(mut self, name: impl Into<String>) -> Self {
        self.fg = Some(name.into());
        self
    }

    #[must_use]
    pub fn bg(mut self, name: impl Into<String>) -> Self {
        self.bg = Some(name.into());
        self
    }

    #[must_use]
    pub fn attr(mut self, name: impl Into<String>) -> Self {
        self.attrs.push(name.into());
        self
    }

    /// Resolves every name against the registry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownStyleName`](crate::Error::UnknownStyleName)
    /// naming the first table and key that failed.
    pub fn resolve(&self) -> Result<Style> {
        let mut style = Style::new();
        if let Some(name) = &self.fg {
            style = style.fg(registry::resolve_color(Table::Foreground, name)?);
        }
        if let Some(name) = &self.bg {
            style = style.bg(registry::resolve_color(Table::Background, name)?);
        }
        for name in &self.attrs {
            style = style.toggle(registry::resolve_toggle(name)?);
        }
        Ok(style)
    }

    /// Resolves the spec and wraps `text` in it.
    ///
    /// # Errors
    ///
    /// Fails like [`StyleSpec::resolve`].
    pub fn apply_to<T: Into<StyledText>>(&self, text: T) -> Result<StyledText> {
        Ok(self.resolve()?.apply_to(text))
    }
}
