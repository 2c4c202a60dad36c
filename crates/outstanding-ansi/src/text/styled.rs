//! Immutable styled text and its nesting-aware composition.
//!
//! A [`StyledText`] is a small tree: plain leaves, styled wrappers,
//! concatenations and interpolations. Nothing is rendered until
//! [`StyledText::render`] walks the tree with an explicit ambient
//! [`StyleState`]. Each piece of text is emitted in the state its ancestors
//! put it in, and only the delta between consecutive states is written. This
//! is what makes the close of an inner style restore the enclosing style
//! instead of resetting the terminal:
//!
//! ```rust
//! use outstanding_ansi::{Color, Style, StyledText};
//!
//! let blue = Style::new().fg(Color::Blue);
//! let you = Style::new().fg(Color::Red).apply_to("You");
//! let text = blue.apply_to(StyledText::plain("Hello, Are ") + you + " Well");
//!
//! assert_eq!(
//!     text.render(),
//!     "\x1b[34mHello, Are \x1b[31mYou\x1b[34m Well\x1b[39m"
//! );
//! ```
//!
//! Once a value has been flattened to a `String` (through `format!` or
//! [`StyledText::render`]), its escapes are opaque characters. Styling that
//! string again only affects its endpoints:
//!
//! ```rust
//! use outstanding_ansi::{Color, Style};
//!
//! let blue = Style::new().fg(Color::Blue);
//! let you = Style::new().fg(Color::Red).apply_to("You");
//! let text = blue.apply_to(format!("Hello, Are {} Well", you));
//!
//! assert_eq!(
//!     text.render(),
//!     "\x1b[34mHello, Are \x1b[31mYou\x1b[39m Well\x1b[39m"
//! );
//! ```

use std::fmt::{self, Write as _};
use std::ops::Add;
use std::sync::Arc;

use super::output::OutputMode;
use super::state::StyleState;
use crate::style::{Error, Result, Style, StyleSpec};

const PLACEHOLDER: &str = "{}";

#[derive(Debug)]
enum Node {
    Plain(String),
    Styled {
        style: Style,
        inner: StyledText,
    },
    Concat(StyledText, StyledText),
    /// `pieces` has exactly one more entry than `args`.
    Interpolated {
        pieces: Vec<String>,
        args: Vec<StyledText>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Edge {
    Leading,
    Trailing,
}

/// Text wrapped in styles, composable without losing track of them.
///
/// Values are immutable and cheap to clone: composition shares subtrees
/// instead of copying them, and values can be sent across threads.
///
/// # Example
///
/// ```rust
/// use outstanding_ansi::{StyleSpec, StyledText};
///
/// let you = StyleSpec::new().fg("red").apply_to("You").unwrap();
/// assert_eq!(you.render(), "\x1b[31mYou\x1b[39m");
///
/// let bold = StyleSpec::new().attr("bold").apply_to("You").unwrap();
/// assert_eq!(bold.render(), "\x1b[1mYou\x1b[21m");
///
/// assert_eq!(StyledText::plain("as is").render(), "as is");
/// ```
#[derive(Debug, Clone)]
pub struct StyledText {
    node: Arc<Node>,
    /// True when rendering produces nothing under any ambient state.
    blank: bool,
}

impl StyledText {
    fn from_node(node: Node) -> Self {
        let blank = match &node {
            Node::Plain(text) => text.is_empty(),
            Node::Styled { .. } => false,
            Node::Concat(left, right) => left.blank && right.blank,
            Node::Interpolated { pieces, args } => {
                pieces.iter().all(String::is_empty) && args.iter().all(|arg| arg.blank)
            }
        };
        Self {
            node: Arc::new(node),
            blank,
        }
    }

    /// Wraps plain characters; they take whatever style encloses them.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::from_node(Node::Plain(text.into()))
    }

    /// Wraps this text in `style`.
    ///
    /// Channels the style leaves unset, and everything styled inside this
    /// text, stay as they are.
    #[must_use]
    pub fn styled(&self, style: &Style) -> Self {
        Self::from_node(Node::Styled {
            style: style.clone(),
            inner: self.clone(),
        })
    }

    /// Resolves `spec` and wraps this text in it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownStyleName`] for any name not in the registry.
    pub fn with_spec(&self, spec: &StyleSpec) -> Result<Self> {
        Ok(self.styled(&spec.resolve()?))
    }

    /// Returns this text followed by `other`, both in the same enclosing
    /// style.
    ///
    /// Composition is associative: any grouping of the same sequence of
    /// values renders identically.
    #[must_use]
    pub fn concat(&self, other: &StyledText) -> Self {
        Self::from_node(Node::Concat(self.clone(), other.clone()))
    }

    /// Concatenates all values left to right. An empty input yields empty
    /// plain text.
    pub fn join<I>(parts: I) -> Self
    where
        I: IntoIterator<Item = StyledText>,
    {
        parts
            .into_iter()
            .reduce(|joined, part| joined.concat(&part))
            .unwrap_or_else(|| Self::plain(""))
    }

    /// Substitutes each `{}` in `template` with the matching argument.
    ///
    /// Arguments stay structured values, so their closes restore whatever
    /// style ends up enclosing the template. This is the composable
    /// counterpart of `format!`.
    ///
    /// ```rust
    /// use outstanding_ansi::{Color, Style, StyledText};
    ///
    /// let you = Style::new().fg(Color::Red).apply_to("You");
    /// let text = StyledText::interpolate("Hello, Are {} Well", &[you]).unwrap();
    /// let text = Style::new().fg(Color::Blue).apply_to(text);
    ///
    /// assert_eq!(
    ///     text.render(),
    ///     "\x1b[34mHello, Are \x1b[31mYou\x1b[34m Well\x1b[39m"
    /// );
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::PlaceholderMismatch`] if the number of placeholders
    /// differs from the number of arguments.
    pub fn interpolate(template: &str, args: &[StyledText]) -> Result<Self> {
        let pieces: Vec<String> = template.split(PLACEHOLDER).map(str::to_string).collect();
        let placeholders = pieces.len() - 1;
        if placeholders != args.len() {
            return Err(Error::PlaceholderMismatch {
                placeholders,
                arguments: args.len(),
            });
        }
        Ok(Self::from_node(Node::Interpolated {
            pieces,
            args: args.to_vec(),
        }))
    }

    /// True if this value holds neither characters nor styles, so it renders
    /// to nothing in any context.
    pub fn is_empty(&self) -> bool {
        self.blank
    }

    /// The style in effect at the first character, relative to the terminal
    /// default.
    ///
    /// Channels an outer style selects report that style's value; the others
    /// come from the text inside it. `blue(red("You"))` leads with blue.
    pub fn leading_state(&self) -> StyleState {
        self.edge_state(&StyleState::new(), Edge::Leading)
            .unwrap_or_default()
    }

    /// The style in effect at the last character, relative to the terminal
    /// default, with the same outer-style rule as [`leading_state`].
    ///
    /// [`leading_state`]: StyledText::leading_state
    pub fn trailing_state(&self) -> StyleState {
        self.edge_state(&StyleState::new(), Edge::Trailing)
            .unwrap_or_default()
    }

    /// Renders to ANSI text for a terminal.
    pub fn render(&self) -> String {
        self.render_with(OutputMode::Term)
    }

    /// Renders in the given output mode.
    pub fn render_with(&self, mode: OutputMode) -> String {
        let (out, _) = self.render_with_ambient(&StyleState::new(), mode);
        tracing::trace!(?mode, len = out.len(), "rendered styled text");
        out
    }

    /// Renders as if the terminal were already in `ambient`.
    ///
    /// Returns the output, which ends by switching back to `ambient`, and
    /// the terminal state just before that final switch.
    pub fn render_with_ambient(
        &self,
        ambient: &StyleState,
        mode: OutputMode,
    ) -> (String, StyleState) {
        let mut writer = Writer::new(mode, ambient.clone());
        self.walk(ambient, &mut writer);
        let trailing = writer.current.clone();
        writer.switch_to(ambient);
        (writer.out, trailing)
    }

    /// The characters without any escapes.
    pub fn plain_text(&self) -> String {
        self.render_with(OutputMode::Text)
    }

    /// Display width in terminal columns.
    pub fn width(&self) -> usize {
        console::measure_text_width(&self.render())
    }

    fn walk(&self, state: &StyleState, writer: &mut Writer) {
        match &*self.node {
            Node::Plain(text) => {
                if !text.is_empty() {
                    writer.write(state, text);
                }
            }
            Node::Styled { style, inner } => {
                // The style's own codes are always written, even when the
                // inner text immediately overrides them or is empty.
                let inner_state = state.apply(style);
                writer.switch_to(&inner_state);
                inner.walk(&inner_state, writer);
                writer.switch_to(&inner_state);
            }
            Node::Concat(left, right) => {
                left.walk(state, writer);
                right.walk(state, writer);
            }
            Node::Interpolated { pieces, args } => {
                for (index, piece) in pieces.iter().enumerate() {
                    if !piece.is_empty() {
                        writer.write(state, piece);
                    }
                    if let Some(arg) = args.get(index) {
                        arg.walk(state, writer);
                    }
                }
            }
        }
    }

    /// State of the first or last written run under `state`, or `None` if
    /// nothing would be written.
    fn edge_state(&self, state: &StyleState, edge: Edge) -> Option<StyleState> {
        match &*self.node {
            Node::Plain(text) => (!text.is_empty()).then(|| state.clone()),
            Node::Styled { style, inner } => {
                let inner_state = state.apply(style);
                let edge_state = inner
                    .edge_state(&inner_state, edge)
                    .unwrap_or_else(|| inner_state.clone());
                Some(edge_state.apply(style))
            }
            Node::Concat(left, right) => match edge {
                Edge::Leading => left
                    .edge_state(state, edge)
                    .or_else(|| right.edge_state(state, edge)),
                Edge::Trailing => right
                    .edge_state(state, edge)
                    .or_else(|| left.edge_state(state, edge)),
            },
            Node::Interpolated { pieces, args } => {
                let piece_state = |piece: &String| (!piece.is_empty()).then(|| state.clone());
                let mut runs = pieces
                    .iter()
                    .enumerate()
                    .flat_map(|(index, piece)| {
                        [
                            piece_state(piece),
                            args.get(index).and_then(|arg| arg.edge_state(state, edge)),
                        ]
                    })
                    .flatten();
                match edge {
                    Edge::Leading => runs.next(),
                    Edge::Trailing => runs.last(),
                }
            }
        }
    }
}

/// Accumulates output and the terminal state it leaves behind.
struct Writer {
    mode: OutputMode,
    out: String,
    current: StyleState,
}

impl Writer {
    fn new(mode: OutputMode, current: StyleState) -> Self {
        Self {
            mode,
            out: String::new(),
            current,
        }
    }

    fn write(&mut self, state: &StyleState, text: &str) {
        self.switch_to(state);
        self.out.push_str(text);
    }

    fn switch_to(&mut self, state: &StyleState) {
        if self.current == *state {
            return;
        }
        for escape in self.current.transition(state) {
            self.mode.write_escape(&escape, &mut self.out);
        }
        self.current = state.clone();
    }
}

impl Default for StyledText {
    fn default() -> Self {
        Self::plain("")
    }
}

/// Writes terminal text. A width pads by visible columns, so `{:>10}` lines
/// up styled and plain values alike; precision is ignored.
impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rendered = self.render();
        let Some(target) = f.width() else {
            return f.write_str(&rendered);
        };
        let padding = target.saturating_sub(console::measure_text_width(&rendered));
        let (before, after) = match f.align() {
            Some(fmt::Alignment::Right) => (padding, 0),
            Some(fmt::Alignment::Center) => (padding / 2, padding - padding / 2),
            Some(fmt::Alignment::Left) | None => (0, padding),
        };
        let fill = f.fill();
        for _ in 0..before {
            f.write_char(fill)?;
        }
        f.write_str(&rendered)?;
        for _ in 0..after {
            f.write_char(fill)?;
        }
        Ok(())
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        Self::plain(text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        Self::plain(text)
    }
}

impl From<&StyledText> for StyledText {
    fn from(text: &StyledText) -> Self {
        text.clone()
    }
}

impl Add for StyledText {
    type Output = StyledText;

    fn add(self, rhs: StyledText) -> StyledText {
        self.concat(&rhs)
    }
}

impl Add<&StyledText> for StyledText {
    type Output = StyledText;

    fn add(self, rhs: &StyledText) -> StyledText {
        self.concat(rhs)
    }
}

impl Add<&str> for StyledText {
    type Output = StyledText;

    fn add(self, rhs: &str) -> StyledText {
        self.concat(&StyledText::plain(rhs))
    }
}

impl Add<StyledText> for &str {
    type Output = StyledText;

    fn add(self, rhs: StyledText) -> StyledText {
        StyledText::plain(self).concat(&rhs)
    }
}

impl FromIterator<StyledText> for StyledText {
    fn from_iter<I: IntoIterator<Item = StyledText>>(iter: I) -> Self {
        Self::join(iter)
    }
}
