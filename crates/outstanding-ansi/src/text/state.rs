//! Terminal style state and the escapes that move between states.

use crate::style::{Attribute, Color, Escape, Style, Toggle};

/// The style in effect at one point of a text stream.
///
/// The default state is the terminal default: default colors, no attributes.
/// Attributes are kept in activation order so that closing them can run in
/// reverse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StyleState {
    foreground: Color,
    background: Color,
    attributes: Vec<Attribute>,
}

impl StyleState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn foreground(&self) -> Color {
        self.foreground
    }

    pub fn background(&self) -> Color {
        self.background
    }

    /// Active attributes, oldest first.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn is_active(&self, attribute: Attribute) -> bool {
        self.attributes.contains(&attribute)
    }

    pub fn is_default(&self) -> bool {
        self.foreground.is_default() && self.background.is_default() && self.attributes.is_empty()
    }

    /// Returns the state reached by applying `style` on top of this one.
    ///
    /// Colors set by the style replace the current ones. Switching an
    /// attribute on that is already active, or off when it is not, changes
    /// nothing.
    #[must_use]
    pub fn apply(&self, style: &Style) -> StyleState {
        let mut next = self.clone();
        if let Some(color) = style.foreground() {
            next.foreground = color;
        }
        if let Some(color) = style.background() {
            next.background = color;
        }
        for toggle in style.toggles() {
            let attribute = toggle.attribute();
            if toggle.is_on() {
                if !next.is_active(attribute) {
                    next.attributes.push(attribute);
                }
            } else {
                next.attributes.retain(|active| *active != attribute);
            }
        }
        next
    }

    /// Returns the escapes that switch a terminal from this state to `to`.
    ///
    /// Closing runs first: attributes that end (most recent first), then
    /// background and foreground returning to default. Opening follows:
    /// changed foreground and background, then new attributes in activation
    /// order. Equal states need no escapes at all.
    pub fn transition(&self, to: &StyleState) -> Vec<Escape> {
        let mut escapes = Vec::new();

        for attribute in self.attributes.iter().rev() {
            if !to.is_active(*attribute) {
                escapes.push(Toggle::off(*attribute).escape());
            }
        }

        let background_changed = self.background != to.background;
        let foreground_changed = self.foreground != to.foreground;

        if background_changed && to.background.is_default() {
            escapes.push(to.background.background_escape());
        }
        if foreground_changed && to.foreground.is_default() {
            escapes.push(to.foreground.foreground_escape());
        }
        if foreground_changed && !to.foreground.is_default() {
            escapes.push(to.foreground.foreground_escape());
        }
        if background_changed && !to.background.is_default() {
            escapes.push(to.background.background_escape());
        }

        for attribute in &to.attributes {
            if !self.is_active(*attribute) {
                escapes.push(Toggle::on(*attribute).escape());
            }
        }

        escapes
    }
}
