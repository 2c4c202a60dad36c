//! Styled text composition.
//!
//! - [`StyledText`]: immutable styled text with nesting-aware concatenation
//! - [`StyleState`]: the style in effect at a point of the output
//! - [`OutputMode`]: raw escapes, plain characters, or symbolic tags

mod output;
mod state;
mod styled;

pub use output::OutputMode;
pub use state::StyleState;
pub use styled::StyledText;
