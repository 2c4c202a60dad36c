//! Style registry and style values.
//!
//! This module provides the styling primitives:
//!
//! - [`Table`], [`StyleCode`] and the `lookup_*` functions: the static
//!   name-to-escape registry
//! - [`Escape`]: a single registry entry as a value
//! - [`Color`], [`Attribute`], [`Toggle`], [`Style`]: typed styles
//! - [`StyleSpec`]: styles selected by name, e.g. from configuration
//! - [`Error`]: lookup and composition errors

mod error;
mod escape;
mod registry;
mod spec;
mod value;

pub use error::{Error, Result};
pub use escape::Escape;
pub use registry::{
    available_attributes, available_backgrounds, available_foregrounds, lookup_attribute,
    lookup_background, lookup_control, lookup_foreground, names, StyleCode, Table,
};
pub use spec::StyleSpec;
pub use value::{Attribute, Color, Style, Toggle};
