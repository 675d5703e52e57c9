//! Style system: control-value tokenizing, colors, inline patches, resolution.

pub mod color;
pub mod inline;
pub mod resolver;
pub mod value;

pub use color::Rgb;
pub use inline::InlineStyle;
pub use resolver::{StyleInputs, StyleResolver, StyleState};
