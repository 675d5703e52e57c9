//! Field declarations and the field → preview-node binding topology.

pub mod binding;
pub mod registry;

pub use binding::{Binding, BindingTable, ConfigError, Transform};
pub use registry::{FieldKind, FieldRegistry, FieldSpec};
