//! Headless testing framework: Pilot, snapshot helpers.
//!
//! Use the [`Pilot`] to programmatically drive an [`Editor`](crate::engine::Editor)
//! through its message types without wiring a host surface. Use
//! [`outline_to_string`] to capture the preview tree as plain text for
//! snapshot-style assertions.

pub mod pilot;
pub mod snapshot;

pub use pilot::Pilot;
pub use snapshot::outline_to_string;
