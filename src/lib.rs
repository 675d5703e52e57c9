//! # folio
//!
//! A live document-template preview engine: typed fields, static bindings,
//! reactive page rendering.
//!
//! folio models an A4 template editor as a pure state engine. Every control
//! is a declared field, every field reaches the preview through an
//! exhaustively enumerated binding table, and every edit arrives as a
//! message that produces typed patches over a retained node tree. A host
//! surface (web view, printer pipeline) only has to replay the patches.
//!
//! ## Core Systems
//!
//! - **[`field`]** — Field registry and the field → preview binding table
//! - **[`preview`]** — Slotmap-backed preview tree with the standard A4 page
//! - **[`style`]** — Value tokenizer, color parsing, partial style resolution
//! - **[`visibility`]** — Row/field/section/logo toggle domains
//! - **[`arc`]** — Curved-label geometry for the college name
//! - **[`background`]** — Background color/opacity/image composition
//! - **[`border`]** — Decorative page border styles
//! - **[`media`]** — File-to-data-URI encoding and remote URL vetting
//! - **[`event`]** — Messages, envelopes, queue-based dispatch
//! - **[`engine`]** — The [`Editor`](engine::Editor) tying everything together
//! - **[`geometry`]** — Page dimensions and responsive fit scaling
//! - **[`testing`]** — Headless [`Pilot`](testing::Pilot) and snapshot helpers

// Foundation
pub mod geometry;

// Core systems
pub mod field;
pub mod preview;
pub mod style;

// Per-concern state controllers
pub mod arc;
pub mod background;
pub mod border;
pub mod media;
pub mod visibility;

// Events
pub mod event;

// Engine
pub mod engine;

// Test harness
pub mod testing;
