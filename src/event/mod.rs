//! Event system: messages, envelopes, dispatch.

pub mod handler;
pub mod message;

pub use handler::EventDispatcher;
pub use message::{
    ArcAdjusted, BackgroundAdjusted, BackgroundImageCleared, BackgroundImageLoaded,
    BorderColorChanged, BorderStyleSelected, Envelope, ImageLoaded, LabelEdited, Message,
    PositionChanged, RemoteImageLinked, StyleChanged, TextEdited, ViewportResized,
    VisibilityToggled,
};
