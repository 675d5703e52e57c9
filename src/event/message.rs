//! Message trait, envelope, and editor messages.
//!
//! The [`Message`] trait is object-safe and supports downcasting via `Any`.
//! [`Envelope`] wraps a boxed message with the source field id it came from.
//! One message type exists per editor operation; the engine routes on the
//! source field through the binding table, then downcasts to decide what the
//! payload means.

use std::any::Any;

use crate::style::StyleInputs;
use crate::visibility::ToggleDomain;

// ---------------------------------------------------------------------------
// Message trait
// ---------------------------------------------------------------------------

/// Object-safe message trait.
///
/// All messages must implement `as_any` for downcasting and `message_name`
/// for debug/logging purposes.
pub trait Message: Send + 'static {
    /// Upcast to `&dyn Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Human-readable name for this message type.
    fn message_name(&self) -> &str;
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

/// Wraps a boxed message with the id of the field (or control) it came from.
pub struct Envelope {
    /// The message payload.
    pub message: Box<dyn Message>,
    /// The field id that produced this message. Messages without a field
    /// origin (viewport resize, border controls) use the control's own id.
    pub source: String,
}

impl Envelope {
    /// Create a new envelope from a source field.
    pub fn new(message: impl Message, source: impl Into<String>) -> Self {
        Self {
            message: Box::new(message),
            source: source.into(),
        }
    }

    /// Attempt to downcast the message to a concrete type.
    pub fn downcast_ref<T: Message + 'static>(&self) -> Option<&T> {
        self.message.as_any().downcast_ref::<T>()
    }
}

impl std::fmt::Debug for Envelope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Envelope")
            .field("message_name", &self.message.message_name())
            .field("source", &self.source)
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Editor messages
// ---------------------------------------------------------------------------

macro_rules! impl_message {
    ($ty:ty, $name:literal) => {
        impl Message for $ty {
            fn as_any(&self) -> &dyn Any {
                self
            }
            fn message_name(&self) -> &str {
                $name
            }
        }
    };
}

/// A text field's value changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdited {
    pub value: String,
}

impl TextEdited {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}
impl_message!(TextEdited, "TextEdited");

/// A detail-row label's text changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEdited {
    pub value: String,
}

impl LabelEdited {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}
impl_message!(LabelEdited, "LabelEdited");

/// An uploaded image finished reading into a data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLoaded {
    pub data_uri: String,
}

impl ImageLoaded {
    pub fn new(data_uri: impl Into<String>) -> Self {
        Self {
            data_uri: data_uri.into(),
        }
    }
}
impl_message!(ImageLoaded, "ImageLoaded");

/// A remote image URL was entered for an image field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteImageLinked {
    pub url: String,
}

impl RemoteImageLinked {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}
impl_message!(RemoteImageLinked, "RemoteImageLinked");

/// One of a style group's controls changed. Carries the raw values of
/// whichever inputs are present; absent inputs stay untouched.
#[derive(Debug, Clone, Default)]
pub struct StyleChanged {
    pub inputs: StyleInputs,
}

impl StyleChanged {
    pub fn new(inputs: StyleInputs) -> Self {
        Self { inputs }
    }
}
impl_message!(StyleChanged, "StyleChanged");

/// A position controller's value changed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionChanged {
    pub offset: String,
}

impl PositionChanged {
    pub fn new(offset: impl Into<String>) -> Self {
        Self {
            offset: offset.into(),
        }
    }
}
impl_message!(PositionChanged, "PositionChanged");

/// A visibility toggle was pressed. The envelope source is the toggle key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityToggled {
    pub domain: ToggleDomain,
}

impl VisibilityToggled {
    pub fn new(domain: ToggleDomain) -> Self {
        Self { domain }
    }
}
impl_message!(VisibilityToggled, "VisibilityToggled");

/// The curve controls changed. Raw values of both controls as currently held.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArcAdjusted {
    pub depth: Option<String>,
    pub font_size: Option<String>,
}
impl_message!(ArcAdjusted, "ArcAdjusted");

/// The background color or opacity controls changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackgroundAdjusted {
    pub color: Option<String>,
    pub opacity: Option<String>,
}
impl_message!(BackgroundAdjusted, "BackgroundAdjusted");

/// A background image finished reading into a data URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundImageLoaded {
    pub data_uri: String,
    /// File name shown in the picker readout.
    pub file_name: String,
}

impl BackgroundImageLoaded {
    pub fn new(data_uri: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            data_uri: data_uri.into(),
            file_name: file_name.into(),
        }
    }
}
impl_message!(BackgroundImageLoaded, "BackgroundImageLoaded");

/// The background image was cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BackgroundImageCleared;
impl_message!(BackgroundImageCleared, "BackgroundImageCleared");

/// A border style was selected. Carries the raw control value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderStyleSelected {
    pub style: String,
}

impl BorderStyleSelected {
    pub fn new(style: impl Into<String>) -> Self {
        Self {
            style: style.into(),
        }
    }
}
impl_message!(BorderStyleSelected, "BorderStyleSelected");

/// The border color control changed. Carries the raw control value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BorderColorChanged {
    pub color: String,
}

impl BorderColorChanged {
    pub fn new(color: impl Into<String>) -> Self {
        Self {
            color: color.into(),
        }
    }
}
impl_message!(BorderColorChanged, "BorderColorChanged");

/// The editor viewport was resized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportResized {
    /// Width of the preview container, in CSS pixels.
    pub container_width: f64,
}
impl_message!(ViewportResized, "ViewportResized");

// ===========================================================================
// Tests
// ===========================================================================
