//! Pilot: programmatic interaction with a headless editor.
//!
//! The `Pilot` wraps an [`Editor`](crate::engine::Editor) and provides methods
//! to simulate user input (field edits, toggles, uploads, resizes), process
//! messages, and inspect the resulting preview state.

use crate::engine::Editor;
use crate::event::message::{
    ArcAdjusted, BackgroundAdjusted, BackgroundImageCleared, BackgroundImageLoaded,
    BorderColorChanged, BorderStyleSelected, LabelEdited, PositionChanged, RemoteImageLinked,
    StyleChanged, TextEdited, ViewportResized, VisibilityToggled,
};
use crate::event::Envelope;
use crate::field::ConfigError;
use crate::media::FileData;
use crate::preview::Display;
use crate::style::{InlineStyle, StyleInputs};
use crate::visibility::ToggleDomain;

// ---------------------------------------------------------------------------
// Pilot
// ---------------------------------------------------------------------------

/// A headless editor driver for testing.
///
/// Each `set_*` method enqueues the corresponding message and processes the
/// queue immediately, so assertions read settled state.
///
/// # Examples
///
/// ```
/// use folio::testing::Pilot;
///
/// let mut pilot = Pilot::new().unwrap();
/// pilot.set_text("in-univ", "Acme University");
/// assert_eq!(pilot.node_text("out-univ"), Some("Acme University".to_owned()));
/// ```
pub struct Pilot {
    editor: Editor,
}

impl Pilot {
    /// Create a pilot over the standard document.
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            editor: Editor::new()?,
        })
    }

    /// The wrapped editor, for anything the convenience API doesn't cover.
    pub fn editor(&self) -> &Editor {
        &self.editor
    }

    /// Mutable access to the wrapped editor.
    pub fn editor_mut(&mut self) -> &mut Editor {
        &mut self.editor
    }

    // ── Input simulation ─────────────────────────────────────────────

    /// Edit a text field.
    pub fn set_text(&mut self, field: &str, value: &str) {
        self.send(Envelope::new(TextEdited::new(value), field));
    }

    /// Edit a detail-row label.
    pub fn set_label(&mut self, field: &str, value: &str) {
        self.send(Envelope::new(LabelEdited::new(value), field));
    }

    /// Change a style group's controls.
    pub fn set_style(&mut self, field: &str, inputs: StyleInputs) {
        self.send(Envelope::new(StyleChanged::new(inputs), field));
    }

    /// Move a position controller.
    pub fn set_position(&mut self, field: &str, offset: &str) {
        self.send(Envelope::new(PositionChanged::new(offset), field));
    }

    /// Press a visibility toggle.
    pub fn toggle(&mut self, domain: ToggleDomain, key: &str) {
        self.send(Envelope::new(VisibilityToggled::new(domain), key));
    }

    /// Change the curve controls.
    pub fn set_arc(&mut self, depth: Option<&str>, font_size: Option<&str>) {
        self.send(Envelope::new(
            ArcAdjusted {
                depth: depth.map(str::to_owned),
                font_size: font_size.map(str::to_owned),
            },
            "adj-arc",
        ));
    }

    /// Change the background color/opacity controls.
    pub fn set_background(&mut self, color: Option<&str>, opacity: Option<&str>) {
        self.send(Envelope::new(
            BackgroundAdjusted {
                color: color.map(str::to_owned),
                opacity: opacity.map(str::to_owned),
            },
            "bg-color",
        ));
    }

    /// Install a background image from an already-encoded data URI.
    pub fn set_bg_image(&mut self, data_uri: &str, file_name: &str) {
        self.send(Envelope::new(
            BackgroundImageLoaded::new(data_uri, file_name),
            "bg-image-file",
        ));
    }

    /// Clear the background image.
    pub fn clear_bg_image(&mut self) {
        self.send(Envelope::new(BackgroundImageCleared, "bg-image-file"));
    }

    /// Select a border style.
    pub fn set_border_style(&mut self, style: &str) {
        self.send(Envelope::new(BorderStyleSelected::new(style), "border-style"));
    }

    /// Change the border color.
    pub fn set_border_color(&mut self, color: &str) {
        self.send(Envelope::new(BorderColorChanged::new(color), "border-color"));
    }

    /// Enter a remote URL for an image field.
    pub fn link_remote(&mut self, field: &str, url: &str) {
        self.send(Envelope::new(RemoteImageLinked::new(url), field));
    }

    /// Resize the preview container.
    pub fn resize(&mut self, container_width: f64) {
        self.send(Envelope::new(ViewportResized { container_width }, "viewport"));
    }

    /// Upload a file to an image field (async read to a data URI).
    pub async fn upload(&mut self, field: &str, file: FileData) {
        self.editor.load_image(field, file).await;
    }

    fn send(&mut self, envelope: Envelope) {
        self.editor.push(envelope);
        self.editor.process();
    }

    // ── State inspection ─────────────────────────────────────────────

    /// Text content of a preview node.
    pub fn node_text(&self, dom_id: &str) -> Option<String> {
        self.editor.node(dom_id).map(|n| n.text.clone())
    }

    /// Display state of a preview node.
    pub fn node_display(&self, dom_id: &str) -> Option<Display> {
        self.editor.node(dom_id).map(|n| n.display)
    }

    /// Image source of a preview node.
    pub fn node_image(&self, dom_id: &str) -> Option<String> {
        self.editor.node(dom_id).and_then(|n| n.image_src.clone())
    }

    /// Accumulated inline style of a preview node.
    pub fn node_style(&self, dom_id: &str) -> Option<InlineStyle> {
        self.editor.node(dom_id).map(|n| n.style.clone())
    }

    /// Marker classes of a preview node.
    pub fn node_classes(&self, dom_id: &str) -> Option<Vec<String>> {
        self.editor.node(dom_id).map(|n| n.classes.clone())
    }

    /// Path description of a preview node.
    pub fn node_path(&self, dom_id: &str) -> Option<String> {
        self.editor.node(dom_id).and_then(|n| n.path_data.clone())
    }
}

// ===========================================================================
// Tests
// ===========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pilot_mirrors_text() {
        let mut pilot = Pilot::new().unwrap();
        pilot.set_text("in-coll", "Acme College");
        assert_eq!(pilot.node_text("out-coll-path"), Some("Acme College".into()));
    }

    #[test]
    fn pilot_toggles() {
        let mut pilot = Pilot::new().unwrap();
        pilot.toggle(ToggleDomain::Logo, "univ");
        assert_eq!(pilot.node_display("univ-logo-wrapper"), Some(Display::None));
    }

    #[test]
    fn pilot_reads_missing_node_as_none() {
        let pilot = Pilot::new().unwrap();
        assert!(pilot.node_text("out-ghost").is_none());
        assert!(pilot.node_style("out-ghost").is_none());
    }

    #[tokio::test]
    async fn pilot_uploads() {
        let mut pilot = Pilot::new().unwrap();
        let file = FileData::new("logo.gif", b"GIF89a".to_vec());
        pilot.upload("f-univ", file).await;
        assert!(pilot
            .node_image("img-univ")
            .unwrap()
            .starts_with("data:image/gif;base64,"));
    }
}
