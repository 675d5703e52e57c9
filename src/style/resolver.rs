//! Style resolution: per-target state and partial-update patches.
//!
//! Every styleable target keeps a [`StyleState`] for the lifetime of the
//! session, mutated only by user-issued style-change events. A change event
//! carries up to three independent raw inputs (color, font, size); only the
//! ones that are present *and* parse cleanly are applied — absent or invalid
//! inputs leave the previously resolved value untouched.

use std::collections::HashMap;

use super::color::Rgb;
use super::inline::InlineStyle;
use super::value;

/// The raw inputs of one style-change event. Each is the control's string
/// value, or `None` when that control is absent from the document variant.
#[derive(Debug, Clone, Default)]
pub struct StyleInputs {
    pub color: Option<String>,
    pub font: Option<String>,
    pub size: Option<String>,
}

impl StyleInputs {
    /// An event with all three inputs absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the color input (builder).
    pub fn with_color(mut self, raw: impl Into<String>) -> Self {
        self.color = Some(raw.into());
        self
    }

    /// Set the font input (builder).
    pub fn with_font(mut self, raw: impl Into<String>) -> Self {
        self.font = Some(raw.into());
        self
    }

    /// Set the size input (builder).
    pub fn with_size(mut self, raw: impl Into<String>) -> Self {
        self.size = Some(raw.into());
        self
    }
}

/// Resolved style of one target: what the session has accumulated so far.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleState {
    pub color: Option<Rgb>,
    pub font_family: Option<String>,
    /// Always positive when set.
    pub font_size_px: Option<f64>,
    /// Signed vertical offset in pixels.
    pub offset_px: f64,
}

/// Computes effective style patches from style-change events.
///
/// State is keyed by target node id and persists until the resolver is
/// dropped (session lifetime; reset only by rebuilding the editor).
#[derive(Debug, Default)]
pub struct StyleResolver {
    states: HashMap<String, StyleState>,
}

impl StyleResolver {
    /// Create a resolver with no accumulated state.
    pub fn new() -> Self {
        Self::default()
    }

    /// The accumulated state for a target, if any event has touched it.
    pub fn state(&self, target: &str) -> Option<&StyleState> {
        self.states.get(target)
    }

    /// Resolve a style-change event for `target` into an inline patch.
    ///
    /// Only present, cleanly parsed inputs make it into the patch and the
    /// stored state. Sizes must be positive. When `svg_text` is set, a color
    /// update also writes the vector fill — the curved label renders through
    /// an SVG text path, and fill is the property that actually paints it.
    pub fn apply(&mut self, target: &str, inputs: &StyleInputs, svg_text: bool) -> InlineStyle {
        let state = self.states.entry(target.to_owned()).or_default();
        let mut patch = InlineStyle::new();

        if let Some(color) = inputs.color.as_deref().and_then(value::parse_color) {
            state.color = Some(color);
            patch.color = Some(color.hex());
            if svg_text {
                patch.fill = Some(color.hex());
            }
        }
        if let Some(family) = inputs.font.as_deref().and_then(value::parse_font_stack) {
            state.font_family = Some(family.clone());
            patch.font_family = Some(family);
        }
        if let Some(size) = inputs
            .size
            .as_deref()
            .and_then(value::parse_px)
            .filter(|px| *px > 0.0)
        {
            state.font_size_px = Some(size);
            patch.font_size_px = Some(size);
        }

        patch
    }

    /// Resolve a position-offset event for `target`.
    ///
    /// Returns `None` (state unchanged) when the raw value doesn't parse as a
    /// signed pixel length.
    pub fn offset(&mut self, target: &str, raw: &str) -> Option<InlineStyle> {
        let offset = value::parse_px(raw)?;
        let state = self.states.entry(target.to_owned()).or_default();
        state.offset_px = offset;

        let mut patch = InlineStyle::new();
        patch.translate_y_px = Some(offset);
        Some(patch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_all_three_inputs() {
        let mut resolver = StyleResolver::new();
        let inputs = StyleInputs::new()
            .with_color("#0000ff")
            .with_font("serif")
            .with_size("12");
        let patch = resolver.apply("out-univ", &inputs, false);

        assert_eq!(patch.color, Some("#0000ff".into()));
        assert_eq!(patch.fill, None);
        assert_eq!(patch.font_family, Some("serif".into()));
        assert_eq!(patch.font_size_px, Some(12.0));

        let state = resolver.state("out-univ").unwrap();
        assert_eq!(state.color, Some(Rgb::new(0, 0, 255)));
        assert_eq!(state.font_family, Some("serif".into()));
        assert_eq!(state.font_size_px, Some(12.0));
    }

    #[test]
    fn partial_update_keeps_prior_state() {
        let mut resolver = StyleResolver::new();
        let full = StyleInputs::new()
            .with_color("#0000ff")
            .with_font("serif")
            .with_size("12");
        resolver.apply("out-univ", &full, false);

        // Size-only event: color and font stay resolved as before.
        let size_only = StyleInputs::new().with_size("14");
        let patch = resolver.apply("out-univ", &size_only, false);
        assert!(patch.color.is_none());
        assert!(patch.font_family.is_none());
        assert_eq!(patch.font_size_px, Some(14.0));

        let state = resolver.state("out-univ").unwrap();
        assert_eq!(state.color, Some(Rgb::new(0, 0, 255)));
        assert_eq!(state.font_family, Some("serif".into()));
        assert_eq!(state.font_size_px, Some(14.0));
    }

    #[test]
    fn svg_text_dual_writes_fill() {
        let mut resolver = StyleResolver::new();
        let inputs = StyleInputs::new().with_color("#aa00bb");
        let patch = resolver.apply("out-coll-path", &inputs, true);
        assert_eq!(patch.color, Some("#aa00bb".into()));
        assert_eq!(patch.fill, Some("#aa00bb".into()));
    }

    #[test]
    fn invalid_inputs_are_refused() {
        let mut resolver = StyleResolver::new();
        let inputs = StyleInputs::new()
            .with_color("not-a-color")
            .with_font("12")
            .with_size("-3");
        let patch = resolver.apply("out-univ", &inputs, false);
        assert!(patch.is_empty());
        assert_eq!(resolver.state("out-univ"), Some(&StyleState::default()));
    }

    #[test]
    fn zero_size_is_refused() {
        let mut resolver = StyleResolver::new();
        let patch = resolver.apply("out-univ", &StyleInputs::new().with_size("0"), false);
        assert!(patch.is_empty());
    }

    #[test]
    fn targets_are_independent() {
        let mut resolver = StyleResolver::new();
        resolver.apply("out-univ", &StyleInputs::new().with_size("12"), false);
        resolver.apply("out-topic", &StyleInputs::new().with_size("18"), false);

        assert_eq!(resolver.state("out-univ").unwrap().font_size_px, Some(12.0));
        assert_eq!(resolver.state("out-topic").unwrap().font_size_px, Some(18.0));
    }

    #[test]
    fn offset_signed_pixels() {
        let mut resolver = StyleResolver::new();
        let patch = resolver.offset("coll-name-wrapper", "-15").unwrap();
        assert_eq!(patch.translate_y_px, Some(-15.0));
        assert_eq!(resolver.state("coll-name-wrapper").unwrap().offset_px, -15.0);
    }

    #[test]
    fn offset_invalid_is_refused() {
        let mut resolver = StyleResolver::new();
        assert!(resolver.offset("coll-name-wrapper", "down").is_none());
        assert!(resolver.state("coll-name-wrapper").is_none());
    }

    #[test]
    fn untouched_target_has_no_state() {
        let resolver = StyleResolver::new();
        assert!(resolver.state("out-univ").is_none());
    }
}
