//! Inline style patches with typed `Option<T>` fields.
//!
//! This is the presentation value every resolver produces. Each property is
//! `Option<T>`: `None` means "leave the node's previously resolved value
//! alone". Applying a patch is a merge, never a reset — that is what makes
//! partial style updates (one of three inputs present) safe.

/// A set of inline style properties for one preview node.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InlineStyle {
    // Text presentation
    pub color: Option<String>,
    /// Vector fill, written alongside `color` for SVG-hosted text.
    pub fill: Option<String>,
    pub font_family: Option<String>,
    pub font_size_px: Option<f64>,

    // Position & scale transforms
    pub translate_y_px: Option<f64>,
    pub scale: Option<f64>,

    // Background composition
    pub background_color: Option<String>,
    /// `url(...)` while an image is active, the literal `"none"` after a
    /// clear. Never an empty string.
    pub background_image: Option<String>,
    pub background_size: Option<String>,
    pub background_position: Option<String>,

    // Border
    pub border_color: Option<String>,
}

impl InlineStyle {
    /// Create an empty patch (all properties unset).
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `patch` on top of `self`. For each property, if the patch has a
    /// value (`Some`), use it; otherwise keep `self`'s value. Absent
    /// properties stay at their previously resolved value.
    pub fn merge(&self, patch: &InlineStyle) -> InlineStyle {
        /// Helper: pick `patch` if set, otherwise keep `base`.
        fn merge_opt<T: Clone>(base: &Option<T>, patch: &Option<T>) -> Option<T> {
            if patch.is_some() {
                patch.clone()
            } else {
                base.clone()
            }
        }

        InlineStyle {
            color: merge_opt(&self.color, &patch.color),
            fill: merge_opt(&self.fill, &patch.fill),
            font_family: merge_opt(&self.font_family, &patch.font_family),
            font_size_px: merge_opt(&self.font_size_px, &patch.font_size_px),

            translate_y_px: merge_opt(&self.translate_y_px, &patch.translate_y_px),
            scale: merge_opt(&self.scale, &patch.scale),

            background_color: merge_opt(&self.background_color, &patch.background_color),
            background_image: merge_opt(&self.background_image, &patch.background_image),
            background_size: merge_opt(&self.background_size, &patch.background_size),
            background_position: merge_opt(&self.background_position, &patch.background_position),

            border_color: merge_opt(&self.border_color, &patch.border_color),
        }
    }

    /// Returns `true` if no property is set.
    pub fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.fill.is_none()
            && self.font_family.is_none()
            && self.font_size_px.is_none()
            && self.translate_y_px.is_none()
            && self.scale.is_none()
            && self.background_color.is_none()
            && self.background_image.is_none()
            && self.background_size.is_none()
            && self.background_position.is_none()
            && self.border_color.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_empty() {
        assert!(InlineStyle::new().is_empty());
        assert!(InlineStyle::default().is_empty());
    }

    #[test]
    fn not_empty_when_field_set() {
        let mut s = InlineStyle::new();
        s.color = Some("#0000ff".into());
        assert!(!s.is_empty());
    }

    #[test]
    fn merge_keeps_base_when_patch_empty() {
        let mut base = InlineStyle::new();
        base.color = Some("#0000ff".into());
        base.font_size_px = Some(12.0);

        let merged = base.merge(&InlineStyle::new());
        assert_eq!(merged.color, Some("#0000ff".into()));
        assert_eq!(merged.font_size_px, Some(12.0));
    }

    #[test]
    fn merge_patch_overrides_base() {
        let mut base = InlineStyle::new();
        base.color = Some("#0000ff".into());
        base.background_color = Some("rgba(255, 255, 255, 1)".into());

        let mut patch = InlineStyle::new();
        patch.color = Some("#ff0000".into());

        let merged = base.merge(&patch);
        assert_eq!(merged.color, Some("#ff0000".into()));
        assert_eq!(
            merged.background_color,
            Some("rgba(255, 255, 255, 1)".into())
        );
    }

    #[test]
    fn merge_partial_update_never_resets() {
        // {color: blue, font: serif, size: 12}, then a size-only patch.
        let mut base = InlineStyle::new();
        base.color = Some("#0000ff".into());
        base.font_family = Some("serif".into());
        base.font_size_px = Some(12.0);

        let mut patch = InlineStyle::new();
        patch.font_size_px = Some(14.0);

        let merged = base.merge(&patch);
        assert_eq!(merged.color, Some("#0000ff".into()));
        assert_eq!(merged.font_family, Some("serif".into()));
        assert_eq!(merged.font_size_px, Some(14.0));
    }

    #[test]
    fn merge_is_not_commutative() {
        let mut a = InlineStyle::new();
        a.color = Some("#ff0000".into());
        let mut b = InlineStyle::new();
        b.color = Some("#0000ff".into());

        assert_eq!(a.merge(&b).color, Some("#0000ff".into()));
        assert_eq!(b.merge(&a).color, Some("#ff0000".into()));
    }

    #[test]
    fn merge_all_fields() {
        let mut base = InlineStyle::new();
        base.color = Some("#111111".into());
        base.fill = Some("#111111".into());
        base.font_family = Some("serif".into());
        base.font_size_px = Some(10.0);
        base.translate_y_px = Some(-5.0);
        base.scale = Some(1.0);
        base.background_color = Some("rgba(0, 0, 0, 1)".into());
        base.background_image = Some("none".into());
        base.background_size = Some("cover".into());
        base.background_position = Some("center".into());
        base.border_color = Some("#000000".into());

        let mut patch = InlineStyle::new();
        patch.color = Some("#222222".into());
        patch.fill = Some("#222222".into());
        patch.font_family = Some("sans-serif".into());
        patch.font_size_px = Some(20.0);
        patch.translate_y_px = Some(8.0);
        patch.scale = Some(0.5);
        patch.background_color = Some("rgba(9, 9, 9, 0.5)".into());
        patch.background_image = Some("url(data:image/png;base64,AA==)".into());
        patch.background_size = Some("cover".into());
        patch.background_position = Some("center".into());
        patch.border_color = Some("#ff00ff".into());

        assert_eq!(base.merge(&patch), patch);
    }
}
