//! Binding Table: the static field → preview-node topology.
//!
//! An exhaustively enumerated table built at initialization and validated
//! against the field registry and the preview document — no id-suffix
//! conventions (`"out-" + field`) anywhere. Resolution of an unbound field
//! yields an empty slice: a valid state (a field with no live preview), not
//! an error.

use std::collections::HashMap;

use thiserror::Error;

use crate::preview::PreviewTree;

use super::registry::{FieldRegistry, ROW_FIELDS, STYLE_GROUPS};

/// The transform a binding applies to its target node(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// Trimmed text content, with a placeholder glyph for the empty string.
    TextMirror,
    /// Row-label text with the label suffix rule.
    LabelMirror,
    /// Image source applied to thumbnail and full-resolution targets alike.
    ImageMirror,
    /// Partial style update (color / font / size).
    StyleApply,
    /// Vertical position offset.
    PositionApply,
    /// Curved-text geometry (path node) or text size (text-on-path node).
    ArcApply,
    /// Page background composition.
    BackgroundApply,
}

/// One static association from a source field to its target node(s).
#[derive(Debug, Clone)]
pub struct Binding {
    pub source: String,
    pub targets: Vec<String>,
    pub transform: Transform,
}

impl Binding {
    /// Create a single-target binding.
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        transform: Transform,
    ) -> Self {
        Self {
            source: source.into(),
            targets: vec![target.into()],
            transform,
        }
    }

    /// Create a multi-target binding (e.g. thumbnail + full-resolution).
    pub fn fan_out(
        source: impl Into<String>,
        targets: impl IntoIterator<Item = impl Into<String>>,
        transform: Transform,
    ) -> Self {
        Self {
            source: source.into(),
            targets: targets.into_iter().map(Into::into).collect(),
            transform,
        }
    }
}

/// Configuration errors detected when the table is validated at load time.
///
/// These are the only errors this engine ever surfaces; every runtime
/// failure mode degrades to "state unchanged" instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A binding references a source field the registry doesn't declare.
    #[error("binding source '{field}' is not a registered field")]
    UnknownSourceField { field: String },

    /// A binding targets a node the preview document doesn't contain.
    #[error("binding for '{field}' targets missing preview node '{node}'")]
    MissingTargetNode { field: String, node: String },
}

/// The full input → preview topology, indexed by source field id.
pub struct BindingTable {
    bindings: Vec<Binding>,
    by_source: HashMap<String, Vec<usize>>,
}

impl BindingTable {
    /// Build a table from explicit bindings.
    pub fn from_bindings(bindings: Vec<Binding>) -> Self {
        let mut by_source: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, binding) in bindings.iter().enumerate() {
            by_source.entry(binding.source.clone()).or_default().push(i);
        }
        Self {
            bindings,
            by_source,
        }
    }

    /// The standard binding set for the A4 template document.
    ///
    /// Pairwise disjoint by target node in this configuration, so evaluation
    /// order between independent bindings never matters.
    pub fn standard() -> Self {
        let mut bindings = Vec::new();

        // Identity text mirrors. The college name renders on the curved
        // path; the session value lives inside the footer paragraph.
        for (field, target) in [
            ("univ", "out-univ"),
            ("coll", "out-coll-path"),
            ("topic", "out-topic"),
            ("header", "out-header"),
            ("session", "out-session"),
            ("name", "out-name"),
            ("sem", "out-sem"),
            ("course", "out-course"),
            ("roll", "out-roll"),
            ("uni-roll", "out-uni-roll"),
            ("reg", "out-reg"),
        ] {
            bindings.push(Binding::new(
                format!("in-{field}"),
                target,
                Transform::TextMirror,
            ));
        }

        // Editable row labels.
        for field in ROW_FIELDS {
            bindings.push(Binding::new(
                format!("label-{field}"),
                format!("preview-label-{field}"),
                Transform::LabelMirror,
            ));
        }

        // Logo uploads: thumbnail and full-resolution target get identical
        // writes.
        bindings.push(Binding::fan_out(
            "f-univ",
            ["p-univ", "img-univ"],
            Transform::ImageMirror,
        ));
        bindings.push(Binding::fan_out(
            "f-coll",
            ["p-coll", "img-coll"],
            Transform::ImageMirror,
        ));

        // Style controls: three independent inputs per group, one target.
        for group in STYLE_GROUPS {
            let target = style_target(group);
            for control in ["color", "font", "size"] {
                bindings.push(Binding::new(
                    format!("{control}-{group}"),
                    target,
                    Transform::StyleApply,
                ));
            }
        }

        // Position controllers.
        bindings.push(Binding::new(
            "pos-coll-name",
            "coll-name-wrapper",
            Transform::PositionApply,
        ));
        bindings.push(Binding::new(
            "pos-coll-logo",
            "coll-logo-wrapper",
            Transform::PositionApply,
        ));

        // Curve tuning: depth drives the path geometry, size the text-on-path.
        bindings.push(Binding::new("adj-arc", "curve-path", Transform::ArcApply));
        bindings.push(Binding::new(
            "adj-size",
            "out-coll-path",
            Transform::ArcApply,
        ));

        // Background composition.
        bindings.push(Binding::new(
            "bg-color",
            "page-content",
            Transform::BackgroundApply,
        ));
        bindings.push(Binding::new(
            "bg-opacity",
            "page-content",
            Transform::BackgroundApply,
        ));
        bindings.push(Binding::new(
            "bg-image-file",
            "page-content",
            Transform::BackgroundApply,
        ));

        Self::from_bindings(bindings)
    }

    /// Resolve the bindings for a source field.
    ///
    /// An unbound field resolves to an empty vec — the caller's operation
    /// becomes a no-op, by design.
    pub fn resolve(&self, field: &str) -> Vec<&Binding> {
        self.by_source
            .get(field)
            .map(|indices| indices.iter().map(|&i| &self.bindings[i]).collect())
            .unwrap_or_default()
    }

    /// Iterate over every binding.
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        self.bindings.iter()
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Check every binding against the registry and the preview document.
    ///
    /// Unknown sources and missing targets fail construction instead of
    /// becoming silent misses at runtime.
    pub fn validate(
        &self,
        registry: &FieldRegistry,
        tree: &PreviewTree,
    ) -> Result<(), ConfigError> {
        for binding in &self.bindings {
            if !registry.contains(&binding.source) {
                return Err(ConfigError::UnknownSourceField {
                    field: binding.source.clone(),
                });
            }
            for target in &binding.targets {
                if tree.by_dom_id(target).is_none() {
                    return Err(ConfigError::MissingTargetNode {
                        field: binding.source.clone(),
                        node: target.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// The preview node a style group's controls drive. The college name is the
/// SVG-hosted curved text; the session group styles the footer paragraph.
pub fn style_target(group: &str) -> &'static str {
    match group {
        "univ" => "out-univ",
        "coll" => "out-coll-path",
        "header" => "out-header",
        "topic" => "out-topic",
        "session" => "out-session-p",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preview::standard_page;

    #[test]
    fn standard_validates_against_standard_parts() {
        let table = BindingTable::standard();
        let registry = FieldRegistry::standard();
        let tree = standard_page();
        assert_eq!(table.validate(&registry, &tree), Ok(()));
    }

    #[test]
    fn resolve_text_mirror() {
        let table = BindingTable::standard();
        let bindings = table.resolve("in-name");
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].transform, Transform::TextMirror);
        assert_eq!(bindings[0].targets, vec!["out-name"]);
    }

    #[test]
    fn resolve_college_name_targets_curved_text() {
        let table = BindingTable::standard();
        let bindings = table.resolve("in-coll");
        assert_eq!(bindings[0].targets, vec!["out-coll-path"]);
    }

    #[test]
    fn resolve_image_fan_out() {
        let table = BindingTable::standard();
        let bindings = table.resolve("f-univ");
        assert_eq!(bindings[0].transform, Transform::ImageMirror);
        assert_eq!(bindings[0].targets, vec!["p-univ", "img-univ"]);
    }

    #[test]
    fn resolve_unbound_field_is_empty() {
        let table = BindingTable::standard();
        assert!(table.resolve("in-nonexistent").is_empty());
        // border controls are handled outside the table
        assert!(table.resolve("border-color").is_empty());
    }

    #[test]
    fn style_controls_share_a_target() {
        let table = BindingTable::standard();
        let color = table.resolve("color-univ");
        let size = table.resolve("size-univ");
        assert_eq!(color[0].targets, size[0].targets);
        assert_eq!(color[0].transform, Transform::StyleApply);
    }

    #[test]
    fn standard_targets_are_pairwise_disjoint_per_transform() {
        // Independent bindings never share a target node, so evaluation
        // order cannot matter for the standard set.
        let table = BindingTable::standard();
        let mut seen: Vec<(&str, Transform)> = Vec::new();
        for binding in table.iter() {
            for target in &binding.targets {
                let key = (target.as_str(), binding.transform);
                match binding.transform {
                    // Style and background groups intentionally converge on
                    // one target; their sources are the shared-state inputs.
                    Transform::StyleApply | Transform::BackgroundApply => {}
                    _ => {
                        assert!(!seen.contains(&key), "duplicate target {key:?}");
                    }
                }
                seen.push(key);
            }
        }
    }

    #[test]
    fn validate_rejects_unknown_source() {
        let table = BindingTable::from_bindings(vec![Binding::new(
            "in-ghost",
            "out-univ",
            Transform::TextMirror,
        )]);
        let registry = FieldRegistry::standard();
        let tree = standard_page();
        assert_eq!(
            table.validate(&registry, &tree),
            Err(ConfigError::UnknownSourceField {
                field: "in-ghost".into()
            })
        );
    }

    #[test]
    fn validate_rejects_missing_target() {
        let table = BindingTable::from_bindings(vec![Binding::new(
            "in-univ",
            "out-ghost",
            Transform::TextMirror,
        )]);
        let registry = FieldRegistry::standard();
        let tree = standard_page();
        assert_eq!(
            table.validate(&registry, &tree),
            Err(ConfigError::MissingTargetNode {
                field: "in-univ".into(),
                node: "out-ghost".into()
            })
        );
    }

    #[test]
    fn error_messages_name_the_offender() {
        let err = ConfigError::UnknownSourceField {
            field: "in-ghost".into(),
        };
        assert!(err.to_string().contains("in-ghost"));
        let err = ConfigError::MissingTargetNode {
            field: "in-univ".into(),
            node: "out-ghost".into(),
        };
        assert!(err.to_string().contains("out-ghost"));
    }
}
