//! Field Registry: every editable field's identity, kind, and defaults.
//!
//! The registry is built once at document load and is immutable afterwards.
//! It is the authority the binding table is validated against: a binding
//! whose source id is not registered here is a construction-time error.

use std::collections::HashMap;

/// The detail-row fields (each with an editable label, a value mirror, and a
/// visibility toggle in the `vis-btn-*` namespace).
pub const ROW_FIELDS: [&str; 6] = ["name", "sem", "course", "roll", "uni-roll", "reg"];

/// The project fields (heading/footer elements with their own visibility
/// toggles, sharing the `vis-btn-*` namespace but a separate state domain).
pub const PROJECT_FIELDS: [&str; 3] = ["header", "topic", "session"];

/// The styleable groups: each has independent color, font, and size controls.
pub const STYLE_GROUPS: [&str; 5] = ["univ", "coll", "header", "topic", "session"];

/// The section blocks toggled through the `toggle-*` namespace.
pub const SECTION_KEYS: [&str; 2] = ["univ", "coll"];

/// Default label text for a detail row.
pub fn label_default(field: &str) -> &'static str {
    match field {
        "name" => "Name",
        "sem" => "Semester",
        "course" => "Course",
        "roll" => "Class Roll No",
        "uni-roll" => "University Roll No",
        "reg" => "Registration No",
        _ => "",
    }
}

/// Label suffix rule: roll-type and registration labels end in `:-`,
/// everything else in ` -`.
pub fn label_suffix(field: &str) -> &'static str {
    if field.contains("roll") || field == "reg" {
        ":-"
    } else {
        " -"
    }
}

/// The kind of value a field carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Image,
    Numeric,
    Color,
    Font,
}

/// Declaration of one editable field. Immutable after registration.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    pub id: String,
    pub kind: FieldKind,
    pub default_value: String,
    pub default_visible: bool,
}

impl FieldSpec {
    /// Declare a field with an empty default value, visible by default.
    pub fn new(id: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            kind,
            default_value: String::new(),
            default_visible: true,
        }
    }

    /// Set the default value (builder).
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }
}

/// The immutable set of declared fields, indexed by id.
pub struct FieldRegistry {
    specs: Vec<FieldSpec>,
    index: HashMap<String, usize>,
}

impl FieldRegistry {
    /// Build a registry from a list of specs. Later duplicates are dropped —
    /// the first declaration of an id wins.
    pub fn from_specs(specs: Vec<FieldSpec>) -> Self {
        let mut registry = Self {
            specs: Vec::with_capacity(specs.len()),
            index: HashMap::new(),
        };
        for spec in specs {
            if registry.index.contains_key(&spec.id) {
                continue;
            }
            registry.index.insert(spec.id.clone(), registry.specs.len());
            registry.specs.push(spec);
        }
        registry
    }

    /// The standard field set for the A4 template document.
    pub fn standard() -> Self {
        let mut specs = Vec::new();

        // Identity text inputs.
        for field in [
            "univ", "coll", "topic", "header", "session", "name", "sem", "course", "roll",
            "uni-roll", "reg",
        ] {
            specs.push(FieldSpec::new(format!("in-{field}"), FieldKind::Text));
        }

        // Editable row labels.
        for field in ROW_FIELDS {
            specs.push(
                FieldSpec::new(format!("label-{field}"), FieldKind::Text)
                    .with_default(label_default(field)),
            );
        }

        // Image uploads.
        specs.push(FieldSpec::new("f-univ", FieldKind::Image));
        specs.push(FieldSpec::new("f-coll", FieldKind::Image));
        specs.push(FieldSpec::new("bg-image-file", FieldKind::Image));

        // Per-group style controls.
        for group in STYLE_GROUPS {
            specs.push(FieldSpec::new(format!("color-{group}"), FieldKind::Color));
            specs.push(FieldSpec::new(format!("font-{group}"), FieldKind::Font));
            specs.push(FieldSpec::new(format!("size-{group}"), FieldKind::Numeric));
        }

        // Curve tuning.
        specs.push(FieldSpec::new("adj-arc", FieldKind::Numeric).with_default("100"));
        specs.push(FieldSpec::new("adj-size", FieldKind::Numeric).with_default("24"));

        // Position controllers.
        specs.push(FieldSpec::new("pos-coll-name", FieldKind::Numeric).with_default("0"));
        specs.push(FieldSpec::new("pos-coll-logo", FieldKind::Numeric).with_default("0"));

        // Background controls.
        specs.push(FieldSpec::new("bg-color", FieldKind::Color).with_default("#ffffff"));
        specs.push(FieldSpec::new("bg-opacity", FieldKind::Numeric).with_default("100"));

        // Border controls.
        specs.push(FieldSpec::new("border-style", FieldKind::Text).with_default("solid"));
        specs.push(FieldSpec::new("border-color", FieldKind::Color).with_default("#000000"));

        Self::from_specs(specs)
    }

    /// Look up a field declaration by id.
    pub fn get(&self, id: &str) -> Option<&FieldSpec> {
        self.index.get(id).map(|&i| &self.specs[i])
    }

    /// Whether a field id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Iterate over all declared fields in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldSpec> {
        self.specs.iter()
    }

    /// Number of declared fields.
    pub fn len(&self) -> usize {
        self.specs.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.specs.is_empty()
    }
}
