//! Visibility toggles for detail rows, project fields, sections, and logos.
//!
//! Four disjoint state domains, each a plain boolean map. Toggling flips the
//! boolean and yields a patch describing everything that must change in the
//! preview so the engine can apply icon, class, and display updates in one
//! step. Toggling twice always restores the starting state.

use std::collections::HashMap;

use crate::field::registry::{PROJECT_FIELDS, ROW_FIELDS, SECTION_KEYS};

/// Marker class on a toggle button whose field is currently hidden.
pub const HIDDEN_FIELD_CLASS: &str = "hidden-field";

/// The icon glyph token a toggle button shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Visible,
    Hidden,
}

impl Icon {
    /// The ligature name of the icon glyph.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Visible => "visibility",
            Icon::Hidden => "visibility_off",
        }
    }
}

/// Which state domain a toggle belongs to. Domains never share keys'
/// meaning: `"univ"` the section and `"univ"` the logo are independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleDomain {
    /// A detail row (name, semester, ...): button + row.
    FieldRow,
    /// A heading/footer element (header, topic, session): button + element.
    ProjectField,
    /// A whole section block (university / college). No affordance.
    Section,
    /// A logo wrapper (university / college). No affordance.
    Logo,
}

/// Update to the toggle button that accompanies a visibility change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffordancePatch {
    /// Stable id of the button node.
    pub node: String,
    /// Icon the button shows after the toggle.
    pub icon: Icon,
    /// Whether the button carries the hidden-field marker class.
    pub marked_hidden: bool,
}

/// Everything one toggle changes in the preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityPatch {
    /// Button update; `None` for domains without an affordance.
    pub affordance: Option<AffordancePatch>,
    /// Stable id of the node whose display flips.
    pub target: String,
    /// New visibility of the target.
    pub visible: bool,
}

/// Boolean visibility state across all four domains.
#[derive(Debug)]
pub struct VisibilityController {
    rows: HashMap<String, bool>,
    project: HashMap<String, bool>,
    sections: HashMap<String, bool>,
    logos: HashMap<String, bool>,
}

impl VisibilityController {
    /// Everything visible, matching a freshly loaded document.
    pub fn new() -> Self {
        Self {
            rows: ROW_FIELDS.iter().map(|&f| (f.to_owned(), true)).collect(),
            project: PROJECT_FIELDS
                .iter()
                .map(|&f| (f.to_owned(), true))
                .collect(),
            sections: SECTION_KEYS
                .iter()
                .map(|&k| (k.to_owned(), true))
                .collect(),
            logos: SECTION_KEYS.iter().map(|&k| (k.to_owned(), true)).collect(),
        }
    }

    /// Current visibility of a key in a domain. Unknown keys read as `None`.
    pub fn is_visible(&self, domain: ToggleDomain, key: &str) -> Option<bool> {
        self.map(domain).get(key).copied()
    }

    /// Flip a key's visibility and describe the required preview updates.
    ///
    /// Unknown keys return `None` and leave every domain untouched.
    pub fn toggle(&mut self, domain: ToggleDomain, key: &str) -> Option<VisibilityPatch> {
        let state = self.map_mut(domain).get_mut(key)?;
        *state = !*state;
        let visible = *state;

        let affordance = match domain {
            ToggleDomain::FieldRow | ToggleDomain::ProjectField => Some(AffordancePatch {
                node: format!("vis-btn-{key}"),
                icon: if visible { Icon::Visible } else { Icon::Hidden },
                marked_hidden: !visible,
            }),
            ToggleDomain::Section | ToggleDomain::Logo => None,
        };

        Some(VisibilityPatch {
            affordance,
            target: Self::target_node(domain, key),
            visible,
        })
    }

    /// The preview node a toggle shows or hides.
    fn target_node(domain: ToggleDomain, key: &str) -> String {
        match domain {
            ToggleDomain::FieldRow => format!("preview-row-{key}"),
            ToggleDomain::ProjectField => match key {
                "header" => "out-header".to_owned(),
                "topic" => "out-topic".to_owned(),
                "session" => "preview-session-footer".to_owned(),
                other => format!("out-{other}"),
            },
            ToggleDomain::Section => format!("section-{key}"),
            ToggleDomain::Logo => format!("{key}-logo-wrapper"),
        }
    }

    fn map(&self, domain: ToggleDomain) -> &HashMap<String, bool> {
        match domain {
            ToggleDomain::FieldRow => &self.rows,
            ToggleDomain::ProjectField => &self.project,
            ToggleDomain::Section => &self.sections,
            ToggleDomain::Logo => &self.logos,
        }
    }

    fn map_mut(&mut self, domain: ToggleDomain) -> &mut HashMap<String, bool> {
        match domain {
            ToggleDomain::FieldRow => &mut self.rows,
            ToggleDomain::ProjectField => &mut self.project,
            ToggleDomain::Section => &mut self.sections,
            ToggleDomain::Logo => &mut self.logos,
        }
    }
}

impl Default for VisibilityController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_starts_visible() {
        let vis = VisibilityController::new();
        for field in ROW_FIELDS {
            assert_eq!(vis.is_visible(ToggleDomain::FieldRow, field), Some(true));
        }
        for field in PROJECT_FIELDS {
            assert_eq!(vis.is_visible(ToggleDomain::ProjectField, field), Some(true));
        }
        for key in SECTION_KEYS {
            assert_eq!(vis.is_visible(ToggleDomain::Section, key), Some(true));
            assert_eq!(vis.is_visible(ToggleDomain::Logo, key), Some(true));
        }
    }

    #[test]
    fn row_toggle_hides_with_affordance() {
        let mut vis = VisibilityController::new();
        let patch = vis.toggle(ToggleDomain::FieldRow, "roll").unwrap();
        assert!(!patch.visible);
        assert_eq!(patch.target, "preview-row-roll");

        let affordance = patch.affordance.unwrap();
        assert_eq!(affordance.node, "vis-btn-roll");
        assert_eq!(affordance.icon, Icon::Hidden);
        assert!(affordance.marked_hidden);
    }

    #[test]
    fn toggle_twice_restores_visibility() {
        let mut vis = VisibilityController::new();
        vis.toggle(ToggleDomain::FieldRow, "name").unwrap();
        let patch = vis.toggle(ToggleDomain::FieldRow, "name").unwrap();
        assert!(patch.visible);
        assert_eq!(vis.is_visible(ToggleDomain::FieldRow, "name"), Some(true));

        let affordance = patch.affordance.unwrap();
        assert_eq!(affordance.icon, Icon::Visible);
        assert!(!affordance.marked_hidden);
    }

    #[test]
    fn project_field_targets() {
        let mut vis = VisibilityController::new();
        let patch = vis.toggle(ToggleDomain::ProjectField, "header").unwrap();
        assert_eq!(patch.target, "out-header");
        let patch = vis.toggle(ToggleDomain::ProjectField, "topic").unwrap();
        assert_eq!(patch.target, "out-topic");
        let patch = vis.toggle(ToggleDomain::ProjectField, "session").unwrap();
        assert_eq!(patch.target, "preview-session-footer");
        assert_eq!(
            patch.affordance.as_ref().unwrap().node,
            "vis-btn-session"
        );
    }

    #[test]
    fn section_and_logo_have_no_affordance() {
        let mut vis = VisibilityController::new();
        let patch = vis.toggle(ToggleDomain::Section, "univ").unwrap();
        assert_eq!(patch.target, "section-univ");
        assert!(patch.affordance.is_none());

        let patch = vis.toggle(ToggleDomain::Logo, "coll").unwrap();
        assert_eq!(patch.target, "coll-logo-wrapper");
        assert!(patch.affordance.is_none());
    }

    #[test]
    fn section_and_logo_domains_are_independent() {
        let mut vis = VisibilityController::new();
        vis.toggle(ToggleDomain::Section, "univ").unwrap();
        assert_eq!(vis.is_visible(ToggleDomain::Section, "univ"), Some(false));
        assert_eq!(vis.is_visible(ToggleDomain::Logo, "univ"), Some(true));
    }

    #[test]
    fn unknown_key_is_refused() {
        let mut vis = VisibilityController::new();
        assert!(vis.toggle(ToggleDomain::FieldRow, "header").is_none());
        assert!(vis.toggle(ToggleDomain::Section, "name").is_none());
        assert!(vis.is_visible(ToggleDomain::Logo, "ghost").is_none());
    }

    #[test]
    fn icon_glyphs() {
        assert_eq!(Icon::Visible.glyph(), "visibility");
        assert_eq!(Icon::Hidden.glyph(), "visibility_off");
    }
}
