//! Node types: NodeId, NodeRole, Display, NodeData.

use slotmap::new_key_type;

use crate::style::InlineStyle;

/// Non-breaking placeholder glyph shown in a mirror target whose source field
/// is empty. Preserves the line's layout height; an explicit rendering rule,
/// not an error state.
pub const PLACEHOLDER_GLYPH: &str = "\u{a0}";

new_key_type! {
    /// Arena key for a preview node. Copy, lightweight (u64).
    ///
    /// Keys are resolved from stable string ids per event and never cached
    /// across events by the engine.
    pub struct NodeId;
}

/// The layout role of a preview node. Fixed at document-build time; decides
/// which display token a node returns to when it is re-shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeRole {
    /// The scalable page root.
    Page,
    /// A block-level grouping (title section, details block, footer).
    Section,
    /// A flex row (label/value pairs, logo wrappers).
    Row,
    /// A block-level heading line.
    Heading,
    /// Inline text content.
    Text,
    /// An image element (full-resolution target or thumbnail).
    Image,
    /// The SVG path carrying the curved-label geometry.
    CurvePath,
    /// Text rendered along the curved path (SVG-hosted).
    CurvedText,
    /// The decorative page border element.
    Border,
    /// A control-panel element (toggle buttons, placeholders, file input).
    Affordance,
}

impl NodeRole {
    /// The display state a node of this role uses when visible.
    pub fn default_display(self) -> Display {
        match self {
            NodeRole::Page | NodeRole::Section | NodeRole::Heading | NodeRole::Border => {
                Display::Block
            }
            NodeRole::Row => Display::Flex,
            NodeRole::Text
            | NodeRole::Image
            | NodeRole::CurvePath
            | NodeRole::CurvedText
            | NodeRole::Affordance => Display::Inline,
        }
    }
}

/// Display state of a preview node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Display {
    Block,
    Flex,
    Inline,
    None,
}

impl Display {
    /// The CSS token this state maps to on the host surface.
    pub fn css_token(self) -> &'static str {
        match self {
            Display::Block => "block",
            Display::Flex => "flex",
            Display::Inline => "inline",
            Display::None => "none",
        }
    }
}

/// Data associated with a single preview node.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Layout role (fixed at build time).
    pub role: NodeRole,
    /// Stable string id the engine resolves bindings against.
    pub dom_id: Option<String>,
    /// Marker classes (affordance state, border style).
    pub classes: Vec<String>,
    /// Text content; for affordance buttons this is the icon glyph token,
    /// for file controls the selected value.
    pub text: String,
    /// Image source (data URI or remote URL), for image nodes.
    pub image_src: Option<String>,
    /// Path description, for the curved-label geometry node.
    pub path_data: Option<String>,
    /// Current display state. Starts at the role default.
    pub display: Display,
    /// Accumulated inline style. Patches are merged in, never reset.
    pub style: InlineStyle,
}

impl NodeData {
    /// Create a `NodeData` with the given role and that role's defaults.
    pub fn new(role: NodeRole) -> Self {
        Self {
            role,
            dom_id: None,
            classes: Vec::new(),
            text: String::new(),
            image_src: None,
            path_data: None,
            display: role.default_display(),
            style: InlineStyle::new(),
        }
    }

    /// Set the stable string id (builder).
    pub fn with_dom_id(mut self, id: impl Into<String>) -> Self {
        self.dom_id = Some(id.into());
        self
    }

    /// Add a marker class (builder).
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    /// Set the text content (builder).
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Check whether this node has a given marker class.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Add a marker class. No-op if already present.
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_owned());
        }
    }

    /// Remove a marker class. No-op if not present.
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Whether this node is currently shown.
    pub fn is_shown(&self) -> bool {
        self.display != Display::None
    }

    /// Hide this node.
    pub fn hide(&mut self) {
        self.display = Display::None;
    }

    /// Show this node at its role's default display state.
    pub fn show(&mut self) {
        self.display = self.role.default_display();
    }

    /// Merge an inline style patch into this node's accumulated style.
    pub fn apply_style(&mut self, patch: &InlineStyle) {
        self.style = self.style.merge(patch);
    }
}
