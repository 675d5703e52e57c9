//! The standard fixed A4 page document.
//!
//! Every preview node the standard binding table targets is created here,
//! once, at document load. The engine never creates or destroys nodes
//! afterwards; a document variant that omits some of these nodes simply
//! leaves the corresponding bindings as silent no-ops.

use crate::field::registry::{label_default, label_suffix, PROJECT_FIELDS, ROW_FIELDS};

use super::node::{NodeData, NodeRole, PLACEHOLDER_GLYPH};
use super::tree::PreviewTree;

/// Build the standard editor document: control-panel affordances plus the
/// fixed A4 page subtree.
pub fn standard_page() -> PreviewTree {
    let mut tree = PreviewTree::new();
    let editor = tree.insert(NodeData::new(NodeRole::Section).with_dom_id("editor"));

    build_controls(&mut tree, editor);
    build_page(&mut tree, editor);

    tree
}

/// Control-panel affordances: upload thumbnails, visibility buttons, and the
/// background-image picker trio.
fn build_controls(tree: &mut PreviewTree, editor: crate::preview::NodeId) {
    let controls = tree.insert_child(
        editor,
        NodeData::new(NodeRole::Section).with_dom_id("controls"),
    );

    // Upload thumbnails mirror the full-resolution logo targets.
    tree.insert_child(
        controls,
        NodeData::new(NodeRole::Image)
            .with_dom_id("p-univ")
            .with_class("thumb"),
    );
    tree.insert_child(
        controls,
        NodeData::new(NodeRole::Image)
            .with_dom_id("p-coll")
            .with_class("thumb"),
    );

    // One visibility button per detail row and per project field. The button
    // text is the icon glyph token.
    for field in ROW_FIELDS.iter().chain(PROJECT_FIELDS.iter()) {
        tree.insert_child(
            controls,
            NodeData::new(NodeRole::Affordance)
                .with_dom_id(format!("vis-btn-{field}"))
                .with_text("visibility"),
        );
    }

    // Background-image picker: preview thumbnail (hidden until an image is
    // chosen), placeholder text, and the file control whose value must be
    // resettable so re-selecting the same file re-fires the change event.
    tree.insert_child(
        controls,
        NodeData::new(NodeRole::Image)
            .with_dom_id("bg-image-preview")
            .with_class("hidden"),
    );
    tree.insert_child(
        controls,
        NodeData::new(NodeRole::Text)
            .with_dom_id("bg-image-text")
            .with_text("No background image"),
    );
    tree.insert_child(
        controls,
        NodeData::new(NodeRole::Affordance).with_dom_id("bg-image-file"),
    );
    tree.insert_child(
        controls,
        NodeData::new(NodeRole::Text)
            .with_dom_id("opacity-value")
            .with_text("100%"),
    );
}

/// The fixed A4 page subtree.
fn build_page(tree: &mut PreviewTree, editor: crate::preview::NodeId) {
    let page = tree.insert_child(
        editor,
        NodeData::new(NodeRole::Page).with_dom_id("page-content"),
    );

    tree.insert_child(
        page,
        NodeData::new(NodeRole::Border)
            .with_dom_id("page-border")
            .with_class("page-border")
            .with_class("border-style-solid"),
    );

    // University section: logo row and name heading.
    let section_univ = tree.insert_child(
        page,
        NodeData::new(NodeRole::Section).with_dom_id("section-univ"),
    );
    let univ_logo = tree.insert_child(
        section_univ,
        NodeData::new(NodeRole::Row).with_dom_id("univ-logo-wrapper"),
    );
    tree.insert_child(univ_logo, NodeData::new(NodeRole::Image).with_dom_id("img-univ"));
    tree.insert_child(
        section_univ,
        NodeData::new(NodeRole::Heading)
            .with_dom_id("out-univ")
            .with_text(PLACEHOLDER_GLYPH),
    );

    // College section: logo row plus the curved-name row (SVG path + text).
    let section_coll = tree.insert_child(
        page,
        NodeData::new(NodeRole::Section).with_dom_id("section-coll"),
    );
    let coll_logo = tree.insert_child(
        section_coll,
        NodeData::new(NodeRole::Row).with_dom_id("coll-logo-wrapper"),
    );
    tree.insert_child(coll_logo, NodeData::new(NodeRole::Image).with_dom_id("img-coll"));
    let coll_name = tree.insert_child(
        section_coll,
        NodeData::new(NodeRole::Row).with_dom_id("coll-name-wrapper"),
    );
    tree.insert_child(
        coll_name,
        NodeData::new(NodeRole::CurvePath).with_dom_id("curve-path"),
    );
    tree.insert_child(
        coll_name,
        NodeData::new(NodeRole::CurvedText)
            .with_dom_id("out-coll-path")
            .with_text(PLACEHOLDER_GLYPH),
    );

    // Project headings.
    tree.insert_child(
        page,
        NodeData::new(NodeRole::Heading)
            .with_dom_id("out-header")
            .with_text(PLACEHOLDER_GLYPH),
    );
    tree.insert_child(
        page,
        NodeData::new(NodeRole::Heading)
            .with_dom_id("out-topic")
            .with_text(PLACEHOLDER_GLYPH),
    );

    // Detail rows: label + value per field.
    let details = tree.insert_child(
        page,
        NodeData::new(NodeRole::Section).with_dom_id("details"),
    );
    for field in ROW_FIELDS {
        let row = tree.insert_child(
            details,
            NodeData::new(NodeRole::Row).with_dom_id(format!("preview-row-{field}")),
        );
        tree.insert_child(
            row,
            NodeData::new(NodeRole::Text)
                .with_dom_id(format!("preview-label-{field}"))
                .with_text(format!("{}{}", label_default(field), label_suffix(field))),
        );
        tree.insert_child(
            row,
            NodeData::new(NodeRole::Text)
                .with_dom_id(format!("out-{field}"))
                .with_text(PLACEHOLDER_GLYPH),
        );
    }

    // Session footer.
    let footer = tree.insert_child(
        page,
        NodeData::new(NodeRole::Section).with_dom_id("preview-session-footer"),
    );
    let session_p = tree.insert_child(
        footer,
        NodeData::new(NodeRole::Text).with_dom_id("out-session-p"),
    );
    tree.insert_child(
        session_p,
        NodeData::new(NodeRole::Text)
            .with_dom_id("out-session")
            .with_text(PLACEHOLDER_GLYPH),
    );
}
