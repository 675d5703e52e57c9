//! Integration tests for folio.
//!
//! These tests exercise the public API from outside the crate, driving a
//! headless editor through the Pilot and asserting on the resulting preview
//! state.

use pretty_assertions::assert_eq;

use folio::geometry;
use folio::media::FileData;
use folio::preview::{Display, PLACEHOLDER_GLYPH};
use folio::style::StyleInputs;
use folio::testing::{outline_to_string, Pilot};
use folio::visibility::ToggleDomain;

// ---------------------------------------------------------------------------
// Text mirroring
// ---------------------------------------------------------------------------

#[test]
fn test_text_mirrors_to_preview() {
    let mut pilot = Pilot::new().unwrap();
    pilot.set_text("in-univ", "Acme University");
    pilot.set_text("in-topic", "Signals and Systems");
    assert_eq!(pilot.node_text("out-univ").unwrap(), "Acme University");
    assert_eq!(pilot.node_text("out-topic").unwrap(), "Signals and Systems");
}

#[test]
fn test_whitespace_only_value_renders_placeholder() {
    let mut pilot = Pilot::new().unwrap();
    pilot.set_text("in-name", "Jo");
    pilot.set_text("in-name", "   \t  ");
    assert_eq!(pilot.node_text("out-name").unwrap(), PLACEHOLDER_GLYPH);
}

#[test]
fn test_college_name_lands_on_curved_text() {
    let mut pilot = Pilot::new().unwrap();
    pilot.set_text("in-coll", "Acme College of Engineering");
    assert_eq!(
        pilot.node_text("out-coll-path").unwrap(),
        "Acme College of Engineering"
    );
    // The block heading targets stay untouched.
    assert_eq!(pilot.node_text("out-univ").unwrap(), PLACEHOLDER_GLYPH);
}

#[test]
fn test_label_edit_keeps_suffix_rule() {
    let mut pilot = Pilot::new().unwrap();
    pilot.set_label("label-sem", "Term");
    pilot.set_label("label-uni-roll", "Univ Roll");
    assert_eq!(pilot.node_text("preview-label-sem").unwrap(), "Term -");
    assert_eq!(pilot.node_text("preview-label-uni-roll").unwrap(), "Univ Roll:-");
}

// ---------------------------------------------------------------------------
// Styles
// ---------------------------------------------------------------------------

#[test]
fn test_partial_style_update_preserves_previous_values() {
    let mut pilot = Pilot::new().unwrap();
    pilot.set_style(
        "color-header",
        StyleInputs::new()
            .with_color("#0000ff")
            .with_font("Georgia, serif")
            .with_size("12"),
    );
    pilot.set_style("size-header", StyleInputs::new().with_size("14"));

    let style = pilot.node_style("out-header").unwrap();
    assert_eq!(style.color.as_deref(), Some("#0000ff"));
    assert_eq!(style.font_family.as_deref(), Some("Georgia, serif"));
    assert_eq!(style.font_size_px, Some(14.0));
}

#[test]
fn test_curved_text_color_also_sets_fill() {
    let mut pilot = Pilot::new().unwrap();
    pilot.set_style("color-coll", StyleInputs::new().with_color("#123456"));
    let style = pilot.node_style("out-coll-path").unwrap();
    assert_eq!(style.color.as_deref(), Some("#123456"));
    assert_eq!(style.fill.as_deref(), Some("#123456"));

    // Plain text targets never get a fill.
    pilot.set_style("color-univ", StyleInputs::new().with_color("#123456"));
    assert!(pilot.node_style("out-univ").unwrap().fill.is_none());
}

#[test]
fn test_position_controllers_translate_wrappers() {
    let mut pilot = Pilot::new().unwrap();
    pilot.set_position("pos-coll-name", "20");
    pilot.set_position("pos-coll-logo", "-8");
    assert_eq!(
        pilot.node_style("coll-name-wrapper").unwrap().translate_y_px,
        Some(20.0)
    );
    assert_eq!(
        pilot.node_style("coll-logo-wrapper").unwrap().translate_y_px,
        Some(-8.0)
    );
}

// ---------------------------------------------------------------------------
// Visibility
// ---------------------------------------------------------------------------

#[test]
fn test_toggle_twice_is_identity() {
    let mut pilot = Pilot::new().unwrap();
    let before = outline_to_string(pilot.editor().tree());

    pilot.toggle(ToggleDomain::FieldRow, "course");
    assert_eq!(pilot.node_display("preview-row-course"), Some(Display::None));
    assert_eq!(pilot.node_text("vis-btn-course").unwrap(), "visibility_off");

    pilot.toggle(ToggleDomain::FieldRow, "course");
    assert_eq!(outline_to_string(pilot.editor().tree()), before);
}

#[test]
fn test_project_field_toggle_targets() {
    let mut pilot = Pilot::new().unwrap();
    pilot.toggle(ToggleDomain::ProjectField, "session");
    assert_eq!(
        pilot.node_display("preview-session-footer"),
        Some(Display::None)
    );
    // The value node inside the footer keeps its own display.
    assert_eq!(pilot.node_display("out-session"), Some(Display::Inline));
}

#[test]
fn test_section_logo_and_row_domains_do_not_interfere() {
    let mut pilot = Pilot::new().unwrap();
    pilot.toggle(ToggleDomain::Section, "coll");
    pilot.toggle(ToggleDomain::Logo, "univ");

    assert_eq!(pilot.node_display("section-coll"), Some(Display::None));
    assert_eq!(pilot.node_display("univ-logo-wrapper"), Some(Display::None));
    // College logo wrapper sits inside the hidden section but keeps its own
    // visible state.
    assert_eq!(pilot.node_display("coll-logo-wrapper"), Some(Display::Flex));
    assert_eq!(pilot.node_display("section-univ"), Some(Display::Block));
}

#[test]
fn test_hidden_row_still_receives_text() {
    let mut pilot = Pilot::new().unwrap();
    pilot.toggle(ToggleDomain::FieldRow, "reg");
    pilot.set_text("in-reg", "2024-1187");
    assert_eq!(pilot.node_text("out-reg").unwrap(), "2024-1187");
    assert_eq!(pilot.node_display("preview-row-reg"), Some(Display::None));
}

// ---------------------------------------------------------------------------
// Curve geometry
// ---------------------------------------------------------------------------

#[test]
fn test_arc_depth_rewrites_path() {
    let mut pilot = Pilot::new().unwrap();
    pilot.set_arc(Some("180"), Some("28"));
    assert_eq!(
        pilot.node_path("curve-path").unwrap(),
        "M 50,160 A 250,180 0 0,1 550,160"
    );
    assert_eq!(
        pilot.node_style("out-coll-path").unwrap().font_size_px,
        Some(28.0)
    );
}

#[test]
fn test_arc_reapplication_is_idempotent() {
    let mut pilot = Pilot::new().unwrap();
    pilot.set_arc(Some("135"), Some("26"));
    let first = pilot.node_path("curve-path").unwrap();
    pilot.set_arc(Some("135"), Some("26"));
    assert_eq!(pilot.node_path("curve-path").unwrap(), first);
}

#[test]
fn test_arc_garbage_falls_back_to_defaults() {
    let mut pilot = Pilot::new().unwrap();
    pilot.set_arc(Some("150"), Some("30"));
    pilot.set_arc(Some("abc"), Some(""));
    assert_eq!(
        pilot.node_path("curve-path").unwrap(),
        "M 50,160 A 250,100 0 0,1 550,160"
    );
    assert_eq!(
        pilot.node_style("out-coll-path").unwrap().font_size_px,
        Some(24.0)
    );
}

// ---------------------------------------------------------------------------
// Background
// ---------------------------------------------------------------------------

#[test]
fn test_background_composition() {
    let mut pilot = Pilot::new().unwrap();
    pilot.set_background(Some("#FF0000"), Some("50"));
    assert_eq!(
        pilot
            .node_style("page-content")
            .unwrap()
            .background_color
            .as_deref(),
        Some("rgba(255, 0, 0, 0.5)")
    );
    assert_eq!(pilot.node_text("opacity-value").unwrap(), "50%");
}

#[test]
fn test_background_image_lifecycle() {
    let mut pilot = Pilot::new().unwrap();
    pilot.set_bg_image("data:image/png;base64,AA==", "texture.png");

    let style = pilot.node_style("page-content").unwrap();
    assert_eq!(
        style.background_image.as_deref(),
        Some("url(data:image/png;base64,AA==)")
    );
    assert_eq!(style.background_size.as_deref(), Some("cover"));
    assert_eq!(style.background_position.as_deref(), Some("center"));
    assert!(!pilot
        .node_classes("bg-image-preview")
        .unwrap()
        .contains(&"hidden".to_owned()));

    pilot.clear_bg_image();
    let style = pilot.node_style("page-content").unwrap();
    assert_eq!(style.background_image.as_deref(), Some("none"));
    assert!(pilot
        .node_classes("bg-image-preview")
        .unwrap()
        .contains(&"hidden".to_owned()));
    assert_eq!(pilot.node_text("bg-image-file").unwrap(), "");
}

#[test]
fn test_clearing_image_keeps_color_layer() {
    let mut pilot = Pilot::new().unwrap();
    pilot.set_background(Some("#00ff00"), Some("80"));
    pilot.set_bg_image("data:image/png;base64,AA==", "t.png");
    pilot.clear_bg_image();
    assert_eq!(
        pilot
            .node_style("page-content")
            .unwrap()
            .background_color
            .as_deref(),
        Some("rgba(0, 255, 0, 0.8)")
    );
}

// ---------------------------------------------------------------------------
// Border
// ---------------------------------------------------------------------------

#[test]
fn test_border_style_and_color() {
    let mut pilot = Pilot::new().unwrap();
    pilot.set_border_style("double");
    pilot.set_border_color("#aa0000");

    let classes = pilot.node_classes("page-border").unwrap();
    assert!(classes.contains(&"page-border".to_owned()));
    assert!(classes.contains(&"border-style-double".to_owned()));
    assert!(!classes.contains(&"border-style-solid".to_owned()));
    assert_eq!(
        pilot.node_style("page-border").unwrap().border_color.as_deref(),
        Some("#aa0000")
    );
}

// ---------------------------------------------------------------------------
// Viewport
// ---------------------------------------------------------------------------

#[test]
fn test_responsive_scale_formula() {
    let mut pilot = Pilot::new().unwrap();

    // Narrow container: (477 - 80) / 794 = 0.5.
    pilot.resize(477.0);
    assert_eq!(pilot.editor().scale(), 0.5);
    assert_eq!(pilot.node_style("page-content").unwrap().scale, Some(0.5));

    // Wide container never upscales past 1.
    pilot.resize(3000.0);
    assert_eq!(pilot.editor().scale(), 1.0);

    assert_eq!(geometry::fit_scale(874.0), 1.0);
}

// ---------------------------------------------------------------------------
// Media
// ---------------------------------------------------------------------------

#[test]
fn test_remote_url_scheme_vetting() {
    let mut pilot = Pilot::new().unwrap();
    pilot.link_remote("f-coll", "ftp://host/logo.png");
    assert!(pilot.node_image("img-coll").is_none());

    pilot.link_remote("f-coll", "https://host/logo.png");
    assert_eq!(
        pilot.node_image("img-coll").unwrap(),
        "https://host/logo.png"
    );
}

#[tokio::test]
async fn test_logo_upload_reaches_thumbnail_and_page() {
    let mut pilot = Pilot::new().unwrap();
    let file = FileData::new(
        "crest.png",
        vec![0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a],
    );
    pilot.upload("f-univ", file).await;

    let src = pilot.node_image("img-univ").unwrap();
    assert!(src.starts_with("data:image/png;base64,"));
    assert_eq!(pilot.node_image("p-univ").unwrap(), src);
}

#[tokio::test]
async fn test_background_upload_updates_picker_affordances() {
    let mut pilot = Pilot::new().unwrap();
    let file = FileData::new("paper.jpg", vec![0xff, 0xd8, 0xff, 0xe0]);
    pilot.upload("bg-image-file", file).await;

    assert_eq!(pilot.node_text("bg-image-file").unwrap(), "paper.jpg");
    assert!(pilot
        .node_classes("bg-image-text")
        .unwrap()
        .contains(&"hidden".to_owned()));
    assert!(pilot
        .node_style("page-content")
        .unwrap()
        .background_image
        .unwrap()
        .starts_with("url(data:image/jpeg;base64,"));
}

#[tokio::test]
async fn test_overlapping_uploads_last_completion_wins() {
    let mut pilot = Pilot::new().unwrap();
    pilot
        .upload("f-coll", FileData::new("first.gif", b"GIF89a".to_vec()))
        .await;
    pilot
        .upload(
            "f-coll",
            FileData::new("second.jpg", vec![0xff, 0xd8, 0xff, 0xe0]),
        )
        .await;
    assert!(pilot
        .node_image("img-coll")
        .unwrap()
        .starts_with("data:image/jpeg;base64,"));
}

// ---------------------------------------------------------------------------
// Print preparation
// ---------------------------------------------------------------------------

#[tokio::test(start_paused = true)]
async fn test_prepare_print_settles_with_fresh_geometry() {
    let mut pilot = Pilot::new().unwrap();
    pilot.set_arc(Some("140"), None);

    let before = tokio::time::Instant::now();
    pilot.editor_mut().prepare_print().await;
    assert!(before.elapsed() >= std::time::Duration::from_millis(200));
    assert_eq!(
        pilot.node_path("curve-path").unwrap(),
        "M 50,160 A 250,140 0 0,1 550,160"
    );
}

// ---------------------------------------------------------------------------
// Whole-document snapshot
// ---------------------------------------------------------------------------

#[test]
fn test_outline_reflects_edits() {
    let mut pilot = Pilot::new().unwrap();
    pilot.set_text("in-univ", "Acme University");
    pilot.toggle(ToggleDomain::FieldRow, "roll");

    let outline = outline_to_string(pilot.editor().tree());
    assert!(outline.contains("out-univ [block] \"Acme University\""));
    assert!(outline.contains("preview-row-roll [none]"));
}
