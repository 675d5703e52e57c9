//! The editor engine: message loop, binding resolution, patch application.
//!
//! [`Editor`] owns every subsystem and is the only writer to the preview
//! tree. Events arrive as [`Envelope`]s, are drained in arrival order, and
//! each handler applies its full effect before the next message is looked
//! at — a toggle's icon, marker class, and display always change together.
//!
//! Runtime misses (unbound field, missing node, unparsable value) are logged
//! at debug level and leave the preview untouched. The only hard errors are
//! configuration errors at construction.

use std::collections::HashSet;
use std::time::Duration;

use crate::arc::ArcState;
use crate::background::BackgroundState;
use crate::border::{BorderState, BorderStyle};
use crate::event::{message, Envelope, EventDispatcher};
use crate::field::registry::label_suffix;
use crate::field::{BindingTable, ConfigError, FieldRegistry, Transform};
use crate::geometry;
use crate::media::{self, FileData};
use crate::preview::{standard_page, NodeData, PreviewTree, PLACEHOLDER_GLYPH};
use crate::style::StyleResolver;
use crate::visibility::{VisibilityController, VisibilityPatch, HIDDEN_FIELD_CLASS};

/// How long the engine lets the preview settle before reporting
/// print-readiness. Covers font and layout work on the host surface.
const PRINT_SETTLE: Duration = Duration::from_millis(200);

/// Marker class on the background-image preview and placeholder text.
const HIDDEN_CLASS: &str = "hidden";

/// The live preview engine for one open document.
pub struct Editor {
    registry: FieldRegistry,
    bindings: BindingTable,
    tree: PreviewTree,
    styles: StyleResolver,
    visibility: VisibilityController,
    arc: ArcState,
    background: BackgroundState,
    border: BorderState,
    dispatcher: EventDispatcher,
    scale: f64,
    dirty: HashSet<String>,
    offline_worker: bool,
}

impl Editor {
    /// Build an editor over the standard document.
    ///
    /// Validates the binding table against the registry and the preview tree,
    /// then renders the initial curve geometry.
    pub fn new() -> Result<Self, ConfigError> {
        let registry = FieldRegistry::standard();
        let bindings = BindingTable::standard();
        let tree = standard_page();
        bindings.validate(&registry, &tree)?;

        let mut editor = Self {
            registry,
            bindings,
            tree,
            styles: StyleResolver::new(),
            visibility: VisibilityController::new(),
            arc: ArcState::default(),
            background: BackgroundState::default(),
            border: BorderState::default(),
            dispatcher: EventDispatcher::new(),
            scale: 1.0,
            dirty: HashSet::new(),
            offline_worker: false,
        };
        editor.refresh_arc();
        editor.dirty.clear();
        Ok(editor)
    }

    // ─── Event intake ────────────────────────────────────────────────

    /// Enqueue an event for the next [`process`](Self::process) call.
    pub fn push(&mut self, envelope: Envelope) {
        self.dispatcher.push(envelope);
    }

    /// Drain and handle every pending event, in arrival order.
    pub fn process(&mut self) {
        for envelope in self.dispatcher.drain() {
            self.handle(envelope);
        }
    }

    fn handle(&mut self, envelope: Envelope) {
        if let Some(msg) = envelope.downcast_ref::<message::TextEdited>() {
            let value = msg.value.clone();
            self.mirror_text(&envelope.source, &value);
        } else if let Some(msg) = envelope.downcast_ref::<message::LabelEdited>() {
            let value = msg.value.clone();
            self.mirror_label(&envelope.source, &value);
        } else if let Some(msg) = envelope.downcast_ref::<message::ImageLoaded>() {
            let uri = msg.data_uri.clone();
            self.mirror_image(&envelope.source, &uri);
        } else if let Some(msg) = envelope.downcast_ref::<message::RemoteImageLinked>() {
            if media::accepts_remote(&msg.url) {
                let url = msg.url.clone();
                self.mirror_image(&envelope.source, &url);
            } else {
                tracing::debug!(source = %envelope.source, url = %msg.url, "refused remote image scheme");
            }
        } else if let Some(msg) = envelope.downcast_ref::<message::StyleChanged>() {
            let inputs = msg.inputs.clone();
            self.apply_style_change(&envelope.source, &inputs);
        } else if let Some(msg) = envelope.downcast_ref::<message::PositionChanged>() {
            let offset = msg.offset.clone();
            self.apply_position_change(&envelope.source, &offset);
        } else if let Some(msg) = envelope.downcast_ref::<message::VisibilityToggled>() {
            let domain = msg.domain;
            match self.visibility.toggle(domain, &envelope.source) {
                Some(patch) => self.apply_visibility_patch(&patch),
                None => {
                    tracing::debug!(source = %envelope.source, ?domain, "toggle for unknown key");
                }
            }
        } else if let Some(msg) = envelope.downcast_ref::<message::ArcAdjusted>() {
            self.arc = ArcState::adjust(msg.depth.as_deref(), msg.font_size.as_deref());
            self.refresh_arc();
        } else if let Some(msg) = envelope.downcast_ref::<message::BackgroundAdjusted>() {
            let patch = self
                .background
                .adjust(msg.color.as_deref(), msg.opacity.as_deref());
            self.patch_node("page-content", |node| node.apply_style(&patch));
            let label = self.background.opacity_label();
            self.patch_node("opacity-value", |node| node.text = label);
        } else if let Some(msg) = envelope.downcast_ref::<message::BackgroundImageLoaded>() {
            let uri = msg.data_uri.clone();
            let name = msg.file_name.clone();
            self.install_background_image(&uri, &name);
        } else if envelope
            .downcast_ref::<message::BackgroundImageCleared>()
            .is_some()
        {
            self.clear_background_image();
        } else if let Some(msg) = envelope.downcast_ref::<message::BorderStyleSelected>() {
            match BorderStyle::parse(&msg.style) {
                Some(style) => self.apply_border_style(style),
                None => {
                    tracing::debug!(raw = %msg.style, "unknown border style");
                }
            }
        } else if let Some(msg) = envelope.downcast_ref::<message::BorderColorChanged>() {
            self.apply_border_color(&msg.color);
        } else if let Some(msg) = envelope.downcast_ref::<message::ViewportResized>() {
            self.fit_viewport(msg.container_width);
        } else {
            tracing::debug!(
                name = envelope.message.message_name(),
                source = %envelope.source,
                "unhandled message"
            );
        }
    }

    // ─── Mirrors ─────────────────────────────────────────────────────

    fn mirror_text(&mut self, source: &str, value: &str) {
        let trimmed = value.trim();
        let text = if trimmed.is_empty() {
            PLACEHOLDER_GLYPH.to_owned()
        } else {
            trimmed.to_owned()
        };
        for target in self.targets(source, Transform::TextMirror) {
            let text = text.clone();
            self.patch_node(&target, |node| node.text = text);
        }
    }

    fn mirror_label(&mut self, source: &str, value: &str) {
        // "label-{field}" — the suffix rule keys on the field part.
        let field = source.strip_prefix("label-").unwrap_or(source);
        let text = format!("{}{}", value.trim(), label_suffix(field));
        for target in self.targets(source, Transform::LabelMirror) {
            let text = text.clone();
            self.patch_node(&target, |node| node.text = text);
        }
    }

    fn mirror_image(&mut self, source: &str, src: &str) {
        for target in self.targets(source, Transform::ImageMirror) {
            let src = src.to_owned();
            self.patch_node(&target, |node| node.image_src = Some(src));
        }
    }

    // ─── Style & position ────────────────────────────────────────────

    fn apply_style_change(&mut self, source: &str, inputs: &crate::style::StyleInputs) {
        for target in self.targets(source, Transform::StyleApply) {
            let svg_text = self
                .tree
                .by_dom_id(&target)
                .and_then(|id| self.tree.get(id))
                .is_some_and(|node| node.role == crate::preview::NodeRole::CurvedText);
            let patch = self.styles.apply(&target, inputs, svg_text);
            if patch.is_empty() {
                tracing::debug!(source, target = %target, "style change had no valid inputs");
                continue;
            }
            self.patch_node(&target, |node| node.apply_style(&patch));
        }
    }

    fn apply_position_change(&mut self, source: &str, offset: &str) {
        for target in self.targets(source, Transform::PositionApply) {
            match self.styles.offset(&target, offset) {
                Some(patch) => self.patch_node(&target, |node| node.apply_style(&patch)),
                None => {
                    tracing::debug!(source, raw = offset, "unparsable position offset");
                }
            }
        }
    }

    // ─── Visibility ──────────────────────────────────────────────────

    fn apply_visibility_patch(&mut self, patch: &VisibilityPatch) {
        if let Some(affordance) = &patch.affordance {
            let glyph = affordance.icon.glyph().to_owned();
            let marked = affordance.marked_hidden;
            self.patch_node(&affordance.node, move |node| {
                node.text = glyph;
                if marked {
                    node.add_class(HIDDEN_FIELD_CLASS);
                } else {
                    node.remove_class(HIDDEN_FIELD_CLASS);
                }
            });
        }
        let visible = patch.visible;
        self.patch_node(&patch.target, move |node| {
            if visible {
                node.show();
            } else {
                node.hide();
            }
        });
    }

    // ─── Curve geometry ──────────────────────────────────────────────

    fn refresh_arc(&mut self) {
        let path = self.arc.path();
        self.patch_node("curve-path", move |node| node.path_data = Some(path));
        let size = self.arc.font_size;
        self.patch_node("out-coll-path", move |node| {
            node.style.font_size_px = Some(size);
        });
    }

    // ─── Background image ────────────────────────────────────────────

    fn install_background_image(&mut self, data_uri: &str, file_name: &str) {
        let patch = self.background.set_image(data_uri);
        self.patch_node("page-content", |node| node.apply_style(&patch));

        let uri = data_uri.to_owned();
        self.patch_node("bg-image-preview", move |node| {
            node.image_src = Some(uri);
            node.remove_class(HIDDEN_CLASS);
        });
        self.patch_node("bg-image-text", |node| node.add_class(HIDDEN_CLASS));
        let name = file_name.to_owned();
        self.patch_node("bg-image-file", move |node| node.text = name);
    }

    fn clear_background_image(&mut self) {
        let patch = self.background.clear_image();
        self.patch_node("page-content", |node| node.apply_style(&patch));

        self.patch_node("bg-image-preview", |node| {
            node.image_src = None;
            node.add_class(HIDDEN_CLASS);
        });
        self.patch_node("bg-image-text", |node| node.remove_class(HIDDEN_CLASS));
        // Resetting the control value lets the same file fire again next time.
        self.patch_node("bg-image-file", |node| node.text.clear());
    }

    // ─── Border ──────────────────────────────────────────────────────

    fn apply_border_style(&mut self, style: BorderStyle) {
        let previous = self.border.style;
        self.border.style = style;
        self.patch_node("page-border", move |node| {
            node.remove_class(previous.class());
            node.add_class(style.class());
        });
    }

    fn apply_border_color(&mut self, raw: &str) {
        match crate::style::Rgb::parse_hex(raw) {
            Some(color) => {
                self.border.color = color;
                let mut patch = crate::style::InlineStyle::new();
                patch.border_color = Some(color.hex());
                self.patch_node("page-border", move |node| node.apply_style(&patch));
            }
            None => {
                tracing::debug!(raw, "unparsable border color");
            }
        }
    }

    // ─── Viewport ────────────────────────────────────────────────────

    /// Rescale the page to fit a container width.
    pub fn fit_viewport(&mut self, container_width: f64) {
        self.scale = geometry::fit_scale(container_width);
        let scale = self.scale;
        self.patch_node("page-content", move |node| {
            node.style.scale = Some(scale);
        });
    }

    // ─── Async operations ────────────────────────────────────────────

    /// Read an uploaded file and route it to its image targets.
    ///
    /// Completion order decides the final image when reads overlap; the last
    /// read to finish wins.
    pub async fn load_image(&mut self, field: &str, file: FileData) {
        let data_uri = media::read_as_data_uri(&file).await;
        let envelope = if field == "bg-image-file" {
            Envelope::new(
                message::BackgroundImageLoaded::new(data_uri, file.name.clone()),
                field,
            )
        } else {
            Envelope::new(message::ImageLoaded::new(data_uri), field)
        };
        self.push(envelope);
        self.process();
    }

    /// Flush pending events, refresh the curve, and wait for the preview to
    /// settle before the caller hands the page to the print surface.
    pub async fn prepare_print(&mut self) {
        self.process();
        self.refresh_arc();
        tokio::time::sleep(PRINT_SETTLE).await;
    }

    // ─── Offline capability ──────────────────────────────────────────

    /// Record the host's offline-capability worker registration outcome.
    ///
    /// Fire-and-forget: a failed registration is logged and swallowed,
    /// document correctness never depends on it.
    pub fn register_offline_worker<E: std::fmt::Display>(&mut self, outcome: Result<(), E>) {
        match outcome {
            Ok(()) => self.offline_worker = true,
            Err(err) => {
                tracing::debug!(%err, "offline worker registration failed");
            }
        }
    }

    /// Whether the offline worker registered successfully.
    pub fn offline_worker_registered(&self) -> bool {
        self.offline_worker
    }

    // ─── Accessors ───────────────────────────────────────────────────

    /// The node data behind a stable id, if present.
    pub fn node(&self, dom_id: &str) -> Option<&NodeData> {
        self.tree.by_dom_id(dom_id).and_then(|id| self.tree.get(id))
    }

    /// The preview tree (read-only).
    pub fn tree(&self) -> &PreviewTree {
        &self.tree
    }

    /// The field registry.
    pub fn registry(&self) -> &FieldRegistry {
        &self.registry
    }

    /// Current curve parameters.
    pub fn arc(&self) -> ArcState {
        self.arc
    }

    /// Current background state.
    pub fn background(&self) -> &BackgroundState {
        &self.background
    }

    /// Current border configuration.
    pub fn border(&self) -> BorderState {
        self.border
    }

    /// Visibility state (read-only).
    pub fn visibility(&self) -> &VisibilityController {
        &self.visibility
    }

    /// Current page scale factor.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Drain the set of node ids touched since the last call, sorted for
    /// deterministic iteration.
    pub fn take_dirty(&mut self) -> Vec<String> {
        let mut ids: Vec<String> = self.dirty.drain().collect();
        ids.sort_unstable();
        ids
    }

    // ─── Internals ───────────────────────────────────────────────────

    fn targets(&self, source: &str, transform: Transform) -> Vec<String> {
        let bindings = self.bindings.resolve(source);
        if bindings.is_empty() {
            tracing::debug!(source, "event for unbound field");
            return Vec::new();
        }
        bindings
            .iter()
            .filter(|b| b.transform == transform)
            .flat_map(|b| b.targets.iter().cloned())
            .collect()
    }

    /// Apply a mutation to the node behind a stable id. A missing node is a
    /// debug-logged no-op.
    fn patch_node(&mut self, dom_id: &str, mutate: impl FnOnce(&mut NodeData)) {
        match self.tree.by_dom_id(dom_id) {
            Some(id) => {
                if let Some(node) = self.tree.get_mut(id) {
                    mutate(node);
                    self.dirty.insert(dom_id.to_owned());
                }
            }
            None => {
                tracing::debug!(dom_id, "patch target missing from document");
            }
        }
    }
}

// ===========================================================================
// Tests
// ===========================================================================
