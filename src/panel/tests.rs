//! Tests for the labels panel controller, driven through a recording host.

use std::collections::{HashMap, HashSet};

use super::LabelsPanel;
use crate::error::LabelsError;
use crate::host::{LabelsHost, SavedBox};
use crate::mapper::BoxPlacement;
use crate::model::{
    BoxHandle, ImageIdentity, LabelRect, PixelRect, ScreenRect, TagRef, ViewportContext,
};
use crate::placement::BoxPlacer;

const EPSILON: f32 = 0.0001;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

/// Host that keeps the element state the panel asked for.
#[derive(Default)]
struct RecordingHost {
    boxes: HashMap<BoxHandle, BoxPlacement>,
    items: HashSet<BoxHandle>,
    item_rects: HashMap<BoxHandle, PixelRect>,
    box_names: HashMap<BoxHandle, String>,
    item_names: HashMap<BoxHandle, String>,
    labels: Vec<TagRef>,
    panel_visible: Option<bool>,
    fail_create: bool,
    saved: HashMap<ImageIdentity, Vec<SavedBox>>,
    place_calls: usize,
}

impl LabelsHost for RecordingHost {
    fn create_entry(&mut self, handle: BoxHandle) -> Result<(), LabelsError> {
        if self.fail_create {
            return Err(LabelsError::allocation_failure("out of widgets"));
        }
        self.boxes.insert(handle, BoxPlacement::Hidden);
        self.items.insert(handle);
        Ok(())
    }

    fn destroy_box(&mut self, handle: BoxHandle) {
        self.boxes.remove(&handle);
    }

    fn destroy_item(&mut self, handle: BoxHandle) {
        self.items.remove(&handle);
    }

    fn place_box(&mut self, handle: BoxHandle, placement: BoxPlacement) {
        assert!(self.boxes.contains_key(&handle), "placing destroyed box");
        self.place_calls += 1;
        self.boxes.insert(handle, placement);
    }

    fn set_item_rect(&mut self, handle: BoxHandle, rect: PixelRect) {
        self.item_rects.insert(handle, rect);
    }

    fn set_box_name(&mut self, handle: BoxHandle, name: &str) {
        self.box_names.insert(handle, name.to_string());
    }

    fn set_item_name(&mut self, handle: BoxHandle, name: &str) {
        self.item_names.insert(handle, name.to_string());
    }

    fn render_labels(&mut self, labels: &[TagRef]) {
        self.labels = labels.to_vec();
    }

    fn set_panel_visible(&mut self, visible: bool) {
        self.panel_visible = Some(visible);
    }

    fn load_boxes(&mut self, image: &ImageIdentity) -> Vec<SavedBox> {
        self.saved.get(image).cloned().unwrap_or_default()
    }
}

impl RecordingHost {
    fn screen(&self, handle: BoxHandle) -> ScreenRect {
        self.boxes
            .get(&handle)
            .and_then(|p| p.rect())
            .expect("box should be visible")
    }
}

fn catalog() -> Vec<TagRef> {
    vec![
        TagRef::new(1, "person"),
        TagRef::new(2, "car"),
        TagRef::new(3, "tree"),
    ]
}

fn ctx(image: &str) -> ViewportContext {
    ViewportContext::new(ImageIdentity::new(image), 1.0, 800.0, 600.0)
}

fn panel() -> LabelsPanel {
    LabelsPanel::new(BoxPlacer::seeded(3))
}

#[test]
fn test_init_hides_and_renders_catalog() {
    let mut host = RecordingHost::default();
    let mut panel = panel();
    panel.init(&mut host, &catalog());

    assert_eq!(host.panel_visible, Some(false));
    assert!(!panel.is_visible());
    assert_eq!(host.labels, catalog());
}

#[test]
fn test_show_hide() {
    let mut host = RecordingHost::default();
    let mut panel = panel();

    panel.show(&mut host);
    assert!(panel.is_visible());
    assert_eq!(host.panel_visible, Some(true));

    panel.hide(&mut host);
    assert!(!panel.is_visible());
    assert_eq!(host.panel_visible, Some(false));
}

#[test]
fn test_add_box_without_context() {
    let mut host = RecordingHost::default();
    let mut panel = panel();

    assert_eq!(panel.add_box(&mut host), Err(LabelsError::NoTargetView));
    assert!(panel.add_label(&mut host).is_none());
    assert!(panel.is_empty());
    assert!(host.boxes.is_empty());
}

#[test]
fn test_add_box_allocation_failure_leaves_nothing() {
    let mut host = RecordingHost {
        fail_create: true,
        ..Default::default()
    };
    let mut panel = panel();
    panel.set_context(&mut host, ctx("a.jpg"));

    let err = panel.add_box(&mut host).unwrap_err();
    assert!(matches!(err, LabelsError::AllocationFailure { .. }));
    assert!(panel.is_empty());
    assert!(host.boxes.is_empty());
    assert!(host.items.is_empty());
}

#[test]
fn test_add_box_handles_exhausted() {
    let mut host = RecordingHost::default();
    let mut panel = panel();
    panel.set_context(&mut host, ctx("a.jpg"));
    panel.next_handle = u32::MAX;

    let err = panel.add_box(&mut host).unwrap_err();
    assert!(matches!(err, LabelsError::AllocationFailure { .. }));
    assert!(panel.add_label(&mut host).is_none());
    assert!(panel.is_empty());
    assert!(host.boxes.is_empty());
    assert!(host.items.is_empty());
    assert_eq!(panel.next_handle, u32::MAX);
}

#[test]
fn test_add_label_places_default_box() {
    let mut host = RecordingHost::default();
    let mut panel = panel();
    panel.set_context(&mut host, ctx("a.jpg"));

    let handle = panel.add_label(&mut host).expect("box should be added");
    let rect = panel.rect(handle).unwrap();
    assert!(rect.is_within_unit());
    assert!(rect.width >= 0.3 && rect.height >= 0.3);

    // On-screen box is derived from the normalized rect
    let screen = host.screen(handle);
    assert!(approx_eq(screen.x, rect.x * 800.0));
    assert!(approx_eq(screen.height, rect.height * 600.0));

    assert_eq!(host.box_names[&handle], "Untitled");
    assert_eq!(host.item_names[&handle], "Untitled");
    assert_eq!(
        host.item_rects[&handle].width,
        (rect.width * 800.0).round() as i32
    );
}

#[test]
fn test_apply_tag_promotes_and_rerenders() {
    let tags = catalog();
    let mut host = RecordingHost::default();
    let mut panel = panel();
    panel.init(&mut host, &tags);
    panel.set_context(&mut host, ctx("a.jpg"));

    let handle = panel.apply_tag(&mut host, &tags[2], &tags).unwrap();
    assert_eq!(panel.name(handle), Some("tree"));
    assert_eq!(host.box_names[&handle], "tree");

    let order: Vec<u32> = host.labels.iter().map(|t| t.id).collect();
    assert_eq!(order, vec![3, 1, 2]);

    panel.apply_tag(&mut host, &tags[1], &tags);
    panel.apply_tag(&mut host, &tags[2], &tags);
    let order: Vec<u32> = host.labels.iter().map(|t| t.id).collect();
    assert_eq!(order, vec![3, 2, 1]);
    assert_eq!(panel.len(), 3);
}

#[test]
fn test_apply_tag_without_view_still_promotes() {
    let tags = catalog();
    let mut host = RecordingHost::default();
    let mut panel = panel();

    assert!(panel.apply_tag(&mut host, &tags[1], &tags).is_none());
    assert_eq!(panel.registry().trending()[0].id, 2);
    assert_eq!(host.labels[0].id, 2);
}

#[test]
fn test_drag_updates_rect_and_item() {
    let mut host = RecordingHost::default();
    let mut panel = panel();
    panel.set_context(&mut host, ctx("a.jpg"));
    let handle = panel.add_box(&mut host).unwrap();
    panel.set_box_name(&mut host, handle, "car").unwrap();
    let calls_before = host.place_calls;

    let rect = panel
        .on_box_changed(&mut host, handle, ScreenRect::new(80.0, 60.0, 240.0, 180.0))
        .unwrap();

    assert!(approx_eq(rect.x, 0.1));
    assert!(approx_eq(rect.y, 0.1));
    assert!(approx_eq(rect.width, 0.3));
    assert_eq!(host.item_rects[&handle], PixelRect::new(80, 60, 240, 180));
    assert_eq!(host.item_names[&handle], "car");
    // Inside the image: the toolkit already shows the box where the user left it
    assert_eq!(host.place_calls, calls_before);
}

#[test]
fn test_drag_with_zero_scale_keeps_rect() {
    let mut host = RecordingHost::default();
    let mut panel = panel();
    panel.set_context(&mut host, ctx("a.jpg"));
    let handle = panel.add_box(&mut host).unwrap();
    let before = panel
        .set_rect(&mut host, handle, LabelRect::new(0.1, 0.1, 0.3, 0.3))
        .unwrap();
    panel.set_box_name(&mut host, handle, "car").unwrap();
    let item_before = host.item_rects[&handle];

    // Same image, so the box survives the context change
    panel.set_context(
        &mut host,
        ViewportContext {
            scale: 0.0,
            ..ctx("a.jpg")
        },
    );
    assert_eq!(panel.len(), 1);
    host.item_names.clear();
    let calls_before = host.place_calls;

    let rect = panel
        .on_box_changed(&mut host, handle, ScreenRect::new(10.0, 10.0, 50.0, 50.0))
        .unwrap();

    assert_eq!(rect, before);
    assert_eq!(panel.rect(handle), Some(before));
    assert_eq!(host.place_calls, calls_before);
    assert_eq!(host.item_rects[&handle], item_before);
    assert_eq!(host.item_names[&handle], "car");
}

#[test]
fn test_drag_past_edge_snaps_back() {
    let mut host = RecordingHost::default();
    let mut panel = panel();
    panel.set_context(&mut host, ctx("a.jpg"));
    let handle = panel.add_box(&mut host).unwrap();

    let rect = panel
        .on_box_changed(&mut host, handle, ScreenRect::new(-50.0, 60.0, 240.0, 180.0))
        .unwrap();

    assert_eq!(rect.x, 0.0);
    assert!(approx_eq(host.screen(handle).x, 0.0));
    assert_eq!(host.item_rects[&handle].x, 0);
}

#[test]
fn test_drag_unknown_box() {
    let mut host = RecordingHost::default();
    let mut panel = panel();
    panel.set_context(&mut host, ctx("a.jpg"));
    let handle = panel.add_box(&mut host).unwrap();
    panel.remove_box(&mut host, handle).unwrap();

    assert_eq!(
        panel.on_box_changed(&mut host, handle, ScreenRect::default()),
        Err(LabelsError::UnknownBox(handle))
    );
}

#[test]
fn test_zoom_repositions_in_place() {
    let mut host = RecordingHost::default();
    let mut panel = panel();
    panel.set_context(&mut host, ctx("a.jpg"));
    let handle = panel.add_box(&mut host).unwrap();
    panel
        .set_rect(&mut host, handle, LabelRect::new(0.1, 0.1, 0.3, 0.3))
        .unwrap();

    let zoomed = ViewportContext {
        scale: 2.0,
        ..ctx("a.jpg").with_focus(100.0, 0.0)
    };
    panel.set_context(&mut host, zoomed);

    assert_eq!(panel.handles(), vec![handle]);
    let screen = host.screen(handle);
    assert!(approx_eq(screen.x, 60.0));
    assert!(approx_eq(screen.y, 120.0));
    assert!(approx_eq(screen.width, 480.0));
}

#[test]
fn test_image_switch_clears_boxes() {
    let mut host = RecordingHost::default();
    let mut panel = panel();
    panel.set_context(&mut host, ctx("a.jpg"));
    let first = panel.add_label(&mut host).unwrap();
    let second = panel.add_label(&mut host).unwrap();

    panel.set_context(&mut host, ctx("b.jpg"));

    assert!(panel.is_empty());
    assert!(!host.boxes.contains_key(&first));
    assert!(!host.boxes.contains_key(&second));
    assert!(host.items.is_empty());
    assert_eq!(panel.context().unwrap().image, ImageIdentity::new("b.jpg"));
}

#[test]
fn test_image_switch_loads_saved_boxes() {
    let mut host = RecordingHost::default();
    host.saved.insert(
        ImageIdentity::new("b.jpg"),
        vec![
            SavedBox::new(LabelRect::new(0.5, 0.5, 0.2, 0.2), "dog"),
            SavedBox::new(LabelRect::new(0.9, 0.0, 0.5, 0.1), "wide"),
        ],
    );
    let mut panel = panel();
    panel.set_context(&mut host, ctx("a.jpg"));
    assert!(panel.is_empty());

    panel.set_context(&mut host, ctx("b.jpg"));
    let handles = panel.handles();
    assert_eq!(handles.len(), 2);
    assert_eq!(panel.name(handles[0]), Some("dog"));
    assert!(approx_eq(host.screen(handles[0]).x, 400.0));

    // Stored rects are validated on the way in
    let wide = panel.rect(handles[1]).unwrap();
    assert!(wide.is_within_unit());
    assert!(approx_eq(wide.x, 0.5));
}

#[test]
fn test_unmeasured_image_hides_boxes() {
    let mut host = RecordingHost::default();
    let mut panel = panel();
    panel.set_context(&mut host, ctx("a.jpg"));
    let handle = panel.add_label(&mut host).unwrap();
    assert!(host.boxes[&handle].is_visible());

    panel.set_context(
        &mut host,
        ViewportContext::new(ImageIdentity::new("a.jpg"), 1.0, 0.0, 0.0),
    );
    assert_eq!(host.boxes[&handle], BoxPlacement::Hidden);
    assert_eq!(panel.placement(handle), Some(BoxPlacement::Hidden));
    // Same image: the entry survives
    assert_eq!(panel.len(), 1);
}

#[test]
fn test_item_destroyed_by_container() {
    let mut host = RecordingHost::default();
    let mut panel = panel();
    panel.set_context(&mut host, ctx("a.jpg"));
    let handle = panel.add_label(&mut host).unwrap();

    host.items.remove(&handle);
    panel.on_item_destroyed(&mut host, handle);

    assert!(panel.is_empty());
    assert!(!host.boxes.contains_key(&handle));

    // Second notification is harmless
    panel.on_item_destroyed(&mut host, handle);
}

#[test]
fn test_remove_box_destroys_both_elements() {
    let mut host = RecordingHost::default();
    let mut panel = panel();
    panel.set_context(&mut host, ctx("a.jpg"));
    let keep = panel.add_label(&mut host).unwrap();
    let removed = panel.add_label(&mut host).unwrap();

    panel.remove_box(&mut host, removed).unwrap();

    assert_eq!(panel.handles(), vec![keep]);
    assert!(!host.boxes.contains_key(&removed));
    assert!(!host.items.contains(&removed));
    assert_eq!(
        panel.remove_box(&mut host, removed),
        Err(LabelsError::UnknownBox(removed))
    );
}

#[test]
fn test_handles_are_not_reused() {
    let mut host = RecordingHost::default();
    let mut panel = panel();
    panel.set_context(&mut host, ctx("a.jpg"));
    let first = panel.add_box(&mut host).unwrap();
    panel.remove_box(&mut host, first).unwrap();
    let second = panel.add_box(&mut host).unwrap();

    assert_ne!(first, second);
}
