//! The GUI adapter driven by the panel.
//!
//! The panel never touches toolkit elements directly. Each bounding box entry
//! owns two elements on the host side, the draggable box in the image view and
//! the row in the label list, both addressed by the entry's [`BoxHandle`].

use crate::error::LabelsError;
use crate::mapper::BoxPlacement;
use crate::model::{BoxHandle, ImageIdentity, LabelRect, PixelRect, TagRef};

/// A previously stored box, restored when its image is opened.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedBox {
    pub rect: LabelRect,
    pub name: String,
}

impl SavedBox {
    pub fn new(rect: LabelRect, name: impl Into<String>) -> Self {
        Self {
            rect,
            name: name.into(),
        }
    }
}

/// Element operations the panel needs from the GUI toolkit.
pub trait LabelsHost {
    /// Create the box element (in the image view) and the item element (in the
    /// label list) for `handle`.
    ///
    /// On error nothing may remain allocated for `handle`.
    fn create_entry(&mut self, handle: BoxHandle) -> Result<(), LabelsError>;

    /// Destroy the box element of `handle`.
    fn destroy_box(&mut self, handle: BoxHandle);

    /// Destroy the list item element of `handle`.
    fn destroy_item(&mut self, handle: BoxHandle);

    /// Show and move the box element, or hide it.
    fn place_box(&mut self, handle: BoxHandle, placement: BoxPlacement);

    /// Update the exact pixel coordinates shown by the list item.
    fn set_item_rect(&mut self, handle: BoxHandle, rect: PixelRect);

    fn set_box_name(&mut self, handle: BoxHandle, name: &str);

    fn set_item_name(&mut self, handle: BoxHandle, name: &str);

    /// Replace the contents of the available-labels picker.
    fn render_labels(&mut self, labels: &[TagRef]);

    /// Show or hide the whole panel.
    fn set_panel_visible(&mut self, visible: bool);

    /// Boxes stored for `image`. Storage is up to the host; none by default.
    fn load_boxes(&mut self, _image: &ImageIdentity) -> Vec<SavedBox> {
        Vec::new()
    }
}
