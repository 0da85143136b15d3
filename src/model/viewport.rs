//! Viewport state of the image being annotated.

use std::fmt;

use crate::constants::MIN_VISIBLE_EXTENT;

/// Opaque identity of the annotated image (its file path).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageIdentity(String);

impl ImageIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ImageIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Current zoom/pan state of the image view.
///
/// `width`/`height` are the native image dimensions, `scale` the zoom factor.
/// `offset` is where the image starts inside the view and `focus` the
/// scrolled-to point of the scaled image; both are in screen pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewportContext {
    pub scale: f32,
    pub width: f32,
    pub height: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub focus_x: f32,
    pub focus_y: f32,
    pub image: ImageIdentity,
}

impl ViewportContext {
    /// Create a context for an unscrolled image at the given scale.
    pub fn new(image: ImageIdentity, scale: f32, width: f32, height: f32) -> Self {
        Self {
            scale,
            width,
            height,
            offset_x: 0.0,
            offset_y: 0.0,
            focus_x: 0.0,
            focus_y: 0.0,
            image,
        }
    }

    /// Set the offset of the image inside the view.
    pub fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    /// Set the focus point.
    pub fn with_focus(mut self, x: f32, y: f32) -> Self {
        self.focus_x = x;
        self.focus_y = y;
        self
    }

    /// Width of the image on screen (`scale * width`).
    pub fn scaled_width(&self) -> f32 {
        self.scale * self.width
    }

    /// Height of the image on screen (`scale * height`).
    pub fn scaled_height(&self) -> f32 {
        self.scale * self.height
    }

    /// Horizontal translation applied to scaled image coordinates.
    pub fn shift_x(&self) -> f32 {
        self.focus_x - self.offset_x
    }

    /// Vertical translation applied to scaled image coordinates.
    pub fn shift_y(&self) -> f32 {
        self.focus_y - self.offset_y
    }

    /// Whether the image has been measured; boxes stay hidden until it has.
    pub fn is_measured(&self) -> bool {
        self.width >= MIN_VISIBLE_EXTENT && self.height >= MIN_VISIBLE_EXTENT
    }

    /// Whether `other` shows the same image (possibly with different zoom/pan).
    pub fn same_image(&self, other: &ViewportContext) -> bool {
        self.image == other.image
    }
}
