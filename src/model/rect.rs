//! Rectangle types used by the label panel.
//!
//! Three coordinate spaces are involved:
//! - [`LabelRect`]: normalized fractions of the image (the persisted truth)
//! - [`ScreenRect`]: on-screen pixels inside the image view (derived)
//! - [`PixelRect`]: native image pixels, rounded (shown to the user)

use serde::{Deserialize, Serialize};

/// A bounding box as fractions of image width/height, origin top-left.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LabelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl LabelRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`).
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Check whether the rectangle lies fully inside the unit square.
    pub fn is_within_unit(&self) -> bool {
        self.x >= 0.0
            && self.y >= 0.0
            && self.width >= 0.0
            && self.height >= 0.0
            && self.right() <= 1.0
            && self.bottom() <= 1.0
    }

    /// Clamp the rectangle into `[0,1] x [0,1]`.
    ///
    /// Size is clamped first, then the origin is shifted back inside so a box
    /// dragged past an edge keeps its size. Returns `true` if anything changed.
    pub fn validate(&mut self) -> bool {
        let before = *self;
        self.width = clamp_unit(self.width);
        self.height = clamp_unit(self.height);
        self.x = clamp_span(self.x, 1.0 - self.width);
        self.y = clamp_span(self.y, 1.0 - self.height);
        *self != before
    }

    /// Return a validated copy.
    pub fn validated(mut self) -> Self {
        self.validate();
        self
    }
}

fn clamp_unit(v: f32) -> f32 {
    if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 }
}

fn clamp_span(v: f32, max: f32) -> f32 {
    if v.is_finite() { v.clamp(0.0, max.max(0.0)) } else { 0.0 }
}

/// A rectangle in on-screen pixels, relative to the image view.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Bottom edge (`y + height`).
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

/// A rectangle in native image pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}
