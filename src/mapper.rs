//! Normalized-to-screen coordinate mapping.
//!
//! Boxes store only a [`LabelRect`]; their on-screen rectangle is always
//! recomputed from it and the current [`ViewportContext`].

use crate::model::{LabelRect, PixelRect, ScreenRect, ViewportContext};

/// Where (and whether) a visual box should be drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BoxPlacement {
    /// The image isn't measured yet; the box must be hidden.
    Hidden,
    /// The box is shown at this rectangle.
    Visible(ScreenRect),
}

impl BoxPlacement {
    pub fn is_visible(&self) -> bool {
        matches!(self, BoxPlacement::Visible(_))
    }

    /// The screen rectangle, if visible.
    pub fn rect(&self) -> Option<ScreenRect> {
        match self {
            BoxPlacement::Hidden => None,
            BoxPlacement::Visible(r) => Some(*r),
        }
    }
}

/// Map a normalized rectangle to screen pixels, ignoring visibility.
pub fn project(rect: &LabelRect, ctx: &ViewportContext) -> ScreenRect {
    let width = ctx.scaled_width();
    let height = ctx.scaled_height();

    ScreenRect {
        x: rect.x * width - ctx.shift_x(),
        y: rect.y * height - ctx.shift_y(),
        width: rect.width * width,
        height: rect.height * height,
    }
}

/// Forward transform: placement of a box for the given context.
pub fn forward(rect: &LabelRect, ctx: &ViewportContext) -> BoxPlacement {
    if !ctx.is_measured() {
        return BoxPlacement::Hidden;
    }
    BoxPlacement::Visible(project(rect, ctx))
}

/// Inverse transform: normalized rectangle for an on-screen box.
///
/// The result is not validated. Returns `None` when the scaled image has no
/// usable extent to divide by.
pub fn inverse(screen: &ScreenRect, ctx: &ViewportContext) -> Option<LabelRect> {
    let width = ctx.scaled_width();
    let height = ctx.scaled_height();

    if !(width.is_finite() && height.is_finite() && width > f32::EPSILON && height > f32::EPSILON)
    {
        return None;
    }

    Some(LabelRect {
        x: (screen.x + ctx.shift_x()) / width,
        y: (screen.y + ctx.shift_y()) / height,
        width: screen.width / width,
        height: screen.height / height,
    })
}

/// Companion rectangle in native image pixels, rounded to the nearest integer.
pub fn pixel_rect(rect: &LabelRect, ctx: &ViewportContext) -> PixelRect {
    PixelRect {
        x: (rect.x * ctx.width).round() as i32,
        y: (rect.y * ctx.height).round() as i32,
        width: (rect.width * ctx.width).round() as i32,
        height: (rect.height * ctx.height).round() as i32,
    }
}

/// Result of mapping a user drag/resize back to normalized coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragOutcome {
    /// The validated normalized rectangle.
    pub rect: LabelRect,
    /// New placement for the visual box when validation had to correct it.
    pub correction: Option<BoxPlacement>,
    /// Companion rectangle in native image pixels.
    pub pixels: PixelRect,
}

/// Inverse-map a dragged box, clamp it into the image, and work out whether
/// the visual box must be snapped back.
pub fn apply_drag(screen: &ScreenRect, ctx: &ViewportContext) -> Option<DragOutcome> {
    let mut rect = inverse(screen, ctx)?;
    let correction = rect.validate().then(|| forward(&rect, ctx));

    Some(DragOutcome {
        rect,
        correction,
        pixels: pixel_rect(&rect, ctx),
    })
}
