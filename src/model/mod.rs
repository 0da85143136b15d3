//! Data models for the picture labels panel.

mod handle;
mod rect;
mod tag;
mod viewport;

pub use handle::BoxHandle;
pub use rect::{LabelRect, PixelRect, ScreenRect};
pub use tag::{TagCatalog, TagRef};
pub use viewport::{ImageIdentity, ViewportContext};
