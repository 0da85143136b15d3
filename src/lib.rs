//! Picture labels - bounding box annotation panel core
//!
//! The toolkit-independent half of a picture viewer's labelling panel:
//! keeping normalized box rectangles and their on-screen boxes in sync under
//! zoom and pan, ordering the tag picker by recent use, and positioning
//! anchored dropdown menus.

pub mod config;
pub mod constants;
pub mod dropdown;
pub mod error;
pub mod host;
pub mod mapper;
pub mod model;
pub mod panel;
pub mod placement;
pub mod registry;

pub use config::{ConfigError, LabelsConfig, LogLevel, PlacementConfig};
pub use dropdown::{Dropdown, DropdownEvent, DropdownGeometry, PopupPosition};
pub use error::LabelsError;
pub use host::{LabelsHost, SavedBox};
pub use mapper::BoxPlacement;
pub use model::{
    BoxHandle, ImageIdentity, LabelRect, PixelRect, ScreenRect, TagCatalog, TagRef,
    ViewportContext,
};
pub use panel::LabelsPanel;
pub use placement::BoxPlacer;
pub use registry::LabelRegistry;
