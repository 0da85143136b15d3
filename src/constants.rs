//! Global constants for the picture labels panel

/// Smallest measured image extent (in pixels) for which boxes are shown.
/// Anything smaller means the image has not been loaded or laid out yet.
pub const MIN_VISIBLE_EXTENT: f32 = 1.0;

/// Lower bound for the default x/y of a freshly added box (fraction of image).
pub const DEFAULT_ORIGIN_MIN: f32 = 0.1;

/// Upper bound for the default x/y of a freshly added box.
pub const DEFAULT_ORIGIN_MAX: f32 = 0.46;

/// Lower bound for the default width/height of a freshly added box.
pub const DEFAULT_SIZE_MIN: f32 = 0.3;

/// Upper bound for the default width/height of a freshly added box.
pub const DEFAULT_SIZE_MAX: f32 = 0.48;

/// Name given to boxes created without a tag.
pub const UNTITLED_LABEL: &str = "Untitled";

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;
