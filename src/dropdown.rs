//! Dropdown menu state.
//!
//! A dropdown is bound to a target element; clicking the target toggles the
//! menu. The popup opens below the target, or above it when there isn't
//! enough room below inside the parent. It closes when:
//! - An item is selected
//! - The user clicks anywhere outside it

use crate::model::ScreenRect;

/// One selectable entry of the menu.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DropdownItem {
    pub value: Option<String>,
    pub text: Option<String>,
}

impl DropdownItem {
    pub fn new(value: Option<&str>, text: Option<&str>) -> Self {
        Self {
            value: value.map(str::to_string),
            text: text.map(str::to_string),
        }
    }
}

/// Event emitted to listeners of the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropdownEvent {
    /// An item was chosen; carries its value.
    Changed(Option<String>),
}

/// Layout inputs for positioning the popup, all relative to the popup's parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropdownGeometry {
    /// Bounds of the target element
    pub anchor: ScreenRect,
    /// Height of the popup itself
    pub popup_height: f32,
    /// Height of the parent the popup must fit in
    pub parent_height: f32,
}

/// Where the popup goes after a toggle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PopupPosition {
    pub x: f32,
    pub y: f32,
    /// Opened above the target for lack of space below
    pub drop_up: bool,
}

/// Check if the popup should open upward.
pub fn should_drop_up(geometry: &DropdownGeometry) -> bool {
    geometry.anchor.bottom() + geometry.popup_height > geometry.parent_height
}

/// Position the popup against its target.
pub fn popup_position(geometry: &DropdownGeometry) -> PopupPosition {
    let drop_up = should_drop_up(geometry);
    let y = if drop_up {
        geometry.anchor.y - geometry.popup_height
    } else {
        geometry.anchor.bottom()
    };
    PopupPosition {
        x: geometry.anchor.x,
        y,
        drop_up,
    }
}

/// A dropdown menu attached to a target element.
#[derive(Debug, Clone, Default)]
pub struct Dropdown {
    items: Vec<DropdownItem>,
    target: Option<String>,
    is_open: bool,
    target_active: bool,
}

impl Dropdown {
    /// Create a closed dropdown with no items or target.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item; returns its index.
    pub fn add_item(&mut self, value: Option<&str>, text: Option<&str>) -> usize {
        self.items.push(DropdownItem::new(value, text));
        self.items.len() - 1
    }

    /// Bind the element (by id) whose clicks toggle the menu, replacing any
    /// previous target.
    pub fn bind_target(&mut self, target: impl Into<String>) {
        let target = target.into();
        if self.target.as_deref() != Some(target.as_str()) {
            self.target_active = false;
        }
        log::debug!("Dropdown bound to target {}", target);
        self.target = Some(target);
    }

    /// The target was clicked: open or close the menu.
    ///
    /// Returns the popup position when a target is bound.
    pub fn toggle(&mut self, geometry: &DropdownGeometry) -> Option<PopupPosition> {
        self.is_open = !self.is_open;
        self.target_active = self.is_open && self.target.is_some();
        log::debug!("Dropdown {}", if self.is_open { "opened" } else { "closed" });

        self.target.as_ref().map(|_| popup_position(geometry))
    }

    /// An item was clicked. Emits its value and closes the menu.
    ///
    /// Out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> Option<DropdownEvent> {
        let item = self.items.get(index)?;
        let event = DropdownEvent::Changed(item.value.clone());
        log::debug!("Dropdown item selected: {:?}", item.value);
        self.is_open = false;
        self.target_active = false;
        Some(event)
    }

    /// A click landed outside the menu.
    pub fn click_outside(&mut self) {
        if self.is_open {
            log::debug!("Dropdown closed via click outside");
        }
        self.is_open = false;
        self.target_active = false;
    }

    pub fn items(&self) -> &[DropdownItem] {
        &self.items
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether the target should be drawn in its "active" state.
    pub fn is_target_active(&self) -> bool {
        self.target_active
    }
}
