//! The picture labels panel controller.
//!
//! Owns the bounding box entries of the current image, the viewport context
//! they are drawn in, and the tag usage history. All element work is
//! delegated to a [`LabelsHost`].

use crate::constants::UNTITLED_LABEL;
use crate::error::LabelsError;
use crate::host::LabelsHost;
use crate::mapper::{self, BoxPlacement};
use crate::model::{BoxHandle, LabelRect, ScreenRect, TagCatalog, TagRef, ViewportContext};
use crate::placement::BoxPlacer;
use crate::registry::LabelRegistry;

#[cfg(test)]
mod tests;

/// One box on the image, paired with its row in the label list.
#[derive(Debug, Clone)]
struct BoxEntry {
    handle: BoxHandle,
    rect: LabelRect,
    name: String,
}

/// Controller for the labels panel of the picture view.
#[derive(Debug)]
pub struct LabelsPanel {
    registry: LabelRegistry,
    context: Option<ViewportContext>,
    entries: Vec<BoxEntry>,
    placer: BoxPlacer,
    next_handle: u32,
    visible: bool,
}

impl LabelsPanel {
    /// Create an empty, hidden panel.
    pub fn new(placer: BoxPlacer) -> Self {
        Self {
            registry: LabelRegistry::new(),
            context: None,
            entries: Vec::new(),
            placer,
            next_handle: 1,
            visible: false,
        }
    }

    /// Bring the host in line with a fresh panel: hidden, picker filled.
    pub fn init<H, C>(&mut self, host: &mut H, catalog: &C)
    where
        H: LabelsHost + ?Sized,
        C: TagCatalog + ?Sized,
    {
        self.visible = false;
        host.set_panel_visible(false);
        self.render_available_labels(host, catalog);
    }

    // ------------------------------------------------------------------
    // Context
    // ------------------------------------------------------------------

    /// Install a new viewport context.
    ///
    /// A different image clears every box (and loads the stored ones for the
    /// new image); a zoom/pan change of the same image moves boxes in place.
    pub fn set_context<H: LabelsHost + ?Sized>(&mut self, host: &mut H, ctx: ViewportContext) {
        let switching = self
            .context
            .as_ref()
            .is_none_or(|current| !current.same_image(&ctx));

        if switching {
            log::info!("Labels context switched to image {}", ctx.image);
            self.clear_boxes(host);
            self.context = Some(ctx);
            self.load_boxes(host);
        } else {
            self.context = Some(ctx);
        }
        self.update_boxes(host);
    }

    /// The installed viewport context, if any.
    pub fn context(&self) -> Option<&ViewportContext> {
        self.context.as_ref()
    }

    /// Reposition every box for the current context.
    pub fn update_boxes<H: LabelsHost + ?Sized>(&self, host: &mut H) {
        for entry in &self.entries {
            place(host, self.context.as_ref(), entry.handle, &entry.rect);
        }
    }

    fn load_boxes<H: LabelsHost + ?Sized>(&mut self, host: &mut H) {
        let Some(image) = self.context.as_ref().map(|c| c.image.clone()) else {
            return;
        };

        let saved = host.load_boxes(&image);
        if saved.is_empty() {
            return;
        }
        log::debug!("Restoring {} boxes for {}", saved.len(), image);

        for stored in saved {
            match self.create_entry(host) {
                Ok(index) => {
                    let entry = &mut self.entries[index];
                    write_rect(host, self.context.as_ref(), entry, stored.rect);
                    write_name(host, entry, &stored.name);
                }
                Err(e) => log::warn!("Failed to restore box for {}: {}", image, e),
            }
        }
    }

    // ------------------------------------------------------------------
    // Entries
    // ------------------------------------------------------------------

    /// Create a new entry with an empty rectangle.
    ///
    /// Fails without side effects when no image view is bound or the host
    /// can't allocate the elements.
    pub fn add_box<H: LabelsHost + ?Sized>(&mut self, host: &mut H) -> Result<BoxHandle, LabelsError> {
        let index = self.create_entry(host)?;
        Ok(self.entries[index].handle)
    }

    /// Allocate a handle and its elements; returns the index of the new entry.
    fn create_entry<H: LabelsHost + ?Sized>(&mut self, host: &mut H) -> Result<usize, LabelsError> {
        if self.context.is_none() {
            log::warn!("Cannot add a box: no image view bound");
            return Err(LabelsError::NoTargetView);
        }

        let Some(next) = self.next_handle.checked_add(1) else {
            log::warn!("Cannot add a box: handles exhausted");
            return Err(LabelsError::allocation_failure("box handles exhausted"));
        };
        let handle = BoxHandle::new(self.next_handle);
        self.next_handle = next;

        if let Err(e) = host.create_entry(handle) {
            log::warn!("Cannot add box {}: {}", handle, e);
            return Err(e);
        }

        let entry = BoxEntry {
            handle,
            rect: LabelRect::default(),
            name: String::new(),
        };
        place(host, self.context.as_ref(), handle, &entry.rect);
        self.entries.push(entry);
        log::debug!("Added box {}", handle);
        Ok(self.entries.len() - 1)
    }

    /// Remove an entry and destroy both of its elements.
    pub fn remove_box<H: LabelsHost + ?Sized>(
        &mut self,
        host: &mut H,
        handle: BoxHandle,
    ) -> Result<(), LabelsError> {
        let entry = self.take_entry(handle)?;
        host.destroy_box(entry.handle);
        host.destroy_item(entry.handle);
        log::debug!("Removed box {}", handle);
        Ok(())
    }

    /// The container destroyed the list item of `handle`; drop the entry and
    /// its box element. Unknown handles are ignored.
    pub fn on_item_destroyed<H: LabelsHost + ?Sized>(&mut self, host: &mut H, handle: BoxHandle) {
        if self.take_entry(handle).is_ok() {
            host.destroy_box(handle);
            log::debug!("Box {} destroyed with its item", handle);
        }
    }

    /// Destroy every entry.
    pub fn clear_boxes<H: LabelsHost + ?Sized>(&mut self, host: &mut H) {
        for entry in self.entries.drain(..) {
            host.destroy_box(entry.handle);
            host.destroy_item(entry.handle);
        }
    }

    /// The user moved or resized the box of `handle` to `screen`.
    ///
    /// Maps the box back to image fractions, clamps it into the image and
    /// snaps the visual box back if it was dragged past an edge.
    pub fn on_box_changed<H: LabelsHost + ?Sized>(
        &mut self,
        host: &mut H,
        handle: BoxHandle,
        screen: ScreenRect,
    ) -> Result<LabelRect, LabelsError> {
        let ctx = self.context.as_ref().ok_or(LabelsError::NoTargetView)?;
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.handle == handle)
            .ok_or(LabelsError::UnknownBox(handle))?;

        match mapper::apply_drag(&screen, ctx) {
            Some(outcome) => {
                entry.rect = outcome.rect;
                if let Some(correction) = outcome.correction {
                    log::debug!("Box {} clamped to {:?}", handle, entry.rect);
                    host.place_box(handle, correction);
                }
                host.set_item_rect(handle, outcome.pixels);
            }
            None => log::debug!("Ignoring change of box {}: image has no extent", handle),
        }
        host.set_item_name(handle, &entry.name);
        Ok(entry.rect)
    }

    /// Replace the rectangle of an entry (validated) and redraw it.
    pub fn set_rect<H: LabelsHost + ?Sized>(
        &mut self,
        host: &mut H,
        handle: BoxHandle,
        rect: LabelRect,
    ) -> Result<LabelRect, LabelsError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.handle == handle)
            .ok_or(LabelsError::UnknownBox(handle))?;

        Ok(write_rect(host, self.context.as_ref(), entry, rect))
    }

    /// Rename an entry (both its box and its list item).
    pub fn set_box_name<H: LabelsHost + ?Sized>(
        &mut self,
        host: &mut H,
        handle: BoxHandle,
        name: &str,
    ) -> Result<(), LabelsError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|e| e.handle == handle)
            .ok_or(LabelsError::UnknownBox(handle))?;

        write_name(host, entry, name);
        Ok(())
    }

    pub fn rect(&self, handle: BoxHandle) -> Option<LabelRect> {
        self.entry(handle).map(|e| e.rect)
    }

    pub fn name(&self, handle: BoxHandle) -> Option<&str> {
        self.entry(handle).map(|e| e.name.as_str())
    }

    /// Where the box of `handle` is currently drawn.
    pub fn placement(&self, handle: BoxHandle) -> Option<BoxPlacement> {
        let entry = self.entry(handle)?;
        Some(match self.context.as_ref() {
            Some(ctx) => mapper::forward(&entry.rect, ctx),
            None => BoxPlacement::Hidden,
        })
    }

    /// Handles of all live entries, in creation order.
    pub fn handles(&self) -> Vec<BoxHandle> {
        self.entries.iter().map(|e| e.handle).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, handle: BoxHandle) -> Option<&BoxEntry> {
        self.entries.iter().find(|e| e.handle == handle)
    }

    fn take_entry(&mut self, handle: BoxHandle) -> Result<BoxEntry, LabelsError> {
        let index = self
            .entries
            .iter()
            .position(|e| e.handle == handle)
            .ok_or(LabelsError::UnknownBox(handle))?;
        Ok(self.entries.remove(index))
    }

    // ------------------------------------------------------------------
    // User actions
    // ------------------------------------------------------------------

    /// "Add label" button: a new untitled box at the default placement.
    pub fn add_label<H: LabelsHost + ?Sized>(&mut self, host: &mut H) -> Option<BoxHandle> {
        self.add_default_box(host, UNTITLED_LABEL)
    }

    /// A tag in the picker was clicked: remember it as recently used and
    /// add a box named after it.
    pub fn apply_tag<H, C>(&mut self, host: &mut H, tag: &TagRef, catalog: &C) -> Option<BoxHandle>
    where
        H: LabelsHost + ?Sized,
        C: TagCatalog + ?Sized,
    {
        self.registry.promote(tag);
        let handle = self.add_default_box(host, &tag.name);
        self.render_available_labels(host, catalog);
        handle
    }

    fn add_default_box<H: LabelsHost + ?Sized>(
        &mut self,
        host: &mut H,
        name: &str,
    ) -> Option<BoxHandle> {
        let index = self.create_entry(host).ok()?;
        let rect = self.placer.next_rect();
        let entry = &mut self.entries[index];
        write_rect(host, self.context.as_ref(), entry, rect);
        write_name(host, entry, name);
        Some(entry.handle)
    }

    /// Refill the picker from the registry and `catalog`.
    pub fn render_available_labels<H, C>(&self, host: &mut H, catalog: &C)
    where
        H: LabelsHost + ?Sized,
        C: TagCatalog + ?Sized,
    {
        let labels = self.registry.render(catalog);
        host.render_labels(&labels);
    }

    pub fn registry(&self) -> &LabelRegistry {
        &self.registry
    }

    // ------------------------------------------------------------------
    // Visibility
    // ------------------------------------------------------------------

    pub fn show<H: LabelsHost + ?Sized>(&mut self, host: &mut H) {
        self.visible = true;
        host.set_panel_visible(true);
    }

    pub fn hide<H: LabelsHost + ?Sized>(&mut self, host: &mut H) {
        self.visible = false;
        host.set_panel_visible(false);
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}

impl Default for LabelsPanel {
    fn default() -> Self {
        Self::new(BoxPlacer::default())
    }
}

fn place<H: LabelsHost + ?Sized>(
    host: &mut H,
    ctx: Option<&ViewportContext>,
    handle: BoxHandle,
    rect: &LabelRect,
) {
    let placement = match ctx {
        Some(ctx) => mapper::forward(rect, ctx),
        None => BoxPlacement::Hidden,
    };
    host.place_box(handle, placement);
}

/// Store the validated `rect` on `entry` and redraw both of its elements.
fn write_rect<H: LabelsHost + ?Sized>(
    host: &mut H,
    ctx: Option<&ViewportContext>,
    entry: &mut BoxEntry,
    rect: LabelRect,
) -> LabelRect {
    entry.rect = rect.validated();
    if let Some(ctx) = ctx {
        host.set_item_rect(entry.handle, mapper::pixel_rect(&entry.rect, ctx));
    }
    place(host, ctx, entry.handle, &entry.rect);
    entry.rect
}

fn write_name<H: LabelsHost + ?Sized>(host: &mut H, entry: &mut BoxEntry, name: &str) {
    entry.name = name.to_string();
    host.set_box_name(entry.handle, name);
    host.set_item_name(entry.handle, name);
}
