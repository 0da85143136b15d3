/// Scripted labelling session against a host that only logs.
///
/// Usage: `labels-demo [config.json]`. Without an argument the config is
/// read from the user config directory, falling back to defaults.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;

    use picture_labels::{
        BoxPlacer, Dropdown, DropdownGeometry, ImageIdentity, LabelsConfig, LabelsPanel,
        ScreenRect, TagRef, ViewportContext,
    };

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => LabelsConfig::load_or_default(&path),
        None => LabelsConfig::default_path()
            .map(|path| LabelsConfig::load_or_default(&path))
            .unwrap_or_default(),
    };

    env_logger::Builder::new()
        .filter_level(config.log_level.to_level_filter())
        .parse_default_env()
        .init();

    let catalog = vec![
        TagRef::new(1, "person"),
        TagRef::new(2, "car"),
        TagRef::new(3, "tree"),
    ];
    let mut host = demo::LogHost;
    let mut panel = LabelsPanel::new(BoxPlacer::new(&config.placement));
    panel.init(&mut host, &catalog);
    panel.show(&mut host);

    let image = ImageIdentity::new("demo.jpg");
    panel.set_context(&mut host, ViewportContext::new(image.clone(), 1.0, 800.0, 600.0));

    let tagged = panel.apply_tag(&mut host, &catalog[1], &catalog);
    panel.add_label(&mut host);

    // Zoom in around the center
    let zoomed = ViewportContext::new(image, 2.0, 800.0, 600.0).with_focus(400.0, 300.0);
    panel.set_context(&mut host, zoomed);

    if let Some(handle) = tagged {
        match panel.on_box_changed(&mut host, handle, ScreenRect::new(-50.0, 10.0, 200.0, 150.0)) {
            Ok(rect) => log::info!("Box {} is now {:?}", handle, rect),
            Err(e) => log::error!("Drag failed: {}", e),
        }
    }

    let mut sort_menu = Dropdown::new();
    sort_menu.add_item(Some("name"), Some("Name"));
    sort_menu.add_item(Some("date"), Some("Date"));
    sort_menu.bind_target("btn-sort");
    let geometry = DropdownGeometry {
        anchor: ScreenRect::new(20.0, 500.0, 100.0, 24.0),
        popup_height: 64.0,
        parent_height: 540.0,
    };
    if let Some(pos) = sort_menu.toggle(&geometry) {
        log::info!("Sort menu at ({}, {}), drop up: {}", pos.x, pos.y, pos.drop_up);
    }
    if let Some(event) = sort_menu.select(1) {
        log::info!("Sort menu emitted {:?}", event);
    }

    panel.hide(&mut host);
    log::info!("Session finished with {} boxes", panel.len());
}

#[cfg(not(target_arch = "wasm32"))]
mod demo {
    use picture_labels::{BoxHandle, BoxPlacement, LabelsError, LabelsHost, PixelRect, TagRef};

    /// Host that logs every element operation instead of drawing.
    pub struct LogHost;

    impl LabelsHost for LogHost {
        fn create_entry(&mut self, handle: BoxHandle) -> Result<(), LabelsError> {
            log::info!("create box + item {}", handle);
            Ok(())
        }

        fn destroy_box(&mut self, handle: BoxHandle) {
            log::info!("destroy box {}", handle);
        }

        fn destroy_item(&mut self, handle: BoxHandle) {
            log::info!("destroy item {}", handle);
        }

        fn place_box(&mut self, handle: BoxHandle, placement: BoxPlacement) {
            match placement {
                BoxPlacement::Hidden => log::info!("hide box {}", handle),
                BoxPlacement::Visible(r) => log::info!(
                    "show box {} at ({:.1}, {:.1}) {:.1}x{:.1}",
                    handle,
                    r.x,
                    r.y,
                    r.width,
                    r.height
                ),
            }
        }

        fn set_item_rect(&mut self, handle: BoxHandle, rect: PixelRect) {
            log::info!(
                "item {} reads {},{} {}x{}",
                handle,
                rect.x,
                rect.y,
                rect.width,
                rect.height
            );
        }

        fn set_box_name(&mut self, handle: BoxHandle, name: &str) {
            log::info!("box {} named {:?}", handle, name);
        }

        fn set_item_name(&mut self, handle: BoxHandle, name: &str) {
            log::debug!("item {} named {:?}", handle, name);
        }

        fn render_labels(&mut self, labels: &[TagRef]) {
            let names: Vec<&str> = labels.iter().map(|t| t.name.as_str()).collect();
            log::info!("available labels: {}", names.join(", "));
        }

        fn set_panel_visible(&mut self, visible: bool) {
            log::info!("panel {}", if visible { "shown" } else { "hidden" });
        }
    }
}

// WASM builds use the library only
#[cfg(target_arch = "wasm32")]
fn main() {}
