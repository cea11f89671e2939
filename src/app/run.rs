//! Top-level entry point for running the scatter chart as a native window.
//!
//! [`run_scatter`] is the primary public API for launching the chart. It
//! applies the configuration (window sizing from the chart geometry, color
//! scheme, icon) and enters the eframe event loop.

use eframe::egui;

use super::ScatterApp;

/// Vertical room reserved for the heading bar above the canvas.
const TITLE_BAR_HEIGHT: f32 = 40.0;

/// Launch the chart in a native window.
///
/// The call blocks until the window is closed.
pub fn run_scatter(mut app: ScatterApp) -> eframe::Result<()> {
    let title = app.config().title.clone();
    let geometry = app.config().geometry;
    let scheme = app.config().color_scheme;
    let mut opts = app
        .config
        .native_options
        .take()
        .unwrap_or_else(eframe::NativeOptions::default);

    // Try to set the application icon from icon.svg if available.
    if opts.viewport.icon.is_none() {
        if let Some(icon) = load_app_icon_svg() {
            opts.viewport = opts.viewport.clone().with_icon(icon);
        }
    }

    // The canvas is fixed-size, so default to a window that fits it exactly.
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(
                geometry.canvas_width,
                geometry.canvas_height + TITLE_BAR_HEIGHT,
            ))
            .with_resizable(false);
    }

    eframe::run_native(
        &title,
        opts,
        Box::new(move |cc| {
            scheme.apply_to_ctx(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
}

/// Attempt to load the project's `icon.svg` as an [`egui::IconData`].
///
/// Returns `None` if the file does not exist or cannot be parsed/rendered.
fn load_app_icon_svg() -> Option<egui::IconData> {
    let svg_path = concat!(env!("CARGO_MANIFEST_DIR"), "/icon.svg");
    let data = std::fs::read(svg_path).ok()?;

    let opt = usvg::Options::default();
    let tree = usvg::Tree::from_data(&data, &opt).ok()?;
    let size = tree.size().to_int_size();
    if size.width() == 0 || size.height() == 0 {
        return None;
    }
    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())?;
    let mut canvas = pixmap.as_mut();
    resvg::render(&tree, tiny_skia::Transform::default(), &mut canvas);
    let rgba = pixmap.take();
    Some(egui::IconData {
        rgba,
        width: size.width(),
        height: size.height(),
    })
}
