mod app;

pub use app::Tonearm;

/// Open the player window and hand control to the toolkit's event loop.
pub fn run() -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([400.0, 650.0])
            .with_min_inner_size([400.0, 650.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Tonearm",
        options,
        Box::new(|cc| Tonearm::new(cc).map(app_box).map_err(Into::into)),
    )
    .map_err(|e| anyhow::anyhow!("event loop failed: {e}"))
}

fn app_box(app: Tonearm) -> Box<dyn eframe::App> {
    Box::new(app)
}
