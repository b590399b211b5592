mod app;
mod errors;
mod forecast;
mod histogram;
mod logging;
mod net;
mod pricing;
mod settings;
#[cfg(test)]
mod tests;
mod ui;

use app::VizApp;
use eframe::egui;
use settings::Settings;

fn main() -> eframe::Result<()> {
    logging::init_tracing();
    tracing::info!("starting VizLab {}", env!("CARGO_PKG_VERSION"));

    let settings = Settings::load();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window_size.0, settings.window_size.1])
            .with_min_inner_size([700.0, 500.0])
            .with_icon(load_icon()),
        ..Default::default()
    };

    eframe::run_native(
        "VizLab",
        native_options,
        Box::new(|cc| Ok(Box::new(VizApp::new(cc, settings)))),
    )
}

fn load_icon() -> egui::IconData {
    // Programmatic icon: three channel bars in a dark disc
    let size = 64usize;
    let mut rgba = vec![0u8; size * size * 4];

    for y in 0..size {
        for x in 0..size {
            let idx = (y * size + x) * 4;
            let cx = x as f32 - size as f32 / 2.0;
            let cy = y as f32 - size as f32 / 2.0;
            let dist = (cx * cx + cy * cy).sqrt();

            if dist < size as f32 / 2.0 - 2.0 {
                let (r, g, b) = match x * 3 / size {
                    0 => (220, 70, 70),
                    1 => (70, 200, 90),
                    _ => (80, 110, 230),
                };
                let bar_height = (size * (2 + (x * 7 / size) % 3)) / 4;
                if size - y < bar_height {
                    rgba[idx] = r;
                    rgba[idx + 1] = g;
                    rgba[idx + 2] = b;
                } else {
                    rgba[idx] = 30;
                    rgba[idx + 1] = 30;
                    rgba[idx + 2] = 34;
                }
                rgba[idx + 3] = 255;
            }
        }
    }

    egui::IconData {
        rgba,
        width: size as u32,
        height: size as u32,
    }
}
