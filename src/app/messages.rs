use crate::forecast::DailySample;
use crate::pricing::PriceSeries;

use super::{LoaderMessage, VizApp};
use egui::ColorImage;
use image::RgbaImage;
use std::path::PathBuf;

impl VizApp {
    pub fn process_loader_messages(&mut self, ctx: &egui::Context) {
        // Limit the number of messages processed per frame to prevent UI blocking
        let max_messages_per_frame = 10;
        let mut messages_processed = 0;

        while messages_processed < max_messages_per_frame {
            match self.loader_rx.try_recv() {
                Ok(msg) => {
                    self.handle_loader_message(msg, ctx);
                    messages_processed += 1;
                }
                Err(_) => break, // No more messages
            }
        }
    }

    fn handle_loader_message(&mut self, msg: LoaderMessage, ctx: &egui::Context) {
        match msg {
            LoaderMessage::ForecastLoaded { label, samples } => {
                self.handle_forecast_loaded(label, samples)
            }
            LoaderMessage::ForecastFailed { label, error } => {
                self.handle_forecast_failed(label, error)
            }
            LoaderMessage::PricesLoaded(series) => self.handle_prices_loaded(series),
            LoaderMessage::PricesFailed { coin, error } => self.handle_prices_failed(coin, error),
            LoaderMessage::ImageLoaded(path, pixels) => {
                self.handle_image_loaded(path, pixels, ctx)
            }
            LoaderMessage::ImageFailed(path, error) => self.handle_image_failed(path, error),
        }
    }

    fn handle_forecast_loaded(&mut self, label: String, samples: Vec<DailySample>) {
        self.forecast_loading = false;
        self.forecast_error = None;
        self.set_status_message(format!("Forecast loaded: {}", label));
        self.forecast_label = label;
        self.forecast_samples = samples;
    }

    fn handle_forecast_failed(&mut self, label: String, error: String) {
        log::warn!("forecast fetch for '{}' failed: {}", label, error);
        self.forecast_loading = false;
        self.forecast_error = Some(error);
    }

    fn handle_prices_loaded(&mut self, series: PriceSeries) {
        self.prices_loading = self.prices_loading.saturating_sub(1);

        if series.points.is_empty() {
            self.set_status_message(format!("No price data for {}", series.coin));
        } else {
            self.set_status_message(format!(
                "{}: {} price points",
                series.coin,
                series.points.len()
            ));
        }

        if let Some(slot) = self.price_series.iter_mut().find(|s| s.coin == series.coin) {
            *slot = series;
        } else {
            self.price_series.push(series);
        }

        // New data invalidates any brushed window
        self.price_window = None;
    }

    fn handle_prices_failed(&mut self, coin: String, error: String) {
        log::warn!("price fetch for '{}' failed: {}", coin, error);
        self.prices_loading = self.prices_loading.saturating_sub(1);
        self.set_status_message(format!("Price fetch failed for {}", coin));
    }

    fn handle_image_loaded(&mut self, path: PathBuf, pixels: RgbaImage, ctx: &egui::Context) {
        self.image_loading = false;

        let size = [pixels.width() as usize, pixels.height() as usize];
        let color_image = ColorImage::from_rgba_unmultiplied(size, pixels.as_raw());
        self.image_texture = Some(ctx.load_texture(
            "histogram-image",
            color_image,
            egui::TextureOptions::LINEAR,
        ));

        self.set_status_message(format!(
            "Loaded {} ({}x{})",
            path.file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_default(),
            pixels.width(),
            pixels.height()
        ));

        self.settings.last_image = Some(path.clone());
        self.image_path = Some(path);
        self.image_pixels = Some(pixels);
        self.region_histogram = None;
        self.selection_rect = None;
    }

    fn handle_image_failed(&mut self, path: PathBuf, error: String) {
        log::error!("failed to load '{}': {}", path.display(), error);
        self.image_loading = false;
        self.set_status_message(format!("Could not load {}: {}", path.display(), error));
    }
}
