use crate::forecast::DailySample;
use crate::histogram::ChannelHistogram;
use crate::pricing::{PriceSeries, TimeWindow};
use crate::settings::Settings;

use eframe::egui::{self, TextureHandle};
use image::RgbaImage;
use std::path::PathBuf;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Results posted back from loader threads.
pub enum LoaderMessage {
    ForecastLoaded {
        label: String,
        samples: Vec<DailySample>,
    },
    ForecastFailed {
        label: String,
        error: String,
    },
    PricesLoaded(PriceSeries),
    PricesFailed {
        coin: String,
        error: String,
    },
    ImageLoaded(PathBuf, RgbaImage),
    ImageFailed(PathBuf, String),
}

pub struct VizApp {
    // Settings
    pub settings: Settings,

    // Forecast section
    pub forecast_samples: Vec<DailySample>,
    pub forecast_label: String,
    pub forecast_loading: bool,
    pub forecast_error: Option<String>,
    pub city_input: String,

    // Prices section
    pub price_series: Vec<PriceSeries>,
    pub prices_loading: usize,
    /// `None` renders the full domain; a brush narrows it for both plots.
    pub price_window: Option<TimeWindow>,
    /// Drag anchor of an in-progress brush, in screen x.
    pub price_drag_start: Option<f32>,

    // Histogram section
    pub image_path: Option<PathBuf>,
    pub image_pixels: Option<RgbaImage>,
    pub image_texture: Option<TextureHandle>,
    pub image_loading: bool,
    /// Drag anchor of the in-progress region selection, in screen space.
    pub selection_start: Option<egui::Pos2>,
    /// Selection rectangle in image pixel coordinates, kept for redrawing.
    pub selection_rect: Option<(i64, i64, i64, i64)>,
    pub region_histogram: Option<ChannelHistogram>,

    // Async loading
    pub loader_tx: Sender<LoaderMessage>,
    pub loader_rx: Receiver<LoaderMessage>,

    // Status message
    pub status_message: Option<(String, std::time::Instant)>,

    // Context for repaint requests
    pub ctx: Option<egui::Context>,
}

impl VizApp {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings) -> Self {
        configure_style(&cc.egui_ctx);

        let (tx, rx) = channel();

        let mut app = Self {
            city_input: settings.default_city.clone(),
            price_series: settings
                .coins
                .iter()
                .map(|c| PriceSeries::empty(c))
                .collect(),
            settings,
            forecast_samples: Vec::new(),
            forecast_label: String::new(),
            forecast_loading: false,
            forecast_error: None,
            prices_loading: 0,
            price_window: None,
            price_drag_start: None,
            image_path: None,
            image_pixels: None,
            image_texture: None,
            image_loading: false,
            selection_start: None,
            selection_rect: None,
            region_histogram: None,
            loader_tx: tx,
            loader_rx: rx,
            status_message: None,
            ctx: Some(cc.egui_ctx.clone()),
        };

        app.reload_sample_forecast();

        if app.settings.fetch_prices_on_start {
            app.fetch_prices();
        }

        if app.settings.restore_last_image {
            if let Some(path) = app.settings.last_image.clone() {
                if path.exists() {
                    app.load_image(path);
                }
            }
        }

        app
    }

    /// Run `f` on a fresh thread and post its message back to the UI.
    pub fn spawn_loader<F>(&self, f: F)
    where
        F: FnOnce() -> Option<LoaderMessage> + Send + 'static,
    {
        let tx = self.loader_tx.clone();
        let ctx = self.ctx.clone();
        std::thread::spawn(move || {
            if let Some(msg) = f() {
                let _ = tx.send(msg);
            }
            if let Some(ctx) = ctx {
                ctx.request_repaint();
            }
        });
    }

    pub fn set_status_message(&mut self, msg: String) {
        self.status_message = Some((msg, std::time::Instant::now()));
    }
}

fn configure_style(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();
    style.visuals.window_shadow = egui::epaint::Shadow::NONE;
    style.visuals.popup_shadow = egui::epaint::Shadow::NONE;
    ctx.set_style(style);
}
