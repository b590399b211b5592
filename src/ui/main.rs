use crate::app::VizApp;
use crate::settings::{Settings, Theme};
use crate::ui::common;

use egui::{self, Color32, Margin, RichText};
use std::time::Duration;

const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(4);

impl eframe::App for VizApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ctx = Some(ctx.clone());

        // Process async messages
        self.process_loader_messages(ctx);

        apply_theme(ctx, &self.settings);

        if self.settings.show_statusbar {
            self.render_statusbar(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                if self.settings.show_forecast {
                    common::collapsible_section(ui, "Forecast", true, |ui| {
                        self.render_forecast_section(ui)
                    });
                }
                if self.settings.show_prices {
                    common::collapsible_section(ui, "Prices", true, |ui| {
                        self.render_prices_section(ui)
                    });
                }
                if self.settings.show_histogram {
                    common::collapsible_section(ui, "Image Histogram", true, |ui| {
                        self.render_histogram_section(ui)
                    });
                }
            });
        });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.settings.save();
    }
}

impl VizApp {
    fn render_statusbar(&mut self, ctx: &egui::Context) {
        // Expire stale messages
        if let Some((_, shown_at)) = &self.status_message {
            let elapsed = shown_at.elapsed();
            if elapsed > STATUS_MESSAGE_TTL {
                self.status_message = None;
            } else {
                ctx.request_repaint_after(STATUS_MESSAGE_TTL - elapsed);
            }
        }

        egui::TopBottomPanel::bottom("statusbar")
            .frame(
                egui::Frame::NONE
                    .fill(Color32::from_rgb(25, 25, 28))
                    .inner_margin(Margin::symmetric(12, 4)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if let Some((message, _)) = &self.status_message {
                        ui.label(RichText::new(message).color(Color32::WHITE).size(12.0));
                    } else {
                        ui.label(
                            RichText::new("Ready")
                                .color(common::AXIS_COLOR)
                                .size(12.0),
                        );
                    }
                });
            });
    }
}

fn apply_theme(ctx: &egui::Context, settings: &Settings) {
    match settings.theme {
        Theme::Dark => ctx.set_visuals(egui::Visuals::dark()),
        Theme::Light => ctx.set_visuals(egui::Visuals::light()),
    }
}
