use crate::app::VizApp;
use crate::forecast::TemperatureBand;
use crate::ui::common::{self, AXIS_COLOR, COLD_COLOR, LABEL_COLOR, MILD_COLOR, WARM_COLOR};

use egui::{self, Color32, CornerRadius, FontId, Key, Rect, RichText, Stroke};

fn band_color(band: TemperatureBand) -> Color32 {
    match band {
        TemperatureBand::Cold => COLD_COLOR,
        TemperatureBand::Mild => MILD_COLOR,
        TemperatureBand::Warm => WARM_COLOR,
    }
}

/// Inset a plot rect, leaving room for tick labels and the day axis.
fn plot_area(rect: Rect) -> Rect {
    Rect::from_min_max(
        egui::pos2(rect.left() + 28.0, rect.top() + 6.0),
        egui::pos2(rect.right() - 8.0, rect.bottom() - 16.0),
    )
}

impl VizApp {
    pub(crate) fn render_forecast_section(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Sample week").clicked() {
                self.reload_sample_forecast();
            }
            if ui.button("Default location").clicked() {
                self.reload_default_forecast();
            }
            ui.separator();
            ui.label("City:");
            let edit = ui.text_edit_singleline(&mut self.city_input);
            let submitted = edit.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
            if ui.button("Fetch").clicked() || submitted {
                self.reload_city_forecast();
            }
            if self.forecast_loading {
                ui.spinner();
            }
        });

        if let Some(error) = &self.forecast_error {
            ui.colored_label(Color32::from_rgb(255, 100, 100), error);
        }

        if self.forecast_samples.is_empty() {
            return;
        }

        ui.add_space(4.0);
        ui.label(
            RichText::new(format!("Daily maxima: {}", self.forecast_label))
                .size(11.0)
                .color(AXIS_COLOR),
        );

        // Temperature list, colored by band
        ui.horizontal_wrapped(|ui| {
            for sample in &self.forecast_samples {
                let band = TemperatureBand::classify(sample.value);
                ui.label(
                    RichText::new(format!("{:.0}°", sample.value))
                        .size(14.0)
                        .color(band_color(band)),
                );
            }
        });

        ui.add_space(4.0);
        self.render_scatter_plot(ui);
        ui.add_space(4.0);
        self.render_bar_plot(ui);
    }

    fn render_scatter_plot(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = common::plot_canvas(ui, 110.0, egui::Sense::hover());
        let plot = plot_area(response.rect);

        let max_value = self
            .forecast_samples
            .iter()
            .fold(0.0_f64, |m, s| m.max(s.value))
            .max(1.0);
        common::draw_value_ticks(&painter, plot, max_value, 4);

        let n = self.forecast_samples.len();
        for (i, sample) in self.forecast_samples.iter().enumerate() {
            let x = if n > 1 {
                plot.left() + i as f32 / (n - 1) as f32 * plot.width()
            } else {
                plot.center().x
            };
            let y = plot.bottom() - (sample.value / max_value) as f32 * plot.height();

            let band = TemperatureBand::classify(sample.value);
            painter.circle_filled(egui::pos2(x, y), 3.0, band_color(band));
            painter.text(
                egui::pos2(x, plot.bottom() + 2.0),
                egui::Align2::CENTER_TOP,
                sample.day.format("%a").to_string(),
                FontId::proportional(9.0),
                AXIS_COLOR,
            );
        }
    }

    fn render_bar_plot(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = common::plot_canvas(ui, 110.0, egui::Sense::hover());
        let plot = plot_area(response.rect);

        let max_value = self
            .forecast_samples
            .iter()
            .fold(0.0_f64, |m, s| m.max(s.value))
            .max(1.0);
        common::draw_value_ticks(&painter, plot, max_value, 4);

        let n = self.forecast_samples.len();
        let slot = plot.width() / n as f32;
        let bar_width = slot * 0.6;

        for (i, sample) in self.forecast_samples.iter().enumerate() {
            let center = plot.left() + (i as f32 + 0.5) * slot;
            let top = plot.bottom() - (sample.value / max_value) as f32 * plot.height();

            let band = TemperatureBand::classify(sample.value);
            painter.rect_filled(
                Rect::from_min_max(
                    egui::pos2(center - bar_width / 2.0, top),
                    egui::pos2(center + bar_width / 2.0, plot.bottom()),
                ),
                CornerRadius::same(1),
                band_color(band),
            );
            painter.text(
                egui::pos2(center, plot.bottom() + 2.0),
                egui::Align2::CENTER_TOP,
                sample.day.format("%a").to_string(),
                FontId::proportional(9.0),
                AXIS_COLOR,
            );
            painter.text(
                egui::pos2(center, top - 2.0),
                egui::Align2::CENTER_BOTTOM,
                format!("{:.0}", sample.value),
                FontId::proportional(9.0),
                LABEL_COLOR,
            );
        }

        painter.hline(
            egui::Rangef::new(plot.left(), plot.right()),
            plot.bottom(),
            Stroke::new(1.0, AXIS_COLOR),
        );
    }
}
