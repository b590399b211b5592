use crate::app::VizApp;
use crate::pricing::TimeWindow;
use crate::ui::common::{self, AXIS_COLOR, LABEL_COLOR};

use chrono::DateTime;
use egui::{self, Color32, FontId, Rect, RichText, Shape, Stroke};

const SERIES_COLORS: [Color32; 4] = [
    Color32::from_rgb(255, 180, 60),
    Color32::from_rgb(130, 170, 255),
    Color32::from_rgb(120, 220, 130),
    Color32::from_rgb(230, 120, 200),
];

fn plot_area(rect: Rect) -> Rect {
    Rect::from_min_max(
        egui::pos2(rect.left() + 34.0, rect.top() + 6.0),
        egui::pos2(rect.right() - 8.0, rect.bottom() - 16.0),
    )
}

fn ms_to_x(window: &TimeWindow, plot: &Rect, ms: f64) -> f32 {
    plot.left() + ((ms - window.start_ms) / window.span_ms()) as f32 * plot.width()
}

fn x_to_ms(window: &TimeWindow, plot: &Rect, x: f32) -> f64 {
    window.start_ms + ((x - plot.left()) / plot.width()) as f64 * window.span_ms()
}

fn date_label(ms: f64) -> String {
    DateTime::from_timestamp_millis(ms as i64)
        .map(|d| d.format("%b %e, %Y").to_string())
        .unwrap_or_default()
}

impl VizApp {
    pub(crate) fn render_prices_section(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Fetch prices").clicked() {
                self.fetch_prices();
            }
            if self.prices_loading > 0 {
                ui.spinner();
            }
            if self.price_window.is_some() {
                ui.label(
                    RichText::new("brushed, double-click a plot to reset")
                        .size(10.0)
                        .color(AXIS_COLOR),
                );
            }
        });

        let series_refs: Vec<_> = self.price_series.iter().collect();
        let Some(full) = TimeWindow::full(&series_refs) else {
            ui.label(
                RichText::new("No price data yet.")
                    .size(11.0)
                    .color(AXIS_COLOR),
            );
            return;
        };
        let window = self.price_window.unwrap_or(full);

        // Interactions are applied after the draw loop; the same brush drives
        // every plot so the windows stay linked.
        let mut new_anchor: Option<Option<f32>> = None;
        let mut brush: Option<(f64, f64)> = None;
        let mut reset = false;

        for (i, series) in self.price_series.iter().enumerate() {
            ui.label(
                RichText::new(&series.coin)
                    .size(11.0)
                    .color(LABEL_COLOR)
                    .strong(),
            );

            let (response, painter) =
                common::plot_canvas(ui, 120.0, egui::Sense::click_and_drag());
            let plot = plot_area(response.rect);

            let max_price = series.max_price().max(f64::MIN_POSITIVE);
            common::draw_value_ticks(&painter, plot, max_price, 4);

            // Window endpoints as date labels on the x axis
            painter.text(
                egui::pos2(plot.left(), plot.bottom() + 2.0),
                egui::Align2::LEFT_TOP,
                date_label(window.start_ms),
                FontId::proportional(9.0),
                AXIS_COLOR,
            );
            painter.text(
                egui::pos2(plot.right(), plot.bottom() + 2.0),
                egui::Align2::RIGHT_TOP,
                date_label(window.end_ms),
                FontId::proportional(9.0),
                AXIS_COLOR,
            );

            let points: Vec<egui::Pos2> = series
                .visible_points(&window)
                .map(|p| {
                    egui::pos2(
                        ms_to_x(&window, &plot, p.timestamp_ms),
                        plot.bottom() - (p.price / max_price) as f32 * plot.height(),
                    )
                })
                .collect();
            if points.len() >= 2 {
                painter.add(Shape::line(
                    points,
                    Stroke::new(1.5, SERIES_COLORS[i % SERIES_COLORS.len()]),
                ));
            }

            // Brush: horizontal drag narrows the shared window
            if response.drag_started() {
                new_anchor = Some(response.interact_pointer_pos().map(|p| p.x));
            }
            if let (Some(anchor_x), Some(pos)) =
                (self.price_drag_start, response.interact_pointer_pos())
            {
                if response.dragged() {
                    let selection = Rect::from_min_max(
                        egui::pos2(anchor_x.min(pos.x), plot.top()),
                        egui::pos2(anchor_x.max(pos.x), plot.bottom()),
                    );
                    painter.rect_filled(
                        selection,
                        egui::CornerRadius::ZERO,
                        Color32::from_rgba_unmultiplied(180, 180, 180, 40),
                    );
                }
                if response.drag_stopped() {
                    brush = Some((
                        x_to_ms(&window, &plot, anchor_x),
                        x_to_ms(&window, &plot, pos.x),
                    ));
                    new_anchor = Some(None);
                }
            }
            if response.double_clicked() {
                reset = true;
            }

            ui.add_space(4.0);
        }

        if let Some(anchor) = new_anchor {
            self.price_drag_start = anchor;
        }
        if let Some((a_ms, b_ms)) = brush {
            self.price_window = Some(window.narrowed(a_ms, b_ms));
        }
        if reset {
            self.price_window = None;
        }
    }
}
