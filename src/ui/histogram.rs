use crate::app::VizApp;
use crate::ui::common::{self, AXIS_COLOR};

use egui::{self, Color32, FontId, Rect, RichText, Stroke};

impl VizApp {
    pub(crate) fn render_histogram_section(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Load image…").clicked() {
                self.open_image_dialog();
            }
            if self.image_loading {
                ui.spinner();
            }
            if let Some(path) = &self.image_path {
                ui.label(
                    RichText::new(path.to_string_lossy())
                        .size(10.0)
                        .color(AXIS_COLOR),
                );
            }
        });

        let Some(texture) = self.image_texture.clone() else {
            ui.label(
                RichText::new("Load an image, then drag a rectangle over it to count channel values.")
                    .size(11.0)
                    .color(AXIS_COLOR),
            );
            return;
        };

        ui.add_space(4.0);
        self.render_image_with_selection(ui, &texture);

        if self.region_histogram.is_some() {
            ui.add_space(4.0);
            self.render_channel_curves(ui);
        }
    }

    fn render_image_with_selection(&mut self, ui: &mut egui::Ui, texture: &egui::TextureHandle) {
        let tex_size = texture.size_vec2();
        let scale = ((ui.available_width() - 8.0) / tex_size.x).min(1.0);
        let display = tex_size * scale;

        let (response, painter) = ui.allocate_painter(display, egui::Sense::click_and_drag());
        let rect = response.rect;
        painter.image(
            texture.id(),
            rect,
            Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
            Color32::WHITE,
        );

        // Persisted selection, image pixels -> screen
        if let Some((x, y, w, h)) = self.selection_rect {
            let min = egui::pos2(
                rect.left() + x as f32 * scale,
                rect.top() + y as f32 * scale,
            );
            let max = egui::pos2(
                min.x + w as f32 * scale,
                min.y + h as f32 * scale,
            );
            painter.rect_stroke(
                Rect::from_min_max(min, max).intersect(rect),
                egui::CornerRadius::ZERO,
                Stroke::new(1.0, Color32::from_rgb(255, 255, 120)),
                egui::StrokeKind::Inside,
            );
        }

        if response.drag_started() {
            self.selection_start = response.interact_pointer_pos();
        }

        if let (Some(start), Some(pos)) = (self.selection_start, response.interact_pointer_pos()) {
            if response.dragged() {
                painter.rect_filled(
                    Rect::from_two_pos(start, pos),
                    egui::CornerRadius::ZERO,
                    Color32::from_rgba_unmultiplied(255, 255, 255, 30),
                );
            }

            if response.drag_stopped() {
                // Screen -> image pixels; the drag may hang over the edges and
                // the counter clips it
                let to_image = |p: egui::Pos2| {
                    (
                        (((p.x - rect.left()) / scale).floor()) as i64,
                        (((p.y - rect.top()) / scale).floor()) as i64,
                    )
                };
                let (ax, ay) = to_image(start);
                let (bx, by) = to_image(pos);
                let (x0, x1) = (ax.min(bx), ax.max(bx));
                let (y0, y1) = (ay.min(by), ay.max(by));

                self.selection_start = None;
                self.compute_selection_histogram(x0, y0, x1 - x0 + 1, y1 - y0 + 1);
            }
        }
    }

    /// Three channel value-frequency curves for the selected region.
    fn render_channel_curves(&mut self, ui: &mut egui::Ui) {
        let Some(histogram) = &self.region_histogram else {
            return;
        };

        let (response, painter) = common::plot_canvas(ui, 100.0, egui::Sense::hover());
        let rect = response.rect.shrink(2.0);

        // Square-root scale keeps small counts visible next to spikes
        let max_count = (histogram.max_count() as f32).max(1.0);

        let channels = [
            (&histogram.red, Color32::from_rgba_unmultiplied(255, 80, 80, 120)),
            (&histogram.green, Color32::from_rgba_unmultiplied(80, 255, 80, 120)),
            (&histogram.blue, Color32::from_rgba_unmultiplied(80, 80, 255, 120)),
        ];

        for (counts, color) in channels {
            for (value, &count) in counts.iter().enumerate() {
                if count == 0 {
                    continue;
                }
                let x = rect.left() + value as f32 / 255.0 * rect.width();
                let h = (count as f32 / max_count).sqrt() * rect.height();
                painter.line_segment(
                    [
                        egui::pos2(x, rect.bottom()),
                        egui::pos2(x, rect.bottom() - h),
                    ],
                    Stroke::new(1.0, color),
                );
            }
        }

        painter.text(
            egui::pos2(rect.left() + 2.0, rect.top()),
            egui::Align2::LEFT_TOP,
            "0–255",
            FontId::proportional(9.0),
            AXIS_COLOR,
        );
    }
}
