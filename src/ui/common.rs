use egui::{self, Color32, CornerRadius, FontId, Rect, RichText, Stroke, Vec2};

pub const PLOT_BG: Color32 = Color32::from_rgb(34, 34, 34);
pub const AXIS_COLOR: Color32 = Color32::from_rgb(120, 120, 120);
pub const LABEL_COLOR: Color32 = Color32::from_rgb(200, 200, 200);

pub const COLD_COLOR: Color32 = Color32::from_rgb(90, 160, 255);
pub const MILD_COLOR: Color32 = Color32::from_rgb(200, 200, 200);
pub const WARM_COLOR: Color32 = Color32::from_rgb(255, 140, 70);

/// Collapsible section with a flat header bar, shared by all three panels.
pub fn collapsible_section<R>(
    ui: &mut egui::Ui,
    title: &str,
    default_open: bool,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::CollapsingResponse<R> {
    let header_rect = ui.available_rect_before_wrap();
    let header_rect = Rect::from_min_size(header_rect.min, Vec2::new(ui.available_width(), 24.0));

    ui.painter()
        .rect_filled(header_rect, CornerRadius::ZERO, Color32::from_rgb(45, 45, 45));
    ui.painter().hline(
        header_rect.x_range(),
        header_rect.bottom(),
        Stroke::new(1.0, Color32::from_rgb(28, 28, 28)),
    );

    let response = egui::CollapsingHeader::new(
        RichText::new(title).size(12.0).color(LABEL_COLOR).strong(),
    )
    .default_open(default_open)
    .show(ui, |ui| {
        ui.add_space(4.0);
        egui::Frame::NONE
            .fill(Color32::from_rgb(51, 51, 51))
            .inner_margin(egui::Margin::symmetric(8, 6))
            .show(ui, |ui| add_contents(ui))
            .inner
    });

    ui.painter().hline(
        ui.available_rect_before_wrap().x_range(),
        ui.cursor().top(),
        Stroke::new(1.0, Color32::from_rgb(28, 28, 28)),
    );

    response
}

/// Allocate a plot area with the shared background and the given sense.
pub fn plot_canvas(
    ui: &mut egui::Ui,
    height: f32,
    sense: egui::Sense,
) -> (egui::Response, egui::Painter) {
    let (response, painter) =
        ui.allocate_painter(Vec2::new(ui.available_width() - 8.0, height), sense);
    painter.rect_filled(response.rect, CornerRadius::same(2), PLOT_BG);
    (response, painter)
}

/// Horizontal grid lines with value labels down the left edge.
pub fn draw_value_ticks(painter: &egui::Painter, rect: Rect, max_value: f64, ticks: usize) {
    if max_value <= 0.0 || ticks == 0 {
        return;
    }
    for i in 0..=ticks {
        let frac = i as f32 / ticks as f32;
        let y = rect.bottom() - frac * rect.height();
        painter.hline(
            rect.x_range(),
            y,
            Stroke::new(0.5, Color32::from_rgb(60, 60, 60)),
        );
        painter.text(
            egui::pos2(rect.left() + 2.0, y),
            egui::Align2::LEFT_BOTTOM,
            format_tick(max_value * frac as f64),
            FontId::proportional(9.0),
            AXIS_COLOR,
        );
    }
}

fn format_tick(value: f64) -> String {
    if value >= 1000.0 {
        format!("{:.1}k", value / 1000.0)
    } else if value >= 10.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}
