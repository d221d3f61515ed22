use eframe::egui::{self, Align2, Color32, FontId, Pos2, Rect, Stroke};

use crate::engine::stats::HISTOGRAM_BINS;
use crate::engine::ImageStatistics;

const CHANNEL_COLORS: [Color32; 3] = [
    Color32::from_rgba_premultiplied(115, 20, 20, 128),
    Color32::from_rgba_premultiplied(20, 90, 30, 128),
    Color32::from_rgba_premultiplied(20, 40, 115, 128),
];
const AXIS_MARGIN: f32 = 28.0;
const MIN_PLOT_HEIGHT: f32 = 80.0;

pub fn show_statistics(ui: &mut egui::Ui, stats: &ImageStatistics) {
    ui.horizontal(|ui| {
        ui.label(stats.average_color_label());
        ui.weak(format!("{} pixels", stats.pixel_count));
    });
    ui.vertical_centered(|ui| ui.strong("Color Histogram"));

    let desired = egui::vec2(
        ui.available_width(),
        ui.available_height().max(MIN_PLOT_HEIGHT),
    );
    let (rect, _) = ui.allocate_exact_size(desired, egui::Sense::hover());
    draw_histogram(ui, rect, stats);
}

fn draw_histogram(ui: &egui::Ui, rect: Rect, stats: &ImageStatistics) {
    let painter = ui.painter_at(rect);
    let text_color = ui.visuals().text_color();
    let plot = plot_rect(rect);

    let axis = Stroke::new(1.0, ui.visuals().weak_text_color());
    painter.line_segment([plot.left_bottom(), plot.right_bottom()], axis);
    painter.line_segment([plot.left_bottom(), plot.left_top()], axis);

    let peak = stats.peak();
    let bar_width = (plot.width() / HISTOGRAM_BINS as f32).max(1.0);
    for (histogram, color) in stats.histograms.iter().zip(CHANNEL_COLORS) {
        let stroke = Stroke::new(bar_width, color);
        for (bin, count) in histogram.bins.iter().enumerate() {
            let height = bar_height(*count, peak, plot.height());
            if height <= 0.0 {
                continue;
            }
            let x = bin_center_x(bin, plot);
            painter.line_segment(
                [Pos2::new(x, plot.bottom()), Pos2::new(x, plot.bottom() - height)],
                stroke,
            );
        }
    }

    let font = FontId::proportional(11.0);
    painter.text(
        Pos2::new(plot.center().x, rect.bottom()),
        Align2::CENTER_BOTTOM,
        "Pixel Intensity",
        font.clone(),
        text_color,
    );
    painter.text(
        Pos2::new(rect.left(), plot.center().y),
        Align2::LEFT_CENTER,
        "Count",
        font.clone(),
        text_color,
    );
    painter.text(
        Pos2::new(plot.left(), plot.top()),
        Align2::RIGHT_TOP,
        peak.to_string(),
        font,
        text_color,
    );
}

fn plot_rect(rect: Rect) -> Rect {
    Rect::from_min_max(
        Pos2::new(rect.left() + AXIS_MARGIN * 1.5, rect.top() + 4.0),
        Pos2::new(rect.right() - 4.0, rect.bottom() - AXIS_MARGIN * 0.6),
    )
}

fn bar_height(count: u64, peak: u64, plot_height: f32) -> f32 {
    if peak == 0 {
        return 0.0;
    }
    plot_height * (count as f32 / peak as f32)
}

fn bin_center_x(bin: usize, plot: Rect) -> f32 {
    let step = plot.width() / HISTOGRAM_BINS as f32;
    plot.left() + step * (bin as f32 + 0.5)
}
