use std::borrow::Cow;

use eframe::egui::{self, Color32, ColorImage, Rect, TextureHandle, TextureOptions};
use image::imageops::{self, FilterType};
use image::RgbaImage;

/// Pixel size of the current image once fitted into the display area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayLayout {
    pub width: u32,
    pub height: u32,
}

/// Aspect-preserving fit of `image_size` into `area` (both in physical
/// pixels), multiplied by `zoom`.
pub fn fit_layout(area: egui::Vec2, image_size: (u32, u32), zoom: f32) -> Option<DisplayLayout> {
    let (image_width, image_height) = image_size;
    if image_width == 0 || image_height == 0 || area.x <= 0.0 || area.y <= 0.0 {
        return None;
    }

    let fit = (area.x / image_width as f32).min(area.y / image_height as f32);
    let scale = fit * zoom;
    Some(DisplayLayout {
        width: ((image_width as f32 * scale) as u32).max(1),
        height: ((image_height as f32 * scale) as u32).max(1),
    })
}

/// Texture dimensions for a layout, shrunk to fit the GPU's texture limit.
pub fn texture_size(layout: DisplayLayout, max_side: usize) -> (u32, u32) {
    let max_side = u32::try_from(max_side).unwrap_or(u32::MAX).max(1);
    let longest = layout.width.max(layout.height);
    if longest <= max_side {
        return (layout.width, layout.height);
    }

    let shrink = max_side as f32 / longest as f32;
    (
        ((layout.width as f32 * shrink) as u32).clamp(1, max_side),
        ((layout.height as f32 * shrink) as u32).clamp(1, max_side),
    )
}

/// The part of a layout that falls inside the display area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleRegion {
    /// Source rectangle `[x, y, width, height]` in image pixels.
    pub crop: [u32; 4],
    /// Display pixels covered by that rectangle, at most the area size.
    pub display: DisplayLayout,
}

/// Clips a centered layout to `area` (physical pixels) and maps the visible
/// window back onto the source image.
pub fn visible_region(
    layout: DisplayLayout,
    area: egui::Vec2,
    image_size: (u32, u32),
) -> VisibleRegion {
    let (x, width, shown_width) = visible_span(layout.width, area.x, image_size.0);
    let (y, height, shown_height) = visible_span(layout.height, area.y, image_size.1);
    VisibleRegion {
        crop: [x, y, width, height],
        display: DisplayLayout {
            width: shown_width,
            height: shown_height,
        },
    }
}

/// Returns `(source start, source length, shown length)` along one axis.
fn visible_span(display: u32, area: f32, source: u32) -> (u32, u32, u32) {
    let shown = display.min((area as u32).max(1));
    let skipped = u64::from((display - shown) / 2);
    let (display, source_len) = (u64::from(display.max(1)), u64::from(source.max(1)));

    let start = (skipped * source_len / display).min(source_len - 1);
    let end = ((skipped + u64::from(shown)) * source_len).div_ceil(display);
    let end = end.clamp(start + 1, source_len);
    (start as u32, (end - start) as u32, shown)
}

/// Resamples the `crop` of `image` to `size`. The full image at its own size
/// is borrowed untouched.
pub fn render_for_display(
    image: &RgbaImage,
    crop: [u32; 4],
    size: (u32, u32),
) -> Cow<'_, RgbaImage> {
    let [x, y, width, height] = crop;
    let whole = (x, y) == (0, 0) && image.dimensions() == (width, height);
    if whole && size == (width, height) {
        return Cow::Borrowed(image);
    }
    if whole {
        return Cow::Owned(imageops::resize(image, size.0, size.1, FilterType::Lanczos3));
    }

    let cropped = imageops::crop_imm(image, x, y, width, height).to_image();
    if cropped.dimensions() == size {
        return Cow::Owned(cropped);
    }
    Cow::Owned(imageops::resize(&cropped, size.0, size.1, FilterType::Lanczos3))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CanvasKey {
    revision: u64,
    region: VisibleRegion,
}

/// Central canvas that shows the current image fitted and centered.
#[derive(Default)]
pub struct ImageCanvas {
    texture: Option<TextureHandle>,
    key: Option<CanvasKey>,
}

impl ImageCanvas {
    pub fn show(&mut self, ui: &mut egui::Ui, image: Option<&RgbaImage>, revision: u64, zoom: f32) {
        let (area, _) = ui.allocate_exact_size(ui.available_size(), egui::Sense::hover());
        let Some(image) = image else {
            return;
        };

        let pixels_per_point = ui.ctx().pixels_per_point();
        let area_pixels = area.size() * pixels_per_point;
        let Some(layout) = fit_layout(area_pixels, image.dimensions(), zoom) else {
            return;
        };
        let region = visible_region(layout, area_pixels, image.dimensions());

        let key = CanvasKey { revision, region };
        if self.key != Some(key) {
            let max_side = ui.ctx().input(|input| input.max_texture_side);
            let display =
                render_for_display(image, region.crop, texture_size(region.display, max_side));
            let color_image = ColorImage::from_rgba_unmultiplied(
                [display.width() as usize, display.height() as usize],
                display.as_raw(),
            );
            match &mut self.texture {
                Some(texture) => texture.set(color_image, TextureOptions::LINEAR),
                None => {
                    self.texture = Some(ui.ctx().load_texture(
                        "current-image",
                        color_image,
                        TextureOptions::LINEAR,
                    ));
                }
            }
            self.key = Some(key);
        }

        if let Some(texture) = &self.texture {
            let shown = region.display;
            let size = egui::vec2(shown.width as f32, shown.height as f32) / pixels_per_point;
            let target = Rect::from_center_size(area.center(), size);
            let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
            ui.painter_at(area)
                .image(texture.id(), target, uv, Color32::WHITE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn area_equal_to_image_means_no_scaling() {
        let layout = fit_layout(egui::vec2(640.0, 480.0), (640, 480), 1.0)
            .expect("layout should exist");
        assert_eq!(layout, DisplayLayout { width: 640, height: 480 });

        let image = RgbaImage::from_fn(64, 48, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        let region = visible_region(
            DisplayLayout { width: 64, height: 48 },
            egui::vec2(64.0, 48.0),
            (64, 48),
        );
        assert_eq!(region.crop, [0, 0, 64, 48]);
        let rendered = render_for_display(&image, region.crop, (64, 48));
        assert!(matches!(rendered, Cow::Borrowed(_)));
        assert_eq!(rendered.as_ref(), &image);
    }

    #[test]
    fn fit_uses_smaller_axis_ratio() {
        let layout = fit_layout(egui::vec2(800.0, 300.0), (400, 200), 1.0)
            .expect("layout should exist");
        assert_eq!(layout, DisplayLayout { width: 600, height: 300 });
    }

    #[test]
    fn zoom_multiplies_fit_scale() {
        let layout = fit_layout(egui::vec2(400.0, 400.0), (200, 100), 1.5)
            .expect("layout should exist");
        assert_eq!(layout, DisplayLayout { width: 600, height: 300 });

        let layout = fit_layout(egui::vec2(400.0, 400.0), (200, 100), 0.5)
            .expect("layout should exist");
        assert_eq!(layout, DisplayLayout { width: 200, height: 100 });
    }

    #[test]
    fn degenerate_inputs_have_no_layout() {
        assert!(fit_layout(egui::vec2(0.0, 100.0), (10, 10), 1.0).is_none());
        assert!(fit_layout(egui::vec2(100.0, 100.0), (0, 10), 1.0).is_none());
    }

    #[test]
    fn tiny_layouts_keep_at_least_one_pixel() {
        let layout = fit_layout(egui::vec2(1.0, 1.0), (1000, 10), 1.0)
            .expect("layout should exist");
        assert_eq!(layout, DisplayLayout { width: 1, height: 1 });
    }

    #[test]
    fn texture_size_respects_gpu_limit() {
        let layout = DisplayLayout {
            width: 16_384,
            height: 8_192,
        };
        assert_eq!(texture_size(layout, 4_096), (4_096, 2_048));
        assert_eq!(texture_size(layout, 32_768), (16_384, 8_192));
    }

    #[test]
    fn render_resizes_to_requested_size() {
        let image = RgbaImage::from_pixel(40, 20, Rgba([10, 200, 30, 255]));
        let rendered = render_for_display(&image, [0, 0, 40, 20], (20, 10));
        assert_eq!(rendered.dimensions(), (20, 10));
    }

    #[test]
    fn fitted_layout_is_fully_visible() {
        let layout = fit_layout(egui::vec2(800.0, 300.0), (400, 200), 1.0)
            .expect("layout should exist");
        let region = visible_region(layout, egui::vec2(800.0, 300.0), (400, 200));
        assert_eq!(region.crop, [0, 0, 400, 200]);
        assert_eq!(region.display, layout);
    }

    #[test]
    fn zoomed_layout_is_clipped_to_the_centered_window() {
        let layout = DisplayLayout {
            width: 1_000,
            height: 1_000,
        };
        let region = visible_region(layout, egui::vec2(100.0, 100.0), (100, 100));
        assert_eq!(region.crop, [45, 45, 10, 10]);
        assert_eq!(
            region.display,
            DisplayLayout {
                width: 100,
                height: 100
            }
        );
    }

    #[test]
    fn deep_zoom_resamples_no_more_than_the_area() {
        let area = egui::vec2(800.0, 600.0);
        let zoom = 1.2_f32.powi(40);
        let layout = fit_layout(area, (1_600, 1_200), zoom).expect("layout should exist");
        assert!(layout.width > 1_000_000);

        let region = visible_region(layout, area, (1_600, 1_200));
        assert!(region.display.width <= 800 && region.display.height <= 600);
        let [x, y, width, height] = region.crop;
        assert!(width >= 1 && height >= 1);
        assert!(x + width <= 1_600 && y + height <= 1_200);

        let image = RgbaImage::from_fn(1_600, 1_200, |x, y| Rgba([x as u8, y as u8, 9, 255]));
        let rendered = render_for_display(
            &image,
            region.crop,
            (region.display.width, region.display.height),
        );
        assert_eq!(rendered.dimensions(), (region.display.width, region.display.height));
    }

    #[test]
    fn crop_at_display_size_is_copied_without_resampling() {
        let image = RgbaImage::from_fn(100, 100, |x, y| Rgba([x as u8, y as u8, 0, 255]));
        let rendered = render_for_display(&image, [45, 45, 10, 10], (10, 10));
        assert_eq!(rendered.dimensions(), (10, 10));
        assert_eq!(rendered.get_pixel(0, 0).0, [45, 45, 0, 255]);
        assert_eq!(rendered.get_pixel(9, 9).0, [54, 54, 0, 255]);
    }
}
