use eframe::egui;

use crate::app::controller::ApplicationController;
use crate::app::events::AppEvent;
use crate::app::state::Status;
use crate::engine::pipeline::{COLOR_FACTOR_RANGE, EDGE_STRENGTH_RANGE};
use crate::engine::Adjustments;
use crate::infra::config::AppConfig;
use crate::ui::viewport::ImageCanvas;
use crate::ui::{dialogs, histogram};

pub struct EditorApp {
    controller: ApplicationController,
    canvas: ImageCanvas,
}

impl EditorApp {
    fn new(config: AppConfig) -> Self {
        Self {
            controller: ApplicationController::new(config),
            canvas: ImageCanvas::default(),
        }
    }

    fn action_bar(&self, ui: &mut egui::Ui, events: &mut Vec<AppEvent>) {
        ui.horizontal(|ui| {
            if ui.button("Upload Image").clicked() {
                if let Some(path) = dialogs::pick_image() {
                    events.push(AppEvent::LoadImage(path));
                }
            }
            if ui.button("Save Image").clicked() && self.controller.has_image() {
                if let Some(path) =
                    dialogs::pick_save_path(&self.controller.config().default_save_name)
                {
                    events.push(AppEvent::SaveImage(path));
                }
            }

            ui.separator();
            match &self.controller.state().status {
                Status::Idle => {
                    ui.weak("No image loaded");
                }
                Status::Info(message) => {
                    ui.label(message);
                }
                Status::Error(message) => {
                    ui.colored_label(ui.visuals().error_fg_color, message);
                }
            }
        });
    }

    fn controls(&self, ui: &mut egui::Ui, events: &mut Vec<AppEvent>) {
        let state = self.controller.state();
        ui.heading("Adjustments");
        ui.add_space(6.0);

        if let Some(adjustments) = adjustment_sliders(ui, state.adjustments) {
            events.push(AppEvent::SetAdjustments(adjustments));
        }

        ui.add_space(10.0);
        ui.horizontal(|ui| {
            if ui.button("Zoom In").clicked() {
                events.push(AppEvent::ZoomIn);
            }
            if ui.button("Zoom Out").clicked() {
                events.push(AppEvent::ZoomOut);
            }
        });
        ui.weak(format!("Zoom: {:.0}%", state.zoom.factor() * 100.0));

        if let Some(path) = &state.source_path {
            ui.add_space(10.0);
            ui.weak(path.display().to_string());
        }
    }
}

/// Returns the new values when any slider moved this frame.
fn adjustment_sliders(ui: &mut egui::Ui, current: Adjustments) -> Option<Adjustments> {
    let mut next = current;
    let mut changed = false;

    changed |= ui
        .add(egui::Slider::new(&mut next.brightness, COLOR_FACTOR_RANGE).text("Brightness"))
        .changed();
    changed |= ui
        .add(egui::Slider::new(&mut next.contrast, COLOR_FACTOR_RANGE).text("Contrast"))
        .changed();
    changed |= ui
        .add(egui::Slider::new(&mut next.saturation, COLOR_FACTOR_RANGE).text("Saturation"))
        .changed();
    changed |= ui
        .add(
            egui::Slider::new(&mut next.edge_strength, EDGE_STRENGTH_RANGE)
                .text("Edge Detection"),
        )
        .changed();

    (changed && next != current).then_some(next)
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut events = Vec::new();

        egui::TopBottomPanel::bottom("action_bar").show(ctx, |ui| {
            self.action_bar(ui, &mut events);
        });

        egui::TopBottomPanel::bottom("statistics")
            .resizable(true)
            .default_height(220.0)
            .show(ctx, |ui| match &self.controller.state().statistics {
                Some(stats) => histogram::show_statistics(ui, stats),
                None => {
                    ui.weak("Upload an image to see its color statistics");
                }
            });

        egui::SidePanel::right("controls")
            .default_width(300.0)
            .show(ctx, |ui| {
                self.controls(ui, &mut events);
            });

        for event in events {
            self.controller.dispatch(event);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let state = self.controller.state();
            self.canvas.show(
                ui,
                self.controller.current_image(),
                state.image_revision,
                state.zoom.factor(),
            );
        });
    }
}

pub fn launch_window(config: AppConfig) -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_title(config.window_title.clone()),
        ..Default::default()
    };

    let title = config.window_title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(EditorApp::new(config)))),
    )
}
