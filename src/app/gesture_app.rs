use crate::app::views::View;
use crate::app::views::camera_view::CameraView;
use crate::config::Settings;
use crate::error::AppError;
use crate::pipeline::{GestureController, KeyEvent, Tick};
use tracing::error;

/// Single-window front end: one controller tick per repaint.
pub struct GestureApp {
    controller: GestureController,
    view: CameraView,
}

impl GestureApp {
    pub fn new(controller: GestureController) -> Self {
        Self {
            controller,
            view: CameraView::new(),
        }
    }

    /// Blocks until the window closes.
    pub fn start_gui(settings: &Settings, controller: GestureController) -> Result<(), AppError> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(egui::vec2(settings.window.width, settings.window.height))
                .with_title(settings.window.title.clone()),
            ..Default::default()
        };

        eframe::run_native(
            &settings.window.title,
            options,
            Box::new(|_cc| Ok(Box::new(GestureApp::new(controller)))),
        )
        .map_err(|e| AppError::Display(e.to_string()))
    }
}

/// At most one key per frame; quit wins over the mode keys.
pub fn poll_key(input: &egui::InputState) -> Option<KeyEvent> {
    if input.key_pressed(egui::Key::Q) {
        Some(KeyEvent::Quit)
    } else if input.key_pressed(egui::Key::Space) {
        Some(KeyEvent::Start)
    } else if input.key_pressed(egui::Key::M) {
        Some(KeyEvent::Menu)
    } else {
        None
    }
}

impl eframe::App for GestureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.controller.is_finished() {
            let key = ctx.input(poll_key);
            match self.controller.tick(key) {
                Ok(Tick::Rendered(rendered)) => self.view.set_frame(ctx, rendered),
                Ok(Tick::Finished) => ctx.send_viewport_cmd(egui::ViewportCommand::Close),
                Err(e) => {
                    error!("Stopping: {}", e);
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
            }
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::default())
            .show(ctx, |ui| self.view.draw(ui));

        ctx.request_repaint();
    }
}
