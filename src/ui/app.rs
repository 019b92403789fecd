//! eframe application drawing the egg timer

use std::time::{Duration, Instant};
use egui::{Align, Color32, Layout, Pos2, Sense, Stroke};
use tracing::debug;

use crate::{
    config::Config,
    state::{AppState, Phase, TimerView, Wake},
};
use super::egg::{egg_color, egg_outline, EGG_AREA_HEIGHT, EGG_CENTER_Y};

const FIELD_WIDTH: f32 = 60.0;
const FIELD_BORDER: Color32 = Color32::from_rgb(204, 204, 204);
const ERROR_TEXT: Color32 = Color32::from_rgb(200, 40, 40);
const BUTTON_MARGIN: f32 = 35.0;
const BUTTON_HEIGHT: f32 = 40.0;

/// The egg timer window
pub struct EggTimerApp {
    state: AppState,
    frame_interval: Duration,
}

impl EggTimerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &Config) -> Self {
        Self {
            state: AppState::new(Instant::now(), config.initial_input(), config.on_invalid),
            frame_interval: config.frame_interval(),
        }
    }

    fn draw_egg(&self, ui: &mut egui::Ui, view: &TimerView) {
        let size = egui::vec2(ui.available_width(), EGG_AREA_HEIGHT);
        let (response, painter) = ui.allocate_painter(size, Sense::hover());
        let center = Pos2::new(response.rect.center().x, response.rect.top() + EGG_CENTER_Y);
        painter.add(egui::Shape::convex_polygon(
            egg_outline(center),
            egg_color(view.fraction),
            Stroke::NONE,
        ));
    }

    fn draw_input(&mut self, ui: &mut egui::Ui, view: &TimerView) {
        if let Some(error) = &self.state.input_error {
            ui.colored_label(ERROR_TEXT, error);
        }

        egui::Frame::none()
            .stroke(Stroke::new(2.0, FIELD_BORDER))
            .rounding(3.0)
            .show(ui, |ui| {
                ui.add(
                    egui::TextEdit::singleline(&mut self.state.input)
                        .hint_text("sec")
                        .horizontal_align(Align::Center)
                        .desired_width(FIELD_WIDTH)
                        .interactive(view.phase != Phase::Running),
                );
            });
    }
}

/// Forward a wake request to egui's repaint scheduling
fn schedule(ctx: &egui::Context, wake: Wake, now: Instant) {
    match wake {
        Wake::Now => ctx.request_repaint(),
        Wake::At(at) => ctx.request_repaint_after(at.saturating_duration_since(now)),
    }
}

impl eframe::App for EggTimerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.state.observe(now);
        self.state.sync_input(now);
        let view = self.state.view(now);

        egui::CentralPanel::default().show(ctx, |ui| {
            // Laid out from the bottom so free space collects above the egg
            ui.with_layout(Layout::bottom_up(Align::Center), |ui| {
                ui.add_space(BUTTON_MARGIN);
                let button = egui::Button::new(view.button_label);
                let width = (ui.available_width() - 2.0 * BUTTON_MARGIN).max(0.0);
                if ui.add_sized([width, BUTTON_HEIGHT], button).clicked() {
                    debug!("{} pressed", view.button_label);
                    if let Some(wake) = self.state.toggle(now) {
                        schedule(ctx, wake, now);
                    }
                }
                ui.add_space(BUTTON_MARGIN);

                if let Some(status) = view.status {
                    ui.label(status);
                }
                ui.add(egui::ProgressBar::new(view.fraction));
                ui.add_space(40.0);

                self.draw_input(ui, &view);
                self.draw_egg(ui, &view);
            });
        });

        if let Some(wake) = self.state.next_wake(now, self.frame_interval) {
            schedule(ctx, wake, now);
        }
    }
}
