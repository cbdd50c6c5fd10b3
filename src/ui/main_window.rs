//! Main application window.
//!
//! Form controller: owns the input buffers, runs the interpreter on the
//! Calculate action, and drives the three animation loops.

use crate::config::{Config, ConfigManager};
use crate::core::animation::{
    ColorCycle, ProgressAnimation, PROGRESS_SCALE_MAX, RESULT_CYCLE_INTERVAL, TITLE_CYCLE_INTERVAL,
};
use crate::core::bmi::BmiReading;
use crate::core::calculator;
use crate::ui::theme;
use egui::{Color32, RichText, TextEdit, Ui};
use std::time::Instant;

/// Main window state.
pub struct MainWindow {
    // Form inputs
    weight_input: String,
    height_input: String,

    // Last successful reading; never mutated on failure
    reading: Option<BmiReading>,
    result_color: Color32,

    // Error dialog
    error_message: Option<String>,

    // Animations
    title_cycle: ColorCycle,
    result_cycle: ColorCycle,
    progress: ProgressAnimation,

    // Status bar
    status_message: String,
    status_is_error: bool,

    // Config
    config_manager: ConfigManager,
    config: Config,
    theme_applied: bool,
}

impl MainWindow {
    pub fn new(config_manager: ConfigManager, config: Config) -> Self {
        let now = Instant::now();

        Self {
            weight_input: String::new(),
            height_input: String::new(),

            reading: None,
            result_color: theme::TEXT,

            error_message: None,

            title_cycle: ColorCycle::new(theme::TITLE_PALETTE.len(), TITLE_CYCLE_INTERVAL, now),
            result_cycle: ColorCycle::new(theme::RESULT_PALETTE.len(), RESULT_CYCLE_INTERVAL, now),
            progress: ProgressAnimation::new(now),

            status_message: "Ready".to_string(),
            status_is_error: false,

            config_manager,
            config,
            theme_applied: false,
        }
    }

    /// Render the main window.
    pub fn render(&mut self, ctx: &egui::Context) {
        // Apply theme once
        if !self.theme_applied {
            theme::apply_dark_theme(ctx);
            self.theme_applied = true;
        }

        let now = Instant::now();
        self.advance_animations(now);

        // Bottom status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            self.render_status_bar(ui);
        });

        // Main content area
        egui::CentralPanel::default().show(ctx, |ui| {
            self.render_form(ui);
        });

        // Error dialog window
        self.render_error_dialog(ctx);

        // Remember the window size so it can be saved on exit
        let size = ctx.screen_rect().size();
        self.config.window_width = size.x;
        self.config.window_height = size.y;

        self.schedule_repaint(ctx, now);
    }

    /// Persist the cosmetic window settings. Called once on shutdown.
    pub fn save_config(&self) {
        if let Err(err) = self.config_manager.save(&self.config) {
            tracing::warn!("failed to save config: {err:#}");
        }
    }

    fn advance_animations(&mut self, now: Instant) {
        self.title_cycle.tick(now);

        // The result cycle only runs once a reading exists; the category
        // color shown on the success frame is overridden from the first
        // step onward.
        if self.reading.is_some() && self.result_cycle.tick(now) {
            self.result_color = theme::RESULT_PALETTE[self.result_cycle.index()];
        }

        self.progress.tick(now);
    }

    /// Ask egui to repaint when the earliest active animation is due.
    fn schedule_repaint(&self, ctx: &egui::Context, now: Instant) {
        let mut next = self.title_cycle.next_due();
        if self.reading.is_some() {
            next = next.min(self.result_cycle.next_due());
        }
        if let Some(due) = self.progress.next_due() {
            next = next.min(due);
        }
        ctx.request_repaint_after(next.saturating_duration_since(now));
    }

    fn render_form(&mut self, ui: &mut Ui) {
        ui.add_space(12.0);
        ui.vertical_centered(|ui| {
            let title_color = theme::TITLE_PALETTE[self.title_cycle.index()];
            ui.label(
                RichText::new("BMI CALCULATOR")
                    .heading()
                    .strong()
                    .color(title_color),
            );
        });
        ui.add_space(10.0);

        let mut calculate = false;

        // Input panel
        egui::Frame::none()
            .fill(theme::PANEL)
            .rounding(8.0)
            .inner_margin(12.0)
            .show(ui, |ui| {
                egui::Grid::new("measurements")
                    .num_columns(2)
                    .spacing([10.0, 8.0])
                    .show(ui, |ui| {
                        ui.label("Weight (kg):");
                        let weight_response = ui.add(
                            TextEdit::singleline(&mut self.weight_input)
                                .desired_width(180.0)
                                .hint_text("e.g. 70"),
                        );
                        ui.end_row();

                        ui.label("Height (m or cm):");
                        let height_response = ui.add(
                            TextEdit::singleline(&mut self.height_input)
                                .desired_width(180.0)
                                .hint_text("e.g. 1.75 or 175"),
                        );
                        ui.end_row();

                        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
                        if enter && (weight_response.lost_focus() || height_response.lost_focus())
                        {
                            calculate = true;
                        }
                    });
            });

        ui.add_space(10.0);
        ui.vertical_centered(|ui| {
            let button = egui::Button::new(
                RichText::new("Calculate BMI").strong().color(theme::BACKGROUND),
            )
            .fill(theme::ACCENT);
            if ui.add(button).clicked() {
                calculate = true;
            }
        });

        if calculate {
            self.calculate();
        }

        ui.add_space(12.0);
        self.render_readouts(ui);
    }

    fn render_readouts(&mut self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            if let Some(reading) = self.reading {
                ui.label(
                    RichText::new(format!("Your BMI: {:.2}", reading.bmi))
                        .size(22.0)
                        .strong()
                        .color(theme::TEXT),
                );
                ui.add_space(4.0);
                ui.label(
                    RichText::new(reading.category.label())
                        .size(18.0)
                        .strong()
                        .color(self.result_color),
                );
            }

            ui.add_space(10.0);
            let fraction = self.progress.value() / PROGRESS_SCALE_MAX;
            ui.add(
                egui::ProgressBar::new(fraction)
                    .desired_width(340.0)
                    .fill(theme::ACCENT),
            );
        });
    }

    fn render_status_bar(&self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let color = if self.status_is_error {
                theme::error_color()
            } else {
                theme::success_color()
            };
            ui.label(RichText::new(&self.status_message).color(color));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    RichText::new(concat!("v", env!("CARGO_PKG_VERSION")))
                        .small()
                        .color(Color32::GRAY),
                );
            });
        });
    }

    fn render_error_dialog(&mut self, ctx: &egui::Context) {
        let Some(message) = self.error_message.clone() else {
            return;
        };

        let mut open = true;
        let mut acknowledged = false;
        egui::Window::new("Input error")
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.colored_label(theme::error_color(), &message);
                ui.add_space(8.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        acknowledged = true;
                    }
                });
            });

        if !open || acknowledged {
            self.error_message = None;
        }
    }

    /// Run the interpreter over the two fields and update the readouts.
    ///
    /// On failure the previous reading, its category, and the progress bar
    /// all stay as they were.
    fn calculate(&mut self) {
        let now = Instant::now();

        match calculator::evaluate(&self.weight_input, &self.height_input) {
            Ok(reading) => {
                tracing::debug!(
                    bmi = reading.bmi,
                    category = reading.category.label(),
                    "calculated"
                );

                self.result_color = theme::category_color(reading.category);
                self.reading = Some(reading);
                self.progress.set_target(reading.bmi as f32, now);
                self.result_cycle.restart(now);
                self.set_status(
                    &format!("BMI {:.2} - {}", reading.bmi, reading.category.label()),
                    false,
                );
            }
            Err(err) => {
                tracing::warn!("rejected input: {err}");
                self.error_message = Some(err.to_string());
                self.set_status("Invalid input", true);
            }
        }
    }

    fn set_status(&mut self, message: &str, is_error: bool) {
        self.status_message = message.to_string();
        self.status_is_error = is_error;
    }
}
