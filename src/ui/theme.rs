//! Theme configuration for egui.
//!
//! Dark theme and the color palettes the animations cycle through.

use crate::core::bmi::Category;
use egui::{Color32, Stroke, Visuals};

/// Window background.
pub const BACKGROUND: Color32 = Color32::from_rgb(0x22, 0x28, 0x31); // #222831
/// Input panel background.
pub const PANEL: Color32 = Color32::from_rgb(0x39, 0x3E, 0x46); // #393E46
/// Accent for the calculate button and highlights.
pub const ACCENT: Color32 = Color32::from_rgb(0xFF, 0xD3, 0x69); // #FFD369
/// Default readout text.
pub const TEXT: Color32 = Color32::from_rgb(0xEE, 0xEE, 0xEE); // #EEEEEE

/// Colors the title cycles through.
pub const TITLE_PALETTE: [Color32; 4] = [
    Color32::from_rgb(0xFF, 0xD3, 0x69), // #FFD369
    Color32::from_rgb(0x00, 0xAD, 0xB5), // #00ADB5
    Color32::from_rgb(0xFF, 0x2E, 0x63), // #FF2E63
    Color32::from_rgb(0x76, 0xAB, 0xAE), // #76ABAE
];

/// Colors the result label cycles through.
pub const RESULT_PALETTE: [Color32; 4] = [
    Color32::from_rgb(0xFF, 0xD3, 0x69), // #FFD369
    Color32::WHITE,
    Color32::from_rgb(0x00, 0xAD, 0xB5), // #00ADB5
    Color32::from_rgb(0xFF, 0x2E, 0x63), // #FF2E63
];

/// Apply the dark theme to egui context.
pub fn apply_dark_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    style.visuals = Visuals::dark();

    // Panel colors
    style.visuals.panel_fill = BACKGROUND;
    style.visuals.window_fill = PANEL;
    style.visuals.extreme_bg_color = Color32::from_rgb(0x1A, 0x1F, 0x26);

    // Widget colors
    style.visuals.widgets.noninteractive.bg_fill = PANEL;
    style.visuals.widgets.inactive.bg_fill = PANEL;
    style.visuals.widgets.hovered.bg_fill = Color32::from_rgb(0x4A, 0x50, 0x5A);
    style.visuals.widgets.active.bg_fill = ACCENT;

    // Text colors
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, TEXT);
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, TEXT);
    style.visuals.widgets.hovered.fg_stroke = Stroke::new(1.0, Color32::WHITE);
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, BACKGROUND);

    // Selection
    style.visuals.selection.bg_fill = ACCENT.gamma_multiply(0.3);
    style.visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    // Rounding
    style.visuals.window_rounding = 8.0.into();
    style.visuals.widgets.noninteractive.rounding = 4.0.into();
    style.visuals.widgets.inactive.rounding = 4.0.into();
    style.visuals.widgets.hovered.rounding = 4.0.into();
    style.visuals.widgets.active.rounding = 4.0.into();

    // Spacing
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.button_padding = egui::vec2(12.0, 6.0);

    ctx.set_style(style);
}

/// Color associated with a health category.
pub fn category_color(category: Category) -> Color32 {
    match category {
        Category::Underweight => Color32::from_rgb(0x00, 0xBF, 0xFF), // #00BFFF
        Category::Normal => Color32::from_rgb(0x32, 0xCD, 0x32),      // #32CD32
        Category::Overweight => Color32::from_rgb(0xFF, 0xD7, 0x00),  // #FFD700
        Category::Obese => Color32::from_rgb(0xFF, 0x45, 0x00),       // #FF4500
    }
}

/// Get the error color for dialogs and the status bar.
pub fn error_color() -> Color32 {
    Color32::from_rgb(239, 83, 80)
}

/// Get the success color for status feedback.
pub fn success_color() -> Color32 {
    Color32::from_rgb(129, 199, 132)
}
