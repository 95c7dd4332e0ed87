//! Pulsing placeholder drawn while a cover image loads

use eframe::egui;

use crate::gui::constants::*;

pub fn show(ui: &mut egui::Ui, rect: egui::Rect) {
    let time = ui.input(|i| i.time);
    let pulse = ((time * SKELETON_PULSE_SPEED).sin() * 0.5 + 0.5) as f32;
    let color = SKELETON_BASE.lerp_to_gamma(SKELETON_HIGHLIGHT, pulse);

    ui.painter().rect_filled(rect, CARD_RADIUS, color);
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        "\u{1F3A7}",
        egui::FontId::proportional(rect.height() * 0.2),
        SKELETON_HIGHLIGHT.gamma_multiply(1.5),
    );

    // Keep pulsing until the texture arrives
    ui.ctx().request_repaint();
}
