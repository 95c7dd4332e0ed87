//! Renders the composed rows of the center card

use eframe::egui;

use crate::card::CardRow;
use crate::fields::{FieldId, ValueKind};
use crate::format::Fragment;
use crate::gui::constants::*;

pub fn show(ui: &mut egui::Ui, rows: &[CardRow]) {
    ui.spacing_mut().item_spacing.y = ITEM_SPACING / 2.0;

    for row in rows {
        ui.push_id(row.field().as_str(), |ui| match row {
            CardRow::Single { field, fragment } => fragment_ui(ui, *field, fragment),
            CardRow::Paired {
                field,
                fragment,
                secondary,
            } => {
                ui.horizontal_wrapped(|ui| {
                    fragment_ui(ui, *field, fragment);
                    if let Some((secondary_field, secondary_fragment)) = secondary {
                        fragment_ui(ui, *secondary_field, secondary_fragment);
                    }
                });
            }
        });
    }
}

fn fragment_ui(ui: &mut egui::Ui, field: FieldId, fragment: &Fragment) {
    match fragment {
        Fragment::Text(text) => {
            ui.label(styled(field, text));
        }
        Fragment::Stars { glyphs, rating } => {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(glyphs).color(STAR_COLOR));
                ui.label(egui::RichText::new(rating.to_string()).strong());
            });
        }
        Fragment::Tags(tags) => {
            ui.horizontal_wrapped(|ui| {
                for tag in tags {
                    egui::Frame::new()
                        .fill(TAG_FILL)
                        .corner_radius(CARD_RADIUS)
                        .inner_margin(egui::Margin::symmetric(8, 2))
                        .show(ui, |ui| {
                            ui.label(egui::RichText::new(tag).small().color(egui::Color32::WHITE));
                        });
                }
            });
        }
    }
}

fn styled(field: FieldId, text: &str) -> egui::RichText {
    let text = egui::RichText::new(text);
    match field {
        FieldId::BookTitle => text.heading().strong(),
        FieldId::BookSubtitle => text.italics().weak(),
        FieldId::Discount => text.strong().color(DISCOUNT_COLOR),
        FieldId::NumberOfReviews | FieldId::ReleaseDate | FieldId::Length => text.small().weak(),
        _ if field.descriptor().kind == ValueKind::Number => text.strong(),
        _ => text,
    }
}
