//! Carousel slides, navigation controls and swipe input

use eframe::egui;
use eframe::egui::load::TexturePoll;

use crate::card;
use crate::carousel::{CarouselController, SlideSlot, SlideStyle};
use crate::catalog::Catalog;
use crate::config::Settings;
use crate::constants::slides;
use crate::gui::components::{card_view, skeleton};
use crate::gui::constants::*;
use crate::swipe::SwipeDetector;
use crate::types::ViewportClass;

/// Draws the carousel into the whole of `ui`. Returns true when the edit
/// button was clicked.
pub fn show(
    ui: &mut egui::Ui,
    carousel: &mut CarouselController,
    catalog: &Catalog,
    swipe: &mut SwipeDetector,
    settings: &Settings,
    interactive: bool,
) -> bool {
    let area = ui.max_rect();
    let class = ViewportClass::from_width(area.width(), settings.layout.narrow_breakpoint);

    if interactive {
        track_swipe(ui, area, carousel, swipe);
    } else {
        swipe.cancel();
    }

    let duration = if settings.reduce_motion {
        0.0
    } else {
        slides::TRANSITION_SECS
    };
    let target = carousel.scroll() as f32;
    let animated = ui
        .ctx()
        .animate_value_with_time(ui.id().with("carousel_scroll"), target, duration);
    // Positive while sliding towards the next book
    let lag = target - animated;

    let mut placed: Vec<(SlideSlot, f32)> = carousel
        .window(class)
        .into_iter()
        .map(|slot| (slot, slot.offset as f32 + lag))
        .collect();
    if lag.abs() > f32::EPSILON
        && let Some(exiting) = carousel.exiting_slot(class)
    {
        placed.push((exiting, exiting.offset as f32 + lag));
    }
    // Far slides first so the center card ends up on top
    placed.sort_by(|a, b| b.1.abs().total_cmp(&a.1.abs()));

    let spacing = match class {
        ViewportClass::Wide => settings.layout.wide_slide_spacing,
        ViewportClass::Narrow => settings.layout.narrow_slide_spacing,
    };
    let cover_size = if class.is_narrow() {
        NARROW_COVER_SIZE
    } else {
        COVER_SIZE
    };
    let anchor = area.center() - egui::vec2(0.0, COVER_LIFT);

    for (slot, offset) in placed {
        let style = SlideStyle::at(offset, class, spacing);
        if style.opacity <= 0.0 {
            continue;
        }
        slide_ui(ui, carousel, catalog, slot, style, anchor, cover_size);
    }

    if interactive {
        nav_buttons(ui, area, carousel);
    }

    let edit_rect = egui::Rect::from_center_size(
        egui::pos2(area.center().x, area.bottom() - EDIT_BUTTON_MARGIN - 18.0),
        egui::vec2(200.0, 36.0),
    );
    let edit = egui::Button::new(egui::RichText::new("\u{270E} Edit Card Fields").strong())
        .fill(ACCENT)
        .corner_radius(CARD_RADIUS);
    ui.put(edit_rect, edit).clicked() && interactive
}

fn slide_ui(
    ui: &mut egui::Ui,
    carousel: &mut CarouselController,
    catalog: &Catalog,
    slot: SlideSlot,
    style: SlideStyle,
    anchor: egui::Pos2,
    cover_size: egui::Vec2,
) {
    let book = catalog.get(slot.book_index);
    let size = cover_size * style.scale;
    let cover_rect =
        egui::Rect::from_center_size(anchor + egui::vec2(style.translate_x, 0.0), size);

    ui.scope_builder(egui::UiBuilder::new().max_rect(cover_rect), |ui| {
        ui.multiply_opacity(style.opacity);

        let image = egui::Image::new(book.cover_art.as_str())
            .fit_to_exact_size(size)
            .corner_radius(CARD_RADIUS);
        if let Ok(TexturePoll::Ready { .. }) = image.load_for_size(ui.ctx(), size) {
            carousel.mark_cover_loaded(&book.book_title);
        }

        if carousel.is_cover_loaded(&book.book_title) {
            ui.put(cover_rect, image);
        } else {
            skeleton::show(ui, cover_rect);
        }

        if style.blur > 0.0 {
            let alpha = (style.blur * BLUR_VEIL_ALPHA).min(255.0) as u8;
            ui.painter()
                .rect_filled(cover_rect, CARD_RADIUS, egui::Color32::from_black_alpha(alpha));
        }
    });

    if slot.offset != 0 {
        return;
    }

    // Center card details follow the cover while it slides
    let info_rect = egui::Rect::from_min_size(
        egui::pos2(cover_rect.left() - ITEM_SPACING * 2.0, cover_rect.bottom() + ITEM_SPACING),
        egui::vec2(size.x + ITEM_SPACING * 4.0, CARD_INFO_HEIGHT),
    );
    let rows = card::card_rows(carousel.active_fields().as_slice(), book);
    ui.scope_builder(
        egui::UiBuilder::new()
            .max_rect(info_rect)
            .layout(egui::Layout::top_down(egui::Align::Center)),
        |ui| {
            ui.multiply_opacity(style.opacity);
            egui::Frame::new()
                .fill(CARD_FILL)
                .corner_radius(CARD_RADIUS)
                .inner_margin(egui::Margin::same(12))
                .show(ui, |ui| {
                    ui.set_width(info_rect.width() - 24.0);
                    if carousel.active_fields().is_empty() {
                        ui.label(egui::RichText::new("No fields selected").italics().weak());
                    } else {
                        card_view::show(ui, &rows);
                    }
                });
        },
    );
}

fn nav_buttons(ui: &mut egui::Ui, area: egui::Rect, carousel: &mut CarouselController) {
    let y = area.center().y - COVER_LIFT;
    let left = egui::Rect::from_center_size(
        egui::pos2(area.left() + CHEVRON_MARGIN + CHEVRON_SIZE.x / 2.0, y),
        CHEVRON_SIZE,
    );
    let right = egui::Rect::from_center_size(
        egui::pos2(area.right() - CHEVRON_MARGIN - CHEVRON_SIZE.x / 2.0, y),
        CHEVRON_SIZE,
    );

    let chevron = |glyph: &str| {
        egui::Button::new(egui::RichText::new(glyph).size(26.0))
            .fill(CARD_FILL)
            .corner_radius(CARD_RADIUS)
    };

    if ui.put(left, chevron("\u{2039}")).on_hover_text("Previous").clicked() {
        carousel.prev();
    }
    if ui.put(right, chevron("\u{203A}")).on_hover_text("Next").clicked() {
        carousel.next();
    }
}

/// Feed pointer drags over the carousel area into the swipe detector
fn track_swipe(
    ui: &mut egui::Ui,
    area: egui::Rect,
    carousel: &mut CarouselController,
    swipe: &mut SwipeDetector,
) {
    let response = ui.interact(area, ui.id().with("carousel_swipe"), egui::Sense::drag());

    if response.drag_started() {
        // Drag starts after a few pixels of travel; use the press origin
        let origin = ui
            .input(|i| i.pointer.press_origin())
            .or_else(|| response.interact_pointer_pos());
        if let Some(origin) = origin {
            swipe.touch_start(origin.into());
        }
    }
    if response.dragged()
        && let Some(pos) = response.interact_pointer_pos()
    {
        swipe.touch_move(pos.into());
    }
    if response.drag_stopped()
        && let Some(direction) = swipe.touch_end()
    {
        carousel.handle_swipe(direction);
    }
}
