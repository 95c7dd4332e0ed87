//! Edit-mode overlay: a ring of unassigned field bubbles around a preview of
//! the center card whose rows can be reordered, removed and extended

use std::time::Instant;

use eframe::egui;

use crate::assignment::{DragOrigin, DragSession, RowMarker, row_drop_target};
use crate::catalog::Book;
use crate::config::LayoutSettings;
use crate::constants::fields::MAX_ACTIVE;
use crate::editor::EditSession;
use crate::fields::FieldId;
use crate::format;
use crate::gui::constants::*;
use crate::types::ViewportClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayAction {
    None,
    Save,
    Cancel,
}

/// Drag-and-drop payload shared by bubbles and preview rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FieldDrag {
    field: FieldId,
    origin: DragOrigin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DropTarget {
    Slot(usize),
    Container,
}

/// Interactions collected while drawing, applied once the frame is laid out
#[derive(Default)]
struct FrameInput {
    dropped: Option<(FieldDrag, DropTarget)>,
    remove: Option<FieldId>,
    hover_slot: Option<usize>,
}

pub fn show(
    ctx: &egui::Context,
    session: &mut EditSession,
    book: &Book,
    layout: &LayoutSettings,
    viewport: egui::Rect,
    reduce_motion: bool,
) -> OverlayAction {
    sync_drag(ctx, session);

    let intro = if reduce_motion {
        1.0
    } else {
        session.intro_progress(Instant::now())
    };
    if intro < 1.0 {
        ctx.request_repaint();
    }

    let busy = session.is_busy();
    let mut action = OverlayAction::None;
    let mut input = FrameInput::default();

    if !busy && ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        action = OverlayAction::Cancel;
    }

    egui::Area::new(egui::Id::new("edit_overlay"))
        .order(egui::Order::Foreground)
        .fixed_pos(viewport.min)
        .show(ctx, |ui| {
            // Swallow clicks meant for the carousel underneath
            ui.allocate_rect(viewport, egui::Sense::click());
            ui.painter()
                .rect_filled(viewport, egui::CornerRadius::ZERO, BACKDROP);

            let center = viewport.center();
            let class = ViewportClass::from_width(viewport.width(), layout.narrow_breakpoint);

            ui.add_enabled_ui(!busy, |ui| {
                bubble_ring(ui, session, book, layout, viewport, class, intro);
                preview(ui, session, book, center, &mut input);
            });

            header(ui, session, viewport, busy, &mut action);

            let save_rect = egui::Rect::from_center_size(
                egui::pos2(center.x, viewport.bottom() - EDIT_BUTTON_MARGIN - 20.0),
                egui::vec2(220.0, 40.0),
            );
            ui.add_enabled_ui(!busy, |ui| {
                let save = egui::Button::new(egui::RichText::new(session.save_label()).strong())
                    .fill(ACCENT)
                    .corner_radius(CARD_RADIUS);
                if ui.put(save_rect, save).clicked() {
                    action = OverlayAction::Save;
                }
            });
        });

    apply_input(ctx, session, input);
    action
}

/// Mirror egui's drag payload into the assignment machine
fn sync_drag(ctx: &egui::Context, session: &mut EditSession) {
    let Some(machine) = session.machine_mut() else {
        return;
    };

    match egui::DragAndDrop::payload::<FieldDrag>(ctx) {
        Some(payload) if !machine.is_dragging() => {
            machine.begin_drag(payload.field, payload.origin);
        }
        // Released somewhere that is not a drop target
        None if machine.is_dragging() => {
            machine.end_drag();
            release_focus(ctx);
        }
        _ => {}
    }
}

fn apply_input(ctx: &egui::Context, session: &mut EditSession, input: FrameInput) {
    let Some(machine) = session.machine_mut() else {
        return;
    };

    machine.hover(input.hover_slot);

    if let Some(field) = input.remove {
        machine.remove(field);
        release_focus(ctx);
    }

    if let Some((payload, target)) = input.dropped {
        if !machine.is_dragging() {
            machine.begin_drag(payload.field, payload.origin);
        }
        match target {
            DropTarget::Slot(slot) => machine.drop_on_slot(slot),
            DropTarget::Container => machine.drop_on_container(),
        };
        release_focus(ctx);
    }
}

fn release_focus(ctx: &egui::Context) {
    ctx.memory_mut(|memory| {
        if let Some(id) = memory.focused() {
            memory.surrender_focus(id);
        }
    });
}

fn header(
    ui: &mut egui::Ui,
    session: &EditSession,
    viewport: egui::Rect,
    busy: bool,
    action: &mut OverlayAction,
) {
    let title_rect = egui::Rect::from_center_size(
        egui::pos2(viewport.center().x, viewport.top() + 36.0),
        egui::vec2(260.0, 48.0),
    );
    ui.scope_builder(
        egui::UiBuilder::new()
            .max_rect(title_rect)
            .layout(egui::Layout::top_down(egui::Align::Center)),
        |ui| {
            ui.label(egui::RichText::new("Customize Card").heading().strong());
            ui.label(
                egui::RichText::new(format!(
                    "{}/{} selected",
                    session.selected_count(),
                    MAX_ACTIVE
                ))
                .small()
                .weak(),
            );
        },
    );

    let close_rect = egui::Rect::from_min_size(
        egui::pos2(viewport.right() - CHEVRON_MARGIN - 36.0, viewport.top() + CHEVRON_MARGIN),
        egui::vec2(36.0, 36.0),
    );
    ui.add_enabled_ui(!busy, |ui| {
        let close = egui::Button::new(egui::RichText::new("\u{2715}").size(18.0)).corner_radius(CARD_RADIUS);
        if ui.put(close_rect, close).on_hover_text("Close without saving").clicked() {
            *action = OverlayAction::Cancel;
        }
    });
}

fn bubble_ring(
    ui: &mut egui::Ui,
    session: &EditSession,
    book: &Book,
    layout: &LayoutSettings,
    viewport: egui::Rect,
    class: ViewportClass,
    intro: f32,
) {
    let size = if class.is_narrow() {
        NARROW_BUBBLE_SIZE
    } else {
        BUBBLE_SIZE
    };
    let center = viewport.center();

    for bubble in session.bubbles(viewport.width(), layout) {
        let rect = egui::Rect::from_center_size(center + egui::Vec2::from(bubble.offset_at(intro)), size);
        let payload = FieldDrag {
            field: bubble.field,
            origin: DragOrigin::Circle,
        };

        ui.scope_builder(
            egui::UiBuilder::new()
                .max_rect(rect)
                .layout(egui::Layout::top_down(egui::Align::Center)),
            |ui| {
                let id = egui::Id::new("field_bubble").with(bubble.field.as_str());
                ui.dnd_drag_source(id, payload, |ui| {
                    egui::Frame::new()
                        .fill(BUBBLE_FILL)
                        .stroke(egui::Stroke::new(1.0, ACCENT))
                        .corner_radius(BUBBLE_RADIUS)
                        .inner_margin(egui::Margin::symmetric(10, 6))
                        .show(ui, |ui| {
                            ui.set_width(size.x - 20.0);
                            ui.vertical_centered(|ui| {
                                ui.add(
                                    egui::Label::new(
                                        egui::RichText::new(bubble.field.label()).small().strong(),
                                    )
                                    .selectable(false),
                                );
                                if !class.is_narrow() {
                                    ui.add(
                                        egui::Label::new(
                                            egui::RichText::new(format::compact_value(bubble.field, book))
                                                .small()
                                                .weak(),
                                        )
                                        .truncate(),
                                    );
                                }
                            });
                        });
                })
                .response
                .on_hover_cursor(egui::CursorIcon::Grab);
            },
        );
    }
}

fn preview(
    ui: &mut egui::Ui,
    session: &EditSession,
    book: &Book,
    center: egui::Pos2,
    input: &mut FrameInput,
) {
    let fields = session.machine().fields().as_slice().to_vec();
    let dragging = session.machine().session();
    let height = PREVIEW_COVER_SIZE.y + (MAX_ACTIVE + 1) as f32 * ROW_HEIGHT + SECTION_SPACING * 3.0;
    let rect = egui::Rect::from_center_size(center, egui::vec2(PREVIEW_WIDTH, height));

    ui.scope_builder(
        egui::UiBuilder::new()
            .max_rect(rect)
            .layout(egui::Layout::top_down(egui::Align::Center)),
        |ui| {
            let frame = egui::Frame::new()
                .fill(CARD_FILL)
                .corner_radius(CARD_RADIUS)
                .inner_margin(egui::Margin::same(12));

            let (_, dropped) = ui.dnd_drop_zone::<FieldDrag, ()>(frame, |ui| {
                ui.set_width(PREVIEW_WIDTH - 24.0);
                ui.add(
                    egui::Image::new(book.cover_art.as_str())
                        .fit_to_exact_size(PREVIEW_COVER_SIZE)
                        .corner_radius(CARD_RADIUS),
                );
                ui.add_space(ITEM_SPACING);

                for (slot, field) in fields.iter().copied().enumerate() {
                    preview_row(ui, book, slot, field, dragging, input);
                }

                if fields.len() < MAX_ACTIVE {
                    trailing_slot(ui, fields.len(), dragging, input);
                }
            });

            // Released inside the card but not over a row
            if let Some(payload) = dropped
                && input.dropped.is_none()
            {
                input.dropped = Some((*payload, DropTarget::Container));
            }
        },
    );
}

fn preview_row(
    ui: &mut egui::Ui,
    book: &Book,
    slot: usize,
    field: FieldId,
    dragging: Option<DragSession>,
    input: &mut FrameInput,
) {
    let payload = FieldDrag {
        field,
        origin: DragOrigin::List,
    };
    let lifted = dragging.is_some_and(|drag| drag.origin == DragOrigin::List && drag.field == field);

    let row = ui.allocate_ui_with_layout(
        egui::vec2(ui.available_width(), ROW_HEIGHT),
        egui::Layout::right_to_left(egui::Align::Center),
        |ui| {
            if lifted {
                ui.multiply_opacity(0.4);
            }
            if ui.small_button("\u{2715}").on_hover_text("Remove").clicked() {
                input.remove = Some(field);
            }
            ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                ui.dnd_drag_source(egui::Id::new("active_field").with(field.as_str()), payload, |ui| {
                    ui.label(egui::RichText::new("\u{2630}").weak());
                    ui.add(egui::Label::new(egui::RichText::new(field.label()).strong()).selectable(false));
                    ui.add(egui::Label::new(format::compact_value(field, book)).truncate());
                });
            });
        },
    );
    let response = row.response;

    // Insertion line above or below the hovered row
    if let (Some(pointer), Some(hovered)) = (
        ui.input(|i| i.pointer.interact_pos()),
        response.dnd_hover_payload::<FieldDrag>(),
    ) {
        let rect = response.rect;
        let stroke = egui::Stroke::new(2.0, ACCENT);

        let (insert_slot, marker) = row_drop_target(
            hovered.field,
            hovered.origin,
            slot,
            field,
            pointer.y >= rect.center().y,
        );
        let y = match marker {
            RowMarker::Through => rect.center().y,
            RowMarker::Above => rect.top(),
            RowMarker::Below => rect.bottom(),
        };
        ui.painter().hline(rect.x_range(), y, stroke);
        input.hover_slot = Some(insert_slot);

        if let Some(released) = response.dnd_release_payload::<FieldDrag>() {
            input.dropped = Some((*released, DropTarget::Slot(insert_slot)));
        }
    }
}

fn trailing_slot(
    ui: &mut egui::Ui,
    slot: usize,
    dragging: Option<DragSession>,
    input: &mut FrameInput,
) {
    let (rect, response) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), ROW_HEIGHT),
        egui::Sense::hover(),
    );

    let hovered = response.dnd_hover_payload::<FieldDrag>().is_some();
    let targeted = hovered || dragging.and_then(|drag| drag.hover_slot) == Some(slot);
    let armed = dragging.is_some_and(|drag| drag.origin == DragOrigin::Circle);
    let (text, color) = if targeted {
        ("\u{2713} Drop here", SLOT_HIGHLIGHT)
    } else if armed {
        ("\u{2295} Drag element here", ACCENT)
    } else {
        ("\u{2295} Drag element here", ui.visuals().weak_text_color())
    };

    ui.painter().rect_stroke(
        rect,
        CARD_RADIUS,
        egui::Stroke::new(1.5, color),
        egui::StrokeKind::Inside,
    );
    ui.painter().text(
        rect.center(),
        egui::Align2::CENTER_CENTER,
        text,
        egui::FontId::proportional(14.0),
        color,
    );

    if hovered {
        input.hover_slot = Some(slot);
    }
    if let Some(released) = response.dnd_release_payload::<FieldDrag>() {
        input.dropped = Some((*released, DropTarget::Slot(slot)));
    }
}
