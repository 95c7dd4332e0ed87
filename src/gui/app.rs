//! Main window implemented with egui/eframe

use std::time::Instant;

use anyhow::{Result, anyhow};
use eframe::{CreationContext, NativeOptions, egui};
use tracing::info;

use crate::carousel::{CarouselController, NavKey};
use crate::catalog::Catalog;
use crate::config::Settings;
use crate::editor::{EditEvent, EditSession, SaveTimings};
use crate::swipe::SwipeDetector;

use super::components::carousel_view;
use super::components::edit_overlay::{self, OverlayAction};
use super::constants::*;

struct CarouselApp {
    settings: Settings,
    catalog: Catalog,
    carousel: CarouselController,
    swipe: SwipeDetector,
    editor: Option<EditSession>,
    viewport: egui::Rect,
}

impl CarouselApp {
    fn new(cc: &CreationContext<'_>, settings: Settings, catalog: Catalog) -> Self {
        info!(books = catalog.len(), "Initializing carousel window");

        egui_extras::install_image_loaders(&cc.egui_ctx);

        let carousel = CarouselController::new(catalog.len(), settings.initial_fields());
        let swipe = SwipeDetector::new(settings.swipe.min_distance);

        Self {
            settings,
            catalog,
            carousel,
            swipe,
            editor: None,
            viewport: egui::Rect::NOTHING,
        }
    }

    fn handle_keys(&mut self, ctx: &egui::Context) {
        // The overlay owns the keyboard while open
        if self.editor.is_some() {
            return;
        }

        let key = ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowLeft) {
                NavKey::ArrowLeft
            } else if i.key_pressed(egui::Key::ArrowRight) {
                NavKey::ArrowRight
            } else {
                NavKey::Other
            }
        });
        self.carousel.handle_key(key);
    }

    fn open_editor(&mut self) {
        let timings = SaveTimings::from(&self.settings.edit);
        self.editor = Some(self.carousel.open_editor(timings));
    }

    fn poll_editor(&mut self, ctx: &egui::Context) {
        let Some(session) = self.editor.as_mut() else {
            return;
        };

        let now = Instant::now();
        match session.poll(now) {
            EditEvent::Commit(fields) => {
                self.carousel.apply_fields(fields);
                self.editor = None;
            }
            EditEvent::Pending => {
                if let Some(wait) = session.next_deadline(now) {
                    ctx.request_repaint_after(wait);
                }
            }
        }
    }

    fn show_editor(&mut self, ctx: &egui::Context) {
        let Some(session) = self.editor.as_mut() else {
            return;
        };

        let book = self.catalog.get(self.carousel.current_index());
        match edit_overlay::show(
            ctx,
            session,
            book,
            &self.settings.layout,
            self.viewport,
            self.settings.reduce_motion,
        ) {
            OverlayAction::None => {}
            OverlayAction::Save => {
                session.request_save(Instant::now());
                ctx.request_repaint();
            }
            OverlayAction::Cancel => {
                if let Some(session) = self.editor.take() {
                    session.cancel();
                }
            }
        }
    }
}

impl eframe::App for CarouselApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);
        self.poll_editor(ctx);

        let mut open_editor = false;
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(BACKGROUND))
            .show(ctx, |ui| {
                self.viewport = ui.max_rect();
                open_editor = carousel_view::show(
                    ui,
                    &mut self.carousel,
                    &self.catalog,
                    &mut self.swipe,
                    &self.settings,
                    self.editor.is_none(),
                );
            });

        if open_editor {
            self.open_editor();
        }
        self.show_editor(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!(
            fields = ?self.carousel.active_fields().as_slice(),
            "Carousel exiting"
        );
    }
}

pub fn run_gui(settings: Settings, catalog: Catalog) -> Result<()> {
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([settings.window.width, settings.window.height])
            .with_min_inner_size([WINDOW_MIN_WIDTH, WINDOW_MIN_HEIGHT])
            .with_title("Audiobook Carousel"),
        ..Default::default()
    };

    eframe::run_native(
        "Audiobook Carousel",
        options,
        Box::new(|cc| Ok(Box::new(CarouselApp::new(cc, settings, catalog)))),
    )
    .map_err(|err| anyhow!("Failed to launch carousel window: {err}"))
}
