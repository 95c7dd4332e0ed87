//! GUI-specific constants for layout, colors and animation

/// Main window limits
pub const WINDOW_MIN_WIDTH: f32 = 360.0;
pub const WINDOW_MIN_HEIGHT: f32 = 560.0;

/// Layout spacing
pub const SECTION_SPACING: f32 = 15.0;
pub const ITEM_SPACING: f32 = 8.0;

/// Slide geometry (unscaled)
pub const COVER_SIZE: egui::Vec2 = egui::vec2(240.0, 240.0);
pub const NARROW_COVER_SIZE: egui::Vec2 = egui::vec2(180.0, 180.0);
pub const CARD_INFO_HEIGHT: f32 = 200.0;
/// Cover center sits this far above the middle of the carousel area
pub const COVER_LIFT: f32 = 110.0;
pub const CARD_RADIUS: u8 = 12;

/// Navigation controls
pub const CHEVRON_SIZE: egui::Vec2 = egui::vec2(44.0, 44.0);
pub const CHEVRON_MARGIN: f32 = 24.0;
pub const EDIT_BUTTON_MARGIN: f32 = 32.0;

/// Edit overlay
pub const PREVIEW_WIDTH: f32 = 300.0;
pub const PREVIEW_COVER_SIZE: egui::Vec2 = egui::vec2(96.0, 96.0);
pub const ROW_HEIGHT: f32 = 32.0;
pub const BUBBLE_SIZE: egui::Vec2 = egui::vec2(120.0, 56.0);
pub const NARROW_BUBBLE_SIZE: egui::Vec2 = egui::vec2(88.0, 44.0);
pub const BUBBLE_RADIUS: u8 = 28;

/// Colors
pub const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(18, 18, 28);
pub const CARD_FILL: egui::Color32 = egui::Color32::from_rgb(32, 32, 48);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(99, 102, 241);
pub const STAR_COLOR: egui::Color32 = egui::Color32::from_rgb(250, 204, 21);
pub const DISCOUNT_COLOR: egui::Color32 = egui::Color32::from_rgb(255, 75, 51);
pub const TAG_FILL: egui::Color32 = egui::Color32::from_rgb(0, 35, 102);
pub const BACKDROP: egui::Color32 = egui::Color32::from_black_alpha(200);
pub const BUBBLE_FILL: egui::Color32 = egui::Color32::from_rgb(44, 44, 70);
pub const SLOT_HIGHLIGHT: egui::Color32 = egui::Color32::from_rgb(34, 197, 94);

/// Skeleton placeholder
pub const SKELETON_BASE: egui::Color32 = egui::Color32::from_rgb(40, 40, 56);
pub const SKELETON_HIGHLIGHT: egui::Color32 = egui::Color32::from_rgb(64, 64, 88);
pub const SKELETON_PULSE_SPEED: f64 = 3.0;

/// Side slides cannot be blurred; a veil of this alpha per blur pixel stands in
pub const BLUR_VEIL_ALPHA: f32 = 40.0;
