//! Small geometry types shared by the layout modules

/// A point or offset in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - origin`
    pub fn delta_from(self, origin: Position) -> Position {
        Position::new(self.x - origin.x, self.y - origin.y)
    }
}

impl From<egui::Pos2> for Position {
    fn from(pos: egui::Pos2) -> Self {
        Self::new(pos.x, pos.y)
    }
}

impl From<Position> for egui::Vec2 {
    fn from(pos: Position) -> Self {
        egui::vec2(pos.x, pos.y)
    }
}

/// Responsive layout class derived from the viewport width
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Wide,
    Narrow,
}

impl ViewportClass {
    /// Classify a viewport width against the narrow breakpoint
    pub fn from_width(width: f32, narrow_breakpoint: f32) -> Self {
        if width < narrow_breakpoint {
            ViewportClass::Narrow
        } else {
            ViewportClass::Wide
        }
    }

    pub fn is_narrow(self) -> bool {
        matches!(self, ViewportClass::Narrow)
    }
}
