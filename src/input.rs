//! Input events produced by the platform layer, consumed once per tick

use glam::Vec2;

use crate::palette::ColorId;

/// A discrete input event
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Quit / escape
    Quit,
    /// One lane outward; moves the menu cursor up
    LaneUp,
    /// One lane inward; moves the menu cursor down
    LaneDown,
    ColorSelect(ColorId),
    /// Click or tap, in viewport coordinates
    PointerPressed { x: f32, y: f32 },
    /// Enter / return (menus only)
    Confirm,
}

impl InputEvent {
    pub fn pointer(p: Vec2) -> Self {
        InputEvent::PointerPressed { x: p.x, y: p.y }
    }
}
