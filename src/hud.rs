//! HUD layout and hit testing
//!
//! Drawing is done elsewhere; this only decides where the color buttons and
//! labels go so pointer presses can be mapped back to them.

use glam::Vec2;

use crate::palette::ColorId;

/// Horizontal gap between color buttons
pub const BUTTON_GAP: f32 = 12.0;
/// Distance of the button row from the top edge
pub const BUTTON_TOP: f32 = 12.0;

/// Sizes of rendered assets. Lookup only.
pub trait AssetProvider {
    /// Size of the color button image
    fn button_extent(&self, color: ColorId) -> Vec2;
    /// Size of `text` rendered in the HUD font
    fn text_extent(&self, text: &str) -> Vec2;
}

/// Assets with fixed metrics (headless runs and tests)
#[derive(Debug, Clone, Copy)]
pub struct FixedAssets {
    pub button: Vec2,
    pub glyph: Vec2,
}

impl Default for FixedAssets {
    fn default() -> Self {
        Self {
            button: Vec2::new(124.0, 48.0),
            glyph: Vec2::new(12.0, 24.0),
        }
    }
}

impl AssetProvider for FixedAssets {
    fn button_extent(&self, _color: ColorId) -> Vec2 {
        self.button
    }

    fn text_extent(&self, text: &str) -> Vec2 {
        Vec2::new(self.glyph.x * text.chars().count() as f32, self.glyph.y)
    }
}

/// Axis-aligned rectangle in viewport space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        let max = self.min + self.size;
        p.x >= self.min.x && p.y >= self.min.y && p.x < max.x && p.y < max.y
    }
}

/// Color buttons centered in a row along the top edge, in HUD order
pub fn button_bounds(viewport: Vec2, colors: &[ColorId], assets: &dyn AssetProvider) -> Vec<Rect> {
    let stride = |c: &ColorId| assets.button_extent(*c).x;
    let width_needed: f32 = colors.iter().map(stride).sum::<f32>()
        + BUTTON_GAP * colors.len().saturating_sub(1) as f32;
    let mut x = (viewport.x - width_needed) / 2.0;

    colors
        .iter()
        .map(|color| {
            let size = assets.button_extent(*color);
            let rect = Rect::new(Vec2::new(x, BUTTON_TOP), size);
            x += size.x + BUTTON_GAP;
            rect
        })
        .collect()
}

/// Index of the button under `p`
pub fn button_at(bounds: &[Rect], p: Vec2) -> Option<usize> {
    bounds.iter().position(|rect| rect.contains(p))
}

pub fn score_label(score: f64) -> String {
    format!("Score: {}", score.max(0.0) as u64)
}

pub fn bonus_label(bonus: f64) -> String {
    format!("Bonus: {}", bonus.max(0.0) as u64)
}

/// Score and bonus labels, centered near the bottom edge
pub fn label_positions(viewport: Vec2, score: &str, bonus: &str, assets: &dyn AssetProvider) -> (Vec2, Vec2) {
    let score_size = assets.text_extent(score);
    let bonus_size = assets.text_extent(bonus);
    let score_pos = Vec2::new(
        (viewport.x - score_size.x) / 2.0,
        viewport.y - 20.0 - score_size.y * 2.0,
    );
    let bonus_pos = Vec2::new(
        (viewport.x - bonus_size.x) / 2.0,
        viewport.y - 10.0 - bonus_size.y,
    );
    (score_pos, bonus_pos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buttons_are_centered() {
        let assets = FixedAssets::default();
        let bounds = button_bounds(Vec2::new(640.0, 480.0), &ColorId::ALL, &assets);
        assert_eq!(bounds.len(), 4);
        // 4 * 124 + 3 * 12 = 532, (640 - 532) / 2 = 54
        assert_eq!(bounds[0].min, Vec2::new(54.0, BUTTON_TOP));
        assert_eq!(bounds[1].min.x, 54.0 + 136.0);
        let right = bounds[3].min.x + bounds[3].size.x;
        assert!((640.0 - right - 54.0).abs() < 1e-3);
    }

    #[test]
    fn test_button_at() {
        let assets = FixedAssets::default();
        let bounds = button_bounds(Vec2::new(640.0, 480.0), &[ColorId::Blue, ColorId::Red], &assets);
        assert_eq!(button_at(&bounds, bounds[1].min + Vec2::splat(5.0)), Some(1));
        assert_eq!(button_at(&bounds, Vec2::new(320.0, 300.0)), None);
        // The gap between buttons is not a button
        let gap = Vec2::new(bounds[0].min.x + 124.0 + 6.0, 20.0);
        assert_eq!(button_at(&bounds, gap), None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(score_label(12345.9), "Score: 12345");
        assert_eq!(bonus_label(7.2), "Bonus: 7");
        let (score, bonus) = label_positions(
            Vec2::new(640.0, 480.0),
            "Score: 0",
            "Bonus: 0",
            &FixedAssets::default(),
        );
        assert!(score.y < bonus.y);
        assert_eq!(score.x, (640.0 - 96.0) / 2.0);
    }
}
