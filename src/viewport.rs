//! Scrolling viewport that keeps the avatar centered

use glam::Vec2;

use crate::settings::ViewportSettings;
use crate::sim::{Avatar, PathSegment, PathSet, Point, Spiral};
use crate::to_cartesian;

/// Visible window onto the playfield
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub size: Vec2,
}

impl Viewport {
    pub fn new(settings: &ViewportSettings) -> Self {
        Self {
            size: Vec2::new(settings.width, settings.height),
        }
    }

    /// Playfield position of the viewport's top-left corner.
    ///
    /// Follows the base spiral rather than the avatar's lane, so lane
    /// changes move the avatar on screen instead of the camera.
    pub fn screen_pos(&self, spiral: &Spiral, avatar: &Avatar) -> Vec2 {
        let r = spiral.radius(avatar.angle, 0);
        to_cartesian(avatar.angle, r, spiral.center) - self.size / 2.0
    }

    /// Playfield → viewport coordinates
    #[inline]
    pub fn to_viewport(&self, screen_pos: Vec2, p: Vec2) -> Vec2 {
        p - screen_pos
    }

    /// Viewport → playfield coordinates
    #[inline]
    pub fn to_playfield(&self, screen_pos: Vec2, p: Vec2) -> Vec2 {
        p + screen_pos
    }

    /// Whether a viewport-space position is on screen
    #[inline]
    pub fn is_visible(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.y >= 0.0 && p.x < self.size.x && p.y < self.size.y
    }

    /// Avatar position in viewport space
    pub fn avatar_position(&self, spiral: &Spiral, avatar: &Avatar) -> Vec2 {
        self.to_viewport(self.screen_pos(spiral, avatar), avatar.position(spiral))
    }

    /// Points on screen, with their viewport positions
    pub fn visible_points<'a>(
        &'a self,
        paths: &'a PathSet,
        screen_pos: Vec2,
    ) -> impl Iterator<Item = (&'a PathSegment, &'a Point, Vec2)> + 'a {
        paths.points().filter_map(move |(segment, point)| {
            let p = self.to_viewport(screen_pos, point.position);
            self.is_visible(p).then_some((segment, point, p))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ColorId;
    use crate::settings::{AvatarSettings, SpiralSettings};

    fn setup() -> (Viewport, Spiral, Avatar) {
        let spiral = Spiral::new(&SpiralSettings::default());
        let avatar = Avatar::new(&spiral, &AvatarSettings::default());
        (Viewport::new(&ViewportSettings::default()), spiral, avatar)
    }

    #[test]
    fn test_avatar_is_centered_on_lane_zero() {
        let (viewport, spiral, mut avatar) = setup();
        avatar.angle = 12.0;
        let p = viewport.avatar_position(&spiral, &avatar);
        assert!((p - Vec2::new(320.0, 240.0)).length() < 1e-2);
    }

    #[test]
    fn test_screen_pos_is_idempotent() {
        let (viewport, spiral, mut avatar) = setup();
        avatar.angle = 8.3;
        avatar.lane = 1;
        let a = viewport.screen_pos(&spiral, &avatar);
        let b = viewport.screen_pos(&spiral, &avatar);
        assert_eq!(a, b);
    }

    #[test]
    fn test_lane_change_keeps_camera() {
        let (viewport, spiral, mut avatar) = setup();
        avatar.angle = 8.3;
        let before = viewport.screen_pos(&spiral, &avatar);
        avatar.change_lane(1);
        assert_eq!(viewport.screen_pos(&spiral, &avatar), before);
        assert!(viewport.avatar_position(&spiral, &avatar) != Vec2::new(320.0, 240.0));
    }

    #[test]
    fn test_visibility_bounds() {
        let (viewport, _, _) = setup();
        assert!(viewport.is_visible(Vec2::new(0.0, 0.0)));
        assert!(viewport.is_visible(Vec2::new(639.9, 479.9)));
        assert!(!viewport.is_visible(Vec2::new(640.0, 10.0)));
        assert!(!viewport.is_visible(Vec2::new(-0.1, 10.0)));
    }

    #[test]
    fn test_visible_points_filters() {
        let (viewport, spiral, mut avatar) = setup();
        avatar.angle = 10.0;
        let mut paths = PathSet::new();
        let mut near = PathSegment::new(9.9, 10.3, ColorId::Blue, 0);
        near.points.push(Point::new(&spiral, 10.1, 0, Some(ColorId::Blue)));
        let mut far = PathSegment::new(25.0, 25.5, ColorId::Red, 0);
        far.points.push(Point::new(&spiral, 25.2, 0, Some(ColorId::Red)));
        paths.try_insert(near);
        paths.try_insert(far);

        let screen_pos = viewport.screen_pos(&spiral, &avatar);
        let visible: Vec<_> = viewport.visible_points(&paths, screen_pos).collect();
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].0.color, ColorId::Blue);
    }
}
