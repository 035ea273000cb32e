//! Path segments, their points, and the lane/color index over them

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::spiral::Spiral;
use crate::consts::{MAX_PATH_LANE, MIN_PATH_LANE};
use crate::palette::ColorId;

/// A target on a path segment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Point {
    pub angle: f32,
    pub radius: f32,
    /// Absolute position (computed once at creation)
    pub position: Vec2,
    /// `None` for a neutral point, which can never be hit
    pub color: Option<ColorId>,
    pub hit: bool,
}

impl Point {
    pub fn new(spiral: &Spiral, angle: f32, lane: i32, color: Option<ColorId>) -> Self {
        Self {
            angle,
            radius: spiral.radius(angle, lane),
            position: spiral.position(angle, lane),
            color,
            hit: false,
        }
    }

    #[inline]
    pub fn is_hittable(&self) -> bool {
        self.color.is_some()
    }

    /// Whether moving from `from` to `to` passes over this unhit point
    #[inline]
    pub fn crossed(&self, from: f32, to: f32) -> bool {
        !self.hit && from < self.angle && self.angle < to
    }
}

/// A contiguous angular range on one lane, in one color
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSegment {
    pub start: f32,
    pub end: f32,
    pub color: ColorId,
    pub lane: i32,
    pub points: Vec<Point>,
}

impl PathSegment {
    pub fn new(start: f32, end: f32, color: ColorId, lane: i32) -> Self {
        Self {
            start,
            end,
            color,
            lane,
            points: Vec::new(),
        }
    }

    /// Same lane and overlapping angle ranges. Touching ends don't count.
    pub fn intersects(&self, other: &PathSegment) -> bool {
        self.lane == other.lane && self.start < other.end && other.start < self.end
    }

    /// Strictly inside the segment on the given lane
    #[inline]
    pub fn contains(&self, t: f32, lane: i32) -> bool {
        lane == self.lane && self.start < t && t < self.end
    }

    /// Index of the first unhit point crossed moving from `from` to `to`
    pub fn first_crossed(&self, from: f32, to: f32) -> Option<usize> {
        self.points.iter().position(|p| p.crossed(from, to))
    }

    /// Polyline of the segment, for drawing
    pub fn outline(&self, spiral: &Spiral) -> Vec<Vec2> {
        spiral.sample_range(self.start, self.end, self.lane)
    }
}

/// Identifies a segment inside a `PathSet`
pub type SegmentId = usize;

/// Number of lanes paths are generated on
const LANE_COUNT: usize = (MAX_PATH_LANE - MIN_PATH_LANE + 1) as usize;

/// All segments of a session with lookup by color and by lane
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathSet {
    segments: Vec<PathSegment>,
    /// Segment ids per color, in `ColorId` order
    by_color: [Vec<SegmentId>; 4],
    /// Segment ids per lane, sorted by start angle
    by_lane: [Vec<SegmentId>; LANE_COUNT],
}

impl PathSet {
    pub fn new() -> Self {
        Self::default()
    }

    fn lane_slot(lane: i32) -> Option<usize> {
        (MIN_PATH_LANE..=MAX_PATH_LANE)
            .contains(&lane)
            .then(|| (lane - MIN_PATH_LANE) as usize)
    }

    /// Whether `segment` would overlap an accepted segment in its lane
    pub fn conflicts(&self, segment: &PathSegment) -> bool {
        Self::lane_slot(segment.lane).is_some_and(|slot| {
            self.by_lane[slot]
                .iter()
                .any(|&id| self.segments[id].intersects(segment))
        })
    }

    /// Accept a segment unless it conflicts (greedy first fit).
    /// Segments outside the path lanes are never accepted.
    pub fn try_insert(&mut self, segment: PathSegment) -> Option<SegmentId> {
        let slot = Self::lane_slot(segment.lane)?;
        if self.conflicts(&segment) {
            return None;
        }
        let id = self.segments.len();
        let lane_ids = &mut self.by_lane[slot];
        let at = lane_ids.partition_point(|&other| self.segments[other].start < segment.start);
        lane_ids.insert(at, id);
        self.by_color[segment.color.index()].push(id);
        self.segments.push(segment);
        Some(id)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn get(&self, id: SegmentId) -> Option<&PathSegment> {
        self.segments.get(id)
    }

    pub fn get_mut(&mut self, id: SegmentId) -> Option<&mut PathSegment> {
        self.segments.get_mut(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathSegment> {
        self.segments.iter()
    }

    /// Segments of one color
    pub fn by_color(&self, color: ColorId) -> impl Iterator<Item = &PathSegment> {
        self.by_color[color.index()]
            .iter()
            .map(|&id| &self.segments[id])
    }

    /// Segments of one lane, ordered by start angle
    pub fn by_lane(&self, lane: i32) -> impl Iterator<Item = &PathSegment> {
        Self::lane_slot(lane)
            .map(|slot| self.by_lane[slot].as_slice())
            .unwrap_or(&[])
            .iter()
            .map(|&id| &self.segments[id])
    }

    /// Segment in `lane` strictly containing angle `t`, any color
    pub fn segment_at(&self, t: f32, lane: i32) -> Option<SegmentId> {
        let ids = &self.by_lane[Self::lane_slot(lane)?];
        // Lane segments don't overlap, so the candidate is the last one
        // starting before `t`
        let after = ids.partition_point(|&id| self.segments[id].start < t);
        let id = *ids.get(after.checked_sub(1)?)?;
        self.segments[id].contains(t, lane).then_some(id)
    }

    /// Whether `t` on `lane` lies on a segment of `color`
    pub fn on_path(&self, t: f32, lane: i32, color: ColorId) -> bool {
        self.segment_at(t, lane)
            .is_some_and(|id| self.segments[id].color == color)
    }

    /// First segment in `lane` that ends after `t`
    pub fn next_in_lane(&self, t: f32, lane: i32) -> Option<&PathSegment> {
        self.by_lane(lane).find(|segment| segment.end > t)
    }

    /// Every point of every segment
    pub fn points(&self) -> impl Iterator<Item = (&PathSegment, &Point)> {
        self.segments
            .iter()
            .flat_map(|segment| segment.points.iter().map(move |point| (segment, point)))
    }
}
