//! Procedural path generation
//!
//! Candidates are drawn at random and accepted greedily: a candidate that
//! overlaps an accepted segment in its lane is dropped, with no retry. Dense
//! settings therefore end up with fewer segments than requested.

use rand::Rng;
use rand::seq::IndexedRandom;

use super::path::{PathSegment, PathSet, Point};
use super::spiral::Spiral;
use crate::consts::{MAX_PATH_LANE, MIN_PATH_LANE};
use crate::settings::{Difficulty, Settings};

/// Generate the paths of a session
pub fn generate_paths<R: Rng>(
    spiral: &Spiral,
    settings: &Settings,
    difficulty: Difficulty,
    rng: &mut R,
) -> PathSet {
    let table = settings.difficulties.get(difficulty);
    let generation = &settings.generation;
    let (start_low, start_high) = settings.start_range();

    let mut paths = PathSet::new();
    let mut rejected = 0u32;
    for _ in 0..table.target_segments {
        let Some(&color) = table.colors.choose(rng) else {
            break;
        };
        let lane = rng.random_range(MIN_PATH_LANE..=MAX_PATH_LANE);
        let start = rng.random_range(start_low..start_high);
        let length = rng.random_range(generation.min_length..generation.max_length);
        let end = (start + length).min(spiral.angle_max);

        let mut segment = PathSegment::new(start, end, color, lane);
        let count = 1 + rng.random_range(0..=generation.max_extra_points) as usize;
        populate_points(&mut segment, spiral, count, generation.neutral_chance, rng);
        if paths.try_insert(segment).is_none() {
            rejected += 1;
        }
    }

    log::debug!(
        "Generated {}/{} segments for {} ({} overlapping candidates dropped)",
        paths.len(),
        table.target_segments,
        difficulty.as_str(),
        rejected
    );
    paths
}

/// Spread `count` evenly spaced points over the segment, inset by a random
/// amount at each end
fn populate_points<R: Rng>(
    segment: &mut PathSegment,
    spiral: &Spiral,
    count: usize,
    neutral_chance: f64,
    rng: &mut R,
) {
    let length = segment.end - segment.start;
    let first = segment.start + rng.random_range(0.0..=length / 3.0);
    let last = segment.end - rng.random_range(0.0..=length / 3.0);
    let step = (last - first) / count as f32;

    segment.points = (0..count)
        .map(|i| {
            let angle = first + (i as f32 + 0.5) * step;
            let color = if rng.random_bool(neutral_chance) {
                None
            } else {
                Some(segment.color)
            };
            Point::new(spiral, angle, segment.lane, color)
        })
        .collect();
}
