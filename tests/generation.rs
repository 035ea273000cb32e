use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use spiral_dash::sim::{Spiral, generate_paths};
use spiral_dash::{Difficulty, Settings};

fn difficulty() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

proptest! {
    #[test]
    fn lanes_never_overlap(seed in any::<u64>(), difficulty in difficulty()) {
        let settings = Settings::default();
        let spiral = Spiral::new(&settings.spiral);
        let paths = generate_paths(&spiral, &settings, difficulty, &mut Pcg32::seed_from_u64(seed));

        for lane in -2..=2 {
            let segments: Vec<_> = paths.by_lane(lane).collect();
            for (i, a) in segments.iter().enumerate() {
                for b in &segments[i + 1..] {
                    prop_assert!(
                        a.end <= b.start || b.end <= a.start,
                        "lane {} overlap: [{}, {}) and [{}, {})",
                        lane, a.start, a.end, b.start, b.end
                    );
                }
            }
        }
    }

    #[test]
    fn indexes_cover_every_segment(seed in any::<u64>()) {
        let settings = Settings::default();
        let spiral = Spiral::new(&settings.spiral);
        let paths = generate_paths(&spiral, &settings, Difficulty::Hard, &mut Pcg32::seed_from_u64(seed));

        let by_lane: usize = (-2..=2).map(|lane| paths.by_lane(lane).count()).sum();
        let by_color: usize = settings
            .colors(Difficulty::Hard)
            .iter()
            .map(|&color| paths.by_color(color).count())
            .sum();
        prop_assert_eq!(by_lane, paths.len());
        prop_assert_eq!(by_color, paths.len());
        prop_assert!(paths.len() <= 100);
    }

    #[test]
    fn segment_lookup_agrees_with_scan(seed in any::<u64>(), t in 4.0f32..30.0, lane in -2i32..=2) {
        let settings = Settings::default();
        let spiral = Spiral::new(&settings.spiral);
        let paths = generate_paths(&spiral, &settings, Difficulty::Medium, &mut Pcg32::seed_from_u64(seed));

        let scanned = paths.by_lane(lane).find(|s| s.contains(t, lane)).map(|s| s.start);
        let looked_up = paths.segment_at(t, lane).and_then(|id| paths.get(id)).map(|s| s.start);
        prop_assert_eq!(scanned, looked_up);
    }
}
