use spiral_dash::signals::{ParticleSignal, Silent, Signals, SparkDensity};
use spiral_dash::sim::{
    Crossing, GamePhase, GameState, PathSegment, PathSet, Point, TickContext, TickInput, tick,
};
use spiral_dash::viewport::Viewport;
use spiral_dash::{ColorId, Difficulty, HighScores, Settings, cartesian_to_polar, to_cartesian};

const DT: f32 = 1.0 / 60.0;

fn step(state: &mut GameState, viewport: &Viewport, sparks: &mut SparkDensity) -> Crossing {
    let mut audio = Silent;
    let mut ctx = TickContext {
        viewport,
        buttons: &[],
        signals: Signals::new(&mut audio, sparks),
    };
    tick(state, &TickInput::default(), DT, &mut ctx)
}

fn lane_zero_game(color: ColorId, angles: &[f32]) -> GameState {
    let mut state = GameState::new(&Settings::default(), Difficulty::Hard, 17);
    let mut segment = PathSegment::new(9.0, 12.0, color, 0);
    for &angle in angles {
        segment
            .points
            .push(Point::new(&state.spiral, angle, 0, Some(color)));
    }
    let mut paths = PathSet::new();
    paths.try_insert(segment);
    state.paths = paths;
    state.avatar.angle = 9.0;
    state
}

#[test]
fn points_resolve_in_angle_order() {
    let angles: Vec<f32> = (1..=8).map(|i| 9.0 + i as f32 * 0.05).collect();
    let mut state = lane_zero_game(ColorId::Blue, &angles);
    state.current_color = ColorId::Blue;
    let viewport = Viewport::new(&Settings::default().viewport);
    let mut sparks = SparkDensity::new();

    let mut hit_order = Vec::new();
    while state.is_running() && state.avatar.angle < 9.5 {
        step(&mut state, &viewport, &mut sparks);
        let points = &state.paths.get(0).unwrap().points;
        for (i, point) in points.iter().enumerate() {
            if point.hit && !hit_order.contains(&i) {
                hit_order.push(i);
            }
        }
    }
    assert_eq!(hit_order, (0..angles.len()).collect::<Vec<_>>());
    // Every point was the right color, so the bonus kept growing
    assert!(state.score > 0.0);
    assert_eq!(state.phase, GamePhase::Playing);
}

#[test]
fn correct_hit_from_zero_bonus_scores_nothing() {
    let mut state = GameState::new(&Settings::default(), Difficulty::Easy, 1);
    state.correct_point_hit();
    assert_eq!(state.score, 0.0);
    assert_eq!(state.bonus, 10.0);
}

#[test]
fn correct_hit_with_bonus_hundred() {
    let mut state = GameState::new(&Settings::default(), Difficulty::Easy, 1);
    state.bonus = 100.0;
    state.correct_point_hit();
    assert_eq!(state.score, 100_000.0);
    assert_eq!(state.bonus, 110.0);
}

#[test]
fn incorrect_hit_through_tick() {
    let mut state = lane_zero_game(ColorId::Red, &[9.003]);
    state.current_color = ColorId::Blue;
    state.score = 500.0;
    let old_speed = state.avatar.speed;
    let viewport = Viewport::new(&Settings::default().viewport);
    let mut sparks = SparkDensity::new();
    sparks.explode(ColorId::Blue);

    assert_eq!(step(&mut state, &viewport, &mut sparks), Crossing::Incorrect);
    assert_eq!(state.score, 100.0);
    assert_eq!(state.bonus, 0.0);
    assert!(state.avatar.bouncing);
    assert_eq!(state.avatar.pre_bounce_speed, old_speed);
    assert_eq!(state.avatar.speed, -old_speed + 5.0);
    assert_eq!(sparks.burst(ColorId::Blue).density, 0);
}

#[test]
fn crossing_the_end_of_the_spiral_ends_the_game() {
    let mut state = GameState::new(&Settings::default(), Difficulty::Medium, 8);
    state.avatar.angle = state.spiral.angle_max - 1e-5;
    let viewport = Viewport::new(&Settings::default().viewport);
    let mut sparks = SparkDensity::new();
    step(&mut state, &viewport, &mut sparks);
    assert_eq!(state.phase, GamePhase::Ended);
}

#[test]
fn viewport_is_stable_without_movement() {
    let state = GameState::new(&Settings::default(), Difficulty::Medium, 8);
    let viewport = Viewport::new(&Settings::default().viewport);
    let a = viewport.screen_pos(&state.spiral, &state.avatar);
    let b = viewport.screen_pos(&state.spiral, &state.avatar);
    assert_eq!(a, b);
    assert_eq!(
        viewport.avatar_position(&state.spiral, &state.avatar),
        viewport.avatar_position(&state.spiral, &state.avatar)
    );
}

#[test]
fn polar_projection_round_trip() {
    let state = GameState::new(&Settings::default(), Difficulty::Hard, 2);
    let center = state.spiral.center;
    for (_, point) in state.paths.points().take(50) {
        let p = to_cartesian(point.angle, point.radius, center);
        assert!((p - point.position).length() < 1e-2);
        let (r, theta) = cartesian_to_polar(p - center);
        assert!((r - point.radius).abs() < 1e-2);
        let back = to_cartesian(theta, r, center);
        assert!((back - p).length() < 1e-2);
    }
}

#[test]
fn absent_high_score_file_then_record() {
    let path = std::env::temp_dir().join(format!("spiral-dash-it-{}.json", std::process::id()));
    let _ = std::fs::remove_file(&path);

    let mut scores = HighScores::load(&path);
    assert_eq!(scores.top_scores(), [0, 0, 0, 0, 0]);
    scores.record(42);
    assert_eq!(scores.top_scores(), [42, 0, 0, 0, 0]);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[42,0,0,0,0]");

    let _ = std::fs::remove_file(&path);
}

#[test]
fn full_demo_run_terminates() {
    let settings = Settings::default();
    let mut state = GameState::new(&settings, Difficulty::Hard, 2024);
    let viewport = Viewport::new(&settings.viewport);
    let mut sparks = SparkDensity::new();
    let input = TickInput {
        events: Vec::new(),
        idle_mode: true,
    };

    let mut ticks = 0;
    while state.is_running() {
        let mut audio = Silent;
        let mut ctx = TickContext {
            viewport: &viewport,
            buttons: &[],
            signals: Signals::new(&mut audio, &mut sparks),
        };
        tick(&mut state, &input, DT, &mut ctx);
        ticks += 1;
        assert!(ticks < 100_000, "run never ended");
    }
    assert_eq!(state.phase, GamePhase::Ended);
    assert!(state.score >= 0.0);
}
