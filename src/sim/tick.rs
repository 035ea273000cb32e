//! Per-frame simulation tick
//!
//! Order within a tick: input, bonus, movement, point crossing, particles.

use glam::Vec2;

use super::state::GameState;
use crate::consts::MIN_DT;
use crate::hud::{Rect, button_at};
use crate::input::InputEvent;
use crate::signals::{Signals, SoundCue};
use crate::viewport::Viewport;

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Events since the previous tick, in arrival order
    pub events: Vec<InputEvent>,
    /// Demo mode - colors are picked automatically
    pub idle_mode: bool,
}

/// Everything a tick needs besides the state itself
pub struct TickContext<'a> {
    pub viewport: &'a Viewport,
    /// Current HUD color buttons, in HUD order
    pub buttons: &'a [Rect],
    pub signals: Signals<'a>,
}

/// Outcome of the point crossing check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    None,
    Neutral,
    Correct,
    Incorrect,
    /// Wrong color while already bouncing: marked hit, no penalty
    Absorbed,
}

/// Advance the game by one frame of `dt` seconds
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32, ctx: &mut TickContext<'_>) -> Crossing {
    if !state.is_running() {
        return Crossing::None;
    }

    for &event in &input.events {
        handle_input(state, event, ctx.viewport, ctx.buttons);
    }
    if !state.is_running() {
        ctx.signals.audio.cue(SoundCue::MusicFadeOut);
        return Crossing::None;
    }
    if input.idle_mode {
        autopilot(state);
    }

    let dt = dt.max(MIN_DT);
    state.time_ticks += 1;

    let on_path = state.on_path();
    state.update_bonus(on_path, dt as f64);

    let old_angle = state.avatar.angle;
    if !state.avatar.advance(dt, &state.spiral) {
        state.end();
        ctx.signals.audio.cue(SoundCue::MusicFadeOut);
        return Crossing::None;
    }

    let crossing = resolve_crossing(state, old_angle, &mut ctx.signals);

    let position = ctx.viewport.avatar_position(&state.spiral, &state.avatar);
    ctx.signals.particles.update(position, state.on_path());

    crossing
}

/// Apply one input event to a running game
pub fn handle_input(state: &mut GameState, event: InputEvent, viewport: &Viewport, buttons: &[Rect]) {
    match event {
        InputEvent::Quit => state.end(),
        InputEvent::LaneUp => state.avatar.change_lane(1),
        InputEvent::LaneDown => state.avatar.change_lane(-1),
        InputEvent::ColorSelect(color) => state.select_color(color),
        InputEvent::PointerPressed { x, y } => {
            let p = Vec2::new(x, y);
            if let Some(index) = button_at(buttons, p) {
                state.select_color_index(index);
                return;
            }
            // Outside the avatar's ring moves outward, inside moves inward
            let screen_pos = viewport.screen_pos(&state.spiral, &state.avatar);
            let distance = (viewport.to_playfield(screen_pos, p) - state.spiral.center).length();
            if distance > state.spiral.radius(state.avatar.angle, 0).abs() {
                state.avatar.change_lane(1);
            } else {
                state.avatar.change_lane(-1);
            }
        }
        InputEvent::Confirm => {}
    }
}

/// Resolve at most one point crossed between `old_angle` and the avatar's
/// current angle on its lane
fn resolve_crossing(state: &mut GameState, old_angle: f32, signals: &mut Signals<'_>) -> Crossing {
    let angle = state.avatar.angle;
    let Some(id) = state.paths.segment_at(angle, state.avatar.lane) else {
        return Crossing::None;
    };
    let Some(segment) = state.paths.get_mut(id) else {
        return Crossing::None;
    };
    let Some(index) = segment.first_crossed(old_angle, angle) else {
        return Crossing::None;
    };
    let point = &mut segment.points[index];
    let Some(color) = point.color else {
        return Crossing::Neutral;
    };
    point.hit = true;

    if color == state.current_color {
        state.correct_point_hit();
        signals.particles.explode(color);
        signals.audio.cue(SoundCue::CorrectHit);
        Crossing::Correct
    } else if !state.avatar.bouncing {
        state.incorrect_point_hit();
        signals.particles.reset();
        signals.audio.cue(SoundCue::IncorrectHit);
        Crossing::Incorrect
    } else {
        Crossing::Absorbed
    }
}

/// Demo play: take the color of the path the avatar is on or heading for
fn autopilot(state: &mut GameState) {
    let next = state
        .paths
        .next_in_lane(state.avatar.angle, state.avatar.lane)
        .map(|segment| segment.color);
    if let Some(color) = next {
        state.select_color(color);
    }
}
