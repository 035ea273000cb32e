//! Scripted input for headless runs
//!
//! Plays one game through the regular screens: picks a difficulty in the
//! menu, follows the colors of the paths ahead, leaves the score screen and
//! then quits from the menu.

use crate::input::InputEvent;
use crate::screen::{MenuEntry, Screen};
use crate::settings::Difficulty;

/// Produces each frame's events from what is on screen
#[derive(Debug, Clone)]
pub struct ScriptedPlayer {
    difficulty: Difficulty,
    played: bool,
}

impl ScriptedPlayer {
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            played: false,
        }
    }

    /// Whether a game has been played to its score screen
    pub fn played(&self) -> bool {
        self.played
    }

    /// Events for the next frame
    pub fn events(&mut self, screen: &Screen) -> Vec<InputEvent> {
        match screen {
            Screen::Menu(_) if self.played => vec![InputEvent::Quit],
            Screen::Menu(menu) => {
                let target = MenuEntry::ALL
                    .iter()
                    .position(|&entry| entry == MenuEntry::Play(self.difficulty))
                    .unwrap_or(0) as isize;
                let delta = target - menu.selected as isize;
                let step = if delta < 0 {
                    InputEvent::LaneUp
                } else {
                    InputEvent::LaneDown
                };
                let mut events = vec![step; delta.unsigned_abs()];
                events.push(InputEvent::Confirm);
                events
            }
            Screen::Game(game) => game
                .paths
                .next_in_lane(game.avatar.angle, game.avatar.lane)
                .map(|segment| segment.color)
                .filter(|&color| color != game.current_color)
                .map(InputEvent::ColorSelect)
                .into_iter()
                .collect(),
            Screen::ScoreDisplay(_) => {
                self.played = true;
                vec![InputEvent::Confirm]
            }
        }
    }
}
