//! Screens and the dispatch between them
//!
//! The menu runs a hard-difficulty demo game behind its entries. Picking a
//! difficulty starts a game; when the game ends its score is recorded and
//! shown until the player confirms, then the menu comes back.

use glam::Vec2;
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_pcg::Pcg32;

use crate::consts::DEMO_SPEED;
use crate::highscores::HighScores;
use crate::hud::{self, AssetProvider, Rect};
use crate::input::InputEvent;
use crate::palette::ColorId;
use crate::settings::{Difficulty, Settings};
use crate::signals::{ParticleSignal, Signals, Silent, SoundCue};
use crate::sim::{GameState, TickContext, TickInput, tick};
use crate::viewport::Viewport;

/// Vertical gap between menu entries
const MENU_SPACING: f32 = 20.0;

/// A menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEntry {
    Play(Difficulty),
    Exit,
}

impl MenuEntry {
    pub const ALL: [MenuEntry; 4] = [
        MenuEntry::Play(Difficulty::Easy),
        MenuEntry::Play(Difficulty::Medium),
        MenuEntry::Play(Difficulty::Hard),
        MenuEntry::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuEntry::Play(Difficulty::Easy) => "Easy",
            MenuEntry::Play(Difficulty::Medium) => "Medium",
            MenuEntry::Play(Difficulty::Hard) => "Hard",
            MenuEntry::Exit => "Exit",
        }
    }
}

/// Main menu with an attract-mode game running behind it
#[derive(Debug, Clone)]
pub struct MenuState {
    /// Cursor position; wraps around the entries
    pub selected: usize,
    pub demo: Box<GameState>,
    /// Palette the menu is drawn in
    pub tint: ColorId,
    rng: Pcg32,
}

impl MenuState {
    fn new(settings: &Settings, seed: u64) -> Self {
        Self {
            selected: 0,
            demo: Box::new(demo_game(settings, seed)),
            tint: ColorId::Blue,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Switch to a random palette
    fn retint(&mut self) {
        if let Some(&color) = ColorId::ALL.choose(&mut self.rng) {
            self.tint = color;
        }
    }

    pub fn selected_entry(&self) -> MenuEntry {
        MenuEntry::ALL[self.selected % MenuEntry::ALL.len()]
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = MenuEntry::ALL.len() as isize;
        self.selected = (self.selected as isize + delta).rem_euclid(len) as usize;
    }
}

fn demo_game(settings: &Settings, seed: u64) -> GameState {
    let mut demo = GameState::new(settings, Difficulty::Hard, seed);
    demo.avatar.speed = DEMO_SPEED;
    demo.avatar.pre_bounce_speed = DEMO_SPEED;
    demo
}

/// Final score of a finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreState {
    pub score: u64,
    pub difficulty: Difficulty,
    /// Rank reached in the high score list
    pub rank: Option<usize>,
}

/// The active screen
#[derive(Debug, Clone)]
pub enum Screen {
    Menu(MenuState),
    Game(Box<GameState>),
    ScoreDisplay(ScoreState),
}

/// Whether the application keeps running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Menu entry bounds, stacked and centered in the viewport
pub fn menu_bounds(viewport: Vec2, assets: &dyn AssetProvider) -> Vec<Rect> {
    let n = MenuEntry::ALL.len() as f32;
    MenuEntry::ALL
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let size = assets.text_extent(entry.label());
            let y_offset = (viewport.y - size.y * n + MENU_SPACING * n) / 2.0;
            let x = (viewport.x - size.x) / 2.0;
            let y = size.y * i as f32 + MENU_SPACING * i as f32 + y_offset;
            Rect::new(Vec2::new(x, y), size)
        })
        .collect()
}

/// Application: owns the screen, the settings and the high score list
pub struct App {
    settings: Settings,
    viewport: Viewport,
    assets: Box<dyn AssetProvider>,
    high_scores: HighScores,
    screen: Screen,
    next_seed: u64,
}

impl App {
    /// `settings` must already be validated
    pub fn new(
        settings: Settings,
        assets: Box<dyn AssetProvider>,
        high_scores: HighScores,
        seed: u64,
    ) -> Self {
        let viewport = Viewport::new(&settings.viewport);
        let screen = Screen::Menu(MenuState::new(&settings, seed));
        Self {
            settings,
            viewport,
            assets,
            high_scores,
            screen,
            next_seed: seed,
        }
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn high_scores(&self) -> &HighScores {
        &self.high_scores
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    fn fresh_seed(&mut self) -> u64 {
        self.next_seed = self
            .next_seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.next_seed
    }

    /// Run one frame of whichever screen is active
    pub fn step(&mut self, events: &[InputEvent], dt: f32, signals: Signals<'_>) -> Flow {
        let screen = std::mem::replace(&mut self.screen, Screen::ScoreDisplay(placeholder()));
        let (next, flow) = match screen {
            Screen::Menu(menu) => self.step_menu(menu, events, dt, signals.particles),
            Screen::Game(game) => self.step_game(game, events, dt, signals),
            Screen::ScoreDisplay(score) => self.step_score(score, events),
        };
        self.screen = next;
        flow
    }

    fn step_menu(
        &mut self,
        mut menu: MenuState,
        events: &[InputEvent],
        dt: f32,
        particles: &mut dyn ParticleSignal,
    ) -> (Screen, Flow) {
        let mut chosen = None;
        for &event in events {
            match event {
                InputEvent::Quit => return (Screen::Menu(menu), Flow::Exit),
                InputEvent::LaneUp => menu.move_cursor(-1),
                InputEvent::LaneDown => menu.move_cursor(1),
                InputEvent::Confirm => chosen = Some(menu.selected_entry()),
                InputEvent::PointerPressed { x, y } => {
                    let bounds = menu_bounds(self.viewport.size, self.assets.as_ref());
                    match hud::button_at(&bounds, Vec2::new(x, y)) {
                        Some(i) => chosen = Some(MenuEntry::ALL[i]),
                        None => menu.retint(),
                    }
                }
                InputEvent::ColorSelect(color) => menu.tint = color,
            }
            if chosen.is_some() {
                break;
            }
        }

        match chosen {
            Some(MenuEntry::Exit) => return (Screen::Menu(menu), Flow::Exit),
            Some(MenuEntry::Play(difficulty)) => {
                let seed = self.fresh_seed();
                let game = GameState::new(&self.settings, difficulty, seed);
                return (Screen::Game(Box::new(game)), Flow::Continue);
            }
            None => {}
        }

        let input = TickInput {
            events: Vec::new(),
            idle_mode: true,
        };
        let mut silent = Silent;
        let mut ctx = TickContext {
            viewport: &self.viewport,
            buttons: &[],
            signals: Signals::new(&mut silent, particles),
        };
        tick(&mut menu.demo, &input, dt, &mut ctx);
        if !menu.demo.is_running() {
            let seed = self.fresh_seed();
            menu.demo = Box::new(demo_game(&self.settings, seed));
        }
        (Screen::Menu(menu), Flow::Continue)
    }

    fn step_game(
        &mut self,
        mut game: Box<GameState>,
        events: &[InputEvent],
        dt: f32,
        signals: Signals<'_>,
    ) -> (Screen, Flow) {
        if game.time_ticks == 0 {
            signals.audio.cue(SoundCue::MusicStart);
        }
        let buttons = hud::button_bounds(self.viewport.size, &game.colors, self.assets.as_ref());
        let input = TickInput {
            events: events.to_vec(),
            idle_mode: false,
        };
        let mut ctx = TickContext {
            viewport: &self.viewport,
            buttons: &buttons,
            signals: Signals::new(&mut *signals.audio, &mut *signals.particles),
        };
        tick(&mut game, &input, dt, &mut ctx);

        if game.is_running() {
            return (Screen::Game(game), Flow::Continue);
        }
        let score = game.final_score();
        let rank = self.high_scores.record(score);
        (
            Screen::ScoreDisplay(ScoreState {
                score,
                difficulty: game.difficulty,
                rank,
            }),
            Flow::Continue,
        )
    }

    fn step_score(&mut self, score: ScoreState, events: &[InputEvent]) -> (Screen, Flow) {
        let leave = events.iter().any(|e| {
            matches!(
                e,
                InputEvent::Confirm | InputEvent::Quit | InputEvent::PointerPressed { .. }
            )
        });
        if leave {
            let seed = self.fresh_seed();
            (Screen::Menu(MenuState::new(&self.settings, seed)), Flow::Continue)
        } else {
            (Screen::ScoreDisplay(score), Flow::Continue)
        }
    }
}

/// Stand-in while a screen is being stepped
fn placeholder() -> ScoreState {
    ScoreState {
        score: 0,
        difficulty: Difficulty::default(),
        rank: None,
    }
}
