//! Simulation module
//!
//! All gameplay logic lives here. It has no rendering or platform
//! dependencies:
//! - Seeded RNG only (same seed, same paths)
//! - Collaborators are told what happened through `signals`
//! - Elapsed time comes in from the caller

pub mod avatar;
pub mod generator;
pub mod path;
pub mod spiral;
pub mod state;
pub mod tick;

pub use avatar::Avatar;
pub use generator::generate_paths;
pub use path::{PathSegment, PathSet, Point, SegmentId};
pub use spiral::Spiral;
pub use state::{GamePhase, GameState};
pub use tick::{Crossing, TickContext, TickInput, handle_input, tick};
