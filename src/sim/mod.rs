//! Particle simulation core
//!
//! Everything that moves particles lives here. It is deterministic and
//! single-threaded:
//! - One `World::step` call finishes all pair and particle work before returning
//! - Pairs are visited in index order, so the first pair in a cluster wins ties
//! - No rendering, windowing or input dependencies

pub mod collision;
pub mod config;
pub mod error;
pub mod gravity;
pub mod pairs;
pub mod particle;
pub mod walls;
pub mod world;

pub use collision::{CollisionResult, resolve_collision};
pub use config::{Bounds, StepConfig};
pub use error::{Result, SimError};
pub use gravity::apply_gravity;
pub use pairs::{for_each_pair, pair_count, pair_mut, pairs};
pub use particle::Particle;
pub use walls::{WallContact, collide_with_walls};
pub use world::{StepReport, World};
