//! # Delve
//!
//! Procedural dungeon generation and exploration for campaign tooling.
//!
//! ## Architecture Overview
//!
//! Delve is the map-and-movement core of a larger campaign manager. It has no
//! rendering, networking, or storage of its own; it produces and mutates a
//! plain serializable [`DungeonMap`] that the surrounding application renders
//! and persists. The crate is organized around a few key concepts:
//!
//! - **Grid Model**: tiles, entities, and coordinate geometry
//! - **Generation System**: seeded room-and-corridor dungeon generation
//! - **Visibility Engine**: fog-of-war tracking (explored vs. currently visible)
//! - **Movement Controller**: collision-checked player movement with
//!   interaction events
//!
//! ## Determinism
//!
//! Every generation function takes an explicit [`rand::rngs::StdRng`] seeded
//! from [`GenerationConfig::seed`], so the same configuration always produces
//! the same dungeon. This is the backbone of the regression tests.

pub mod game;
pub mod generation;

// Core module re-exports
pub use game::*;
pub use generation::*;

// Explicit re-exports for commonly used types
pub use game::{
    Direction, DungeonMap, Entity, EntityId, EntityKind, MoveEvent, Position, Tile, TileType,
};

pub use generation::{
    generate_dungeon, GenerationConfig, Generator, Room, RoomCorridorGenerator, RoomRole,
};

/// Core error type for the Delve engine.
#[derive(thiserror::Error, Debug)]
pub enum DelveError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration cannot produce a valid dungeon
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Generation failed
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// Map state is invalid
    #[error("Invalid map state: {0}")]
    InvalidState(String),
}

/// Result type used throughout the Delve codebase.
pub type DelveResult<T> = Result<T, DelveError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine configuration constants.
pub mod config {
    /// Default dungeon width in tiles
    pub const DEFAULT_MAP_WIDTH: u32 = 30;

    /// Default dungeon height in tiles
    pub const DEFAULT_MAP_HEIGHT: u32 = 20;

    /// Default player sight radius in tiles
    pub const DEFAULT_VIEW_RADIUS: u32 = 5;

    /// Placement attempts per requested room before generation gives up
    pub const PLACEMENT_ATTEMPTS_PER_ROOM: u32 = 3;

    /// Padding (in tiles) required between any two placed rooms
    pub const ROOM_PADDING: i32 = 2;

    /// Enemies closer than this (Euclidean) to the player raise a proximity event
    pub const ENEMY_PROXIMITY_RANGE: f64 = 1.5;
}
