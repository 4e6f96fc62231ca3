//! # Generation Module
//!
//! Seeded procedural generation of dungeon maps.
//!
//! Generation is a pipeline of passes over an owned grid: carve rooms,
//! connect them with corridors, place features (roles, doors, traps,
//! treasure), populate entities, then reveal the starting area. Intermediate
//! grids are never exposed; callers only ever see the finished
//! [`DungeonMap`](crate::DungeonMap).

pub mod dungeon;
pub mod encounters;
pub mod features;

pub use dungeon::*;

use crate::{DelveError, DelveResult, DungeonMap, Position, TileType};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

/// Configuration for dungeon generation.
///
/// Carries the grid dimensions, room sizing, and the density knobs that
/// control how many traps, enemies, and secret doors appear. The `seed`
/// makes the whole pipeline replayable: the same configuration always
/// produces the same map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Random seed for reproducible generation
    pub seed: u64,
    /// Grid width in tiles
    pub width: u32,
    /// Grid height in tiles
    pub height: u32,
    /// Minimum room edge length
    pub min_room_size: u32,
    /// Maximum room edge length
    pub max_room_size: u32,
    /// Maximum number of rooms to accept
    pub max_rooms: u32,
    /// Probability that a non-entrance room contains enemies (0.0 to 1.0)
    pub enemy_density: f64,
    /// Treasure ratio, kept for the surrounding application's config shape
    pub treasure_density: f64,
    /// Trap count scaling per room area (0.0 to 1.0)
    pub trap_density: f64,
    /// Probability that a placed door is secret (0.0 to 1.0)
    pub secret_door_chance: f64,
    /// Display name for the generated dungeon
    pub name: Option<String>,
    /// Dungeon depth for display
    pub level: u32,
}

impl GenerationConfig {
    /// Creates a configuration with the documented defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::GenerationConfig;
    ///
    /// let config = GenerationConfig::new(12345);
    /// assert_eq!(config.width, 30);
    /// assert_eq!(config.height, 20);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            width: crate::config::DEFAULT_MAP_WIDTH,
            height: crate::config::DEFAULT_MAP_HEIGHT,
            min_room_size: 4,
            max_room_size: 8,
            max_rooms: 8,
            enemy_density: 0.4,
            treasure_density: 0.2,
            trap_density: 0.1,
            secret_door_chance: 0.1,
            name: None,
            level: 1,
        }
    }

    /// Creates a configuration for testing with a smaller, denser grid.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            seed,
            width: 25,
            height: 18,
            min_room_size: 3,
            max_room_size: 6,
            max_rooms: 6,
            enemy_density: 1.0,
            treasure_density: 0.2,
            trap_density: 0.1,
            secret_door_chance: 0.0,
            name: Some("Test Dungeon".to_string()),
            level: 1,
        }
    }

    /// Validates the configuration before any placement happens.
    ///
    /// Degenerate configurations (room sizes that cannot fit, zero rooms)
    /// are rejected here so generation never silently produces an all-wall
    /// map with an invalid player position.
    pub fn validate(&self) -> DelveResult<()> {
        if self.min_room_size < 2 {
            return Err(DelveError::InvalidConfig(
                "min_room_size must be at least 2".to_string(),
            ));
        }
        if self.min_room_size > self.max_room_size {
            return Err(DelveError::InvalidConfig(format!(
                "min_room_size {} exceeds max_room_size {}",
                self.min_room_size, self.max_room_size
            )));
        }
        if self.max_rooms == 0 {
            return Err(DelveError::InvalidConfig(
                "max_rooms must be at least 1".to_string(),
            ));
        }
        // One minimum-size room must fit inside a 1-tile border.
        if self.width < self.min_room_size + 2 || self.height < self.min_room_size + 2 {
            return Err(DelveError::InvalidConfig(format!(
                "grid {}x{} cannot hold a {}-tile room inside its border",
                self.width, self.height, self.min_room_size
            )));
        }
        for (name, value) in [
            ("enemy_density", self.enemy_density),
            ("treasure_density", self.treasure_density),
            ("trap_density", self.trap_density),
            ("secret_door_chance", self.secret_door_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(DelveError::InvalidConfig(format!(
                    "{} must be within 0.0..=1.0, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

/// The role a room plays in the finished dungeon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomRole {
    /// Ordinary room with no special purpose
    Standard,
    /// Where the player starts; never contains spawns
    Entrance,
    /// Hosts the level boss
    Boss,
    /// Guaranteed treasure room, no enemy spawns
    Treasure,
    /// Contains the stairs down
    Exit,
}

/// A rectangular room used during generation.
///
/// Rooms exist only while the pipeline runs; they drive carving, feature
/// placement, and spawning, and are discarded once the map is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Top-left corner of the rectangle
    pub top_left: Position,
    /// Width in tiles
    pub width: u32,
    /// Height in tiles
    pub height: u32,
    /// Assigned role; starts as `Standard`
    pub role: RoomRole,
}

impl Room {
    /// Creates a new standard room.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{Position, Room};
    ///
    /// let room = Room::new(Position::new(5, 5), 6, 4);
    /// assert_eq!(room.center(), Position::new(8, 7));
    /// ```
    pub fn new(top_left: Position, width: u32, height: u32) -> Self {
        Self {
            top_left,
            width,
            height,
            role: RoomRole::Standard,
        }
    }

    /// Gets the center position (floor division on both axes).
    pub fn center(&self) -> Position {
        Position::new(
            self.top_left.x + self.width as i32 / 2,
            self.top_left.y + self.height as i32 / 2,
        )
    }

    /// Checks if a position is inside this room's rectangle.
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= self.top_left.x
            && pos.y >= self.top_left.y
            && pos.x < self.top_left.x + self.width as i32
            && pos.y < self.top_left.y + self.height as i32
    }

    /// Checks whether this room, expanded by `padding` tiles on every side,
    /// intersects another room's rectangle.
    pub fn overlaps_with_padding(&self, other: &Room, padding: i32) -> bool {
        !(self.top_left.x - padding >= other.top_left.x + other.width as i32
            || other.top_left.x >= self.top_left.x + self.width as i32 + padding
            || self.top_left.y - padding >= other.top_left.y + other.height as i32
            || other.top_left.y >= self.top_left.y + self.height as i32 + padding)
    }

    /// The four corner positions of the rectangle.
    pub fn corners(&self) -> [Position; 4] {
        let right = self.top_left.x + self.width as i32 - 1;
        let bottom = self.top_left.y + self.height as i32 - 1;
        [
            self.top_left,
            Position::new(right, self.top_left.y),
            Position::new(self.top_left.x, bottom),
            Position::new(right, bottom),
        ]
    }

    /// Every position inside the rectangle, row by row.
    pub fn interior_positions(&self) -> Vec<Position> {
        let mut positions = Vec::with_capacity((self.width * self.height) as usize);
        for y in self.top_left.y..(self.top_left.y + self.height as i32) {
            for x in self.top_left.x..(self.top_left.x + self.width as i32) {
                positions.push(Position::new(x, y));
            }
        }
        positions
    }

    /// The ring of positions one tile outside the rectangle's four edges.
    ///
    /// These are the cells a corridor must pass through to reach the room,
    /// which makes them the door candidates.
    pub fn border_ring_positions(&self) -> Vec<Position> {
        let mut positions = Vec::new();
        let left = self.top_left.x;
        let top = self.top_left.y;
        let right = left + self.width as i32 - 1;
        let bottom = top + self.height as i32 - 1;

        for x in left..=right {
            positions.push(Position::new(x, top - 1));
            positions.push(Position::new(x, bottom + 1));
        }
        for y in top..=bottom {
            positions.push(Position::new(left - 1, y));
            positions.push(Position::new(right + 1, y));
        }
        positions
    }
}

/// Trait for procedural generators.
///
/// Generators are deterministic given a configuration and an explicitly
/// threaded RNG, which keeps every stage of the pipeline replayable.
pub trait Generator<T> {
    /// Generates content using the provided configuration and random number
    /// generator.
    fn generate(&self, config: &GenerationConfig, rng: &mut StdRng) -> DelveResult<T>;

    /// Validates that the generated content meets requirements.
    fn validate(&self, content: &T, config: &GenerationConfig) -> DelveResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Generates a dungeon from a configuration with the default generator.
///
/// Convenience wrapper that seeds a [`StdRng`] from `config.seed` and runs
/// the room-and-corridor pipeline.
///
/// # Examples
///
/// ```
/// use delve::{generate_dungeon, GenerationConfig};
///
/// let map = generate_dungeon(&GenerationConfig::for_testing(99)).unwrap();
/// let again = generate_dungeon(&GenerationConfig::for_testing(99)).unwrap();
/// assert_eq!(map.player_position, again.player_position);
/// ```
pub fn generate_dungeon(config: &GenerationConfig) -> DelveResult<DungeonMap> {
    let mut rng = utils::create_rng(config);
    RoomCorridorGenerator::new().generate(config, &mut rng)
}

/// Utility functions for generation algorithms.
pub mod utils {
    use super::*;

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &GenerationConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }

    /// Validates that a generated map meets basic requirements.
    pub fn validate_map(map: &DungeonMap) -> DelveResult<()> {
        let floor_count = map
            .tiles
            .iter()
            .flat_map(|row| row.iter())
            .filter(|tile| tile.tile_type == TileType::Floor)
            .count();

        if floor_count == 0 {
            return Err(DelveError::GenerationFailed(
                "Map has no floor tiles".to_string(),
            ));
        }

        if !map.can_move_to(map.player_position.x, map.player_position.y) {
            return Err(DelveError::GenerationFailed(
                "Player position is on a blocking tile".to_string(),
            ));
        }

        Ok(())
    }
}
