//! # World Representation
//!
//! The tile grid and the [`DungeonMap`] aggregate that the rest of the crate
//! generates and mutates.
//!
//! The map is the single value that crosses the crate boundary: the generator
//! constructs it atomically, the movement controller mutates it in place, and
//! the surrounding application serializes it verbatim for persistence.

use crate::{DelveResult, Entity, Position};
use serde::{Deserialize, Serialize};

/// The type of a single grid cell.
///
/// Serialized with `snake_case` variant names (`"secret_door"`,
/// `"stairs_down"`, ...) so stored maps stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileType {
    Floor,
    Wall,
    Door,
    SecretDoor,
    Trap,
    Treasure,
    StairsUp,
    StairsDown,
    Water,
    Lava,
    Pit,
    Fog,
}

impl TileType {
    /// Whether this tile type blocks player movement.
    ///
    /// Everything outside the blocking set is traversable, including traps,
    /// treasure, doors, water, and stairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::TileType;
    ///
    /// assert!(TileType::Wall.blocks_movement());
    /// assert!(TileType::Lava.blocks_movement());
    /// assert!(!TileType::Trap.blocks_movement());
    /// assert!(!TileType::Water.blocks_movement());
    /// ```
    pub fn blocks_movement(self) -> bool {
        matches!(self, TileType::Wall | TileType::Pit | TileType::Lava)
    }

    /// Whether this tile type can be walked on.
    pub fn is_passable(self) -> bool {
        !self.blocks_movement()
    }
}

/// One cell of the dungeon grid.
///
/// Carries the fog-of-war flags: `explored` is set the first time the player
/// sees the cell and never reverts; `visible` tracks whether the cell is
/// currently within view radius and toggles freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// What occupies this cell
    pub tile_type: TileType,
    /// True once the player has ever seen this cell (monotonic)
    pub explored: bool,
    /// True only while currently within view radius
    pub visible: bool,
}

impl Tile {
    /// Creates a new unexplored tile of the given type.
    pub fn new(tile_type: TileType) -> Self {
        Self {
            tile_type,
            explored: false,
            visible: false,
        }
    }

    /// Creates a wall tile.
    pub fn wall() -> Self {
        Self::new(TileType::Wall)
    }

    /// Creates a floor tile.
    pub fn floor() -> Self {
        Self::new(TileType::Floor)
    }

    /// Sets the visibility flag.
    ///
    /// Becoming visible also marks the tile explored, preserving the
    /// invariant that a visible tile is always explored. Clearing visibility
    /// leaves exploration untouched.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if visible {
            self.explored = true;
        }
    }
}

/// The aggregate root: a generated dungeon with its tile grid, entities, and
/// the player's position.
///
/// Tiles are stored row-major: `tiles[y][x]`. After generation only
/// `player_position`, the per-tile fog-of-war flags, and `entities`
/// membership change; the grid layout itself is fixed.
///
/// # Examples
///
/// ```
/// use delve::{generate_dungeon, GenerationConfig};
///
/// let config = GenerationConfig::for_testing(12345);
/// let map = generate_dungeon(&config).unwrap();
/// assert_eq!(map.tiles.len(), map.height as usize);
/// assert!(map.can_move_to(map.player_position.x, map.player_position.y));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DungeonMap {
    /// Grid width in tiles
    pub width: u32,
    /// Grid height in tiles
    pub height: u32,
    /// Row-major tile grid, indexed `tiles[y][x]`
    pub tiles: Vec<Vec<Tile>>,
    /// Mobile actors on the map
    pub entities: Vec<Entity>,
    /// Current player position; always a non-blocking tile
    pub player_position: Position,
    /// Descriptive name for display
    pub name: String,
    /// Dungeon depth for display
    pub level: u32,
}

impl DungeonMap {
    /// Creates a new map of the given size with every tile set to wall.
    pub fn new(width: u32, height: u32, name: String, level: u32) -> Self {
        let tiles = vec![vec![Tile::wall(); width as usize]; height as usize];
        Self {
            width,
            height,
            tiles,
            entities: Vec::new(),
            player_position: Position::origin(),
            name,
            level,
        }
    }

    /// Checks whether a position lies within the grid.
    pub fn is_valid_position(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as u32) < self.width && (pos.y as u32) < self.height
    }

    /// Gets the tile at a position, or `None` when out of bounds.
    pub fn get_tile(&self, pos: Position) -> Option<&Tile> {
        if !self.is_valid_position(pos) {
            return None;
        }
        Some(&self.tiles[pos.y as usize][pos.x as usize])
    }

    /// Gets the tile at a position mutably, or `None` when out of bounds.
    pub fn get_tile_mut(&mut self, pos: Position) -> Option<&mut Tile> {
        if !self.is_valid_position(pos) {
            return None;
        }
        Some(&mut self.tiles[pos.y as usize][pos.x as usize])
    }

    /// Replaces the tile at a position, preserving nothing of the old tile.
    ///
    /// Returns `false` when the position is out of bounds.
    pub fn set_tile(&mut self, pos: Position, tile: Tile) -> bool {
        match self.get_tile_mut(pos) {
            Some(slot) => {
                *slot = tile;
                true
            }
            None => false,
        }
    }

    /// Serializes the map to a JSON string for persistence.
    pub fn save_to_json(&self) -> DelveResult<String> {
        serde_json::to_string(self).map_err(crate::DelveError::from)
    }

    /// Restores a map from its JSON representation.
    pub fn load_from_json(json: &str) -> DelveResult<Self> {
        serde_json::from_str(json).map_err(crate::DelveError::from)
    }
}
