//! # Dungeon Generation
//!
//! Procedural dungeon layout generation using a room-and-corridor algorithm.
//!
//! The generator owns the grid for the whole pipeline: it carves rooms and
//! corridors, hands the grid to the feature and encounter passes, places the
//! player, reveals the starting area, and validates connectivity before the
//! finished map leaves this module.

use crate::{
    config, encounters, features, utils, DelveError, DelveResult, DungeonMap, GenerationConfig,
    Generator, Position, Room, Tile, TileType,
};
use log::{debug, info};
use rand::{rngs::StdRng, Rng};
use std::collections::{HashSet, VecDeque};

/// Primary dungeon generator.
///
/// Creates dungeons by:
/// 1. Placing non-overlapping rectangular rooms with collision detection
/// 2. Connecting consecutive rooms with L-shaped corridors
/// 3. Assigning room roles and placing doors, traps, and treasure
/// 4. Spawning enemies and a boss according to the density configuration
#[derive(Debug, Clone)]
pub struct RoomCorridorGenerator {
    /// Candidate attempts per requested room before placement stops
    pub attempts_per_room: u32,
    /// Minimum padding between any two accepted rooms
    pub room_padding: i32,
    /// Whether to flood-fill check that every room is reachable
    pub ensure_connectivity: bool,
}

impl RoomCorridorGenerator {
    /// Creates a new dungeon generator with default settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::RoomCorridorGenerator;
    ///
    /// let generator = RoomCorridorGenerator::new();
    /// assert!(generator.ensure_connectivity);
    /// ```
    pub fn new() -> Self {
        Self {
            attempts_per_room: config::PLACEMENT_ATTEMPTS_PER_ROOM,
            room_padding: config::ROOM_PADDING,
            ensure_connectivity: true,
        }
    }

    /// Places up to `config.max_rooms` rooms, rejecting overlapping
    /// candidates, and carves the accepted ones to floor.
    fn place_rooms(
        &self,
        map: &mut DungeonMap,
        gen_config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> DelveResult<Vec<Room>> {
        let mut rooms: Vec<Room> = Vec::new();

        // Candidate sizes are clamped so every attempt can actually fit
        // inside the 1-tile border.
        let max_w = gen_config.max_room_size.min(gen_config.width - 2);
        let max_h = gen_config.max_room_size.min(gen_config.height - 2);

        let total_attempts = self.attempts_per_room * gen_config.max_rooms;
        for _ in 0..total_attempts {
            if rooms.len() >= gen_config.max_rooms as usize {
                break;
            }

            let width = rng.gen_range(gen_config.min_room_size..=max_w);
            let height = rng.gen_range(gen_config.min_room_size..=max_h);
            let x = rng.gen_range(1..=(gen_config.width - width - 1)) as i32;
            let y = rng.gen_range(1..=(gen_config.height - height - 1)) as i32;

            let candidate = Room::new(Position::new(x, y), width, height);

            let collides = rooms
                .iter()
                .any(|existing| candidate.overlaps_with_padding(existing, self.room_padding));
            if collides {
                continue;
            }

            self.carve_room(map, &candidate);
            rooms.push(candidate);
        }

        if rooms.is_empty() {
            return Err(DelveError::GenerationFailed(
                "Failed to place any rooms".to_string(),
            ));
        }

        Ok(rooms)
    }

    /// Carves a room's rectangle to floor.
    fn carve_room(&self, map: &mut DungeonMap, room: &Room) {
        for pos in room.interior_positions() {
            map.set_tile(pos, Tile::floor());
        }
    }

    /// Connects each room to the previously accepted one with an L-shaped
    /// corridor between their centers.
    fn connect_rooms(&self, map: &mut DungeonMap, rooms: &[Room], rng: &mut StdRng) {
        for pair in rooms.windows(2) {
            let start = pair[0].center();
            let end = pair[1].center();
            self.carve_l_corridor(map, start, end, rng.gen_bool(0.5));
        }
    }

    /// Carves an L-shaped corridor between two points.
    ///
    /// Corridor carving only turns walls into floor; doors, traps, and other
    /// already-carved tiles are left alone, which keeps the operation
    /// idempotent over existing floor.
    fn carve_l_corridor(
        &self,
        map: &mut DungeonMap,
        start: Position,
        end: Position,
        horizontal_first: bool,
    ) {
        if horizontal_first {
            self.carve_horizontal(map, start.x, end.x, start.y);
            self.carve_vertical(map, start.y, end.y, end.x);
        } else {
            self.carve_vertical(map, start.y, end.y, start.x);
            self.carve_horizontal(map, start.x, end.x, end.y);
        }
    }

    fn carve_horizontal(&self, map: &mut DungeonMap, x1: i32, x2: i32, y: i32) {
        for x in x1.min(x2)..=x1.max(x2) {
            self.carve_corridor_tile(map, Position::new(x, y));
        }
    }

    fn carve_vertical(&self, map: &mut DungeonMap, y1: i32, y2: i32, x: i32) {
        for y in y1.min(y2)..=y1.max(y2) {
            self.carve_corridor_tile(map, Position::new(x, y));
        }
    }

    fn carve_corridor_tile(&self, map: &mut DungeonMap, pos: Position) {
        if let Some(tile) = map.get_tile_mut(pos) {
            if tile.tile_type == TileType::Wall {
                tile.tile_type = TileType::Floor;
            }
        }
    }

    /// Validates that every room center is reachable from the entrance.
    ///
    /// Flood fill over passable tiles starting at the first room's center.
    fn validate_connectivity(&self, map: &DungeonMap, rooms: &[Room]) -> DelveResult<()> {
        if !self.ensure_connectivity || rooms.is_empty() {
            return Ok(());
        }

        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();

        let start = rooms[0].center();
        queue.push_back(start);
        visited.insert(start);

        while let Some(pos) = queue.pop_front() {
            for adjacent in pos.cardinal_adjacent_positions() {
                if visited.contains(&adjacent) {
                    continue;
                }
                if let Some(tile) = map.get_tile(adjacent) {
                    if tile.tile_type.is_passable() {
                        visited.insert(adjacent);
                        queue.push_back(adjacent);
                    }
                }
            }
        }

        for (index, room) in rooms.iter().enumerate() {
            if !visited.contains(&room.center()) {
                return Err(DelveError::GenerationFailed(format!(
                    "Room {} is not connected to the entrance",
                    index
                )));
            }
        }

        Ok(())
    }
}

impl RoomCorridorGenerator {
    /// Runs the full pipeline and returns the map together with the room
    /// list used to build it.
    ///
    /// The rooms are generation-time scaffolding and are not part of the
    /// persisted map; this entry point exists for callers (and tests) that
    /// want to inspect the layout, e.g. to check role assignment or walk a
    /// path from the entrance to the exit.
    pub fn generate_layout(
        &self,
        gen_config: &GenerationConfig,
        rng: &mut StdRng,
    ) -> DelveResult<(DungeonMap, Vec<Room>)> {
        gen_config.validate()?;

        info!(
            "generating {}x{} dungeon with seed {}",
            gen_config.width, gen_config.height, gen_config.seed
        );

        let name = gen_config
            .name
            .clone()
            .unwrap_or_else(|| "Dungeon".to_string());
        let mut map = DungeonMap::new(gen_config.width, gen_config.height, name, gen_config.level);

        // Pass ordering is a contract: rooms, corridors, features, entities.
        // Later passes only act on tiles still of type floor, which protects
        // everything placed earlier.
        let mut rooms = self.place_rooms(&mut map, gen_config, rng)?;
        self.connect_rooms(&mut map, &rooms, rng);
        features::place_features(&mut map, &mut rooms, gen_config, rng);
        encounters::populate_entities(&mut map, &rooms, gen_config, rng);

        let entrance = rooms[0].center();
        map.player_position = entrance;
        map.reveal_area(entrance.x, entrance.y, config::DEFAULT_VIEW_RADIUS);

        self.validate_connectivity(&map, &rooms)?;
        utils::validate_map(&map)?;

        debug!(
            "placed {} rooms and {} entities",
            rooms.len(),
            map.entities.len()
        );

        Ok((map, rooms))
    }
}

impl Generator<DungeonMap> for RoomCorridorGenerator {
    fn generate(&self, gen_config: &GenerationConfig, rng: &mut StdRng) -> DelveResult<DungeonMap> {
        let (map, _rooms) = self.generate_layout(gen_config, rng)?;
        Ok(map)
    }

    fn validate(&self, map: &DungeonMap, _config: &GenerationConfig) -> DelveResult<()> {
        utils::validate_map(map)
    }

    fn generator_type(&self) -> &'static str {
        "RoomCorridorGenerator"
    }
}

impl Default for RoomCorridorGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::create_rng;

    #[test]
    fn test_generator_defaults() {
        let generator = RoomCorridorGenerator::new();
        assert_eq!(generator.attempts_per_room, 3);
        assert_eq!(generator.room_padding, 2);
        assert!(generator.ensure_connectivity);
    }

    #[test]
    fn test_l_corridor_carving() {
        let generator = RoomCorridorGenerator::new();
        let mut map = DungeonMap::new(20, 20, "Test".to_string(), 1);

        let start = Position::new(5, 5);
        let end = Position::new(15, 15);
        generator.carve_l_corridor(&mut map, start, end, true);

        assert_eq!(map.get_tile(start).unwrap().tile_type, TileType::Floor);
        assert_eq!(map.get_tile(end).unwrap().tile_type, TileType::Floor);
        // Elbow of a horizontal-first corridor sits at (end.x, start.y).
        assert_eq!(
            map.get_tile(Position::new(15, 5)).unwrap().tile_type,
            TileType::Floor
        );
    }

    #[test]
    fn test_corridor_does_not_overwrite_doors() {
        let generator = RoomCorridorGenerator::new();
        let mut map = DungeonMap::new(20, 20, "Test".to_string(), 1);
        map.set_tile(Position::new(10, 5), Tile::new(TileType::Door));

        generator.carve_l_corridor(&mut map, Position::new(5, 5), Position::new(15, 5), true);

        assert_eq!(
            map.get_tile(Position::new(10, 5)).unwrap().tile_type,
            TileType::Door
        );
        assert_eq!(
            map.get_tile(Position::new(9, 5)).unwrap().tile_type,
            TileType::Floor
        );
    }

    #[test]
    fn test_place_rooms_respects_padding_and_bounds() {
        let generator = RoomCorridorGenerator::new();
        let gen_config = GenerationConfig::for_testing(4242);
        let mut rng = create_rng(&gen_config);
        let mut map = DungeonMap::new(gen_config.width, gen_config.height, "T".to_string(), 1);

        let rooms = generator.place_rooms(&mut map, &gen_config, &mut rng).unwrap();
        assert!(!rooms.is_empty());
        assert!(rooms.len() <= gen_config.max_rooms as usize);

        for (i, room) in rooms.iter().enumerate() {
            // Inside the 1-tile border.
            assert!(room.top_left.x >= 1);
            assert!(room.top_left.y >= 1);
            assert!(room.top_left.x + (room.width as i32) < gen_config.width as i32);
            assert!(room.top_left.y + (room.height as i32) < gen_config.height as i32);

            for other in &rooms[i + 1..] {
                assert!(!room.overlaps_with_padding(other, 2));
            }
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let gen_config = GenerationConfig::for_testing(777);
        let generator = RoomCorridorGenerator::new();

        let mut rng1 = create_rng(&gen_config);
        let mut rng2 = create_rng(&gen_config);
        let map1 = generator.generate(&gen_config, &mut rng1).unwrap();
        let map2 = generator.generate(&gen_config, &mut rng2).unwrap();

        assert_eq!(map1.player_position, map2.player_position);
        assert_eq!(map1.tiles, map2.tiles);
        assert_eq!(map1.entities.len(), map2.entities.len());
    }

    #[test]
    fn test_generate_rejects_degenerate_config() {
        let mut gen_config = GenerationConfig::new(1);
        gen_config.width = 4;
        gen_config.height = 4;

        let generator = RoomCorridorGenerator::new();
        let mut rng = create_rng(&gen_config);
        assert!(generator.generate(&gen_config, &mut rng).is_err());
    }

    #[test]
    fn test_generated_map_validates() {
        let gen_config = GenerationConfig::for_testing(31337);
        let generator = RoomCorridorGenerator::new();
        let mut rng = create_rng(&gen_config);
        let map = generator.generate(&gen_config, &mut rng).unwrap();
        assert!(generator.validate(&map, &gen_config).is_ok());
        assert_eq!(generator.generator_type(), "RoomCorridorGenerator");
    }
}
