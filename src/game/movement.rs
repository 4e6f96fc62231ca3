//! # Movement Controller
//!
//! Collision-checked player movement over the generated grid.
//!
//! Movement is a state machine over `player_position` driven by cardinal
//! [`Direction`] inputs. A rejected step (wall, pit, lava, or out of bounds)
//! is a normal no-op, not an error: callers detect success by the returned
//! events or by comparing positions. A successful step updates visibility and
//! reports interaction events for the calling layer to act on.

use crate::{config, Direction, DungeonMap, Entity, MoveEvent, Position, TileType};

impl DungeonMap {
    /// Checks whether the player may stand on `(x, y)`.
    ///
    /// Fails for out-of-bounds coordinates and for blocking tile types;
    /// everything else (traps, doors, water, stairs, treasure) is fair game.
    ///
    /// # Examples
    ///
    /// ```
    /// use delve::{generate_dungeon, GenerationConfig};
    ///
    /// let map = generate_dungeon(&GenerationConfig::for_testing(7)).unwrap();
    /// assert!(!map.can_move_to(-1, 0));
    /// assert!(map.can_move_to(map.player_position.x, map.player_position.y));
    /// ```
    pub fn can_move_to(&self, x: i32, y: i32) -> bool {
        match self.get_tile(Position::new(x, y)) {
            Some(tile) => !tile.tile_type.blocks_movement(),
            None => false,
        }
    }

    /// Attempts to move the player one tile in `direction`.
    ///
    /// If the target tile is blocked the call is a silent no-op and returns
    /// no events. Otherwise the player position updates, visibility is
    /// recomputed with the default view radius, and the returned events
    /// describe the new tile plus any hostile entities now in combat range.
    pub fn move_player(&mut self, direction: Direction) -> Vec<MoveEvent> {
        let target = self.player_position + direction.to_delta();

        if !self.can_move_to(target.x, target.y) {
            return Vec::new();
        }

        self.player_position = target;
        self.update_visibility(config::DEFAULT_VIEW_RADIUS);
        self.interaction_events(target)
    }

    /// Returns every entity within Euclidean `range` of the player.
    pub fn get_entities_in_range(&self, range: f64) -> Vec<&Entity> {
        self.entities
            .iter()
            .filter(|entity| {
                self.player_position.euclidean_distance(entity.position) <= range
            })
            .collect()
    }

    /// Derives the interaction events for a freshly entered tile.
    fn interaction_events(&self, position: Position) -> Vec<MoveEvent> {
        let mut events = Vec::new();

        if let Some(tile) = self.get_tile(position) {
            match tile.tile_type {
                TileType::Trap => events.push(MoveEvent::TrapTriggered { position }),
                TileType::Treasure => events.push(MoveEvent::TreasureFound { position }),
                TileType::StairsDown => events.push(MoveEvent::StairsFound { position }),
                TileType::Door | TileType::SecretDoor => {
                    events.push(MoveEvent::DoorPassed { position })
                }
                _ => {}
            }
        }

        for entity in self.get_entities_in_range(config::ENEMY_PROXIMITY_RANGE) {
            if entity.kind.is_hostile() {
                events.push(MoveEvent::EnemyNearby {
                    entity_id: entity.id,
                    name: entity.name.clone(),
                });
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Entity, Tile};

    fn open_map(width: u32, height: u32) -> DungeonMap {
        let mut map = DungeonMap::new(width, height, "Test".to_string(), 1);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                map.set_tile(Position::new(x, y), Tile::floor());
            }
        }
        map
    }

    #[test]
    fn test_can_move_to_bounds() {
        let map = open_map(10, 10);
        assert!(!map.can_move_to(-1, 0));
        assert!(!map.can_move_to(0, -1));
        assert!(!map.can_move_to(10, 5));
        assert!(!map.can_move_to(5, 10));
        assert!(map.can_move_to(0, 0));
        assert!(map.can_move_to(9, 9));
    }

    #[test]
    fn test_can_move_to_tile_types() {
        let mut map = open_map(10, 10);
        map.set_tile(Position::new(1, 1), Tile::new(TileType::Lava));
        map.set_tile(Position::new(2, 1), Tile::new(TileType::Pit));
        map.set_tile(Position::new(3, 1), Tile::new(TileType::Treasure));
        map.set_tile(Position::new(4, 1), Tile::new(TileType::Water));

        assert!(!map.can_move_to(1, 1));
        assert!(!map.can_move_to(2, 1));
        assert!(map.can_move_to(3, 1));
        assert!(map.can_move_to(4, 1));
    }

    #[test]
    fn test_move_into_wall_is_noop() {
        let mut map = open_map(10, 10);
        map.player_position = Position::new(5, 5);
        map.set_tile(Position::new(6, 5), Tile::wall());

        let events = map.move_player(Direction::Right);
        assert!(events.is_empty());
        assert_eq!(map.player_position, Position::new(5, 5));
    }

    #[test]
    fn test_move_onto_floor_updates_position_and_visibility() {
        let mut map = open_map(20, 20);
        map.player_position = Position::new(5, 5);

        let events = map.move_player(Direction::Right);
        assert!(events.is_empty());
        assert_eq!(map.player_position, Position::new(6, 5));
        assert!(map.get_tile(Position::new(6, 5)).unwrap().visible);
    }

    #[test]
    fn test_move_off_the_grid_is_noop() {
        let mut map = open_map(10, 10);
        map.player_position = Position::new(0, 0);
        let events = map.move_player(Direction::Left);
        assert!(events.is_empty());
        assert_eq!(map.player_position, Position::new(0, 0));
    }

    #[test]
    fn test_trap_event_without_consuming_tile() {
        let mut map = open_map(10, 10);
        map.player_position = Position::new(5, 5);
        map.set_tile(Position::new(6, 5), Tile::new(TileType::Trap));

        let events = map.move_player(Direction::Right);
        assert_eq!(
            events,
            vec![MoveEvent::TrapTriggered {
                position: Position::new(6, 5)
            }]
        );
        // The move reports the trap but does not mutate it.
        assert_eq!(
            map.get_tile(Position::new(6, 5)).unwrap().tile_type,
            TileType::Trap
        );
    }

    #[test]
    fn test_stairs_and_door_events() {
        let mut map = open_map(10, 10);
        map.player_position = Position::new(5, 5);
        map.set_tile(Position::new(6, 5), Tile::new(TileType::StairsDown));
        map.set_tile(Position::new(5, 6), Tile::new(TileType::SecretDoor));

        let events = map.move_player(Direction::Right);
        assert_eq!(
            events,
            vec![MoveEvent::StairsFound {
                position: Position::new(6, 5)
            }]
        );

        map.player_position = Position::new(5, 5);
        let events = map.move_player(Direction::Down);
        assert_eq!(
            events,
            vec![MoveEvent::DoorPassed {
                position: Position::new(5, 6)
            }]
        );
    }

    #[test]
    fn test_enemy_proximity_events() {
        let mut map = open_map(10, 10);
        map.player_position = Position::new(5, 5);
        map.entities.push(Entity::enemy(
            "Goblin".to_string(),
            Position::new(7, 5),
            15,
            25,
        ));
        map.entities.push(Entity::enemy(
            "Skeleton".to_string(),
            Position::new(7, 6),
            15,
            25,
        ));
        // An ally next to the target tile must not raise combat events.
        map.entities.push(Entity::new(
            crate::EntityKind::Ally,
            "Torchbearer".to_string(),
            Position::new(6, 6),
        ));

        let events = map.move_player(Direction::Right);
        let names: Vec<_> = events
            .iter()
            .filter_map(|e| match e {
                MoveEvent::EnemyNearby { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect();
        // Goblin at distance 1, Skeleton at sqrt(2); both within 1.5.
        assert_eq!(names.len(), 2);
        assert!(names.contains(&"Goblin"));
        assert!(names.contains(&"Skeleton"));
    }

    #[test]
    fn test_get_entities_in_range() {
        let mut map = open_map(20, 20);
        map.player_position = Position::new(10, 10);
        map.entities.push(Entity::enemy(
            "Near".to_string(),
            Position::new(12, 10),
            10,
            25,
        ));
        map.entities.push(Entity::enemy(
            "Far".to_string(),
            Position::new(18, 18),
            10,
            25,
        ));

        let near = map.get_entities_in_range(3.0);
        assert_eq!(near.len(), 1);
        assert_eq!(near[0].name, "Near");

        let all = map.get_entities_in_range(20.0);
        assert_eq!(all.len(), 2);
    }
}
