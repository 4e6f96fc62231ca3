//! # Feature Placement
//!
//! Room roles and interactive tiles: stairs, doors, traps, and treasure.
//!
//! Every pass in this module operates only on tiles still of type floor.
//! That precondition is what protects earlier placements from later passes,
//! so the pass ordering (roles and stairs, then doors, then traps, then
//! treasure) is part of the generation contract.

use crate::{DungeonMap, GenerationConfig, Position, Room, RoomRole, Tile, TileType};
use rand::{rngs::StdRng, Rng};

/// Attempts when sampling an in-room position before giving up on one trap.
const TRAP_SAMPLE_ATTEMPTS: u32 = 8;

/// Runs all feature passes over the carved grid.
pub fn place_features(
    map: &mut DungeonMap,
    rooms: &mut [Room],
    config: &GenerationConfig,
    rng: &mut StdRng,
) {
    assign_roles(map, rooms);
    place_doors(map, rooms, config, rng);
    place_traps(map, rooms, config, rng);
    place_treasure(map, rooms, rng);
}

/// Assigns room roles and drops the stairs down in the exit room.
///
/// Role order matters: entrance, exit, boss, treasure. When the farthest
/// interior room is also the second-to-last room, the later treasure
/// assignment wins and that generation has no boss room.
pub fn assign_roles(map: &mut DungeonMap, rooms: &mut [Room]) {
    if rooms.is_empty() {
        return;
    }

    rooms[0].role = RoomRole::Entrance;
    let entrance_center = rooms[0].center();
    let count = rooms.len();

    if count >= 2 {
        rooms[count - 1].role = RoomRole::Exit;
        let stairs = rooms[count - 1].center();
        map.set_tile(stairs, Tile::new(TileType::StairsDown));
    }

    if count >= 3 {
        // Interior room (neither first nor last) farthest from the entrance.
        let mut boss_index = 1;
        let mut boss_distance = -1.0f64;
        for (index, room) in rooms.iter().enumerate().take(count - 1).skip(1) {
            let distance = entrance_center.euclidean_distance(room.center());
            if distance > boss_distance {
                boss_distance = distance;
                boss_index = index;
            }
        }
        rooms[boss_index].role = RoomRole::Boss;
    }

    if count >= 4 {
        rooms[count - 2].role = RoomRole::Treasure;
    }
}

/// Places doors where corridors touch room borders.
///
/// Scans the ring one tile outside each room edge; a floor cell there means
/// a corridor reaches the room, and becomes a door with probability 0.5
/// (secret with probability `secret_door_chance`).
pub fn place_doors(
    map: &mut DungeonMap,
    rooms: &[Room],
    config: &GenerationConfig,
    rng: &mut StdRng,
) {
    for room in rooms {
        for pos in room.border_ring_positions() {
            let is_floor = map
                .get_tile(pos)
                .map(|tile| tile.tile_type == TileType::Floor)
                .unwrap_or(false);
            if !is_floor || !rng.gen_bool(0.5) {
                continue;
            }

            let door_type = if rng.gen_bool(config.secret_door_chance) {
                TileType::SecretDoor
            } else {
                TileType::Door
            };
            map.set_tile(pos, Tile::new(door_type));
        }
    }
}

/// Scatters traps through non-entrance, non-exit rooms.
///
/// Each room gets `floor(width * height * trap_density * 0.5)` traps at
/// random in-room positions, skipping the room center (reserved for player
/// traversal) and any tile no longer plain floor.
pub fn place_traps(
    map: &mut DungeonMap,
    rooms: &[Room],
    config: &GenerationConfig,
    rng: &mut StdRng,
) {
    for room in rooms {
        if matches!(room.role, RoomRole::Entrance | RoomRole::Exit) {
            continue;
        }

        let area = (room.width * room.height) as f64;
        let trap_count = (area * config.trap_density * 0.5).floor() as u32;
        let center = room.center();

        for _ in 0..trap_count {
            for _ in 0..TRAP_SAMPLE_ATTEMPTS {
                let pos = random_position_in(room, rng);
                if pos == center {
                    continue;
                }
                let is_floor = map
                    .get_tile(pos)
                    .map(|tile| tile.tile_type == TileType::Floor)
                    .unwrap_or(false);
                if is_floor {
                    map.set_tile(pos, Tile::new(TileType::Trap));
                    break;
                }
            }
        }
    }
}

/// Places one treasure tile in each treasure and boss room.
///
/// The tile goes on a randomly chosen room corner, and only if that corner
/// is still plain floor.
pub fn place_treasure(map: &mut DungeonMap, rooms: &[Room], rng: &mut StdRng) {
    for room in rooms {
        if !matches!(room.role, RoomRole::Treasure | RoomRole::Boss) {
            continue;
        }

        let corners = room.corners();
        let corner = corners[rng.gen_range(0..corners.len())];
        let is_floor = map
            .get_tile(corner)
            .map(|tile| tile.tile_type == TileType::Floor)
            .unwrap_or(false);
        if is_floor {
            map.set_tile(corner, Tile::new(TileType::Treasure));
        }
    }
}

/// Uniformly samples a position inside a room's rectangle.
pub(crate) fn random_position_in(room: &Room, rng: &mut StdRng) -> Position {
    Position::new(
        room.top_left.x + rng.gen_range(0..room.width) as i32,
        room.top_left.y + rng.gen_range(0..room.height) as i32,
    )
}
