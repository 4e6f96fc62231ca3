//! # Entity Population
//!
//! Enemy and boss spawning driven by room roles and the density config.
//!
//! Spawn rules: the entrance room stays empty, treasure rooms stay empty,
//! the boss room gets exactly one boss at its center, and every other room
//! rolls against `enemy_density` for a pack of 1-3 enemies. Regular spawns
//! avoid the exact room center, which is reserved for player traversal.

use crate::{features, DungeonMap, Entity, GenerationConfig, Room, RoomRole};
use rand::{rngs::StdRng, Rng};

/// Name pool for regular enemy spawns.
pub const ENEMY_NAMES: &[&str] = &[
    "Goblin",
    "Skeleton",
    "Giant Rat",
    "Kobold",
    "Zombie",
    "Cave Spider",
    "Bandit",
    "Gelatinous Ooze",
];

/// Name pool for boss spawns.
pub const BOSS_NAMES: &[&str] = &[
    "Gravelord Morrak",
    "The Pale Widow",
    "Ashen King",
    "Vexargh the Unbound",
];

/// Attempts when sampling a spawn position before giving up on one enemy.
const SPAWN_SAMPLE_ATTEMPTS: u32 = 8;

/// Spawns enemies and the boss onto the map according to room roles.
pub fn populate_entities(
    map: &mut DungeonMap,
    rooms: &[Room],
    config: &GenerationConfig,
    rng: &mut StdRng,
) {
    for room in rooms {
        match room.role {
            RoomRole::Entrance | RoomRole::Treasure => {}
            RoomRole::Boss => spawn_boss(map, room, rng),
            RoomRole::Standard | RoomRole::Exit => {
                if rng.gen_bool(config.enemy_density) {
                    spawn_enemy_pack(map, room, rng);
                }
            }
        }
    }
}

/// Places exactly one boss at the room center.
fn spawn_boss(map: &mut DungeonMap, room: &Room, rng: &mut StdRng) {
    let name = BOSS_NAMES[rng.gen_range(0..BOSS_NAMES.len())].to_string();
    let hp = rng.gen_range(50..=80);
    map.entities.push(Entity::boss(name, room.center(), hp, 80));
}

/// Places 1-3 enemies at random in-room positions, never on the center.
fn spawn_enemy_pack(map: &mut DungeonMap, room: &Room, rng: &mut StdRng) {
    let pack_size = rng.gen_range(1..=3);
    let center = room.center();

    for _ in 0..pack_size {
        for _ in 0..SPAWN_SAMPLE_ATTEMPTS {
            let pos = features::random_position_in(room, rng);
            if pos == center {
                continue;
            }
            let name = ENEMY_NAMES[rng.gen_range(0..ENEMY_NAMES.len())].to_string();
            let hp = rng.gen_range(10..=25);
            map.entities.push(Entity::enemy(name, pos, hp, 25));
            break;
        }
    }
}
