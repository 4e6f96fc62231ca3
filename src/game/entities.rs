//! # Entity Model
//!
//! Mobile actors placed on the dungeon grid.
//!
//! Entities are plain serializable records. Combat resolution, defeat, and
//! loot are the calling layer's responsibility; this crate only places
//! entities during generation and reports their proximity during movement.

use crate::{new_entity_id, EntityId, Position};
use serde::{Deserialize, Serialize};

/// The kind of actor an entity represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Player,
    Ally,
    Enemy,
    Npc,
    Boss,
}

impl EntityKind {
    /// Whether this kind of entity triggers combat-imminent proximity events.
    pub fn is_hostile(self) -> bool {
        matches!(self, EntityKind::Enemy | EntityKind::Boss)
    }
}

/// A mobile actor on the grid.
///
/// # Examples
///
/// ```
/// use delve::{Entity, Position};
///
/// let goblin = Entity::enemy("Goblin".to_string(), Position::new(4, 7), 18, 25);
/// assert!(goblin.kind.is_hostile());
/// assert_eq!(goblin.hp, Some(18));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Unique within the map
    pub id: EntityId,
    /// What kind of actor this is
    pub kind: EntityKind,
    /// Display name
    pub name: String,
    /// Current grid position
    pub position: Position,
    /// Current hit points, when the entity participates in combat
    pub hp: Option<u32>,
    /// Maximum hit points
    pub max_hp: Option<u32>,
}

impl Entity {
    /// Creates an entity with a fresh unique id.
    pub fn new(kind: EntityKind, name: String, position: Position) -> Self {
        Self {
            id: new_entity_id(),
            kind,
            name,
            position,
            hp: None,
            max_hp: None,
        }
    }

    /// Creates a regular enemy with combat stats.
    pub fn enemy(name: String, position: Position, hp: u32, max_hp: u32) -> Self {
        Self {
            hp: Some(hp),
            max_hp: Some(max_hp),
            ..Self::new(EntityKind::Enemy, name, position)
        }
    }

    /// Creates a boss with combat stats.
    pub fn boss(name: String, position: Position, hp: u32, max_hp: u32) -> Self {
        Self {
            hp: Some(hp),
            max_hp: Some(max_hp),
            ..Self::new(EntityKind::Boss, name, position)
        }
    }
}
