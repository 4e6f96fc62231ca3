//! # Interaction Events
//!
//! Named events raised by a successful player move.
//!
//! Events are informational: they describe what the player stepped onto or
//! near, and never mutate the map themselves. Consuming a treasure, resolving
//! a trap, or starting combat is the calling layer's decision.

use crate::{EntityId, Position};
use serde::{Deserialize, Serialize};

/// An event raised after a successful move, derived from the new tile and
/// nearby entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum MoveEvent {
    /// The player stepped onto a trap tile
    TrapTriggered { position: Position },
    /// The player stepped onto a treasure tile
    TreasureFound { position: Position },
    /// The player stepped onto the stairs down
    StairsFound { position: Position },
    /// The player passed through a door or secret door
    DoorPassed { position: Position },
    /// A hostile entity is within combat range; one event per entity
    EnemyNearby { entity_id: EntityId, name: String },
}
