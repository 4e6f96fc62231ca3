//! # Visibility Engine
//!
//! Radius-based fog of war over the tile grid.
//!
//! Two flags drive what the renderer shows: `explored` (ever seen, monotonic)
//! and `visible` (currently in view, recomputed on every player move). A
//! visible tile is always explored; an explored tile out of view stays
//! explored but goes dark.

use crate::{DungeonMap, Position};

impl DungeonMap {
    /// Marks every tile within Euclidean `radius` of `(cx, cy)` as both
    /// explored and visible, clipped to the grid.
    ///
    /// Used once at generation time to reveal the entrance area before the
    /// first move.
    pub fn reveal_area(&mut self, cx: i32, cy: i32, radius: u32) {
        let center = Position::new(cx, cy);
        let r = radius as i32;

        for dy in -r..=r {
            for dx in -r..=r {
                let pos = Position::new(cx + dx, cy + dy);
                if center.euclidean_distance(pos) <= radius as f64 {
                    if let Some(tile) = self.get_tile_mut(pos) {
                        tile.set_visible(true);
                    }
                }
            }
        }
    }

    /// Recomputes visibility for the whole grid from the current player
    /// position.
    ///
    /// Every tile within `view_radius` becomes visible (and therefore
    /// explored); everything else has its `visible` flag cleared while its
    /// exploration state is preserved. Purely a function of the player
    /// position and prior exploration, so calling it twice without moving is
    /// a no-op the second time.
    pub fn update_visibility(&mut self, view_radius: u32) {
        // Clear visibility wholesale without touching exploration state.
        for row in &mut self.tiles {
            for tile in row {
                tile.visible = false;
            }
        }

        let player = self.player_position;
        let r = view_radius as i32;

        for dy in -r..=r {
            for dx in -r..=r {
                let pos = Position::new(player.x + dx, player.y + dy);
                if player.euclidean_distance(pos) <= view_radius as f64 {
                    if let Some(tile) = self.get_tile_mut(pos) {
                        tile.set_visible(true);
                    }
                }
            }
        }
    }
}
