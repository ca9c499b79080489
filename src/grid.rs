use anyhow::{Result, ensure};

use crate::config::{BLOCK_SIZE, GRID_HEIGHT, GRID_WIDTH};
use crate::math::distance;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Wall,
}

/// Static tile map, shared read-only by every cast. Row-major, addressed
/// `row * GRID_WIDTH + col`.
pub struct Grid {
    tiles: [u8; GRID_WIDTH * GRID_HEIGHT],
}

impl Grid {
    /// Build a grid, verifying the outer border is solid wall. The caster's
    /// step cap only guarantees termination inside a fully enclosed map, so
    /// an open border is rejected before any ray is cast.
    pub fn new(tiles: [u8; GRID_WIDTH * GRID_HEIGHT]) -> Result<Self> {
        for row in 0..GRID_HEIGHT {
            for col in 0..GRID_WIDTH {
                let border =
                    row == 0 || row == GRID_HEIGHT - 1 || col == 0 || col == GRID_WIDTH - 1;
                ensure!(
                    !border || tiles[row * GRID_WIDTH + col] != 0,
                    "grid border open at row {row}, col {col}"
                );
            }
        }
        Ok(Self { tiles })
    }

    /// Tile lookup with both indices clamped into range. Out-of-range
    /// queries resolve to the nearest border tile instead of reading
    /// outside the map.
    #[inline]
    pub fn tile_at(&self, row: i32, col: i32) -> Tile {
        let row = row.clamp(0, GRID_HEIGHT as i32 - 1) as usize;
        let col = col.clamp(0, GRID_WIDTH as i32 - 1) as usize;
        if self.tiles[row * GRID_WIDTH + col] == 0 {
            Tile::Empty
        } else {
            Tile::Wall
        }
    }

    #[inline]
    pub fn world_width(&self) -> f32 {
        GRID_WIDTH as f32 * BLOCK_SIZE
    }

    #[inline]
    pub fn world_height(&self) -> f32 {
        GRID_HEIGHT as f32 * BLOCK_SIZE
    }

    /// Clamp a world-space point into the grid's bounds.
    #[inline]
    pub fn clamp_point(&self, p: [f32; 2]) -> [f32; 2] {
        [
            p[0].clamp(0.0, self.world_width()),
            p[1].clamp(0.0, self.world_height()),
        ]
    }

    /// Longest possible sight line: interior corner to interior corner, one
    /// block in from the solid border.
    pub fn max_sight(&self) -> f32 {
        distance(
            [BLOCK_SIZE, BLOCK_SIZE],
            [
                self.world_width() - BLOCK_SIZE,
                self.world_height() - BLOCK_SIZE,
            ],
        )
    }
}
