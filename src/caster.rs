//! Wall intersection. Each ray runs two independent grid-line searches,
//! one per axis family, and keeps the nearer crossing that lands on a wall.

use std::f32::consts::{FRAC_PI_2, PI};

use crate::config::{BLOCK_SIZE, MAX_BOUNDARY_CROSSINGS};
use crate::grid::{Grid, Tile};
use crate::math::{distance, wrap_angle};

/// Which set of grid lines a hit landed on. Horizontal and vertical hits
/// shade with different tints, which is the whole of the lighting model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Family {
    Horizontal,
    Vertical,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hit {
    pub point: [f32; 2],
    pub distance: f32,
    pub family: Family,
}

/// Ray direction quadrant, fixed once per cast. Screen-style coordinates:
/// y grows downward, so angles in (0, π) point down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Quadrant {
    DownRight,
    DownLeft,
    UpLeft,
    UpRight,
}

impl Quadrant {
    fn of(angle: f32) -> Self {
        if angle < FRAC_PI_2 {
            Self::DownRight
        } else if angle < PI {
            Self::DownLeft
        } else if angle < 3.0 * FRAC_PI_2 {
            Self::UpLeft
        } else {
            Self::UpRight
        }
    }

    fn points_up(self) -> bool {
        matches!(self, Self::UpLeft | Self::UpRight)
    }

    fn points_left(self) -> bool {
        matches!(self, Self::DownLeft | Self::UpLeft)
    }
}

/// A family whose grid lines run parallel to the ray never crosses them;
/// below this threshold the family is disabled outright rather than letting
/// cot/tan blow up at the asymptote.
const PARALLEL_EPS: f32 = 1e-6;

/// Walk horizontal grid lines (multiples of the tile height) away from the
/// origin until one borders a wall tile. `None` when the ray is parallel to
/// them or the crossing cap runs out.
fn horizontal_search(
    grid: &Grid,
    origin: [f32; 2],
    angle: f32,
    quadrant: Quadrant,
) -> Option<[f32; 2]> {
    let sin = angle.sin();
    if sin.abs() < PARALLEL_EPS {
        return None;
    }
    let cot = angle.cos() / sin;

    let (first_y, step_y) = if quadrant.points_up() {
        ((origin[1] / BLOCK_SIZE).floor() * BLOCK_SIZE, -BLOCK_SIZE)
    } else {
        (
            (origin[1] / BLOCK_SIZE).floor() * BLOCK_SIZE + BLOCK_SIZE,
            BLOCK_SIZE,
        )
    };
    let step_x = cot * step_y;

    let mut point = [origin[0] + cot * (first_y - origin[1]), first_y];
    for _ in 0..MAX_BOUNDARY_CROSSINGS {
        // Clamp the crossing before converting to a tile index; a ray
        // skimming the map edge must not index outside the grid.
        let p = grid.clamp_point(point);
        let col = (p[0] / BLOCK_SIZE) as i32;
        let row = if quadrant.points_up() {
            (p[1] / BLOCK_SIZE) as i32 - 1 // tile above the line
        } else {
            (p[1] / BLOCK_SIZE) as i32 // tile below the line
        };
        if grid.tile_at(row, col) == Tile::Wall {
            return Some(point);
        }
        point[0] += step_x;
        point[1] += step_y;
    }
    None
}

/// Vertical-line counterpart of `horizontal_search`, stepping across tile
/// columns with tan(θ).
fn vertical_search(
    grid: &Grid,
    origin: [f32; 2],
    angle: f32,
    quadrant: Quadrant,
) -> Option<[f32; 2]> {
    let cos = angle.cos();
    if cos.abs() < PARALLEL_EPS {
        return None;
    }
    let tan = angle.sin() / cos;

    let (first_x, step_x) = if quadrant.points_left() {
        ((origin[0] / BLOCK_SIZE).floor() * BLOCK_SIZE, -BLOCK_SIZE)
    } else {
        (
            (origin[0] / BLOCK_SIZE).floor() * BLOCK_SIZE + BLOCK_SIZE,
            BLOCK_SIZE,
        )
    };
    let step_y = tan * step_x;

    let mut point = [first_x, origin[1] + tan * (first_x - origin[0])];
    for _ in 0..MAX_BOUNDARY_CROSSINGS {
        let p = grid.clamp_point(point);
        let row = (p[1] / BLOCK_SIZE) as i32;
        let col = if quadrant.points_left() {
            (p[0] / BLOCK_SIZE) as i32 - 1 // tile left of the line
        } else {
            (p[0] / BLOCK_SIZE) as i32 // tile right of the line
        };
        if grid.tile_at(row, col) == Tile::Wall {
            return Some(point);
        }
        point[0] += step_x;
        point[1] += step_y;
    }
    None
}

/// Cast one ray and return the nearest wall-boundary crossing. `None` means
/// every enabled family exhausted `MAX_BOUNDARY_CROSSINGS` without finding a
/// wall, which an enclosed map rules out; callers render it as a
/// max-distance column. Equal distances resolve to the vertical family.
pub fn cast_ray(grid: &Grid, origin: [f32; 2], angle: f32) -> Option<Hit> {
    let angle = wrap_angle(angle);
    let quadrant = Quadrant::of(angle);

    let horizontal = horizontal_search(grid, origin, angle, quadrant).map(|point| Hit {
        point,
        distance: distance(origin, point),
        family: Family::Horizontal,
    });
    let vertical = vertical_search(grid, origin, angle, quadrant).map(|point| Hit {
        point,
        distance: distance(origin, point),
        family: Family::Vertical,
    });

    match (horizontal, vertical) {
        (Some(h), Some(v)) => Some(if v.distance <= h.distance { v } else { h }),
        (h, None) => h,
        (None, v) => v,
    }
}
