//! Compile-time configuration. Nothing here is runtime-tunable.

/// Tile grid dimensions.
pub const GRID_WIDTH: usize = 8;
pub const GRID_HEIGHT: usize = 8;

/// World-unit size of one square tile.
pub const BLOCK_SIZE: f32 = 64.0;

/// Logical render target, presented scaled to the window.
pub const BUFFER_WIDTH: usize = 512;
pub const BUFFER_HEIGHT: usize = 512;

/// One ray per column; the fan spans ~1.27 rad centered on the facing angle.
pub const NUM_COLUMNS: usize = 64;
pub const ANGLE_STEP: f32 = 0.02;
pub const HALF_FOV: f32 = NUM_COLUMNS as f32 * ANGLE_STEP * 0.5;

/// Horizontal pixels per column strip.
pub const STRIP_WIDTH: usize = BUFFER_WIDTH / NUM_COLUMNS;

/// Column shading: the strip is divided into vertical units of
/// `SHADE_CELL` pixels, and a hit `SHADE_SCALE` world units closer gains
/// one unit of wall height.
pub const SHADE_CELL: usize = 8;
pub const TOTAL_SHADE_UNITS: i32 = (BUFFER_HEIGHT / SHADE_CELL) as i32;
pub const SHADE_SCALE: f32 = 12.0;

/// Upper bound on grid-line crossings per axis family. Termination inside
/// this cap holds only for a fully enclosed map, which `Grid::new` verifies.
pub const MAX_BOUNDARY_CROSSINGS: usize = 8;

/// Per-frame movement rates (intents are sampled once per frame).
pub const TURN_RATE: f32 = 0.03;
pub const MOVE_SPEED: f32 = 1.5;

/// Starting pose, in world units / radians.
pub const PLAYER_START: [f32; 2] = [188.8, 235.2];
pub const PLAYER_START_ANGLE: f32 = 5.755;

/// Test map: solid border, an obstacle at row 2 col 5, and a wall spur
/// across row 5. Row-major, 0 = empty, 1 = wall.
#[rustfmt::skip]
pub const TEST_LAYOUT: [u8; GRID_WIDTH * GRID_HEIGHT] = [
    1, 1, 1, 1, 1, 1, 1, 1,
    1, 0, 0, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 0, 1, 0, 1,
    1, 0, 0, 0, 0, 0, 0, 1,
    1, 0, 0, 0, 0, 0, 0, 1,
    1, 1, 1, 1, 0, 0, 0, 1,
    1, 0, 0, 0, 0, 0, 0, 1,
    1, 1, 1, 1, 1, 1, 1, 1,
];
