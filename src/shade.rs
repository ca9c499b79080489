//! Column shading: a hit distance becomes three vertical bands, sky over a
//! centered wall strip over floor, at 8-pixel cell granularity.

use crate::caster::{Family, Hit};
use crate::config::{SHADE_CELL, SHADE_SCALE, STRIP_WIDTH, TOTAL_SHADE_UNITS};
use crate::framebuffer::{Framebuffer, pack_rgb};

const SKY: u32 = pack_rgb(170, 210, 250);
const FLOOR: u32 = pack_rgb(171, 126, 78);
const WALL_HORIZONTAL: u32 = pack_rgb(196, 64, 64);
const WALL_VERTICAL: u32 = pack_rgb(64, 168, 64);

/// Wall-strip height in shading units for a hit at distance `d`. Closer
/// walls produce taller strips; the sight limit produces none.
fn units_hit(d: f32, max_sight: f32) -> i32 {
    (((max_sight - d) / SHADE_SCALE) as i32).clamp(0, TOTAL_SHADE_UNITS)
}

/// Paint one column of the frame. A `None` cast shades as a max-distance
/// column: zero-height wall, sky and floor only.
pub fn shade_column(fb: &mut Framebuffer, column: usize, cast: Option<&Hit>, max_sight: f32) {
    let dist = cast.map_or(max_sight, |hit| hit.distance);
    let tint = match cast.map(|hit| hit.family) {
        Some(Family::Horizontal) => WALL_HORIZONTAL,
        Some(Family::Vertical) | None => WALL_VERTICAL,
    };

    let wall = units_hit(dist, max_sight);
    let lead = (TOTAL_SHADE_UNITS - wall) / 2;
    let px = |units: i32| units as usize * SHADE_CELL;

    let x = column * STRIP_WIDTH;
    fb.fill_rect(x, 0, STRIP_WIDTH, px(lead), SKY);
    fb.fill_rect(x, px(lead), STRIP_WIDTH, px(wall), tint);
    let below = px(lead + wall);
    fb.fill_rect(x, below, STRIP_WIDTH, fb.height() - below, FLOOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BUFFER_HEIGHT, NUM_COLUMNS};

    const MAX_SIGHT: f32 = 543.06;

    #[test]
    fn units_hit_is_non_increasing_with_distance() {
        let mut prev = units_hit(0.0, MAX_SIGHT);
        let mut d = 0.0;
        while d <= MAX_SIGHT {
            let u = units_hit(d, MAX_SIGHT);
            assert!(u <= prev, "units grew from {prev} to {u} at distance {d}");
            assert!(u >= 0);
            prev = u;
            d += 7.3;
        }
        assert_eq!(units_hit(MAX_SIGHT, MAX_SIGHT), 0);
    }

    #[test]
    fn units_hit_clamps_beyond_the_sight_limit() {
        assert_eq!(units_hit(MAX_SIGHT + 100.0, MAX_SIGHT), 0);
        assert!(units_hit(0.0, MAX_SIGHT) <= TOTAL_SHADE_UNITS);
    }

    #[test]
    fn near_hit_paints_sky_wall_floor_bands() {
        let mut fb = Framebuffer::new();
        let hit = Hit {
            point: [0.0, 0.0],
            distance: 100.0,
            family: Family::Horizontal,
        };
        shade_column(&mut fb, 3, Some(&hit), MAX_SIGHT);
        let x = 3 * STRIP_WIDTH;
        assert_eq!(fb.pixel(x, 0), SKY);
        assert_eq!(fb.pixel(x, BUFFER_HEIGHT / 2), WALL_HORIZONTAL);
        assert_eq!(fb.pixel(x, BUFFER_HEIGHT - 1), FLOOR);
    }

    #[test]
    fn wall_tint_follows_hit_family() {
        let mut fb = Framebuffer::new();
        let hit = Hit {
            point: [0.0, 0.0],
            distance: 200.0,
            family: Family::Horizontal,
        };
        shade_column(&mut fb, 0, Some(&hit), MAX_SIGHT);
        assert_eq!(fb.pixel(0, BUFFER_HEIGHT / 2), WALL_HORIZONTAL);

        let hit = Hit {
            family: Family::Vertical,
            ..hit
        };
        shade_column(&mut fb, 1, Some(&hit), MAX_SIGHT);
        assert_eq!(fb.pixel(STRIP_WIDTH, BUFFER_HEIGHT / 2), WALL_VERTICAL);
    }

    #[test]
    fn miss_shades_a_wall_less_column() {
        let mut fb = Framebuffer::new();
        shade_column(&mut fb, 0, None, MAX_SIGHT);
        assert_eq!(fb.pixel(0, 0), SKY);
        assert_eq!(fb.pixel(0, BUFFER_HEIGHT / 2 - 1), SKY);
        assert_eq!(fb.pixel(0, BUFFER_HEIGHT / 2), FLOOR);
        assert_eq!(fb.pixel(0, BUFFER_HEIGHT - 1), FLOOR);
    }

    #[test]
    fn last_column_stays_inside_the_buffer() {
        let mut fb = Framebuffer::new();
        let hit = Hit {
            point: [0.0, 0.0],
            distance: 10.0,
            family: Family::Vertical,
        };
        shade_column(&mut fb, NUM_COLUMNS - 1, Some(&hit), MAX_SIGHT);
        let x = (NUM_COLUMNS - 1) * STRIP_WIDTH;
        assert_ne!(fb.pixel(x, 0), 0);
        assert_ne!(fb.pixel(x + STRIP_WIDTH - 1, BUFFER_HEIGHT - 1), 0);
    }
}
