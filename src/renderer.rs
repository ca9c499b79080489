use crate::caster::cast_ray;
use crate::config::{
    ANGLE_STEP, HALF_FOV, MOVE_SPEED, NUM_COLUMNS, PLAYER_START, PLAYER_START_ANGLE, TURN_RATE,
};
use crate::framebuffer::Framebuffer;
use crate::grid::Grid;
use crate::math::{normalize, wrap_angle};
use crate::shade::shade_column;

/// Per-frame movement requests sampled by the platform layer. All four are
/// independent; turns apply before translation.
#[derive(Clone, Copy, Debug, Default)]
pub struct Intents {
    pub turn_left: bool,
    pub turn_right: bool,
    pub move_forward: bool,
    pub move_backward: bool,
}

pub struct PlayerPose {
    /// Position in continuous world units.
    pub pos: [f32; 2],
    /// Facing angle in radians, kept wrapped to [0, 2π).
    pub angle: f32,
}

/// All render state in one owned value: the map, the player, the target
/// buffer, and the precomputed sight limit. The caster and shader are pure
/// functions over pieces of this.
pub struct Renderer {
    grid: Grid,
    pose: PlayerPose,
    fb: Framebuffer,
    max_sight: f32,
}

impl Renderer {
    pub fn new(grid: Grid) -> Self {
        let max_sight = grid.max_sight();
        Self {
            grid,
            pose: PlayerPose {
                pos: PLAYER_START,
                angle: PLAYER_START_ANGLE,
            },
            fb: Framebuffer::new(),
            max_sight,
        }
    }

    pub fn pose(&self) -> &PlayerPose {
        &self.pose
    }

    pub fn framebuffer(&self) -> &Framebuffer {
        &self.fb
    }

    /// Integrate one frame of intents: turns first, wrapped after each,
    /// then translation along the normalized facing vector.
    pub fn apply_intents(&mut self, intents: Intents) {
        if intents.turn_left {
            self.pose.angle = wrap_angle(self.pose.angle - TURN_RATE);
        }
        if intents.turn_right {
            self.pose.angle = wrap_angle(self.pose.angle + TURN_RATE);
        }
        if intents.move_forward || intents.move_backward {
            let facing = normalize([self.pose.angle.cos(), self.pose.angle.sin()]);
            if intents.move_forward {
                self.pose.pos[0] += facing[0] * MOVE_SPEED;
                self.pose.pos[1] += facing[1] * MOVE_SPEED;
            }
            if intents.move_backward {
                self.pose.pos[0] -= facing[0] * MOVE_SPEED;
                self.pose.pos[1] -= facing[1] * MOVE_SPEED;
            }
        }
    }

    /// Render one frame: clear, then one ray per column across the field of
    /// view, left to right.
    pub fn render_frame(&mut self) {
        self.fb.clear();
        for column in 0..NUM_COLUMNS {
            let offset = column as f32 * ANGLE_STEP - HALF_FOV;
            let cast = cast_ray(&self.grid, self.pose.pos, self.pose.angle + offset);
            shade_column(&mut self.fb, column, cast.as_ref(), self.max_sight);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BUFFER_HEIGHT, STRIP_WIDTH, TEST_LAYOUT};

    fn renderer() -> Renderer {
        Renderer::new(Grid::new(TEST_LAYOUT).unwrap())
    }

    #[test]
    fn turn_left_accumulates_the_fixed_rate() {
        let mut r = renderer();
        let initial = r.pose().angle;
        let n = 200;
        for _ in 0..n {
            r.apply_intents(Intents {
                turn_left: true,
                ..Default::default()
            });
        }
        let expected = wrap_angle(initial - n as f32 * TURN_RATE);
        assert!(
            (r.pose().angle - expected).abs() < 1e-3,
            "angle {} expected {expected}",
            r.pose().angle
        );
    }

    #[test]
    fn angle_stays_wrapped_under_sustained_turning() {
        let mut r = renderer();
        for _ in 0..1000 {
            r.apply_intents(Intents {
                turn_right: true,
                ..Default::default()
            });
            let a = r.pose().angle;
            assert!((0.0..std::f32::consts::TAU).contains(&a), "angle {a}");
        }
    }

    #[test]
    fn forward_moves_along_the_facing_vector() {
        let mut r = renderer();
        let before = r.pose().pos;
        let angle = r.pose().angle;
        r.apply_intents(Intents {
            move_forward: true,
            ..Default::default()
        });
        let after = r.pose().pos;
        assert!((after[0] - (before[0] + angle.cos() * MOVE_SPEED)).abs() < 1e-4);
        assert!((after[1] - (before[1] + angle.sin() * MOVE_SPEED)).abs() < 1e-4);
    }

    #[test]
    fn backward_cancels_forward() {
        let mut r = renderer();
        let before = r.pose().pos;
        r.apply_intents(Intents {
            move_forward: true,
            move_backward: true,
            ..Default::default()
        });
        let after = r.pose().pos;
        assert!((after[0] - before[0]).abs() < 1e-4);
        assert!((after[1] - before[1]).abs() < 1e-4);
    }

    #[test]
    fn no_intents_leave_the_pose_alone() {
        let mut r = renderer();
        let pos = r.pose().pos;
        let angle = r.pose().angle;
        r.apply_intents(Intents::default());
        assert_eq!(r.pose().pos, pos);
        assert_eq!(r.pose().angle, angle);
    }

    #[test]
    fn render_frame_repopulates_every_column() {
        let mut r = renderer();
        r.render_frame();
        let fb = r.framebuffer();
        for column in 0..NUM_COLUMNS {
            let x = column * STRIP_WIDTH;
            assert_ne!(fb.pixel(x, 0), 0, "column {column} top unpainted");
            assert_ne!(
                fb.pixel(x, BUFFER_HEIGHT - 1),
                0,
                "column {column} bottom unpainted"
            );
        }
    }

    #[test]
    fn render_frame_overwrites_the_previous_frame() {
        let mut r = renderer();
        r.render_frame();
        let first = r.framebuffer().as_slice().to_vec();
        // A quarter turn changes what every column sees.
        for _ in 0..50 {
            r.apply_intents(Intents {
                turn_right: true,
                ..Default::default()
            });
        }
        r.render_frame();
        assert_ne!(first, r.framebuffer().as_slice());
    }
}
