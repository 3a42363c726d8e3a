//! The static collision world: bounded ground plane plus obstacle boxes.

use glam::Vec3;

use crate::aabb::Aabb;

/// Immutable collision geometry for a session.
///
/// A square field of `half_extent` world units in each direction from the
/// origin, a ground plane at `ground_y`, and any number of solid boxes.
#[derive(Debug, Clone)]
pub struct StaticWorld {
    half_extent: f32,
    ground_y: f32,
    obstacles: Vec<Aabb>,
}

impl StaticWorld {
    /// Create a flat field with the given half-extent and no obstacles.
    pub fn new(half_extent: f32) -> Self {
        Self {
            half_extent,
            ground_y: 0.0,
            obstacles: Vec::new(),
        }
    }

    /// Add a solid box to the world.
    pub fn add_obstacle(&mut self, obstacle: Aabb) {
        self.obstacles.push(obstacle);
    }

    /// Half-extent of the playable square.
    pub fn half_extent(&self) -> f32 {
        self.half_extent
    }

    /// Height of the ground plane.
    pub fn ground_y(&self) -> f32 {
        self.ground_y
    }

    /// Height of a point above the ground plane.
    ///
    /// This is the whole ground-contact query: a height-threshold proxy for a
    /// real contact test. It assumes one flat plane and cannot report footing
    /// on elevated geometry; swap this query out before adding platforms.
    pub fn height_above_ground(&self, position: Vec3) -> f32 {
        position.y - self.ground_y
    }

    /// Move a box by `displacement`, clipping against obstacles, the field
    /// boundary, and the ground plane. Returns the displacement actually
    /// travelled, axis-resolved in x, z, y order.
    pub fn move_with_collision(&self, bounds: Aabb, displacement: Vec3) -> Vec3 {
        let mut current = bounds;
        let mut resolved = Vec3::ZERO;
        for axis in [0usize, 2, 1] {
            let step = self.clip_axis(&current, axis, displacement[axis]);
            let mut offset = Vec3::ZERO;
            offset[axis] = step;
            current = current.translated(offset);
            resolved[axis] = step;
        }
        resolved
    }

    /// Largest movement along one axis that keeps `bounds` out of every
    /// obstacle and inside the field.
    fn clip_axis(&self, bounds: &Aabb, axis: usize, delta: f32) -> f32 {
        if delta == 0.0 {
            return 0.0;
        }
        let mut allowed = delta;
        for obstacle in &self.obstacles {
            if !bounds.overlaps_other_axes(obstacle, axis) {
                continue;
            }
            if delta > 0.0 {
                let gap = obstacle.min[axis] - bounds.max[axis];
                if gap >= 0.0 {
                    allowed = allowed.min(gap);
                }
            } else {
                let gap = obstacle.max[axis] - bounds.min[axis];
                if gap <= 0.0 {
                    allowed = allowed.max(gap);
                }
            }
        }
        // Field boundary on x/z, ground plane on y. No ceiling.
        match axis {
            1 => {
                let floor_gap = self.ground_y - bounds.min[axis];
                allowed = allowed.max(floor_gap.min(0.0));
            }
            _ => {
                if allowed > 0.0 {
                    allowed = allowed.min(self.half_extent - bounds.max[axis]);
                    allowed = allowed.max(0.0);
                } else {
                    allowed = allowed.max(-self.half_extent - bounds.min[axis]);
                    allowed = allowed.min(0.0);
                }
            }
        }
        allowed
    }
}
