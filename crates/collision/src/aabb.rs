//! Axis-aligned bounding boxes.

use glam::Vec3;

/// An axis-aligned box spanning `min..=max` on every axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Build a box from explicit corners.
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Build a box from its center and half-extents.
    pub fn from_center_half_extents(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            min: center - half_extents,
            max: center + half_extents,
        }
    }

    /// Center point of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// The box shifted by `offset`.
    pub fn translated(&self, offset: Vec3) -> Self {
        Self {
            min: self.min + offset,
            max: self.max + offset,
        }
    }

    /// Volumetric overlap test. Touching faces count as an intersection.
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }

    /// Overlap test restricted to the two axes other than `axis`.
    ///
    /// Used by swept movement: a box can only block motion along an axis if
    /// the boxes already overlap on the remaining two.
    pub(crate) fn overlaps_other_axes(&self, other: &Aabb, axis: usize) -> bool {
        for a in 0..3 {
            if a == axis {
                continue;
            }
            if self.min[a] >= other.max[a] || self.max[a] <= other.min[a] {
                return false;
            }
        }
        true
    }
}
