use std::collections::HashSet;

use crate::core::actions::render_grid::ports::render_sink::RenderSink;
use crate::core::data::point3::Point3;

pub type VoxelKey = [i64; 3];

/// Unit boxes centered on lattice points, in insertion order.
#[derive(Debug, Default, Clone)]
pub struct VoxelScene {
    voxels: Vec<Point3>,
    occupied: HashSet<VoxelKey>,
    max_radius: f64,
}

impl VoxelScene {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn voxels(&self) -> &[Point3] {
        &self.voxels
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.voxels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.voxels.is_empty()
    }

    #[must_use]
    pub fn contains(&self, key: VoxelKey) -> bool {
        self.occupied.contains(&key)
    }

    /// Distance from the origin to the farthest voxel center.
    #[must_use]
    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    #[must_use]
    pub fn key(point: Point3) -> VoxelKey {
        [point.x.round() as i64, point.y.round() as i64, point.z.round() as i64]
    }
}

impl RenderSink for VoxelScene {
    fn add_unit_box(&mut self, point: Point3) {
        self.occupied.insert(Self::key(point));
        self.max_radius = self.max_radius.max(point.length());
        self.voxels.push(point);
    }
}
