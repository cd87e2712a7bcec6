use crate::core::data::point3::Point3;

pub const DEFAULT_CAMERA_POSITION: Point3 = Point3::new(-100.0, -100.0, -100.0);
/// Vertical field of view in radians.
pub const DEFAULT_FOV_Y: f64 = 0.8;
pub const NEAR_PLANE: f64 = 0.1;

/// Highest elevation reachable by [`Camera::orbit`], keeps the view direction
/// away from the up vector.
const MAX_ELEVATION: f64 = 1.5;

/// Projected vertex: pixel coordinates relative to the viewport's top-left
/// corner plus view-space depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

/// Perspective camera looking from `position` towards `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub position: Point3,
    pub target: Point3,
    pub up: Point3,
    pub fov_y: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(DEFAULT_CAMERA_POSITION, Point3::ZERO)
    }
}

impl Camera {
    #[must_use]
    pub fn new(position: Point3, target: Point3) -> Self {
        Self {
            position,
            target,
            up: Point3::new(0.0, 1.0, 0.0),
            fov_y: DEFAULT_FOV_Y,
        }
    }

    /// Orthonormal left-handed `(right, up, forward)` basis of the view.
    #[must_use]
    pub fn basis(&self) -> (Point3, Point3, Point3) {
        let forward = (self.target - self.position).normalize();
        let mut right = self.up.cross(forward).normalize();

        if right == Point3::ZERO {
            // looking straight along the up vector
            right = Point3::new(0.0, 0.0, 1.0).cross(forward).normalize();
        }

        let up = forward.cross(right);

        (right, up, forward)
    }

    /// Projects `point` onto a `width` x `height` viewport. Returns `None` for
    /// points in front of the near plane.
    #[must_use]
    pub fn project(&self, point: Point3, width: u32, height: u32) -> Option<ScreenPoint> {
        let (right, up, forward) = self.basis();
        self.project_with_basis(point, (right, up, forward), width, height)
    }

    pub(crate) fn project_with_basis(
        &self,
        point: Point3,
        (right, up, forward): (Point3, Point3, Point3),
        width: u32,
        height: u32,
    ) -> Option<ScreenPoint> {
        let relative = point - self.position;
        let depth = relative.dot(forward);

        if depth < NEAR_PLANE {
            return None;
        }

        let focal = 1.0 / (self.fov_y * 0.5).tan();
        let aspect = width as f64 / height as f64;
        let ndc_x = relative.dot(right) * focal / (depth * aspect);
        let ndc_y = relative.dot(up) * focal / depth;

        Some(ScreenPoint {
            x: (ndc_x + 1.0) * 0.5 * width as f64,
            y: (1.0 - ndc_y) * 0.5 * height as f64,
            depth,
        })
    }

    /// Rotates the camera around its target by `yaw` (about the up axis) and
    /// `pitch` (towards the up axis), keeping its distance.
    pub fn orbit(&mut self, yaw: f64, pitch: f64) {
        let offset = self.position - self.target;
        let distance = offset.length();

        if distance == 0.0 {
            return;
        }

        let azimuth = offset.z.atan2(offset.x) + yaw;
        let elevation = ((offset.y / distance).clamp(-1.0, 1.0).asin() + pitch)
            .clamp(-MAX_ELEVATION, MAX_ELEVATION);

        self.position = self.target
            + Point3::new(
                distance * elevation.cos() * azimuth.cos(),
                distance * elevation.sin(),
                distance * elevation.cos() * azimuth.sin(),
            );
    }

    /// Moves the camera along the view direction, never closer than one unit
    /// to the target.
    pub fn zoom(&mut self, factor: f64) {
        let offset = self.position - self.target;
        let distance = offset.length();

        if distance == 0.0 || factor <= 0.0 {
            return;
        }

        let new_distance = (distance * factor).max(1.0);
        self.position = self.target + offset * (new_distance / distance);
    }
}
