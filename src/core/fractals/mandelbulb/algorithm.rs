use crate::core::actions::render_grid::ports::membership_test::MembershipTest;
use crate::core::data::point3::Point3;
use crate::core::fractals::mandelbulb::params::MandelbulbParams;

/// Escape test for the power-`m` Mandelbulb recurrence `v ← v^m + c`.
///
/// `v^m` is taken in spherical form: the radius is raised to `m` and both
/// angles are multiplied by `m`. Returns `false` as soon as the orbit's
/// magnitude exceeds the divergence threshold, `true` if it survives every
/// iteration. With zero iterations every point is bounded.
#[must_use]
pub fn is_bounded(c: Point3, params: &MandelbulbParams) -> bool {
    let power = params.power();
    let threshold = params.divergence_threshold();
    let mut v = c;

    for _ in 0..params.iteration_count() {
        let r = v.length();
        let phi = v.y.atan2(v.x);
        let theta = (v.x * v.x + v.y * v.y).sqrt().atan2(v.z);

        let vr = r.powf(power);
        let vx = (power * theta).sin() * (power * phi).cos();
        let vy = (power * theta).sin() * (power * phi).sin();
        let vz = (power * theta).cos();

        v = Point3::new(vx * vr, vy * vr, vz * vr) + c;

        if v.length() > threshold {
            return false;
        }
    }

    true
}

#[derive(Debug, Clone, Copy)]
pub struct MandelbulbAlgorithm {
    params: MandelbulbParams,
}

impl MandelbulbAlgorithm {
    pub fn new(params: MandelbulbParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &MandelbulbParams {
        &self.params
    }
}

impl MembershipTest for MandelbulbAlgorithm {
    #[inline]
    fn is_member(&self, point: Point3) -> bool {
        is_bounded(point, &self.params)
    }
}
