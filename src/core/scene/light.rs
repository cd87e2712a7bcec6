use crate::core::data::colour::Colour;
use crate::core::data::point3::Point3;

/// Sky/ground light: surfaces facing `direction` receive `diffuse`, surfaces
/// facing away receive `ground`, blended by `0.5 * (n . d) + 0.5`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HemisphericLight {
    pub direction: Point3,
    pub diffuse: Colour,
    pub ground: Colour,
}

impl Default for HemisphericLight {
    fn default() -> Self {
        Self {
            direction: Point3::new(0.0, 1.0, 0.0),
            diffuse: Colour::new(255, 255, 255),
            ground: Colour::new(0, 0, 0),
        }
    }
}

impl HemisphericLight {
    #[must_use]
    pub fn shade(&self, normal: Point3, base: Colour) -> Colour {
        let weight = 0.5 * normal.normalize().dot(self.direction.normalize()) + 0.5;
        let light = self.ground.lerp(self.diffuse, weight);

        base.modulate(light)
    }
}
