use crate::core::data::colour::Colour;
use crate::core::data::pixel_buffer::{PixelBuffer, PixelBufferError};
use crate::core::data::pixel_rect::PixelRect;
use crate::core::data::point3::Point3;
use crate::core::scene::camera::{Camera, ScreenPoint};
use crate::core::scene::light::HemisphericLight;
use crate::core::scene::voxel_scene::VoxelScene;

pub const BACKGROUND: Colour = Colour::new(51, 51, 76);

// Voxel colour ramp from the center of the bulb to its outermost voxel.
const INNER_COLOUR: Colour = Colour::new(20, 40, 140);
const OUTER_COLOUR: Colour = Colour::new(235, 240, 255);

pub(crate) struct CubeFace {
    normal: Point3,
    neighbour: [i64; 3],
    corners: [Point3; 4],
}

const fn p(x: f64, y: f64, z: f64) -> Point3 {
    Point3::new(x, y, z)
}

// Corners of each face listed in perimeter order.
static CUBE_FACES: [CubeFace; 6] = [
    CubeFace {
        normal: p(1.0, 0.0, 0.0),
        neighbour: [1, 0, 0],
        corners: [p(0.5, -0.5, -0.5), p(0.5, 0.5, -0.5), p(0.5, 0.5, 0.5), p(0.5, -0.5, 0.5)],
    },
    CubeFace {
        normal: p(-1.0, 0.0, 0.0),
        neighbour: [-1, 0, 0],
        corners: [p(-0.5, -0.5, -0.5), p(-0.5, -0.5, 0.5), p(-0.5, 0.5, 0.5), p(-0.5, 0.5, -0.5)],
    },
    CubeFace {
        normal: p(0.0, 1.0, 0.0),
        neighbour: [0, 1, 0],
        corners: [p(-0.5, 0.5, -0.5), p(-0.5, 0.5, 0.5), p(0.5, 0.5, 0.5), p(0.5, 0.5, -0.5)],
    },
    CubeFace {
        normal: p(0.0, -1.0, 0.0),
        neighbour: [0, -1, 0],
        corners: [p(-0.5, -0.5, -0.5), p(0.5, -0.5, -0.5), p(0.5, -0.5, 0.5), p(-0.5, -0.5, 0.5)],
    },
    CubeFace {
        normal: p(0.0, 0.0, 1.0),
        neighbour: [0, 0, 1],
        corners: [p(-0.5, -0.5, 0.5), p(0.5, -0.5, 0.5), p(0.5, 0.5, 0.5), p(-0.5, 0.5, 0.5)],
    },
    CubeFace {
        normal: p(0.0, 0.0, -1.0),
        neighbour: [0, 0, -1],
        corners: [p(-0.5, -0.5, -0.5), p(-0.5, 0.5, -0.5), p(0.5, 0.5, -0.5), p(0.5, -0.5, -0.5)],
    },
];

/// Faces that can be seen from `camera`: not shared with a neighbouring
/// voxel and turned towards the camera.
pub(crate) fn visible_faces<'a>(
    scene: &'a VoxelScene,
    camera: &'a Camera,
) -> impl Iterator<Item = (Point3, &'static CubeFace)> + 'a {
    scene.voxels().iter().flat_map(move |&voxel| {
        let key = VoxelScene::key(voxel);

        CUBE_FACES.iter().filter_map(move |face| {
            let neighbour = [
                key[0] + face.neighbour[0],
                key[1] + face.neighbour[1],
                key[2] + face.neighbour[2],
            ];

            if scene.contains(neighbour) {
                return None;
            }

            let centre = voxel + face.normal * 0.5;

            if face.normal.dot(centre - camera.position) >= 0.0 {
                return None;
            }

            Some((voxel, face))
        })
    })
}

/// Colour image plus a per-pixel depth buffer.
struct Framebuffer {
    pixels: PixelBuffer,
    depth: Vec<f64>,
    width: usize,
    height: usize,
}

impl Framebuffer {
    fn new(pixel_rect: PixelRect, background: Colour) -> Result<Self, PixelBufferError> {
        let pixels = PixelBuffer::filled(pixel_rect, background)?;
        let width = pixel_rect.width() as usize;
        let height = pixel_rect.height() as usize;

        Ok(Self {
            pixels,
            depth: vec![f64::INFINITY; width * height],
            width,
            height,
        })
    }

    fn fill_triangle(
        &mut self,
        [a, b, c]: [ScreenPoint; 3],
        colour: Colour,
    ) -> Result<(), PixelBufferError> {
        let area = edge(a, b, c.x, c.y);

        if area.abs() < f64::EPSILON {
            return Ok(());
        }

        let min_x = (a.x.min(b.x).min(c.x).floor() as i64).max(0);
        let max_x = (a.x.max(b.x).max(c.x).ceil() as i64).min(self.width as i64 - 1);
        let min_y = (a.y.min(b.y).min(c.y).floor() as i64).max(0);
        let max_y = (a.y.max(b.y).max(c.y).ceil() as i64).min(self.height as i64 - 1);

        for py in min_y..=max_y {
            for px in min_x..=max_x {
                let x = px as f64 + 0.5;
                let y = py as f64 + 0.5;

                let w0 = edge(b, c, x, y) / area;
                let w1 = edge(c, a, x, y) / area;
                let w2 = edge(a, b, x, y) / area;

                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }

                let depth = w0 * a.depth + w1 * b.depth + w2 * c.depth;
                let index = py as usize * self.width + px as usize;

                if depth < self.depth[index] {
                    self.depth[index] = depth;
                    self.pixels.set_pixel(px as u32, py as u32, colour)?;
                }
            }
        }

        Ok(())
    }
}

fn edge(from: ScreenPoint, to: ScreenPoint, x: f64, y: f64) -> f64 {
    (to.x - from.x) * (y - from.y) - (to.y - from.y) * (x - from.x)
}

fn voxel_colour(voxel: Point3, max_radius: f64) -> Colour {
    if max_radius == 0.0 {
        return INNER_COLOUR;
    }

    INNER_COLOUR.lerp(OUTER_COLOUR, voxel.length() / max_radius)
}

/// Draws every voxel of `scene` as a shaded unit cube seen through `camera`.
///
/// Each visible face is split into two depth-tested triangles and flat shaded
/// by `light`. Faces with a corner behind the near plane are skipped.
pub fn rasterize_scene(
    scene: &VoxelScene,
    camera: &Camera,
    light: &HemisphericLight,
    pixel_rect: PixelRect,
) -> Result<PixelBuffer, PixelBufferError> {
    let width = pixel_rect.width();
    let height = pixel_rect.height();
    let basis = camera.basis();
    let mut framebuffer = Framebuffer::new(pixel_rect, BACKGROUND)?;

    for (voxel, face) in visible_faces(scene, camera) {
        let [Some(a), Some(b), Some(c), Some(d)] = face
            .corners
            .map(|corner| camera.project_with_basis(voxel + corner, basis, width, height))
        else {
            continue;
        };

        let colour = light.shade(face.normal, voxel_colour(voxel, scene.max_radius()));

        framebuffer.fill_triangle([a, b, c], colour)?;
        framebuffer.fill_triangle([a, c, d], colour)?;
    }

    Ok(framebuffer.pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::render_grid::ports::render_sink::RenderSink;

    fn scene_of(points: &[Point3]) -> VoxelScene {
        let mut scene = VoxelScene::new();
        for point in points {
            scene.add_unit_box(*point);
        }
        scene
    }

    #[test]
    fn test_empty_scene_is_background() {
        let pixel_rect = PixelRect::from_size(16, 12).unwrap();

        let buffer = rasterize_scene(
            &VoxelScene::new(),
            &Camera::default(),
            &HemisphericLight::default(),
            pixel_rect,
        )
        .unwrap();

        assert_eq!(buffer.buffer_size(), 16 * 12 * 3);
        assert!(
            buffer
                .buffer()
                .chunks_exact(3)
                .all(|px| px == [BACKGROUND.r, BACKGROUND.g, BACKGROUND.b])
        );
    }

    #[test]
    fn test_single_voxel_covers_centre_only() {
        let scene = scene_of(&[Point3::ZERO]);
        let camera = Camera::new(Point3::new(0.0, 0.0, -5.0), Point3::ZERO);
        let pixel_rect = PixelRect::from_size(64, 48).unwrap();

        let light = HemisphericLight::default();

        let buffer = rasterize_scene(&scene, &camera, &light, pixel_rect).unwrap();

        assert_ne!(buffer.pixel(32, 24).unwrap(), BACKGROUND);
        assert_eq!(buffer.pixel(0, 0).unwrap(), BACKGROUND);
        assert_eq!(buffer.pixel(63, 47).unwrap(), BACKGROUND);
    }

    #[test]
    fn test_front_face_is_half_lit_inner_colour() {
        let scene = scene_of(&[Point3::ZERO]);
        let camera = Camera::new(Point3::new(0.0, 0.0, -5.0), Point3::ZERO);
        let light = HemisphericLight::default();
        let pixel_rect = PixelRect::from_size(64, 48).unwrap();

        let buffer = rasterize_scene(&scene, &camera, &light, pixel_rect).unwrap();

        assert_eq!(
            buffer.pixel(32, 24).unwrap(),
            light.shade(Point3::new(0.0, 0.0, -1.0), INNER_COLOUR)
        );
    }

    #[test]
    fn test_voxel_behind_camera_is_not_drawn() {
        let scene = scene_of(&[Point3::new(0.0, 0.0, -10.0)]);
        let camera = Camera::new(Point3::new(0.0, 0.0, -5.0), Point3::ZERO);
        let pixel_rect = PixelRect::from_size(32, 32).unwrap();

        let light = HemisphericLight::default();

        let buffer = rasterize_scene(&scene, &camera, &light, pixel_rect).unwrap();

        assert!(
            buffer
                .buffer()
                .chunks_exact(3)
                .all(|px| px == [BACKGROUND.r, BACKGROUND.g, BACKGROUND.b])
        );
    }

    #[test]
    fn test_nearer_voxel_wins_depth_test() {
        let near = Point3::new(0.0, 0.0, -2.0);
        let scene = scene_of(&[Point3::new(0.0, 0.0, 4.0), near]);
        let camera = Camera::new(Point3::new(0.0, 0.0, -8.0), Point3::ZERO);
        let light = HemisphericLight::default();
        let pixel_rect = PixelRect::from_size(64, 64).unwrap();

        let buffer = rasterize_scene(&scene, &camera, &light, pixel_rect).unwrap();

        let expected = light.shade(
            Point3::new(0.0, 0.0, -1.0),
            voxel_colour(near, scene.max_radius()),
        );
        assert_eq!(buffer.pixel(32, 32).unwrap(), expected);
    }

    #[test]
    fn test_visible_faces_from_axis_camera() {
        let scene = scene_of(&[Point3::ZERO]);
        let camera = Camera::new(Point3::new(0.0, 0.0, -5.0), Point3::ZERO);

        assert_eq!(visible_faces(&scene, &camera).count(), 1);
    }

    #[test]
    fn test_visible_faces_from_diagonal_camera() {
        let scene = scene_of(&[Point3::ZERO]);

        assert_eq!(visible_faces(&scene, &Camera::default()).count(), 3);
    }

    #[test]
    fn test_shared_faces_are_culled() {
        let scene = scene_of(&[Point3::ZERO, Point3::new(1.0, 0.0, 0.0)]);

        // -X of the second voxel touches the first
        assert_eq!(visible_faces(&scene, &Camera::default()).count(), 5);
    }
}
