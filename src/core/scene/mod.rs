//! Software stand-in for the 3D engine the fractal is displayed with: a set
//! of unit boxes, a free camera and a hemispheric light.

pub mod camera;
pub mod light;
pub mod voxel_scene;
