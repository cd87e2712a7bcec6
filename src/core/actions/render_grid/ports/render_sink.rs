use crate::core::data::point3::Point3;

/// Receives one unit box per accepted lattice point.
pub trait RenderSink {
    fn add_unit_box(&mut self, point: Point3);
}

impl RenderSink for Vec<Point3> {
    fn add_unit_box(&mut self, point: Point3) {
        self.push(point);
    }
}
