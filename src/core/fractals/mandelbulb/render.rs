use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::render_grid::ports::render_sink::RenderSink;
use crate::core::actions::render_grid::render_grid::render_grid;
use crate::core::actions::render_grid::render_grid_parallel_rayon::{
    render_grid_parallel_rayon, render_grid_parallel_rayon_cancelable,
};
use crate::core::fractals::mandelbulb::algorithm::MandelbulbAlgorithm;
use crate::core::fractals::mandelbulb::params::MandelbulbParams;

/// Adds a unit box to `sink` for every lattice point of the Mandelbulb grid
/// that passes the escape test, in linear-index order.
pub fn render_mandelbulb<S>(params: &MandelbulbParams, sink: &mut S) -> u64
where
    S: RenderSink + ?Sized,
{
    render_grid(params.grid(), &MandelbulbAlgorithm::new(*params), sink)
}

/// Parallel counterpart of [`render_mandelbulb`]; the sink sees the same
/// sequence of points.
pub fn render_mandelbulb_parallel<S>(params: &MandelbulbParams, sink: &mut S) -> u64
where
    S: RenderSink + ?Sized,
{
    render_grid_parallel_rayon(params.grid(), &MandelbulbAlgorithm::new(*params), sink)
}

pub fn render_mandelbulb_parallel_cancelable<S, C>(
    params: &MandelbulbParams,
    sink: &mut S,
    cancel: &C,
) -> Result<u64, Cancelled>
where
    S: RenderSink + ?Sized,
    C: CancelToken + ?Sized,
{
    let algorithm = MandelbulbAlgorithm::new(*params);

    render_grid_parallel_rayon_cancelable(params.grid(), &algorithm, sink, cancel)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::cancellation::NeverCancel;
    use crate::core::data::point3::Point3;
    use crate::core::fractals::mandelbulb::params::DEFAULT_DIVERGENCE_THRESHOLD;

    #[test]
    fn test_reference_configuration_accepts_nineteen_points() {
        let params = MandelbulbParams::new(3, 3, 8.0, DEFAULT_DIVERGENCE_THRESHOLD).unwrap();
        let mut sink: Vec<Point3> = Vec::new();

        let count = render_mandelbulb(&params, &mut sink);

        assert_eq!(count, 19);
        assert_eq!(sink.len(), 19);
        assert!(sink.contains(&Point3::ZERO));
        // the eight corners escape, everything else stays bounded
        for point in &sink {
            let corner = point.x != 0.0 && point.y != 0.0 && point.z != 0.0;
            assert!(!corner, "corner {:?} should have escaped", point);
        }
    }

    #[test]
    fn test_origin_is_index_thirteen_of_reference_grid() {
        let params = MandelbulbParams::new(3, 3, 8.0, DEFAULT_DIVERGENCE_THRESHOLD).unwrap();

        assert_eq!(params.grid().decode(13), Ok(Point3::ZERO));
    }

    #[test]
    fn test_small_threshold_keeps_origin_and_z_axis_cycle() {
        let params = MandelbulbParams::new(3, 3, 8.0, 4.0).unwrap();
        let mut sink: Vec<Point3> = Vec::new();

        let count = render_mandelbulb(&params, &mut sink);

        assert_eq!(count, 2);
        assert_eq!(sink, vec![Point3::new(0.0, 0.0, -1.0), Point3::ZERO]);
    }

    #[test]
    fn test_zero_iterations_accepts_whole_grid() {
        let params = MandelbulbParams::new(6, 0, 8.0, 1.0).unwrap();
        let mut sink: Vec<Point3> = Vec::new();

        assert_eq!(render_mandelbulb(&params, &mut sink), 216);
    }

    #[test]
    fn test_single_point_grid_accepts_origin() {
        for iterations in [0, 1, 3] {
            let params = MandelbulbParams::new(1, iterations, 8.0, 4.0).unwrap();
            let mut sink: Vec<Point3> = Vec::new();

            assert_eq!(render_mandelbulb(&params, &mut sink), 1);
            assert_eq!(sink, vec![Point3::ZERO]);
        }
    }

    #[test]
    fn test_parallel_matches_serial() {
        let params = MandelbulbParams::new(15, 3, 8.0, DEFAULT_DIVERGENCE_THRESHOLD).unwrap();
        let mut serial: Vec<Point3> = Vec::new();
        let mut parallel: Vec<Point3> = Vec::new();

        let serial_count = render_mandelbulb(&params, &mut serial);
        let parallel_count = render_mandelbulb_parallel(&params, &mut parallel);

        assert_eq!(parallel_count, serial_count);
        assert_eq!(parallel, serial);
    }

    #[test]
    fn test_cancelable_completes_with_never_cancel() {
        let params = MandelbulbParams::new(3, 3, 8.0, DEFAULT_DIVERGENCE_THRESHOLD).unwrap();
        let mut sink: Vec<Point3> = Vec::new();

        assert_eq!(render_mandelbulb_parallel_cancelable(&params, &mut sink, &NeverCancel), Ok(19));
    }

    #[test]
    fn test_cancelable_stops_when_cancelled() {
        let params = MandelbulbParams::new(9, 3, 8.0, DEFAULT_DIVERGENCE_THRESHOLD).unwrap();
        let mut sink: Vec<Point3> = Vec::new();
        let cancelled = || true;

        assert_eq!(
            render_mandelbulb_parallel_cancelable(&params, &mut sink, &cancelled),
            Err(Cancelled)
        );
        assert!(sink.is_empty());
    }
}
