use rayon::prelude::*;

use crate::core::actions::cancellation::{
    CANCEL_CHECK_INTERVAL_POINTS, CancelToken, Cancelled, NeverCancel,
};
use crate::core::actions::render_grid::ports::membership_test::MembershipTest;
use crate::core::actions::render_grid::ports::render_sink::RenderSink;
use crate::core::data::cubic_grid::CubicGrid;
use crate::core::data::point3::Point3;

/// Tests lattice points in parallel using rayon's work-stealing scheduler.
///
/// Membership tests run on the rayon pool, but the sink is fed on the calling
/// thread in increasing linear-index order, so it observes exactly the call
/// sequence produced by [`render_grid`](super::render_grid::render_grid).
pub fn render_grid_parallel_rayon<T, S>(grid: CubicGrid, tester: &T, sink: &mut S) -> u64
where
    T: MembershipTest + Sync + ?Sized,
    S: RenderSink + ?Sized,
{
    match render_grid_parallel_rayon_cancelable(grid, tester, sink, &NeverCancel) {
        Ok(accepted_count) => accepted_count,
        Err(Cancelled) => unreachable!("NeverCancel token should never signal cancellation"),
    }
}

/// Like [`render_grid_parallel_rayon`], but polls `cancel` before every chunk
/// of [`CANCEL_CHECK_INTERVAL_POINTS`] points.
///
/// On cancellation the sink is left untouched.
pub fn render_grid_parallel_rayon_cancelable<T, S, C>(
    grid: CubicGrid,
    tester: &T,
    sink: &mut S,
    cancel: &C,
) -> Result<u64, Cancelled>
where
    T: MembershipTest + Sync + ?Sized,
    S: RenderSink + ?Sized,
    C: CancelToken + ?Sized,
{
    let chunk_count = grid.len().div_ceil(CANCEL_CHECK_INTERVAL_POINTS);

    let chunks: Vec<Vec<Point3>> = (0..chunk_count)
        .into_par_iter()
        .map(|chunk| -> Result<Vec<Point3>, Cancelled> {
            if cancel.is_cancelled() {
                return Err(Cancelled);
            }

            let start = chunk * CANCEL_CHECK_INTERVAL_POINTS;
            let end = (start + CANCEL_CHECK_INTERVAL_POINTS).min(grid.len());

            Ok((start..end)
                .map(|index| grid.point_at(index))
                .filter(|point| tester.is_member(*point))
                .collect())
        })
        .collect::<Result<_, Cancelled>>()?;

    let mut accepted_count = 0;

    for point in chunks.into_iter().flatten() {
        sink.add_unit_box(point);
        accepted_count += 1;
    }

    Ok(accepted_count)
}
