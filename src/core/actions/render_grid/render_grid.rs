use crate::core::actions::render_grid::ports::membership_test::MembershipTest;
use crate::core::actions::render_grid::ports::render_sink::RenderSink;
use crate::core::data::cubic_grid::CubicGrid;

/// Walks every lattice point of `grid` in linear-index order and hands each
/// accepted point to `sink`. Returns the number of accepted points.
pub fn render_grid<T, S>(grid: CubicGrid, tester: &T, sink: &mut S) -> u64
where
    T: MembershipTest + ?Sized,
    S: RenderSink + ?Sized,
{
    let mut accepted_count = 0;

    for index in 0..grid.len() {
        let point = grid.point_at(index);

        if tester.is_member(point) {
            sink.add_unit_box(point);
            accepted_count += 1;
        }
    }

    accepted_count
}
