//!
//! Conversion of relative command arguments to absolute coordinates
//!
//! Each group of a relative command is relative to the end point of the group before it, so the
//! offset moves along as the groups are resolved.
//!

///
/// Makes groups of x, y pairs absolute, starting from the specified point
///
/// The last pair in each group is the end point that the following group is relative to.
///
pub fn points_to_absolute(points: &mut [f64], group_size: usize, start: (f64, f64)) {
    let (mut last_x, mut last_y) = start;

    for group in points.chunks_mut(group_size) {
        for pair in group.chunks_mut(2) {
            pair[0] += last_x;
            pair[1] += last_y;
        }

        last_x = group[group_size-2];
        last_y = group[group_size-1];
    }
}

///
/// Makes a set of single-axis values (as for the H and V commands) absolute
///
pub fn values_to_absolute(values: &mut [f64], start: f64) {
    let mut last = start;

    for value in values.iter_mut() {
        last    += *value;
        *value  = last;
    }
}

///
/// Makes the end points of a set of arc argument groups absolute
///
/// Only the end point of an arc is a coordinate: the radii, rotation and flags are unchanged.
///
pub fn arc_points_to_absolute(arcs: &mut [f64], start: (f64, f64)) {
    let (mut last_x, mut last_y) = start;

    for arc in arcs.chunks_mut(7) {
        arc[5] += last_x;
        arc[6] += last_y;

        last_x = arc[5];
        last_y = arc[6];
    }
}
