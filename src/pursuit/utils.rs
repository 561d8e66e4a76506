use crate::pursuit::types::Position;

#[must_use]
pub const fn chebyshev_distance(a: Position, b: Position) -> usize {
    let di = a.i.abs_diff(b.i);
    let dj = a.j.abs_diff(b.j);
    if di > dj {
        di
    } else {
        dj
    }
}
