use tilenav_core::Point;

/// Manhattan (L1) distance between two tiles.
///
/// The heuristic shared by the greedy and A* strategies. Admissible for
/// four-connected movement; with diagonal movement enabled it can
/// overestimate, since a diagonal step costs the same as an orthogonal one.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// Chebyshev (L∞) distance between two tiles.
///
/// A lower bound on the step count when diagonal movement is enabled.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}
