//! The [`Route`] value type and shared path reconstruction.

use std::collections::HashMap;

use tilenav_core::Point;

/// An ordered, non-empty sequence of tiles from start to end inclusive,
/// each consecutive pair mutually adjacent under the passability rule in
/// effect when the route was computed.
///
/// A route is produced once per search and never mutated afterward.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    tiles: Vec<Point>,
}

impl Route {
    pub(crate) fn new(tiles: Vec<Point>) -> Self {
        debug_assert!(tiles.len() >= 2, "a route contains at least one move");
        Self { tiles }
    }

    /// The tiles of the route, start first, end last.
    #[inline]
    pub fn tiles(&self) -> &[Point] {
        &self.tiles
    }

    /// Number of tiles, including both endpoints. Always ≥ 2.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Number of moves, one less than [`len`](Self::len).
    #[inline]
    pub fn steps(&self) -> usize {
        self.tiles.len() - 1
    }

    /// Always false: a route holds at least both endpoints.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// First tile of the route.
    #[inline]
    pub fn start(&self) -> Point {
        self.tiles[0]
    }

    /// Last tile of the route.
    #[inline]
    pub fn end(&self) -> Point {
        self.tiles[self.tiles.len() - 1]
    }

    /// Consume the route, yielding its tiles.
    pub fn into_tiles(self) -> Vec<Point> {
        self.tiles
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}

/// Rebuild the route by walking predecessor links from `end` back to
/// `start`, then reversing.
///
/// `came_from` maps each discovered tile to its predecessor (`None` for
/// the search origin). Every strategy records an entry before enqueueing a
/// tile, so a missing link here means the search state is corrupted.
///
/// # Panics
///
/// Panics on a broken predecessor chain. This is an internal-logic
/// failure, not a recoverable condition.
pub(crate) fn reconstruct_route(
    came_from: &HashMap<Point, Option<Point>>,
    start: Point,
    end: Point,
) -> Route {
    let mut tiles = vec![end];
    let mut current = end;
    while current != start {
        current = match came_from.get(&current) {
            Some(&Some(prev)) => prev,
            _ => panic!("predecessor chain broken at {current}"),
        };
        tiles.push(current);
    }
    tiles.reverse();
    Route::new(tiles)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(points: &[(i32, i32)]) -> HashMap<Point, Option<Point>> {
        let mut came_from = HashMap::new();
        let mut prev: Option<Point> = None;
        for &(x, y) in points {
            let p = Point::new(x, y);
            came_from.insert(p, prev);
            prev = Some(p);
        }
        came_from
    }

    #[test]
    fn reconstruct_walks_back_and_reverses() {
        let came_from = chain(&[(0, 0), (1, 0), (1, 1), (2, 1)]);
        let route = reconstruct_route(&came_from, Point::new(0, 0), Point::new(2, 1));
        assert_eq!(
            route.tiles(),
            &[
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(2, 1)
            ]
        );
        assert_eq!(route.start(), Point::new(0, 0));
        assert_eq!(route.end(), Point::new(2, 1));
        assert_eq!(route.len(), 4);
        assert_eq!(route.steps(), 3);
    }

    #[test]
    #[should_panic(expected = "predecessor chain broken")]
    fn broken_chain_panics() {
        let came_from = chain(&[(1, 0), (2, 0)]);
        // (0, 0) never entered the map, so the walk cannot reach it.
        reconstruct_route(&came_from, Point::new(0, 0), Point::new(2, 0));
    }

    #[test]
    fn route_iterates_in_order() {
        let came_from = chain(&[(0, 0), (0, 1)]);
        let route = reconstruct_route(&came_from, Point::new(0, 0), Point::new(0, 1));
        let collected: Vec<_> = (&route).into_iter().copied().collect();
        assert_eq!(collected, route.clone().into_tiles());
    }
}
