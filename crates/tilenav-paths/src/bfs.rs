use std::collections::{HashMap, VecDeque};

use tilenav_core::{Board, Point};

use crate::route::reconstruct_route;
use crate::search::{PathSearch, viable_request};
use crate::Route;

/// Breadth-first search.
///
/// FIFO frontier, no cost bookkeeping; the predecessor map doubles as the
/// visited set, so each reachable tile is expanded at most once. Returns
/// the first path whose frontier order reaches the end tile.
#[derive(Clone, Copy, Debug, Default)]
pub struct BreadthFirst;

impl PathSearch for BreadthFirst {
    fn try_find_path(&self, board: &Board, start: Point, end: Point) -> Option<Route> {
        if !viable_request(board, start, end) {
            return None;
        }

        let mut came_from: HashMap<Point, Option<Point>> = HashMap::new();
        came_from.insert(start, None);

        let mut queue: VecDeque<Point> = VecDeque::new();
        queue.push_back(start);

        let mut nbuf = Vec::with_capacity(8);

        while let Some(current) = queue.pop_front() {
            if current == end {
                return Some(reconstruct_route(&came_from, start, end));
            }

            board.passable_neighbors_into(current, &mut nbuf);
            for &next in &nbuf {
                if came_from.contains_key(&next) {
                    continue;
                }
                came_from.insert(next, Some(current));
                queue.push_back(next);
            }
        }

        None
    }
}
