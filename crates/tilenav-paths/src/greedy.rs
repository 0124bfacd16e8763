use std::collections::HashMap;

use tilenav_core::{Board, Point};

use crate::distance::manhattan;
use crate::frontier::Frontier;
use crate::route::reconstruct_route;
use crate::search::{PathSearch, viable_request};
use crate::Route;

/// Greedy best-first search.
///
/// The frontier is ordered by Manhattan distance to the end tile alone —
/// no accumulated cost — so the search rushes toward the goal and may
/// commit to suboptimal routes. Each tile enters the frontier at most once
/// (the predecessor map is the visited set), which guarantees termination
/// on a finite board.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyBestFirst;

impl PathSearch for GreedyBestFirst {
    fn try_find_path(&self, board: &Board, start: Point, end: Point) -> Option<Route> {
        if !viable_request(board, start, end) {
            return None;
        }

        let mut came_from: HashMap<Point, Option<Point>> = HashMap::new();
        came_from.insert(start, None);

        let mut frontier: Frontier<i32> = Frontier::new();
        frontier.push(start, manhattan(start, end));

        let mut nbuf = Vec::with_capacity(8);

        while let Some(current) = frontier.pop() {
            if current == end {
                return Some(reconstruct_route(&came_from, start, end));
            }

            board.passable_neighbors_into(current, &mut nbuf);
            for &next in &nbuf {
                if came_from.contains_key(&next) {
                    continue;
                }
                came_from.insert(next, Some(current));
                frontier.push(next, manhattan(next, end));
            }
        }

        None
    }
}
