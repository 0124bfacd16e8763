use std::collections::{HashMap, HashSet};

use tilenav_core::{Board, Point};

use crate::distance::manhattan;
use crate::frontier::Frontier;
use crate::route::reconstruct_route;
use crate::search::{PathSearch, viable_request};
use crate::Route;

/// A* search.
///
/// The frontier is ordered by `f = g + h` with ties broken by ascending
/// `h`, where `g` is the accumulated step count and `h` the Manhattan
/// distance to the end tile. A cheaper path found to a still-open tile
/// updates its cost and predecessor; the stale frontier entry is skipped
/// when popped. A tile is expanded at most once.
///
/// Guarantees a shortest path for four-connected movement, where the
/// Manhattan heuristic never overestimates. With diagonal movement
/// enabled the heuristic can overestimate (a diagonal step costs 1 but
/// shortens both axes), so the shortest-path guarantee does not hold
/// there.
#[derive(Clone, Copy, Debug, Default)]
pub struct AStar;

impl PathSearch for AStar {
    fn try_find_path(&self, board: &Board, start: Point, end: Point) -> Option<Route> {
        if !viable_request(board, start, end) {
            return None;
        }

        let mut came_from: HashMap<Point, Option<Point>> = HashMap::new();
        came_from.insert(start, None);

        let mut g_cost: HashMap<Point, i32> = HashMap::new();
        g_cost.insert(start, 0);

        let mut closed: HashSet<Point> = HashSet::new();

        let mut frontier: Frontier<(i32, i32)> = Frontier::new();
        let h0 = manhattan(start, end);
        frontier.push(start, (h0, h0));

        let mut nbuf = Vec::with_capacity(8);

        while let Some(current) = frontier.pop() {
            // A tile re-pushed with a better cost leaves its old frontier
            // entry behind; the first pop wins and the rest are stale.
            if !closed.insert(current) {
                continue;
            }
            if current == end {
                return Some(reconstruct_route(&came_from, start, end));
            }

            let current_g = g_cost[&current];

            board.passable_neighbors_into(current, &mut nbuf);
            for &next in &nbuf {
                if closed.contains(&next) {
                    continue;
                }
                let tentative = current_g + 1;
                if let Some(&g) = g_cost.get(&next) {
                    if tentative >= g {
                        continue;
                    }
                }
                g_cost.insert(next, tentative);
                came_from.insert(next, Some(current));
                let h = manhattan(next, end);
                frontier.push(next, (tentative + h, h));
            }
        }

        None
    }
}
