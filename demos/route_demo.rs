//! Scripted walk-through of the reactive planning flow: build a board,
//! scatter obstacles, pick endpoints, then churn the map and watch the
//! route recompute.
//!
//! The algorithm is selected through the `TILENAV_ALGORITHM` environment
//! variable (`breadth-first`, `greedy-best-first`, or `astar`); an unknown
//! identifier aborts with a parse error.

use rand::rngs::SmallRng;
use rand::{RngExt, SeedableRng};

use tilenav_core::{Board, BoardConfig, Point};
use tilenav_paths::Algorithm;
use tilenav_planner::{RoutePlanner, RouteState};

const OBSTACLES: usize = 14;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let algorithm: Algorithm = std::env::var("TILENAV_ALGORITHM")
        .unwrap_or_else(|_| "astar".into())
        .parse()?;

    let mut config = BoardConfig::new(12, 8);
    config.diagonal_movement = true;
    let board = Board::new(config)?;

    let start = Point::new(0, 0);
    let end = Point::new(11, 7);

    let mut rng = SmallRng::from_rng(&mut rand::rng());
    while board.obstacle_count() < OBSTACLES {
        let tile = Point::new(
            rng.random_range(0..board.width()),
            rng.random_range(0..board.height()),
        );
        if tile != start && tile != end {
            board.add_obstacle(tile);
        }
    }

    let planner = RoutePlanner::new(board.clone(), algorithm);
    let route_sub = planner.route().subscribe(|state| match state {
        RouteState::Found(route) => {
            println!("route recomputed: {} tiles, {} steps", route.len(), route.steps());
        }
        RouteState::Unreachable => println!("route recomputed: no route exists"),
        RouteState::NotComputed => {}
    });

    println!(
        "searching {}x{} board ({} obstacles) with [{algorithm}]",
        board.width(),
        board.height(),
        board.obstacle_count(),
    );
    planner.set_start_tile(start);
    planner.set_end_tile(end);

    // Obstacle churn re-runs the search without any further planner calls.
    let gate = Point::new(6, 4);
    if gate != start && gate != end && !board.is_obstacle(gate) {
        println!("blocking {gate} and unblocking it again:");
        board.add_obstacle(gate);
        board.remove_obstacle(gate);
    }

    render(&board, &planner.route().get(), start, end);
    planner.route().unsubscribe(route_sub);
    Ok(())
}

/// Print the board: start `S`, end `E`, obstacles `#`, route `*`.
fn render(board: &Board, state: &RouteState, start: Point, end: Point) {
    for y in 0..board.height() {
        let mut line = String::with_capacity(board.width() as usize);
        for x in 0..board.width() {
            let tile = Point::new(x, y);
            let glyph = if tile == start {
                'S'
            } else if tile == end {
                'E'
            } else if board.is_obstacle(tile) {
                '#'
            } else if state.route().is_some_and(|r| r.tiles().contains(&tile)) {
                '*'
            } else {
                '.'
            };
            line.push(glyph);
        }
        println!("{line}");
    }
}
