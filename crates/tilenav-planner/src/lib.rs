//! **tilenav-planner** — Reactive route planning over a tilenav board.
//!
//! [`RoutePlanner`] holds the current start tile, end tile, and last
//! computed route as observable values. A search runs synchronously
//! whenever both endpoints become set, and re-runs whenever the board's
//! obstacle layout changes while both are set. Presentation collaborators
//! observe the three channels through [`ReactiveReader`] handles and never
//! mutate planner state directly.
//!
//! Everything is single-threaded and run-to-completion: by the time
//! `set_start_tile`, `set_end_tile`, or an obstacle mutation returns, any
//! search it triggered has finished and its outcome has been published.

use std::rc::Rc;

use tilenav_core::{Board, Point, ReactiveReader, ReactiveValue, Subscription};
use tilenav_paths::{Algorithm, PathSearch, Route};

pub use tilenav_core::{BoardConfig, ConfigError};
pub use tilenav_paths::ParseAlgorithmError;

/// The value published on the route channel.
///
/// A failed search publishes [`Unreachable`](RouteState::Unreachable),
/// which is observably distinct from
/// [`NotComputed`](RouteState::NotComputed) — "there is no route" is an
/// answer, "no search has run" is not.
#[derive(Clone, Debug, PartialEq)]
pub enum RouteState {
    /// No search has produced an outcome yet.
    NotComputed,
    /// The last search exhausted its frontier without reaching the end.
    Unreachable,
    /// The last search found this route.
    Found(Route),
}

impl RouteState {
    /// The found route, if any.
    pub fn route(&self) -> Option<&Route> {
        match self {
            Self::Found(route) => Some(route),
            _ => None,
        }
    }
}

/// Orchestrates searches over a board with a fixed strategy.
///
/// The strategy is resolved once, at construction, from the configured
/// [`Algorithm`]; the board is borrowed per search invocation. Dropping
/// the planner detaches it from the board's map-changed channel.
pub struct RoutePlanner {
    board: Board,
    algorithm: Algorithm,
    strategy: Rc<dyn PathSearch>,
    start: ReactiveValue<Option<Point>>,
    end: ReactiveValue<Option<Point>>,
    route: ReactiveValue<RouteState>,
    map_sub: Subscription,
}

impl RoutePlanner {
    /// Create a planner bound to `board`, searching with `algorithm`.
    pub fn new(board: Board, algorithm: Algorithm) -> Self {
        let strategy: Rc<dyn PathSearch> = Rc::from(algorithm.strategy());
        let start: ReactiveValue<Option<Point>> = ReactiveValue::new(None);
        let end: ReactiveValue<Option<Point>> = ReactiveValue::new(None);
        let route = ReactiveValue::new(RouteState::NotComputed);

        let map_sub = {
            let board = board.clone();
            let strategy = Rc::clone(&strategy);
            let start = start.clone();
            let end = end.clone();
            let route = route.clone();
            board.clone().subscribe_map_changed(move |_| {
                recompute(&board, strategy.as_ref(), algorithm, &start, &end, &route);
            })
        };

        Self {
            board,
            algorithm,
            strategy,
            start,
            end,
            route,
            map_sub,
        }
    }

    /// A handle to the board this planner searches.
    pub fn board(&self) -> Board {
        self.board.clone()
    }

    /// The configured algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    // -----------------------------------------------------------------------
    // Inbound operations
    // -----------------------------------------------------------------------

    /// Select the start tile. If the end tile is also set, the search runs
    /// before this call returns. Out-of-extent tiles are silently ignored.
    pub fn set_start_tile(&self, tile: Point) {
        if !self.board.contains(tile) {
            return;
        }
        self.start.set(Some(tile));
        self.recompute();
    }

    /// Select the end tile. If the start tile is also set, the search runs
    /// before this call returns. Out-of-extent tiles are silently ignored.
    pub fn set_end_tile(&self, tile: Point) {
        if !self.board.contains(tile) {
            return;
        }
        self.end.set(Some(tile));
        self.recompute();
    }

    /// Place an obstacle through the board's mutator.
    pub fn place_obstacle(&self, tile: Point) {
        self.board.add_obstacle(tile);
    }

    /// Remove an obstacle through the board's mutator.
    pub fn remove_obstacle(&self, tile: Point) {
        self.board.remove_obstacle(tile);
    }

    // -----------------------------------------------------------------------
    // Outbound channels
    // -----------------------------------------------------------------------

    /// The current start tile, observable.
    pub fn start_tile(&self) -> ReactiveReader<Option<Point>> {
        self.start.reader()
    }

    /// The current end tile, observable.
    pub fn end_tile(&self) -> ReactiveReader<Option<Point>> {
        self.end.reader()
    }

    /// The current route outcome, observable.
    pub fn route(&self) -> ReactiveReader<RouteState> {
        self.route.reader()
    }

    fn recompute(&self) {
        recompute(
            &self.board,
            self.strategy.as_ref(),
            self.algorithm,
            &self.start,
            &self.end,
            &self.route,
        );
    }
}

impl Drop for RoutePlanner {
    fn drop(&mut self) {
        self.board.unsubscribe_map_changed(self.map_sub);
    }
}

/// Run a search if both endpoints are set, publishing the outcome.
fn recompute(
    board: &Board,
    strategy: &dyn PathSearch,
    algorithm: Algorithm,
    start: &ReactiveValue<Option<Point>>,
    end: &ReactiveValue<Option<Point>>,
    route: &ReactiveValue<RouteState>,
) {
    let (Some(from), Some(to)) = (start.get(), end.get()) else {
        return;
    };
    match strategy.try_find_path(board, from, to) {
        Some(found) => {
            log::info!(
                "route found from {from} to {to} using [{algorithm}]: {} tiles",
                found.len()
            );
            route.set(RouteState::Found(found));
        }
        None => {
            log::warn!("no route from {from} to {to} using [{algorithm}]");
            route.set(RouteState::Unreachable);
        }
    }
}
