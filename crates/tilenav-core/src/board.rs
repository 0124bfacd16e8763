//! The navigation board: valid tiles, obstacles, passability queries, and
//! grid/world coordinate transforms.
//!
//! [`Board`] is a cheap-clone handle over shared state (the same pattern as
//! a shared-buffer grid), so input glue, search strategies, and rendering
//! collaborators can all hold it. The obstacle set is the only mutable part
//! and is mutated exclusively through [`Board::add_obstacle`] and
//! [`Board::remove_obstacle`].

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::config::{BoardConfig, ConfigError};
use crate::geom::{Point, Vec2};
use crate::reactive::{Signal, Subscription};

struct BoardShared {
    config: BoardConfig,
    obstacles: RefCell<HashSet<Point>>,
    changed: Signal<()>,
}

/// A rectangular board of tiles anchored at `(0, 0)`, extending to
/// `(width - 1, height - 1)`.
///
/// Out-of-extent coordinates are an expected, silent case everywhere:
/// queries answer false/empty and mutations are ignored, so the obstacle
/// set always stays a subset of the valid tiles.
#[derive(Clone)]
pub struct Board {
    shared: Rc<BoardShared>,
}

impl Board {
    /// Create a board from a validated configuration.
    pub fn new(config: BoardConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            shared: Rc::new(BoardShared {
                config,
                obstacles: RefCell::new(HashSet::new()),
                changed: Signal::new(),
            }),
        })
    }

    /// The configuration this board was built from.
    #[inline]
    pub fn config(&self) -> BoardConfig {
        self.shared.config
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> i32 {
        self.shared.config.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> i32 {
        self.shared.config.height
    }

    /// Whether diagonal steps are allowed at all.
    #[inline]
    pub fn diagonal_movement(&self) -> bool {
        self.shared.config.diagonal_movement
    }

    /// Whether `tile` lies within the extent.
    #[inline]
    pub fn contains(&self, tile: Point) -> bool {
        tile.x >= 0 && tile.x < self.width() && tile.y >= 0 && tile.y < self.height()
    }

    /// Row-major iterator over every valid tile.
    pub fn tiles(&self) -> Tiles {
        Tiles {
            width: self.width(),
            height: self.height(),
            cur: Point::ZERO,
        }
    }

    // -----------------------------------------------------------------------
    // Obstacles
    // -----------------------------------------------------------------------

    /// Whether `tile` currently holds an obstacle.
    pub fn is_obstacle(&self, tile: Point) -> bool {
        self.shared.obstacles.borrow().contains(&tile)
    }

    /// Number of obstacles on the board.
    pub fn obstacle_count(&self) -> usize {
        self.shared.obstacles.borrow().len()
    }

    /// Place an obstacle on `tile`.
    ///
    /// Idempotent: only an effective insertion raises a map-changed
    /// notification. Out-of-extent tiles are ignored.
    pub fn add_obstacle(&self, tile: Point) {
        if !self.contains(tile) {
            return;
        }
        let inserted = self.shared.obstacles.borrow_mut().insert(tile);
        if inserted {
            self.shared.changed.emit(&());
        }
    }

    /// Remove the obstacle on `tile`.
    ///
    /// Idempotent: removing a tile that holds no obstacle raises nothing.
    pub fn remove_obstacle(&self, tile: Point) {
        let removed = self.shared.obstacles.borrow_mut().remove(&tile);
        if removed {
            self.shared.changed.emit(&());
        }
    }

    /// Register a handler for map-changed notifications.
    ///
    /// Handlers run synchronously before the mutating call returns, in
    /// registration order. Mutating this board's obstacles from inside a
    /// handler is unsupported.
    pub fn subscribe_map_changed(&self, handler: impl FnMut(&()) + 'static) -> Subscription {
        self.shared.changed.subscribe(handler)
    }

    /// Remove a previously registered map-changed handler.
    pub fn unsubscribe_map_changed(&self, sub: Subscription) {
        self.shared.changed.unsubscribe(sub)
    }

    // -----------------------------------------------------------------------
    // Passability
    // -----------------------------------------------------------------------

    /// The tiles reachable from `target` in one step.
    ///
    /// See [`passable_neighbors_into`](Self::passable_neighbors_into).
    pub fn passable_neighbors(&self, target: Point) -> Vec<Point> {
        let mut out = Vec::with_capacity(8);
        self.passable_neighbors_into(target, &mut out);
        out
    }

    /// Append the tiles reachable from `target` in one step into `out`,
    /// clearing it first.
    ///
    /// A neighbour is a tile within Chebyshev distance 1 that is valid and
    /// not an obstacle. A diagonal neighbour is additionally rejected when
    /// diagonal movement is disabled, or when either of the two orthogonal
    /// corner tiles between the two is an obstacle (no cutting through wall
    /// corners). An out-of-extent `target` has no neighbours.
    pub fn passable_neighbors_into(&self, target: Point, out: &mut Vec<Point>) {
        out.clear();
        if !self.contains(target) {
            return;
        }
        let obstacles = self.shared.obstacles.borrow();
        if self.diagonal_movement() {
            for n in target.neighbors_8() {
                if self.step_allowed(&obstacles, target, n) {
                    out.push(n);
                }
            }
        } else {
            for n in target.neighbors_4() {
                if self.step_allowed(&obstacles, target, n) {
                    out.push(n);
                }
            }
        }
    }

    fn step_allowed(&self, obstacles: &HashSet<Point>, from: Point, to: Point) -> bool {
        if !self.contains(to) || obstacles.contains(&to) {
            return false;
        }
        if from.is_diagonal_to(to) {
            // The two orthogonal tiles forming the corner between from and to.
            let horizontal = Point::new(to.x, from.y);
            let vertical = Point::new(from.x, to.y);
            if obstacles.contains(&horizontal) || obstacles.contains(&vertical) {
                return false;
            }
        }
        true
    }

    // -----------------------------------------------------------------------
    // Coordinate transforms
    // -----------------------------------------------------------------------
    //
    // The board is centered on the continuous-space origin; each tile's
    // footprint is a cell_size × cell_size square and grid_to_world maps a
    // tile to the center of its footprint.

    /// Continuous position of the center of `tile`'s footprint.
    pub fn grid_to_world(&self, tile: Point) -> Vec2 {
        let s = self.shared.config.cell_size;
        let half_w = self.width() as f32 * s / 2.0;
        let half_h = self.height() as f32 * s / 2.0;
        Vec2::new(
            tile.x as f32 * s - half_w + s / 2.0,
            tile.y as f32 * s - half_h + s / 2.0,
        )
    }

    /// Grid coordinate whose footprint contains `pos`.
    ///
    /// Raw inverse transform: the result may lie outside the extent.
    pub fn world_to_grid(&self, pos: Vec2) -> Point {
        let s = self.shared.config.cell_size;
        let half_w = self.width() as f32 * s / 2.0;
        let half_h = self.height() as f32 * s / 2.0;
        Point::new(
            ((pos.x + half_w) / s).floor() as i32,
            ((pos.y + half_h) / s).floor() as i32,
        )
    }

    /// The valid tile whose footprint contains `pos`, or `None` if `pos`
    /// lies off the board.
    pub fn tile_at(&self, pos: Vec2) -> Option<Point> {
        let tile = self.world_to_grid(pos);
        self.contains(tile).then_some(tile)
    }

    /// Convert a sequence of tiles to the continuous positions of their
    /// footprint centers. For presentation collaborators.
    pub fn grid_path_to_world(&self, tiles: &[Point]) -> Vec<Vec2> {
        tiles.iter().map(|&t| self.grid_to_world(t)).collect()
    }
}

/// Row-major iterator over a board's valid tiles.
#[derive(Clone, Debug)]
pub struct Tiles {
    width: i32,
    height: i32,
    cur: Point,
}

impl Iterator for Tiles {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.cur.y >= self.height {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.width {
            self.cur.x = 0;
            self.cur.y += 1;
        }
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining_in_row = (self.width - self.cur.x) as usize;
        let remaining_rows = (self.height - self.cur.y - 1).max(0) as usize;
        let total = if self.cur.y >= self.height {
            0
        } else {
            remaining_in_row + remaining_rows * self.width as usize
        };
        (total, Some(total))
    }
}

impl ExactSizeIterator for Tiles {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn board(width: i32, height: i32, diagonal: bool) -> Board {
        let mut cfg = BoardConfig::new(width, height);
        cfg.diagonal_movement = diagonal;
        Board::new(cfg).unwrap()
    }

    // -----------------------------------------------------------------------
    // Extent and tiles
    // -----------------------------------------------------------------------

    #[test]
    fn contains_respects_extent() {
        let b = board(3, 2, false);
        assert!(b.contains(Point::new(0, 0)));
        assert!(b.contains(Point::new(2, 1)));
        assert!(!b.contains(Point::new(3, 0)));
        assert!(!b.contains(Point::new(0, 2)));
        assert!(!b.contains(Point::new(-1, 0)));
    }

    #[test]
    fn tiles_enumerates_row_major() {
        let b = board(3, 2, false);
        let tiles: Vec<_> = b.tiles().collect();
        assert_eq!(tiles.len(), 6);
        assert_eq!(tiles[0], Point::new(0, 0));
        assert_eq!(tiles[1], Point::new(1, 0));
        assert_eq!(tiles[5], Point::new(2, 1));
        assert_eq!(b.tiles().len(), 6);
    }

    #[test]
    fn rejects_invalid_config() {
        assert!(Board::new(BoardConfig::new(0, 5)).is_err());
    }

    // -----------------------------------------------------------------------
    // Obstacles and notifications
    // -----------------------------------------------------------------------

    #[test]
    fn obstacle_membership() {
        let b = board(4, 4, false);
        let t = Point::new(1, 2);
        assert!(!b.is_obstacle(t));
        b.add_obstacle(t);
        assert!(b.is_obstacle(t));
        b.remove_obstacle(t);
        assert!(!b.is_obstacle(t));
    }

    #[test]
    fn duplicate_add_notifies_once() {
        let b = board(4, 4, false);
        let hits = Rc::new(RefCell::new(0));
        let h = Rc::clone(&hits);
        b.subscribe_map_changed(move |_| *h.borrow_mut() += 1);

        b.add_obstacle(Point::new(2, 2));
        b.add_obstacle(Point::new(2, 2));
        assert_eq!(*hits.borrow(), 1);
    }

    #[test]
    fn removing_absent_obstacle_notifies_nothing() {
        let b = board(4, 4, false);
        let hits = Rc::new(RefCell::new(0));
        let h = Rc::clone(&hits);
        b.subscribe_map_changed(move |_| *h.borrow_mut() += 1);

        b.remove_obstacle(Point::new(1, 1));
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn out_of_extent_obstacle_is_ignored() {
        let b = board(4, 4, false);
        let hits = Rc::new(RefCell::new(0));
        let h = Rc::clone(&hits);
        b.subscribe_map_changed(move |_| *h.borrow_mut() += 1);

        b.add_obstacle(Point::new(9, 9));
        assert_eq!(b.obstacle_count(), 0);
        assert_eq!(*hits.borrow(), 0);
    }

    #[test]
    fn unsubscribed_handler_stops_firing() {
        let b = board(4, 4, false);
        let hits = Rc::new(RefCell::new(0));
        let h = Rc::clone(&hits);
        let sub = b.subscribe_map_changed(move |_| *h.borrow_mut() += 1);

        b.add_obstacle(Point::new(0, 0));
        b.unsubscribe_map_changed(sub);
        b.add_obstacle(Point::new(1, 0));
        assert_eq!(*hits.borrow(), 1);
    }

    // -----------------------------------------------------------------------
    // Passability
    // -----------------------------------------------------------------------

    #[test]
    fn interior_tile_has_four_cardinal_neighbors() {
        let b = board(5, 5, false);
        let ns = b.passable_neighbors(Point::new(2, 2));
        assert_eq!(ns.len(), 4);
        for n in &ns {
            assert!(!Point::new(2, 2).is_diagonal_to(*n));
        }
    }

    #[test]
    fn interior_tile_has_eight_neighbors_with_diagonals() {
        let b = board(5, 5, true);
        assert_eq!(b.passable_neighbors(Point::new(2, 2)).len(), 8);
    }

    #[test]
    fn corner_tile_neighbors_are_clipped() {
        let b = board(5, 5, false);
        assert_eq!(b.passable_neighbors(Point::new(0, 0)).len(), 2);
        let bd = board(5, 5, true);
        assert_eq!(bd.passable_neighbors(Point::new(0, 0)).len(), 3);
    }

    #[test]
    fn obstacles_are_not_neighbors() {
        let b = board(5, 5, false);
        b.add_obstacle(Point::new(2, 1));
        let ns = b.passable_neighbors(Point::new(2, 2));
        assert_eq!(ns.len(), 3);
        assert!(!ns.contains(&Point::new(2, 1)));
    }

    #[test]
    fn diagonal_step_cannot_cut_corners() {
        let b = board(3, 3, true);
        b.add_obstacle(Point::new(1, 0));
        b.add_obstacle(Point::new(0, 1));
        let ns = b.passable_neighbors(Point::new(0, 0));
        assert!(!ns.contains(&Point::new(1, 1)));
        assert!(ns.is_empty());
    }

    #[test]
    fn single_corner_obstacle_still_blocks_diagonal() {
        let b = board(3, 3, true);
        b.add_obstacle(Point::new(1, 0));
        let ns = b.passable_neighbors(Point::new(0, 0));
        assert!(!ns.contains(&Point::new(1, 1)));
        // The orthogonal step past the obstacle is unaffected.
        assert!(ns.contains(&Point::new(0, 1)));
    }

    #[test]
    fn adjacency_is_symmetric_for_non_obstacles() {
        let b = board(4, 4, true);
        b.add_obstacle(Point::new(1, 1));
        b.add_obstacle(Point::new(2, 3));

        for a in b.tiles() {
            if b.is_obstacle(a) {
                continue;
            }
            for n in b.passable_neighbors(a) {
                assert!(
                    b.passable_neighbors(n).contains(&a),
                    "asymmetry: {n} in neighbors of {a} but not vice versa"
                );
            }
        }
    }

    #[test]
    fn out_of_extent_target_has_no_neighbors() {
        let b = board(3, 3, true);
        assert!(b.passable_neighbors(Point::new(-1, 0)).is_empty());
        assert!(b.passable_neighbors(Point::new(3, 3)).is_empty());
    }

    // -----------------------------------------------------------------------
    // Coordinate transforms
    // -----------------------------------------------------------------------

    #[test]
    fn grid_world_round_trip_at_centers() {
        for (w, h, s) in [(4, 4, 1.0), (5, 3, 1.0), (7, 2, 0.25), (3, 9, 2.5)] {
            let mut cfg = BoardConfig::new(w, h);
            cfg.cell_size = s;
            let b = Board::new(cfg).unwrap();
            for t in b.tiles() {
                assert_eq!(b.world_to_grid(b.grid_to_world(t)), t, "{w}x{h}@{s} {t}");
            }
        }
    }

    #[test]
    fn round_trip_holds_inside_tile_footprint() {
        let mut cfg = BoardConfig::new(6, 4);
        cfg.cell_size = 1.5;
        let b = Board::new(cfg).unwrap();
        // Sample off-center points strictly inside each footprint.
        let offsets = [(-0.7, -0.7), (0.7, -0.3), (0.0, 0.7), (-0.3, 0.2)];
        for t in b.tiles() {
            let center = b.grid_to_world(t);
            for (dx, dy) in offsets {
                let p = Vec2::new(
                    center.x + dx * cfg.cell_size / 2.0,
                    center.y + dy * cfg.cell_size / 2.0,
                );
                assert_eq!(b.world_to_grid(p), t);
            }
        }
    }

    #[test]
    fn board_is_centered_on_origin() {
        let b = board(4, 4, false);
        let c = b.grid_to_world(Point::new(0, 0));
        assert_eq!((c.x, c.y), (-1.5, -1.5));
        let c = b.grid_to_world(Point::new(3, 3));
        assert_eq!((c.x, c.y), (1.5, 1.5));
    }

    #[test]
    fn tile_at_rejects_off_board_positions() {
        let b = board(4, 4, false);
        assert_eq!(b.tile_at(Vec2::new(0.1, 0.1)), Some(Point::new(2, 2)));
        assert_eq!(b.tile_at(Vec2::new(50.0, 0.0)), None);
        assert_eq!(b.tile_at(Vec2::new(-2.01, 0.0)), None);
    }

    #[test]
    fn grid_path_to_world_maps_each_tile() {
        let b = board(4, 4, false);
        let path = [Point::new(0, 0), Point::new(1, 0)];
        let world = b.grid_path_to_world(&path);
        assert_eq!(world.len(), 2);
        assert_eq!(world[0], b.grid_to_world(path[0]));
        assert_eq!(world[1], b.grid_to_world(path[1]));
    }
}
