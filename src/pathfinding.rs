use crate::grid::{GridError, TileGrid};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// A cell coordinate on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn manhattan_distance(&self, other: &Position) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The four cardinal neighbours. Diagonal movement is not modeled.
    fn neighbors(&self) -> [Position; 4] {
        [
            Position::new(self.x, self.y - 1),
            Position::new(self.x - 1, self.y),
            Position::new(self.x + 1, self.y),
            Position::new(self.x, self.y + 1),
        ]
    }
}

/// Numeric movement costs for a search. The grid only knows boolean
/// terrain classes; the entity/AI layer owns the numbers and passes them
/// in per query.
#[derive(Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Cost of entering an ordinary cell.
    pub base_cost: u32,
    /// Cost of entering a slow cell. Blocked cells have no cost, they are
    /// simply not traversable.
    pub slow_cost: u32,
    /// Optional safety bound on expanded nodes. The grid is finite so
    /// searches always terminate; this exists for callers that want a
    /// hard ceiling anyway.
    pub max_expanded: Option<u32>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            base_cost: 1,
            slow_cost: 2,
            max_expanded: None,
        }
    }
}

/// A frontier entry. Ordered by accumulated cost, then by insertion
/// sequence so equal-cost entries leave the heap in FIFO order and every
/// query on an unchanged grid yields the same path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SearchNode {
    cost: u32,
    seq: u64,
    position: Position,
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed: BinaryHeap is a max-heap, we want lowest cost first.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Uniform-cost search over a fixed grid snapshot.
///
/// Borrows the grid read-only for its lifetime, so the grid cannot be
/// retagged or edited while a pathfinder is alive. Construct one per
/// loaded level and drop it before mutating the grid.
pub struct Pathfinder<'a> {
    grid: &'a TileGrid,
}

impl<'a> Pathfinder<'a> {
    pub fn new(grid: &'a TileGrid) -> Self {
        Pathfinder { grid }
    }

    fn check_bounds(&self, pos: Position) -> Result<(), GridError> {
        if self.grid.in_bounds(pos.x, pos.y) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                x: pos.x,
                y: pos.y,
                width: self.grid.width(),
                height: self.grid.height(),
            })
        }
    }

    /// Cost of entering a cell, or `None` if the cell is blocked or
    /// outside the grid. The -1 sentinel belongs to no terrain set and is
    /// entered at base cost, matching the classifier's passable quirk.
    fn entry_cost(&self, pos: Position, config: &SearchConfig) -> Option<u32> {
        if !self.grid.in_bounds(pos.x, pos.y) {
            return None;
        }
        let code = self.grid.get_tile(pos.x, pos.y).ok()?;
        let terrain = self.grid.terrain();
        if terrain.is_blocked(code) {
            None
        } else if terrain.is_slow(code) {
            Some(config.slow_cost)
        } else {
            Some(config.base_cost)
        }
    }

    /// Lowest-cost path from `start` to `goal`, both cells included.
    ///
    /// Returns an empty Vec when the goal cannot be reached; that is a
    /// result, not an error. Out-of-bounds endpoints are an error. A
    /// start standing on a blocked cell can still be left (only entering
    /// blocked cells is forbidden).
    pub fn find_path(
        &self,
        start: Position,
        goal: Position,
        config: &SearchConfig,
    ) -> Result<Vec<Position>, GridError> {
        self.check_bounds(start)?;
        self.check_bounds(goal)?;

        if start == goal {
            return Ok(vec![start]);
        }

        let mut came_from: HashMap<Position, Position> = HashMap::new();
        let mut best_cost: HashMap<Position, u32> = HashMap::new();
        let mut frontier: BinaryHeap<SearchNode> = BinaryHeap::new();
        let mut seq: u64 = 0;
        let mut expanded: u32 = 0;

        best_cost.insert(start, 0);
        frontier.push(SearchNode {
            cost: 0,
            seq,
            position: start,
        });

        while let Some(node) = frontier.pop() {
            // Stale entry, a cheaper route to this cell was found later.
            if node.cost > best_cost[&node.position] {
                continue;
            }
            if node.position == goal {
                return Ok(reconstruct_path(&came_from, start, goal));
            }

            expanded += 1;
            if let Some(limit) = config.max_expanded {
                if expanded > limit {
                    break;
                }
            }

            for next in node.position.neighbors() {
                let Some(step) = self.entry_cost(next, config) else {
                    continue;
                };
                let cost = node.cost + step;
                if best_cost.get(&next).is_some_and(|&seen| seen <= cost) {
                    continue;
                }
                best_cost.insert(next, cost);
                came_from.insert(next, node.position);
                seq += 1;
                frontier.push(SearchNode {
                    cost,
                    seq,
                    position: next,
                });
            }
        }

        Ok(Vec::new())
    }

    /// All cells reachable from `start` with accumulated entry cost at
    /// most `budget`, mapped to that minimum cost. The start itself is
    /// included at cost 0.
    pub fn reachable(
        &self,
        start: Position,
        budget: u32,
        config: &SearchConfig,
    ) -> Result<HashMap<Position, u32>, GridError> {
        self.check_bounds(start)?;

        let mut best_cost: HashMap<Position, u32> = HashMap::new();
        let mut frontier: BinaryHeap<SearchNode> = BinaryHeap::new();
        let mut seq: u64 = 0;

        best_cost.insert(start, 0);
        frontier.push(SearchNode {
            cost: 0,
            seq,
            position: start,
        });

        while let Some(node) = frontier.pop() {
            if node.cost > best_cost[&node.position] {
                continue;
            }
            for next in node.position.neighbors() {
                let Some(step) = self.entry_cost(next, config) else {
                    continue;
                };
                let cost = node.cost + step;
                if cost > budget {
                    continue;
                }
                if best_cost.get(&next).is_some_and(|&seen| seen <= cost) {
                    continue;
                }
                best_cost.insert(next, cost);
                seq += 1;
                frontier.push(SearchNode {
                    cost,
                    seq,
                    position: next,
                });
            }
        }

        Ok(best_cost)
    }
}

fn reconstruct_path(
    came_from: &HashMap<Position, Position>,
    start: Position,
    goal: Position,
) -> Vec<Position> {
    let mut path = vec![goal];
    let mut current = goal;
    while current != start {
        current = came_from[&current];
        path.push(current);
    }
    path.reverse();
    path
}

/// Format a path for display, e.g. `(0,0) -> (1,0) -> (1,1)`.
pub fn format_path(path: &[Position]) -> String {
    if path.is_empty() {
        return "No path".to_string();
    }

    let mut result = String::new();
    for (i, pos) in path.iter().enumerate() {
        if i > 0 {
            result.push_str(" -> ");
        }
        result.push_str(&format!("({},{})", pos.x, pos.y));
    }
    result
}
