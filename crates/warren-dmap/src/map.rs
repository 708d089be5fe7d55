#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use warren_core::{Action, GridPos};

use crate::Dungeon;

/// Sentinel cost for walls, off-grid cells, and floor no seed can reach.
/// Strictly greater than any achievable path cost; callers must never pick
/// a sentinel cell as a destination.
pub const UNREACHABLE: f32 = 1e5;

/// Dense scalar cost field over the dungeon grid, one value per tile,
/// row-major. Rebuilt from scratch on every request; never patched
/// incrementally.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DijkstraMap {
    width: i32,
    height: i32,
    cells: Vec<f32>,
}

impl DijkstraMap {
    /// All-sentinel field sized for `dungeon`.
    pub fn sentinel(dungeon: &Dungeon) -> Self {
        Self {
            width: dungeon.width(),
            height: dungeon.height(),
            cells: vec![UNREACHABLE; (dungeon.width() * dungeon.height()) as usize],
        }
    }

    /// Multi-source shortest-path field: every seed costs 0, every other
    /// floor cell the exact 4-neighbor path length to its nearest seed,
    /// unreached floor the sentinel. Seeds on walls or off-grid are
    /// dropped.
    pub fn compute(dungeon: &Dungeon, seeds: &[GridPos]) -> Self {
        let mut map = Self::sentinel(dungeon);
        for &seed in seeds {
            if dungeon.is_floor(seed) {
                map.set(seed, 0.0);
            }
        }
        map.relax(dungeon);
        map
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Cost at `pos`; the sentinel off-grid.
    pub fn at(&self, pos: GridPos) -> f32 {
        if pos.x < 0 || pos.y < 0 || pos.x >= self.width || pos.y >= self.height {
            return UNREACHABLE;
        }
        self.cells[(pos.y * self.width + pos.x) as usize]
    }

    pub fn reachable(&self, pos: GridPos) -> bool {
        self.at(pos) < UNREACHABLE
    }

    fn set(&mut self, pos: GridPos, value: f32) {
        self.cells[(pos.y * self.width + pos.x) as usize] = value;
    }

    /// Full-grid relaxation passes applying
    /// `v = min(v, min(floor neighbors) + 1)` until a pass changes
    /// nothing. Deliberately a scan to a fixed point rather than a
    /// priority-queue Dijkstra; the pass count is bounded by the grid
    /// diameter. Non-floor and off-grid neighbors never propagate.
    pub fn relax(&mut self, dungeon: &Dungeon) {
        loop {
            let mut changed = false;
            for y in 0..self.height {
                for x in 0..self.width {
                    let pos = GridPos::new(x, y);
                    if !dungeon.is_floor(pos) {
                        continue;
                    }
                    let own = self.at(pos);
                    let mut best = own;
                    for action in Action::MOVES {
                        let neighbor = action.apply(pos);
                        if !dungeon.is_floor(neighbor) {
                            continue;
                        }
                        let v = self.at(neighbor);
                        if v < best {
                            best = v;
                        }
                    }
                    if best < own - 1.0 {
                        self.set(pos, best + 1.0);
                        changed = true;
                    }
                }
            }
            if !changed {
                break;
            }
        }
    }

    /// Scale every non-sentinel cell in place. The flee generator negates
    /// the approach field this way before re-relaxing it.
    pub fn scale_reachable(&mut self, factor: f32) {
        for v in &mut self.cells {
            if *v < UNREACHABLE {
                *v *= factor;
            }
        }
    }
}
