#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use warren_core::GridPos;

/// Per-cell tile kind. The decision core only distinguishes walkable from
/// not.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tile {
    #[default]
    Floor,
    Wall,
}

/// Bounded width × height tile grid, row-major. Owned by the world and
/// immutable for the duration of a planning step.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dungeon {
    width: i32,
    height: i32,
    tiles: Vec<Tile>,
}

impl Dungeon {
    /// All-floor dungeon. Panics on a zero-sized grid.
    pub fn new(width: u32, height: u32) -> Self {
        assert!(width > 0 && height > 0, "dungeon must be non-empty");
        let width = width as i32;
        let height = height as i32;
        Self {
            width,
            height,
            tiles: vec![Tile::Floor; (width * height) as usize],
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn in_bounds(&self, pos: GridPos) -> bool {
        pos.x >= 0 && pos.y >= 0 && pos.x < self.width && pos.y < self.height
    }

    fn idx(&self, pos: GridPos) -> Option<usize> {
        if !self.in_bounds(pos) {
            return None;
        }
        Some((pos.y * self.width + pos.x) as usize)
    }

    /// Out-of-bounds writes are ignored.
    pub fn set(&mut self, pos: GridPos, tile: Tile) {
        if let Some(idx) = self.idx(pos) {
            self.tiles[idx] = tile;
        }
    }

    pub fn tile(&self, pos: GridPos) -> Option<Tile> {
        self.idx(pos).map(|idx| self.tiles[idx])
    }

    /// False off-grid: out-of-bounds cells behave like walls everywhere in
    /// the core.
    pub fn is_floor(&self, pos: GridPos) -> bool {
        self.tile(pos) == Some(Tile::Floor)
    }

    /// Whether the axis-dominant walk from `from` to `to` crosses no wall.
    /// Checks every stepped-onto cell including `to`, but not `from`.
    pub fn straight_walk_clear(&self, from: GridPos, to: GridPos) -> bool {
        let mut cur = from;
        while cur != to {
            cur = cur.step_toward(to).apply(cur);
            if !self.is_floor(cur) {
                return false;
            }
        }
        true
    }
}
