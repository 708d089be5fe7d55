#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Integer cell coordinate on the dungeon grid. Equality is exact; the
/// grid's y axis grows downward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn manhattan(self, other: Self) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn distance(self, other: Self) -> f32 {
        let dx = (self.x - other.x) as f32;
        let dy = (self.y - other.y) as f32;
        (dx * dx + dy * dy).sqrt()
    }

    /// One move along the axis with the larger coordinate delta; the
    /// vertical axis wins ties.
    pub fn step_toward(self, target: Self) -> Action {
        let dx = target.x - self.x;
        let dy = target.y - self.y;
        if dx.abs() > dy.abs() {
            if dx > 0 {
                Action::Right
            } else {
                Action::Left
            }
        } else if dy < 0 {
            Action::Up
        } else {
            Action::Down
        }
    }
}

/// The discrete per-turn action slot. `Nop` first: blended-cost movement
/// breaks ties in declaration order, so staying put wins over moving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Action {
    #[default]
    Nop,
    Left,
    Right,
    Up,
    Down,
}

impl Action {
    /// Candidate order for movement resolution: stay, then the four moves.
    pub const ALL: [Action; 5] = [
        Action::Nop,
        Action::Left,
        Action::Right,
        Action::Up,
        Action::Down,
    ];

    /// The four moves, in the same relative order as [`Action::ALL`].
    pub const MOVES: [Action; 4] = [Action::Left, Action::Right, Action::Up, Action::Down];

    /// Cell this action would land on when taken from `pos`.
    pub fn apply(self, pos: GridPos) -> GridPos {
        match self {
            Action::Nop => pos,
            Action::Left => GridPos::new(pos.x - 1, pos.y),
            Action::Right => GridPos::new(pos.x + 1, pos.y),
            Action::Up => GridPos::new(pos.x, pos.y - 1),
            Action::Down => GridPos::new(pos.x, pos.y + 1),
        }
    }

    /// The exact opposite move; `Nop` reverses to itself.
    pub fn reverse(self) -> Action {
        match self {
            Action::Nop => Action::Nop,
            Action::Left => Action::Right,
            Action::Right => Action::Left,
            Action::Up => Action::Down,
            Action::Down => Action::Up,
        }
    }

    pub fn is_move(self) -> bool {
        !matches!(self, Action::Nop)
    }
}

/// Faction marker. Team 0 is the player faction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Team(pub u32);

impl Team {
    pub const PLAYER: Team = Team(0);

    pub fn opposes(self, other: Team) -> bool {
        self.0 != other.0
    }
}

/// Entity markers the decision core can query for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Tag {
    Player,
    Monster,
    CraftingTable,
    Chest,
    Bed,
    Waypoint,
    Hive,
}
