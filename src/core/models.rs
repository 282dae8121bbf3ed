use std::ops::Add;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Cell {
    Wall,
    Floor,
    Player,
    Box,
    Target,
    BoxOnTarget,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
pub struct Vec2 {
    pub x: i32,
    pub y: i32,
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UserAction {
    Move(Direction),
}

/// Live, session-local puzzle state. `grid` always holds exactly one `Player`
/// cell at `player` once decoded from a layout.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default)]
pub struct GameState {
    pub grid: Vec<Vec<Cell>>,
    pub player: Vec2,
    pub moves: u32,
    pub boxes_on_target: usize,
    pub total_targets: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameUpdate {
    NextState(GameState, GameChangeType),
    NoChange(MoveRejection),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndBoxMove,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveRejection {
    OutOfBounds,
    Wall,
    /// Bare targets and boxes already on a target can't be entered by the player.
    TargetBlocked,
    BoxOutOfBounds,
    BoxBlocked,
}
