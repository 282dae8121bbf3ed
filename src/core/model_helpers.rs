use crate::core::bounds::BoundsOriginRoot;
use crate::core::{Cell, Direction, GameState, UserAction, Vec2};

impl Cell {
    pub fn from_code(code: char) -> Option<Cell> {
        Some(match code {
            'W' => Cell::Wall,
            '.' => Cell::Floor,
            'P' => Cell::Player,
            'B' => Cell::Box,
            'T' => Cell::Target,
            '*' => Cell::BoxOnTarget,
            _ => return None,
        })
    }

    pub fn code(&self) -> char {
        match self {
            Cell::Wall => 'W',
            Cell::Floor => '.',
            Cell::Player => 'P',
            Cell::Box => 'B',
            Cell::Target => 'T',
            Cell::BoxOnTarget => '*',
        }
    }

    /// Cells that count towards `total_targets` when a level is loaded.
    pub fn is_goal(&self) -> bool {
        matches!(self, Cell::Target | Cell::BoxOnTarget)
    }
}

impl Direction {
    pub fn vector(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { x: 0, y: -1 },
            Direction::Down => Vec2 { x: 0, y: 1 },
            Direction::Left => Vec2 { x: -1, y: 0 },
            Direction::Right => Vec2 { x: 1, y: 0 },
        }
    }
}

impl UserAction {
    pub fn all_actions() -> Vec<UserAction> {
        vec![
            UserAction::Move(Direction::Up),
            UserAction::Move(Direction::Down),
            UserAction::Move(Direction::Left),
            UserAction::Move(Direction::Right),
        ]
    }
}

impl GameState {
    pub fn height(&self) -> i32 {
        self.grid.len() as i32
    }

    pub fn width(&self) -> i32 {
        if self.grid.is_empty() {
            0
        } else {
            self.grid[0].len() as i32
        }
    }

    pub fn bounds(&self) -> BoundsOriginRoot {
        BoundsOriginRoot::new(self.width(), self.height())
    }

    /// Returns `None` outside the grid, including past the end of a short row.
    pub fn cell_at(&self, pos: Vec2) -> Option<Cell> {
        if !self.bounds().contains(&pos) {
            return None;
        }
        self.grid
            .get(pos.y as usize)
            .and_then(|row| row.get(pos.x as usize))
            .copied()
    }

    pub fn count_boxes_on_target(&self) -> usize {
        self.grid
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == Cell::BoxOnTarget)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// A board with no goals is never complete, which keeps the inert empty
    /// state from reading as solved.
    pub fn is_complete(&self) -> bool {
        self.total_targets > 0 && self.boxes_on_target == self.total_targets
    }
}
