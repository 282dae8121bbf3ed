use crate::core::Cell::{Box, BoxOnTarget, Floor, Player, Target, Wall};
use crate::core::{GameChangeType, GameState, GameUpdate, MoveRejection, UserAction};

pub fn step(game: &GameState, action: UserAction) -> GameUpdate {
    let dir = match action {
        UserAction::Move(d) => d.vector(),
    };

    let dest = game.player + dir;
    let Some(dest_cell) = game.cell_at(dest) else {
        return GameUpdate::NoChange(MoveRejection::OutOfBounds);
    };

    let pushing = match dest_cell {
        Wall => return GameUpdate::NoChange(MoveRejection::Wall),
        Target | BoxOnTarget => return GameUpdate::NoChange(MoveRejection::TargetBlocked),
        Box => true,
        Floor | Player => false,
    };

    // Rows are cloned so the previous grid stays intact as a snapshot.
    let mut new_grid = game.grid.clone();

    if pushing {
        let beyond = dest + dir;
        let Some(beyond_cell) = game.cell_at(beyond) else {
            return GameUpdate::NoChange(MoveRejection::BoxOutOfBounds);
        };
        new_grid[beyond.y as usize][beyond.x as usize] = match beyond_cell {
            Target => BoxOnTarget,
            Floor => Box,
            Wall | Box | BoxOnTarget | Player => {
                return GameUpdate::NoChange(MoveRejection::BoxBlocked);
            }
        };
    }

    new_grid[dest.y as usize][dest.x as usize] = Player;
    new_grid[game.player.y as usize][game.player.x as usize] = Floor;

    let mut next = GameState {
        grid: new_grid,
        player: dest,
        moves: game.moves + 1,
        boxes_on_target: game.boxes_on_target,
        total_targets: game.total_targets,
    };

    if pushing {
        next.boxes_on_target = next.count_boxes_on_target();
        GameUpdate::NextState(next, GameChangeType::PlayerAndBoxMove)
    } else {
        GameUpdate::NextState(next, GameChangeType::PlayerMove)
    }
}
