use crate::game_errors::GameResult;
use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::{ActionKind, GeneratedMove, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub placements: usize,
    pub movements: usize,
    pub captures: usize,
    pub wins: usize,
}

impl PerftCounts {
    fn record(&mut self, mv: &GeneratedMove) {
        self.nodes += 1;
        match mv.action.kind {
            ActionKind::Placement => self.placements += 1,
            ActionKind::Movement => self.movements += 1,
            ActionKind::Capture => self.captures += 1,
        }
        if mv.game_after_move.is_over() {
            self.wins += 1;
        }
    }
}

/// Count leaf actions `depth` plies below `game_state`. Finished games are
/// leaves with no children.
pub fn perft<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> GameResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(game_state)? {
        perft_recurse(generator, &mv, depth, 1, &mut total)?;
    }

    Ok(total)
}

fn perft_recurse<G: MoveGenerator>(
    generator: &G,
    mv: &GeneratedMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) -> GameResult<()> {
    if current_depth == search_depth {
        counts.record(mv);
        return Ok(());
    }

    for child in generator.generate_legal_moves(&mv.game_after_move)? {
        perft_recurse(generator, &child, search_depth, current_depth + 1, counts)?;
    }

    Ok(())
}
