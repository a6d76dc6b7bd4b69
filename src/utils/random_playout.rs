//! Seeded random self-play.
//!
//! Picks uniformly among the legal actions of the side to move until the game
//! ends or the ply cap is reached. Runs are reproducible from the seed, which
//! makes them usable in invariant tests and benchmarks.

use log::trace;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game_errors::GameResult;
use crate::game_state::game_state::GameState;
use crate::game_state::tic_tac_chec_types::Color;
use crate::move_generation::legal_move_generator::generate_legal_actions;
use crate::move_generation::move_generator::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayoutConfig {
    pub max_plies: usize,
    pub seed: u64,
}

impl Default for PlayoutConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            seed: 0x7ac_c4ec,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayoutOutcome {
    Win(Color),
    /// The side to move had nothing legal to play.
    NoLegalActions,
    MaxPlies,
}

#[derive(Debug, Clone)]
pub struct PlayoutResult {
    pub outcome: PlayoutOutcome,
    pub final_state: GameState,
    pub actions: Vec<Action>,
}

pub fn play_random_game(config: &PlayoutConfig) -> GameResult<PlayoutResult> {
    play_random_game_from(GameState::new_game(), config)
}

pub fn play_random_game_from(
    mut game_state: GameState,
    config: &PlayoutConfig,
) -> GameResult<PlayoutResult> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut actions = Vec::new();

    let outcome = loop {
        if let Some(winner) = game_state.winner() {
            break PlayoutOutcome::Win(winner);
        }
        if actions.len() >= config.max_plies {
            break PlayoutOutcome::MaxPlies;
        }

        let legal = generate_legal_actions(&game_state)?;
        let Some(action) = legal.as_slice().choose(&mut rng).copied() else {
            break PlayoutOutcome::NoLegalActions;
        };

        trace!("ply {}: {}", actions.len() + 1, action);
        game_state.make_move(action.piece, action.to)?;
        actions.push(action);
    };

    Ok(PlayoutResult {
        outcome,
        final_state: game_state,
        actions,
    })
}
