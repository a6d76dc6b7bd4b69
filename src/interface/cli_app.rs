//! One-shot commands against a game stored in a JSON file.
//!
//! Every invocation loads the file, applies at most one move, writes it back
//! and prints the board, so a game can be played across separate processes.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use log::info;

use crate::game_errors::CliError;
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::algebraic_to_cell;
use crate::utils::game_snapshot::{read_game_file, write_game_file};
use crate::utils::piece_notation::piece_from_code;
use crate::utils::render_game_state::{render_game_state, RenderStyle};

const MAX_NAME_ATTEMPTS: u32 = 100;

pub struct CliApp<W: Write> {
    out: W,
    render_style: RenderStyle,
}

impl<W: Write> CliApp<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            render_style: RenderStyle::Codes,
        }
    }

    pub fn with_render_style(mut self, render_style: RenderStyle) -> Self {
        self.render_style = render_style;
        self
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write a fresh game to `game_file`, or to a new file in the temp
    /// directory when none is given. Returns the path used.
    pub fn start(&mut self, game_file: Option<&Path>) -> Result<PathBuf, CliError> {
        let path = match game_file {
            Some(path) => path.to_path_buf(),
            None => reserve_default_game_file()?,
        };

        let game = GameState::new_game();
        write_game_file(&path, &game)?;
        info!("started new game in {}", path.display());

        writeln!(self.out, "Game started, make your move")?;
        writeln!(
            self.out,
            "Example: tic_tac_chec_cli --game-state {} move wp a3",
            path.display()
        )?;
        self.print_game(&game)?;
        Ok(path)
    }

    pub fn make_move(
        &mut self,
        game_file: &Path,
        piece_arg: &str,
        square_arg: &str,
    ) -> Result<(), CliError> {
        let mut game = read_game_file(game_file)?;
        let piece = piece_from_code(piece_arg)?;
        let cell = algebraic_to_cell(square_arg)?;

        game.make_move(piece, cell)?;
        write_game_file(game_file, &game)?;

        writeln!(self.out, "Piece moved successfully")?;
        self.print_game(&game)
    }

    pub fn show(&mut self, game_file: &Path) -> Result<(), CliError> {
        let game = read_game_file(game_file)?;
        self.print_game(&game)
    }

    fn print_game(&mut self, game: &GameState) -> Result<(), CliError> {
        write!(self.out, "{}", render_game_state(game, self.render_style))?;
        Ok(())
    }
}

/// Claim an unused file name in the temp directory. The file is created
/// empty and left for the caller to fill.
fn reserve_default_game_file() -> io::Result<PathBuf> {
    let stamp = Utc::now().format("%Y%m%d-%H%M%S%.3f");
    let pid = std::process::id();
    let dir = std::env::temp_dir();

    for attempt in 0..MAX_NAME_ATTEMPTS {
        let name = format!("tic-tac-chec-game-state-{stamp}-{pid}-{attempt}.json");
        let path = dir.join(name);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => return Ok(path),
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => continue,
            Err(err) => return Err(err),
        }
    }

    let err = io::Error::new(io::ErrorKind::AlreadyExists, "no free game file name");
    Err(err)
}
