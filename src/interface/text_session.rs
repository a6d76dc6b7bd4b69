//! Hot-seat text session over stdin/stdout.
//!
//! Both players share one terminal. Each line is either a move
//! (`<piece> <square>`, e.g. `wp a3`) for the side to move or a session
//! command. A rejected move prints the reason and prompts the same player
//! again; an accepted one prints the board and prompts the other player.

use std::io::{self, BufRead, Write};

use log::trace;

use crate::game_state::game_state::GameState;
use crate::game_state::tic_tac_chec_types::Color;
use crate::interface::session_config::SessionConfig;
use crate::move_generation::legal_move_generator::generate_legal_actions;
use crate::utils::move_command::{action_to_move_command, parse_move_command};
use crate::utils::render_game_state::render_game_state;

const MSG_WELCOME: &str = "Welcome to the Tic-Tac-Chec game!";
const MSG_HOW_TO_MOVE: &str = "Type a piece and a square separated by space, for example: wp a3";
const MSG_GAME_OVER: &str = "Game over";
const MSG_DIDNT_GET_YOU: &str = "Didn't get you!";

pub fn run_stdio_loop() -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut session = SessionState::new();

    session.greet(&mut stdout)?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        let should_quit = session.handle_command(&line, &mut stdout)?;
        stdout.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

pub struct SessionState {
    game_state: GameState,
    config: SessionConfig,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionState {
    pub fn new() -> Self {
        Self {
            game_state: GameState::new_game(),
            config: SessionConfig::default(),
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn greet(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "{}", MSG_WELCOME)?;
        writeln!(out, "{}", MSG_HOW_TO_MOVE)?;
        self.print_board(out)?;
        self.prompt(out)
    }

    /// Returns `true` when the session should end.
    pub fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }
        trace!("<< {}", trimmed);

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();

        match cmd.to_ascii_lowercase().as_str() {
            "quit" | "exit" => return Ok(true),
            "help" => print_help(out)?,
            "board" => {
                self.print_board(out)?;
                self.prompt(out)?;
            }
            "moves" => self.print_legal_moves(out)?,
            "new" => {
                self.game_state = GameState::new_game();
                self.print_board(out)?;
                self.prompt(out)?;
            }
            "set" => {
                let name = parts.next().unwrap_or_default();
                let value = parts.collect::<Vec<_>>().join(" ");
                match self.config.set_option(name, &value) {
                    Ok(()) => writeln!(out, "{} set to {}", name, value)?,
                    Err(err) => writeln!(out, "set error: {}", err)?,
                }
            }
            _ => self.handle_move(trimmed, out)?,
        }

        Ok(false)
    }

    fn handle_move(&mut self, line: &str, out: &mut impl Write) -> io::Result<()> {
        let (piece, cell) = match parse_move_command(line) {
            Ok(parsed) => parsed,
            Err(err) => {
                writeln!(out, "{} {}", MSG_DIDNT_GET_YOU, err)?;
                return self.prompt(out);
            }
        };

        if let Err(err) = self.game_state.make_move(piece, cell) {
            writeln!(out, "{}", err)?;
            return self.prompt(out);
        }

        self.print_board(out)?;
        self.prompt(out)
    }

    fn print_board(&self, out: &mut impl Write) -> io::Result<()> {
        if self.config.show_board {
            write!(
                out,
                "{}",
                render_game_state(&self.game_state, self.config.render_style)
            )?;
        }
        Ok(())
    }

    fn print_legal_moves(&self, out: &mut impl Write) -> io::Result<()> {
        let actions = match generate_legal_actions(&self.game_state) {
            Ok(actions) => actions,
            Err(err) => return writeln!(out, "moves error: {}", err),
        };

        let mut commands = Vec::with_capacity(actions.len());
        for action in &actions {
            match action_to_move_command(action) {
                Ok(command) => commands.push(command),
                Err(err) => return writeln!(out, "moves error: {}", err),
            }
        }

        if commands.is_empty() {
            writeln!(out, "no legal moves")
        } else {
            writeln!(out, "{}", commands.join(", "))
        }
    }

    fn prompt(&self, out: &mut impl Write) -> io::Result<()> {
        match self.game_state.winner() {
            Some(winner) if self.game_state.is_over() => {
                writeln!(out, "{}", MSG_GAME_OVER)?;
                writeln!(out, "{} won!", winner)
            }
            _ => writeln!(out, "{}", turn_prompt(self.game_state.turn())),
        }
    }
}

fn turn_prompt(color: Color) -> String {
    format!("It's your turn, {}", color)
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(
        out,
        "  <piece> <square>     move or place, e.g. wp a3, bn c2"
    )?;
    writeln!(out, "  board                print the board")?;
    writeln!(
        out,
        "  moves                list legal moves for the side to move"
    )?;
    writeln!(out, "  new                  start a new game")?;
    writeln!(
        out,
        "  set <name> <value>   {} (true|false), {} (codes|unicode)",
        SessionConfig::OPTION_NAMES[0],
        SessionConfig::OPTION_NAMES[1]
    )?;
    writeln!(out, "  quit                 leave the session")?;
    writeln!(
        out,
        "Pieces: WP WR WB WN BP BR BB BN (WK/BK also mean knight)"
    )?;
    writeln!(out, "Squares: a1 .. d4")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::tic_tac_chec_types::{Cell, Piece, PieceKind};
    use crate::utils::render_game_state::RenderStyle;

    fn run(session: &mut SessionState, line: &str) -> (bool, String) {
        let mut out = Vec::new();
        let quit = session
            .handle_command(line, &mut out)
            .expect("writing to a Vec cannot fail");
        (quit, String::from_utf8(out).expect("output is utf-8"))
    }

    #[test]
    fn greeting_shows_board_and_prompts_white() {
        let session = SessionState::new();
        let mut out = Vec::new();
        session.greet(&mut out).expect("greet");
        let text = String::from_utf8(out).expect("utf-8");

        assert!(text.starts_with(MSG_WELCOME));
        assert!(text.contains("White hand: WP WR WB WN"));
        assert!(text.ends_with("It's your turn, White\n"));
    }

    #[test]
    fn accepted_move_prompts_the_other_player() {
        let mut session = SessionState::new();
        let (quit, text) = run(&mut session, "wp a3");

        assert!(!quit);
        assert!(text.contains("3 WP .  .  .  3"));
        assert!(text.ends_with("It's your turn, Black\n"));
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        assert_eq!(
            session.game_state().location_of(pawn),
            Some(Cell::new(1, 0))
        );
    }

    #[test]
    fn rejected_move_reprompts_the_same_player() {
        let mut session = SessionState::new();

        let (_, text) = run(&mut session, "bp a3");
        assert_eq!(
            text,
            "it is not your turn, White is to move\nIt's your turn, White\n"
        );

        let (_, text) = run(&mut session, "wq a3");
        assert_eq!(
            text,
            "Didn't get you! invalid piece: wq\nIt's your turn, White\n"
        );

        let (_, text) = run(&mut session, "hello");
        assert!(text.starts_with(MSG_DIDNT_GET_YOU));
        assert_eq!(session.game_state(), &GameState::new_game());
    }

    #[test]
    fn win_is_announced() {
        let mut session = SessionState::new();
        run(&mut session, "set ShowBoard off");
        for line in ["wp a1", "bp a4", "wr b1", "br b4", "wb c1", "bb c4"] {
            let (_, text) = run(&mut session, line);
            assert!(text.starts_with("It's your turn"), "{line}: {text}");
        }

        let (_, text) = run(&mut session, "wn d1");
        assert_eq!(text, "Game over\nWhite won!\n");

        let (_, text) = run(&mut session, "bn d4");
        assert_eq!(text, "game is over\nGame over\nWhite won!\n");
    }

    #[test]
    fn session_commands() {
        let mut session = SessionState::new();

        let (_, text) = run(&mut session, "set RenderStyle unicode");
        assert_eq!(text, "RenderStyle set to unicode\n");
        assert_eq!(session.config().render_style, RenderStyle::Unicode);

        let (_, text) = run(&mut session, "set Colour blue");
        assert!(text.starts_with("set error: unknown option"));

        let (_, text) = run(&mut session, "moves");
        assert_eq!(text.split(", ").count(), 64);
        assert!(text.starts_with("WP a4, WP b4"));

        run(&mut session, "wr b2");
        let (_, text) = run(&mut session, "new");
        assert!(text.ends_with("It's your turn, White\n"));
        assert!(session.game_state().board().is_empty());

        let (_, text) = run(&mut session, "help");
        assert!(text.contains("ShowBoard"));

        let (quit, text) = run(&mut session, "quit");
        assert!(quit);
        assert!(text.is_empty());
    }
}
