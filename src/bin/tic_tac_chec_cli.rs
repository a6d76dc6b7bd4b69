//! File-backed Tic-Tac-Chec, one move per invocation.
//!
//! Run with:
//! `cargo run --bin tic_tac_chec_cli -- start`
//! `cargo run --bin tic_tac_chec_cli -- --game-state /tmp/game.json move wp a3`
//! `cargo run --bin tic_tac_chec_cli -- --game-state /tmp/game.json show`

use std::io;
use std::path::PathBuf;

use tic_tac_chec::interface::cli_app::CliApp;
use tic_tac_chec::utils::render_game_state::RenderStyle;

struct CliArgs {
    game_state: Option<PathBuf>,
    render_style: RenderStyle,
    command: Vec<String>,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<CliArgs, String> {
    let mut parsed = CliArgs {
        game_state: None,
        render_style: RenderStyle::Codes,
        command: Vec::new(),
    };

    let mut args = args;
    while let Some(arg) = args.next() {
        if let Some(path) = arg.strip_prefix("--game-state=") {
            parsed.game_state = Some(PathBuf::from(path));
        } else if arg == "--game-state" {
            let path = args.next().ok_or("--game-state needs a path")?;
            parsed.game_state = Some(PathBuf::from(path));
        } else if arg == "--unicode" {
            parsed.render_style = RenderStyle::Unicode;
        } else {
            parsed.command.push(arg);
        }
    }

    Ok(parsed)
}

fn main() -> Result<(), String> {
    env_logger::init();

    let args = parse_args(std::env::args().skip(1))?;
    let mut app = CliApp::new(io::stdout()).with_render_style(args.render_style);
    let command: Vec<&str> = args.command.iter().map(String::as_str).collect();

    match command.as_slice() {
        ["start"] => {
            let path = app
                .start(args.game_state.as_deref())
                .map_err(|e| e.to_string())?;
            eprintln!("game state file: {}", path.display());
        }
        ["move", piece, square] => {
            let path = args.game_state.ok_or("move needs --game-state PATH")?;
            app.make_move(&path, piece, square)
                .map_err(|e| e.to_string())?;
        }
        ["show"] => {
            let path = args.game_state.ok_or("show needs --game-state PATH")?;
            app.show(&path).map_err(|e| e.to_string())?;
        }
        [] => print_usage(),
        _ => {
            println!("Invalid command");
            print_usage();
        }
    }

    Ok(())
}

fn print_usage() {
    println!("Usage:");
    println!("  tic_tac_chec_cli [--game-state PATH] start");
    println!("  tic_tac_chec_cli --game-state PATH move PIECE SQUARE");
    println!("  tic_tac_chec_cli --game-state PATH show");
    println!("Options:");
    println!("  --unicode   draw pieces with chess glyphs");
    println!("PIECE:");
    println!("  WP, wp - White Pawn");
    println!("  WR, wr - White Rook");
    println!("  WB, wb - White Bishop");
    println!("  WN, wn, WK, wk - White Knight");
    println!("  BP, bp - Black Pawn");
    println!("  BR, br - Black Rook");
    println!("  BB, bb - Black Bishop");
    println!("  BN, bn, BK, bk - Black Knight");
    println!("SQUARE:");
    println!("  a1 .. d4");
}
