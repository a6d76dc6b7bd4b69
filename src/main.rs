//! Hot-seat Tic-Tac-Chec on stdin/stdout.
//!
//! Run with:
//! `cargo run --release`
//! `RUST_LOG=debug cargo run --release`

use tic_tac_chec::interface::text_session::run_stdio_loop;

fn main() -> Result<(), String> {
    env_logger::init();
    run_stdio_loop().map_err(|e| e.to_string())
}
