//! Options for the interactive session, set with `set <Name> <value>`.

use crate::utils::render_game_state::RenderStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Print the board after every accepted move.
    pub show_board: bool,
    pub render_style: RenderStyle,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            show_board: true,
            render_style: RenderStyle::Codes,
        }
    }
}

impl SessionConfig {
    pub const OPTION_NAMES: [&'static str; 2] = ["ShowBoard", "RenderStyle"];

    pub fn set_option(&mut self, name: &str, value: &str) -> Result<(), String> {
        if name.eq_ignore_ascii_case("ShowBoard") {
            self.show_board = parse_flag(value)
                .ok_or_else(|| format!("invalid ShowBoard value '{}'", value))?;
        } else if name.eq_ignore_ascii_case("RenderStyle") {
            self.render_style = RenderStyle::from_name(value)
                .ok_or_else(|| format!("invalid RenderStyle value '{}'", value))?;
        } else {
            return Err(format!("unknown option '{}'", name));
        }

        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
