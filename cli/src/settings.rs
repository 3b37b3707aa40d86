use core::time::Duration;
use memoreto_core::{Coord, GameConfig};

const BOARD_SIZE: Coord = 4;
const SYMBOL_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const REVEAL_DELAY: Duration = Duration::from_millis(600);
const COLOR_ENABLED: bool = true;

/// Compiled-in settings handed to the generator and the interaction loop at
/// startup. There is deliberately no process-wide mutable configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub config: GameConfig,
    /// How long a flipped selection stays visible before judgement.
    pub reveal_delay: Duration,
    pub color_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config: GameConfig::new(BOARD_SIZE, SYMBOL_ALPHABET),
            reveal_delay: REVEAL_DELAY,
            color_enabled: COLOR_ENABLED,
        }
    }
}
