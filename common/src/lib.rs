mod config;
mod constants;
mod countdown;
mod cycle;
mod error;
mod game_state;
mod scoreboard;
mod seat;
mod session;
mod setup;
mod timer;
mod trail;

pub mod util;

pub use config::*;
pub use constants::*;
pub use countdown::*;
pub use cycle::*;
pub use error::*;
pub use game_state::*;
pub use scoreboard::*;
pub use seat::*;
pub use session::*;
pub use setup::*;
pub use timer::*;
pub use trail::*;
pub use util::PseudoRandom;
