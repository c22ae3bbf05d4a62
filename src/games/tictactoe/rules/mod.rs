//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](super::Board). Nothing here holds
//! state, so the search can call them on its scratch board as often as it
//! likes.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::is_full;
pub use outcome::evaluate;
pub use win::{LINES, check_winner, completes_line};
