//! Terminal UI: the presentation layer that drives a [`GameEngine`] from key
//! presses and draws the board, whose turn it is and end-of-game messages.
//!
//! [`GameEngine`]: crate::game::GameEngine

mod app;
pub mod board_widget;
mod game_view;

pub use app::App;
