//! # Connect Four
//!
//! A two-player Connect Four game engine with a terminal front end built with
//! Ratatui. The engine knows nothing about rendering: a presentation layer
//! calls [`game::GameEngine::drop_piece`] and draws whatever it returns.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, engine state machine
//! - [`ui`] — Terminal UI: board view, key handling, end-of-game messages
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
