//! Perfect-maze generation and step-by-step A* solving.
//!
//! The crate carves mazes with a randomized depth-first backtracker and solves them with an A*
//! search that advances one node expansion per call, so a display layer can inspect the frontier,
//! the closed set and the running statistics between any two steps. The [`app`] and [`config`]
//! modules wrap both halves into a small command-line driver.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

pub mod app;
pub mod config;
pub mod error;
pub mod file_loader;
pub mod generator;
pub mod grid;
pub mod pathfinding;
pub mod types;
pub mod view;

pub use crate::{
    app::App,
    error::MazeError,
    generator::{generate, generate_seeded},
    grid::Grid,
    pathfinding::{Pathfinder, SearchSnapshot, Statistics},
    types::{Cell, Difficulty, Position, SearchStatus},
};
