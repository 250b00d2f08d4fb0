//! # Meander
//!
//! Random walks and exhaustive path enumeration across a 2-D grid, where a
//! path advances one column per step and may shift one row up or down.
//!
//! - [`grid`]: the cell grid with its fixed start and end points
//! - [`path`]: feasibility corridor, random walker, and exhaustive enumerator
//! - [`render`]: plain-text grid rendering
//! - [`config`]: TOML configuration loading
//! - [`ui`]: interactive terminal interface
//! - [`error`]: error types

pub mod config;
pub mod error;
pub mod grid;
pub mod path;
pub mod render;
pub mod ui;
