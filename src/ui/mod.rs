//! Terminal user interface: a setup form for the grid, a menu, and screens
//! for a single random walk and for browsing every valid path.

mod app;
pub mod grid_widget;
mod path_view;
mod setup_view;

pub use app::App;
