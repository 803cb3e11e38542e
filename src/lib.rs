//! Comanche-style "voxel space" terrain.
//!
//! A heightmap and a colour map are drawn in first person by marching depth
//! slices outward from the camera and projecting each sample to a screen
//! row; no 3-D geometry is built. See [`terrain`] for the algorithm.

pub mod app;
pub mod config;
pub mod math;
pub mod renderer;
pub mod sim;
pub mod terrain;
pub mod world;

pub use app::App;
pub use config::Config;
