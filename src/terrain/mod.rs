//! Voxel-space terrain pass.
//!
//! The heightmap is marched in depth slices from the camera outward. Each
//! slice is a line segment across the view; every screen column samples the
//! heightmap at its point on that segment, projects the height to a screen
//! row and draws the part of the column not already covered by nearer
//! slices. A per-column occlusion buffer holds the topmost row drawn so far.

mod depth;
mod rasterizer;

pub use depth::{DepthStep, Slice};
pub use rasterizer::{FrameStats, Rasterizer, Scene};
