mod camera;
mod texture;

pub use camera::{Camera, Smoothing};

pub use texture::{Texture, TextureLoadError};
