mod input;
mod tic;

pub use input::Keys;
pub use tic::{DT, FrameClock, SIM_FPS};
