pub mod clock;
pub mod constants;
pub mod controls;
pub mod physics;
pub mod schedule;
pub static BALL_WGSL: &str = include_str!("../shaders/ball.wgsl");

pub use clock::*;
pub use constants::*;
pub use controls::*;
pub use physics::*;
pub use schedule::*;
