pub mod camera;
pub mod color;
pub mod controller;
pub mod grid;
pub mod projector;
pub mod scene;
pub mod trail;

pub use camera::*;
pub use color::*;
pub use controller::*;
pub use grid::*;
pub use projector::*;
pub use scene::*;
pub use trail::*;
