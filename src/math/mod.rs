pub mod bounds;
pub mod sample;

mod point;
mod ray;
mod vec;

pub use bounds::*;
pub use point::*;
pub use ray::*;
pub use sample::*;
pub use vec::*;
