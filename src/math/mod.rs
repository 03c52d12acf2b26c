pub mod vec3;
pub mod matrix;
pub mod curve;
pub mod noise;
pub mod color;

pub use vec3::Vec3;
pub use matrix::Mat4;
pub use curve::{QuadraticBezier, cubic_bezier_2d};
pub use noise::{seeded_random, Seed};
pub use color::{hsl_to_rgb, parse_hex};
