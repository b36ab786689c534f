pub mod adapters;
mod circle;
pub mod curve;
mod line;
pub(crate) mod point;

pub use circle::Circle;
pub use curve::{evaluate_at, Bezier, ControlPoints, Curve, CurveDomain};
pub use line::Line;
pub use point::{
    PointLike, Vector2d, Vector2f, Vector2i, Vector2x, Vector3d, Vector3f, Vector3i, Vector3x,
};
