mod geometry_error;
mod geometry_input;
mod normalize_ops;
mod normalized_geometry;

pub use geometry_error::GeometryError;
pub use geometry_input::GeometryInput;
pub use normalize_ops::normalize;
pub use normalized_geometry::NormalizedGeometry;
