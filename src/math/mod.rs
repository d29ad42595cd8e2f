pub mod polygon_2d;
pub mod polygon_3d;
pub mod triangle;

pub use polygon_2d::{perimeter_2d, signed_area_2d};
pub use polygon_3d::{
    is_coplanar, polygon_area_3d, polygon_normal, polygon_perimeter, vector_area, PlaneFrame,
};
pub use triangle::{
    face_tetra_volume, quad_area, signed_tetrahedron_volume, tetrahedron_volume, triangle_area,
};

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// 4x4 transformation matrix.
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
