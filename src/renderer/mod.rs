//! Rendering support
//!
//! The simulation never touches a drawing surface. This module turns a
//! session into a [`Scene`] and the scene into colored triangles that any
//! graphics backend can upload.

pub mod scene;
pub mod shapes;
pub mod vertex;

pub use scene::Scene;
pub use shapes::scene_vertices;
pub use vertex::Vertex;
