pub mod face;
pub mod point;
pub mod unpack;

pub use face::{Elevation, Face, FaceId, FaceProfile, MeshFaces, Vertex};
pub use point::{PlanarPoint, Point3d, round_to};
pub use unpack::unpack_faces;
