use serde::{Deserialize, Serialize};
use slotmap::{SlotMap, new_key_type};

use super::point::{PlanarPoint, Point3d};
use crate::error::RowError;

new_key_type! {
    pub struct FaceId;
}

/// Vertex pairs tried, in order, when looking for a face's base edge.
const BASE_PAIRS: [(usize, usize); 3] = [(0, 1), (0, 2), (1, 2)];

/// A triangle corner as read from the position buffer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub position: Point3d,
    /// Offset of the x coordinate in the source buffer; y and z follow it.
    pub offset: usize,
}

/// A triangular face of a non-indexed mesh.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Face {
    /// Position of the face in the source buffer (face number, not offset).
    pub index: usize,
    pub vertices: [Vertex; 3],
}

/// Elevation statistics of a face. Faces with equal triples share a row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Elevation {
    /// Elevation shared by the two base vertices.
    pub base_y: f64,
    pub min_y: f64,
    pub max_y: f64,
}

/// Geometry derived from a face's base edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceProfile {
    /// The two vertices sharing the repeated elevation, in vertex order.
    pub base: [Point3d; 2],
    pub base_center: Point3d,
    pub elevation: Elevation,
}

impl Face {
    pub fn elevations(&self) -> [f64; 3] {
        self.vertices.map(|v| v.position.y)
    }

    /// Derive the base edge and elevation statistics of this face.
    ///
    /// The base edge is the first vertex pair (in vertex order) sharing an
    /// elevation. A face with three distinct elevations has no base edge.
    pub fn profile(&self) -> Result<FaceProfile, RowError> {
        let ys = self.elevations();
        let (a, b) = BASE_PAIRS
            .iter()
            .copied()
            .find(|&(i, j)| ys[i] == ys[j])
            .ok_or(RowError::MalformedGeometry {
                face_index: self.index,
                elevations: ys,
            })?;

        let base = [self.vertices[a].position, self.vertices[b].position];
        let elevation = Elevation {
            base_y: ys[a],
            min_y: ys.iter().copied().fold(f64::INFINITY, f64::min),
            max_y: ys.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        };

        Ok(FaceProfile {
            base,
            base_center: base[0].midpoint(&base[1]),
            elevation,
        })
    }

    /// Offsets of the x coordinate of each vertex.
    pub fn offsets(&self) -> [usize; 3] {
        self.vertices.map(|v| v.offset)
    }
}

impl FaceProfile {
    /// Length of the base edge projected onto the X/Z plane.
    pub fn base_length(&self) -> f64 {
        self.base[0].planar_distance_to(&self.base[1])
    }

    pub fn planar_center(&self) -> PlanarPoint {
        self.base_center.into()
    }
}

/// The faces of one mesh, in buffer order.
#[derive(Debug, Clone, Default)]
pub struct MeshFaces {
    pub faces: SlotMap<FaceId, Face>,
    order: Vec<FaceId>,
    vertex_count: usize,
}

impl MeshFaces {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            faces: SlotMap::with_capacity_and_key(face_count),
            order: Vec::with_capacity(face_count),
            vertex_count,
        }
    }

    pub fn insert(&mut self, face: Face) -> FaceId {
        let id = self.faces.insert(face);
        self.order.push(id);
        id
    }

    pub fn get(&self, id: FaceId) -> Option<&Face> {
        self.faces.get(id)
    }

    /// Faces in buffer order.
    pub fn iter(&self) -> impl Iterator<Item = (FaceId, &Face)> + '_ {
        self.order.iter().map(|&id| (id, &self.faces[id]))
    }

    pub fn face_count(&self) -> usize {
        self.order.len()
    }

    /// Number of vertices in the source buffer (three per face).
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn face(ys: [f64; 3]) -> Face {
        let xs = [0.0, 1.0, 0.0];
        let zs = [0.0, 0.0, 1.0];
        Face {
            index: 0,
            vertices: std::array::from_fn(|i| Vertex {
                position: Point3d::new(xs[i], ys[i], zs[i]),
                offset: i * 3,
            }),
        }
    }

    #[test]
    fn test_profile_picks_repeated_pair() {
        let p = face([1.0, 0.0, 1.0]).profile().unwrap();
        assert_eq!(p.elevation.base_y, 1.0);
        assert_eq!(p.elevation.min_y, 0.0);
        assert_eq!(p.elevation.max_y, 1.0);
        // Vertices 0 and 2 form the base.
        assert_eq!(p.base[0], Point3d::new(0.0, 1.0, 0.0));
        assert_eq!(p.base[1], Point3d::new(0.0, 1.0, 1.0));
        assert_eq!(p.base_center, Point3d::new(0.0, 1.0, 0.5));
    }

    #[test]
    fn test_flat_face_uses_first_pair() {
        let p = face([2.0, 2.0, 2.0]).profile().unwrap();
        assert_eq!(p.base[0], Point3d::new(0.0, 2.0, 0.0));
        assert_eq!(p.base[1], Point3d::new(1.0, 2.0, 0.0));
        assert_eq!(p.elevation.min_y, p.elevation.max_y);
    }

    #[test]
    fn test_distinct_elevations_are_malformed() {
        let err = face([0.0, 1.0, 2.0]).profile().unwrap_err();
        assert_eq!(
            err,
            RowError::MalformedGeometry {
                face_index: 0,
                elevations: [0.0, 1.0, 2.0],
            }
        );
    }

    #[test]
    fn test_base_length_is_planar() {
        // Base vertices (0,1,0) and (0,1,1) are one unit apart in X/Z.
        let p = face([1.0, 0.0, 1.0]).profile().unwrap();
        assert_relative_eq!(p.base_length(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_mesh_faces_keep_insertion_order() {
        let mut mesh = MeshFaces::with_capacity(6, 2);
        let mut second = face([0.0, 0.0, 1.0]);
        second.index = 1;
        let a = mesh.insert(face([1.0, 1.0, 0.0]));
        let b = mesh.insert(second);
        let ids: Vec<FaceId> = mesh.iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![a, b]);
        assert_eq!(mesh.face_count(), 2);
        assert_eq!(mesh.vertex_count(), 6);
    }
}
