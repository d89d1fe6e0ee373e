//! Vertex table accumulated while decoding a CSV dump.

use crate::ply::Vertex;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

/// Unique vertices keyed by source index, plus the face corner stream.
///
/// Every data row contributes one corner; only the first row for an index
/// contributes a vertex.
#[derive(Debug, Default)]
pub struct VertexTable {
    vertices: HashMap<i32, Vertex>,
    corners: Vec<i32>,
}

impl VertexTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_corner(&mut self, index: i32) {
        self.corners.push(index);
    }

    pub fn contains(&self, index: i32) -> bool {
        self.vertices.contains_key(&index)
    }

    /// Insert a vertex unless its index is already present.
    ///
    /// Returns `false` and keeps the existing record on a repeat.
    pub fn insert(&mut self, vertex: Vertex) -> bool {
        match self.vertices.entry(vertex.index) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(vertex);
                true
            }
        }
    }

    pub fn get(&self, index: i32) -> Option<&Vertex> {
        self.vertices.get(&index)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn corner_count(&self) -> usize {
        self.corners.len()
    }

    /// Number of whole triangles in the corner stream.
    pub fn face_count(&self) -> usize {
        self.corners.len() / 3
    }

    /// Corners left over after grouping into triangles. These are never written.
    pub fn trailing_corners(&self) -> usize {
        self.corners.len() % 3
    }

    pub fn corners(&self) -> &[i32] {
        &self.corners
    }

    /// Vertices in ascending source index order.
    pub fn sorted_vertices(&self) -> Vec<&Vertex> {
        let mut sorted: Vec<&Vertex> = self.vertices.values().collect();
        sorted.sort_unstable_by_key(|v| v.index);
        sorted
    }

    /// Triangles in input row order, referencing source indices.
    pub fn faces(&self) -> impl Iterator<Item = [i32; 3]> + '_ {
        self.corners
            .chunks_exact(3)
            .map(|chunk| [chunk[0], chunk[1], chunk[2]])
    }
}
