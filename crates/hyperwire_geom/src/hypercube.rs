//! Canonical hypercube (tesseract) geometry
//!
//! A tesseract has 16 vertices (all combinations of ±1 for x,y,z,w) and
//! 32 edges. Two vertices share an edge iff they differ in exactly one
//! coordinate, which with the bit-pattern vertex layout is a single
//! `count_ones` check on the XOR of the indices.

use crate::Vec4;

/// Number of vertices of a tesseract
pub const VERTEX_COUNT: usize = 16;

/// Number of edges of a tesseract
pub const EDGE_COUNT: usize = 32;

/// The canonical reference tesseract: 16 immutable vertices with every
/// coordinate at ±1, plus the derived edge list.
///
/// Vertex i has coordinates based on the bits of i: bit 0 selects the sign
/// of x, bit 1 of y, bit 2 of z, bit 3 of w (set bit = +1).
#[derive(Clone)]
pub struct Hypercube {
    vertices: [Vec4; VERTEX_COUNT],
    edges: [(usize, usize); EDGE_COUNT],
}

impl Hypercube {
    /// Create the unit tesseract centered at the origin
    pub fn new() -> Self {
        let vertices = std::array::from_fn(|i| {
            let sign = |bit: usize| if i >> bit & 1 == 1 { 1.0 } else { -1.0 };
            Vec4::new(sign(0), sign(1), sign(2), sign(3))
        });

        // Derive the edge list once; it depends only on the index pattern.
        let mut edges = [(0usize, 0usize); EDGE_COUNT];
        let mut n = 0;
        for i in 0..VERTEX_COUNT {
            for j in (i + 1)..VERTEX_COUNT {
                if Self::is_edge(i, j) {
                    edges[n] = (i, j);
                    n += 1;
                }
            }
        }
        debug_assert_eq!(n, EDGE_COUNT);

        Self { vertices, edges }
    }

    /// True iff vertices i and j differ in exactly one coordinate
    /// (Hamming distance 1 on the sign pattern)
    #[inline]
    pub fn is_edge(i: usize, j: usize) -> bool {
        (i ^ j).count_ones() == 1
    }

    /// The 16 canonical vertices
    #[inline]
    pub fn vertices(&self) -> &[Vec4; VERTEX_COUNT] {
        &self.vertices
    }

    /// The 32 edges as unordered index pairs with i < j
    #[inline]
    pub fn edges(&self) -> &[(usize, usize); EDGE_COUNT] {
        &self.edges
    }
}

impl Default for Hypercube {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_vertex_count() {
        let cube = Hypercube::new();
        assert_eq!(cube.vertices().len(), 16);
    }

    #[test]
    fn test_vertices_are_unit_corners() {
        let cube = Hypercube::new();
        for v in cube.vertices() {
            for c in [v.x, v.y, v.z, v.w] {
                assert!(c == 1.0 || c == -1.0, "coordinate {} is not ±1", c);
            }
        }
    }

    #[test]
    fn test_all_sign_combinations_present_once() {
        let cube = Hypercube::new();
        let mut seen = HashSet::new();
        for v in cube.vertices() {
            let key = (v.x > 0.0, v.y > 0.0, v.z > 0.0, v.w > 0.0);
            assert!(seen.insert(key), "duplicate sign combination {:?}", key);
        }
        assert_eq!(seen.len(), 16);
    }

    #[test]
    fn test_edge_count() {
        let cube = Hypercube::new();
        assert_eq!(cube.edges().len(), 32);
    }

    #[test]
    fn test_edges_differ_in_one_coordinate() {
        let cube = Hypercube::new();
        for &(i, j) in cube.edges() {
            let a = cube.vertices()[i];
            let b = cube.vertices()[j];
            let diff = (a.x != b.x) as u32
                + (a.y != b.y) as u32
                + (a.z != b.z) as u32
                + (a.w != b.w) as u32;
            assert_eq!(diff, 1, "edge ({}, {}) differs in {} coordinates", i, j, diff);
        }
    }

    #[test]
    fn test_every_vertex_has_degree_four() {
        let cube = Hypercube::new();
        let mut degree = [0usize; VERTEX_COUNT];
        for &(i, j) in cube.edges() {
            degree[i] += 1;
            degree[j] += 1;
        }
        for (i, d) in degree.iter().enumerate() {
            assert_eq!(*d, 4, "vertex {} has degree {}", i, d);
        }
    }

    #[test]
    fn test_is_edge_matches_coordinate_comparison() {
        let cube = Hypercube::new();
        for i in 0..VERTEX_COUNT {
            for j in (i + 1)..VERTEX_COUNT {
                let a = cube.vertices()[i];
                let b = cube.vertices()[j];
                let diff = (a.x != b.x) as u32
                    + (a.y != b.y) as u32
                    + (a.z != b.z) as u32
                    + (a.w != b.w) as u32;
                assert_eq!(Hypercube::is_edge(i, j), diff == 1);
            }
        }
    }
}
