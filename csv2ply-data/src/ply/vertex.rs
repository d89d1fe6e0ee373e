//! PLY vertex data structures

use crate::color::Color;
use glam::{Vec2, Vec3};

/// One unique vertex decoded from the first CSV row carrying its index.
///
/// Positions hold the source (Y-up) convention with offsets already applied;
/// axis conversion happens only when the vertex is written.
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex {
    pub index: i32,
    pub position: Vec3,
    pub normal: Option<Vec3>,
    pub texcoord: Option<Vec2>,
    pub color: Option<Color>,
}

impl Vertex {
    /// Create a vertex with only a position.
    pub fn new(index: i32, position: Vec3) -> Self {
        Self {
            index,
            position,
            normal: None,
            texcoord: None,
            color: None,
        }
    }
}
