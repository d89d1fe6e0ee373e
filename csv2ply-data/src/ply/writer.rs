//! ASCII PLY writer for a decoded vertex table.

use crate::mesh::VertexTable;
use crate::ply::Vertex;
use crate::schema::Layout;
use glam::Vec3;
use std::io::{self, Write};
use tracing::{debug, warn};

/// Output coordinate options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlyOptions {
    /// Keep the source Y-up axes instead of converting to Z-up.
    pub y_up: bool,
    /// Write `1 - v` for the second texture coordinate.
    pub flip_v: bool,
}

/// Writes a [`VertexTable`] as an ASCII PLY document.
///
/// The property set is fixed by the [`Layout`]; every vertex line carries the
/// same columns, with absent attributes written as zero.
#[derive(Debug, Clone, Copy)]
pub struct PlyWriter {
    layout: Layout,
    options: PlyOptions,
}

impl PlyWriter {
    pub fn new(layout: Layout, options: PlyOptions) -> Self {
        Self { layout, options }
    }

    pub fn write<W: Write>(&self, table: &VertexTable, out: &mut W) -> io::Result<()> {
        let vertices = table.sorted_vertices();

        if table.trailing_corners() > 0 {
            warn!(
                "{} face corners do not form a complete triangle and were dropped",
                table.trailing_corners()
            );
        }

        self.write_header(out, vertices.len(), table.face_count())?;
        for vertex in &vertices {
            self.write_vertex(out, vertex)?;
        }
        for [a, b, c] in table.faces() {
            writeln!(out, "3 {a} {b} {c}")?;
        }

        debug!(
            "Wrote PLY: {} vertices, {} faces",
            vertices.len(),
            table.face_count()
        );
        Ok(())
    }

    fn write_header<W: Write>(&self, out: &mut W, vertices: usize, faces: usize) -> io::Result<()> {
        writeln!(out, "ply")?;
        writeln!(out, "format ascii 1.0")?;
        writeln!(out, "element vertex {vertices}")?;
        writeln!(out, "property float x")?;
        writeln!(out, "property float y")?;
        writeln!(out, "property float z")?;
        if self.layout.normal {
            writeln!(out, "property float nx")?;
            writeln!(out, "property float ny")?;
            writeln!(out, "property float nz")?;
        }
        if self.layout.color {
            writeln!(out, "property uchar red")?;
            writeln!(out, "property uchar green")?;
            writeln!(out, "property uchar blue")?;
            writeln!(out, "property uchar alpha")?;
        }
        if self.layout.texcoord {
            writeln!(out, "property float s")?;
            writeln!(out, "property float t")?;
        }
        writeln!(out, "element face {faces}")?;
        writeln!(out, "property list uchar int vertex_indices")?;
        writeln!(out, "end_header")
    }

    fn write_vertex<W: Write>(&self, out: &mut W, vertex: &Vertex) -> io::Result<()> {
        let p = self.to_output_axes(vertex.position);
        write!(out, "{} {} {}", p.x, p.y, p.z)?;

        if self.layout.normal {
            let n = self.to_output_axes(vertex.normal.unwrap_or_default());
            write!(out, " {} {} {}", n.x, n.y, n.z)?;
        }
        if self.layout.color {
            let c = vertex.color.unwrap_or_default();
            write!(out, " {} {} {} {}", c.red, c.green, c.blue, c.alpha)?;
        }
        if self.layout.texcoord {
            let uv = vertex.texcoord.unwrap_or_default();
            let v = if self.options.flip_v { 1.0 - uv.y } else { uv.y };
            write!(out, " {} {}", uv.x, v)?;
        }
        writeln!(out)
    }

    /// Y-up source axes to Z-up output axes: (x, y, z) -> (x, z, -y).
    ///
    /// Adding zero turns a negated `0` back into `0` so it is not written as `-0`.
    fn to_output_axes(&self, v: Vec3) -> Vec3 {
        if self.options.y_up {
            v
        } else {
            Vec3::new(v.x, v.z, -v.y) + 0.0
        }
    }
}
