//! CSV2PLY Data Crate
//!
//! Converts per-vertex CSV mesh dumps from graphics debuggers into ASCII PLY.
//! The pipeline is header resolution, row decoding, vertex deduplication and
//! PLY emission. This crate has no CLI or logging-subscriber concerns.

pub mod color;
pub mod convert;
pub mod decode;
pub mod error;
pub mod mesh;
pub mod ply;
pub mod schema;

pub use color::Color;
pub use convert::{ConvertOptions, ConvertSummary, DecodedMesh, convert, convert_files, decode_csv};
pub use decode::RowDecoder;
pub use error::ConvertError;
pub use mesh::VertexTable;
pub use ply::{PlyOptions, PlyWriter, Vertex};
pub use schema::{Layout, Schema};
