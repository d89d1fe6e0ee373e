//! ASCII PLY output

mod vertex;
mod writer;

pub use vertex::Vertex;
pub use writer::{PlyOptions, PlyWriter};
