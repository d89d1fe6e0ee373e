//! Column resolution for the CSV header row.
//!
//! The header is inspected exactly once. The resulting [`Schema`] is immutable
//! and decides, for the whole run, which optional vertex attributes exist.

use crate::error::ConvertError;
use tracing::{debug, warn};

pub const INDEX: &str = "IDX";
pub const POSITION: [&str; 3] = ["Position[0]", "Position[1]", "Position[2]"];
pub const NORMAL: [&str; 3] = ["Normal[0]", "Normal[1]", "Normal[2]"];
pub const TEXCOORD: [&str; 2] = ["Texcoord0[0]", "Texcoord0[1]"];
pub const SECONDARY_TEXCOORD: &str = "Texcoord1[0]";
pub const COLOR: &str = "Diffuse";

/// Find a column by name, ignoring ASCII case.
///
/// Returns the first matching position, or `None` when the column is absent.
pub fn find_column<S: AsRef<str>>(headers: &[S], name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.as_ref().eq_ignore_ascii_case(name))
}

/// Find a column whose absence is fatal.
pub fn require_column<S: AsRef<str>>(headers: &[S], name: &str) -> Result<usize, ConvertError> {
    find_column(headers, name).ok_or_else(|| ConvertError::MissingColumn {
        name: name.to_string(),
    })
}

/// Column positions of the three normal components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalColumns {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

/// Column positions of the first texture coordinate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TexcoordColumns {
    pub u: usize,
    pub v: usize,
}

/// Which optional attribute groups the output carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Layout {
    pub normal: bool,
    pub color: bool,
    pub texcoord: bool,
}

/// Resolved column positions for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    pub index: usize,
    pub position: [usize; 3],
    pub normal: Option<NormalColumns>,
    pub texcoord: Option<TexcoordColumns>,
    pub color: Option<usize>,
    /// A second UV set was present. It is reported and never read.
    pub has_secondary_texcoord: bool,
}

impl Schema {
    /// Resolve every known column from the header row.
    ///
    /// Fails on the first missing required column. An optional group is keyed
    /// on its first column; once that resolves, the rest of the group is
    /// required.
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> Result<Self, ConvertError> {
        let index = require_column(headers, INDEX)?;
        let position = [
            require_column(headers, POSITION[0])?,
            require_column(headers, POSITION[1])?,
            require_column(headers, POSITION[2])?,
        ];

        let normal = match find_column(headers, NORMAL[0]) {
            Some(x) => Some(NormalColumns {
                x,
                y: require_column(headers, NORMAL[1])?,
                z: require_column(headers, NORMAL[2])?,
            }),
            None => None,
        };

        let texcoord = match find_column(headers, TEXCOORD[0]) {
            Some(u) => Some(TexcoordColumns {
                u,
                v: require_column(headers, TEXCOORD[1])?,
            }),
            None => None,
        };

        let color = find_column(headers, COLOR);

        let has_secondary_texcoord = find_column(headers, SECONDARY_TEXCOORD).is_some();
        if has_secondary_texcoord {
            warn!("Multiple texture coordinate sets found; only Texcoord0 will be exported");
        }

        let schema = Self {
            index,
            position,
            normal,
            texcoord,
            color,
            has_secondary_texcoord,
        };
        debug!("Resolved CSV schema: {:?}", schema.layout());
        Ok(schema)
    }

    pub fn layout(&self) -> Layout {
        Layout {
            normal: self.normal.is_some(),
            color: self.color.is_some(),
            texcoord: self.texcoord.is_some(),
        }
    }
}
