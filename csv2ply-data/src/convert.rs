//! End-to-end CSV to PLY conversion.

use crate::error::ConvertError;
use crate::decode::RowDecoder;
use crate::mesh::VertexTable;
use crate::ply::{PlyOptions, PlyWriter};
use crate::schema::{Layout, Schema};
use csv::{ReaderBuilder, StringRecord, Trim};
use glam::Vec3;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;
use tracing::{debug, info};

/// Settings for one conversion run.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConvertOptions {
    /// Added to every source position before axis conversion.
    pub offset: Vec3,
    /// Keep Y-up axes instead of converting to Z-up.
    pub y_up: bool,
    /// Write `1 - v` for texture coordinates.
    pub flip_v: bool,
}

impl ConvertOptions {
    fn ply_options(&self) -> PlyOptions {
        PlyOptions {
            y_up: self.y_up,
            flip_v: self.flip_v,
        }
    }
}

/// Counts reported after a successful conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    pub rows: usize,
    pub vertices: usize,
    pub faces: usize,
    /// Rows whose index repeated an earlier row.
    pub duplicate_rows: usize,
    /// Corners left over after grouping into triangles.
    pub dropped_corners: usize,
    pub layout: Layout,
}

/// A fully decoded CSV dump, ready to be written.
#[derive(Debug)]
pub struct DecodedMesh {
    pub schema: Schema,
    pub table: VertexTable,
    pub rows: usize,
    pub duplicate_rows: usize,
}

impl DecodedMesh {
    pub fn summary(&self) -> ConvertSummary {
        ConvertSummary {
            rows: self.rows,
            vertices: self.table.vertex_count(),
            faces: self.table.face_count(),
            duplicate_rows: self.duplicate_rows,
            dropped_corners: self.table.trailing_corners(),
            layout: self.schema.layout(),
        }
    }

    pub fn write_ply<W: Write>(&self, out: &mut W, options: &ConvertOptions) -> Result<(), ConvertError> {
        PlyWriter::new(self.schema.layout(), options.ply_options()).write(&self.table, out)?;
        Ok(())
    }
}

/// Read every CSV row into memory.
///
/// The header is resolved before the first data row is read, so a missing
/// required column fails without touching the data.
pub fn decode_csv<R: Read>(input: R, options: &ConvertOptions) -> Result<DecodedMesh, ConvertError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let names: Vec<&str> = headers.iter().collect();
    let schema = Schema::resolve(&names)?;

    let mut table = VertexTable::new();
    let decoder = RowDecoder::new(&schema, options.offset);
    let mut record = StringRecord::new();
    let mut rows = 0;
    let mut duplicate_rows = 0;

    while reader.read_record(&mut record)? {
        rows += 1;
        if !decoder.decode(&mut table, rows, &record)? {
            duplicate_rows += 1;
        }
    }

    debug!(
        "Decoded {} rows into {} unique vertices",
        rows,
        table.vertex_count()
    );

    Ok(DecodedMesh {
        schema,
        table,
        rows,
        duplicate_rows,
    })
}

/// Convert a CSV stream into a PLY stream.
///
/// All rows are decoded before the first byte is written to `output`.
pub fn convert<R: Read, W: Write>(
    input: R,
    mut output: W,
    options: &ConvertOptions,
) -> Result<ConvertSummary, ConvertError> {
    let mesh = decode_csv(input, options)?;
    mesh.write_ply(&mut output, options)?;
    output.flush()?;
    Ok(mesh.summary())
}

/// Convert `input` to `output` on disk.
///
/// The output file is only created once the whole input decoded cleanly.
#[tracing::instrument(skip_all, fields(input = %input.display(), output = %output.display()))]
pub fn convert_files(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<ConvertSummary, ConvertError> {
    debug!("Reading CSV mesh dump");
    let mesh = decode_csv(BufReader::new(File::open(input)?), options)?;

    let mut writer = BufWriter::new(File::create(output)?);
    mesh.write_ply(&mut writer, options)?;
    writer.flush()?;

    let summary = mesh.summary();
    info!(
        "PLY written: {} vertices, {} faces",
        summary.vertices, summary.faces
    );
    Ok(summary)
}
