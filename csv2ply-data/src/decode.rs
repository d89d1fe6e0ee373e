//! Per-row decoding of CSV records into the vertex table.

use crate::color::Color;
use crate::error::ConvertError;
use crate::mesh::VertexTable;
use crate::ply::Vertex;
use crate::schema::{COLOR, INDEX, NORMAL, POSITION, Schema, TEXCOORD};
use csv::StringRecord;
use glam::{Vec2, Vec3};

/// Turns CSV records into vertices and face corners using a resolved schema.
#[derive(Debug, Clone, Copy)]
pub struct RowDecoder<'a> {
    schema: &'a Schema,
    offset: Vec3,
}

impl<'a> RowDecoder<'a> {
    /// `offset` is added to every position before any axis conversion.
    pub fn new(schema: &'a Schema, offset: Vec3) -> Self {
        Self { schema, offset }
    }

    /// Decode one data row. `row` is the 1-based data row number used in errors.
    ///
    /// The corner is always recorded. The rest of the row is only parsed when
    /// its index has not been seen before; returns whether a vertex was added.
    pub fn decode(
        &self,
        table: &mut VertexTable,
        row: usize,
        record: &StringRecord,
    ) -> Result<bool, ConvertError> {
        self.decode_inner(table, record).map_err(|e| e.at_row(row))
    }

    fn decode_inner(
        &self,
        table: &mut VertexTable,
        record: &StringRecord,
    ) -> Result<bool, ConvertError> {
        let schema = self.schema;
        let index = parse_int(field(record, schema.index, INDEX)?, INDEX)?;
        table.push_corner(index);

        if table.contains(index) {
            return Ok(false);
        }

        let position = Vec3::new(
            parse_float(field(record, schema.position[0], POSITION[0])?, POSITION[0])?,
            parse_float(field(record, schema.position[1], POSITION[1])?, POSITION[1])?,
            parse_float(field(record, schema.position[2], POSITION[2])?, POSITION[2])?,
        ) + self.offset;

        let mut vertex = Vertex::new(index, position);

        if let Some(cols) = schema.texcoord {
            vertex.texcoord = Some(Vec2::new(
                parse_float(field(record, cols.u, TEXCOORD[0])?, TEXCOORD[0])?,
                parse_float(field(record, cols.v, TEXCOORD[1])?, TEXCOORD[1])?,
            ));
        }

        if let Some(col) = schema.color {
            vertex.color = Some(Color::parse(field(record, col, COLOR)?)?);
        }

        if let Some(cols) = schema.normal {
            vertex.normal = Some(Vec3::new(
                parse_float(field(record, cols.x, NORMAL[0])?, NORMAL[0])?,
                parse_float(field(record, cols.y, NORMAL[1])?, NORMAL[1])?,
                parse_float(field(record, cols.z, NORMAL[2])?, NORMAL[2])?,
            ));
        }

        Ok(table.insert(vertex))
    }
}

fn field<'r>(record: &'r StringRecord, column: usize, name: &str) -> Result<&'r str, ConvertError> {
    record.get(column).ok_or_else(|| ConvertError::MissingField {
        row: 0,
        field: name.to_string(),
    })
}

/// Locale independent float parse.
fn parse_float(text: &str, name: &str) -> Result<f32, ConvertError> {
    text.trim()
        .parse::<f32>()
        .map_err(|_| ConvertError::InvalidFloat {
            row: 0,
            field: name.to_string(),
            value: text.to_string(),
        })
}

fn parse_int(text: &str, name: &str) -> Result<i32, ConvertError> {
    text.trim()
        .parse::<i32>()
        .map_err(|_| ConvertError::InvalidInteger {
            row: 0,
            field: name.to_string(),
            value: text.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_schema() -> Schema {
        Schema::resolve(&[
            "IDX",
            "Position[0]",
            "Position[1]",
            "Position[2]",
            "Normal[0]",
            "Normal[1]",
            "Normal[2]",
            "Texcoord0[0]",
            "Texcoord0[1]",
            "Diffuse",
        ])
        .unwrap()
    }

    fn record(fields: &[&str]) -> StringRecord {
        StringRecord::from(fields.to_vec())
    }

    #[test]
    fn test_decode_full_row() {
        let schema = full_schema();
        let decoder = RowDecoder::new(&schema, Vec3::new(1.0, 0.0, -1.0));
        let mut table = VertexTable::new();

        let added = decoder
            .decode(
                &mut table,
                1,
                &record(&["5", "1.5", "2", "3", "0", "1", "0", "0.25", "0.5", "(255, 1, 2, 3)"]),
            )
            .unwrap();

        assert!(added);
        let vertex = table.get(5).unwrap();
        assert_eq!(vertex.position, Vec3::new(2.5, 2.0, 2.0));
        assert_eq!(vertex.normal, Some(Vec3::Y));
        assert_eq!(vertex.texcoord, Some(Vec2::new(0.25, 0.5)));
        assert_eq!(vertex.color, Some(Color::new(1, 2, 3, 255)));
        assert_eq!(table.corners(), &[5]);
    }

    #[test]
    fn test_duplicate_index_only_adds_corner() {
        let schema = Schema::resolve(&["IDX", "Position[0]", "Position[1]", "Position[2]"]).unwrap();
        let decoder = RowDecoder::new(&schema, Vec3::ZERO);
        let mut table = VertexTable::new();

        assert!(decoder.decode(&mut table, 1, &record(&["0", "1", "1", "1"])).unwrap());
        // The repeat is not parsed at all, so garbage in it is never seen.
        assert!(!decoder.decode(&mut table, 2, &record(&["0", "junk", "9", "9"])).unwrap());

        assert_eq!(table.vertex_count(), 1);
        assert_eq!(table.get(0).unwrap().position, Vec3::ONE);
        assert_eq!(table.corners(), &[0, 0]);
    }

    #[test]
    fn test_bad_float_reports_field_and_row() {
        let schema = Schema::resolve(&["IDX", "Position[0]", "Position[1]", "Position[2]"]).unwrap();
        let decoder = RowDecoder::new(&schema, Vec3::ZERO);
        let mut table = VertexTable::new();

        match decoder.decode(&mut table, 7, &record(&["0", "abc", "1", "1"])) {
            Err(ConvertError::InvalidFloat { row, field, value }) => {
                assert_eq!(row, 7);
                assert_eq!(field, "Position[0]");
                assert_eq!(value, "abc");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_bad_index_is_fatal() {
        let schema = Schema::resolve(&["IDX", "Position[0]", "Position[1]", "Position[2]"]).unwrap();
        let decoder = RowDecoder::new(&schema, Vec3::ZERO);
        let mut table = VertexTable::new();

        assert!(matches!(
            decoder.decode(&mut table, 1, &record(&["1.5", "0", "0", "0"])),
            Err(ConvertError::InvalidInteger { row: 1, .. })
        ));
        assert_eq!(table.corner_count(), 0);
    }

    #[test]
    fn test_short_record_is_missing_field() {
        let schema = full_schema();
        let decoder = RowDecoder::new(&schema, Vec3::ZERO);
        let mut table = VertexTable::new();

        match decoder.decode(&mut table, 3, &record(&["0", "1", "2", "3"])) {
            Err(ConvertError::MissingField { row, field }) => {
                assert_eq!(row, 3);
                assert_eq!(field, "Texcoord0[0]");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn test_malformed_color_carries_row() {
        let schema = Schema::resolve(&["IDX", "Position[0]", "Position[1]", "Position[2]", "Diffuse"])
            .unwrap();
        let decoder = RowDecoder::new(&schema, Vec3::ZERO);
        let mut table = VertexTable::new();

        assert!(matches!(
            decoder.decode(&mut table, 4, &record(&["0", "0", "0", "0", "red"])),
            Err(ConvertError::MalformedColor { row: 4, .. })
        ));
    }
}
