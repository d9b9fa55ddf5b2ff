use constants::confidence::Confidence;

use crate::engine::assets::sample_set::SamplePoint;
use crate::engine::loading::columns::{
    FALLBACK_CONFIDENCE, FALLBACK_GRADE, FALLBACK_X, FALLBACK_Y, FALLBACK_Z, ResolvedColumns,
    resolve_columns,
};
use crate::engine::loading::table::ParsedTable;

fn field<'a>(
    row: &'a std::collections::HashMap<String, String>,
    resolved: &'a Option<String>,
    fallback: &str,
) -> Option<&'a str> {
    let name = resolved.as_deref().unwrap_or(fallback);
    row.get(name).map(String::as_str)
}

fn parse_finite(value: Option<&str>) -> Option<f64> {
    value?.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Convert parsed rows into validated sample points, preserving input
/// order. Rows where X, Y, Z, or grade fail to parse as finite numbers
/// are silently dropped. Confidence defaults to Indicated. Positive Z
/// values under an RL/elevation header are negated so that depth is
/// always non-positive.
pub fn normalise_rows(table: &ParsedTable, columns: &ResolvedColumns) -> Vec<SamplePoint> {
    let mut points = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let x = parse_finite(field(row, &columns.x, FALLBACK_X));
        let y = parse_finite(field(row, &columns.y, FALLBACK_Y));
        let z = parse_finite(field(row, &columns.z, FALLBACK_Z));
        let grade = parse_finite(field(row, &columns.grade, FALLBACK_GRADE));
        let (Some(x), Some(y), Some(mut z), Some(grade)) = (x, y, z, grade) else {
            continue;
        };
        if columns.z_is_elevation && z > 0.0 {
            z = -z;
        }
        let confidence = field(row, &columns.confidence, FALLBACK_CONFIDENCE)
            .filter(|v| !v.is_empty())
            .map(Confidence::from_label)
            .unwrap_or(Confidence::Indicated);
        points.push(SamplePoint {
            x,
            y,
            z,
            grade,
            confidence,
        });
    }
    points
}

/// Full ingestion path: parse, resolve columns, normalise.
pub fn ingest(text: &str) -> Vec<SamplePoint> {
    let table = crate::engine::loading::table::parse_table(text);
    let columns = resolve_columns(&table.headers);
    normalise_rows(&table, &columns)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_only_rows_with_finite_numeric_fields() {
        let csv = "X,Y,Z,AUGT,CONF\n\
                   1,2,-3,4,Measured\n\
                   bad,2,-3,4,Measured\n\
                   1,2,-3,,Measured\n\
                   5,6,-7,8,\n";
        let points = ingest(csv);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].confidence, Confidence::Measured);
        // Empty confidence falls back to Indicated.
        assert_eq!(points[1].confidence, Confidence::Indicated);
    }

    #[test]
    fn output_never_exceeds_input_rows() {
        let csv = "X,Y,Z,AUGT\n1,1,-1,1\n2,2,-2,2\n";
        assert_eq!(ingest(csv).len(), 2);
    }

    #[test]
    fn rl_header_negates_positive_depths() {
        let points = ingest("X,Y,RL,AUGT\n0,0,120,5\n0,0,-40,5\n");
        assert_eq!(points[0].z, -120.0);
        // Already-negative values are left alone.
        assert_eq!(points[1].z, -40.0);
    }

    #[test]
    fn plain_z_header_is_unchanged() {
        let points = ingest("X,Y,Z,AUGT\n0,0,120,5\n");
        assert_eq!(points[0].z, 120.0);
    }

    #[test]
    fn synonym_headers_resolve() {
        let points = ingest("Easting,Northing,Elevation,Grade,Class\n100,200,300,12.5,Inferred\n");
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].x, 100.0);
        assert_eq!(points[0].z, -300.0);
        assert_eq!(points[0].grade, 12.5);
        assert_eq!(points[0].confidence, Confidence::Inferred);
    }

    #[test]
    fn unresolvable_required_column_yields_empty() {
        assert!(ingest("foo,bar\n1,2\n").is_empty());
        assert!(ingest("").is_empty());
    }
}
