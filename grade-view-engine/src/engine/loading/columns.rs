/// Priority-ordered header synonyms per semantic field. The first
/// synonym present in the header list wins.
const X_SYNONYMS: &[&str] = &["x", "easting", "xutm", "lon", "long"];
const Y_SYNONYMS: &[&str] = &["y", "northing", "yutm", "lat"];
const Z_SYNONYMS: &[&str] = &["z", "depth", "rl", "elevation"];
const GRADE_SYNONYMS: &[&str] = &["augt", "grade", "au", "gpt", "g/t", "gt", "au_gpt"];
const CONFIDENCE_SYNONYMS: &[&str] = &["conf", "confidence", "class"];

/// Fallback header names used when a field cannot be resolved; row
/// lookups against these simply miss and the rows get dropped.
pub const FALLBACK_X: &str = "X";
pub const FALLBACK_Y: &str = "Y";
pub const FALLBACK_Z: &str = "Z";
pub const FALLBACK_GRADE: &str = "AUGT";
pub const FALLBACK_CONFIDENCE: &str = "CONF";

/// Header names (original spelling) resolved for the five semantic
/// fields, plus whether Z came from an RL/elevation style header.
#[derive(Debug, Clone)]
pub struct ResolvedColumns {
    pub x: Option<String>,
    pub y: Option<String>,
    pub z: Option<String>,
    pub grade: Option<String>,
    pub confidence: Option<String>,
    /// True when the Z column resolved from an `rl` or `elevation`
    /// header, which flips positive Z values to depths during
    /// normalisation.
    pub z_is_elevation: bool,
}

fn pick(headers: &[String], lowered: &[String], synonyms: &[&str]) -> Option<String> {
    for candidate in synonyms {
        if let Some(i) = lowered.iter().position(|h| h == candidate) {
            return Some(headers[i].clone());
        }
    }
    None
}

/// Map arbitrary header spellings onto the semantic fields via
/// case-insensitive first-match resolution.
pub fn resolve_columns(headers: &[String]) -> ResolvedColumns {
    let lowered: Vec<String> = headers.iter().map(|h| h.to_lowercase()).collect();
    let z = pick(headers, &lowered, Z_SYNONYMS);
    let z_is_elevation = z
        .as_deref()
        .map(|h| {
            let h = h.to_lowercase();
            h == "rl" || h == "elevation"
        })
        .unwrap_or(false);
    ResolvedColumns {
        x: pick(headers, &lowered, X_SYNONYMS),
        y: pick(headers, &lowered, Y_SYNONYMS),
        z,
        grade: pick(headers, &lowered, GRADE_SYNONYMS),
        confidence: pick(headers, &lowered, CONFIDENCE_SYNONYMS),
        z_is_elevation,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolves_case_insensitively_with_original_spelling() {
        let cols = resolve_columns(&headers(&["Easting", "NORTHING", "Depth", "AuGt", "Class"]));
        assert_eq!(cols.x.as_deref(), Some("Easting"));
        assert_eq!(cols.y.as_deref(), Some("NORTHING"));
        assert_eq!(cols.z.as_deref(), Some("Depth"));
        assert_eq!(cols.grade.as_deref(), Some("AuGt"));
        assert_eq!(cols.confidence.as_deref(), Some("Class"));
        assert!(!cols.z_is_elevation);
    }

    #[test]
    fn first_synonym_in_priority_order_wins() {
        // Both "z" and "rl" are present; "z" is listed first, so the
        // resolved column is not elevation-flavoured.
        let cols = resolve_columns(&headers(&["RL", "Z"]));
        assert_eq!(cols.z.as_deref(), Some("Z"));
        assert!(!cols.z_is_elevation);
    }

    #[test]
    fn unresolved_fields_are_none() {
        let cols = resolve_columns(&headers(&["foo", "bar"]));
        assert!(cols.x.is_none());
        assert!(cols.grade.is_none());
        assert!(!cols.z_is_elevation);
    }

    #[test]
    fn elevation_header_sets_flag() {
        let cols = resolve_columns(&headers(&["X", "Y", "Elevation", "Grade"]));
        assert_eq!(cols.z.as_deref(), Some("Elevation"));
        assert!(cols.z_is_elevation);
    }
}
