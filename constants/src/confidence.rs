/// Geological confidence classification of a sample.
///
/// Ordering reflects certainty: Measured is the highest, Inferred the
/// lowest. The numeric codes are stable and shared with the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Confidence {
    Measured,
    Indicated,
    Inferred,
}

pub const CONFIDENCE_CLASSES: &[Confidence] = &[
    Confidence::Measured,
    Confidence::Indicated,
    Confidence::Inferred,
];

impl Confidence {
    /// Numeric code used in point attributes (Measured=0, Indicated=1, Inferred=2).
    pub fn code(self) -> u32 {
        match self {
            Confidence::Measured => 0,
            Confidence::Indicated => 1,
            Confidence::Inferred => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Confidence::Measured => "Measured",
            Confidence::Indicated => "Indicated",
            Confidence::Inferred => "Inferred",
        }
    }

    /// Parse a CSV cell value. Unknown or empty labels are treated as
    /// Indicated, matching the ingestion default.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "measured" => Confidence::Measured,
            "inferred" => Confidence::Inferred,
            _ => Confidence::Indicated,
        }
    }

    pub fn from_code(code: u32) -> Self {
        match code {
            0 => Confidence::Measured,
            2 => Confidence::Inferred,
            _ => Confidence::Indicated,
        }
    }
}
