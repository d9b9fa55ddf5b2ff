use bevy::prelude::*;

/// Fixed grade domain for the colour ramp (grams per tonne).
pub const MIN_GRADE: f64 = 0.0;
pub const MAX_GRADE: f64 = 40.0;

/// One stop of the grade colour ramp at normalised position `t`.
pub struct RampStop {
    pub t: f32,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Inverted heat scale: low grade reads "hot" (dark red/black rising
/// through red and yellow to near-white), high grade reads "cool"
/// (light blue at the top of the domain).
pub const RAMP_STOPS: &[RampStop] = &[
    RampStop { t: 0.0, r: 38, g: 0, b: 0 },
    RampStop { t: 0.25, r: 211, g: 33, b: 24 },
    RampStop { t: 0.5, r: 255, g: 235, b: 59 },
    RampStop { t: 0.75, r: 250, g: 250, b: 240 },
    RampStop { t: 1.0, r: 158, g: 203, b: 255 },
];

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Map a grade to linear RGB channels in 0..1, clamped at both ends of
/// the domain. Out-of-domain grades take the nearest endpoint colour.
pub fn ramp_rgb(grade: f64) -> [f32; 3] {
    let t = (((grade - MIN_GRADE) / (MAX_GRADE - MIN_GRADE)) as f32).clamp(0.0, 1.0);
    for pair in RAMP_STOPS.windows(2) {
        let (s1, s2) = (&pair[0], &pair[1]);
        if t <= s2.t {
            let p = (t - s1.t) / (s2.t - s1.t).max(1e-6);
            return [
                lerp(s1.r as f32, s2.r as f32, p) / 255.0,
                lerp(s1.g as f32, s2.g as f32, p) / 255.0,
                lerp(s1.b as f32, s2.b as f32, p) / 255.0,
            ];
        }
    }
    let last = &RAMP_STOPS[RAMP_STOPS.len() - 1];
    [
        last.r as f32 / 255.0,
        last.g as f32 / 255.0,
        last.b as f32 / 255.0,
    ]
}

/// Ramp colour as a Bevy colour for materials and UI swatches.
pub fn grade_colour(grade: f64) -> Color {
    let [r, g, b] = ramp_rgb(grade);
    Color::srgb(r, g, b)
}

/// Sample the ramp at `samples` regular intervals, top of the domain
/// first, for a vertical legend gradient.
pub fn legend_samples(samples: usize) -> Vec<Color> {
    (0..samples)
        .map(|i| {
            let t = 1.0 - i as f64 / (samples.max(2) - 1) as f64;
            grade_colour(t * MAX_GRADE)
        })
        .collect()
}
