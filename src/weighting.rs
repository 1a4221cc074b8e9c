//! Distance weighting over shifts.
//!
//! Cost evolution spreads the "fatigue" of a worked shift to temporally
//! nearby shifts. The spread follows a symmetric polynomial decay
//! anchored at the worked (reference) shift:
//!
//! ```text
//! weight(r, s) = (1 - |r - s| / horizon)^exponent
//! ```
//!
//! The weight is 1 at the reference shift and falls monotonically with
//! distance. A profile depends on its reference shift and must be
//! recomputed per reference, never shared between them.

/// Decay weight of `shift` relative to `reference` over a day of
/// `horizon` shifts.
///
/// Symmetric in the distance and equal to 1 exactly when
/// `shift == reference`. `exponent` sharpens the decay (observed
/// values are 2 and 3).
pub fn distance_weight(reference: usize, shift: usize, horizon: usize, exponent: u32) -> f64 {
    debug_assert!(horizon > 0);
    debug_assert!(reference < horizon && shift < horizon);
    let delta = reference.abs_diff(shift) as f64;
    (1.0 - delta / horizon as f64).powi(exponent as i32)
}

/// Decay weights for every shift of the day, anchored at one reference
/// shift.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceProfile {
    reference: usize,
    weights: Vec<f64>,
}

impl DistanceProfile {
    /// Computes the profile around `reference` for a day of `horizon`
    /// shifts.
    pub fn around(reference: usize, horizon: usize, exponent: u32) -> Self {
        Self {
            reference,
            weights: (0..horizon)
                .map(|s| distance_weight(reference, s, horizon, exponent))
                .collect(),
        }
    }

    /// The reference shift this profile is anchored at.
    pub fn reference(&self) -> usize {
        self.reference
    }

    /// Weight of a shift under this profile.
    #[inline]
    pub fn weight(&self, shift: usize) -> f64 {
        self.weights[shift]
    }

    /// Number of shifts covered.
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether the profile covers no shifts.
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
