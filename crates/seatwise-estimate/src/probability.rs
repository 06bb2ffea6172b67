//! Admission probability interpolation.

/// Computes the admission probability, in percent, for a candidate rank
/// against a historical admission band.
///
/// Ranks at or better than the opening rank are certain admissions; ranks
/// at or beyond the closing rank are misses. In between, the probability
/// falls linearly across the band:
///
/// ```text
/// probability = 100 × (closing − rank) / (closing − opening)
/// ```
///
/// A band with equal bounds degenerates to a step function. When either
/// bound is unrecorded the seat pool cannot be scored and the probability
/// is 0.
#[must_use]
pub fn admission_probability(rank: u32, opening: Option<f64>, closing: Option<f64>) -> f64 {
    let (Some(opening), Some(closing)) = (opening, closing) else {
        return 0.0;
    };
    let rank = f64::from(rank);

    if opening == closing {
        return if rank <= opening { 100.0 } else { 0.0 };
    }
    if rank <= opening {
        return 100.0;
    }
    if rank >= closing {
        return 0.0;
    }

    let fraction = (closing - rank) / (closing - opening);
    fraction.clamp(0.0, 1.0) * 100.0
}
