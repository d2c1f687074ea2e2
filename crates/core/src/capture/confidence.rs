/// Evidence-strength floor from the number of frames observed.
///
/// Monotone step function, deliberately independent of the cross-frame
/// variance: this answers "how much evidence did we have", while the
/// standard-deviation uncertainty answers "how much did it disagree".
/// Both are reported, never collapsed into one number.
pub fn confidence_from_frame_count(frame_count: usize) -> f64 {
    match frame_count {
        n if n >= 10 => 0.95,
        n if n >= 7 => 0.90,
        n if n >= 5 => 0.85,
        n if n >= 3 => 0.75,
        _ => 0.60,
    }
}
