/// Formats an elapsed playback position as `M:SS`.
///
/// Minutes carry no leading zero; seconds are zero-padded to two digits.
/// Callers guarantee a non-negative finite input (media positions are clamped
/// to >= 0 at the source).
#[must_use]
pub fn format_timestamp(elapsed_seconds: f64) -> String {
    let whole = elapsed_seconds.floor() as u64;
    let minutes = whole / 60;
    let seconds = whole % 60;
    format!("{minutes}:{seconds:02}")
}
