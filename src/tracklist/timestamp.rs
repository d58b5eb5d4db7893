/// Converts an "M:SS"/"MM:SS" timestamp into its total number of seconds.
///
/// Anything that does not split into exactly two integer components
/// normalizes to 0 instead of failing, so such entries sort to the front.
pub fn to_seconds(timestamp: &str) -> u32 {
    match parse_parts(timestamp) {
        Some((minutes, seconds)) => minutes * 60 + seconds,
        None => 0,
    }
}

/// Converts a timestamp into the "MM:SS:FF" form a CUE INDEX line expects.
///
/// The source format has no sub-second resolution, so frames are pinned to
/// 0. Unparsable timestamps become "00:00:00".
pub fn to_frames(timestamp: &str) -> String {
    let (minutes, seconds) = parse_parts(timestamp).unwrap_or((0, 0));
    format!("{minutes:02}:{seconds:02}:00")
}

fn parse_parts(timestamp: &str) -> Option<(u32, u32)> {
    let mut parts = timestamp.split(':');
    let minutes = parts.next()?.trim().parse().ok()?;
    let seconds = parts.next()?.trim().parse().ok()?;
    if parts.next().is_some() {
        return None;
    }

    Some((minutes, seconds))
}
