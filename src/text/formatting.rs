use crate::types::Segment;

pub const WORD_BOUNDARY: &str = "#";

/// Renders segments as `{unit unit # unit ...}`.
///
/// Word segments expand through `split_word`; each ASCII space becomes the
/// `#` marker, other whitespace is dropped, and any other non-word character
/// is emitted as-is. Units are
/// joined by single spaces, which gives the first segment no leading space
/// and never produces doubled spaces between punctuation and a marker.
pub fn render_segments<F>(segments: &[Segment], mut split_word: F) -> String
where
    F: FnMut(&str) -> Vec<String>,
{
    let mut units: Vec<String> = Vec::new();
    for segment in segments {
        if segment.is_word {
            units.extend(split_word(&segment.text));
            continue;
        }
        for c in segment.text.chars() {
            if c == ' ' {
                units.push(WORD_BOUNDARY.to_string());
            } else {
                units.push(c.to_string());
            }
        }
    }

    let body = units
        .iter()
        .map(|unit| unit.trim())
        .filter(|unit| !unit.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    format!("{{{body}}}")
}
