//! Splits an IPA word into phonemic units.
//!
//! Diacritics, length marks and tie-barred letters stay on the unit they
//! modify, tone letters group into one contour unit, and stress or linking
//! marks are dropped. Classification runs on the NFD form so precomposed
//! letters expose their diacritics; each unit is recomposed to NFC.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Letter,
    TieBar,
    Diacritic,
    Length,
    Tone,
    Suprasegmental,
    Other,
}

const TIE_BARS: [char; 2] = ['\u{0361}', '\u{035C}'];
const LENGTH_MARKS: [char; 2] = ['\u{02D0}', '\u{02D1}'];
// ˈ ˌ ‿
const SUPRASEGMENTALS: [char; 3] = ['\u{02C8}', '\u{02CC}', '\u{203F}'];

fn is_tone_letter(c: char) -> bool {
    matches!(c, '\u{02E5}'..='\u{02E9}' | '\u{A71B}' | '\u{A71C}')
}

/// Spacing modifier letters that act as diacritics (ʰ ʷ ʲ ˠ ˤ ʼ ˞ ⁿ ...).
fn is_modifier_diacritic(c: char) -> bool {
    matches!(
        c,
        '\u{02B0}'..='\u{02C1}'
            | '\u{02DE}'
            | '\u{02E0}'..='\u{02E4}'
            | '\u{1D2C}'..='\u{1D6A}'
            | '\u{1D9B}'..='\u{1DBF}'
            | '\u{2071}'
            | '\u{207F}'
            | '\u{2090}'..='\u{209C}'
    )
}

fn classify(c: char) -> CharClass {
    if TIE_BARS.contains(&c) {
        CharClass::TieBar
    } else if SUPRASEGMENTALS.contains(&c) {
        CharClass::Suprasegmental
    } else if LENGTH_MARKS.contains(&c) {
        CharClass::Length
    } else if is_tone_letter(c) {
        CharClass::Tone
    } else if is_combining_mark(c) || is_modifier_diacritic(c) {
        CharClass::Diacritic
    } else if c.is_alphabetic() {
        CharClass::Letter
    } else {
        CharClass::Other
    }
}

pub fn split_phonemes(word: &str) -> Vec<String> {
    let mut units: Vec<String> = Vec::new();
    let mut after_tie_bar = false;
    let mut last_was_tone = false;

    for c in word.nfd() {
        let class = classify(c);
        match class {
            CharClass::Letter if after_tie_bar => push_onto_last(&mut units, c),
            CharClass::Letter | CharClass::Other => units.push(c.to_string()),
            CharClass::TieBar | CharClass::Diacritic | CharClass::Length => {
                push_onto_last(&mut units, c)
            }
            CharClass::Tone if last_was_tone => push_onto_last(&mut units, c),
            CharClass::Tone => units.push(c.to_string()),
            CharClass::Suprasegmental => {}
        }
        if class != CharClass::Suprasegmental {
            after_tie_bar = class == CharClass::TieBar;
            last_was_tone = class == CharClass::Tone;
        }
    }

    units
        .into_iter()
        .map(|unit| unit.nfc().collect::<String>())
        .collect()
}

/// Appends to the previous unit, or starts one when the word opens with a
/// modifier.
fn push_onto_last(units: &mut Vec<String>, c: char) {
    match units.last_mut() {
        Some(last) => last.push(c),
        None => units.push(c.to_string()),
    }
}
