//! Sentence and word segmentation.
//!
//! Segmentation is rule-based and deterministic: no trained models, no
//! locale data beyond a short English abbreviation table. It is tuned for
//! the already-cleaned article text produced by [`crate::clean`], where
//! whitespace runs are collapsed and markup is gone.

/// Words that commonly precede a period without ending a sentence.
const ABBREVIATIONS: &[&str] = &[
    // titles
    "mr", "mrs", "ms", "dr", "prof", "rev", "gen", "col", "sgt", "capt", "sr", "jr", "st",
    // common latinisms and file/figure refs
    "vs", "etc", "fig", "ca", "al",
    // organizations
    "inc", "ltd", "co", "corp", "dept",
];

/// Split cleaned text into trimmed sentence slices, in order of appearance.
///
/// A sentence ends at a run of `.`, `!`, or `?` (plus any closing quotes or
/// brackets) followed by whitespace. A period run is not a boundary when the
/// word before it is a known abbreviation or a single capital letter (an
/// initial), or when the next word does not begin with an uppercase letter,
/// a digit, or an opening quote or bracket. Trailing text without a
/// terminator becomes the final sentence; empty segments are dropped.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut iter = text.char_indices().peekable();
    while let Some((i, ch)) = iter.next() {
        if !is_terminator(ch) {
            continue;
        }
        let mut only_periods = ch == '.';
        let mut end = i + ch.len_utf8();
        // absorb the rest of the terminator run plus closing punctuation
        while let Some(&(j, c)) = iter.peek() {
            if is_terminator(c) {
                only_periods &= c == '.';
            } else if !is_closer(c) {
                break;
            }
            end = j + c.len_utf8();
            iter.next();
        }
        if iter.peek().is_none() || splits_at(text, i, end, only_periods) {
            push_sentence(&mut out, &text[start..end]);
            start = end;
        }
    }
    push_sentence(&mut out, &text[start..]);
    out
}

/// Split text into word tokens and punctuation tokens.
///
/// A word token is a maximal run of alphanumeric characters; a punctuation
/// token is a maximal run of other non-whitespace characters. Whitespace
/// only separates. `"don't"` yields `["don", "'", "t"]`.
pub fn words(text: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut iter = text.char_indices().peekable();
    while let Some((start, ch)) = iter.next() {
        if ch.is_whitespace() {
            continue;
        }
        let alnum = ch.is_alphanumeric();
        let mut end = start + ch.len_utf8();
        while let Some(&(j, c)) = iter.peek() {
            if c.is_whitespace() || c.is_alphanumeric() != alnum {
                break;
            }
            end = j + c.len_utf8();
            iter.next();
        }
        out.push(&text[start..end]);
    }
    out
}

/// True when the token is non-empty and entirely punctuation.
pub fn is_punctuation(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| !c.is_alphanumeric() && !c.is_whitespace())
}

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '\u{2019}' | '\u{201d}')
}

fn is_opener(c: char) -> bool {
    matches!(c, '"' | '\'' | '(' | '[' | '\u{2018}' | '\u{201c}')
}

/// Decide whether the terminator run starting at `term_pos` and ending at
/// `end` closes a sentence.
fn splits_at(text: &str, term_pos: usize, end: usize, only_periods: bool) -> bool {
    let rest = &text[end..];
    match rest.chars().next() {
        // "3.14", "example.com": terminator glued to the next token
        Some(c) if !c.is_whitespace() => return false,
        _ => {}
    }
    if !only_periods {
        return true;
    }
    if is_abbreviation(&text[..term_pos]) {
        return false;
    }
    match rest.trim_start().chars().next() {
        Some(c) => c.is_uppercase() || c.is_ascii_digit() || is_opener(c),
        None => true,
    }
}

/// True when the text ends with an abbreviation or a single-letter initial.
fn is_abbreviation(prefix: &str) -> bool {
    let reversed: Vec<char> = prefix
        .chars()
        .rev()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();
    match reversed.as_slice() {
        [] => false,
        [c] if c.is_ascii_uppercase() => true,
        _ => {
            let word: String = reversed
                .iter()
                .rev()
                .collect::<String>()
                .to_ascii_lowercase();
            ABBREVIATIONS.contains(&word.as_str())
        }
    }
}

fn push_sentence<'a>(out: &mut Vec<&'a str>, segment: &'a str) {
    let trimmed = segment.trim();
    if !trimmed.is_empty() {
        out.push(trimmed);
    }
}
