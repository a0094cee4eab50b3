// src/specs/voting.rs
//! Scraping *spec* for the judge results page.
//!
//! The page shows each prisoner's "do not forgive" share as `NN.NN% ―`, with
//! no per-prisoner markup we can anchor on. Extraction is therefore textual:
//!
//! 1. Flatten the HTML to text.
//! 2. Primary pass: every `<number>%―` (whitespace allowed around `%`).
//! 3. Only if the primary pass finds nothing: every `<number>%`, keeping
//!    values in `[5, 95]` other than exactly 50. That drops the usual page
//!    noise such as `100%`, `0%` and a tied `50%`.
//! 4. The first `wanted` values, in document order, are the result.
//!
//! A primary pass that finds *some* but too few values fails outright; the
//! fallback is not consulted.

use std::sync::OnceLock;

use regex::Regex;

use crate::config::consts::{
    FALLBACK_EXCLUDED_PCT, FALLBACK_MAX_PCT, FALLBACK_MIN_PCT, VOTE_SEPARATOR,
};
use crate::core::html::page_text;
use crate::error::ExtractionError;
use crate::progress::Progress;

/// Which pass produced a list of percentages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pass {
    /// `<number>%―` matches.
    Primary,
    /// Every `<number>%` on the page.
    FallbackAll,
    /// Fallback matches that survived the range filter.
    FallbackFiltered,
}

fn primary_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pat = format!(r"(\d+\.?\d*)\s*%\s*{VOTE_SEPARATOR}");
        Regex::new(&pat).expect("primary vote regex is valid")
    })
}

fn percent_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(\d+\.?\d*)\s*%").expect("percent regex is valid"))
}

fn decimal_digit_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d$").expect("digit regex is valid"))
}

/// Value of any Unicode decimal digit (`\d`), e.g. `'６'` → 6.
///
/// Decimal digits come in contiguous runs starting at zero, so the value is
/// the distance to the start of the run, modulo ten.
fn digit_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    let mut buf = [0u8; 4];
    let is_digit = |c: char, buf: &mut [u8; 4]| decimal_digit_re().is_match(c.encode_utf8(buf));
    if !is_digit(c, &mut buf) {
        return None;
    }
    let mut start = c as u32;
    while let Some(prev) = start.checked_sub(1).and_then(char::from_u32) {
        if !is_digit(prev, &mut buf) {
            break;
        }
        start -= 1;
    }
    Some((c as u32 - start) % 10)
}

/// Rewrite a captured number with ASCII digits so it parses as `f64`.
fn ascii_number(raw: &str) -> Option<String> {
    raw.chars()
        .map(|c| match c {
            '.' => Some('.'),
            c => char::from_digit(digit_value(c)?, 10),
        })
        .collect()
}

fn capture_numbers(re: &Regex, text: &str) -> Vec<f64> {
    re.captures_iter(text)
        .filter_map(|c| ascii_number(c.get(1)?.as_str())?.parse::<f64>().ok())
        .collect()
}

/// Range filter for the fallback pass.
pub fn plausible_vote(v: f64) -> bool {
    (FALLBACK_MIN_PCT..=FALLBACK_MAX_PCT).contains(&v) && v != FALLBACK_EXCLUDED_PCT
}

/// Extract the first `wanted` vote percentages from a raw page.
pub fn extract(
    raw: &[u8],
    wanted: usize,
    progress: &mut dyn Progress,
) -> Result<Vec<f64>, ExtractionError> {
    extract_from_text(&page_text(raw), wanted, progress)
}

/// Same as [`extract`], on already flattened text.
pub fn extract_from_text(
    text: &str,
    wanted: usize,
    progress: &mut dyn Progress,
) -> Result<Vec<f64>, ExtractionError> {
    let mut values = capture_numbers(primary_re(), text);
    progress.matches(Pass::Primary, &values);
    logd!(?values, "primary matches");

    if values.is_empty() {
        let all = capture_numbers(percent_re(), text);
        progress.matches(Pass::FallbackAll, &all);

        values = all.into_iter().filter(|v| plausible_vote(*v)).collect();
        progress.matches(Pass::FallbackFiltered, &values);
        logd!(?values, "fallback matches");
    }

    values.truncate(wanted);
    if values.len() < wanted {
        return Err(ExtractionError { found: values.len(), wanted });
    }
    Ok(values)
}
