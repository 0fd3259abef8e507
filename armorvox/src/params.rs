//! Per-utterance command line parameter resolution.
//!
//! The command line supplies one path per utterance plus parallel option
//! arrays (phrase, check_quality, recognition, vocab) that may be shorter
//! than the utterance list or absent entirely. An option given once applies
//! to every utterance; given several times, values are reused in command
//! line order, cycling when there are fewer values than utterances.

use std::path::PathBuf;

use crate::error::{Error, Result};

/// Phrase value that triggers loading from the sibling `.txt` file.
const PHRASE_FROM_FILE: &str = "file";

/// Resolved parameters for a single utterance.
///
/// An unset field means the option was not supplied for any utterance;
/// the server side default applies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UtteranceParameters {
    /// Path to the audio file.
    pub path: PathBuf,
    pub check_quality: Option<bool>,
    pub phrase: Option<String>,
    pub vocab: Option<String>,
    pub recognition: Option<bool>,
}

/// Resolves the parallel option arrays into one record per utterance path.
///
/// Phrases given as the literal `file` are loaded from the sibling text
/// file here, so the returned records are final.
pub fn resolve_parameters(
    paths: &[String],
    check_quality: &[String],
    phrases: &[String],
    vocabs: &[String],
    recognition: &[String],
) -> Result<Vec<UtteranceParameters>> {
    let mut result = Vec::with_capacity(paths.len());
    for (i, path) in paths.iter().enumerate() {
        let phrase = match cycled(phrases, i) {
            Some(p) => Some(resolve_phrase(path, p)?),
            None => None,
        };
        result.push(UtteranceParameters {
            path: PathBuf::from(path),
            check_quality: cycled(check_quality, i)
                .map(|v| parse_bool("check_quality", v))
                .transpose()?,
            phrase,
            vocab: cycled(vocabs, i).cloned(),
            recognition: cycled(recognition, i)
                .map(|v| parse_bool("recognition", v))
                .transpose()?,
        });
    }
    Ok(result)
}

/// Cyclic value reuse: the value for output index `i` is `values[i % len]`.
/// An empty array supplies no value at any index.
fn cycled<T>(values: &[T], index: usize) -> Option<&T> {
    if values.is_empty() {
        None
    } else {
        Some(&values[index % values.len()])
    }
}

/// Parses a boolean option value. Accepts exactly `true` or `false`,
/// case-insensitively; anything else is a usage error rather than a silent
/// `false`, so a typo cannot pass as an explicit value.
fn parse_bool(option: &str, value: &str) -> Result<bool> {
    if value.eq_ignore_ascii_case("true") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") {
        Ok(false)
    } else {
        Err(Error::usage(format!(
            "invalid boolean '{value}' for --{option}, expected 'true' or 'false'"
        )))
    }
}

/// Resolves the phrase for one utterance. The literal value `file` loads
/// the trimmed contents of the sibling text file; anything else passes
/// through untouched.
fn resolve_phrase(utterance_path: &str, phrase: &str) -> Result<String> {
    if phrase != PHRASE_FROM_FILE {
        return Ok(phrase.to_string());
    }
    let path = sibling_phrase_path(utterance_path);
    match std::fs::read_to_string(&path) {
        Ok(text) => Ok(text.trim().to_string()),
        Err(source) => Err(Error::PhraseFile { path, source }),
    }
}

/// Derives the phrase file path by swapping a trailing `.wav` extension for
/// `.txt`. Paths without a `.wav` suffix are left as-is.
fn sibling_phrase_path(utterance_path: &str) -> PathBuf {
    match utterance_path.strip_suffix(".wav") {
        Some(stem) => PathBuf::from(format!("{stem}.txt")),
        None => PathBuf::from(utterance_path),
    }
}
