use crate::prelude::*;
use md5::{Digest, Md5};

/// Error returned when a word list has no entries to select from.
#[derive(Debug, Clone)]
pub struct EmptyDictionary {}

impl fmt::Display for EmptyDictionary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("word list is empty")
    }
}

/// Deterministically selects the word of the day.
///
/// The seed is `wordle-<lang>-<date>`. The first 8 hex characters of its MD5
/// digest, parsed base-16 and taken modulo the list length, give the index.
/// Every deployment sharing the same word lists computes the same word for a
/// given (language, date), so treat digest, truncation and modulus order as
/// a wire format.
pub fn select_word<'a>(dictionary: &'a Dictionary, lang: Lang, date: &str) -> Result<&'a str, EmptyDictionary> {
    if dictionary.is_empty() {
        return Err(EmptyDictionary {});
    }
    let seed = format!("wordle-{lang}-{date}");
    let digest = hex::encode(Md5::digest(seed.as_bytes()));
    let seed_value = u32::from_str_radix(&digest[..8], 16).unwrap();
    let index = seed_value as usize % dictionary.len();
    Ok(&dictionary.words()[index])
}

/// Normalizes a guess and checks it against the word list.
///
/// A guess is valid when its uppercased form is exactly 5 letters long and a
/// member of the list. Anything else is a regular `false`, not an error.
pub fn validate_word(dictionary: &Dictionary, candidate: &str) -> (String, bool) {
    let normalized = candidate.to_uppercase();
    let valid = normalized.chars().count() == 5
        && normalized.chars().all(char::is_alphabetic)
        && dictionary.contains(&normalized);
    (normalized, valid)
}
