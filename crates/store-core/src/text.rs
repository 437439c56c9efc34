//! # Name Matching and Ordering
//!
//! Customer and product names are Portuguese, so both matching and sorting
//! work on Unicode text rather than SQLite's ASCII-only `LIKE` and byte
//! collation.
//!
//! ```rust
//! use store_core::text::{compare_names, contains_folded};
//! use std::cmp::Ordering;
//!
//! assert!(contains_folded("Déric Martins", "DÉRIC"));
//! assert_eq!(compare_names("Álvaro", "Zé"), Ordering::Less);
//! ```

use std::cmp::Ordering;

/// Lowercases with full Unicode case mapping.
pub fn fold_case(text: &str) -> String {
    text.to_lowercase()
}

/// True when `haystack` contains `needle`, ignoring case.
///
/// Accents still have to match: "joao" does not find "João".
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold_case(haystack).contains(&fold_case(needle))
}

/// Dictionary order for names: case and accents are ignored first, and
/// only break ties afterwards.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| a.cmp(b))
}

fn collation_key(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(strip_accent)
        .collect()
}

fn strip_accent(c: char) -> char {
    match c {
        'á' | 'à' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'é' | 'è' | 'ê' | 'ë' => 'e',
        'í' | 'ì' | 'î' | 'ï' => 'i',
        'ó' | 'ò' | 'ô' | 'õ' | 'ö' => 'o',
        'ú' | 'ù' | 'û' | 'ü' => 'u',
        'ç' => 'c',
        'ñ' => 'n',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}
