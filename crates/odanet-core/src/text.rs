// crates/odanet-core/src/text.rs

//! Turkish-aware text folding.
//!
//! Slugs and search keys are both derived from [`fold_key`], so a query
//! typed without diacritics ("kadikoy") matches the canonical orthography
//! ("Kadıköy") and vice versa.

use deunicode::deunicode_char;

/// Fixed substitution table for the Turkish-specific letters.
///
/// These take precedence over the generic transliteration so the dotless/
/// dotted i pair (`ı`, `İ`) folds the way Turkish readers expect; a plain
/// Unicode lowercase of `İ` would leave a combining dot behind.
pub(crate) fn fold_turkish(c: char) -> Option<&'static str> {
    match c {
        'ş' | 'Ş' => Some("s"),
        'ğ' | 'Ğ' => Some("g"),
        'ü' | 'Ü' => Some("u"),
        'ö' | 'Ö' => Some("o"),
        'ç' | 'Ç' => Some("c"),
        'ı' | 'İ' => Some("i"),
        _ => None,
    }
}

/// Transliterate a single character to lowercase ASCII, Turkish table first,
/// `deunicode` as the fallback for anything else non-ASCII.
pub(crate) fn fold_char_into(c: char, out: &mut String) {
    if let Some(rep) = fold_turkish(c) {
        out.push_str(rep);
    } else if c.is_ascii() {
        out.push(c.to_ascii_lowercase());
    } else if let Some(rep) = deunicode_char(c) {
        for r in rep.chars() {
            out.push(r.to_ascii_lowercase());
        }
    }
    // Unmappable characters are dropped.
}

/// Convert a string into a folded key suitable for slugs and comparison.
///
/// This performs:
/// 1. Transliterate Turkish letters via the fixed table (`Şişli` → `sisli`)
///    and any other Unicode best-effort to ASCII.
/// 2. Normalize to lowercase.
/// 3. Strip every remaining character outside `[a-z0-9]`.
///
/// Pure and deterministic; no locale dependency. Empty or whitespace-only
/// input yields the empty string, which callers must handle explicitly
/// (the slug generator falls back to its random suffix).
///
/// # Examples
///
/// ```rust
/// use odanet_core::fold_key;
///
/// assert_eq!(fold_key("Çanakkale"), "canakkale");
/// assert_eq!(fold_key("İzmir"), "izmir");
/// assert_eq!(fold_key("Kadıköy"), "kadikoy");
/// ```
pub fn fold_key(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        fold_char_into(c, &mut out);
    }
    out.retain(|c| c.is_ascii_alphanumeric());
    out
}

/// Compares two strings for equality after folding.
///
/// # Examples
///
/// ```rust
/// use odanet_core::equals_folded;
///
/// assert!(equals_folded("Şişli", "sisli"));
/// assert!(equals_folded("İSTANBUL", "istanbul"));
/// assert!(!equals_folded("Ankara", "İzmir"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}
