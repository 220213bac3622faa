// crates/odanet-core/src/slug.rs

//! Slug generation for listings and seeker profiles.
//!
//! A slug is built from the record's seed text (title + address, or
//! full name + preferred location) plus a short random suffix, so two
//! records with identical seed text still get distinct slugs. Uniqueness
//! is probabilistic (1 in 36^6 per colliding base); the persistence layer
//! keeps the hard constraint and callers retry on a violation.

use crate::text::fold_char_into;
use rand::Rng;

/// Length of the random suffix appended to every slug.
pub const SUFFIX_LEN: usize = 6;

/// 36-symbol suffix alphabet: lowercase letters + digits.
const SUFFIX_ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Source of the random slug suffix.
///
/// Injectable so tests can supply a deterministic stub and assert exact
/// output. The production implementation is [`RandomSuffix`].
pub trait SuffixSource {
    /// Returns the next suffix: exactly [`SUFFIX_LEN`] characters drawn
    /// from `[a-z0-9]`.
    fn next_suffix(&mut self) -> String;
}

/// Default suffix source backed by the thread-local RNG.
///
/// No shared mutable state, so concurrent slug generation for different
/// records needs no coordination.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomSuffix;

impl SuffixSource for RandomSuffix {
    fn next_suffix(&mut self) -> String {
        let mut rng = rand::thread_rng();
        (0..SUFFIX_LEN)
            .map(|_| SUFFIX_ALPHABET[rng.gen_range(0..SUFFIX_ALPHABET.len())] as char)
            .collect()
    }
}

/// Normalize a single seed fragment for use inside a slug.
///
/// Unlike [`crate::fold_key`] this preserves word structure: whitespace and
/// punctuation runs collapse to single hyphens instead of being stripped.
/// The result has no leading/trailing hyphen and no double hyphen.
///
/// # Examples
///
/// ```rust
/// use odanet_core::slug::slugify_fragment;
///
/// assert_eq!(slugify_fragment("Kadıköy'de eşyalı oda"), "kadikoy-de-esyali-oda");
/// assert_eq!(slugify_fragment("  Şişli / Merkez  "), "sisli-merkez");
/// assert_eq!(slugify_fragment("!!!"), "");
/// ```
pub fn slugify_fragment(fragment: &str) -> String {
    let mut folded = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        fold_char_into(c, &mut folded);
    }

    let mut out = String::with_capacity(folded.len());
    let mut prev_hyphen = true; // true so leading separators are dropped
    for c in folded.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c);
            prev_hyphen = false;
        } else if !prev_hyphen {
            out.push('-');
            prev_hyphen = true;
        }
    }
    if out.ends_with('-') {
        out.pop();
    }
    out
}

/// Build a unique, URL-safe slug from ordered seed fragments.
///
/// Absent and empty fragments are skipped; the remaining fragments are
/// normalized with [`slugify_fragment`], joined with hyphens, and a
/// `-` + [`SUFFIX_LEN`]-character random suffix is appended. The suffix
/// alone guarantees a non-empty result even when every fragment is empty.
///
/// The generator never consults the persistence layer; a caller that needs
/// hard uniqueness retries on the storage uniqueness constraint.
///
/// # Examples
///
/// ```rust
/// use odanet_core::{generate_slug, RandomSuffix};
///
/// let slug = generate_slug(&[Some("Oda"), Some("İstanbul")], &mut RandomSuffix);
/// assert!(slug.starts_with("oda-istanbul-"));
/// assert_eq!(slug.len(), "oda-istanbul-".len() + 6);
/// ```
pub fn generate_slug<S: AsRef<str>>(
    fragments: &[Option<S>],
    suffixes: &mut dyn SuffixSource,
) -> String {
    let mut base = String::new();
    for fragment in fragments.iter().flatten() {
        let part = slugify_fragment(fragment.as_ref());
        if part.is_empty() {
            continue;
        }
        if !base.is_empty() {
            base.push('-');
        }
        base.push_str(&part);
    }

    let suffix = suffixes.next_suffix();
    if base.is_empty() {
        suffix
    } else {
        format!("{base}-{suffix}")
    }
}

/// Generate slugs for a batch of legacy records missing one.
///
/// Each element is the record's ordered seed fragments; the output is one
/// slug per record, in input order. Writing the slugs back (and retrying on
/// a uniqueness violation) is the caller's concern.
pub fn backfill_slugs<S: AsRef<str>>(
    seeds: impl IntoIterator<Item = Vec<Option<S>>>,
    suffixes: &mut dyn SuffixSource,
) -> Vec<String> {
    seeds
        .into_iter()
        .map(|fragments| generate_slug(&fragments, suffixes))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deterministic suffix source for exact-output assertions.
    struct FixedSuffix(&'static str);

    impl SuffixSource for FixedSuffix {
        fn next_suffix(&mut self) -> String {
            self.0.to_string()
        }
    }

    #[test]
    fn joins_fragments_with_hyphens() {
        let slug = generate_slug(
            &[Some("Eşyalı oda"), Some("Kadıköy, İstanbul")],
            &mut FixedSuffix("abc123"),
        );
        assert_eq!(slug, "esyali-oda-kadikoy-istanbul-abc123");
    }

    #[test]
    fn skips_absent_and_empty_fragments() {
        let slug = generate_slug(
            &[None, Some(""), Some("Oda"), Some("   ")],
            &mut FixedSuffix("abc123"),
        );
        assert_eq!(slug, "oda-abc123");
    }

    #[test]
    fn all_empty_fragments_yield_suffix_only() {
        let slug = generate_slug::<&str>(&[None, Some("!!!")], &mut FixedSuffix("xyz789"));
        assert_eq!(slug, "xyz789");
    }

    #[test]
    fn never_empty() {
        let slug = generate_slug::<&str>(&[], &mut RandomSuffix);
        assert_eq!(slug.len(), SUFFIX_LEN);
    }

    #[test]
    fn format_is_url_safe() {
        let slug = generate_slug(
            &[Some("  --Çift--  kişilik!!  "), Some("Beşiktaş")],
            &mut RandomSuffix,
        );
        assert!(!slug.starts_with('-') && !slug.ends_with('-'));
        assert!(!slug.contains("--"));
        assert!(slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
    }

    #[test]
    fn repeated_generation_differs() {
        let a = generate_slug(&[Some("Oda"), Some("Istanbul")], &mut RandomSuffix);
        let b = generate_slug(&[Some("Oda"), Some("Istanbul")], &mut RandomSuffix);
        // Same base; the random suffixes differ (1 in 36^6 flake odds).
        assert_ne!(a, b);
        assert!(a.starts_with("oda-istanbul-"));
        assert!(b.starts_with("oda-istanbul-"));
    }

    #[test]
    fn random_suffix_shape() {
        let suffix = RandomSuffix.next_suffix();
        assert_eq!(suffix.len(), SUFFIX_LEN);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn backfill_preserves_order() {
        let seeds = vec![
            vec![Some("Oda İstanbul"), None],
            vec![Some("Ayşe Yılmaz"), Some("Kadıköy")],
        ];
        let slugs = backfill_slugs(seeds, &mut FixedSuffix("000000"));
        assert_eq!(slugs, vec!["oda-istanbul-000000", "ayse-yilmaz-kadikoy-000000"]);
    }
}
