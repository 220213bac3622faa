// crates/odanet-core/src/traits.rs

use crate::text::equals_folded;

/// Name-based matching helpers for catalog types that expose a canonical
/// display name.
///
/// Implementors provide a `&str` view of their canonical name via
/// [`NameMatch::name_str`], and get convenient helpers:
/// - [`NameMatch::is_named`] — diacritic- and case-insensitive equality on
///   the folded form
/// - [`NameMatch::name_contains`] — case-insensitive substring match on the
///   raw orthography
///
/// `name_contains` is deliberately diacritic-sensitive: the search scan
/// pairs it with a folded-slug containment test, so the raw path only has
/// to cover queries typed in Turkish orthography.
///
/// # Examples
/// ```rust
/// use odanet_core::traits::NameMatch;
///
/// struct Place(&'static str);
/// impl NameMatch for Place {
///     fn name_str(&self) -> &str { self.0 }
/// }
///
/// assert!(Place("Kadıköy").is_named("kadikoy"));
/// assert!(Place("Kadıköy").name_contains("kadı"));
/// ```
pub trait NameMatch {
    /// Returns the canonical display name used for matching.
    fn name_str(&self) -> &str;

    /// Diacritic-insensitive and case-insensitive name comparison.
    #[inline]
    fn is_named(&self, q: &str) -> bool {
        equals_folded(self.name_str(), q)
    }

    /// Case-insensitive substring match on the raw display name.
    #[inline]
    fn name_contains(&self, q: &str) -> bool {
        self.name_str()
            .to_lowercase()
            .contains(&q.to_lowercase())
    }
}
