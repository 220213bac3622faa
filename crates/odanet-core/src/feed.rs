// crates/odanet-core/src/feed.rs

//! Home-feed interleaving.
//!
//! The home feed shows room listings and seeker profiles in one stream.
//! The two collections arrive already fetched and ordered; this module only
//! merges them positionally. There is no cross-source re-sorting (e.g. by
//! recency across both types).

use serde::Serialize;

/// One entry of the merged feed, tagged with its source collection.
///
/// Generic over the record types so the core does not own the listing or
/// seeker schemas. Serializes as `{"kind":"listing","record":{...}}` /
/// `{"kind":"seeker","record":{...}}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "record", rename_all = "lowercase")]
pub enum FeedItem<L, S> {
    Listing(L),
    Seeker(S),
}

impl<L, S> FeedItem<L, S> {
    pub fn is_listing(&self) -> bool {
        matches!(self, Self::Listing(_))
    }

    pub fn is_seeker(&self) -> bool {
        matches!(self, Self::Seeker(_))
    }
}

/// Merge seekers and listings into one display-ordered sequence.
///
/// Round-robin, leading with the seeker collection: for each index, the
/// seeker at that position (if any) is pushed, then the listing at that
/// position (if any). Each source keeps its original relative order.
///
/// If one collection is empty the result is the other collection verbatim;
/// if both are empty the result is empty (the caller owns the empty-state
/// presentation).
pub fn interleave_feed<L, S>(seekers: Vec<S>, listings: Vec<L>) -> Vec<FeedItem<L, S>> {
    let mut out = Vec::with_capacity(seekers.len() + listings.len());
    let mut seekers = seekers.into_iter();
    let mut listings = listings.into_iter();

    loop {
        let seeker = seekers.next();
        let listing = listings.next();
        if seeker.is_none() && listing.is_none() {
            break;
        }
        if let Some(s) = seeker {
            out.push(FeedItem::Seeker(s));
        }
        if let Some(l) = listing {
            out.push(FeedItem::Listing(l));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_robin_leads_with_seekers() {
        let merged = interleave_feed(vec!["S1", "S2"], vec!["L1"]);
        assert_eq!(
            merged,
            vec![
                FeedItem::Seeker("S1"),
                FeedItem::Listing("L1"),
                FeedItem::Seeker("S2"),
            ]
        );
    }

    #[test]
    fn balanced_sources_alternate() {
        let merged = interleave_feed(vec![1, 2, 3], vec![10, 20, 30]);
        assert_eq!(
            merged,
            vec![
                FeedItem::Seeker(1),
                FeedItem::Listing(10),
                FeedItem::Seeker(2),
                FeedItem::Listing(20),
                FeedItem::Seeker(3),
                FeedItem::Listing(30),
            ]
        );
    }

    #[test]
    fn empty_seekers_degenerates_to_listings() {
        let merged = interleave_feed(Vec::<&str>::new(), vec!["L1", "L2"]);
        assert_eq!(merged, vec![FeedItem::Listing("L1"), FeedItem::Listing("L2")]);
    }

    #[test]
    fn empty_listings_degenerates_to_seekers() {
        let merged = interleave_feed(vec!["S1", "S2"], Vec::<&str>::new());
        assert_eq!(merged, vec![FeedItem::Seeker("S1"), FeedItem::Seeker("S2")]);
    }

    #[test]
    fn both_empty_yields_empty() {
        let merged = interleave_feed(Vec::<u8>::new(), Vec::<u8>::new());
        assert!(merged.is_empty());
    }

    #[test]
    fn surplus_trails_in_original_order() {
        let merged = interleave_feed(vec!["S1"], vec!["L1", "L2", "L3"]);
        assert_eq!(
            merged,
            vec![
                FeedItem::Seeker("S1"),
                FeedItem::Listing("L1"),
                FeedItem::Listing("L2"),
                FeedItem::Listing("L3"),
            ]
        );
    }

    #[test]
    fn serializes_with_kind_and_record() {
        #[derive(Serialize, Clone, PartialEq, Eq, Debug)]
        struct Listing {
            title: String,
        }
        let merged = interleave_feed::<Listing, &str>(
            vec!["Ayşe"],
            vec![Listing {
                title: "Kadıköy'de oda".to_string(),
            }],
        );
        let json = serde_json::to_value(&merged).unwrap();
        assert_eq!(json[0]["kind"], "seeker");
        assert_eq!(json[0]["record"], "Ayşe");
        assert_eq!(json[1]["kind"], "listing");
        assert_eq!(json[1]["record"]["title"], "Kadıköy'de oda");
    }
}
