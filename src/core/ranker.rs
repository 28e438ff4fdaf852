use crate::core::lease::lease_months;
use crate::core::scoring::fitness_score;
use crate::models::{Attribute, Listing, Preferences};

/// One element of a listing's sort key.
///
/// Derived `Ord` puts every `Int` before every `Text`, so free-text
/// attributes order after any integer sentinel and lexicographically among
/// themselves.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum KeyPart {
    Int(i64),
    Text(String),
}

/// The attribute order used to break fitness ties for one request.
///
/// Attributes the searcher named (present preference fields, whatever their
/// value) move to the front of the canonical order; both the moved group
/// and the remainder keep their canonical relative order.
pub fn priority_sequence(prefs: &Preferences) -> Vec<Attribute> {
    let mut sequence: Vec<Attribute> = Attribute::CANONICAL
        .iter()
        .copied()
        .filter(|&attr| prefs.has(attr))
        .collect();
    sequence.extend(
        Attribute::CANONICAL
            .iter()
            .copied()
            .filter(|&attr| !prefs.has(attr)),
    );
    sequence
}

/// Key component for one attribute of one listing.
///
/// Sentinels for unspecified values: cost maps to `i64::MAX` so an unknown
/// cost ranks worst, every other attribute maps to the minimum so it sorts
/// as "no information". Lease length uses the normalized month count, which
/// is already 0 when absent.
fn attribute_part(listing: &Listing, attr: Attribute) -> KeyPart {
    match attr {
        Attribute::Cost => KeyPart::Int(listing.cost.map_or(i64::MAX, i64::from)),
        Attribute::Location => {
            KeyPart::Int(listing.location.map_or(i64::MIN, |area| area as i64))
        }
        Attribute::Rooms => KeyPart::Int(listing.rooms.map_or(i64::MIN, i64::from)),
        Attribute::LeaseLength => {
            KeyPart::Int(i64::from(lease_months(listing.lease_length.as_deref())))
        }
        Attribute::Occupants => KeyPart::Int(listing.occupants.map_or(i64::MIN, i64::from)),
        Attribute::Laundry => KeyPart::Int(listing.laundry.map_or(i64::MIN, i64::from)),
        Attribute::Parking => KeyPart::Int(listing.parking.map_or(i64::MIN, i64::from)),
        Attribute::GenderPreference => listing
            .gender_preference
            .clone()
            .map_or(KeyPart::Int(i64::MIN), KeyPart::Text),
        Attribute::FloorPreference => {
            KeyPart::Int(listing.floor_preference.map_or(i64::MIN, |floor| floor as i64))
        }
        Attribute::Pets => KeyPart::Int(listing.pets.map_or(i64::MIN, i64::from)),
    }
}

/// Full sort key: negated fitness first (higher fitness sorts earlier under
/// the ascending comparison), then one component per attribute in priority
/// order.
fn sort_key(listing: &Listing, prefs: &Preferences, sequence: &[Attribute]) -> Vec<KeyPart> {
    let mut key = Vec::with_capacity(sequence.len() + 1);
    key.push(KeyPart::Int(-i64::from(fitness_score(listing, prefs))));
    for &attr in sequence {
        key.push(attribute_part(listing, attr));
    }
    key
}

/// Order listings from best to worst match for the given preferences.
///
/// The result is a permutation of the input: ranking only reorders, it
/// never drops a record (apply [`crate::core::filter`] first for hard
/// constraints). The full key chain makes the order deterministic; records
/// with identical keys keep their input order (the sort is stable).
pub fn rank(mut listings: Vec<Listing>, prefs: &Preferences) -> Vec<Listing> {
    let sequence = priority_sequence(prefs);
    listings.sort_by_cached_key(|listing| sort_key(listing, prefs, &sequence));
    listings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Area, Floor};

    fn listing(id: &str, cost: Option<u32>, location: Option<Area>, floor: Option<Floor>) -> Listing {
        Listing {
            id: id.to_string(),
            cost,
            location,
            description: None,
            rooms: None,
            occupants: None,
            lease_length: None,
            laundry: None,
            parking: None,
            gender_preference: None,
            floor_preference: floor,
            pets: None,
            created_at: None,
        }
    }

    fn ids(listings: &[Listing]) -> Vec<&str> {
        listings.iter().map(|l| l.id.as_str()).collect()
    }

    #[test]
    fn test_priority_sequence_moves_named_attributes_front() {
        let prefs = Preferences {
            location: Some(Area::BrockCommons),
            floor_preference: Some(Floor::Top),
            ..Default::default()
        };

        let sequence = priority_sequence(&prefs);

        assert_eq!(
            sequence,
            vec![
                Attribute::Location,
                Attribute::FloorPreference,
                Attribute::Cost,
                Attribute::Rooms,
                Attribute::LeaseLength,
                Attribute::Occupants,
                Attribute::Laundry,
                Attribute::Parking,
                Attribute::GenderPreference,
                Attribute::Pets,
            ]
        );
    }

    #[test]
    fn test_no_preferences_keeps_canonical_order() {
        assert_eq!(
            priority_sequence(&Preferences::default()),
            Attribute::CANONICAL.to_vec()
        );
    }

    #[test]
    fn test_best_match_first_then_tie_break() {
        // Two preference attributes; r1 matches both, r2 and r3 one each.
        let r1 = listing("r1", Some(1000), Some(Area::BrockCommons), Some(Floor::Top));
        let r2 = listing("r2", Some(1200), Some(Area::BrockCommons), Some(Floor::Bottom));
        let r3 = listing("r3", Some(1000), Some(Area::Exchange), Some(Floor::Top));
        let prefs = Preferences {
            location: Some(Area::BrockCommons),
            floor_preference: Some(Floor::Top),
            ..Default::default()
        };

        let ranked = rank(vec![r2, r3, r1], &prefs);

        // r1 wins on fitness; r2 beats r3 on the location component, which
        // leads the priority sequence for this request.
        assert_eq!(ids(&ranked), vec!["r1", "r2", "r3"]);
    }

    #[test]
    fn test_cheaper_cost_wins_ties() {
        let cheap = listing("cheap", Some(800), None, None);
        let pricey = listing("pricey", Some(950), None, None);

        let ranked = rank(vec![pricey, cheap], &Preferences::default());

        assert_eq!(ids(&ranked), vec!["cheap", "pricey"]);
    }

    #[test]
    fn test_unspecified_cost_ranks_last() {
        let known = listing("known", Some(2500), None, None);
        let unknown = listing("unknown", None, None, None);

        let ranked = rank(vec![unknown, known], &Preferences::default());

        assert_eq!(ids(&ranked), vec!["known", "unknown"]);
    }

    #[test]
    fn test_rank_is_a_permutation() {
        let input = vec![
            listing("a", Some(1200), Some(Area::Kitsilano), None),
            listing("b", None, None, Some(Floor::Middle)),
            listing("c", Some(700), Some(Area::Exchange), Some(Floor::Top)),
        ];
        let prefs = Preferences {
            floor_preference: Some(Floor::Top),
            ..Default::default()
        };

        let ranked = rank(input.clone(), &prefs);

        assert_eq!(ranked.len(), input.len());
        for original in &input {
            assert!(ranked.contains(original));
        }
    }

    #[test]
    fn test_empty_input_is_empty_output() {
        assert!(rank(Vec::new(), &Preferences::default()).is_empty());
    }

    #[test]
    fn test_identical_keys_keep_input_order() {
        let first = listing("first", Some(1000), None, None);
        let second = Listing {
            id: "second".to_string(),
            ..first.clone()
        };

        let ranked = rank(vec![first, second], &Preferences::default());

        assert_eq!(ids(&ranked), vec!["first", "second"]);
    }

    #[test]
    fn test_free_text_gender_orders_after_sentinel() {
        let named = Listing {
            gender_preference: Some("female".to_string()),
            ..listing("named", Some(1000), None, None)
        };
        let unspecified = listing("unspecified", Some(1000), None, None);

        // Same fitness and cost; the gender component decides, and the
        // absent-value sentinel sorts before any text.
        let ranked = rank(vec![named, unspecified], &Preferences::default());

        assert_eq!(ids(&ranked), vec!["unspecified", "named"]);
    }
}
