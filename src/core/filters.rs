use crate::core::lease::lease_months;
use crate::models::{Attribute, Listing, Preferences};

/// Report whether one listing attribute matches the desired value exactly.
///
/// Returns `None` when the searcher expressed no preference for `attr`:
/// such attributes contribute neither a match nor a mismatch and are
/// excluded from scoring entirely. Lease length is compared on the
/// normalized month count; everything else on strict equality of the typed
/// value, where an unspecified listing attribute never equals a desired one.
#[inline]
pub fn attribute_matches(
    listing: &Listing,
    prefs: &Preferences,
    attr: Attribute,
) -> Option<bool> {
    match attr {
        Attribute::Cost => prefs.cost.map(|want| listing.cost == Some(want)),
        Attribute::Location => prefs.location.map(|want| listing.location == Some(want)),
        Attribute::Rooms => prefs.rooms.map(|want| listing.rooms == Some(want)),
        Attribute::LeaseLength => prefs
            .lease_months
            .map(|want| lease_months(listing.lease_length.as_deref()) == want),
        Attribute::Occupants => prefs.occupants.map(|want| listing.occupants == Some(want)),
        Attribute::Laundry => prefs.laundry.map(|want| listing.laundry == Some(want)),
        Attribute::Parking => prefs.parking.map(|want| listing.parking == Some(want)),
        Attribute::GenderPreference => prefs
            .gender_preference
            .as_deref()
            .map(|want| listing.gender_preference.as_deref() == Some(want)),
        Attribute::FloorPreference => prefs
            .floor_preference
            .map(|want| listing.floor_preference == Some(want)),
        Attribute::Pets => prefs.pets.map(|want| listing.pets == Some(want)),
    }
}

/// Check a listing against hard-filter criteria: every criterion with a
/// present value must match exactly.
#[inline]
pub fn matches_criteria(listing: &Listing, criteria: &Preferences) -> bool {
    Attribute::CANONICAL
        .iter()
        .all(|&attr| attribute_matches(listing, criteria, attr) != Some(false))
}

/// Drop listings that fail any present criterion.
///
/// This is a separate, composable step from ranking: filter-then-rank for
/// hard constraints, or rank alone for "show everything, best first".
pub fn filter(listings: Vec<Listing>, criteria: &Preferences) -> Vec<Listing> {
    listings
        .into_iter()
        .filter(|listing| matches_criteria(listing, criteria))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Area, Floor};

    fn sample_listing() -> Listing {
        Listing {
            id: "l1".to_string(),
            cost: Some(1000),
            location: Some(Area::MarineDrive),
            description: Some("Bright room near the bus loop".to_string()),
            rooms: Some(2),
            occupants: Some(3),
            lease_length: Some("6 months".to_string()),
            laundry: Some(true),
            parking: Some(false),
            gender_preference: None,
            floor_preference: Some(Floor::Top),
            pets: None,
            created_at: None,
        }
    }

    #[test]
    fn test_absent_preference_is_excluded() {
        let listing = sample_listing();
        let prefs = Preferences::default();

        for attr in Attribute::CANONICAL {
            assert_eq!(attribute_matches(&listing, &prefs, attr), None);
        }
    }

    #[test]
    fn test_exact_equality_on_typed_values() {
        let listing = sample_listing();
        let prefs = Preferences {
            location: Some(Area::MarineDrive),
            laundry: Some(true),
            parking: Some(true),
            ..Default::default()
        };

        assert_eq!(
            attribute_matches(&listing, &prefs, Attribute::Location),
            Some(true)
        );
        assert_eq!(
            attribute_matches(&listing, &prefs, Attribute::Laundry),
            Some(true)
        );
        // Explicit "no parking" on the listing mismatches a "yes" preference.
        assert_eq!(
            attribute_matches(&listing, &prefs, Attribute::Parking),
            Some(false)
        );
    }

    #[test]
    fn test_unspecified_listing_value_never_matches() {
        let listing = sample_listing();
        let prefs = Preferences {
            pets: Some(true),
            ..Default::default()
        };

        assert_eq!(attribute_matches(&listing, &prefs, Attribute::Pets), Some(false));
    }

    #[test]
    fn test_lease_compared_on_normalized_months() {
        let listing = sample_listing();
        let prefs = Preferences {
            lease_months: Some(6),
            ..Default::default()
        };
        assert_eq!(
            attribute_matches(&listing, &prefs, Attribute::LeaseLength),
            Some(true)
        );

        let half_year = Listing {
            lease_length: Some("24 weeks".to_string()),
            ..sample_listing()
        };
        assert_eq!(
            attribute_matches(&half_year, &prefs, Attribute::LeaseLength),
            Some(true)
        );
    }

    #[test]
    fn test_filter_retains_only_full_matches() {
        let on_campus = sample_listing();
        let off_campus = Listing {
            id: "l2".to_string(),
            location: Some(Area::Kitsilano),
            ..sample_listing()
        };
        let criteria = Preferences {
            location: Some(Area::MarineDrive),
            ..Default::default()
        };

        let kept = filter(vec![on_campus.clone(), off_campus], &criteria);

        assert_eq!(kept, vec![on_campus]);
    }

    #[test]
    fn test_empty_criteria_keeps_everything() {
        let listings = vec![sample_listing(), sample_listing()];
        let kept = filter(listings.clone(), &Preferences::default());
        assert_eq!(kept, listings);
    }
}
