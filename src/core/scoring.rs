use crate::core::filters::attribute_matches;
use crate::models::{Attribute, Listing, Preferences};

/// Count the preference attributes a listing matches exactly.
///
/// Higher is better. Fitness alone never fully orders a set of listings;
/// ties are resolved by the attribute priority sequence in the ranker.
#[inline]
pub fn fitness_score(listing: &Listing, prefs: &Preferences) -> u32 {
    Attribute::CANONICAL
        .iter()
        .filter(|&&attr| attribute_matches(listing, prefs, attr) == Some(true))
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Area, Floor};

    fn listing(cost: u32, location: Area, floor: Floor) -> Listing {
        Listing {
            id: String::new(),
            cost: Some(cost),
            location: Some(location),
            description: None,
            rooms: None,
            occupants: None,
            lease_length: None,
            laundry: None,
            parking: None,
            gender_preference: None,
            floor_preference: Some(floor),
            pets: None,
            created_at: None,
        }
    }

    #[test]
    fn test_counts_exact_matches_only() {
        let prefs = Preferences {
            location: Some(Area::BrockCommons),
            floor_preference: Some(Floor::Top),
            ..Default::default()
        };

        let both = listing(1000, Area::BrockCommons, Floor::Top);
        let location_only = listing(1200, Area::BrockCommons, Floor::Bottom);
        let floor_only = listing(1000, Area::Exchange, Floor::Top);

        assert_eq!(fitness_score(&both, &prefs), 2);
        assert_eq!(fitness_score(&location_only, &prefs), 1);
        assert_eq!(fitness_score(&floor_only, &prefs), 1);
    }

    #[test]
    fn test_no_preferences_scores_zero() {
        let l = listing(900, Area::Exchange, Floor::Middle);
        assert_eq!(fitness_score(&l, &Preferences::default()), 0);
    }

    #[test]
    fn test_score_is_deterministic() {
        let l = listing(900, Area::Exchange, Floor::Middle);
        let prefs = Preferences {
            cost: Some(900),
            floor_preference: Some(Floor::Middle),
            ..Default::default()
        };

        let first = fitness_score(&l, &prefs);
        for _ in 0..10 {
            assert_eq!(fitness_score(&l, &prefs), first);
        }
        assert_eq!(first, 2);
    }
}
