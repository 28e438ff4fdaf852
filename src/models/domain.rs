use serde::{Deserialize, Serialize};

/// Campus and off-campus areas a listing can belong to.
///
/// Declaration order doubles as the tie-break order during ranking, so new
/// areas belong at the end of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Area {
    #[serde(rename = "Brock Commons")]
    BrockCommons,
    Exchange,
    #[serde(rename = "Fairview Crescent")]
    FairviewCrescent,
    #[serde(rename = "Fraser Hall")]
    FraserHall,
    #[serde(rename = "Green College")]
    GreenCollege,
    #[serde(rename = "Iona House")]
    IonaHouse,
    #[serde(rename = "Marine Drive")]
    MarineDrive,
    #[serde(rename = "Ponderosa Commons")]
    PonderosaCommons,
    #[serde(rename = "St. John’s College")]
    StJohnsCollege,
    #[serde(rename = "tə šxʷhəleləm̓s tə k̓ʷaƛ̓kʷəʔaʔɬ")]
    TeShxwhelelms,
    #[serde(rename = "Wesbrook Village")]
    WesbrookVillage,
    Kitsilano,
    Richmond,
    #[serde(rename = "West Point Grey")]
    WestPointGrey,
}

/// Floor of the unit, ordered bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Floor {
    Bottom,
    Middle,
    Top,
}

/// One sublet posting. Immutable once constructed; optional fields are
/// "unspecified", which the engine treats differently from an explicit "no".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Listing {
    #[serde(default)]
    pub id: String,
    /// Monthly cost in dollars. Required when a listing is posted; the
    /// engine still tolerates records without one.
    #[serde(default)]
    pub cost: Option<u32>,
    #[serde(default)]
    pub location: Option<Area>,
    /// Free text, never matched or scored.
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rooms: Option<u8>,
    #[serde(default)]
    pub occupants: Option<u8>,
    /// Free-text duration, e.g. "6 months", "1 year", "2 weeks".
    #[serde(rename = "leaseLength", default)]
    pub lease_length: Option<String>,
    #[serde(default)]
    pub laundry: Option<bool>,
    #[serde(default)]
    pub parking: Option<bool>,
    #[serde(rename = "genderPreference", default)]
    pub gender_preference: Option<String>,
    #[serde(rename = "floorPreference", default)]
    pub floor_preference: Option<Floor>,
    #[serde(default)]
    pub pets: Option<bool>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
}

/// Desired attribute values for one ranking or filtering request.
///
/// Every field is independently absent-or-present; an absent field means
/// "no preference" and is excluded from scoring and filtering. The engine
/// never mutates a preference set. Lease duration is carried as a month
/// count: callers coerce free text with [`crate::core::lease_months`]
/// before building this type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub cost: Option<u32>,
    pub location: Option<Area>,
    pub rooms: Option<u8>,
    #[serde(rename = "leaseMonths")]
    pub lease_months: Option<u32>,
    pub occupants: Option<u8>,
    pub laundry: Option<bool>,
    pub parking: Option<bool>,
    #[serde(rename = "genderPreference")]
    pub gender_preference: Option<String>,
    #[serde(rename = "floorPreference")]
    pub floor_preference: Option<Floor>,
    pub pets: Option<bool>,
}

impl Preferences {
    /// Whether the searcher expressed a preference for `attr`.
    pub fn has(&self, attr: Attribute) -> bool {
        match attr {
            Attribute::Cost => self.cost.is_some(),
            Attribute::Location => self.location.is_some(),
            Attribute::Rooms => self.rooms.is_some(),
            Attribute::LeaseLength => self.lease_months.is_some(),
            Attribute::Occupants => self.occupants.is_some(),
            Attribute::Laundry => self.laundry.is_some(),
            Attribute::Parking => self.parking.is_some(),
            Attribute::GenderPreference => self.gender_preference.is_some(),
            Attribute::FloorPreference => self.floor_preference.is_some(),
            Attribute::Pets => self.pets.is_some(),
        }
    }

    /// True when no preference at all was expressed.
    pub fn is_empty(&self) -> bool {
        Attribute::CANONICAL.iter().all(|&attr| !self.has(attr))
    }
}

/// The rankable listing attributes. `description` is free text and has no
/// variant on purpose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Cost,
    Location,
    Rooms,
    LeaseLength,
    Occupants,
    Laundry,
    Parking,
    GenderPreference,
    FloorPreference,
    Pets,
}

impl Attribute {
    /// Canonical attribute order used for tie-breaking. Attributes the
    /// searcher named move to the front of this sequence at rank time.
    pub const CANONICAL: [Attribute; 10] = [
        Attribute::Cost,
        Attribute::Location,
        Attribute::Rooms,
        Attribute::LeaseLength,
        Attribute::Occupants,
        Attribute::Laundry,
        Attribute::Parking,
        Attribute::GenderPreference,
        Attribute::FloorPreference,
        Attribute::Pets,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_order_follows_declaration() {
        assert!(Area::BrockCommons < Area::Exchange);
        assert!(Area::Exchange < Area::WestPointGrey);
    }

    #[test]
    fn test_floor_order_bottom_to_top() {
        assert!(Floor::Bottom < Floor::Middle);
        assert!(Floor::Middle < Floor::Top);
    }

    #[test]
    fn test_empty_preferences() {
        let prefs = Preferences::default();
        assert!(prefs.is_empty());

        let prefs = Preferences {
            laundry: Some(true),
            ..Default::default()
        };
        assert!(!prefs.is_empty());
        assert!(prefs.has(Attribute::Laundry));
        assert!(!prefs.has(Attribute::Parking));
    }

    #[test]
    fn test_area_wire_names() {
        let json = serde_json::to_string(&Area::StJohnsCollege).unwrap();
        assert_eq!(json, "\"St. John’s College\"");

        let parsed: Area = serde_json::from_str("\"Wesbrook Village\"").unwrap();
        assert_eq!(parsed, Area::WesbrookVillage);
    }
}
