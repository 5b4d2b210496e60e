//! # System Instruction
//!
//! The assistant is told about the catalog once, when it is built. The
//! instruction carries a JSON snapshot of every tour plus the house rules.
//!
//! Discount figures in the rules come from the pricing constants, so the
//! assistant quotes exactly what the booking widget charges.

use serde::Serialize;
use tracing::warn;
use voyage_core::catalog::CatalogProvider;
use voyage_core::pricing::{COUPLE_DISCOUNT, GROUP_DISCOUNT, GROUP_DISCOUNT_MIN_PARTICIPANTS};
use voyage_core::{Locale, Tour};

/// What the model is allowed to know about one tour.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TourSnapshot {
    pub title: String,
    pub category: String,
    /// Per-person group price, e.g. `¥6800.00`.
    pub price: String,
    pub days: u32,
    pub location: String,
    pub features: Vec<String>,
    /// `current/max booked`.
    pub availability: String,
}

impl TourSnapshot {
    pub fn of(tour: &Tour, locale: Locale) -> Self {
        TourSnapshot {
            title: tour.title.get(locale).to_string(),
            category: tour.category.to_string(),
            price: tour.group_price.to_string(),
            days: tour.days,
            location: tour.location.get(locale).to_string(),
            features: tour
                .features
                .iter()
                .map(|f| f.get(locale).to_string())
                .collect(),
            availability: format!("{}/{} booked", tour.current_group_size, tour.max_group_size),
        }
    }
}

/// Serializes the catalog for the system instruction.
pub fn catalog_snapshot(catalog: &dyn CatalogProvider, locale: Locale) -> String {
    let tours: Vec<TourSnapshot> = catalog
        .list_tours()
        .iter()
        .map(|tour| TourSnapshot::of(tour, locale))
        .collect();

    snapshot_json(&tours)
}

/// Falls back to an empty list when the snapshot cannot be serialized.
fn snapshot_json<T: Serialize + ?Sized>(tours: &T) -> String {
    serde_json::to_string(tours).unwrap_or_else(|e| {
        warn!(error = %e, "Failed to serialize catalog snapshot; assistant sees no tours");
        "[]".to_string()
    })
}

/// Builds the full system instruction.
pub fn build_system_instruction(catalog: &dyn CatalogProvider, locale: Locale) -> String {
    format!(
        r#"You are "SinoGuide", an expert AI Travel Consultant for a premium Chinese travel agency called "SinoVoyage".
Your goal is to help users find the perfect trip, explain itinerary details, and encourage them to book.
You are polite, professional, and enthusiastic.

Here is the current list of available tours (Product Knowledge):
{snapshot}

Rules:
1. Only recommend tours from the provided list.
2. If asked about price, mention the group buy discounts (2 people get {couple} off, {min}+ get {group} off).
3. If asked about membership, explain they get cashback to their wallet for future trips.
4. Keep answers concise (under 100 words) unless asked for details.
5. If the user asks for a recommendation, ask them if they prefer History (Study), Business, or Nature (Tourism).
"#,
        snapshot = catalog_snapshot(catalog, locale),
        couple = COUPLE_DISCOUNT,
        min = GROUP_DISCOUNT_MIN_PARTICIPANTS,
        group = GROUP_DISCOUNT,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use voyage_core::StaticCatalog;

    #[test]
    fn test_snapshot_fields() {
        let catalog = StaticCatalog::seeded();
        let tour = catalog.get_tour("t1").unwrap();
        let snap = TourSnapshot::of(&tour, Locale::En);

        assert_eq!(snap.category, "STUDY");
        assert_eq!(snap.price, "¥6800.00");
        assert_eq!(snap.days, 5);
        assert_eq!(snap.availability, "8/20 booked");
        assert_eq!(snap.features.len(), 4);
    }

    #[test]
    fn test_snapshot_is_json_array_of_all_tours() {
        let catalog = StaticCatalog::seeded();
        let json: serde_json::Value =
            serde_json::from_str(&catalog_snapshot(&catalog, Locale::Zh)).unwrap();
        assert_eq!(json.as_array().unwrap().len(), 3);
        assert_eq!(json[2]["availability"], "2/16 booked");
    }

    #[test]
    fn test_rules_quote_engine_discounts() {
        let instruction = build_system_instruction(&StaticCatalog::seeded(), Locale::En);
        assert!(instruction.contains("2 people get 5% off, 3+ get 8% off"));
        assert!(instruction.contains("Only recommend tours from the provided list."));
    }

    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _serializer: S) -> Result<S::Ok, S::Error> {
            Err(serde::ser::Error::custom("broken record"))
        }
    }

    #[test]
    fn test_unserializable_snapshot_falls_back_to_empty_list() {
        assert_eq!(snapshot_json(&[Unserializable]), "[]");
    }
}
