//! # Catalog Provider
//!
//! Read-only access to tours and map regions.
//!
//! ```text
//! ┌──────────────────────┐      list_tours / get_tour / list_regions
//! │  CatalogProvider     │◄──────────────────────────────────────────
//! │  (trait)             │        booking flow, map explorer, assistant
//! └──────────┬───────────┘
//!            │ impl
//! ┌──────────▼───────────┐
//! │  StaticCatalog       │  validated at construction, immutable after
//! │  seeded(): 3 tours,  │
//! │  5 regions           │
//! └──────────────────────┘
//! ```
//!
//! A remote catalog service would implement the same trait.

mod seed;

pub use seed::{seed_regions, seed_tours};

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{Region, Tour, TourCategory};
use crate::validation::{validate_region, validate_tour};

/// Source of catalog records.
pub trait CatalogProvider: Send + Sync {
    fn list_tours(&self) -> Vec<Tour>;

    fn get_tour(&self, id: &str) -> Option<Tour>;

    fn list_regions(&self) -> Vec<Region>;

    /// All tours, or only those in `category`.
    fn tours_by_category(&self, category: Option<TourCategory>) -> Vec<Tour> {
        let tours = self.list_tours();
        match category {
            Some(category) => tours.into_iter().filter(|t| t.category == category).collect(),
            None => tours,
        }
    }

    fn get_region(&self, id: &str) -> Option<Region> {
        self.list_regions().into_iter().find(|r| r.id == id)
    }

    /// Tours linked from a region that the catalog actually carries.
    ///
    /// An empty list means the region has no packaged tour and the UI should
    /// offer a custom inquiry instead.
    fn tours_for_region(&self, region_id: &str) -> CoreResult<Vec<Tour>> {
        let region = self
            .get_region(region_id)
            .ok_or_else(|| CoreError::RegionNotFound(region_id.to_string()))?;

        Ok(region
            .linked_tour_ids
            .iter()
            .filter_map(|id| self.get_tour(id))
            .collect())
    }
}

/// In-memory catalog built from fixed records.
#[derive(Debug, Clone)]
pub struct StaticCatalog {
    tours: Vec<Tour>,
    regions: Vec<Region>,
}

impl StaticCatalog {
    /// Builds a catalog, rejecting invalid records and duplicate ids.
    pub fn new(tours: Vec<Tour>, regions: Vec<Region>) -> CoreResult<Self> {
        let mut seen = HashSet::new();
        for tour in &tours {
            validate_tour(tour).map_err(|source| CoreError::InvalidTour {
                tour_id: tour.id.clone(),
                source,
            })?;
            if !seen.insert(tour.id.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "tour id".to_string(),
                    value: tour.id.clone(),
                }
                .into());
            }
        }

        let mut seen = HashSet::new();
        for region in &regions {
            validate_region(region).map_err(|source| CoreError::InvalidRegion {
                region_id: region.id.clone(),
                source,
            })?;
            if !seen.insert(region.id.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "region id".to_string(),
                    value: region.id.clone(),
                }
                .into());
            }
        }

        Ok(StaticCatalog { tours, regions })
    }

    /// The catalog shipped with the site.
    pub fn seeded() -> Self {
        StaticCatalog {
            tours: seed_tours(),
            regions: seed_regions(),
        }
    }
}

impl CatalogProvider for StaticCatalog {
    fn list_tours(&self) -> Vec<Tour> {
        self.tours.clone()
    }

    fn get_tour(&self, id: &str) -> Option<Tour> {
        self.tours.iter().find(|t| t.id == id).cloned()
    }

    fn list_regions(&self) -> Vec<Region> {
        self.regions.clone()
    }

    fn get_region(&self, id: &str) -> Option<Region> {
        self.regions.iter().find(|r| r.id == id).cloned()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog_lists_everything() {
        let catalog = StaticCatalog::seeded();
        assert_eq!(catalog.list_tours().len(), 3);
        assert_eq!(catalog.list_regions().len(), 5);
    }

    #[test]
    fn test_seeded_matches_validated_construction() {
        let catalog = StaticCatalog::new(seed_tours(), seed_regions()).unwrap();
        assert_eq!(catalog.list_tours(), StaticCatalog::seeded().list_tours());
    }

    #[test]
    fn test_get_tour() {
        let catalog = StaticCatalog::seeded();
        assert_eq!(catalog.get_tour("t2").unwrap().category, TourCategory::Business);
        assert!(catalog.get_tour("missing").is_none());
    }

    #[test]
    fn test_tours_by_category() {
        let catalog = StaticCatalog::seeded();
        let study = catalog.tours_by_category(Some(TourCategory::Study));
        assert_eq!(study.len(), 1);
        assert_eq!(study[0].id, "t1");
        assert_eq!(catalog.tours_by_category(None).len(), 3);
    }

    #[test]
    fn test_tours_for_region() {
        let catalog = StaticCatalog::seeded();
        let linked = catalog.tours_for_region("r_xian").unwrap();
        assert_eq!(linked.len(), 1);
        assert_eq!(linked[0].id, "t1");

        // Beijing has no packaged tour yet
        assert!(catalog.tours_for_region("r_beijing").unwrap().is_empty());

        assert!(matches!(
            catalog.tours_for_region("r_nowhere"),
            Err(CoreError::RegionNotFound(_))
        ));
    }

    #[test]
    fn test_new_rejects_duplicate_tour_ids() {
        let mut tours = seed_tours();
        tours.push(tours[0].clone());
        let err = StaticCatalog::new(tours, seed_regions()).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::Duplicate { .. })));
    }

    #[test]
    fn test_new_rejects_invalid_tour() {
        let mut tours = seed_tours();
        tours[1].current_group_size = 99;
        let err = StaticCatalog::new(tours, seed_regions()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidTour { ref tour_id, .. } if tour_id == "t2"));
    }
}
