//! Custom plan: the regions a visitor picked on the map explorer.

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use voyage_core::{Locale, Region};

/// Ordered set of regions, unique by id, in the order they were added.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CustomPlan {
    regions: Vec<Region>,
}

impl CustomPlan {
    pub fn new() -> Self {
        CustomPlan::default()
    }

    /// Appends `region` unless one with the same id is already present.
    ///
    /// Returns whether the plan changed.
    pub fn add(&mut self, region: Region) -> bool {
        if self.contains(&region.id) {
            return false;
        }
        self.regions.push(region);
        true
    }

    /// Removes the region with `region_id`, if present.
    pub fn remove(&mut self, region_id: &str) -> bool {
        let before = self.regions.len();
        self.regions.retain(|r| r.id != region_id);
        self.regions.len() != before
    }

    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn contains(&self, region_id: &str) -> bool {
        self.regions.iter().any(|r| r.id == region_id)
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Region names in `locale`, joined for the inquiry form.
    pub fn destination_names(&self, locale: Locale) -> String {
        self.regions
            .iter()
            .map(|r| r.name.get(locale))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voyage_core::catalog::seed_regions;

    fn region(id: &str) -> Region {
        seed_regions()
            .into_iter()
            .find(|r| r.id == id)
            .unwrap()
    }

    #[test]
    fn test_add_is_unique_by_id() {
        let mut plan = CustomPlan::new();
        assert!(plan.add(region("r_xian")));
        assert!(!plan.add(region("r_xian")));
        assert_eq!(plan.len(), 1);
    }

    #[test]
    fn test_preserves_insertion_order() {
        let mut plan = CustomPlan::new();
        plan.add(region("r_guilin"));
        plan.add(region("r_beijing"));
        plan.add(region("r_xian"));

        let ids: Vec<&str> = plan.regions().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["r_guilin", "r_beijing", "r_xian"]);
    }

    #[test]
    fn test_remove() {
        let mut plan = CustomPlan::new();
        plan.add(region("r_xian"));
        assert!(!plan.remove("r_chengdu"));
        assert!(plan.remove("r_xian"));
        assert!(plan.is_empty());
    }

    #[test]
    fn test_destination_names() {
        let mut plan = CustomPlan::new();
        plan.add(region("r_beijing"));
        plan.add(region("r_chengdu"));
        assert_eq!(plan.destination_names(Locale::En), "Beijing, Chengdu");
        assert_eq!(plan.destination_names(Locale::Zh), "北京, 成都");
        assert_eq!(CustomPlan::new().destination_names(Locale::En), "");
    }
}
