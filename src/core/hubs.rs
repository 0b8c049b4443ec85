use crate::domain::model::{Coordinate, IndustrialHub};
use crate::utils::error::{AiServiceError, Result};
use serde::Deserialize;

const BUNDLED_CATALOG: &str = include_str!("../../data/hubs.toml");

#[derive(Debug, Deserialize)]
struct CatalogFile {
    hubs: Vec<IndustrialHub>,
}

/// Read-only catalog of industrial hubs, loaded once at startup.
/// Insertion order is preserved so nearest-hub ties resolve
/// deterministically to the earliest entry.
#[derive(Debug, Clone)]
pub struct HubCatalog {
    hubs: Vec<IndustrialHub>,
}

impl HubCatalog {
    pub fn bundled() -> Result<Self> {
        Self::from_toml_str(BUNDLED_CATALOG)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let file: CatalogFile = toml::from_str(raw)?;
        if file.hubs.is_empty() {
            return Err(AiServiceError::ConfigError {
                message: "hub catalog is empty".to_string(),
            });
        }
        Ok(Self { hubs: file.hubs })
    }

    pub fn hubs(&self) -> &[IndustrialHub] {
        &self.hubs
    }

    pub fn len(&self) -> usize {
        self.hubs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hubs.is_empty()
    }

    /// Nearest hub by planar degree-space distance. All catalog hubs sit
    /// within one metro region, so no geodesic correction is applied.
    /// NaN distances never win the comparison, so a degenerate query
    /// still resolves to the first entry.
    pub fn nearest(&self, point: Coordinate) -> &IndustrialHub {
        let mut best = &self.hubs[0];
        let mut best_distance = f64::INFINITY;

        for hub in &self.hubs {
            let d_lat = point.lat - hub.coordinates.lat;
            let d_lon = point.lon - hub.coordinates.lon;
            let distance = (d_lat * d_lat + d_lon * d_lon).sqrt();
            if distance < best_distance {
                best_distance = distance;
                best = hub;
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_loads_all_hubs_in_order() {
        let catalog = HubCatalog::bundled().unwrap();
        assert_eq!(catalog.len(), 10);
        assert_eq!(catalog.hubs()[0].name, "Okhla Industrial Area");
        assert_eq!(catalog.hubs()[9].name, "Narela Industrial Area");
    }

    #[test]
    fn test_nearest_at_exact_hub_coordinates_returns_that_hub() {
        let catalog = HubCatalog::bundled().unwrap();
        for hub in catalog.hubs() {
            assert_eq!(catalog.nearest(hub.coordinates).name, hub.name);
        }
    }

    #[test]
    fn test_nearest_resolves_nearby_points() {
        let catalog = HubCatalog::bundled().unwrap();
        assert_eq!(
            catalog.nearest(Coordinate::new(28.53, 77.27)).name,
            "Okhla Industrial Area"
        );
        assert_eq!(
            catalog.nearest(Coordinate::new(28.85, 77.10)).name,
            "Narela Industrial Area"
        );
    }

    #[test]
    fn test_tie_resolves_to_first_catalog_entry() {
        let catalog = HubCatalog::from_toml_str(
            r#"
            [[hubs]]
            name = "West"
            type = "Packaging"
            traffic_level = "Low"
            peak_hours = []
            coordinates = { lat = 0.0, lon = -1.0 }

            [[hubs]]
            name = "East"
            type = "Packaging"
            traffic_level = "Low"
            peak_hours = []
            coordinates = { lat = 0.0, lon = 1.0 }
            "#,
        )
        .unwrap();

        assert_eq!(catalog.nearest(Coordinate::new(0.0, 0.0)).name, "West");
    }

    #[test]
    fn test_nan_query_returns_first_entry_without_panicking() {
        let catalog = HubCatalog::bundled().unwrap();
        let hub = catalog.nearest(Coordinate::new(f64::NAN, f64::NAN));
        assert_eq!(hub.name, "Okhla Industrial Area");
    }

    #[test]
    fn test_empty_catalog_is_rejected() {
        assert!(HubCatalog::from_toml_str("hubs = []").is_err());
    }
}
