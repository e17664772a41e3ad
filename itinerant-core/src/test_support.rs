//! Fixtures shared by unit and behaviour tests.

use geo::Coord;

use crate::{CityPools, PointOfInterest, PoolCatalog};

/// Point of interest at the origin with a single tag.
pub fn poi(name: &str, tag: &str) -> PointOfInterest {
    poi_at(name, tag, 0.0, 0.0)
}

/// Point of interest at `(lon, lat)` with a single tag.
pub fn poi_at(name: &str, tag: &str, lon: f64, lat: f64) -> PointOfInterest {
    PointOfInterest::new(name, Coord { x: lon, y: lat }, [tag])
}

/// A well-stocked set of pools for Lisbon.
pub fn lisbon_pools() -> CityPools {
    CityPools {
        attractions: vec![
            poi_at("Belém Tower", "monument", -9.2160, 38.6916),
            poi_at("Santa Justa Lift", "architecture", -9.1393, 38.7122),
            poi_at("São Jorge Castle", "historic", -9.1334, 38.7139),
        ],
        culture: vec![
            poi_at("Gulbenkian Museum", "museum", -9.1545, 38.7372),
            poi_at("MAAT", "museum", -9.1942, 38.6958),
            poi_at("Tile Museum", "museum", -9.1136, 38.7247),
        ],
        nature: vec![
            poi_at("Estrela Garden", "leisure.park", -9.1600, 38.7141),
            poi_at("Monsanto Forest", "natural.wood", -9.1900, 38.7300),
        ],
        dining: vec![
            poi_at("Time Out Market", "food", -9.1458, 38.7069),
            poi_at("Tasca do Chico", "restaurant", -9.1437, 38.7114),
            poi_at("Cervejaria Ramiro", "restaurant", -9.1356, 38.7217),
        ],
        lodging: vec![
            poi_at("Alfama Guesthouse", "accommodation.guest_house", -9.1300, 38.7110),
            poi_at("Baixa Hotel", "accommodation.hotel", -9.1380, 38.7100),
        ],
    }
}

/// A smaller set of pools for Porto.
pub fn porto_pools() -> CityPools {
    CityPools {
        attractions: vec![
            poi_at("Clérigos Tower", "monument", -8.6146, 41.1456),
            poi_at("Dom Luís I Bridge", "architecture", -8.6094, 41.1398),
        ],
        culture: vec![poi_at("Serralves", "museum", -8.6599, 41.1596)],
        nature: vec![poi_at("Crystal Palace Gardens", "leisure.park", -8.6254, 41.1484)],
        dining: vec![
            poi_at("Café Santiago", "restaurant", -8.6078, 41.1470),
            poi_at("Bolhão Market", "food", -8.6058, 41.1496),
        ],
        lodging: vec![poi_at("Ribeira Inn", "accommodation.hotel", -8.6130, 41.1406)],
    }
}

/// Catalog with Lisbon and Porto.
pub fn sample_catalog() -> PoolCatalog {
    PoolCatalog::new()
        .with_city("Lisbon", lisbon_pools())
        .with_city("Porto", porto_pools())
}
