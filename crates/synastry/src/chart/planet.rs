//! Bodies that can appear in a chart and their traditional classification.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Planet {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    #[serde(alias = "rahu")]
    NorthNode,
    #[serde(alias = "ketu")]
    SouthNode,
}

/// Bodies compared in synastry, in enumeration order.
pub const TRACKED_PLANETS: [Planet; 9] = [
    Planet::Sun,
    Planet::Moon,
    Planet::Mercury,
    Planet::Venus,
    Planet::Mars,
    Planet::Jupiter,
    Planet::Saturn,
    Planet::NorthNode,
    Planet::SouthNode,
];

const BENEFIC_PLANETS: &[Planet] = &[Planet::Moon, Planet::Mercury, Planet::Venus, Planet::Jupiter];
const MALEFIC_PLANETS: &[Planet] = &[
    Planet::Mars,
    Planet::Saturn,
    Planet::NorthNode,
    Planet::SouthNode,
];

impl Planet {
    /// Lowercase identifier, matching the serialized form.
    pub fn id(&self) -> &'static str {
        match self {
            Planet::Sun => "sun",
            Planet::Moon => "moon",
            Planet::Mercury => "mercury",
            Planet::Venus => "venus",
            Planet::Mars => "mars",
            Planet::Jupiter => "jupiter",
            Planet::Saturn => "saturn",
            Planet::Uranus => "uranus",
            Planet::Neptune => "neptune",
            Planet::Pluto => "pluto",
            Planet::NorthNode => "north_node",
            Planet::SouthNode => "south_node",
        }
    }

    pub fn is_tracked(&self) -> bool {
        TRACKED_PLANETS.contains(self)
    }

    pub fn is_benefic(&self) -> bool {
        BENEFIC_PLANETS.contains(self)
    }

    pub fn is_malefic(&self) -> bool {
        MALEFIC_PLANETS.contains(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sun_is_neutral() {
        assert!(!Planet::Sun.is_benefic());
        assert!(!Planet::Sun.is_malefic());
    }

    #[test]
    fn test_outer_planets_not_tracked() {
        assert!(!Planet::Pluto.is_tracked());
        assert!(Planet::SouthNode.is_tracked());
        assert_eq!(TRACKED_PLANETS.len(), 9);
    }

    #[test]
    fn test_node_aliases_deserialize() {
        let rahu: Planet = serde_json::from_str("\"rahu\"").unwrap();
        let ketu: Planet = serde_json::from_str("\"south_node\"").unwrap();
        assert_eq!(rahu, Planet::NorthNode);
        assert_eq!(ketu, Planet::SouthNode);
    }
}
