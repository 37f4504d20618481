//! Sample plant profiles grouped by season.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::season::Season;

/// A plant as shown on a gallery card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlantProfile {
    pub name: String,
    pub scientific_name: String,
    pub image: String,
    pub medicinal_properties: String,
    pub care_tips: String,
}

impl PlantProfile {
    fn sample(name: &str, scientific_name: &str, photo_id: u32, medicinal: &str, care: &str) -> Self {
        Self {
            name: name.to_string(),
            scientific_name: scientific_name.to_string(),
            image: format!("https://picsum.photos/id/{photo_id}/600/400"),
            medicinal_properties: medicinal.to_string(),
            care_tips: care.to_string(),
        }
    }
}

/// Plant profiles per season.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SampleCatalog {
    plants: FxHashMap<Season, Vec<PlantProfile>>,
}

impl SampleCatalog {
    /// An empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The page's built-in sample data, three plants per season.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();

        catalog.insert(Season::Spring, PlantProfile::sample(
            "Rose", "Rosa spp.", 1025,
            "Fragrant petals used in traditional remedies.",
            "Prune dead wood; apply balanced fertilizer in early spring.",
        ));
        catalog.insert(Season::Spring, PlantProfile::sample(
            "Marigold", "Tagetes spp.", 1011,
            "Used as antiseptic topical preparations.",
            "Full sun; deadhead spent blooms; water when topsoil dries.",
        ));
        catalog.insert(Season::Spring, PlantProfile::sample(
            "Aloe Vera", "Aloe barbadensis", 1015,
            "Soothing gel for burns and skin.",
            "Bright light; water sparingly; allow soil to dry between waterings.",
        ));

        catalog.insert(Season::Summer, PlantProfile::sample(
            "Sunflower", "Helianthus annuus", 1020,
            "Seeds nutritious; petals used in folk remedies.",
            "Full sun; deep watering once or twice weekly.",
        ));
        catalog.insert(Season::Summer, PlantProfile::sample(
            "Basil", "Ocimum basilicum", 1021,
            "Used as digestive aid.",
            "Full sun; pinch tips to encourage bushy growth.",
        ));
        catalog.insert(Season::Summer, PlantProfile::sample(
            "Snake Plant", "Sansevieria trifasciata", 1022,
            "Low-maintenance; air-purifying.",
            "Low watering; bright indirect light preferred.",
        ));

        catalog.insert(Season::Autumn, PlantProfile::sample(
            "Chrysanthemum", "Chrysanthemum spp.", 1023,
            "Tea used for cooling effects.",
            "Well-drained soil; moderate watering; deadhead for more blooms.",
        ));
        catalog.insert(Season::Autumn, PlantProfile::sample(
            "Aster", "Aster spp.", 1024,
            "Used in folk medicine as mild diuretics.",
            "Full sun to part shade; water when dry.",
        ));
        catalog.insert(Season::Autumn, PlantProfile::sample(
            "Garlic", "Allium sativum", 1035,
            "Antimicrobial properties.",
            "Plant in loose soil; mulch for winter protection.",
        ));

        catalog.insert(Season::Winter, PlantProfile::sample(
            "Pansy", "Viola tricolor", 1037,
            "Used in topical applications.",
            "Protect from heavy frost; water lightly.",
        ));
        catalog.insert(Season::Winter, PlantProfile::sample(
            "Rosemary", "Salvia rosmarinus", 1040,
            "Aromatic herb used in folk remedies.",
            "Full sun; reduce watering; protect from hard freezes.",
        ));
        catalog.insert(Season::Winter, PlantProfile::sample(
            "Kale", "Brassica oleracea var. acephala", 1041,
            "Nutrient-dense leafy green.",
            "Regular watering; harvest outer leaves as needed.",
        ));

        catalog
    }

    /// Add a plant to a season, after any already there.
    pub fn insert(&mut self, season: Season, plant: PlantProfile) {
        self.plants.entry(season).or_default().push(plant);
    }

    /// Plants for a season, in insertion order.
    #[must_use]
    pub fn plants(&self, season: Season) -> &[PlantProfile] {
        self.plants.get(&season).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of profiles across all seasons.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plants.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
