/// Landmark registry for the weather risk service.
///
/// Defines the canonical list of well-known extreme-weather locations the
/// service can resolve without touching the geocoding API, along with their
/// coordinates and search keywords. This is the single source of truth for
/// built-in locations — `ingest::geocode::resolve_location` consults it
/// before falling back to the network.

use crate::model::ResolvedLocation;

// ---------------------------------------------------------------------------
// Landmark metadata
// ---------------------------------------------------------------------------

/// Metadata for a single built-in landmark.
pub struct Landmark {
    /// Display name used in reports.
    pub name: &'static str,
    /// WGS84 latitude.
    pub latitude: f64,
    /// WGS84 longitude.
    pub longitude: f64,
    /// Country or continent the landmark belongs to.
    pub country: &'static str,
    /// Sub-national region, for display alongside the name.
    pub region: &'static str,
    /// Lowercase search keywords matched against user queries.
    pub keywords: &'static [&'static str],
}

impl Landmark {
    /// The registry entry as a resolved location, for handing to the
    /// forecast client and report renderer.
    pub fn to_resolved(&self) -> ResolvedLocation {
        ResolvedLocation {
            name: self.name.to_string(),
            latitude: self.latitude,
            longitude: self.longitude,
            country: self.country.to_string(),
        }
    }
}

/// All built-in landmarks, chosen for notoriously extreme weather so that
/// threshold behavior is easy to demonstrate without hunting for
/// coordinates.
pub static LANDMARK_REGISTRY: &[Landmark] = &[
    Landmark {
        name: "Sahara Desert",
        latitude: 23.4162,
        longitude: 25.6628,
        country: "Africa",
        region: "Central Sahara",
        keywords: &["sahara", "desert", "sahara desert"],
    },
    Landmark {
        name: "Mount Everest",
        latitude: 27.9881,
        longitude: 86.9250,
        country: "Nepal",
        region: "Himalayas",
        keywords: &["everest", "mount everest", "himalaya"],
    },
    Landmark {
        name: "Antarctica",
        latitude: -75.2509,
        longitude: 0.0713,
        country: "Antarctica",
        region: "South Pole Region",
        keywords: &["antarctica", "south pole", "antarctic"],
    },
    Landmark {
        name: "Death Valley",
        latitude: 36.5323,
        longitude: -116.9325,
        country: "United States",
        region: "California",
        keywords: &["death valley", "california desert"],
    },
    Landmark {
        name: "Amazon Rainforest",
        latitude: -3.4653,
        longitude: -62.2159,
        country: "Brazil",
        region: "Amazon Basin",
        keywords: &["amazon", "rainforest", "amazon rainforest", "amazon jungle"],
    },
    Landmark {
        name: "Gobi Desert",
        latitude: 42.5888,
        longitude: 103.5281,
        country: "Mongolia",
        region: "Central Asia",
        keywords: &["gobi", "gobi desert", "mongolia desert"],
    },
    Landmark {
        name: "Australian Outback",
        latitude: -25.2744,
        longitude: 133.7751,
        country: "Australia",
        region: "Central Australia",
        keywords: &["outback", "australian outback", "uluru", "ayers rock"],
    },
    Landmark {
        name: "Atacama Desert",
        latitude: -23.6980,
        longitude: -69.4781,
        country: "Chile",
        region: "Northern Chile",
        keywords: &["atacama", "atacama desert", "chile desert"],
    },
    Landmark {
        name: "K2 Mountain",
        latitude: 35.8825,
        longitude: 76.5133,
        country: "Pakistan",
        region: "Karakoram Range",
        keywords: &["k2", "karakoram", "savage mountain"],
    },
    Landmark {
        name: "North Pole",
        latitude: 90.0,
        longitude: 0.0,
        country: "Arctic Ocean",
        region: "Arctic",
        keywords: &["north pole", "arctic", "arctic ocean"],
    },
    Landmark {
        name: "Denali",
        latitude: 63.0692,
        longitude: -151.0070,
        country: "United States",
        region: "Alaska",
        keywords: &["denali", "mount mckinley", "alaska"],
    },
    Landmark {
        name: "Kilimanjaro",
        latitude: -3.0674,
        longitude: 37.3556,
        country: "Tanzania",
        region: "East Africa",
        keywords: &["kilimanjaro", "mount kilimanjaro", "tanzania"],
    },
    Landmark {
        name: "Grand Canyon",
        latitude: 36.0544,
        longitude: -112.1401,
        country: "United States",
        region: "Arizona",
        keywords: &["grand canyon", "arizona canyon"],
    },
    Landmark {
        name: "Patagonia",
        latitude: -41.8102,
        longitude: -68.9063,
        country: "Argentina",
        region: "Southern Argentina",
        keywords: &["patagonia", "argentina patagonia", "tierra del fuego"],
    },
    Landmark {
        name: "Siberia",
        latitude: 60.0,
        longitude: 105.0,
        country: "Russia",
        region: "Northern Russia",
        keywords: &["siberia", "siberian", "russia siberia"],
    },
    Landmark {
        name: "Greenland Ice Sheet",
        latitude: 72.0,
        longitude: -40.0,
        country: "Greenland",
        region: "Greenland",
        keywords: &["greenland", "ice sheet", "greenland ice"],
    },
    Landmark {
        name: "Mojave Desert",
        latitude: 35.0456,
        longitude: -115.4734,
        country: "United States",
        region: "California/Nevada",
        keywords: &["mojave", "mojave desert", "las vegas desert"],
    },
    Landmark {
        name: "Kalahari Desert",
        latitude: -24.5,
        longitude: 21.0,
        country: "Botswana",
        region: "Southern Africa",
        keywords: &["kalahari", "kalahari desert", "botswana desert"],
    },
    Landmark {
        name: "Iceland Highlands",
        latitude: 64.9631,
        longitude: -19.0208,
        country: "Iceland",
        region: "Central Iceland",
        keywords: &["iceland", "iceland highlands", "reykjavik"],
    },
    Landmark {
        name: "Namib Desert",
        latitude: -24.7603,
        longitude: 15.3705,
        country: "Namibia",
        region: "Southwestern Africa",
        keywords: &["namib", "namib desert", "namibia desert"],
    },
];

// ---------------------------------------------------------------------------
// Lookup helpers
// ---------------------------------------------------------------------------

/// Returns every landmark whose keywords match the query, preserving
/// registry order. Matching is case-insensitive and symmetric: a keyword
/// containing the query matches, and so does a query containing a keyword
/// ("mount everest base camp" still finds Everest).
pub fn search_landmarks(query: &str) -> Vec<&'static Landmark> {
    let term = query.to_lowercase();
    let term = term.trim();
    if term.is_empty() {
        return Vec::new();
    }

    LANDMARK_REGISTRY
        .iter()
        .filter(|l| {
            l.keywords
                .iter()
                .any(|k| k.contains(term) || term.contains(k))
        })
        .collect()
}

/// First registry match for the query, if any. Registry order breaks ties.
pub fn find_landmark(query: &str) -> Option<&'static Landmark> {
    search_landmarks(query).into_iter().next()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
