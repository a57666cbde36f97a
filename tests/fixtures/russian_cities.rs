//! Russian city coordinates for realistic test fixtures.

/// A named city with coordinates and a priority.
#[derive(Debug, Clone)]
pub struct City {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
    pub priority: f64,
}

impl City {
    pub const fn new(name: &'static str, lat: f64, lng: f64, priority: f64) -> Self {
        Self {
            name,
            lat,
            lng,
            priority,
        }
    }

    pub fn point(&self) -> trip_planner::Point {
        trip_planner::Point::new(self.lat, self.lng, self.priority, self.name)
    }
}

// ============================================================================
// Volga and Urals
// ============================================================================

pub const VOLGA_URALS: &[City] = &[
    City::new("Kazan", 55.8304, 49.0661, 9.0),
    City::new("Samara", 53.2005, 50.1000, 4.0),
    City::new("Nizhny Novgorod", 56.2965, 43.9361, 3.0),
    City::new("Yekaterinburg", 56.8389, 60.6057, 8.0),
    City::new("Chelyabinsk", 55.1599, 61.4029, 7.0),
    City::new("Perm", 58.0105, 56.2502, 5.0),
    City::new("Ufa", 54.7388, 55.9721, 6.0),
];

// ============================================================================
// Golden Ring (short distances, good for walking/cycling budgets)
// ============================================================================

pub const GOLDEN_RING: &[City] = &[
    City::new("Vladimir", 56.1290, 40.4066, 6.0),
    City::new("Suzdal", 56.4197, 40.4494, 9.0),
    City::new("Ivanovo", 57.0004, 40.9739, 2.0),
    City::new("Kostroma", 57.7665, 40.9269, 4.0),
    City::new("Yaroslavl", 57.6261, 39.8845, 7.0),
    City::new("Rostov Veliky", 57.1859, 39.4143, 5.0),
    City::new("Pereslavl-Zalessky", 56.7386, 38.8541, 3.0),
    City::new("Sergiev Posad", 56.3153, 38.1359, 8.0),
];

pub fn points(cities: &[City]) -> Vec<trip_planner::Point> {
    cities.iter().map(City::point).collect()
}
