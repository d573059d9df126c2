//! Static registry of monitored cities.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Country code shown next to every city entry.
pub const COUNTRY_CODE: &str = "RU";

/// Cities queried on every page render, in display order.
const MONITORED_CITIES: &[&str] = &[
    "Moscow",
    "Saint Petersburg",
    "Novosibirsk",
    "Yekaterinburg",
    "Kazan",
];

/// City identifier to display name.
const CITY_NAMES: &[(&str, &str)] = &[
    ("Moscow", "Москва"),
    ("Saint Petersburg", "Санкт-Петербург"),
    ("Novosibirsk", "Новосибирск"),
    ("Yekaterinburg", "Екатеринбург"),
    ("Kazan", "Казань"),
];

static REGISTRY: Lazy<CityRegistry> = Lazy::new(CityRegistry::builtin);

/// Fixed mapping from city identifier to display name plus the ordered
/// list of monitored identifiers. Read-only after process start.
#[derive(Debug)]
pub struct CityRegistry {
    monitored: Vec<&'static str>,
    names: HashMap<&'static str, &'static str>,
}

impl CityRegistry {
    /// Build the registry from the compiled-in city tables.
    pub fn builtin() -> Self {
        Self {
            monitored: MONITORED_CITIES.to_vec(),
            names: CITY_NAMES.iter().copied().collect(),
        }
    }

    /// The process-wide registry instance.
    pub fn global() -> &'static CityRegistry {
        &REGISTRY
    }

    /// Monitored city identifiers in display order.
    pub fn monitored(&self) -> &[&'static str] {
        &self.monitored
    }

    /// Display name for a city identifier, falling back to the raw
    /// identifier when no mapping exists.
    pub fn display_name<'a>(&self, city_id: &'a str) -> &'a str {
        match self.names.get(city_id) {
            Some(name) => name,
            None => city_id,
        }
    }
}

impl Default for CityRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn monitored_order_is_stable() {
        let registry = CityRegistry::builtin();
        assert_eq!(registry.monitored(), MONITORED_CITIES);
    }

    #[test]
    fn known_city_maps_to_display_name() {
        let registry = CityRegistry::builtin();
        assert_eq!(registry.display_name("Moscow"), "Москва");
    }

    #[test]
    fn unknown_city_falls_back_to_identifier() {
        let registry = CityRegistry::builtin();
        assert_eq!(registry.display_name("Atlantis"), "Atlantis");
    }

    #[test]
    fn every_monitored_city_has_a_name() {
        let registry = CityRegistry::builtin();
        for city in registry.monitored() {
            assert_ne!(registry.display_name(city), *city, "missing name for {city}");
        }
    }
}
