//! Справочник соответствия регионов федеральным округам.
//!
//! Таблица фиксированная: регионы вне списка (а также пустое значение)
//! попадают в округ «Другой».

/// Федеральный округ для неизвестных регионов
pub const OTHER_COUNTY: &str = "Другой";

/// Округ по названию региона
pub fn county_of(region: &str) -> &'static str {
    match region {
        "Москва" => "Центральный",
        "СПб" => "Северо-Западный",
        "Новосибирск" => "Сибирский",
        _ => OTHER_COUNTY,
    }
}

/// Порядок вывода регионов в отчётах: Москва, СПб, Новосибирск, остальные
pub fn region_priority(region: &str) -> u8 {
    match region {
        "Москва" => 1,
        "СПб" => 2,
        "Новосибирск" => 3,
        _ => 4,
    }
}

/// Порядок вывода округов, согласован с [`region_priority`]
pub fn county_priority(county: &str) -> u8 {
    match county {
        "Центральный" => 1,
        "Северо-Западный" => 2,
        "Сибирский" => 3,
        _ => 4,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_regions_map_to_counties() {
        assert_eq!(county_of("Москва"), "Центральный");
        assert_eq!(county_of("СПб"), "Северо-Западный");
        assert_eq!(county_of("Новосибирск"), "Сибирский");
    }

    #[test]
    fn test_unknown_and_empty_regions_fall_back() {
        assert_eq!(county_of("Казань"), OTHER_COUNTY);
        assert_eq!(county_of(""), OTHER_COUNTY);
    }

    #[test]
    fn test_priorities_are_aligned() {
        for region in ["Москва", "СПб", "Новосибирск", "Тверь"] {
            assert_eq!(
                region_priority(region),
                county_priority(county_of(region)),
                "priority mismatch for {}",
                region
            );
        }
    }
}
