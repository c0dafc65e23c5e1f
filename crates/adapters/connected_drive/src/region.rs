//! Country → API region lookup.

use chargebot_app::ports::RegionResolver;
use chargebot_domain::account::Region;
use chargebot_domain::error::{ChargebotError, UnknownCountryError};

const NORTH_AMERICA: &[&str] = &["Canada", "Mexico", "Puerto Rico", "United States", "USA"];

const CHINA: &[&str] = &["China"];

const REST_OF_WORLD: &[&str] = &[
    "Argentina",
    "Australia",
    "Austria",
    "Bahrain",
    "Belgium",
    "Brazil",
    "Bulgaria",
    "Chile",
    "Croatia",
    "Cyprus",
    "Czech Republic",
    "Denmark",
    "Estonia",
    "Finland",
    "France",
    "Germany",
    "Greece",
    "Hong Kong",
    "Hungary",
    "Iceland",
    "India",
    "Indonesia",
    "Ireland",
    "Israel",
    "Italy",
    "Japan",
    "Kuwait",
    "Latvia",
    "Lithuania",
    "Luxembourg",
    "Malaysia",
    "Malta",
    "Netherlands",
    "New Zealand",
    "Norway",
    "Oman",
    "Philippines",
    "Poland",
    "Portugal",
    "Qatar",
    "Romania",
    "Russia",
    "Saudi Arabia",
    "Serbia",
    "Singapore",
    "Slovakia",
    "Slovenia",
    "South Africa",
    "South Korea",
    "Spain",
    "Sweden",
    "Switzerland",
    "Taiwan",
    "Thailand",
    "Turkey",
    "Ukraine",
    "United Arab Emirates",
    "United Kingdom",
];

/// Resolves country names (case-insensitive) from a fixed table.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountryRegionResolver;

impl RegionResolver for CountryRegionResolver {
    fn resolve(&self, country: &str) -> Result<Region, ChargebotError> {
        let wanted = country.trim();
        let known = |table: &[&str]| table.iter().any(|name| name.eq_ignore_ascii_case(wanted));

        if known(NORTH_AMERICA) {
            Ok(Region::NorthAmerica)
        } else if known(CHINA) {
            Ok(Region::China)
        } else if known(REST_OF_WORLD) {
            Ok(Region::RestOfWorld)
        } else {
            Err(UnknownCountryError(country.to_string()).into())
        }
    }
}

/// API root serving a region.
#[must_use]
pub fn server_url(region: Region) -> &'static str {
    match region {
        Region::NorthAmerica => "https://b2vapi.bmwgroup.us",
        Region::China => "https://b2vapi.bmwgroup.cn:8592",
        Region::RestOfWorld => "https://b2vapi.bmwgroup.com",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_resolve_rest_of_world_country() {
        assert_eq!(
            CountryRegionResolver.resolve("Germany").unwrap(),
            Region::RestOfWorld
        );
    }

    #[test]
    fn should_resolve_north_america_and_china() {
        assert_eq!(
            CountryRegionResolver.resolve("Canada").unwrap(),
            Region::NorthAmerica
        );
        assert_eq!(CountryRegionResolver.resolve("China").unwrap(), Region::China);
    }

    #[test]
    fn should_ignore_case_and_surrounding_whitespace() {
        assert_eq!(
            CountryRegionResolver.resolve("  united kingdom ").unwrap(),
            Region::RestOfWorld
        );
    }

    #[test]
    fn should_reject_unknown_country() {
        let err = CountryRegionResolver.resolve("Atlantis").unwrap_err();
        assert!(matches!(
            err,
            ChargebotError::UnknownCountry(UnknownCountryError(ref name)) if name == "Atlantis"
        ));
    }

    #[test]
    fn should_map_every_region_to_https_server() {
        for region in [Region::NorthAmerica, Region::China, Region::RestOfWorld] {
            assert!(server_url(region).starts_with("https://"));
        }
    }
}
