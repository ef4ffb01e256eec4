//! Postal address generation.
//!
//! The composed operations (`city`, `street_name`, `street_address`,
//! `full_address`) are template-driven, so locales control both the word
//! pools and how parts combine: the `en` dataset spaces street names apart
//! (`Smith Street`) while `de` compounds them (`Müllerstraße`) and puts the
//! building number last.

use fakeforge_core::{FakeValues, ForgeError, Registry};

use super::name;

pub(crate) const CATEGORY: &str = "address";

pub(crate) fn register(registry: &mut Registry) {
    registry.register(CATEGORY, "cityPrefix", city_prefix);
    registry.register(CATEGORY, "citySuffix", city_suffix);
    registry.register(CATEGORY, "streetSuffix", street_suffix);
    registry.register(CATEGORY, "buildingNumber", building_number);
    registry.register(CATEGORY, "secondaryAddress", secondary_address);
    registry.register(CATEGORY, "zipCode", zip_code);
    registry.register(CATEGORY, "city", city);
    registry.register(CATEGORY, "streetName", street_name);
    registry.register(CATEGORY, "streetAddress", street_address);
    registry.register(CATEGORY, "fullAddress", full_address);
    registry.register(CATEGORY, "state", state);
    registry.register(CATEGORY, "stateAbbr", state_abbr);
    registry.register(CATEGORY, "country", country);
    registry.register(CATEGORY, "timeZone", time_zone);
    registry.register(CATEGORY, "latitude", latitude);
    registry.register(CATEGORY, "longitude", longitude);
    registry.register(CATEGORY, "firstName", name::first_name);
    registry.register(CATEGORY, "lastName", name::last_name);
}

pub(crate) fn city_prefix(values: &mut FakeValues, _: &Registry) -> Result<String, ForgeError> {
    values.fetch("address.city_prefix")
}

pub(crate) fn city_suffix(values: &mut FakeValues, _: &Registry) -> Result<String, ForgeError> {
    values.fetch("address.city_suffix")
}

pub(crate) fn street_suffix(values: &mut FakeValues, _: &Registry) -> Result<String, ForgeError> {
    values.fetch("address.street_suffix")
}

pub(crate) fn building_number(values: &mut FakeValues, _: &Registry) -> Result<String, ForgeError> {
    let pattern = values.fetch("address.building_number")?;
    Ok(values.numerify(&pattern))
}

pub(crate) fn secondary_address(
    values: &mut FakeValues,
    _: &Registry,
) -> Result<String, ForgeError> {
    let pattern = values.fetch("address.secondary_address")?;
    Ok(values.numerify(&pattern))
}

pub(crate) fn zip_code(values: &mut FakeValues, _: &Registry) -> Result<String, ForgeError> {
    let pattern = values.fetch("address.postcode")?;
    Ok(values.bothify(&pattern))
}

pub(crate) fn city(values: &mut FakeValues, registry: &Registry) -> Result<String, ForgeError> {
    values.resolve("address.city", CATEGORY, registry)
}

pub(crate) fn street_name(
    values: &mut FakeValues,
    registry: &Registry,
) -> Result<String, ForgeError> {
    values.resolve("address.street_name", CATEGORY, registry)
}

pub(crate) fn street_address(
    values: &mut FakeValues,
    registry: &Registry,
) -> Result<String, ForgeError> {
    values.resolve("address.street_address", CATEGORY, registry)
}

pub(crate) fn full_address(
    values: &mut FakeValues,
    registry: &Registry,
) -> Result<String, ForgeError> {
    values.composite("address.formats.full_address", ", ", CATEGORY, registry)
}

pub(crate) fn state(values: &mut FakeValues, _: &Registry) -> Result<String, ForgeError> {
    values.fetch("address.state")
}

pub(crate) fn state_abbr(values: &mut FakeValues, _: &Registry) -> Result<String, ForgeError> {
    values.fetch("address.state_abbr")
}

pub(crate) fn country(values: &mut FakeValues, _: &Registry) -> Result<String, ForgeError> {
    values.fetch("address.country")
}

pub(crate) fn time_zone(values: &mut FakeValues, _: &Registry) -> Result<String, ForgeError> {
    values.fetch("address.time_zone")
}

pub(crate) fn latitude(values: &mut FakeValues, _: &Registry) -> Result<String, ForgeError> {
    Ok(format!("{:.6}", values.random().next_f64() * 180.0 - 90.0))
}

pub(crate) fn longitude(values: &mut FakeValues, _: &Registry) -> Result<String, ForgeError> {
    Ok(format!("{:.6}", values.random().next_f64() * 360.0 - 180.0))
}

/// Postal address operations.
pub struct Address<'a> {
    values: &'a mut FakeValues,
    registry: &'a Registry,
}

impl<'a> Address<'a> {
    pub(crate) fn new(values: &'a mut FakeValues, registry: &'a Registry) -> Self {
        Self { values, registry }
    }

    pub fn city_prefix(&mut self) -> Result<String, ForgeError> {
        city_prefix(self.values, self.registry)
    }

    pub fn city_suffix(&mut self) -> Result<String, ForgeError> {
        city_suffix(self.values, self.registry)
    }

    pub fn street_suffix(&mut self) -> Result<String, ForgeError> {
        street_suffix(self.values, self.registry)
    }

    /// A building number, digits drawn per the locale's patterns.
    pub fn building_number(&mut self) -> Result<String, ForgeError> {
        building_number(self.values, self.registry)
    }

    /// A unit designation such as `Apt. 650`.
    pub fn secondary_address(&mut self) -> Result<String, ForgeError> {
        secondary_address(self.values, self.registry)
    }

    /// A postal code, expanded from the locale's `postcode` patterns.
    pub fn zip_code(&mut self) -> Result<String, ForgeError> {
        zip_code(self.values, self.registry)
    }

    /// A city name built from the locale's `city` template.
    pub fn city(&mut self) -> Result<String, ForgeError> {
        city(self.values, self.registry)
    }

    /// A street name built from the locale's `street_name` template.
    pub fn street_name(&mut self) -> Result<String, ForgeError> {
        street_name(self.values, self.registry)
    }

    /// A street address built from the locale's `street_address` template.
    pub fn street_address(&mut self) -> Result<String, ForgeError> {
        street_address(self.values, self.registry)
    }

    /// Street, city, and region joined per the locale's
    /// `formats.full_address` list.
    pub fn full_address(&mut self) -> Result<String, ForgeError> {
        full_address(self.values, self.registry)
    }

    pub fn state(&mut self) -> Result<String, ForgeError> {
        state(self.values, self.registry)
    }

    pub fn state_abbr(&mut self) -> Result<String, ForgeError> {
        state_abbr(self.values, self.registry)
    }

    pub fn country(&mut self) -> Result<String, ForgeError> {
        country(self.values, self.registry)
    }

    pub fn time_zone(&mut self) -> Result<String, ForgeError> {
        time_zone(self.values, self.registry)
    }

    /// A latitude between -90 and 90, formatted to six decimal places.
    pub fn latitude(&mut self) -> Result<String, ForgeError> {
        latitude(self.values, self.registry)
    }

    /// A longitude between -180 and 180, formatted to six decimal places.
    pub fn longitude(&mut self) -> Result<String, ForgeError> {
        longitude(self.values, self.registry)
    }

    /// A given name, for address templates that embed person names.
    pub fn first_name(&mut self) -> Result<String, ForgeError> {
        name::first_name(self.values, self.registry)
    }

    /// A family name, for address templates that embed person names.
    pub fn last_name(&mut self) -> Result<String, ForgeError> {
        name::last_name(self.values, self.registry)
    }
}

#[cfg(test)]
mod tests {
    use crate::Faker;

    #[test]
    fn test_building_number_is_all_digits() {
        let mut faker = Faker::with_locale("en").unwrap().with_seed(42);

        for _ in 0..10 {
            let number = faker.address().building_number().unwrap();
            assert!((3..=5).contains(&number.len()));
            assert!(number.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_zip_code_has_no_wildcards_left() {
        let mut faker = Faker::with_locale("en").unwrap().with_seed(42);

        for _ in 0..10 {
            let zip = faker.address().zip_code().unwrap();
            assert!(!zip.contains('#'));
            assert!(!zip.contains('?'));
            assert!(zip.chars().all(|c| c.is_ascii_digit() || c == '-'));
        }
    }

    #[test]
    fn test_street_address_expands_every_placeholder() {
        let mut faker = Faker::with_locale("en").unwrap().with_seed(42);

        for _ in 0..10 {
            let street = faker.address().street_address().unwrap();
            assert!(!street.contains("#{"));
            assert!(street.chars().next().unwrap().is_ascii_digit());
        }
    }

    #[test]
    fn test_full_address_joins_four_parts() {
        let mut faker = Faker::with_locale("en").unwrap().with_seed(42);

        let full = faker.address().full_address().unwrap();
        assert_eq!(full.matches(", ").count(), 3);
        assert!(!full.contains("#{"));
    }

    #[test]
    fn test_german_street_addresses_put_the_number_last() {
        let mut faker = Faker::with_locale("de").unwrap().with_seed(42);

        for _ in 0..10 {
            let street = faker.address().street_address().unwrap();
            assert!(!street.contains("#{"));
            assert!(street.chars().last().unwrap().is_ascii_digit());
        }
    }

    #[test]
    fn test_coordinates_parse_and_stay_in_range() {
        let mut faker = Faker::with_locale("en").unwrap().with_seed(42);

        for _ in 0..20 {
            let lat: f64 = faker.address().latitude().unwrap().parse().unwrap();
            let lon: f64 = faker.address().longitude().unwrap().parse().unwrap();
            assert!((-90.0..=90.0).contains(&lat));
            assert!((-180.0..=180.0).contains(&lon));
        }
    }
}
