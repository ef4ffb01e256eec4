//! The [`Faker`] facade: one value per locale tying the engine, the
//! operation registry, and the category proxies together.

use fakeforge_core::{to_camel_case, FakeValues, ForgeError, LocaleData, RandomService, Registry};

use crate::locales;
use crate::providers::{
    self, Address, Business, Code, Company, Internet, Lorem, Name, PhoneNumber,
};

/// Locale used by [`Faker::new`].
pub const DEFAULT_LOCALE: &str = "en";

/// Locale-bound fake data generator.
///
/// Construction loads the locale dataset and builds the full operation
/// registry. Every generating call takes `&mut self` since it advances the
/// random source; use one `Faker` per thread.
#[derive(Debug)]
pub struct Faker {
    values: FakeValues,
    registry: Registry,
}

impl Faker {
    /// A generator for the default locale.
    pub fn new() -> Result<Self, ForgeError> {
        Self::with_locale(DEFAULT_LOCALE)
    }

    /// A generator for a builtin locale (see
    /// [`BUILTIN_LOCALES`](crate::locales::BUILTIN_LOCALES)).
    pub fn with_locale(locale: &str) -> Result<Self, ForgeError> {
        let yaml = locales::builtin(locale)
            .ok_or_else(|| ForgeError::LocaleNotFound(locale.to_string()))?;
        let data = LocaleData::from_yaml_str(locale, yaml)?;
        Ok(Self::from_parts(data, RandomService::new()))
    }

    /// A generator over an already loaded dataset, e.g. one read from a
    /// custom file with [`LocaleData::from_file`].
    pub fn from_parts(data: LocaleData, random: RandomService) -> Self {
        Self {
            values: FakeValues::new(data, random),
            registry: providers::registry(),
        }
    }

    /// Reseed the random source for reproducible output.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.values.set_random(RandomService::with_seed(seed));
        self
    }

    /// The locale this generator draws from.
    pub fn locale(&self) -> &str {
        self.values.locale()
    }

    /// The operation registry, for listing categories and operations.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Invoke an operation by category and operation name.
    ///
    /// The operation name is accepted in either spelling: `street_name` and
    /// `streetName` reach the same operation.
    pub fn call(&mut self, category: &str, operation: &str) -> Result<String, ForgeError> {
        let op = self.registry.get(category, &to_camel_case(operation))?;
        op(&mut self.values, &self.registry)
    }

    /// Replace each `#` in `input` with a random digit.
    pub fn numerify(&mut self, input: &str) -> String {
        self.values.numerify(input)
    }

    /// Replace each `?` in `input` with a random lowercase letter.
    pub fn letterify(&mut self, input: &str) -> String {
        self.values.letterify(input)
    }

    /// Replace `#` wildcards with digits and `?` wildcards with letters.
    pub fn bothify(&mut self, input: &str) -> String {
        self.values.bothify(input)
    }

    /// Personal name operations.
    pub fn name(&mut self) -> Name<'_> {
        Name::new(&mut self.values, &self.registry)
    }

    /// Postal address operations.
    pub fn address(&mut self) -> Address<'_> {
        Address::new(&mut self.values, &self.registry)
    }

    /// Company operations.
    pub fn company(&mut self) -> Company<'_> {
        Company::new(&mut self.values, &self.registry)
    }

    /// Email and domain operations.
    pub fn internet(&mut self) -> Internet<'_> {
        Internet::new(&mut self.values, &self.registry)
    }

    /// Phone number operations.
    pub fn phone_number(&mut self) -> PhoneNumber<'_> {
        PhoneNumber::new(&mut self.values, &self.registry)
    }

    /// Filler text operations.
    pub fn lorem(&mut self) -> Lorem<'_> {
        Lorem::new(&mut self.values, &self.registry)
    }

    /// Payment card operations.
    pub fn business(&mut self) -> Business<'_> {
        Business::new(&mut self.values, &self.registry)
    }

    /// Product code operations.
    pub fn code(&mut self) -> Code<'_> {
        Code::new(&mut self.values, &self.registry)
    }
}
