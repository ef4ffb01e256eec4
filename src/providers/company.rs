//! Company name and marketing-speak generation.

use fakeforge_core::{FakeValues, ForgeError, Registry};

pub(crate) const CATEGORY: &str = "company";

pub(crate) fn register(registry: &mut Registry) {
    registry.register(CATEGORY, "suffix", suffix);
    registry.register(CATEGORY, "industry", industry);
    registry.register(CATEGORY, "name", name);
    registry.register(CATEGORY, "buzzword", buzzword);
    registry.register(CATEGORY, "bs", bs);
    registry.register(CATEGORY, "catchPhrase", catch_phrase);
}

pub(crate) fn suffix(values: &mut FakeValues, _: &Registry) -> Result<String, ForgeError> {
    values.fetch("company.suffix")
}

pub(crate) fn industry(values: &mut FakeValues, _: &Registry) -> Result<String, ForgeError> {
    values.fetch("company.industry")
}

pub(crate) fn name(values: &mut FakeValues, registry: &Registry) -> Result<String, ForgeError> {
    values.resolve("company.name", CATEGORY, registry)
}

pub(crate) fn buzzword(values: &mut FakeValues, _: &Registry) -> Result<String, ForgeError> {
    values.fetch("company.buzzwords")
}

/// One pick from each `company.bs` word pool, joined in order.
pub(crate) fn bs(values: &mut FakeValues, _: &Registry) -> Result<String, ForgeError> {
    let verb = values.fetch("company.bs.verbs")?;
    let adjective = values.fetch("company.bs.adjectives")?;
    let noun = values.fetch("company.bs.nouns")?;
    Ok(format!("{verb} {adjective} {noun}"))
}

/// One pick from each `company.catch_phrase` word pool, joined in order.
pub(crate) fn catch_phrase(values: &mut FakeValues, _: &Registry) -> Result<String, ForgeError> {
    let adjective = values.fetch("company.catch_phrase.adjectives")?;
    let descriptor = values.fetch("company.catch_phrase.descriptors")?;
    let noun = values.fetch("company.catch_phrase.nouns")?;
    Ok(format!("{adjective} {descriptor} {noun}"))
}

/// Company operations.
pub struct Company<'a> {
    values: &'a mut FakeValues,
    registry: &'a Registry,
}

impl<'a> Company<'a> {
    pub(crate) fn new(values: &'a mut FakeValues, registry: &'a Registry) -> Self {
        Self { values, registry }
    }

    /// A legal suffix such as `Inc` or `GmbH`.
    pub fn suffix(&mut self) -> Result<String, ForgeError> {
        suffix(self.values, self.registry)
    }

    pub fn industry(&mut self) -> Result<String, ForgeError> {
        industry(self.values, self.registry)
    }

    /// A company name built from the locale's `company.name` template.
    pub fn name(&mut self) -> Result<String, ForgeError> {
        name(self.values, self.registry)
    }

    pub fn buzzword(&mut self) -> Result<String, ForgeError> {
        buzzword(self.values, self.registry)
    }

    /// Corporate busy-speak, e.g. `optimize seamless paradigms`.
    pub fn bs(&mut self) -> Result<String, ForgeError> {
        bs(self.values, self.registry)
    }

    /// A slogan, e.g. `Balanced 24/7 architecture`.
    pub fn catch_phrase(&mut self) -> Result<String, ForgeError> {
        catch_phrase(self.values, self.registry)
    }
}

#[cfg(test)]
mod tests {
    use crate::Faker;

    #[test]
    fn test_company_name_uses_a_person_name_and_suffix() {
        let mut faker = Faker::with_locale("en").unwrap().with_seed(42);

        for _ in 0..10 {
            let company = faker.company().name().unwrap();
            assert!(!company.contains("#{"));
            assert!(company.contains(' '));
        }
    }

    #[test]
    fn test_bs_and_catch_phrase_have_three_pools() {
        let mut faker = Faker::with_locale("en").unwrap().with_seed(42);

        let bs = faker.company().bs().unwrap();
        assert!(bs.split(' ').count() >= 3);

        let phrase = faker.company().catch_phrase().unwrap();
        assert!(phrase.split(' ').count() >= 3);
    }
}
