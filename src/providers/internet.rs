//! Email address and domain generation.
//!
//! Operations compose sanitized person-name parts in code rather than
//! through templates, since the parts need lowercasing and separator
//! characters stripped before they are address-safe.

use fakeforge_core::{FakeValues, ForgeError, Registry};

use super::name;

pub(crate) const CATEGORY: &str = "internet";

pub(crate) fn register(registry: &mut Registry) {
    registry.register(CATEGORY, "domainSuffix", domain_suffix);
    registry.register(CATEGORY, "domainWord", domain_word);
    registry.register(CATEGORY, "domainName", domain_name);
    registry.register(CATEGORY, "userName", user_name);
    registry.register(CATEGORY, "email", email);
    registry.register(CATEGORY, "freeEmail", free_email);
}

/// Lowercase a name part and drop everything that is not a letter or digit.
fn sanitize(part: &str) -> String {
    part.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric())
        .collect()
}

pub(crate) fn domain_suffix(values: &mut FakeValues, _: &Registry) -> Result<String, ForgeError> {
    values.fetch("internet.domain_suffix")
}

pub(crate) fn domain_word(values: &mut FakeValues, registry: &Registry) -> Result<String, ForgeError> {
    let last = name::last_name(values, registry)?;
    Ok(sanitize(&last))
}

pub(crate) fn domain_name(values: &mut FakeValues, registry: &Registry) -> Result<String, ForgeError> {
    let word = domain_word(values, registry)?;
    let suffix = domain_suffix(values, registry)?;
    Ok(format!("{word}.{suffix}"))
}

pub(crate) fn user_name(values: &mut FakeValues, registry: &Registry) -> Result<String, ForgeError> {
    let first = name::first_name(values, registry)?;
    let last = name::last_name(values, registry)?;
    Ok(format!("{}.{}", sanitize(&first), sanitize(&last)))
}

pub(crate) fn email(values: &mut FakeValues, registry: &Registry) -> Result<String, ForgeError> {
    let user = user_name(values, registry)?;
    let domain = domain_name(values, registry)?;
    Ok(format!("{user}@{domain}"))
}

pub(crate) fn free_email(values: &mut FakeValues, registry: &Registry) -> Result<String, ForgeError> {
    let user = user_name(values, registry)?;
    let provider = values.fetch("internet.free_email")?;
    Ok(format!("{user}@{provider}"))
}

/// Internet operations.
pub struct Internet<'a> {
    values: &'a mut FakeValues,
    registry: &'a Registry,
}

impl<'a> Internet<'a> {
    pub(crate) fn new(values: &'a mut FakeValues, registry: &'a Registry) -> Self {
        Self { values, registry }
    }

    /// A top-level domain from the locale's pool.
    pub fn domain_suffix(&mut self) -> Result<String, ForgeError> {
        domain_suffix(self.values, self.registry)
    }

    /// A sanitized family name usable as a domain label.
    pub fn domain_word(&mut self) -> Result<String, ForgeError> {
        domain_word(self.values, self.registry)
    }

    /// A domain such as `miller.net`.
    pub fn domain_name(&mut self) -> Result<String, ForgeError> {
        domain_name(self.values, self.registry)
    }

    /// A `first.last` login name.
    pub fn user_name(&mut self) -> Result<String, ForgeError> {
        user_name(self.values, self.registry)
    }

    /// An address on a generated company domain.
    pub fn email(&mut self) -> Result<String, ForgeError> {
        email(self.values, self.registry)
    }

    /// An address on one of the locale's free mail providers.
    pub fn free_email(&mut self) -> Result<String, ForgeError> {
        free_email(self.values, self.registry)
    }
}

#[cfg(test)]
mod tests {
    use crate::Faker;

    #[test]
    fn test_email_shape() {
        let mut faker = Faker::with_locale("en").unwrap().with_seed(42);

        for _ in 0..10 {
            let email = faker.internet().email().unwrap();
            let (user, domain) = email.split_once('@').unwrap();
            assert!(user.contains('.'));
            assert!(domain.contains('.'));
            assert!(!email.contains(' '));
            assert_eq!(email, email.to_lowercase());
        }
    }

    #[test]
    fn test_user_name_is_sanitized() {
        let mut faker = Faker::with_locale("en").unwrap().with_seed(42);

        for _ in 0..10 {
            let user = faker.internet().user_name().unwrap();
            assert!(user
                .chars()
                .all(|c| c.is_alphanumeric() && !c.is_uppercase() || c == '.'));
        }
    }

    #[test]
    fn test_free_email_uses_a_known_provider() {
        let mut faker = Faker::with_locale("en").unwrap().with_seed(42);

        let email = faker.internet().free_email().unwrap();
        let domain = email.split_once('@').unwrap().1;
        assert!(["gmail.com", "yahoo.com", "hotmail.com"].contains(&domain));
    }
}
