//! FakeForge Library
//!
//! A library for generating realistic fake data (names, addresses, companies,
//! phone numbers, and more) from locale-keyed YAML datasets.
//!
//! # Features
//!
//! - Locale datasets: builtin `en` and `de` data, custom datasets from YAML files
//! - Placeholder templates: dataset entries like `#{Name.first_name} #{last_name}`
//!   expand recursively through the operation registry
//! - Wildcard patterns: `#` becomes a random digit, `?` a random letter
//! - Reproducibility: seed the random source to replay identical output
//! - Category proxies: typed accessors per category on top of a string-keyed
//!   `call(category, operation)` entry point
//!
//! # Library Usage
//!
//! ```
//! use fakeforge::Faker;
//!
//! let mut faker = Faker::new().unwrap().with_seed(42);
//!
//! let name = faker.name().full_name().unwrap();
//! assert!(!name.is_empty());
//!
//! // The same operation, addressed by name.
//! let city = faker.call("address", "city").unwrap();
//! assert!(!city.is_empty());
//! ```
//!
//! # CLI Usage
//!
//! ```bash
//! # One German street address
//! fakeforge generate address.street_address --locale de
//!
//! # Five reproducible full names
//! fakeforge generate name.full_name --count 5 --seed 42
//!
//! # List every category and operation
//! fakeforge categories
//! ```

pub mod faker;
pub mod locales;
pub mod providers;

pub use faker::{Faker, DEFAULT_LOCALE};
pub use locales::BUILTIN_LOCALES;

// Re-export the engine types so callers need only this crate.
pub use fakeforge_core::{FakeValues, ForgeError, LocaleData, RandomService, Registry};

pub use providers::{Address, Business, Code, Company, Internet, Lorem, Name, PhoneNumber};
