//! Core resolution engine for the fakeforge framework.
//!
//! This crate provides the locale-agnostic machinery that fake-data
//! categories are built on:
//!
//! - [`LocaleData`] - One locale's value tree, loaded from YAML
//! - [`RandomService`] - Seedable uniform random source
//! - [`pattern`] - `#`/`?` wildcard expansion (numerify, letterify, bothify)
//! - [`Registry`] - By-name dispatch table for generator operations
//! - [`FakeValues`] - The engine: fetch, resolve, composite
//!
//! # Architecture
//!
//! ```text
//! fakeforge-core (this crate)
//!    │
//!    └─── fakeforge   (category providers, Faker facade, CLI)
//!
//! LocaleData ─┐
//!             ├──▶ FakeValues ◀──▶ Registry ◀── provider operations
//! RandomService ┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use fakeforge_core::{FakeValues, LocaleData, RandomService};
//!
//! let yaml = "
//! en:
//!   faker:
//!     greeting:
//!       word: ['hello', 'howdy']
//! ";
//! let data = LocaleData::from_yaml_str("en", yaml).unwrap();
//! let mut values = FakeValues::new(data, RandomService::with_seed(42));
//!
//! let word = values.fetch("greeting.word").unwrap();
//! assert!(word == "hello" || word == "howdy");
//! ```

pub mod dataset;
pub mod error;
pub mod pattern;
pub mod random;
pub mod registry;
pub mod values;

// Re-exports for convenience
pub use dataset::LocaleData;
pub use error::ForgeError;
pub use random::RandomService;
pub use registry::{to_camel_case, Operation, Registry};
pub use values::FakeValues;
