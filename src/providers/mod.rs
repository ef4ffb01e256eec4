//! Category providers: named groups of generator operations.
//!
//! Each module owns one category. It exposes its operations in two forms:
//! free functions shaped as [`fakeforge_core::Operation`] that get entered
//! into the registry (and are thereby reachable from `#{...}` templates and
//! composite format lists), and a typed proxy struct with the same
//! operations as methods for direct callers.

pub mod address;
pub mod business;
pub mod code;
pub mod company;
pub mod internet;
pub mod lorem;
pub mod name;
pub mod phone_number;

pub use address::Address;
pub use business::Business;
pub use code::Code;
pub use company::Company;
pub use internet::Internet;
pub use lorem::Lorem;
pub use name::Name;
pub use phone_number::PhoneNumber;

use fakeforge_core::Registry;

/// Build the operation registry over every category provider.
pub fn registry() -> Registry {
    let mut registry = Registry::new();
    address::register(&mut registry);
    business::register(&mut registry);
    code::register(&mut registry);
    company::register(&mut registry);
    internet::register(&mut registry);
    lorem::register(&mut registry);
    name::register(&mut registry);
    phone_number::register(&mut registry);
    registry
}
