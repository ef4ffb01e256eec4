//! Payment card data generation.

use fakeforge_core::{FakeValues, ForgeError, Registry};

pub(crate) const CATEGORY: &str = "business";

pub(crate) fn register(registry: &mut Registry) {
    registry.register(CATEGORY, "creditCardNumber", credit_card_number);
    registry.register(CATEGORY, "creditCardType", credit_card_type);
    registry.register(CATEGORY, "creditCardExpiry", credit_card_expiry);
}

pub(crate) fn credit_card_number(
    values: &mut FakeValues,
    _: &Registry,
) -> Result<String, ForgeError> {
    values.fetch("business.credit_card_numbers")
}

pub(crate) fn credit_card_type(
    values: &mut FakeValues,
    _: &Registry,
) -> Result<String, ForgeError> {
    values.fetch("business.credit_card_types")
}

pub(crate) fn credit_card_expiry(
    values: &mut FakeValues,
    _: &Registry,
) -> Result<String, ForgeError> {
    values.fetch("business.credit_card_expiry_dates")
}

/// Payment card operations.
pub struct Business<'a> {
    values: &'a mut FakeValues,
    registry: &'a Registry,
}

impl<'a> Business<'a> {
    pub(crate) fn new(values: &'a mut FakeValues, registry: &'a Registry) -> Self {
        Self { values, registry }
    }

    pub fn credit_card_number(&mut self) -> Result<String, ForgeError> {
        credit_card_number(self.values, self.registry)
    }

    pub fn credit_card_type(&mut self) -> Result<String, ForgeError> {
        credit_card_type(self.values, self.registry)
    }

    pub fn credit_card_expiry(&mut self) -> Result<String, ForgeError> {
        credit_card_expiry(self.values, self.registry)
    }
}
