//! Pricing Engine
//!
//! Discount and tax are independent pure computations. The discount side needs
//! no configuration and is exposed as free functions; the tax side reads rates
//! from an injectable [`TaxTable`].
//!
//! Percentages are in `[0, 100]`, rates in `[0, 1]`. Values are never rounded
//! here; rounding to two decimals is a presentation concern.

use serde::Serialize;
use std::collections::HashMap;

use crate::error::{CatalogError, CatalogResult};

/// Reduced rate applied to the `groceries` category
pub const GROCERIES_TAX_RATE: f64 = 0.03;

/// Rate applied to every category without an explicit entry
pub const STANDARD_TAX_RATE: f64 = 0.0475;

fn ensure_price(price: f64) -> CatalogResult<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(CatalogError::invalid_input(format!(
            "price must be a non-negative number, got {price}"
        )));
    }
    Ok(())
}

fn ensure_percentage(discount_percentage: f64) -> CatalogResult<()> {
    if !discount_percentage.is_finite() || !(0.0..=100.0).contains(&discount_percentage) {
        return Err(CatalogError::invalid_input(format!(
            "discount percentage must be between 0 and 100, got {discount_percentage}"
        )));
    }
    Ok(())
}

fn ensure_rate(rate: f64) -> CatalogResult<()> {
    if !rate.is_finite() || !(0.0..=1.0).contains(&rate) {
        return Err(CatalogError::invalid_input(format!(
            "tax rate must be between 0 and 1, got {rate}"
        )));
    }
    Ok(())
}

/// Amount taken off `price` by a `discount_percentage` in `[0, 100]`
pub fn discount_amount(price: f64, discount_percentage: f64) -> CatalogResult<f64> {
    ensure_price(price)?;
    ensure_percentage(discount_percentage)?;
    Ok(price * discount_percentage / 100.0)
}

/// `price` after the discount is applied
pub fn final_price(price: f64, discount_percentage: f64) -> CatalogResult<f64> {
    Ok(price - discount_amount(price, discount_percentage)?)
}

/// Category → tax rate mapping with a fallback rate.
///
/// Lookups are case-insensitive. Unknown categories get the default rate.
#[derive(Debug, Clone, PartialEq)]
pub struct TaxTable {
    rates: HashMap<String, f64>,
    default_rate: f64,
}

impl TaxTable {
    /// Empty table where every category pays `default_rate`
    pub fn new(default_rate: f64) -> CatalogResult<Self> {
        ensure_rate(default_rate)?;
        Ok(Self {
            rates: HashMap::new(),
            default_rate,
        })
    }

    /// Add or replace the rate for `category`
    pub fn with_rate(mut self, category: &str, rate: f64) -> CatalogResult<Self> {
        ensure_rate(rate)?;
        self.rates.insert(normalize_category(category), rate);
        Ok(self)
    }

    pub fn default_rate(&self) -> f64 {
        self.default_rate
    }

    pub fn tax_rate(&self, category: &str) -> f64 {
        self.rates
            .get(&normalize_category(category))
            .copied()
            .unwrap_or(self.default_rate)
    }

    /// Tax owed on `price`. Does not apply any discount.
    pub fn tax_amount(&self, price: f64, category: &str) -> CatalogResult<f64> {
        ensure_price(price)?;
        Ok(price * self.tax_rate(category))
    }

    /// `price` plus the tax owed on it
    pub fn price_with_tax(&self, price: f64, category: &str) -> CatalogResult<f64> {
        Ok(price + self.tax_amount(price, category)?)
    }
}

impl Default for TaxTable {
    fn default() -> Self {
        let mut rates = HashMap::new();
        rates.insert("groceries".to_string(), GROCERIES_TAX_RATE);
        Self {
            rates,
            default_rate: STANDARD_TAX_RATE,
        }
    }
}

fn normalize_category(category: &str) -> String {
    category.trim().to_lowercase()
}

/// Full discount-then-tax derivation for one price
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceBreakdown {
    pub original_price: f64,
    pub discount_percentage: f64,
    pub discount_amount: f64,
    pub final_price: f64,
    pub tax_rate: f64,
    pub tax_amount: f64,
    pub total_with_tax: f64,
}

impl PriceBreakdown {
    /// Apply the discount, then tax the discounted price.
    pub fn compute(
        price: f64,
        discount_percentage: f64,
        category: &str,
        taxes: &TaxTable,
    ) -> CatalogResult<Self> {
        let discount_amount = discount_amount(price, discount_percentage)?;
        let final_price = price - discount_amount;
        let tax_amount = taxes.tax_amount(final_price, category)?;

        Ok(Self {
            original_price: price,
            discount_percentage,
            discount_amount,
            final_price,
            tax_rate: taxes.tax_rate(category),
            tax_amount,
            total_with_tax: final_price + tax_amount,
        })
    }
}
