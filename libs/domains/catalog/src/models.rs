use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::pricing::{self, PriceBreakdown, TaxTable};

/// Product record exactly as the catalog API returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProduct {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub price: f64,
    pub discount_percentage: f64,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub stock: i64,
    /// Absent upstream for some categories (e.g. groceries)
    #[serde(default)]
    pub brand: String,
    pub category: String,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub images: Vec<String>,
}

/// One page of a listing, category or search response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductPage {
    pub products: Vec<RawProduct>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub skip: u64,
    #[serde(default)]
    pub limit: u64,
}

/// A validated catalog product.
///
/// Built once from a [`RawProduct`] and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogProduct {
    id: u64,
    title: String,
    description: String,
    price: f64,
    discount_percentage: f64,
    rating: f64,
    stock: u64,
    brand: String,
    category: String,
    thumbnail: String,
    images: Vec<String>,
}

impl CatalogProduct {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn discount_percentage(&self) -> f64 {
        self.discount_percentage
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    pub fn stock(&self) -> u64 {
        self.stock
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn thumbnail(&self) -> &str {
        &self.thumbnail
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    /// Price after this product's own discount
    pub fn price_after_discount(&self) -> CatalogResult<f64> {
        pricing::final_price(self.price, self.discount_percentage)
    }

    /// Discount then tax, using this product's price, discount and category
    pub fn price_breakdown(&self, taxes: &TaxTable) -> CatalogResult<PriceBreakdown> {
        PriceBreakdown::compute(self.price, self.discount_percentage, &self.category, taxes)
    }
}

impl TryFrom<RawProduct> for CatalogProduct {
    type Error = CatalogError;

    /// Checks the numeric invariants only; text fields are taken as-is.
    fn try_from(raw: RawProduct) -> CatalogResult<Self> {
        let id = u64::try_from(raw.id)
            .ok()
            .filter(|id| *id > 0)
            .ok_or_else(|| {
                CatalogError::invalid_input(format!("product id must be positive, got {}", raw.id))
            })?;

        if !raw.price.is_finite() || raw.price < 0.0 {
            return Err(CatalogError::invalid_input(format!(
                "product {id} has invalid price {}",
                raw.price
            )));
        }

        if !raw.discount_percentage.is_finite() || !(0.0..=100.0).contains(&raw.discount_percentage)
        {
            return Err(CatalogError::invalid_input(format!(
                "product {id} has discount percentage {} outside 0-100",
                raw.discount_percentage
            )));
        }

        let stock = u64::try_from(raw.stock).map_err(|_| {
            CatalogError::invalid_input(format!("product {id} has negative stock {}", raw.stock))
        })?;

        Ok(Self {
            id,
            title: raw.title,
            description: raw.description,
            price: raw.price,
            discount_percentage: raw.discount_percentage,
            rating: raw.rating,
            stock,
            brand: raw.brand,
            category: raw.category,
            thumbnail: raw.thumbnail,
            images: raw.images,
        })
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::RawProduct;

    pub fn raw_product(
        id: i64,
        price: f64,
        discount_percentage: f64,
        category: &str,
    ) -> RawProduct {
        RawProduct {
            id,
            title: format!("Product {id}"),
            description: "A test product".to_string(),
            price,
            discount_percentage,
            rating: 4.5,
            stock: 12,
            brand: "Acme".to_string(),
            category: category.to_string(),
            thumbnail: format!("https://cdn.example.com/{id}/thumbnail.png"),
            images: vec![format!("https://cdn.example.com/{id}/1.png")],
        }
    }
}
