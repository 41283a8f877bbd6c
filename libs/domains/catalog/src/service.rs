//! Catalog Service - fetch, validate and price in one pass

use serde::Serialize;
use tracing::instrument;

use crate::client::CatalogApi;
use crate::error::CatalogResult;
use crate::models::{CatalogProduct, RawProduct};
use crate::pricing::{PriceBreakdown, TaxTable};

/// A product together with its discount and tax derivation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PricedProduct {
    pub product: CatalogProduct,
    pub pricing: PriceBreakdown,
}

impl PricedProduct {
    pub fn from_raw(raw: RawProduct, taxes: &TaxTable) -> CatalogResult<Self> {
        let product = CatalogProduct::try_from(raw)?;
        let pricing = product.price_breakdown(taxes)?;
        Ok(Self { product, pricing })
    }
}

/// Service pricing catalog records with a configurable tax table.
///
/// Any record that fails validation or pricing aborts the whole batch.
pub struct CatalogService<A: CatalogApi> {
    api: A,
    taxes: TaxTable,
}

impl<A: CatalogApi> CatalogService<A> {
    pub fn new(api: A) -> Self {
        Self::with_tax_table(api, TaxTable::default())
    }

    pub fn with_tax_table(api: A, taxes: TaxTable) -> Self {
        Self { api, taxes }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, limit: u32) -> CatalogResult<Vec<PricedProduct>> {
        let raw = self.api.fetch_all(limit).await?;
        self.price_all(raw)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: u64) -> CatalogResult<PricedProduct> {
        let raw = self.api.fetch_by_id(id).await?;
        PricedProduct::from_raw(raw, &self.taxes)
    }

    #[instrument(skip(self))]
    pub async fn by_category(
        &self,
        category: &str,
        limit: u32,
    ) -> CatalogResult<Vec<PricedProduct>> {
        let raw = self.api.fetch_by_category(category, limit).await?;
        self.price_all(raw)
    }

    #[instrument(skip(self))]
    pub async fn search(&self, query: &str, limit: u32) -> CatalogResult<Vec<PricedProduct>> {
        let raw = self.api.search(query, limit).await?;
        self.price_all(raw)
    }

    fn price_all(&self, raw: Vec<RawProduct>) -> CatalogResult<Vec<PricedProduct>> {
        raw.into_iter()
            .map(|record| PricedProduct::from_raw(record, &self.taxes))
            .collect()
    }
}
