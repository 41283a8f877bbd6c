//! Catalog Domain
//!
//! Fetches product records from a remote catalog and prices them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │   Service   │  ← fetch → validate → price, batch aborts on first error
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Client    │  ← CatalogApi trait + reqwest implementation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← RawProduct (wire), CatalogProduct (validated)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Pricing   │  ← discount / tax pure functions, TaxTable
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{CatalogClientConfig, CatalogService, HttpCatalogClient};
//!
//! # async fn example() -> domain_catalog::CatalogResult<()> {
//! let client = HttpCatalogClient::new(CatalogClientConfig::default())?;
//! let service = CatalogService::new(client);
//!
//! for priced in service.list(5).await? {
//!     println!("{}: {:.2}", priced.product.title(), priced.pricing.total_with_tax);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod pricing;
pub mod service;

pub use client::{CatalogApi, HttpCatalogClient};
pub use config::CatalogClientConfig;
pub use error::{CatalogError, CatalogResult};
pub use models::{CatalogProduct, ProductPage, RawProduct};
pub use pricing::{PriceBreakdown, TaxTable, discount_amount, final_price};
pub use service::{CatalogService, PricedProduct};
