//! Product catalog loaded from `content/products.json` at startup.
//!
//! The file is a JSON array of product cards:
//!
//! ```json
//! [{ "id": "p1", "name": "Red Roses", "price": 199, "image": "/static/images/red-roses.svg" }]
//! ```
//!
//! Cards without an `id` are display-only and are skipped.

use std::path::Path;
use std::sync::Arc;

use lush_petals_core::{Price, Product, ProductId};
use serde::Deserialize;
use thiserror::Error;

/// Catalog loading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {message}")]
    Io { path: String, message: String },
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A card as written in the catalog file.
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    name: String,
    price: Price,
    #[serde(default)]
    image: String,
}

/// The products offered on the listing page, in file order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Arc<Vec<Product>>,
}

impl Catalog {
    /// Load the catalog from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a valid catalog.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        let catalog = Self::from_json_str(&raw)?;
        tracing::info!(
            path = %path.display(),
            products = catalog.products.len(),
            "Loaded product catalog"
        );
        Ok(catalog)
    }

    /// Parse a catalog from JSON text.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Json` if the text is not a valid catalog.
    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(raw)?;
        Ok(Self::from_products(
            entries.into_iter().filter_map(CatalogEntry::into_product),
        ))
    }

    /// Build a catalog from products directly.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: Arc::new(products.into_iter().collect()),
        }
    }

    /// All products, in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id.as_str() == id)
    }
}

impl CatalogEntry {
    fn into_product(self) -> Option<Product> {
        let Some(id) = self.id.as_deref().and_then(|id| ProductId::parse(id).ok()) else {
            tracing::debug!(name = %self.name, "Skipping catalog card without id");
            return None;
        };
        Some(Product {
            id,
            name: self.name,
            price: self.price,
            image: self.image,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_cards_in_order() {
        let catalog = Catalog::from_json_str(
            r#"[
                {"id": "p1", "name": "Rose", "price": 199, "image": "rose.jpg"},
                {"id": "p2", "name": "Lily", "price": 249.5, "image": "lily.jpg"}
            ]"#,
        )
        .unwrap();

        let ids: Vec<_> = catalog.products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["p1", "p2"]);
        assert_eq!(catalog.find("p2").unwrap().price.to_string(), "₹249.50");
    }

    #[test]
    fn test_skips_cards_without_id() {
        let catalog = Catalog::from_json_str(
            r#"[
                {"name": "Gift Card", "price": 500},
                {"id": "", "name": "Blank", "price": 1},
                {"id": "p1", "name": "Rose", "price": 199, "image": "rose.jpg"}
            ]"#,
        )
        .unwrap();

        assert_eq!(catalog.products().len(), 1);
        assert!(catalog.find("").is_none());
    }

    #[test]
    fn test_find_unknown_is_none() {
        let catalog = Catalog::default();
        assert!(catalog.find("p1").is_none());
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(matches!(
            Catalog::from_json_str("{"),
            Err(CatalogError::Json(_))
        ));
    }

    #[test]
    fn test_bundled_catalog_parses() {
        let raw = include_str!("../content/products.json");
        let catalog = Catalog::from_json_str(raw).unwrap();
        assert!(!catalog.products().is_empty());
    }

    #[test]
    fn test_bundled_catalog_images_exist() {
        let raw = include_str!("../content/products.json");
        let catalog = Catalog::from_json_str(raw).unwrap();
        let static_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("static");

        for product in catalog.products() {
            let relative = product.image.strip_prefix("/static/").unwrap();
            assert!(
                static_dir.join(relative).is_file(),
                "missing image for {}: {}",
                product.id,
                product.image
            );
        }
    }
}
