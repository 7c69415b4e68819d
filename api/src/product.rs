//! Product records as returned by the store API.

use serde::Deserialize;
use serde::Serialize;

/// Average rating and number of reviews for a product.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rating {
    pub rate: f64,
    pub count: u32,
}

/// A single product listing. Fields the catalog does not display are ignored
/// on deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    /// Absolute url of the product picture.
    pub image: String,
    #[serde(default)]
    pub rating: Rating,
}
