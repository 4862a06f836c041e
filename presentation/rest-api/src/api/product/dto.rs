use poem_openapi::Object;
use serde::{Deserialize, Serialize};

use business::domain::product::model::Product;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: i64,
    /// Product name
    pub name: String,
    /// Free-form description
    pub description: String,
    /// Units in stock
    pub stock: i64,
    /// Unit price
    pub price: i64,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            stock: product.stock,
            price: product.price,
        }
    }
}

/// Parses a path id the lenient way: an optional sign and the leading
/// digits are read (`"12abc"` is `12`, `"7.9"` is `7`). Anything without
/// leading digits, or out of `i64` range, addresses product `0`.
pub fn parse_product_id(raw: &str) -> i64 {
    let trimmed = raw.trim_start();
    let sign_len = usize::from(trimmed.starts_with(['+', '-']));
    let digits_len = trimmed[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();

    trimmed[..sign_len + digits_len].parse().unwrap_or(0)
}
