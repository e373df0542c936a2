use serde::{Deserialize, Serialize};

/// A product in the member catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Price in rupees.
    pub price: f64,
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(rename = "inStock", default = "default_in_stock")]
    pub in_stock: bool,
}

fn default_in_stock() -> bool {
    true
}

/// Catalog listing response
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductList {
    pub products: Vec<Product>,
}

/// A line in the client-side cart, priced at add time
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    #[serde(rename = "productId")]
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    #[serde(rename = "unitPrice")]
    pub unit_price: f64,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}
