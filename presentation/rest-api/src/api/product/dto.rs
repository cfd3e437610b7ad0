use poem_openapi::Object;

use business::domain::product::model::Product;

/// Request to create a product.
///
/// Every field is optional on the wire so that a missing field is reported
/// by validation with a 400 and the list of missing fields.
#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product title
    pub title: Option<String>,
    /// Product description
    pub description: Option<String>,
    /// Unit price, must be greater than zero
    pub price: Option<f64>,
    /// Image path or URL
    pub thumbnail: Option<String>,
    /// Short product code
    pub code: Option<String>,
    /// Units in stock, must be greater than zero
    pub stock: Option<u32>,
}

/// Partial update of a product. Omitted fields keep their value.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    /// New price; zero is accepted here
    pub price: Option<f64>,
    pub thumbnail: Option<String>,
    pub code: Option<String>,
    pub stock: Option<u32>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product identifier assigned by the catalog
    pub id: u64,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub thumbnail: String,
    pub code: String,
    pub stock: u32,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.value(),
            title: product.title,
            description: product.description,
            price: product.price,
            thumbnail: product.thumbnail,
            code: product.code,
            stock: product.stock,
        }
    }
}

/// Confirmation body for operations that return no product.
#[derive(Debug, Clone, Object)]
pub struct MessageResponse {
    pub message: String,
}
