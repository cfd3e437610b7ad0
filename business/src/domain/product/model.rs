use super::errors::ProductError;
use crate::domain::shared::value_objects::ProductId;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub thumbnail: String,
    pub code: String,
    pub stock: u32,
}

/// Raw create payload. Every field is optional so that absence can be
/// reported as a validation failure instead of a parse failure.
#[derive(Debug, Clone, Default)]
pub struct NewProductProps {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub thumbnail: Option<String>,
    pub code: Option<String>,
    pub stock: Option<u32>,
}

/// A validated product that has not been assigned an id yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub thumbnail: String,
    pub code: String,
    pub stock: u32,
}

/// Partial update. `None` keeps the stored value; the id cannot be patched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub thumbnail: Option<String>,
    pub code: Option<String>,
    pub stock: Option<u32>,
}

fn present_text(value: Option<String>, field: &'static str, missing: &mut Vec<&'static str>) -> String {
    match value {
        Some(text) if !text.is_empty() => text,
        _ => {
            missing.push(field);
            String::new()
        }
    }
}

impl NewProduct {
    /// Validates a create payload.
    ///
    /// Zero is treated as missing for both `price` and `stock`, and a price
    /// must be strictly positive.
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        let mut missing = Vec::new();

        let title = present_text(props.title, "title", &mut missing);
        let description = present_text(props.description, "description", &mut missing);
        let price = match props.price {
            Some(price) if price.is_finite() && price > 0.0 => price,
            _ => {
                missing.push("price");
                0.0
            }
        };
        let thumbnail = present_text(props.thumbnail, "thumbnail", &mut missing);
        let code = present_text(props.code, "code", &mut missing);
        let stock = match props.stock {
            Some(stock) if stock > 0 => stock,
            _ => {
                missing.push("stock");
                0
            }
        };

        if !missing.is_empty() {
            return Err(ProductError::MissingFields(missing));
        }

        Ok(Self {
            title,
            description,
            price,
            thumbnail,
            code,
            stock,
        })
    }
}

impl Product {
    pub fn from_new(id: ProductId, new: NewProduct) -> Self {
        Self {
            id,
            title: new.title,
            description: new.description,
            price: new.price,
            thumbnail: new.thumbnail,
            code: new.code,
            stock: new.stock,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: ProductId,
        title: String,
        description: String,
        price: f64,
        thumbnail: String,
        code: String,
        stock: u32,
    ) -> Self {
        Self {
            id,
            title,
            description,
            price,
            thumbnail,
            code,
            stock,
        }
    }

    /// Shallow field replacement. No validation is re-applied.
    pub fn apply(&mut self, patch: ProductPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(thumbnail) = patch.thumbnail {
            self.thumbnail = thumbnail;
        }
        if let Some(code) = patch.code {
            self.code = code;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
    }
}

/// Picks the id for the next product: one past the highest id in use.
///
/// Matches `len + 1` while nothing has been deleted, and never hands out an
/// id that a live product still holds. `None` once `u64::MAX` is taken.
pub fn next_product_id(products: &[Product]) -> Option<ProductId> {
    match products.iter().map(|p| p.id).max() {
        Some(max) => max.next(),
        None => Some(ProductId::FIRST),
    }
}
