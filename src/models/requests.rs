//! Request DTOs for the storefront API
//!
//! Defines the structure of incoming query parameters, cart forms and the
//! multipart product form used by the JSON API for create/update.

use axum::extract::Multipart;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{Result, ShopError};

// == Product Query ==
/// Query parameters accepted by `GET /api/products`.
///
/// All parameters arrive as raw strings; parsing and range validation happen
/// in [`crate::catalog::ProductFilter`] so that malformed values become a
/// uniform 400 response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductQuery {
    /// Case-insensitive substring over name and description
    #[serde(default)]
    pub search: Option<String>,
    /// Lower price bound, inclusive
    #[serde(default)]
    pub min_price: Option<String>,
    /// Upper price bound, inclusive
    #[serde(default)]
    pub max_price: Option<String>,
    /// Sort key: `price`, `name` or `id`
    #[serde(default)]
    pub sort: Option<String>,
    /// Sort order: `asc` or `desc`
    #[serde(default)]
    pub order: Option<String>,
}

// == Cart Update Form ==
/// Form body for `POST /cart/add/:id` and `POST /cart/update/:id`.
#[derive(Debug, Clone, Deserialize)]
pub struct CartUpdateForm {
    /// Requested quantity; the route decides the default when absent
    #[serde(default)]
    pub quantity: Option<String>,
}

impl CartUpdateForm {
    /// Parses the quantity, falling back to `default` when the field is
    /// absent or not a number (an unparsable quantity behaves like an
    /// omitted one, it does not fail the request).
    pub fn quantity_or(&self, default: i64) -> i64 {
        self.quantity
            .as_deref()
            .and_then(|q| q.trim().parse().ok())
            .unwrap_or(default)
    }
}

// == Uploaded Image ==
/// An image file received through the multipart product form.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// Original filename as sent by the client
    pub filename: String,
    /// Content type declared for the part, if any
    pub content_type: Option<String>,
    /// Raw file bytes
    pub bytes: Vec<u8>,
}

// == Product Form ==
/// Accumulated fields of the multipart product form.
///
/// Parts other than `name`, `description`, `price` and `image` are ignored.
/// An `image` part without a filename or without content counts as absent.
#[derive(Debug, Default)]
pub struct ProductForm {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<String>,
    pub image: Option<UploadedImage>,
}

/// Required fields of a product creation, all present and validated.
#[derive(Debug)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image: UploadedImage,
}

/// Replacement fields of a product update; the image is optional and keeps
/// the existing asset when absent.
#[derive(Debug)]
pub struct ProductPatch {
    pub name: String,
    pub description: String,
    pub price: Decimal,
    pub image: Option<UploadedImage>,
}

impl ProductForm {
    /// Drains a multipart body into a `ProductForm`.
    pub async fn from_multipart(mut multipart: Multipart) -> Result<Self> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ShopError::Validation(format!("Malformed multipart body: {e}")))?
        {
            let name = field.name().unwrap_or("").to_string();
            match name.as_str() {
                "name" => form.name = Some(read_text(field).await?),
                "description" => form.description = Some(read_text(field).await?),
                "price" => form.price = Some(read_text(field).await?),
                "image" => {
                    let filename = field.file_name().map(str::to_string);
                    let content_type = field.content_type().map(str::to_string);
                    let bytes = field
                        .bytes()
                        .await
                        .map_err(|e| ShopError::Validation(format!("Unreadable image part: {e}")))?;
                    if let Some(filename) = filename {
                        if !filename.is_empty() && !bytes.is_empty() {
                            form.image = Some(UploadedImage {
                                filename,
                                content_type,
                                bytes: bytes.to_vec(),
                            });
                        }
                    }
                }
                _ => {}
            }
        }

        Ok(form)
    }

    /// Validates the form for a create: every field is required.
    pub fn into_new(self) -> Result<NewProduct> {
        let price = parse_price(self.price)?;
        Ok(NewProduct {
            name: require_text(self.name, "name")?,
            description: require_text(self.description, "description")?,
            price,
            image: self
                .image
                .ok_or_else(|| missing("image"))?,
        })
    }

    /// Validates the form for an update: the image may be omitted.
    pub fn into_patch(self) -> Result<ProductPatch> {
        let price = parse_price(self.price)?;
        Ok(ProductPatch {
            name: require_text(self.name, "name")?,
            description: require_text(self.description, "description")?,
            price,
            image: self.image,
        })
    }
}

async fn read_text(field: axum::extract::multipart::Field<'_>) -> Result<String> {
    field
        .text()
        .await
        .map_err(|e| ShopError::Validation(format!("Unreadable form field: {e}")))
}

fn missing(field: &str) -> ShopError {
    ShopError::Validation(format!("Missing required field: {field}"))
}

fn require_text(value: Option<String>, field: &str) -> Result<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(missing(field)),
    }
}

fn parse_price(value: Option<String>) -> Result<Decimal> {
    let raw = value.ok_or_else(|| missing("price"))?;
    let price: Decimal = raw
        .trim()
        .parse()
        .map_err(|_| ShopError::Validation(format!("Invalid price: {raw}")))?;
    if price < Decimal::ZERO {
        return Err(ShopError::Validation("Price must be non-negative".to_string()));
    }
    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> UploadedImage {
        UploadedImage {
            filename: "widget.png".to_string(),
            content_type: Some("image/png".to_string()),
            bytes: vec![1, 2, 3],
        }
    }

    #[test]
    fn test_into_new_requires_all_fields() {
        let form = ProductForm {
            name: Some("Widget".to_string()),
            description: Some("A widget".to_string()),
            price: None,
            image: Some(image()),
        };
        let err = form.into_new().unwrap_err();
        assert!(matches!(err, ShopError::Validation(msg) if msg.contains("price")));
    }

    #[test]
    fn test_into_new_rejects_blank_name() {
        let form = ProductForm {
            name: Some("   ".to_string()),
            description: Some("A widget".to_string()),
            price: Some("9.99".to_string()),
            image: Some(image()),
        };
        assert!(form.into_new().is_err());
    }

    #[test]
    fn test_into_new_rejects_negative_price() {
        let form = ProductForm {
            name: Some("Widget".to_string()),
            description: Some("A widget".to_string()),
            price: Some("-1".to_string()),
            image: Some(image()),
        };
        assert!(form.into_new().is_err());
    }

    #[test]
    fn test_into_new_parses_price_exactly() {
        let form = ProductForm {
            name: Some("Widget".to_string()),
            description: Some("A widget".to_string()),
            price: Some("19.99".to_string()),
            image: Some(image()),
        };
        let new = form.into_new().unwrap();
        assert_eq!(new.price, Decimal::new(1999, 2));
    }

    #[test]
    fn test_into_patch_allows_missing_image() {
        let form = ProductForm {
            name: Some("Widget".to_string()),
            description: Some("A widget".to_string()),
            price: Some("5".to_string()),
            image: None,
        };
        let patch = form.into_patch().unwrap();
        assert!(patch.image.is_none());
    }

    #[test]
    fn test_cart_update_form_quantity_is_optional() {
        let form: CartUpdateForm = serde_json::from_str("{}").unwrap();
        assert_eq!(form.quantity_or(1), 1);

        let form: CartUpdateForm = serde_json::from_str(r#"{"quantity": "3"}"#).unwrap();
        assert_eq!(form.quantity_or(0), 3);
    }

    #[test]
    fn test_cart_update_form_garbage_quantity_falls_back() {
        let form: CartUpdateForm = serde_json::from_str(r#"{"quantity": "lots"}"#).unwrap();
        assert_eq!(form.quantity_or(0), 0);
    }
}
