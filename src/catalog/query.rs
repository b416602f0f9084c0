//! Catalog Queries
//!
//! Filtering and sorting for the JSON product API.

use std::str::FromStr;

use rust_decimal::Decimal;

use crate::error::{Result, ShopError};
use crate::models::{Product, ProductQuery};

// == Sort Key ==
/// Field the product list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Price,
    Name,
    Id,
}

impl FromStr for SortKey {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "price" => Ok(SortKey::Price),
            "name" => Ok(SortKey::Name),
            "id" => Ok(SortKey::Id),
            other => Err(ShopError::Validation(format!("Invalid sort key: {other}"))),
        }
    }
}

// == Sort Order ==
/// Direction of the sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl FromStr for SortOrder {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(ShopError::Validation(format!("Invalid sort order: {other}"))),
        }
    }
}

// == Product Filter ==
/// Parsed and validated form of [`ProductQuery`].
#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub search: Option<String>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    pub sort: Option<SortKey>,
    pub order: SortOrder,
}

impl TryFrom<&ProductQuery> for ProductFilter {
    type Error = ShopError;

    fn try_from(query: &ProductQuery) -> Result<Self> {
        Ok(Self {
            search: query
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_lowercase),
            min_price: parse_price_bound(query.min_price.as_deref(), "min_price")?,
            max_price: parse_price_bound(query.max_price.as_deref(), "max_price")?,
            sort: query.sort.as_deref().map(str::parse).transpose()?,
            order: query
                .order
                .as_deref()
                .map(str::parse)
                .transpose()?
                .unwrap_or_default(),
        })
    }
}

fn parse_price_bound(raw: Option<&str>, field: &str) -> Result<Option<Decimal>> {
    raw.map(|v| {
        v.trim()
            .parse::<Decimal>()
            .map_err(|_| ShopError::Validation(format!("Invalid {field}: {v}")))
    })
    .transpose()
}

impl ProductFilter {
    /// Applies the filter to a product list, preserving catalog order when
    /// no sort key is given.
    pub fn apply(&self, mut products: Vec<Product>) -> Vec<Product> {
        if let Some(needle) = &self.search {
            products.retain(|p| {
                p.name.to_lowercase().contains(needle)
                    || p.description.to_lowercase().contains(needle)
            });
        }
        if let Some(min) = self.min_price {
            products.retain(|p| p.price >= min);
        }
        if let Some(max) = self.max_price {
            products.retain(|p| p.price <= max);
        }

        if let Some(key) = self.sort {
            match key {
                SortKey::Price => products.sort_by(|a, b| a.price.cmp(&b.price)),
                SortKey::Name => {
                    products.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
                }
                SortKey::Id => products.sort_by_key(|p| p.id),
            }
            if self.order == SortOrder::Desc {
                products.reverse();
            }
        }

        products
    }
}
