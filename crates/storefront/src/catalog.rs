//! In-memory product catalogue.
//!
//! The storefront has no product database; the catalogue is a fixed list of
//! mock products. Listing supports filtering by category and sale status and
//! sorting by name or effective price.

use std::cmp::Ordering;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use threadline_cart::{CartLine, CartLineError};
use threadline_core::{LineId, ProductId};

/// Errors raised when turning a catalogue entry into a cart line.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("size {size} is not offered for {product}")]
    UnknownSize { product: ProductId, size: String },
    #[error("colour {color} is not offered for {product}")]
    UnknownColor { product: ProductId, color: String },
    #[error("{product} requires a {option} selection")]
    MissingOption {
        product: ProductId,
        option: &'static str,
    },
    #[error(transparent)]
    InvalidLine(#[from] CartLineError),
}

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Dresses,
    Tops,
    Outerwear,
    Footwear,
    Accessories,
}

/// Listing sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductSort {
    /// Catalogue order.
    #[default]
    Featured,
    NameAsc,
    PriceAsc,
    PriceDesc,
}

/// Listing filter.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct ProductFilter {
    pub category: Option<Category>,
    pub on_sale: Option<bool>,
    #[serde(default)]
    pub sort: ProductSort,
}

/// A catalogue product.
#[derive(Debug, Clone)]
pub struct Product {
    pub handle: ProductId,
    pub name: String,
    pub description: String,
    pub category: Category,
    pub image_url: String,
    pub price: Decimal,
    pub sale_price: Option<Decimal>,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
}

impl Product {
    /// Price a shopper pays per unit.
    #[must_use]
    pub fn effective_price(&self) -> Decimal {
        self.sale_price.unwrap_or(self.price)
    }

    #[must_use]
    pub const fn is_on_sale(&self) -> bool {
        self.sale_price.is_some()
    }

    /// Build a cart line for one variant of this product.
    ///
    /// Size and colour must be chosen from the offered options when the product
    /// has any, and are folded into the line id.
    ///
    /// # Errors
    ///
    /// Returns an error for an unoffered or missing option, or a zero quantity.
    pub fn cart_line(
        &self,
        size: Option<&str>,
        color: Option<&str>,
        quantity: u32,
    ) -> Result<CartLine, CatalogError> {
        let size = self.pick_option(&self.sizes, size, "size")?;
        let color = self.pick_option(&self.colors, color, "colour")?;

        let id = LineId::for_variant(&self.handle, size, color);
        let mut builder = CartLine::builder(id, self.name.clone(), self.price)
            .image_url(self.image_url.clone())
            .quantity(quantity);
        if let Some(sale) = self.sale_price {
            builder = builder.sale_price(sale);
        }
        if let Some(size) = size {
            builder = builder.size(size);
        }
        if let Some(color) = color {
            builder = builder.color(color);
        }
        Ok(builder.build()?)
    }

    fn pick_option<'a>(
        &self,
        offered: &[String],
        chosen: Option<&'a str>,
        option: &'static str,
    ) -> Result<Option<&'a str>, CatalogError> {
        match chosen {
            None if offered.is_empty() => Ok(None),
            None => Err(CatalogError::MissingOption {
                product: self.handle.clone(),
                option,
            }),
            Some(value) if offered.iter().any(|o| o == value) => Ok(Some(value)),
            Some(value) if option == "size" => Err(CatalogError::UnknownSize {
                product: self.handle.clone(),
                size: value.to_string(),
            }),
            Some(value) => Err(CatalogError::UnknownColor {
                product: self.handle.clone(),
                color: value.to_string(),
            }),
        }
    }
}

/// The product catalogue.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    #[must_use]
    pub const fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Look up a product by handle.
    #[must_use]
    pub fn get(&self, handle: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.handle == handle)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products matching `filter`, in the requested order.
    #[must_use]
    pub fn list(&self, filter: &ProductFilter) -> Vec<&Product> {
        let mut products: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| filter.category.is_none_or(|c| p.category == c))
            .filter(|p| filter.on_sale.is_none_or(|s| p.is_on_sale() == s))
            .collect();

        let by_price = |a: &&Product, b: &&Product| -> Ordering {
            a.effective_price().cmp(&b.effective_price())
        };
        match filter.sort {
            ProductSort::Featured => {}
            ProductSort::NameAsc => products.sort_by(|a, b| a.name.cmp(&b.name)),
            ProductSort::PriceAsc => products.sort_by(by_price),
            ProductSort::PriceDesc => products.sort_by(|a, b| by_price(b, a)),
        }
        products
    }

    /// The built-in mock catalogue.
    #[must_use]
    pub fn mock() -> Self {
        let options = |list: &[&str]| list.iter().map(ToString::to_string).collect::<Vec<_>>();

        Self::new(vec![
            Product {
                handle: ProductId::new("silk-wrap-dress"),
                name: "Silk Wrap Dress".to_string(),
                description: "Bias-cut silk wrap dress with a tie waist.".to_string(),
                category: Category::Dresses,
                image_url: "/images/products/silk-wrap-dress.jpg".to_string(),
                price: Decimal::new(18900, 2),
                sale_price: Some(Decimal::new(14900, 2)),
                sizes: options(&["XS", "S", "M", "L"]),
                colors: options(&["emerald", "black"]),
            },
            Product {
                handle: ProductId::new("linen-shirt"),
                name: "Relaxed Linen Shirt".to_string(),
                description: "Garment-dyed linen shirt with a camp collar.".to_string(),
                category: Category::Tops,
                image_url: "/images/products/linen-shirt.jpg".to_string(),
                price: Decimal::new(7800, 2),
                sale_price: None,
                sizes: options(&["S", "M", "L", "XL"]),
                colors: options(&["sand", "white", "sage"]),
            },
            Product {
                handle: ProductId::new("merino-crew"),
                name: "Merino Crew Knit".to_string(),
                description: "Fine-gauge merino sweater.".to_string(),
                category: Category::Tops,
                image_url: "/images/products/merino-crew.jpg".to_string(),
                price: Decimal::new(9500, 2),
                sale_price: Some(Decimal::new(6650, 2)),
                sizes: options(&["S", "M", "L"]),
                colors: options(&["navy", "oatmeal"]),
            },
            Product {
                handle: ProductId::new("wool-overcoat"),
                name: "Double-Faced Wool Overcoat".to_string(),
                description: "Unlined overcoat in double-faced wool.".to_string(),
                category: Category::Outerwear,
                image_url: "/images/products/wool-overcoat.jpg".to_string(),
                price: Decimal::new(42000, 2),
                sale_price: None,
                sizes: options(&["S", "M", "L"]),
                colors: options(&["camel", "charcoal"]),
            },
            Product {
                handle: ProductId::new("leather-ankle-boot"),
                name: "Leather Ankle Boot".to_string(),
                description: "Chelsea boot on a stacked heel.".to_string(),
                category: Category::Footwear,
                image_url: "/images/products/leather-ankle-boot.jpg".to_string(),
                price: Decimal::new(21500, 2),
                sale_price: None,
                sizes: options(&["37", "38", "39", "40", "41"]),
                colors: options(&["black", "tan"]),
            },
            Product {
                handle: ProductId::new("canvas-tote"),
                name: "Canvas Tote".to_string(),
                description: "Heavyweight canvas tote with leather handles.".to_string(),
                category: Category::Accessories,
                image_url: "/images/products/canvas-tote.jpg".to_string(),
                price: Decimal::new(4500, 2),
                sale_price: Some(Decimal::new(3000, 2)),
                sizes: Vec::new(),
                colors: Vec::new(),
            },
        ])
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_by_category() {
        let catalog = Catalog::mock();
        let filter = ProductFilter {
            category: Some(Category::Tops),
            ..ProductFilter::default()
        };
        let handles: Vec<&str> = catalog
            .list(&filter)
            .iter()
            .map(|p| p.handle.as_str())
            .collect();
        assert_eq!(handles, ["linen-shirt", "merino-crew"]);
    }

    #[test]
    fn test_filter_on_sale_and_sort_by_price() {
        let catalog = Catalog::mock();
        let filter = ProductFilter {
            on_sale: Some(true),
            sort: ProductSort::PriceAsc,
            ..ProductFilter::default()
        };
        let prices: Vec<Decimal> = catalog
            .list(&filter)
            .iter()
            .map(|p| p.effective_price())
            .collect();
        assert_eq!(
            prices,
            [
                Decimal::new(3000, 2),
                Decimal::new(6650, 2),
                Decimal::new(14900, 2)
            ]
        );
    }

    #[test]
    fn test_sort_price_desc_and_name() {
        let catalog = Catalog::mock();
        let desc = catalog.list(&ProductFilter {
            sort: ProductSort::PriceDesc,
            ..ProductFilter::default()
        });
        assert_eq!(desc.first().unwrap().handle.as_str(), "wool-overcoat");

        let by_name = catalog.list(&ProductFilter {
            sort: ProductSort::NameAsc,
            ..ProductFilter::default()
        });
        assert_eq!(by_name.first().unwrap().name, "Canvas Tote");
    }

    #[test]
    fn test_cart_line_for_variant() {
        let catalog = Catalog::mock();
        let dress = catalog.get(&ProductId::new("silk-wrap-dress")).unwrap();
        let line = dress.cart_line(Some("M"), Some("black"), 2).unwrap();

        assert_eq!(line.id().as_str(), "silk-wrap-dress|M|black");
        assert_eq!(line.effective_price(), Decimal::new(14900, 2));
        assert_eq!(line.unit_price(), Decimal::new(18900, 2));
        assert_eq!(line.quantity(), 2);
    }

    #[test]
    fn test_cart_line_rejects_unoffered_options() {
        let catalog = Catalog::mock();
        let shirt = catalog.get(&ProductId::new("linen-shirt")).unwrap();

        assert!(matches!(
            shirt.cart_line(Some("XXS"), Some("sand"), 1),
            Err(CatalogError::UnknownSize { .. })
        ));
        assert!(matches!(
            shirt.cart_line(Some("M"), Some("red"), 1),
            Err(CatalogError::UnknownColor { .. })
        ));
        assert!(matches!(
            shirt.cart_line(None, Some("sand"), 1),
            Err(CatalogError::MissingOption { option: "size", .. })
        ));
        assert!(matches!(
            shirt.cart_line(Some("M"), Some("sand"), 0),
            Err(CatalogError::InvalidLine(CartLineError::ZeroQuantity))
        ));
    }

    #[test]
    fn test_cart_line_without_options() {
        let catalog = Catalog::mock();
        let tote = catalog.get(&ProductId::new("canvas-tote")).unwrap();
        let line = tote.cart_line(None, None, 1).unwrap();
        assert_eq!(line.id().as_str(), "canvas-tote");
        assert!(line.size().is_none());
    }
}
