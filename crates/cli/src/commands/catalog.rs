//! Catalogue listing.

use clap::ValueEnum;
use threadline_core::{CurrencyCode, Price};
use threadline_storefront::catalog::{Catalog, Category, ProductFilter, ProductSort};

/// Product category as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Dresses,
    Tops,
    Outerwear,
    Footwear,
    Accessories,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Dresses => Self::Dresses,
            CategoryArg::Tops => Self::Tops,
            CategoryArg::Outerwear => Self::Outerwear,
            CategoryArg::Footwear => Self::Footwear,
            CategoryArg::Accessories => Self::Accessories,
        }
    }
}

/// Listing order as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Featured,
    NameAsc,
    PriceAsc,
    PriceDesc,
}

impl From<SortArg> for ProductSort {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Featured => Self::Featured,
            SortArg::NameAsc => Self::NameAsc,
            SortArg::PriceAsc => Self::PriceAsc,
            SortArg::PriceDesc => Self::PriceDesc,
        }
    }
}

/// Build the catalogue filter for the given arguments.
///
/// `--on-sale` narrows the listing; leaving it off lists everything.
#[must_use]
pub fn product_filter(
    category: Option<CategoryArg>,
    on_sale: bool,
    sort: SortArg,
) -> ProductFilter {
    ProductFilter {
        category: category.map(Category::from),
        on_sale: on_sale.then_some(true),
        sort: sort.into(),
    }
}

/// Log every product of the mock catalogue that matches the arguments.
pub fn list(
    category: Option<CategoryArg>,
    on_sale: bool,
    sort: SortArg,
    currency: CurrencyCode,
) {
    let catalog = Catalog::mock();
    let products = catalog.list(&product_filter(category, on_sale, sort));

    tracing::info!("{} of {} products", products.len(), catalog.len());
    for product in products {
        let price = Price::new(product.effective_price(), currency);
        if product.is_on_sale() {
            tracing::info!(
                "  {:<20} {:<28} {} (was {})",
                product.handle.as_str(),
                product.name,
                price,
                Price::new(product.price, currency)
            );
        } else {
            tracing::info!("  {:<20} {:<28} {}", product.handle.as_str(), product.name, price);
        }
    }
}
