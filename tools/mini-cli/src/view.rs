//! Text and JSON views of listings and carts.

use mini_commerce::cart::{CartLedger, CartTotals};
use mini_commerce::catalog::{Product, StockStatus};
use mini_commerce::search::{Listing, QueryParams};
use serde::Serialize;

use crate::output::{stock_badge, Output};

const PRODUCT_WIDTHS: [usize; 5] = [4, 16, 10, 12, 12];
const CART_WIDTHS: [usize; 5] = [4, 16, 6, 10, 12];

/// A listed product as emitted in JSON.
#[derive(Serialize)]
pub struct ProductView<'a> {
    #[serde(flatten)]
    pub product: &'a Product,
    pub status: StockStatus,
    pub can_add: bool,
}

impl<'a> From<&'a Product> for ProductView<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            product,
            status: product.stock_status(),
            can_add: product.can_add(),
        }
    }
}

/// A cart line as emitted in JSON.
#[derive(Serialize)]
pub struct CartLineView<'a> {
    #[serde(flatten)]
    pub product: &'a Product,
    pub qty: u32,
    pub line_total: u64,
}

/// The cart as emitted in JSON.
#[derive(Serialize)]
pub struct CartView<'a> {
    pub items: Vec<CartLineView<'a>>,
    #[serde(flatten)]
    pub totals: CartTotals,
}

impl<'a> From<&'a CartLedger> for CartView<'a> {
    fn from(cart: &'a CartLedger) -> Self {
        Self {
            items: cart
                .entries()
                .map(|e| CartLineView {
                    product: &e.product,
                    qty: e.qty,
                    line_total: e.line_total(),
                })
                .collect(),
            totals: cart.totals(),
        }
    }
}

pub fn listing_json(listing: &Listing) -> Vec<ProductView<'_>> {
    listing.iter().map(ProductView::from).collect()
}

/// One-line summary of the active parameters.
pub fn describe_params(params: &QueryParams) -> String {
    let search = if params.search_text.is_empty() {
        "-".to_string()
    } else {
        format!("{:?}", params.search_text)
    };
    format!(
        "search {} | category {} | {}",
        search,
        params.category,
        params.sort.display_name()
    )
}

pub fn render_listing(output: &Output, title: &str, listing: &Listing) {
    output.header(title);
    if listing.is_empty() {
        output.info(Listing::EMPTY_MESSAGE);
        return;
    }

    output.table_row(&["ID", "Title", "Price", "Category", "Status"], &PRODUCT_WIDTHS);
    for product in listing {
        let id = product.id.to_string();
        let price = product.price.to_string();
        let badge = stock_badge(product.stock_status());
        output.table_row(
            &[
                id.as_str(),
                product.title.as_str(),
                price.as_str(),
                product.category.as_str(),
                badge.as_str(),
            ],
            &PRODUCT_WIDTHS,
        );
    }
}

pub fn render_cart(output: &Output, cart: &CartLedger) {
    output.header("Cart");
    if cart.is_empty() {
        output.info(CartLedger::EMPTY_MESSAGE);
    } else {
        output.table_row(&["ID", "Title", "Qty", "Price", "Line total"], &CART_WIDTHS);
        for entry in cart.entries() {
            let id = entry.product.id.to_string();
            let qty = entry.qty.to_string();
            let price = entry.product.price.to_string();
            let line = entry.line_total().to_string();
            output.table_row(
                &[
                    id.as_str(),
                    entry.product.title.as_str(),
                    qty.as_str(),
                    price.as_str(),
                    line.as_str(),
                ],
                &CART_WIDTHS,
            );
        }
    }

    let totals = cart.totals();
    output.kv("Total Items", &totals.total_items.to_string());
    output.kv("Total Price", &totals.total_price.to_string());
}
