//! Views the application can show and how to reach them.

use common::model::product::Product;

/// The page rendered by [`crate::app::App`].
#[derive(Debug, Clone, PartialEq)]
pub enum Route {
    List,
    Add,
    /// Form prefilled with the product being edited.
    Edit(Product),
}

pub fn go_to_products() -> Route {
    Route::List
}

/// Form for a new product, or for editing `product` when one is given.
pub fn go_to_add(product: Option<Product>) -> Route {
    match product {
        Some(product) => Route::Edit(product),
        None => Route::Add,
    }
}
