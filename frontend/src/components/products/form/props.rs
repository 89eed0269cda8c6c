use yew::prelude::*;

use common::model::product::Product;

use crate::navigation::Route;
use crate::services::Services;

#[derive(Properties, PartialEq, Clone)]
pub struct ProductFormProps {
    pub services: Services,

    /// Product to edit. `None` opens an empty form for a new product.
    ///
    /// Read once when the component is created; the parent keys the form by
    /// product id so switching products mounts a fresh form.
    #[prop_or_default]
    pub product: Option<Product>,

    pub on_navigate: Callback<Route>,
}
