use chrono::NaiveDate;

use common::form::ProductForm;
use common::model::product::Product;

use crate::helpers::today;

pub struct ProductFormComponent {
    pub form: ProductForm,

    /// Earliest allowed release date, fixed when the form opens.
    pub min_date: NaiveDate,
}

impl ProductFormComponent {
    pub fn new(product: Option<&Product>) -> Self {
        Self {
            form: product.map_or_else(ProductForm::new, ProductForm::for_edit),
            min_date: today(),
        }
    }
}
