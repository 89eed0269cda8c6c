//! Client-side search and page-size view over the loaded product list.
//!
//! `filtered_products` and `visible_products` are always recomputed from
//! `products`, the query and the page size; they are never patched in place.

use crate::constants::{PAGE_SIZE_OPTIONS, messages};
use crate::error::ServiceError;
use crate::model::message::MessageType;
use crate::model::product::Product;
use crate::model::response::ApiResponse;
use crate::service::Notifier;

#[derive(Debug, Clone, PartialEq)]
pub struct ProductCatalog {
    products: Vec<Product>,
    filtered_products: Vec<Product>,
    visible_products: Vec<Product>,
    search_query: String,
    page_size: usize,
}

impl Default for ProductCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductCatalog {
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            filtered_products: Vec::new(),
            visible_products: Vec::new(),
            search_query: String::new(),
            page_size: PAGE_SIZE_OPTIONS[0],
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn filtered_products(&self) -> &[Product] {
        &self.filtered_products
    }

    pub fn visible_products(&self) -> &[Product] {
        &self.visible_products
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of products matching the current query.
    pub fn total(&self) -> usize {
        self.filtered_products.len()
    }

    /// Applies the outcome of a list request.
    ///
    /// A non-empty listing replaces the product set wholesale and the current
    /// query is applied to it. An empty listing leaves the set untouched and
    /// reports "no data"; a failed request reports a service error.
    pub fn apply_load_result<N>(&mut self, result: Result<ApiResponse, ServiceError>, notifier: &N)
    where
        N: Notifier + ?Sized,
    {
        match result {
            Ok(response) if !response.data.is_empty() => {
                self.products = response.data;
                self.filtered_products = self.products.clone();
                self.apply_filter();
            }
            Ok(_) => notifier.show_message(messages::NO_DATA, MessageType::Info),
            Err(_) => notifier.show_message(messages::ERROR_SERVICE, MessageType::Error),
        }
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
        self.apply_filter();
    }

    /// Changes the page size. Only the values in [`PAGE_SIZE_OPTIONS`] are
    /// accepted; anything else is ignored and `false` is returned.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if !PAGE_SIZE_OPTIONS.contains(&page_size) {
            return false;
        }
        self.page_size = page_size;
        self.update_visible_products();
        true
    }

    /// Keeps every product where some field contains the query, ignoring case
    /// and surrounding whitespace. An empty query keeps everything.
    pub fn apply_filter(&mut self) {
        let query = self.search_query.trim().to_lowercase();
        self.filtered_products = self
            .products
            .iter()
            .filter(|product| {
                product
                    .field_strings()
                    .iter()
                    .any(|value| value.to_lowercase().contains(&query))
            })
            .cloned()
            .collect();
        self.update_visible_products();
    }

    /// Visible rows are always a prefix of the filtered list.
    pub fn update_visible_products(&mut self) {
        let end = self.page_size.min(self.filtered_products.len());
        self.visible_products = self.filtered_products[..end].to_vec();
    }
}

/// Avatar text for a product: the first letter of each word, uppercased.
/// Runs of spaces do not produce empty entries.
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::model::message::Message;
    use crate::service::fakes::RecordingNotifier;

    fn product(id: &str, name: &str, release: (i32, u32, u32)) -> Product {
        let date_release = NaiveDate::from_ymd_opt(release.0, release.1, release.2).unwrap();
        Product {
            id: id.to_string(),
            name: name.to_string(),
            description: format!("Description of {}", name),
            logo: format!("{}.png", id),
            date_release,
            date_revision: crate::validation::one_year_after(date_release),
        }
    }

    fn many(count: usize) -> Vec<Product> {
        (0..count)
            .map(|i| product(&format!("id{}", i), &format!("Product {}", i), (2030, 1, 1)))
            .collect()
    }

    fn loaded(products: Vec<Product>) -> ProductCatalog {
        let mut catalog = ProductCatalog::new();
        catalog.apply_load_result(
            Ok(ApiResponse::new("Success", products)),
            &RecordingNotifier::default(),
        );
        catalog
    }

    fn assert_invariants(catalog: &ProductCatalog) {
        assert_eq!(
            catalog.visible_products().len(),
            catalog.page_size().min(catalog.filtered_products().len())
        );
        assert!(catalog.visible_products().iter().all(|p| catalog.filtered_products().contains(p)));
        assert!(catalog.filtered_products().iter().all(|p| catalog.products().contains(p)));
    }

    #[test]
    fn defaults_to_the_smallest_page_size() {
        assert_eq!(ProductCatalog::new().page_size(), 5);
    }

    #[test]
    fn successful_load_fills_all_views() {
        let data = vec![
            product("1", "Product 1", (2023, 1, 1)),
            product("2", "Product 2", (2023, 2, 1)),
        ];
        let catalog = loaded(data.clone());
        assert_eq!(catalog.products(), data.as_slice());
        assert_eq!(catalog.filtered_products(), data.as_slice());
        assert_eq!(catalog.visible_products(), data.as_slice());
    }

    #[test]
    fn empty_load_notifies_no_data() {
        let notifier = RecordingNotifier::default();
        let mut catalog = ProductCatalog::new();
        catalog.apply_load_result(Ok(ApiResponse::new("Success", vec![])), &notifier);

        assert!(catalog.products().is_empty());
        assert_eq!(
            notifier.taken(),
            vec![Message::new(messages::NO_DATA, MessageType::Info)]
        );
    }

    #[test]
    fn failed_load_notifies_service_error_and_keeps_state() {
        let notifier = RecordingNotifier::default();
        let mut catalog = loaded(many(3));
        catalog.apply_load_result(Err(ServiceError::Status(500)), &notifier);

        assert_eq!(catalog.products().len(), 3);
        assert_eq!(
            notifier.taken(),
            vec![Message::new(messages::ERROR_SERVICE, MessageType::Error)]
        );
    }

    #[test]
    fn reload_keeps_the_active_query() {
        let mut catalog = loaded(many(3));
        catalog.set_search_query("product 1");
        catalog.apply_load_result(
            Ok(ApiResponse::new("Success", many(12))),
            &RecordingNotifier::default(),
        );
        let ids: Vec<_> = catalog.filtered_products().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["id1", "id10", "id11"]);
    }

    #[test]
    fn filter_is_case_insensitive_and_trimmed() {
        let mut catalog = loaded(vec![
            product("1", "Product 1", (2023, 1, 1)),
            product("2", "Product 2", (2023, 2, 1)),
        ]);
        catalog.set_search_query("  PRODUCT 1 ");
        assert_eq!(catalog.total(), 1);
        assert_eq!(catalog.filtered_products()[0].name, "Product 1");
        assert_invariants(&catalog);
    }

    #[test]
    fn filter_matches_any_field_including_dates() {
        let mut catalog = loaded(vec![
            product("abc", "Cuenta", (2030, 1, 1)),
            product("xyz", "Tarjeta", (2031, 5, 20)),
        ]);

        catalog.set_search_query("2032-05");
        assert_eq!(catalog.filtered_products()[0].id, "xyz");
        assert_eq!(catalog.total(), 1);

        catalog.set_search_query("abc.png");
        assert_eq!(catalog.filtered_products()[0].id, "abc");
        assert_eq!(catalog.total(), 1);

        catalog.set_search_query("nothing like this");
        assert_eq!(catalog.total(), 0);
        assert!(catalog.visible_products().is_empty());
    }

    #[test]
    fn every_filtered_product_contains_the_query() {
        let mut catalog = loaded(many(25));
        for query in ["1", "PRODUCT 2", "id", "png", "2031", ""] {
            catalog.set_search_query(query);
            let needle = query.trim().to_lowercase();
            for product in catalog.filtered_products() {
                assert!(
                    product
                        .field_strings()
                        .iter()
                        .any(|f| f.to_lowercase().contains(&needle)),
                    "{} does not match {:?}",
                    product.id,
                    query
                );
            }
            assert_invariants(&catalog);
        }
    }

    #[test]
    fn empty_query_restores_everything() {
        let mut catalog = loaded(many(7));
        catalog.set_search_query("id3");
        catalog.set_search_query("");
        assert_eq!(catalog.filtered_products(), catalog.products());
    }

    #[test]
    fn visible_rows_are_a_prefix_of_the_page_size() {
        let mut catalog = loaded(many(12));
        assert_eq!(catalog.visible_products(), &catalog.filtered_products()[..5]);

        assert!(catalog.set_page_size(10));
        assert_eq!(catalog.visible_products(), &catalog.filtered_products()[..10]);

        assert!(catalog.set_page_size(20));
        assert_eq!(catalog.visible_products().len(), 12);
        assert_invariants(&catalog);

        assert!(catalog.set_page_size(5));
        assert_eq!(catalog.visible_products().len(), 5);
        assert_eq!(catalog.visible_products()[0].id, "id0");
    }

    #[test]
    fn page_size_outside_the_options_is_rejected() {
        let mut catalog = loaded(many(12));
        assert!(!catalog.set_page_size(7));
        assert!(!catalog.set_page_size(0));
        assert_eq!(catalog.page_size(), 5);
        assert_invariants(&catalog);
    }

    #[test]
    fn initials_take_the_first_letter_of_each_word() {
        assert_eq!(initials("Test Product"), "TP");
        assert_eq!(initials("Another Test Product"), "ATP");
        assert_eq!(initials("Single"), "S");
        assert_eq!(initials("cuenta de ahorros"), "CDA");
    }

    #[test]
    fn initials_ignore_extra_spaces() {
        assert_eq!(initials("  Another   Test "), "AT");
        assert_eq!(initials(""), "");
    }
}
