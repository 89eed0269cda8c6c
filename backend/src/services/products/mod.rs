//! # Products API
//!
//! Routes every request under `/bp/products` to its handler. Each handler
//! lives in its own module and exposes a `process` function.
//!
//! Every reply except id verification is an [`ApiResponse`] envelope whose
//! `message` tells the client what happened.

mod create;
mod delete;
mod list;
mod update;
mod verify;

use actix_web::error::InternalError;
use actix_web::web::{self, delete, get, post, put, scope};
use actix_web::{HttpResponse, Scope};
use common::constants::responses::{DUPLICATE_ID, INVALID_BODY, NOT_FOUND};
use common::constants::{PRODUCTS_PATH, VERIFICATION_PATH};
use common::model::product::Product;
use common::model::response::ApiResponse;
use common::validation::{
    one_year_after, validate, FieldRules, DESCRIPTION_RULES, ID_RULES, LOGO_RULES, NAME_RULES,
};
use log::{error, warn};

use crate::store::StoreError;

/// Configures the Actix `Scope` for the product routes.
///
/// * `GET /` lists every product in creation order.
/// * `POST /` creates a product.
/// * `PUT /{id}` replaces the product stored under `id`.
/// * `DELETE /{id}` removes it.
/// * `GET /verification/{id}` answers `true` when `id` is taken.
pub fn configure_routes() -> Scope {
    scope(PRODUCTS_PATH)
        .app_data(json_config())
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route(&format!("{VERIFICATION_PATH}/{{id}}"), get().to(verify::process))
        .route("/{id}", put().to(update::process))
        .route("/{id}", delete().to(delete::process))
}

/// Malformed JSON bodies get the same 400 envelope as bodies that break a
/// field rule.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(64 * 1024)
        .error_handler(|err, _req| {
            warn!("Rejected product body: {}", err);
            InternalError::from_response(err, invalid_body()).into()
        })
}

fn invalid_body() -> HttpResponse {
    HttpResponse::BadRequest().json(ApiResponse::new(INVALID_BODY, Vec::new()))
}

/// Structural checks the server applies to incoming products. The release date
/// may lie in the past; only the revision offset is enforced.
fn check_product(product: &Product) -> bool {
    let fields: [(&str, &FieldRules); 4] = [
        (&product.id, &ID_RULES),
        (&product.name, &NAME_RULES),
        (&product.description, &DESCRIPTION_RULES),
        (&product.logo, &LOGO_RULES),
    ];
    let fields_ok = fields
        .iter()
        .all(|(value, rules)| validate(value, rules, product.date_release).is_empty());

    fields_ok && product.date_revision == one_year_after(product.date_release)
}

fn store_error_response(err: StoreError) -> HttpResponse {
    match err {
        StoreError::NotFound(_) => {
            HttpResponse::NotFound().json(ApiResponse::new(NOT_FOUND, Vec::new()))
        }
        StoreError::Duplicate(_) => {
            HttpResponse::BadRequest().json(ApiResponse::new(DUPLICATE_ID, Vec::new()))
        }
        other => {
            error!("Product store failure: {}", other);
            HttpResponse::ServiceUnavailable()
                .json(ApiResponse::new(format!("Error accessing products: {}", other), Vec::new()))
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use actix_web::web;
    use chrono::NaiveDate;
    use common::model::product::Product;

    use crate::store::ProductStore;

    pub fn product(id: &str) -> Product {
        Product {
            id: id.to_string(),
            name: "Tarjeta Credito".to_string(),
            description: "Tarjeta de consumo bajo la modalidad de credito".to_string(),
            logo: "https://example.com/tarjeta.png".to_string(),
            date_release: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            date_revision: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
        }
    }

    pub fn store_with(ids: &[&str]) -> web::Data<ProductStore> {
        let store = ProductStore::open(":memory:").unwrap();
        for id in ids {
            store.insert(&product(id)).unwrap();
        }
        web::Data::new(store)
    }
}

#[cfg(test)]
mod tests {
    use super::testing::product;
    use super::*;

    #[test]
    fn past_release_dates_are_accepted() {
        assert!(check_product(&product("tj-01")));
    }

    #[test]
    fn revision_must_be_one_year_after_release() {
        let mut p = product("tj-01");
        p.date_revision = p.date_release;
        assert!(!check_product(&p));
    }

    #[test]
    fn field_rules_apply() {
        let mut p = product("tj");
        assert!(!check_product(&p));
        p.id = "tj-01".to_string();
        p.name = "   ".to_string();
        assert!(!check_product(&p));
    }
}
