//! `POST /bp/products`: stores a new product.
//!
//! The body must satisfy the structural field rules and carry a revision date
//! exactly one year after its release date. Ids are unique; a taken id is
//! rejected with `400` and the duplicate message.

use actix_web::{web, HttpResponse, Responder};
use common::constants::responses::SAVE_CORRECT;
use common::model::product::Product;
use log::info;
use serde_json::json;

use crate::store::ProductStore;

use super::{check_product, invalid_body, store_error_response};

pub async fn process(store: web::Data<ProductStore>, body: web::Json<Product>) -> impl Responder {
    let product = body.into_inner();
    if !check_product(&product) {
        return invalid_body();
    }

    match store.insert(&product) {
        Ok(()) => {
            info!("Product {} created", product.id);
            HttpResponse::Ok().json(json!({ "message": SAVE_CORRECT, "data": product }))
        }
        Err(e) => store_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::http::StatusCode;
    use actix_web::{test, App};
    use common::constants::responses::{DUPLICATE_ID, INVALID_BODY};
    use common::model::response::ApiResponse;

    use super::super::configure_routes;
    use super::super::testing::{product, store_with};
    use super::*;

    #[actix_web::test]
    async fn creates_a_valid_product() {
        let store = store_with(&[]);
        let app = test::init_service(
            App::new().app_data(store.clone()).service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/bp/products")
            .set_json(product("new-1"))
            .to_request();
        let body: ApiResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.message, SAVE_CORRECT);
        assert_eq!(body.data, vec![product("new-1")]);
        assert!(store.exists("new-1").unwrap());
    }

    #[actix_web::test]
    async fn duplicate_id_is_a_bad_request() {
        let app = test::init_service(
            App::new().app_data(store_with(&["dup-1"])).service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/bp/products")
            .set_json(product("dup-1"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ApiResponse = test::read_body_json(resp).await;
        assert_eq!(body.message, DUPLICATE_ID);
    }

    #[actix_web::test]
    async fn malformed_and_invalid_bodies_are_rejected() {
        let app = test::init_service(
            App::new().app_data(store_with(&[])).service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/bp/products")
            .insert_header(("content-type", "application/json"))
            .set_payload(r#"{"id":"abc"}"#)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: ApiResponse = test::read_body_json(resp).await;
        assert_eq!(body.message, INVALID_BODY);

        let mut short = product("x");
        short.name = "abc".to_string();
        let req = test::TestRequest::post()
            .uri("/bp/products")
            .set_json(short)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
