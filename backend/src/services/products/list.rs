//! `GET /bp/products`: every stored product in creation order.

use actix_web::{web, HttpResponse, Responder};
use common::constants::responses::LIST_CORRECT;
use common::model::response::ApiResponse;

use crate::store::ProductStore;

use super::store_error_response;

pub async fn process(store: web::Data<ProductStore>) -> impl Responder {
    match store.list() {
        Ok(products) => HttpResponse::Ok().json(ApiResponse::new(LIST_CORRECT, products)),
        Err(e) => store_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};

    use super::super::configure_routes;
    use super::super::testing::store_with;
    use super::*;

    #[actix_web::test]
    async fn lists_products_in_creation_order() {
        let app = test::init_service(
            App::new()
                .app_data(store_with(&["zz-1", "aa-1"]))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/bp/products").to_request();
        let body: ApiResponse = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body.message, LIST_CORRECT);
        let ids: Vec<_> = body.data.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["zz-1", "aa-1"]);
    }

    #[actix_web::test]
    async fn empty_catalog_lists_nothing() {
        let app = test::init_service(
            App::new().app_data(store_with(&[])).service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get().uri("/bp/products").to_request();
        let body: ApiResponse = test::call_and_read_body_json(&app, req).await;
        assert!(body.data.is_empty());
    }
}
