//! `GET /bp/products/verification/{id}`: a bare JSON boolean telling whether
//! the id is already taken.

use actix_web::{web, HttpResponse, Responder};

use crate::store::ProductStore;

use super::store_error_response;

pub async fn process(store: web::Data<ProductStore>, id: web::Path<String>) -> impl Responder {
    match store.exists(&id) {
        Ok(taken) => HttpResponse::Ok().json(taken),
        Err(e) => store_error_response(e),
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{test, App};

    use super::super::configure_routes;
    use super::super::testing::store_with;

    #[actix_web::test]
    async fn answers_whether_the_id_is_taken() {
        let app = test::init_service(
            App::new().app_data(store_with(&["ver-1"])).service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/bp/products/verification/ver-1")
            .to_request();
        let taken: bool = test::call_and_read_body_json(&app, req).await;
        assert!(taken);

        let req = test::TestRequest::get()
            .uri("/bp/products/verification/free-1")
            .to_request();
        let taken: bool = test::call_and_read_body_json(&app, req).await;
        assert!(!taken);
    }
}
