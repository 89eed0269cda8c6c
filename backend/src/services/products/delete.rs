//! `DELETE /bp/products/{id}`.

use actix_web::{web, HttpResponse, Responder};
use common::constants::responses::DELETE_CORRECT;
use common::model::response::ApiResponse;
use log::info;

use crate::store::ProductStore;

use super::store_error_response;

pub async fn process(store: web::Data<ProductStore>, id: web::Path<String>) -> impl Responder {
    match store.delete(&id) {
        Ok(()) => {
            info!("Product {} removed", id);
            HttpResponse::Ok().json(ApiResponse::new(DELETE_CORRECT, Vec::new()))
        }
        Err(e) => store_error_response(e),
    }
}
