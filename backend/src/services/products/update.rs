//! `PUT /bp/products/{id}`: replaces the stored product. The id in the path
//! wins over any id in the body.

use actix_web::{web, HttpResponse, Responder};
use common::constants::responses::UPDATE_CORRECT;
use common::model::product::Product;
use log::info;
use serde_json::json;

use crate::store::{ProductStore, StoreError};

use super::{check_product, invalid_body, store_error_response};

pub async fn process(
    store: web::Data<ProductStore>,
    id: web::Path<String>,
    body: web::Json<Product>,
) -> impl Responder {
    let id = id.into_inner();
    let mut product = body.into_inner();
    product.id = id.clone();

    match store.exists(&id) {
        Ok(true) => {}
        Ok(false) => return store_error_response(StoreError::NotFound(id)),
        Err(e) => return store_error_response(e),
    }
    if !check_product(&product) {
        return invalid_body();
    }

    match store.update(&id, &product) {
        Ok(()) => {
            info!("Product {} updated", id);
            HttpResponse::Ok().json(json!({ "message": UPDATE_CORRECT, "data": product }))
        }
        Err(e) => store_error_response(e),
    }
}
