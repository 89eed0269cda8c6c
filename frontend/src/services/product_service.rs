//! `ProductApi` over HTTP with `gloo-net`.

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use common::constants::{PRODUCTS_PATH, VERIFICATION_PATH};
use common::error::ServiceError;
use common::model::product::Product;
use common::model::response::ApiResponse;
use common::service::ProductApi;

/// Percent-encodes one path segment.
pub type SegmentEncoder = fn(&str) -> String;

pub struct HttpProductService {
    base_url: String,
    encode: SegmentEncoder,
}

impl HttpProductService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_encoder(base_url, encode_uri_component)
    }

    pub fn with_encoder(base_url: impl Into<String>, encode: SegmentEncoder) -> Self {
        Self {
            base_url: base_url.into(),
            encode,
        }
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, PRODUCTS_PATH)
    }

    fn item_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), (self.encode)(id))
    }

    fn verification_url(&self, id: &str) -> String {
        format!("{}{}/{}", self.collection_url(), VERIFICATION_PATH, (self.encode)(id))
    }
}

fn encode_uri_component(segment: &str) -> String {
    String::from(js_sys::encode_uri_component(segment))
}

/// Maps the three transport failures (network, non-2xx, undecodable body)
/// onto `ServiceError`.
async fn read_json<T: DeserializeOwned>(
    response: Result<Response, gloo_net::Error>,
) -> Result<T, ServiceError> {
    let response = response.map_err(|e| ServiceError::Network(e.to_string()))?;
    if !response.ok() {
        return Err(ServiceError::Status(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ServiceError::Decode(e.to_string()))
}

#[async_trait(?Send)]
impl ProductApi for HttpProductService {
    async fn get_all(&self) -> Result<ApiResponse, ServiceError> {
        read_json(Request::get(&self.collection_url()).send().await).await
    }

    async fn create(&self, product: &Product) -> Result<ApiResponse, ServiceError> {
        let request = Request::post(&self.collection_url())
            .json(product)
            .map_err(|e| ServiceError::Encode(e.to_string()))?;
        read_json(request.send().await).await
    }

    async fn update(&self, id: &str, product: &Product) -> Result<ApiResponse, ServiceError> {
        let request = Request::put(&self.item_url(id))
            .json(product)
            .map_err(|e| ServiceError::Encode(e.to_string()))?;
        read_json(request.send().await).await
    }

    async fn delete(&self, id: &str) -> Result<ApiResponse, ServiceError> {
        read_json(Request::delete(&self.item_url(id)).send().await).await
    }

    async fn check_id_exists(&self, id: &str) -> Result<bool, ServiceError> {
        read_json(Request::get(&self.verification_url(id)).send().await).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collection_url_joins_base_and_path() {
        assert_eq!(
            HttpProductService::new("http://localhost:3002").collection_url(),
            "http://localhost:3002/bp/products"
        );
        assert_eq!(HttpProductService::new("").collection_url(), "/bp/products");
    }

    fn escape_spaces(segment: &str) -> String {
        segment.replace(' ', "%20")
    }

    #[test]
    fn item_urls_put_a_separator_before_the_encoded_id() {
        let service = HttpProductService::with_encoder("http://localhost:3002", escape_spaces);
        assert_eq!(
            service.item_url("tj 01"),
            "http://localhost:3002/bp/products/tj%2001"
        );
        assert_eq!(
            service.verification_url("tj 01"),
            "http://localhost:3002/bp/products/verification/tj%2001"
        );
    }
}
