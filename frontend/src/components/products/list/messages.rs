use common::error::ServiceError;
use common::model::product::Product;
use common::model::response::ApiResponse;

pub enum Msg {
    Load,
    Loaded(Result<ApiResponse, ServiceError>),
    Search(String),
    PageSize(String),
    Add,
    Edit(Product),
    Delete(Product),
}
