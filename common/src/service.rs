//! Seams between the catalog logic and the outside world.
//!
//! The front-end implements [`ProductApi`] over HTTP and [`Notifier`] with the
//! message channel; tests substitute in-memory fakes.

use async_trait::async_trait;

use crate::error::ServiceError;
use crate::model::message::MessageType;
use crate::model::product::Product;
use crate::model::response::ApiResponse;

/// Remote products API.
///
/// Futures are not `Send`: in the browser everything runs on one thread.
#[async_trait(?Send)]
pub trait ProductApi {
    async fn get_all(&self) -> Result<ApiResponse, ServiceError>;

    async fn create(&self, product: &Product) -> Result<ApiResponse, ServiceError>;

    async fn update(&self, id: &str, product: &Product) -> Result<ApiResponse, ServiceError>;

    async fn delete(&self, id: &str) -> Result<ApiResponse, ServiceError>;

    /// `true` when a product with this id already exists.
    async fn check_id_exists(&self, id: &str) -> Result<bool, ServiceError>;
}

/// Fire-and-forget user notification.
pub trait Notifier {
    fn show_message(&self, text: &str, kind: MessageType);
}

#[cfg(test)]
pub(crate) mod fakes {
    //! Scripted collaborators shared by the catalog and form tests.

    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;
    use crate::model::message::Message;

    /// Records every notification in order.
    #[derive(Default)]
    pub struct RecordingNotifier {
        pub messages: RefCell<Vec<Message>>,
    }

    impl RecordingNotifier {
        pub fn taken(&self) -> Vec<Message> {
            self.messages.borrow().clone()
        }
    }

    impl Notifier for RecordingNotifier {
        fn show_message(&self, text: &str, kind: MessageType) {
            self.messages.borrow_mut().push(Message::new(text, kind));
        }
    }

    /// API whose answers are queued up front. Every call is logged by name.
    #[derive(Default)]
    pub struct ScriptedApi {
        pub calls: RefCell<Vec<String>>,
        pub responses: RefCell<VecDeque<Result<ApiResponse, ServiceError>>>,
        pub exists: RefCell<VecDeque<Result<bool, ServiceError>>>,
    }

    impl ScriptedApi {
        pub fn respond(self, response: Result<ApiResponse, ServiceError>) -> Self {
            self.responses.borrow_mut().push_back(response);
            self
        }

        pub fn id_exists(self, answer: Result<bool, ServiceError>) -> Self {
            self.exists.borrow_mut().push_back(answer);
            self
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn next_response(&self, call: String) -> Result<ApiResponse, ServiceError> {
            self.calls.borrow_mut().push(call);
            self.responses
                .borrow_mut()
                .pop_front()
                .expect("unscripted API call")
        }
    }

    #[async_trait(?Send)]
    impl ProductApi for ScriptedApi {
        async fn get_all(&self) -> Result<ApiResponse, ServiceError> {
            self.next_response("get_all".to_string())
        }

        async fn create(&self, product: &Product) -> Result<ApiResponse, ServiceError> {
            self.next_response(format!("create:{}", product.id))
        }

        async fn update(&self, id: &str, _product: &Product) -> Result<ApiResponse, ServiceError> {
            self.next_response(format!("update:{}", id))
        }

        async fn delete(&self, id: &str) -> Result<ApiResponse, ServiceError> {
            self.next_response(format!("delete:{}", id))
        }

        async fn check_id_exists(&self, id: &str) -> Result<bool, ServiceError> {
            self.calls.borrow_mut().push(format!("exists:{}", id));
            self.exists
                .borrow_mut()
                .pop_front()
                .expect("unscripted verification call")
        }
    }
}
