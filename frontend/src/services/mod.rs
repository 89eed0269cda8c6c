//! Collaborators handed to every view through its properties.

pub mod product_service;

use std::rc::Rc;

use common::notification::MessageService;
use common::service::ProductApi;

use crate::config::api_base_url;
use product_service::HttpProductService;

/// Shared service handles. Cloning only bumps reference counts; equality is
/// identity so Yew does not re-render children when the handles are unchanged.
#[derive(Clone)]
pub struct Services {
    pub products: Rc<dyn ProductApi>,
    pub messages: Rc<MessageService>,
}

impl Services {
    pub fn from_config() -> Self {
        Self {
            products: Rc::new(HttpProductService::new(api_base_url())),
            messages: Rc::new(MessageService::new()),
        }
    }
}

impl PartialEq for Services {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.products, &other.products) && Rc::ptr_eq(&self.messages, &other.messages)
    }
}
