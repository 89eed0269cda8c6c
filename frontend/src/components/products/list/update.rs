//! Message handling for the product list.
//!
//! Loading is the only asynchronous step: the request runs on `spawn_local`
//! and its result comes back as `Msg::Loaded`. A second load while one is
//! pending is not suppressed; whichever response arrives last wins.

use yew::platform::spawn_local;
use yew::prelude::*;

use crate::navigation::{go_to_add, Route};

use super::messages::Msg;
use super::state::ProductListComponent;

pub fn update(component: &mut ProductListComponent, ctx: &Context<ProductListComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Load => {
            component.loading = true;
            let api = ctx.props().services.products.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = api.get_all().await;
                link.send_message(Msg::Loaded(result));
            });
            true
        }
        Msg::Loaded(result) => {
            component.loading = false;
            if let Err(err) = &result {
                gloo_console::error!(format!("Error loading products: {}", err));
            }
            component
                .catalog
                .apply_load_result(result, ctx.props().services.messages.as_ref());
            true
        }
        Msg::Search(query) => {
            component.catalog.set_search_query(query);
            true
        }
        Msg::PageSize(raw) => match raw.parse::<usize>() {
            Ok(size) => component.catalog.set_page_size(size),
            Err(_) => false,
        },
        Msg::Add => {
            navigate(ctx, go_to_add(None));
            false
        }
        Msg::Edit(product) => {
            navigate(ctx, go_to_add(Some(product)));
            false
        }
        Msg::Delete(product) => {
            // Deletion is not offered yet; the request is only logged.
            gloo_console::log!(format!("Delete requested for product {}", product.id));
            false
        }
    }
}

fn navigate(ctx: &Context<ProductListComponent>, route: Route) {
    ctx.props().on_navigate.emit(route);
}
