use yew::{html, Callback, Component, Context, Html};

use crate::components::messages::MessagesComponent;
use crate::components::products::form::ProductFormComponent;
use crate::components::products::list::ProductListComponent;
use crate::navigation::Route;
use crate::services::Services;

pub enum Msg {
    Navigate(Route),
}

/// Root component: owns the shared services and the active route.
pub struct App {
    services: Services,
    route: Route,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            services: Services::from_config(),
            route: Route::List,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(route) => {
                self.route = route;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_navigate: Callback<Route> = ctx.link().callback(Msg::Navigate);
        let page = match &self.route {
            Route::List => html! {
                <ProductListComponent services={self.services.clone()} on_navigate={on_navigate} />
            },
            Route::Add => html! {
                <ProductFormComponent services={self.services.clone()} on_navigate={on_navigate} />
            },
            Route::Edit(product) => html! {
                <ProductFormComponent
                    key={product.id.clone()}
                    services={self.services.clone()}
                    product={Some(product.clone())}
                    on_navigate={on_navigate}
                />
            },
        };

        html! {
            <div class="app-root">
                <header class="app-header">
                    <i class="material-icons">{"account_balance"}</i>
                    <span>{"BANCO"}</span>
                </header>
                <main class="app-main">
                    { page }
                </main>
                <MessagesComponent services={self.services.clone()} />
            </div>
        }
    }
}
