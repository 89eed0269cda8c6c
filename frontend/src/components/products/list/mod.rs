//! Product list: search box, page-size selector and the results table.
//!
//! The component wires Yew's `Component` trait to the `update` and `view`
//! submodules. The catalog is requested once, on first render; the filtering
//! and page-size rules live in `common::catalog`.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ProductListProps;
pub use state::ProductListComponent;

impl Component for ProductListComponent {
    type Message = Msg;
    type Properties = ProductListProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ProductListComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            ctx.link().send_message(Msg::Load);
        }
    }
}
