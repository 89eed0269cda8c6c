//! Create/edit form for a product.
//!
//! Field state, validation and the submission flow come from `common::form`;
//! this component only renders them and runs the network half of a submit on
//! `spawn_local`, feeding progress back as messages.

use yew::prelude::*;

mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ProductFormProps;
pub use state::ProductFormComponent;

impl Component for ProductFormComponent {
    type Message = Msg;
    type Properties = ProductFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        ProductFormComponent::new(ctx.props().product.as_ref())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
