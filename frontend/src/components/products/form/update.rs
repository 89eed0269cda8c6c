//! Message handling for the product form.

use yew::platform::spawn_local;
use yew::prelude::*;

use common::form::run_submission;

use crate::navigation::go_to_products;

use super::messages::Msg;
use super::state::ProductFormComponent;

pub fn update(component: &mut ProductFormComponent, ctx: &Context<ProductFormComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Input(field, value) => {
            component.form.set_field(field, value);
            true
        }
        Msg::Blur(field) => {
            component.form.touch(field);
            true
        }
        Msg::Reset => {
            component.form.reset();
            true
        }
        Msg::Submit => {
            let Some(request) = component.form.begin_submit(component.min_date) else {
                return true;
            };
            let services = ctx.props().services.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let progress = link.clone();
                let outcome = run_submission(
                    &request,
                    services.products.as_ref(),
                    services.messages.as_ref(),
                    &move |state| progress.send_message(Msg::Progress(state)),
                )
                .await;
                gloo_console::log!(format!("Submission of product {} finished: {:?}", request.product.id, outcome));
                link.send_message(Msg::Finished(outcome));
            });
            true
        }
        Msg::Progress(state) => {
            component.form.set_state(state);
            true
        }
        Msg::Finished(outcome) => {
            component.form.finish_submit(outcome);
            true
        }
        Msg::Back => {
            ctx.props().on_navigate.emit(go_to_products());
            false
        }
    }
}
