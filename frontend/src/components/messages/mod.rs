//! Toast area fed by the shared `MessageService`.
//!
//! Shows one message at a time. Every message schedules its own expiry after
//! `MESSAGE_LIFETIME_MS`; an expiry belonging to a message that has already
//! been replaced is ignored by `MessageSlot`.

use yew::prelude::*;

use common::constants::MESSAGE_LIFETIME_MS;
use common::model::message::Message;
use common::notification::{MessageSlot, SubscriptionId, Ticket};

use crate::services::Services;

#[derive(Properties, PartialEq, Clone)]
pub struct MessagesProps {
    pub services: Services,
}

pub enum Msg {
    Show(Message),
    Expire(Ticket),
    Dismiss,
}

pub struct MessagesComponent {
    slot: MessageSlot,
    subscription: SubscriptionId,
}

impl Component for MessagesComponent {
    type Message = Msg;
    type Properties = MessagesProps;

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let subscription = ctx
            .props()
            .services
            .messages
            .subscribe(move |message| link.send_message(Msg::Show(message.clone())));

        Self {
            slot: MessageSlot::new(),
            subscription,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Show(message) => {
                let ticket = self.slot.show(message);
                let link = ctx.link().clone();
                wasm_bindgen_futures::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(MESSAGE_LIFETIME_MS).await;
                    link.send_message(Msg::Expire(ticket));
                });
                true
            }
            Msg::Expire(ticket) => self.slot.expire(ticket),
            Msg::Dismiss => {
                self.slot.clear();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        match self.slot.current() {
            Some(message) => html! {
                <div class={classes!("toast", format!("toast-{}", message.kind.as_str()))} role="alert">
                    <span class="toast-text">{ message.text.clone() }</span>
                    <button class="toast-close" title="Cerrar" onclick={ctx.link().callback(|_| Msg::Dismiss)}>
                        <i class="material-icons">{"close"}</i>
                    </button>
                </div>
            },
            None => html! {},
        }
    }

    fn destroy(&mut self, ctx: &Context<Self>) {
        ctx.props().services.messages.unsubscribe(self.subscription);
    }
}
