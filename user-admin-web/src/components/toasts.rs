use std::time::Duration;

use gloo_timers::future::sleep;
use yew::prelude::*;
use yew_agent::{Bridge, Bridged};

use crate::services::toast::{Toast, ToastBus, ToastKind};

/// Time until a toast dismisses itself.
const TOAST_TIMEOUT: Duration = Duration::from_secs(3);

/// The toast stack.
///
/// Subscribes to the [`ToastBus`] and renders every received [`Toast`] until
/// it is clicked away or [`TOAST_TIMEOUT`] expires. Toasts carry a local id
/// so a timed removal never removes a younger toast that moved into its slot.
pub struct Toasts {
    toasts: Vec<(u64, Toast)>,
    next_id: u64,
    _producer: Box<dyn Bridge<ToastBus>>,
}

impl Component for Toasts {
    type Message = Message;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            toasts: Vec::new(),
            next_id: 0,
            _producer: ToastBus::bridge(ctx.link().callback(Message::Append)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Message::Append(toast) => {
                let id = self.next_id;
                self.next_id += 1;

                self.toasts.push((id, toast));

                ctx.link().send_future(async move {
                    sleep(TOAST_TIMEOUT).await;
                    Message::Remove(id)
                });
            }
            Message::Remove(id) => {
                self.toasts.retain(|(toast_id, _)| *toast_id != id);
            }
        }

        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let toasts: Html = self
            .toasts
            .iter()
            .map(|(id, toast)| {
                let id = *id;
                let onclick = ctx.link().callback(move |_| Message::Remove(id));

                let classes = match toast.kind {
                    ToastKind::Success => "toast toast-success",
                    ToastKind::Error => "toast toast-error",
                };

                html! {
                    <div class={classes} {onclick}>
                        <span>{ toast.text.clone() }</span>
                    </div>
                }
            })
            .collect();

        html! {
            <div class="toast-stack">
                { toasts }
            </div>
        }
    }
}

#[derive(Debug)]
pub enum Message {
    Append(Toast),
    Remove(u64),
}
