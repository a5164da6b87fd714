use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use yew_agent::{Agent, AgentLink, Context, Dispatched, HandlerId};

/// Handle for dispatching toast notifications to all subscribers of the
/// [`ToastBus`].
pub struct Toaster;

impl Toaster {
    /// Dispatches a new success toast.
    #[inline]
    pub fn success<T>(msg: T)
    where
        T: ToString,
    {
        ToastBus::dispatcher().send(Toast {
            kind: ToastKind::Success,
            text: msg.to_string(),
        });
    }

    /// Dispatches a new error toast.
    #[inline]
    pub fn error<T>(msg: T)
    where
        T: ToString,
    {
        ToastBus::dispatcher().send(Toast {
            kind: ToastKind::Error,
            text: msg.to_string(),
        });
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub kind: ToastKind,
    pub text: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastKind {
    Success,
    Error,
}

pub struct ToastBus {
    link: AgentLink<Self>,
    subscribers: HashSet<HandlerId>,
}

impl Agent for ToastBus {
    type Reach = Context<Self>;
    type Message = ();
    type Input = Toast;
    type Output = Toast;

    fn create(link: AgentLink<Self>) -> Self {
        Self {
            link,
            subscribers: HashSet::new(),
        }
    }

    fn update(&mut self, _msg: Self::Message) {}

    fn handle_input(&mut self, msg: Self::Input, _id: HandlerId) {
        for sub in self.subscribers.iter() {
            self.link.respond(*sub, msg.clone());
        }
    }

    fn connected(&mut self, id: HandlerId) {
        self.subscribers.insert(id);
    }

    fn disconnected(&mut self, id: HandlerId) {
        self.subscribers.remove(&id);
    }
}
