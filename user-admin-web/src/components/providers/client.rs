use yew::context::ContextProvider;
use yew::prelude::*;

use user_admin_api::Client;

use crate::statics;

/// Provides the API [`Client`] to all child components.
pub struct ClientProvider {
    client: Client,
}

impl ClientProvider {
    /// Returns the [`Client`] provided to the component `C`.
    ///
    /// # Panics
    ///
    /// Panics when no `ClientProvider` exists in the tree above `C`.
    pub fn get<C>(ctx: &Context<C>) -> Client
    where
        C: Component,
    {
        let (client, _) = ctx
            .link()
            .context::<Client>(Callback::noop())
            .expect("No ClientProvider given");

        client
    }
}

impl Component for ClientProvider {
    type Message = ();
    type Properties = Properties;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            client: Client::new(statics::config().api_base()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <ContextProvider<Client> context={self.client.clone()}>
                { for ctx.props().children.iter() }
            </ContextProvider<Client>>
        }
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Properties {
    pub children: Children,
}
