mod users;

use yew::prelude::*;

use crate::components::providers::ClientProvider;
use crate::components::Toasts;

use users::Users;

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <ClientProvider>
                <div class="main-wrapper">
                    <div class="main">
                        <h1>{ "CRUD Users" }</h1>
                        <Users />
                    </div>
                    <Toasts />
                </div>
            </ClientProvider>
        }
    }
}
