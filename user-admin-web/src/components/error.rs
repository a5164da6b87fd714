use yew::prelude::*;

pub struct Error;

impl Component for Error {
    type Message = ();
    type Properties = ErrorProperties;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="error">
                <span>{ "Failed to load: " }</span>
                <span>{ ctx.props().error.clone() }</span>
            </div>
        }
    }
}

#[derive(Clone, Debug, Properties, PartialEq, Eq)]
pub struct ErrorProperties {
    pub error: String,
}
