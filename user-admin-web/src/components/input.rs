use web_sys::HtmlInputElement;
use yew::prelude::*;

/// A controlled text input bound to a single form field.
///
/// The parent owns the value; every keystroke is reported through `oninput`
/// and the input re-renders with whatever value the parent passes back.
pub struct Input;

impl Component for Input {
    type Message = String;
    type Properties = Properties;

    #[inline]
    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    #[inline]
    fn update(&mut self, ctx: &Context<Self>, value: Self::Message) -> bool {
        ctx.props().oninput.emit(value);
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let kind = ctx.props().kind;
        let placeholder = ctx.props().placeholder;
        let value = ctx.props().value.clone();
        let required = ctx.props().required;

        let oninput = ctx.link().callback(|event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            input.value()
        });

        html! {
            <input class="input" type={kind} {placeholder} {value} {oninput} {required} />
        }
    }
}

#[derive(Clone, Debug, PartialEq, Properties)]
pub struct Properties {
    pub kind: &'static str,
    pub placeholder: &'static str,
    pub value: String,
    pub oninput: Callback<String>,
    #[prop_or_default]
    pub required: bool,
}
