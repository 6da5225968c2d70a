use crate::components::daisy::Loading;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SpinnerProps {
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
}

/// Centered loading indicator shown while a page waits on the backend.
#[function_component(Spinner)]
pub(crate) fn spinner(props: &SpinnerProps) -> Html {
    let label = props
        .label
        .clone()
        .unwrap_or_else(|| AttrValue::from("Loading"));
    html! {
        <div class={classes!("flex", "justify-center", "py-12", props.class.clone())}>
            <Loading label={label} />
        </div>
    }
}
