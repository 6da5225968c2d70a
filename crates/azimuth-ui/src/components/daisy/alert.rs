use crate::components::daisy::foundations::{DaisyColor, merge_classes, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AlertProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub tone: Option<DaisyColor>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Alert)]
pub(crate) fn alert(props: &AlertProps) -> Html {
    let mut classes = merge_classes("alert", &props.class);
    if let Some(tone) = tone_class("alert", props.tone) {
        classes.push(tone);
    }
    html! {
        <div class={classes} role="alert">
            <div class="flex flex-col gap-1">
                {props.title.clone().map(|title| html! { <strong>{title}</strong> }).unwrap_or_default()}
                {props.description.clone().map(|desc| html! { <span>{desc}</span> }).unwrap_or_default()}
                { for props.children.iter() }
            </div>
        </div>
    }
}
