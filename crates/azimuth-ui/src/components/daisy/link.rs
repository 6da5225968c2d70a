use crate::components::daisy::foundations::{DaisyColor, merge_classes, tone_class};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub tone: Option<DaisyColor>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Plain anchor; dashboard links are full page paths, not router routes.
#[function_component(Link)]
pub(crate) fn link(props: &LinkProps) -> Html {
    let mut classes = merge_classes("link", &props.class);
    if let Some(tone) = tone_class("link", props.tone) {
        classes.push(tone);
    }
    html! {
        <a class={classes} href={props.href.clone()}>
            { for props.children.iter() }
        </a>
    }
}
