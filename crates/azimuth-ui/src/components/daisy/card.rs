use crate::components::daisy::foundations::merge_classes;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CardProps {
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub actions: Option<Html>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Card)]
pub(crate) fn card(props: &CardProps) -> Html {
    let mut classes = merge_classes("card", &props.class);
    classes.push(classes!("shadow", "bg-base-100"));
    html! {
        <section class={classes}>
            <div class="card-body gap-3">
                {(props.title.is_some() || props.subtitle.is_some()).then(|| html! {
                    <div>
                        {props.title.clone().map(|title| html! {
                            <h3 class="card-title text-lg">{title}</h3>
                        }).unwrap_or_default()}
                        {props.subtitle.clone().map(|subtitle| html! {
                            <p class="text-sm text-base-content/70">{subtitle}</p>
                        }).unwrap_or_default()}
                    </div>
                }).unwrap_or_default()}
                { for props.children.iter() }
                {props.actions.clone().map(|actions| html! {
                    <div class="card-actions justify-end">{actions}</div>
                }).unwrap_or_default()}
            </div>
        </section>
    }
}
