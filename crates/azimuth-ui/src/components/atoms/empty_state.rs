//! Empty/error placeholder for views without data.
//!
//! # Design
//! - Keep copy and actions entirely prop-driven.
//! - Render optional actions only when provided.

use crate::components::daisy::{Alert, DaisyColor};
use yew::prelude::*;

/// Visual weight of the placeholder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub(crate) enum EmptyTone {
    /// Neutral "nothing here" state.
    #[default]
    Muted,
    /// Something failed.
    Error,
}

impl EmptyTone {
    const fn color(self) -> DaisyColor {
        match self {
            Self::Muted => DaisyColor::Info,
            Self::Error => DaisyColor::Error,
        }
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct EmptyStateProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub tone: EmptyTone,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(EmptyState)]
pub(crate) fn empty_state(props: &EmptyStateProps) -> Html {
    let has_actions = props.children.iter().next().is_some();
    html! {
        <Alert
            class={classes!("empty-state", props.class.clone())}
            title={props.title.clone()}
            description={props.description.clone()}
            tone={props.tone.color()}
        >
            {if has_actions {
                html! { <div class="empty-actions">{ for props.children.iter() }</div> }
            } else {
                html! {}
            }}
        </Alert>
    }
}
