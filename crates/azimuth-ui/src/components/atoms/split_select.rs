//! Dataset split picker.
//!
//! # Design
//! - Stateless: the owning section holds the current split.
//! - Offer only splits the backend reported as available.

use crate::components::daisy::DaisySize;
use azimuth_api_models::DatasetSplitName;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SplitSelectProps {
    pub value: DatasetSplitName,
    pub options: Vec<DatasetSplitName>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub onchange: Callback<DatasetSplitName>,
}

#[function_component(SplitSelect)]
pub(crate) fn split_select(props: &SplitSelectProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<web_sys::HtmlSelectElement>()
                && let Some(split) = DatasetSplitName::from_value(&target.value())
            {
                onchange.emit(split);
            }
        })
    };

    html! {
        <select
            class={classes!("select", DaisySize::Sm.with_prefix("select"), props.class.clone())}
            aria-label="Dataset split"
            disabled={props.options.len() < 2}
            onchange={onchange}
        >
            {for props.options.iter().map(|split| {
                html! {
                    <option value={split.as_str()} selected={*split == props.value}>
                        {split.label()}
                    </option>
                }
            })}
        </select>
    }
}
