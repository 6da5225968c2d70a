use crate::components::atoms::SplitSelect;
use crate::components::daisy::{Card, DaisyColor, Link};
use crate::features::dashboard::state::{PreviewSection, SplitSelection};
use azimuth_api_models::DatasetSplitName;
use yew::prelude::*;

const DEFAULT_LINK_LABEL: &str = "View details";

#[derive(Properties, PartialEq)]
pub(super) struct PreviewCardProps {
    pub section: PreviewSection,
    pub available_splits: Vec<DatasetSplitName>,
}

/// One analysis preview; split-aware cards own their current split.
#[function_component(PreviewCard)]
pub(super) fn preview_card(props: &PreviewCardProps) -> Html {
    let section = &props.section;
    let label = section.link_label.unwrap_or(DEFAULT_LINK_LABEL);
    let body_style = section
        .max_height_px
        .map(|px| format!("max-height: {px}px; overflow-y: auto;"));

    let actions = html! {
        <Link href={section.to.clone()} tone={DaisyColor::Primary}>{label}</Link>
    };

    html! {
        <Card
            class={classes!(format!("preview-{}", section.kind.segment()))}
            title={AttrValue::from(section.title())}
            subtitle={AttrValue::from(section.description())}
            actions={actions}
        >
            {section.split_selector.map(|initial| html! {
                <SplitPanel
                    initial={initial}
                    available_splits={props.available_splits.clone()}
                    body_style={body_style.clone()}
                />
            }).unwrap_or_default()}
        </Card>
    }
}

#[derive(Properties, PartialEq)]
struct SplitPanelProps {
    initial: DatasetSplitName,
    available_splits: Vec<DatasetSplitName>,
    #[prop_or_default]
    body_style: Option<String>,
}

#[function_component(SplitPanel)]
fn split_panel(props: &SplitPanelProps) -> Html {
    let selection = {
        let initial = props.initial;
        use_state(move || SplitSelection::new(initial))
    };
    let on_change = {
        let selection = selection.clone();
        Callback::from(move |split: DatasetSplitName| {
            selection.set(selection.select(split));
        })
    };
    let current = selection.current();

    html! {
        <div class="flex flex-col gap-2">
            <SplitSelect
                value={current}
                options={props.available_splits.clone()}
                onchange={on_change}
            />
            <div class="rounded-box bg-base-200 p-3 text-sm" style={props.body_style.clone()}>
                {format!("Previewing the {}.", current.label().to_lowercase())}
            </div>
        </div>
    }
}
