//! Dashboard page view.
//!
//! # Design
//! - Load on mount and on job changes; the store drops responses for older loads.
//! - Render strictly from `decide_dashboard`; no visibility rules live here.
//! - Read the query through the router so selection changes re-render the page.

use crate::app::api::ApiCtx;
use crate::app::current_query;
use crate::components::atoms::{EmptyState, EmptyTone, Spinner};
use crate::core::query::QueryState;
use crate::core::store::AppStore;
use crate::features::dashboard::api::load_job;
use crate::features::dashboard::logic::{
    DashboardInput, available_dataset_splits, decide_dashboard,
};
use crate::features::dashboard::preview_card::PreviewCard;
use crate::features::dashboard::state::{DashboardDecision, DashboardLayout};
use azimuth_api_models::DatasetSplitName;
use gloo::console;
use yew::prelude::*;
use yew_router::hooks::use_location;
use yewdux::prelude::{Dispatch, use_selector};

#[derive(Properties, PartialEq)]
pub(crate) struct DashboardPageProps {
    pub job_id: AttrValue,
}

#[function_component(DashboardPage)]
pub(crate) fn dashboard_page(props: &DashboardPageProps) -> Html {
    let api_ctx = use_context::<ApiCtx>();
    let job = use_selector(|store: &AppStore| store.job.clone());
    let (config, dataset_info) = job.summaries_for(&props.job_id);
    let location = use_location();
    let query = location
        .as_ref()
        .map_or_else(current_query, |location| {
            QueryState::from_search(location.query_str())
        });

    {
        let job_id = props.job_id.clone();
        use_effect_with_deps(
            move |job_id| {
                let dispatch = Dispatch::<AppStore>::new();
                if let Some(ctx) = api_ctx {
                    load_job(ctx.client.clone(), dispatch, job_id.to_string());
                } else {
                    console::error!("api context missing; dashboard cannot load");
                }
                || ()
            },
            job_id,
        );
    }

    let decision = decide_dashboard(DashboardInput {
        job_id: &props.job_id,
        query: &query,
        config: &config,
        dataset_info: &dataset_info,
    });

    match decision {
        Ok(DashboardDecision::Loading) => html! {
            <Spinner label={AttrValue::from("Loading dashboard")} />
        },
        Ok(DashboardDecision::Unavailable { message }) => html! {
            <EmptyState
                title="Dashboard unavailable"
                description={AttrValue::from(message)}
                tone={EmptyTone::Error}
            />
        },
        Ok(DashboardDecision::Ready(layout)) => {
            let available = dataset_info
                .ready()
                .map(available_dataset_splits)
                .unwrap_or_default();
            render_layout(&layout, &available)
        }
        Err(err) => {
            console::error!(
                "dashboard precondition failed",
                props.job_id.to_string(),
                err.to_string()
            );
            html! {
                <EmptyState
                    title="Dashboard unavailable"
                    description={AttrValue::from(err.to_string())}
                    tone={EmptyTone::Error}
                />
            }
        }
    }
}

fn render_layout(layout: &DashboardLayout, available: &[DatasetSplitName]) -> Html {
    let header = &layout.header;
    html! {
        <div class="flex flex-col gap-6">
            <header class="flex flex-wrap items-end justify-between gap-4">
                <div>
                    <h1 class="text-2xl font-semibold">{header.title}</h1>
                    <p class="text-base-content/70">{header.description}</p>
                </div>
                <a class="btn btn-primary" href={header.explore_to.clone()}>
                    {header.explore_label}
                </a>
            </header>
            <div class="grid grid-cols-1 gap-6 xl:grid-cols-2">
                {for layout.sections.iter().map(|section| html! {
                    <PreviewCard
                        key={format!("{}-{}", section.kind.segment(), header.default_split)}
                        section={section.clone()}
                        available_splits={available.to_vec()}
                    />
                })}
            </div>
        </div>
    }
}
