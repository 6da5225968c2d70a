//! App shell: router, API context, and wasm entrypoint.

use crate::app::api::ApiCtx;
use crate::components::atoms::EmptyState;
use crate::features::dashboard::DashboardPage;
use preferences::{DEFAULT_JOB_ID, api_base_url};
use routes::Route;
use yew::prelude::*;
use yew_router::prelude::*;

pub(crate) mod api;
mod preferences;
mod routes;

pub(crate) use preferences::current_query;

#[function_component(AzimuthApp)]
pub(crate) fn azimuth_app() -> Html {
    let api_ctx = use_memo(|_| ApiCtx::new(api_base_url()), ());

    html! {
        <ContextProvider<ApiCtx> context={(*api_ctx).clone()}>
            <BrowserRouter>
                <main class="min-h-screen bg-base-200 p-6">
                    <Switch<Route> render={switch} />
                </main>
            </BrowserRouter>
        </ContextProvider<ApiCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! {
            <Redirect<Route> to={Route::Dashboard { job_id: DEFAULT_JOB_ID.to_string() }} />
        },
        Route::Dashboard { job_id } => html! {
            <DashboardPage job_id={AttrValue::from(job_id)} />
        },
        Route::NotFound => html! {
            <EmptyState
                title="Page not found"
                description={AttrValue::from("Open a job dashboard from its URL, for example /local.")}
            />
        },
    }
}

/// Mount the Yew application into `#root`, or the document body when absent.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<AzimuthApp>::with_root(root).render();
    } else {
        yew::Renderer::<AzimuthApp>::new().render();
    }
}
