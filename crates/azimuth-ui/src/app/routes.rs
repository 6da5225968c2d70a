//! Routing definitions for the Azimuth UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/:job_id")]
    Dashboard { job_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}
