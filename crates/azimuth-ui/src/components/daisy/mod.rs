//! DaisyUI wrappers shared by the dashboard views.

pub(crate) mod alert;
pub(crate) mod card;
pub(crate) mod foundations;
pub(crate) mod link;
pub(crate) mod loading;

pub(crate) use alert::Alert;
pub(crate) use card::Card;
pub(crate) use foundations::{DaisyColor, DaisySize};
pub(crate) use link::Link;
pub(crate) use loading::Loading;
