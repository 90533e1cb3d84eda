use dioxus::prelude::*;
use dioxus_router::Routable;

use crate::views::ReportView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", ReportView)] Report {},
}
