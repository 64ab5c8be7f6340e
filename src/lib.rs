//! GPTarot's browser front end.
//!
//! Three paths are routed through a hash-based router: `/` shows the home page, `random` draws a
//! reading, and every other path falls back to the home page. All of them are wrapped in the same
//! layout.

use dioxus::prelude::*;

pub mod components;
pub mod router;
pub mod routes;
pub mod tarot;

pub use router::Location;
pub use routes::{select_route, Layout, Pattern, Route, RouteError, RouteTable, View};

/// The root component: a router over every [`Location`].
#[component]
pub fn App() -> Element {
    rsx! {
        Router::<Location> {}
    }
}
