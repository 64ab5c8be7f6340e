//! Glue between the Dioxus router and the route table.
//!
//! The Dioxus router owns the current location (the URL fragment on the web) and re-renders on
//! navigation. Every location is captured whole and handed to
//! [`RouteTable::select`](crate::routes::RouteTable::select), which decides what to mount.

use dioxus::prelude::*;
use dioxus::logger::tracing::debug;

use crate::components::{DefaultLayout, Home, Random};
use crate::routes::{app_routes, Layout, Route, View};

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Location {
    #[route("/")]
    Root {},
    #[route("/:..segments")]
    Routed { segments: Vec<String> },
}

impl From<View> for Location {
    fn from(view: View) -> Self {
        let segments: Vec<String> = view
            .path()
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(str::to_string)
            .collect();

        if segments.is_empty() {
            Location::Root {}
        } else {
            Location::Routed { segments }
        }
    }
}

#[component]
fn Root() -> Element {
    rsx! {
        Routed { segments: Vec::new() }
    }
}

#[component]
fn Routed(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));
    let routes = app_routes()?;
    let route = routes.select(&path);
    debug!(%path, pattern = %route.pattern, view = ?route.view, "mounting route");

    mount(route)
}

/// Render a route's view inside its layout.
pub fn mount(route: &Route) -> Element {
    let view = match route.view {
        View::Home => rsx! { Home {} },
        View::Random => rsx! { Random {} },
    };

    match route.layout {
        Layout::Default => rsx! {
            DefaultLayout { {view} }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn views_link_to_their_paths() {
        assert_eq!(Location::from(View::Home), Location::Root {});
        for view in [View::Home, View::Random] {
            assert_eq!(Location::from(view).to_string(), view.path());
        }
    }
}
