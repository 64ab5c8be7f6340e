use dioxus::prelude::*;

use crate::router::Location;
use crate::routes::View;

/// Shared chrome around every routed view.
#[component]
pub fn DefaultLayout(children: Element) -> Element {
    rsx! {
        div { id: "layout",
            header {
                h1 { "GPTarot" }
                nav {
                    Link { id: "nav-home", to: Location::from(View::Home), "Home" }
                    Link { id: "nav-random", to: Location::from(View::Random), "Random" }
                }
            }
            main { {children} }
            footer { "The cards suggest, they do not decide." }
        }
    }
}
