use dioxus::prelude::*;

use crate::router::Location;
use crate::routes::View;

#[component]
pub fn Home() -> Element {
    rsx! {
        section { id: "home",
            h2 { "Welcome" }
            p { "Ask a question, take a breath, and let the major arcana answer." }
            Link { id: "start-reading", to: Location::from(View::Random), "Draw a reading" }
        }
    }
}
