//! Run with:
//!
//! ```sh
//! dx serve --platform web
//! ```

use dioxus::logger::tracing::{info, Level};
use gptarot_web::App;

fn main() {
    dioxus::logger::init(Level::INFO).expect("Failed to initialize logger");
    info!("launching gptarot");

    #[cfg(feature = "web")]
    {
        use dioxus::web::HashHistory;
        use std::rc::Rc;

        dioxus::LaunchBuilder::new()
            .with_cfg(dioxus::web::Config::new().history(Rc::new(HashHistory::new(false))))
            .launch(App);
    }

    #[cfg(not(feature = "web"))]
    dioxus::launch(App);
}
