use dioxus::logger::tracing::info;
use dioxus::prelude::*;

use crate::tarot::{Deck, DrawError, Spread};

fn draw(deck: &Deck, rng: &mut fastrand::Rng) -> Result<Spread, DrawError> {
    let spread = Spread::draw(deck, rng)?;
    info!(cards = spread.cards.len(), "drew a new spread");
    Ok(spread)
}

/// A past / present / future reading drawn from the major arcana.
#[component]
pub fn Random() -> Element {
    let deck = use_hook(Deck::major_arcana);
    let mut spread = use_signal(|| draw(&deck, &mut fastrand::Rng::new()));

    let current = spread()?;

    rsx! {
        section { id: "random",
            h2 { "Your reading" }
            SpreadView { spread: current }
            button {
                id: "redraw",
                onclick: move |_| spread.set(draw(&deck, &mut fastrand::Rng::new())),
                "Draw again"
            }
        }
    }
}

#[component]
fn SpreadView(spread: Spread) -> Element {
    let cards = spread.cards.iter().map(|(position, drawn)| {
        let orientation = if drawn.is_upright() { "upright" } else { "reversed" };
        (
            position.label(),
            drawn.full_name(),
            drawn.card.name.clone(),
            drawn.card.image_url.clone(),
            orientation,
        )
    });

    rsx! {
        div { class: "spread",
            for (label, full_name, name, image_url, orientation) in cards {
                figure { key: "{label}", class: "card {orientation}",
                    figcaption { "{label}" }
                    img { src: "{image_url}", alt: "{name}" }
                    p { "{full_name}" }
                }
            }
        }
    }
}
