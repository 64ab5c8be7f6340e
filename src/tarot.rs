//! The tarot deck behind the Random page.

use std::fmt;

use thiserror::Error;

/// Where card images are served from.
pub const IMAGES_PATH: &str = "/tarot-cards/images";

/// Card names of the major arcana, in deck order.
pub const MAJOR_ARCANA: [&str; 22] = [
    "The Fool",
    "The Magician",
    "The High Priestess",
    "The Empress",
    "The Emperor",
    "The Hierophant",
    "The Lovers",
    "The Chariot",
    "Strength",
    "The Hermit",
    "Wheel of Fortune",
    "Justice",
    "The Hanged Man",
    "Death",
    "Temperance",
    "The Devil",
    "The Tower",
    "The Star",
    "The Moon",
    "The Sun",
    "Judgement",
    "The World",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DrawError {
    #[error("cannot draw {requested} cards from a deck of {available}")]
    NotEnoughCards { requested: usize, available: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub name: String,
    pub image_url: String,
}

impl Card {
    pub fn new(name: &str) -> Self {
        let slug = name
            .to_ascii_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");

        Self {
            name: name.to_string(),
            image_url: format!("{IMAGES_PATH}/{slug}.jpg"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Upright,
    Reversed,
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Orientation::Upright => "UPRIGHT",
            Orientation::Reversed => "REVERSED",
        })
    }
}

/// A card as it was drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawnCard {
    pub card: Card,
    pub orientation: Orientation,
}

impl DrawnCard {
    /// The card name with its orientation, e.g. `The Fool (REVERSED)`.
    pub fn full_name(&self) -> String {
        format!("{} ({})", self.card.name, self.orientation)
    }

    pub fn is_upright(&self) -> bool {
        self.orientation == Orientation::Upright
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn major_arcana() -> Self {
        Self {
            cards: MAJOR_ARCANA.iter().copied().map(Card::new).collect(),
        }
    }

    /// Shuffle a copy of the deck and take the first `count` cards, each upright or reversed
    /// with equal odds.
    ///
    /// Asking for more cards than the deck holds is an error rather than an empty draw, so an
    /// oversized spread cannot render as a blank reading.
    pub fn draw(&self, count: usize, rng: &mut fastrand::Rng) -> Result<Vec<DrawnCard>, DrawError> {
        if count > self.cards.len() {
            return Err(DrawError::NotEnoughCards {
                requested: count,
                available: self.cards.len(),
            });
        }

        let mut shuffled = self.cards.clone();
        rng.shuffle(&mut shuffled);

        Ok(shuffled
            .into_iter()
            .take(count)
            .map(|card| DrawnCard {
                card,
                orientation: if rng.bool() {
                    Orientation::Upright
                } else {
                    Orientation::Reversed
                },
            })
            .collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Past,
    Present,
    Future,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Past, Position::Present, Position::Future];

    pub fn label(self) -> &'static str {
        match self {
            Position::Past => "Past",
            Position::Present => "Present",
            Position::Future => "Future",
        }
    }
}

/// A past / present / future reading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spread {
    pub cards: Vec<(Position, DrawnCard)>,
}

impl Spread {
    pub fn draw(deck: &Deck, rng: &mut fastrand::Rng) -> Result<Self, DrawError> {
        let drawn = deck.draw(Position::ALL.len(), rng)?;
        Ok(Self {
            cards: Position::ALL.into_iter().zip(drawn).collect(),
        })
    }
}
