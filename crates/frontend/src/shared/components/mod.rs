pub mod deck_paragraph;
pub mod tech_card;
pub mod tech_price;

pub use deck_paragraph::DeckParagraph;
pub use tech_card::{appear_style, TechCard};
pub use tech_price::TechPrice;
