pub mod deck;
pub use deck::*;

pub mod rank;
pub use rank::*;
