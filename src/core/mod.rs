//! Primitive card and seat-set types shared across the crate.
//!
//! Cards here carry identity only; the replay engine never evaluates hand
//! strength.
mod card;
mod player_bit_set;

pub use card::{Card, CardParseError, Suit, Value};
pub use player_bit_set::PlayerBitSet;
