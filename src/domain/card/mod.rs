pub mod entity;
pub mod invariants;

pub use entity::Card;
pub use invariants::validate_card;
