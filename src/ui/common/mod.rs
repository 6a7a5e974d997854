//! Common reusable UI components
//!
//! Primitives shared across the page sections.

pub mod button;
pub mod card;

pub use button::{Button, ButtonVariant};
pub use card::Card;
