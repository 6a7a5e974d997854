pub mod common;
pub mod motion;
pub mod pages;
pub mod preloader;
#[cfg(feature = "hydrate")]
pub mod web;

pub use pages::{LandingPage, NotFoundPage};
pub use preloader::Preloader;
