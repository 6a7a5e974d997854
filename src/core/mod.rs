//! Preloader sequencing, reveal choreography and page content

#[cfg(feature = "ssr")]
pub mod config;
pub mod content;
mod choreographer;
mod handle;
mod marquee;
mod preloader;
mod reveal;
mod scheduler;
mod scroll;
mod stage;
mod timing;
#[cfg(test)]
mod testing;

pub use choreographer::*;
pub use handle::*;
pub use marquee::*;
pub use preloader::*;
pub use reveal::*;
pub use scheduler::*;
pub use scroll::*;
pub use stage::*;
pub use timing::*;
