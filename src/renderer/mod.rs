//! Text rendering: the tree describer and the schema field describer.

pub mod components;
pub mod renderer;
pub mod renders;
pub mod traits;

pub use components::*;
pub use renderer::*;
pub use traits::*;
