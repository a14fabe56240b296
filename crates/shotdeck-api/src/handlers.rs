//! Request handlers.

pub mod health;
pub mod script;
pub mod shotlist;
pub mod storyboard;

pub use health::*;
pub use script::*;
pub use shotlist::*;
pub use storyboard::*;
