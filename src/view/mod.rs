//! View targets handed to route callbacks.
//!
//! The navigator never renders. Callbacks capture a `RenderTarget` at
//! registration time and replace its contents when they run, so several
//! navigators (and their views) can coexist without shared global state.

pub mod target;

pub use target::{MemoryTarget, RenderTarget};
