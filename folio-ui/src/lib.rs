//! Dioxus components and stores for the portfolio site
//!
//! Views are pure and props-based; the web binary owns the store and wires
//! callbacks into them.

pub mod animation;
pub mod components;
pub mod stores;
pub mod wasm_utils;

pub use components::*;
