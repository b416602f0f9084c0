//! Template Rendering Module
//!
//! Placeholder substitution over static HTML templates, plus the
//! placeholder-set builders for each page kind and the HTML fragment
//! generators for list-style content.

mod engine;
mod fragments;
pub mod pages;

pub use engine::{render, Replacements};
pub use fragments::{
    cart_item_fragment, cart_replacements, detail_replacements, home_replacements,
    product_fragment,
};
