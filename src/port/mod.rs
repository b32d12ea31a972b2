//! Trait seams between the domain and its adapters.

pub mod store;
