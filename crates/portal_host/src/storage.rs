//! Client-side persistence contracts.

pub mod prefs;
