//! Reusable UI components

pub mod nav;
pub mod status_bar;
