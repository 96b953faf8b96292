//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the demo panels while reading/writing the shared
//! `DemoState` from the Leptos context provided by `app::App`.

pub mod alert;
pub mod blockchain_card;
pub mod crypto_tools;
pub mod feature_bar;
pub mod key_differences;
pub mod network_grid;
pub mod performance_chart;
pub mod traditional_card;
pub mod verification_tabs;
