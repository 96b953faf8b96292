//! Client-side state for the verification demo.
//!
//! DESIGN
//! ======
//! State is split per view (`verification`, `crypto`) with static data in
//! `directory`, `nodes` and `analysis`. `demo::DemoState` is the single
//! controller provided to components through Leptos context.

pub mod analysis;
pub mod crypto;
pub mod demo;
pub mod directory;
pub mod nodes;
pub mod ui;
pub mod verification;
