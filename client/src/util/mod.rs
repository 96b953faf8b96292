//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers (encoding, chart geometry) live here so components stay thin
//! and the logic stays testable without a browser.

pub mod chart;
pub mod clock;
pub mod mock_encode;
