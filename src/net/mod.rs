//! Outbound HTTP: the API façade, its transport seam, and wire types.

pub mod api;
pub mod transport;
pub mod types;

// =============================================================================
// TEST HELPERS
// =============================================================================
