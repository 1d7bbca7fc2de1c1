//! Page-side display state touched by the façade and the poller.
//!
//! DESIGN
//! ======
//! Each concern is a small cloneable handle over shared state so the
//! façade, the poller, and the page host can hold the same instance
//! without a global.

pub mod badge;
pub mod connectivity;
pub mod loading;
pub mod toast;
