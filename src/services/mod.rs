//! Background services driven by timers.

pub mod notifications;
