//! # Middleware Stack
//!
//! - [`metrics`]: Prometheus request metrics and the contact outcome counter.

pub mod metrics;
