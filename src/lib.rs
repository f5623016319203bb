//! # user-bootstrap
//!
//! Server-side user bootstrap for a WordPress.com front-end: resolves "who
//! is the current user" for a freshly served page by calling the remote
//! `/rest/v1/me` endpoint with computed auth headers and filtering the
//! returned profile down to the fields callers are permitted to see.
//!
//! DESIGN
//! ======
//! One outbound HTTP call per invocation, no shared mutable state, no
//! internal retry and no internal timeout — latency and retry policy belong
//! to the caller. Configuration (signing key, endpoint base, active
//! experiments) is injected through [`BootstrapConfig`] rather than read
//! from ambient process state.
//!
//! Two mutually exclusive credential paths exist: a signed login cookie
//! (HMAC-MD5 over the decoded cookie value) and an operator support
//! session (unsigned passthrough header). See [`types::BootstrapCredentials`]
//! for the trust asymmetry between them.

pub mod client;
pub mod config;
pub mod experiments;
pub mod types;
pub mod user;

pub use client::BootstrapClient;
pub use config::BootstrapConfig;
pub use experiments::{Experiment, ExperimentSet};
pub use types::{BootstrapCredentials, BootstrapError};
pub use user::{FilteredUser, filter_user_object};
