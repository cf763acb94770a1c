//! Request extractors acting as middleware: authentication, role checks,
//! and rate limiting.

pub mod auth;
pub mod rate_limit;
pub mod rbac;
