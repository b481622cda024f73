//! API middleware.
//!
//! Only request auditing runs here. CORS and cache headers come from
//! `tower-http` layers in the router.

pub mod audit;
