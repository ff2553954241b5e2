//! JWT validation for tokens issued by the hosted auth provider.

pub mod jwt;
