//! Mono onboarding core: wizard sequencing, answer aggregation, and
//! backend submission.

pub mod aggregate;
pub mod config;
pub mod error;
pub mod session;
pub mod submit;
pub mod wizard;
