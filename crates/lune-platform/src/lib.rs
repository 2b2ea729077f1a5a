//! Lune Platform
//!
//! One place that answers "which OS family are we on?". Everything that
//! branches per platform asks an [`OsFamilyProvider`] instead of testing
//! `cfg!` itself, so tests can pin any family.

mod os;

pub use os::{current_os_family, CurrentOs, FixedOs, OsFamily, OsFamilyProvider};
