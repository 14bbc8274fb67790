//! Shared UI primitives

mod spinner;

pub use spinner::LoadingSpinner;
