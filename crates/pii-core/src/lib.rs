//! Core domain models for pii
//!
//! This crate contains:
//! - Entity models (RawSpan, EntitySpan, MaskedEntity)
//! - Masking modes and results
//! - The shared error type

pub mod entity;
pub mod error;
pub mod mode;
pub mod result;

pub use entity::{EntitySpan, MaskedEntity, RawSpan};
pub use error::{Error, Result};
pub use mode::MaskingMode;
pub use result::{MaskingOutcome, MaskingResult, NormalizeReport};
