//! HTTP surface for the masking service

pub mod server;

pub use server::{MaskServer, router};
