//! Entity detectors
//!
//! Detectors produce untrusted candidate spans; the masking engine validates
//! them. The generative-model detector talks to an Ollama-compatible
//! `/api/generate` endpoint.

pub mod detector;
pub mod ollama;
pub mod parse;
pub mod prompt;

pub use detector::{EntityDetector, StaticDetector};
pub use ollama::{DetectorSettings, OllamaDetector};
pub use parse::parse_detector_output;
