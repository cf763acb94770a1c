//! Image-generation provider clients for the design tool.
//!
//! One capability interface ([`ImageProvider`]) with concrete variants
//! selected by configuration, plus the [`FallbackChain`] that walks an
//! ordered list of providers until one produces an image. Providers never
//! surface raw network errors to HTTP callers; the API layer maps
//! [`ProviderError`] to a generic user-facing message.

pub mod error;
pub mod json;
pub mod pollinations;
pub mod provider;
pub mod settings;
pub mod sse;

pub use error::ProviderError;
pub use provider::{FallbackChain, ImageProvider, ImageResult};
pub use settings::{ProviderKind, ProviderSettings};
