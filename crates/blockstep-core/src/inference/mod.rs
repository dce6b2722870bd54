//! Model execution seam: backend trait, model assets, closure backend.

mod backend;
mod closure;

pub use backend::{BackendCapabilities, InferenceBackend, InferenceError, ModelAsset, ModelShape};
pub use closure::{ClosureBackend, ForwardFn};
