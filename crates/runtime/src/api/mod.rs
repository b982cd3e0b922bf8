//! Public runtime API surface.
//!
//! Hosts talk to agents through [`CaptureAgent`] and build them by role name
//! through the [`TeamRegistry`].

pub mod agent;
pub mod errors;
pub mod registry;

pub use agent::{AgentSetup, CaptureAgent};
pub use errors::{Result, RuntimeError};
pub use registry::TeamRegistry;
