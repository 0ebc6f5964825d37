//! assessor-store — Repository abstraction and attempt handling.
//!
//! The grading engine in `assessor-core` is a pure function; this crate
//! supplies the stateful collaborators around it: repository traits, an
//! in-memory implementation, the attempt/submission service, and the
//! two-phase publish command for the admin dashboard.

pub mod error;
pub mod memory;
pub mod publish;
pub mod repository;
pub mod service;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use service::AttemptService;
