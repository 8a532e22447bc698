//! Core implementation: the hart and its architectural state.

/// The clocked hart controller.
pub mod hart;

/// Architectural register file.
pub mod regfile;

pub use hart::Hart;
pub use regfile::RegisterFile;
