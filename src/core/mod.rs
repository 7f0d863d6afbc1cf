// src/core/mod.rs
//! Shared services used by the assembler

pub mod fs_ops;

pub use fs_ops::{FsOps, ScratchFile};
