//! Expose quire's site builder for integration tests and for embedding. The
//! binary in `main.rs` is a thin layer over [`site::Site`].
pub mod cli;
pub mod site;
