//! Traits at the boundary to external collaborators.

/// Filesystem metadata and content access used by the refresher.
pub mod file_system;
