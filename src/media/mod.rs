//! Media root access: extension table, catalog listing and path confinement.

pub mod catalog;
pub mod mime;
pub mod safe_path;
