//! CLI command implementations.

pub(crate) mod estimate;
pub(crate) mod formula;
pub(crate) mod interactive;
pub(crate) mod tables;
