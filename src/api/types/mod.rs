/// Query descriptor and path builder
pub mod descriptor;

/// Response envelope module
pub mod envelope;

/// Persisted record module
pub mod record;
