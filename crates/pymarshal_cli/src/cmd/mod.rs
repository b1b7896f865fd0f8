/// Record decode and print command.
pub mod decode;
/// JSON to marshal conversion command.
pub mod encode;
/// Record listing command.
pub mod info;
/// JSON mapping for decoded values.
pub mod json;
/// Indented text rendering for decoded values.
pub mod print;
pub(crate) mod util;

#[cfg(test)]
pub(crate) mod test_support;

pub(crate) type DynError = Box<dyn std::error::Error + Send + Sync>;

/// Result returned by every command.
pub type CmdResult = Result<(), DynError>;
