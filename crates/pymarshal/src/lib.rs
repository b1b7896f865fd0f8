//! Public library API for reading and writing Python `marshal` data.

/// Tag table, value tree, cursor, and the decode/encode entry points.
pub mod marshal;
