//! Process exit codes returned by [`crate::run`].

/// Session or command finished normally, including quit and end of input.
pub const SUCCESS: i32 = 0;

/// Bad arguments, invalid configuration, or an I/O failure.
pub const ERROR: i32 = 2;
