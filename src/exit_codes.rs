/// Exit codes for mdcast.
///
/// These let scripts and CI distinguish a failed network operation from a
/// local tool or configuration problem.
/// Success - the command completed
pub const SUCCESS: i32 = 0;

/// Operation failed - the network rejected the request
pub const OPERATION_FAILED: i32 = 1;

/// Tool error - configuration error, unreadable input, or internal error
pub const TOOL_ERROR: i32 = 2;
