//! Framework hooks
//!
//! This module provides the handlers poise calls around command execution:
//! invocation logging and error reporting.

/// Error reporting for failed commands
pub mod errors;

/// Invocation logging
pub mod logging;
