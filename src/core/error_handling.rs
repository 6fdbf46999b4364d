//! Generic error handling utilities
//!
//! Provides unified error logging across the configuration, store and
//! output error types.

/// Trait for errors that can distinguish between user-actionable and system errors
///
/// When `is_user_actionable()` returns `true`, `user_message()` should return
/// `Some(message)` with a message the user can act on. When it returns
/// `false`, `user_message()` should return `None`.
pub trait ContextualError: std::error::Error {
    /// Returns true if the error should be shown to the user as-is
    ///
    /// Examples of user-actionable errors:
    /// - Invalid date patterns
    /// - Configuration file problems
    /// - An output file that cannot be written
    ///
    /// Examples of system errors:
    /// - SQLite failures while reading the working copy
    /// - Broken stdout
    fn is_user_actionable(&self) -> bool;

    /// Returns the specific user message if this is a user-actionable error
    fn user_message(&self) -> Option<String>;
}

/// Log errors with appropriate detail level based on error specificity
///
/// User-actionable errors log their own message; system errors log the
/// operation context. Full detail always goes to debug level.
///
/// # Examples
/// ```rust,no_run
/// # use svnrev::core::error_handling::log_error_with_context;
/// # use svnrev::format::DatePattern;
/// if let Err(e) = DatePattern::parse("yyyy-bb") {
///     log_error_with_context(&e, "Compiling timestamp format");
///     // Logs: "FATAL: Illegal pattern character 'b' in date pattern 'yyyy-bb'"
/// }
/// ```
pub fn log_error_with_context<E: ContextualError + std::fmt::Display + std::fmt::Debug>(
    error: &E,
    operation_context: &str,
) {
    match error.user_message().filter(|_| error.is_user_actionable()) {
        Some(user_msg) => log::error!("FATAL: {}", user_msg),
        None => log::error!("FATAL: {}", operation_context),
    }
    log::debug!("DETAIL: {}", error);
    log::debug!("DEBUG_DETAILS: {:?}", error);
}
