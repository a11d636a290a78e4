use std::future::Future;
use tokio::sync::oneshot;

/// Exit status used when an operation is interrupted (128 + SIGINT)
pub const INTERRUPTED_EXIT_CODE: i32 = 130;

/// Run `operation` unless a shutdown signal arrives first.
///
/// Returns `None` when interrupted. A dropped sender (no signal handler)
/// is not an interrupt: the operation then runs to completion.
pub async fn until_interrupted<F: Future>(
    operation: F,
    shutdown: oneshot::Receiver<()>,
) -> Option<F::Output> {
    tokio::select! {
        output = operation => Some(output),
        Ok(()) = shutdown => None,
    }
}
