/// Global Tokio runtime for async HTTP and RPC operations
///
/// egui runs its update loop on the main thread without an async executor,
/// while reqwest needs a tokio context. This static runtime bridges the two:
/// handlers spawn tasks onto it and tasks report back to the main thread
/// through the app event channel.
///
/// Usage:
/// ```rust,ignore
/// use crate::utils::runtime::TOKIO_RT;
///
/// TOKIO_RT.spawn(async move {
///     let result = some_async_operation().await;
///     let _ = event_tx.send(AppEvent::from(result)).await;
/// });
/// ```
use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for async HTTP operations")
});
