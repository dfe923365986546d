pub mod pipeline;
pub mod registry;
pub mod result;

pub use self::result::DeviceResult;
use crate::ctx::RequestCtx;

/// A trait representing a processing unit in the HTTP proxy pipeline.
///
/// Devices intercept the request before it is proxied and may either let it
/// continue (optionally rewriting what goes upstream) or answer it directly.
/// Each device must be both Send and Sync to ensure thread-safety in the
/// async runtime.
pub trait Device: Send + Sync {
    /// Name used in logs.
    fn name(&self) -> &'static str;

    /// Called when a request is first received, before any upstream work.
    fn on_request(&self, _ctx: &mut RequestCtx) -> DeviceResult {
        DeviceResult::Continue
    }
}
