use super::{Device, DeviceResult};
use crate::ctx::RequestCtx;
use std::sync::Arc;

pub struct DevicePipeline;

impl DevicePipeline {
    /// Run devices in order until one answers the request itself.
    pub fn run_on_request(devices: &[Arc<dyn Device>], ctx: &mut RequestCtx) -> DeviceResult {
        for dev in devices {
            if let r @ DeviceResult::Respond(_) = dev.on_request(ctx) {
                tracing::debug!(device = dev.name(), "device answered the request");
                return r;
            }
        }
        DeviceResult::Continue
    }
}
