use crate::device::builtin::lambda_envelope::LambdaEnvelopeDevice;
use crate::device::core::Device;
use std::sync::Arc;

pub struct DeviceRegistry {
    devices: Vec<Arc<dyn Device>>,
}

impl Default for DeviceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl DeviceRegistry {
    pub fn new() -> Self {
        Self {
            devices: Vec::new(),
        }
    }

    /// Registry holding the built-in Lambda envelope device.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(LambdaEnvelopeDevice::default()));
        registry
    }

    pub fn register(&mut self, device: Arc<dyn Device>) {
        tracing::debug!(device = device.name(), "device registered");
        self.devices.push(device);
    }

    pub fn all(&self) -> &[Arc<dyn Device>] {
        &self.devices
    }
}
