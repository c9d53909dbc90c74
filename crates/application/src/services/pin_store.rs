use std::collections::HashMap;
use std::net::Ipv4Addr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::info;

/// Table of temporary address overrides.
///
/// Every table operation runs under one exclusive lock. Entries are removed
/// by a timer task armed at insertion; nothing else deletes them.
#[derive(Default)]
pub struct PinStore {
    pins: Arc<Mutex<HashMap<Ipv4Addr, Ipv4Addr>>>,
}

impl PinStore {
    pub fn new() -> Self {
        Self {
            pins: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Install an override for `request`, visible to lookups as soon as this
    /// call returns, and arm its removal after `lifetime`.
    ///
    /// Each call arms an independent, uncancellable expiry task. If the same
    /// key is added twice, the value is overwritten but the earlier timer
    /// keeps running and the first one to fire deletes the key — a pin can
    /// therefore disappear before its most recent requested lifetime.
    pub async fn add(&self, request: Ipv4Addr, response: Ipv4Addr, lifetime: Duration) {
        self.pins.lock().await.insert(request, response);
        info!(request = %request, response = %response, lifetime = ?lifetime, "Pin installed");

        let pins = Arc::clone(&self.pins);
        tokio::spawn(async move {
            tokio::time::sleep(lifetime).await;
            if pins.lock().await.remove(&request).is_some() {
                info!(request = %request, response = %response, "Pin expired, mapping removed");
            }
        });
    }

    /// Atomic read of the live override for `request`, if any.
    pub async fn lookup(&self, request: Ipv4Addr) -> Option<Ipv4Addr> {
        self.pins.lock().await.get(&request).copied()
    }
}
