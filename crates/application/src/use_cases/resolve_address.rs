use crate::services::PinStore;
use rebind_dns_domain::QueryIntent;
use std::net::Ipv4Addr;
use std::sync::Arc;
use tracing::{debug, info};

/// Turns one query name into one answer address.
///
/// A pin request is answered with its override address and installs the pin
/// for future lookups of the request address. A direct resolution decodes
/// the address from the name, subject to any live override. Everything else
/// answers the loopback address.
pub struct ResolveAddressUseCase {
    pins: Arc<PinStore>,
}

impl ResolveAddressUseCase {
    pub fn new(pins: Arc<PinStore>) -> Self {
        Self { pins }
    }

    pub async fn execute(&self, query_name: &str) -> Ipv4Addr {
        let answer = match QueryIntent::decode(query_name) {
            QueryIntent::Pin {
                request,
                response,
                lifetime,
            } => {
                info!(
                    request = %request,
                    response = %response,
                    lifetime = ?lifetime,
                    "Pin request: lookups for the request address will answer the override until expiry"
                );
                self.pins.add(request, response, lifetime).await;
                response
            }
            QueryIntent::Direct { addr } => match self.pins.lookup(addr).await {
                Some(pinned) => {
                    debug!(decoded = %addr, pinned = %pinned, "Live pin overrides decoded address");
                    pinned
                }
                None => addr,
            },
            QueryIntent::Unrecognized => Ipv4Addr::LOCALHOST,
        };

        info!(name = %query_name, answer = %answer, "Resolved query");
        answer
    }
}
