use fancy_regex::Regex;
use std::net::Ipv4Addr;
use std::sync::LazyLock;
use std::time::Duration;

/// Pin lifetime applied when the encoded duration cannot be parsed.
pub const DEFAULT_PIN_LIFETIME: Duration = Duration::from_secs(5);

static DIRECT_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]{1,3}-[0-9]{1,3}-[0-9]{1,3}-[0-9]{1,3})\..*")
        .expect("direct pattern is valid")
});

// Case-insensitive: client resolvers may switch letter case between retries.
static PIN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^([0-9]{1,3}-[0-9]{1,3}-[0-9]{1,3}-[0-9]{1,3})-to-([0-9]{1,3}-[0-9]{1,3}-[0-9]{1,3}-[0-9]{1,3})-for-([0-9]{1,2})\..*",
    )
    .expect("pin pattern is valid")
});

/// Decoded meaning of a query name.
///
/// `192-168-2-1.<zone>` encodes a direct resolution to `192.168.2.1`;
/// `192-168-2-1-to-3-2-4-5-for-10.<zone>` asks the server to answer
/// `3.2.4.5` for lookups of `192.168.2.1` during the next 10 seconds.
/// Anything else is `Unrecognized` and degrades to the loopback answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryIntent {
    Direct {
        addr: Ipv4Addr,
    },
    Pin {
        request: Ipv4Addr,
        response: Ipv4Addr,
        lifetime: Duration,
    },
    Unrecognized,
}

impl QueryIntent {
    /// Classify a fully-qualified query name.
    ///
    /// The pin pattern shares its prefix with the direct pattern and must be
    /// attempted first, or every pin request would decode as a plain lookup.
    /// Pure function of the input, no side effects.
    pub fn decode(query_name: &str) -> Self {
        if let Some(caps) = PIN_PATTERN.captures(query_name).ok().flatten() {
            let request = caps.get(1).and_then(|m| parse_dashed_ipv4(m.as_str()));
            let response = caps.get(2).and_then(|m| parse_dashed_ipv4(m.as_str()));
            if let (Some(request), Some(response)) = (request, response) {
                let lifetime = caps
                    .get(3)
                    .map_or(DEFAULT_PIN_LIFETIME, |m| parse_lifetime(m.as_str()));
                return QueryIntent::Pin {
                    request,
                    response,
                    lifetime,
                };
            }
            return QueryIntent::Unrecognized;
        }

        if let Some(caps) = DIRECT_PATTERN.captures(query_name).ok().flatten() {
            if let Some(addr) = caps.get(1).and_then(|m| parse_dashed_ipv4(m.as_str())) {
                return QueryIntent::Direct { addr };
            }
        }

        QueryIntent::Unrecognized
    }
}

/// Convert a dash-joined octet group (`192-168-2-1`) into an address.
///
/// Groups above 255 fail the address parse, so the name falls back to
/// `Unrecognized` rather than carrying an unrepresentable octet forward.
fn parse_dashed_ipv4(groups: &str) -> Option<Ipv4Addr> {
    groups.replace('-', ".").parse().ok()
}

/// Parse an encoded pin duration, failing over to [`DEFAULT_PIN_LIFETIME`].
///
/// The pin pattern only captures digits, so the fail-over is defensive.
pub fn parse_lifetime(digits: &str) -> Duration {
    digits
        .parse::<u64>()
        .map_or(DEFAULT_PIN_LIFETIME, Duration::from_secs)
}
