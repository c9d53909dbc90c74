use serde::{Deserialize, Serialize};

/// Zone the rebind decoder answers for. The default `.` serves every name.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RebindConfig {
    #[serde(default = "default_domain")]
    pub domain: String,
}

impl RebindConfig {
    /// Case-insensitive check that a query name falls under the served zone.
    ///
    /// Trailing root dots on either side are ignored, so `rebind.example.com.`
    /// matches a configured zone of `example.com`.
    pub fn serves(&self, query_name: &str) -> bool {
        let zone = self.domain.trim_end_matches('.');
        if zone.is_empty() {
            return true;
        }

        let name_lower = query_name.trim_end_matches('.').to_lowercase();
        let zone_lower = zone.to_lowercase();

        name_lower == zone_lower || name_lower.ends_with(&format!(".{}", zone_lower))
    }
}

impl Default for RebindConfig {
    fn default() -> Self {
        Self {
            domain: default_domain(),
        }
    }
}

fn default_domain() -> String {
    ".".to_string()
}
