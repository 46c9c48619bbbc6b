//! HTTP client for the network fee station.

use url::Url;

use crate::gas::types::{FeeSnapshot, GasError, PriorityTier, StationResponse};

/// Client for a gas-station style fee endpoint.
///
/// The endpoint returns per-tier priority fee recommendations and a base
/// fee estimate in one JSON document. Every call fetches fresh data.
#[derive(Debug, Clone)]
pub struct GasOracle {
    http: reqwest::Client,
    endpoint: Url,
    tier: PriorityTier,
}

impl GasOracle {
    /// Create an oracle for the given endpoint and configured tier.
    pub fn new(endpoint: Url, tier: PriorityTier) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint,
            tier,
        }
    }

    /// The tier this oracle resolves recommendations for.
    pub fn tier(&self) -> PriorityTier {
        self.tier
    }

    /// Fetch current fee recommendations for the configured tier.
    ///
    /// Surfaces an explicit error when the station reports one, and when
    /// the response omits the configured tier or the base fee estimate.
    pub async fn fetch(&self) -> Result<FeeSnapshot, GasError> {
        let response = self
            .http
            .get(self.endpoint.clone())
            .send()
            .await
            .map_err(|e| GasError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GasError::Http(format!(
                "fee station returned status {status}"
            )));
        }

        let body: StationResponse = response
            .json()
            .await
            .map_err(|e| GasError::Http(format!("undecodable fee station response: {e}")))?;

        body.snapshot(self.tier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_oracle_keeps_configured_tier() {
        let oracle = GasOracle::new(
            "https://gasstation.example.org/v2".parse().unwrap(),
            PriorityTier::Fast,
        );
        assert_eq!(oracle.tier(), PriorityTier::Fast);
    }

    #[tokio::test]
    async fn test_fetch_unreachable_endpoint_is_http_error() {
        // Discard port on loopback, connection is refused immediately.
        let oracle = GasOracle::new(
            "http://127.0.0.1:9/gas".parse().unwrap(),
            PriorityTier::Standard,
        );
        let err = oracle.fetch().await.unwrap_err();
        assert!(matches!(err, GasError::Http(_)));
    }
}
