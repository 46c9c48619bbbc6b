//! Fee oracle types and unit conversions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Named fee aggressiveness level recognized by the station endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PriorityTier {
    SafeLow,
    Standard,
    Fast,
}

impl PriorityTier {
    /// The key the station response uses for this tier.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriorityTier::SafeLow => "safeLow",
            PriorityTier::Standard => "standard",
            PriorityTier::Fast => "fast",
        }
    }
}

impl std::fmt::Display for PriorityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PriorityTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "safeLow" => Ok(PriorityTier::SafeLow),
            "standard" => Ok(PriorityTier::Standard),
            "fast" => Ok(PriorityTier::Fast),
            other => Err(format!("unknown priority tier '{other}'")),
        }
    }
}

/// Per-tier fee recommendation, in gwei.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TierFees {
    pub max_priority_fee: f64,
    pub max_fee: f64,
}

/// Error body the station includes when it cannot produce estimates.
#[derive(Debug, Clone, Deserialize)]
pub struct StationErrorBody {
    pub message: String,
}

/// Raw station response. Tiers and the base fee are all optional at the
/// wire level; validation happens when a snapshot is taken.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StationResponse {
    pub safe_low: Option<TierFees>,
    pub standard: Option<TierFees>,
    pub fast: Option<TierFees>,
    pub estimated_base_fee: Option<f64>,
    pub error: Option<StationErrorBody>,
}

impl StationResponse {
    fn tier(&self, tier: PriorityTier) -> Option<&TierFees> {
        match tier {
            PriorityTier::SafeLow => self.safe_low.as_ref(),
            PriorityTier::Standard => self.standard.as_ref(),
            PriorityTier::Fast => self.fast.as_ref(),
        }
    }

    /// Resolve the response into a snapshot for one tier, surfacing an
    /// oracle-reported error or missing data as explicit errors.
    pub fn snapshot(&self, tier: PriorityTier) -> Result<FeeSnapshot, GasError> {
        if let Some(err) = &self.error {
            return Err(GasError::Station(err.message.clone()));
        }
        let fees = self
            .tier(tier)
            .ok_or(GasError::MissingTier(tier))?;
        let base_fee_gwei = self
            .estimated_base_fee
            .ok_or(GasError::MissingBaseFee)?;
        Ok(FeeSnapshot {
            max_priority_fee_gwei: fees.max_priority_fee,
            base_fee_gwei,
        })
    }
}

/// Fee recommendations for one instant, resolved for the configured tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeeSnapshot {
    /// Recommended priority fee for the configured tier, in gwei.
    pub max_priority_fee_gwei: f64,
    /// Network base fee estimate, in gwei.
    pub base_fee_gwei: f64,
}

impl FeeSnapshot {
    /// Priority fee in wei, rounded up to the next whole wei.
    pub fn priority_fee_wei(&self) -> u128 {
        gwei_to_wei_ceil(self.max_priority_fee_gwei)
    }

    /// Base fee in wei, rounded up to the next whole wei.
    pub fn base_fee_wei(&self) -> u128 {
        gwei_to_wei_ceil(self.base_fee_gwei)
    }
}

/// Errors from the fee oracle.
#[derive(Debug, Error)]
pub enum GasError {
    /// Request failed or the response was not decodable.
    #[error("fee station request failed: {0}")]
    Http(String),

    /// The station reported an error body instead of estimates.
    #[error("fee station error: {0}")]
    Station(String),

    /// The response carried no data for the configured tier.
    #[error("fee station response has no data for tier '{0}'")]
    MissingTier(PriorityTier),

    /// The response carried no base fee estimate.
    #[error("fee station response has no base fee estimate")]
    MissingBaseFee,
}

/// Convert gwei to wei, rounding up to the next whole wei.
pub fn gwei_to_wei_ceil(gwei: f64) -> u128 {
    (gwei * 1e9).ceil() as u128
}

/// Convert an amount of wei to the chain's native unit.
pub fn wei_to_native(wei: f64) -> f64 {
    wei / 1e18
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_round_trip() {
        for tier in [PriorityTier::SafeLow, PriorityTier::Standard, PriorityTier::Fast] {
            assert_eq!(tier.as_str().parse::<PriorityTier>().unwrap(), tier);
        }
        assert!("turbo".parse::<PriorityTier>().is_err());
    }

    #[test]
    fn test_gwei_to_wei_rounds_up() {
        assert_eq!(gwei_to_wei_ceil(30.0), 30_000_000_000);
        assert_eq!(gwei_to_wei_ceil(30.000000001), 30_000_000_002);
        assert_eq!(gwei_to_wei_ceil(0.0), 0);
    }

    #[test]
    fn test_snapshot_selects_configured_tier() {
        let raw = r#"{
            "safeLow": {"maxPriorityFee": 30.1, "maxFee": 30.2},
            "standard": {"maxPriorityFee": 32.5, "maxFee": 33.0},
            "fast": {"maxPriorityFee": 36.0, "maxFee": 37.1},
            "estimatedBaseFee": 20.0,
            "blockTime": 2,
            "blockNumber": 43000000
        }"#;
        let response: StationResponse = serde_json::from_str(raw).unwrap();

        let snapshot = response.snapshot(PriorityTier::Standard).unwrap();
        assert_eq!(snapshot.max_priority_fee_gwei, 32.5);
        assert_eq!(snapshot.base_fee_gwei, 20.0);
        assert_eq!(snapshot.priority_fee_wei(), 32_500_000_000);
    }

    #[test]
    fn test_snapshot_surfaces_station_error() {
        let raw = r#"{"error": {"message": "rate limited", "code": 429}}"#;
        let response: StationResponse = serde_json::from_str(raw).unwrap();

        let err = response.snapshot(PriorityTier::Standard).unwrap_err();
        assert!(matches!(err, GasError::Station(m) if m == "rate limited"));
    }

    #[test]
    fn test_snapshot_surfaces_missing_tier() {
        let raw = r#"{
            "standard": {"maxPriorityFee": 32.5, "maxFee": 33.0},
            "estimatedBaseFee": 20.0
        }"#;
        let response: StationResponse = serde_json::from_str(raw).unwrap();

        let err = response.snapshot(PriorityTier::Fast).unwrap_err();
        assert!(matches!(err, GasError::MissingTier(PriorityTier::Fast)));
    }

    #[test]
    fn test_snapshot_surfaces_missing_base_fee() {
        let raw = r#"{"standard": {"maxPriorityFee": 32.5, "maxFee": 33.0}}"#;
        let response: StationResponse = serde_json::from_str(raw).unwrap();

        let err = response.snapshot(PriorityTier::Standard).unwrap_err();
        assert!(matches!(err, GasError::MissingBaseFee));
    }
}
