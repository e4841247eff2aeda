//! Read-side model of a lot's metrics.

use std::collections::HashMap;

use domain::LotId;
use serde::{Deserialize, Serialize};

use crate::events::SgReaderLotMetricsRecorded;

/// Metrics recorded for one lot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LotMetrics {
    pub lot_id: LotId,
    pub metrics: HashMap<String, f64>,
}

impl LotMetrics {
    /// Returns a single metric by name.
    pub fn metric(&self, name: &str) -> Option<f64> {
        self.metrics.get(name).copied()
    }
}

impl From<&SgReaderLotMetricsRecorded> for LotMetrics {
    fn from(event: &SgReaderLotMetricsRecorded) -> Self {
        Self {
            lot_id: event.lot_id.clone(),
            metrics: event.metrics.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use domain::StringValueObject;

    use super::*;

    #[test]
    fn test_from_event() {
        let lot_id = LotId::parse("lot-010").unwrap();
        let event = SgReaderLotMetricsRecorded::new(
            lot_id.clone(),
            HashMap::from([("yield".to_string(), 0.97)]),
        );

        let metrics = LotMetrics::from(&event);
        assert_eq!(metrics.lot_id, lot_id);
        assert_eq!(metrics.metric("yield"), Some(0.97));
        assert_eq!(metrics.metric("missing"), None);
    }
}
