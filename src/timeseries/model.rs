use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::wire::SeriesEnvelope;

/// One row of a time series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Point {
    /// Parsed from the first column, whatever `timestamp-format` was requested.
    pub timestamp: Option<DateTime<Utc>>,
    /// The remaining columns, in [`Series::columns`] order; `None` for nulls and non-numbers.
    pub values: Vec<Option<f64>>,
}

/// The values table of a time-series response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    /// The metric id echoed back by the server.
    pub metric_id: Option<String>,
    /// Column names after the timestamp column (e.g. `open`, `high`, `low`, `close`, `volume`).
    pub columns: Vec<String>,
    pub points: Vec<Point>,
}

impl Series {
    /// Reads the `data.values` table of a success body.
    ///
    /// Returns `None` for error envelopes and bodies without a values table.
    pub fn from_body(body: &Value) -> Option<Self> {
        let env: SeriesEnvelope = serde_json::from_value(body.clone()).ok()?;
        let data = env.data?;
        let rows = data.values?;
        let params = data.parameters;

        let seconds = params
            .as_ref()
            .and_then(|p| p.timestamp_format.as_deref())
            == Some("unix-seconds");
        let columns = params
            .and_then(|p| p.columns)
            .map(|c| c.into_iter().skip(1).collect())
            .unwrap_or_default();

        let points = rows
            .into_iter()
            .map(|row| {
                let mut cells = row.into_iter();
                let timestamp = cells.next().and_then(|ts| parse_timestamp(&ts, seconds));
                Point {
                    timestamp,
                    values: cells.map(|v| v.as_f64()).collect(),
                }
            })
            .collect();

        Some(Self {
            metric_id: data.schema.and_then(|s| s.metric_id),
            columns,
            points,
        })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The values of one named column, aligned with `points`.
    pub fn column(&self, name: &str) -> Option<Vec<Option<f64>>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(
            self.points
                .iter()
                .map(|p| p.values.get(idx).copied().flatten())
                .collect(),
        )
    }
}

fn parse_timestamp(v: &Value, seconds: bool) -> Option<DateTime<Utc>> {
    match v {
        Value::Number(n) => {
            let n = n.as_i64()?;
            if seconds {
                DateTime::from_timestamp(n, 0)
            } else {
                DateTime::from_timestamp_millis(n)
            }
        }
        Value::String(s) => DateTime::parse_from_rfc3339(s)
            .ok()
            .map(|d| d.with_timezone(&Utc)),
        _ => None,
    }
}
