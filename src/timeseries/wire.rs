use serde::Deserialize;
use serde_json::Value;

#[derive(Deserialize)]
pub(crate) struct SeriesEnvelope {
    pub(crate) data: Option<SeriesData>,
}

#[derive(Deserialize)]
pub(crate) struct SeriesData {
    pub(crate) parameters: Option<Parameters>,
    pub(crate) schema: Option<Schema>,
    pub(crate) values: Option<Vec<Vec<Value>>>,
}

#[derive(Deserialize)]
pub(crate) struct Parameters {
    pub(crate) columns: Option<Vec<String>>,
    pub(crate) timestamp_format: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct Schema {
    pub(crate) metric_id: Option<String>,
}
