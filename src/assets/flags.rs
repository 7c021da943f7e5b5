//! Encoder for the bare `with-profiles` / `with-metrics` switches of the asset list.
//!
//! The endpoint expects these as valueless query flags (`?with-metrics`), which a
//! key/value encoder cannot produce. They are therefore pulled out of the parameter
//! mapping and rendered into the path before the remaining pairs are encoded.

use crate::core::QueryParams;

pub(crate) const WITH_PROFILES: &str = "with-profiles";
pub(crate) const WITH_METRICS: &str = "with-metrics";

/// Which optional sections the asset list should embed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AssetFlags {
    /// Neither section; the path carries no flags.
    #[default]
    None,
    /// `?with-profiles`
    Profiles,
    /// `?with-metrics`
    Metrics,
    /// `?with-metrics&with-profiles`
    Both,
}

impl AssetFlags {
    pub const fn new(with_profiles: bool, with_metrics: bool) -> Self {
        match (with_profiles, with_metrics) {
            (true, true) => Self::Both,
            (true, false) => Self::Profiles,
            (false, true) => Self::Metrics,
            (false, false) => Self::None,
        }
    }

    /// The literal suffix appended to the list path.
    pub const fn path_suffix(self) -> &'static str {
        match self {
            Self::Both => "?with-metrics&with-profiles",
            Self::Profiles => "?with-profiles",
            Self::Metrics => "?with-metrics",
            Self::None => "",
        }
    }

    /// Strips both flag keys from `params` and combines their truthiness with the explicit flags.
    pub(crate) fn extract(params: &mut QueryParams, with_profiles: bool, with_metrics: bool) -> Self {
        let profiles = params.remove(WITH_PROFILES).is_some_and(|v| truthy(&v));
        let metrics = params.remove(WITH_METRICS).is_some_and(|v| truthy(&v));
        Self::new(with_profiles || profiles, with_metrics || metrics)
    }
}

fn truthy(v: &str) -> bool {
    let v = v.trim();
    !(v.is_empty() || v == "0" || v.eq_ignore_ascii_case("false"))
}
