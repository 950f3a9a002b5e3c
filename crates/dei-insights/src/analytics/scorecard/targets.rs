use super::super::domain::{AnalyticsError, ScorecardMetric};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Target fractions for the metrics a scorecard should report on.
///
/// Construction validates every entry, so a `ScorecardTargets` value is always usable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTargets", into = "BTreeMap<String, f64>")]
pub struct ScorecardTargets {
    targets: BTreeMap<ScorecardMetric, f64>,
}

impl Default for ScorecardTargets {
    fn default() -> Self {
        let targets = ScorecardMetric::ordered()
            .into_iter()
            .map(|metric| (metric, metric.default_target()))
            .collect();
        Self { targets }
    }
}

impl ScorecardTargets {
    /// Build targets from raw `(key, fraction)` pairs such as a deserialized config map.
    pub fn from_entries<I, K>(entries: I) -> Result<Self, AnalyticsError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        let mut targets = BTreeMap::new();
        for (key, value) in entries {
            let key = key.as_ref();
            let metric = ScorecardMetric::from_key(key).ok_or_else(|| {
                AnalyticsError::InvalidConfig(format!("unknown scorecard metric '{key}'"))
            })?;
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(AnalyticsError::InvalidConfig(format!(
                    "target for '{}' must be a fraction in [0, 1], got {value}",
                    metric.key()
                )));
            }
            if targets.insert(metric, value).is_some() {
                return Err(AnalyticsError::InvalidConfig(format!(
                    "duplicate target for '{}'",
                    metric.key()
                )));
            }
        }

        if targets.is_empty() {
            return Err(AnalyticsError::InvalidConfig(
                "at least one scorecard target is required".to_string(),
            ));
        }

        Ok(Self { targets })
    }

    /// Parse `key=value` overrides (as passed on the command line) on top of the defaults.
    pub fn with_overrides<S: AsRef<str>>(overrides: &[S]) -> Result<Self, AnalyticsError> {
        let mut merged: BTreeMap<String, f64> = Self::default().into();
        for raw in overrides {
            let raw = raw.as_ref();
            let (key, value) = raw.split_once('=').ok_or_else(|| {
                AnalyticsError::InvalidConfig(format!("target override '{raw}' must be key=value"))
            })?;
            let value = value.trim().parse::<f64>().map_err(|_| {
                AnalyticsError::InvalidConfig(format!("target override '{raw}' is not a number"))
            })?;
            let metric = ScorecardMetric::from_key(key).ok_or_else(|| {
                AnalyticsError::InvalidConfig(format!("unknown scorecard metric '{}'", key.trim()))
            })?;
            merged.insert(metric.key().to_string(), value);
        }
        Self::from_entries(merged)
    }

    pub fn get(&self, metric: ScorecardMetric) -> Option<f64> {
        self.targets.get(&metric).copied()
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Configured targets in canonical metric order.
    pub fn iter(&self) -> impl Iterator<Item = (ScorecardMetric, f64)> + '_ {
        self.targets.iter().map(|(metric, target)| (*metric, *target))
    }
}

/// Unvalidated `key -> fraction` pairs exactly as the caller sent them.
///
/// Repeated keys are kept so validation can reject them instead of silently keeping the last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTargets(pub Vec<(String, f64)>);

impl RawTargets {
    pub fn validate(self) -> Result<ScorecardTargets, AnalyticsError> {
        ScorecardTargets::from_entries(self.0)
    }
}

impl<'de> Deserialize<'de> for RawTargets {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RawTargetsVisitor;

        impl<'de> Visitor<'de> for RawTargetsVisitor {
            type Value = RawTargets;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of scorecard metric keys to target fractions")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some(entry) = map.next_entry::<String, f64>()? {
                    entries.push(entry);
                }
                Ok(RawTargets(entries))
            }
        }

        deserializer.deserialize_map(RawTargetsVisitor)
    }
}

impl TryFrom<RawTargets> for ScorecardTargets {
    type Error = AnalyticsError;

    fn try_from(value: RawTargets) -> Result<Self, Self::Error> {
        value.validate()
    }
}

impl From<ScorecardTargets> for BTreeMap<String, f64> {
    fn from(value: ScorecardTargets) -> Self {
        value
            .targets
            .into_iter()
            .map(|(metric, target)| (metric.key().to_string(), target))
            .collect()
    }
}
