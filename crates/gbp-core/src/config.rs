//! Points configuration: label values and the aggregation policy.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{GbpError, Result};

/// How label values are combined into a single point value.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum CollectionMethod {
    /// Best positive label plus worst negative label
    #[default]
    HighVsLow,
    /// Every label's value, once per occurrence
    Sum,
}

/// Label → points mapping plus policy, supplied per invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PointsConfiguration {
    /// Point value for each known label
    #[serde(default)]
    pub points: BTreeMap<String, i64>,

    /// Aggregation policy; unset behaves as `HighVsLow`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection_method: Option<CollectionMethod>,

    /// Label that forces a zero result when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_balance_label: Option<String>,
}

impl PointsConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a configuration document.
    ///
    /// # Errors
    ///
    /// Returns `GbpError::Config` for malformed TOML, unknown keys, non-integer
    /// point values, or an unknown collection method.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| GbpError::Config(e.to_string()))
    }

    pub fn with_points<I, K>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = (K, i64)>,
        K: Into<String>,
    {
        self.points
            .extend(points.into_iter().map(|(label, value)| (label.into(), value)));
        self
    }

    pub fn with_method(mut self, method: CollectionMethod) -> Self {
        self.collection_method = Some(method);
        self
    }

    pub fn with_no_balance_label(mut self, label: impl Into<String>) -> Self {
        self.no_balance_label = Some(label.into());
        self
    }

    /// The effective aggregation policy.
    pub fn method(&self) -> CollectionMethod {
        self.collection_method.unwrap_or_default()
    }

    /// Configured value for a label, if any.
    pub fn value_of(&self, label: &str) -> Option<i64> {
        self.points.get(label).copied()
    }
}
