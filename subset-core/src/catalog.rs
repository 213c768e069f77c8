//! Dataset and country listings served by the data API.

use crate::error::{Result, SubsetError};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// A dataset offered in the dataset selector.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct DatasetOption {
    pub id: String,
    pub label: String,
}

impl DatasetOption {
    /// Parse a GETDATASETS body: an array of single-key objects
    /// `[{"id": "label"}, ...]`. Array order is the display order.
    pub fn parse_list(body: &str) -> Result<Vec<DatasetOption>> {
        let entries: Vec<BTreeMap<String, String>> = serde_json::from_str(body)?;
        entries
            .into_iter()
            .map(|entry| {
                if entry.len() != 1 {
                    return Err(SubsetError::InvalidDatasetEntry(format!(
                        "expected one dataset per entry, found {}",
                        entry.len()
                    )));
                }
                let (id, label) = entry.into_iter().next().ok_or_else(|| {
                    SubsetError::InvalidDatasetEntry("empty entry".to_string())
                })?;
                Ok(DatasetOption { id, label })
            })
            .collect()
    }
}

/// A named region offered in the country selector.
#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct CountryOption {
    pub name: String,
    pub region_id: String,
}

impl CountryOption {
    /// Parse a GETCOUNTRIES body, `{"Country name": "region id", ...}`,
    /// into options sorted by name.
    pub fn parse_list(body: &str) -> Result<Vec<CountryOption>> {
        let label_to_id: HashMap<String, String> = serde_json::from_str(body)?;
        let mut countries: Vec<CountryOption> = label_to_id
            .into_iter()
            .map(|(name, region_id)| CountryOption { name, region_id })
            .collect();
        countries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(countries)
    }
}
