//! Start/end month selectors and the visibility modes of the spatial
//! sub-forms.

use crate::months::MonthOption;
use serde::{Deserialize, Serialize};

/// The coupled start and end date selectors. Both selectors offer the same
/// options; the start index never exceeds the end index. Only [`new`]
/// builds one, so the option list is never empty.
///
/// [`new`]: DateSelectionPair::new
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct DateSelectionPair {
    options: Vec<MonthOption>,
    start: usize,
    end: usize,
}

impl DateSelectionPair {
    /// Start at the first option, end at the last. Returns None when there
    /// are no options to select.
    pub fn new(options: Vec<MonthOption>) -> Option<Self> {
        let last = options.len().checked_sub(1)?;
        Some(DateSelectionPair {
            options,
            start: 0,
            end: last,
        })
    }

    pub fn options(&self) -> &[MonthOption] {
        &self.options
    }

    pub fn start_index(&self) -> usize {
        self.start
    }

    pub fn end_index(&self) -> usize {
        self.end
    }

    pub fn start(&self) -> &MonthOption {
        &self.options[self.start]
    }

    pub fn end(&self) -> &MonthOption {
        &self.options[self.end]
    }

    /// Select a start month. Moving it past the end pulls the end up to it.
    pub fn select_start(&mut self, index: usize) {
        self.start = self.clamp_index(index);
        if self.start > self.end {
            self.end = self.start;
        }
    }

    /// Select an end month. Moving it before the start pulls the start down.
    pub fn select_end(&mut self, index: usize) {
        self.end = self.clamp_index(index);
        if self.start > self.end {
            self.start = self.end;
        }
    }

    /// Index of the option whose value is `timestamp`.
    pub fn index_of(&self, timestamp: &str) -> Option<usize> {
        self.options.iter().position(|o| o.timestamp == timestamp)
    }

    fn clamp_index(&self, index: usize) -> usize {
        index.min(self.options.len() - 1)
    }
}

/// Which spatial sub-form is shown.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum SpatialSelectionMode {
    Point,
    Region,
}

impl SpatialSelectionMode {
    /// Value of the DATATYPE radio button.
    pub fn as_str(&self) -> &'static str {
        match self {
            SpatialSelectionMode::Point => "point",
            SpatialSelectionMode::Region => "region",
        }
    }

    /// Anything but "point" selects the region sub-form.
    pub fn from_radio_value(value: &str) -> Self {
        if value == "point" {
            SpatialSelectionMode::Point
        } else {
            SpatialSelectionMode::Region
        }
    }
}

/// How a region is chosen once the region sub-form is shown.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, Serialize, Deserialize)]
pub enum RegionSubMode {
    NamedCountry,
    Bounds,
}

impl RegionSubMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionSubMode::NamedCountry => "COUNTRY",
            RegionSubMode::Bounds => "BOUNDS",
        }
    }

    pub fn from_radio_value(value: &str) -> Self {
        if value == "BOUNDS" {
            RegionSubMode::Bounds
        } else {
            RegionSubMode::NamedCountry
        }
    }
}

/// Named containers whose visibility the controller toggles.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Panel {
    PointSelection,
    RegionSelection,
    Bounds,
    Form,
    NotLoaded,
    NotLoadedLabel,
    SubsetSelection,
}
