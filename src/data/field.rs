//! Selectable axis fields.
//!
//! Each axis offers three metrics. The field set is fixed, so lookups
//! (tooltip prefixes, axis titles, CSV column names) are exhaustive matches
//! rather than string-keyed tables; adding or removing a field is a
//! compile-checked change.

use std::fmt;

use crate::data::dataset::Record;

/// Demographic metric selectable for the horizontal axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum XField {
    Poverty,
    Age,
    Income,
}

impl XField {
    /// All X fields, in label order (top to bottom below the plot).
    pub const ALL: [XField; 3] = [XField::Poverty, XField::Age, XField::Income];

    /// Column name in the source CSV and in raw selection events.
    pub fn name(self) -> &'static str {
        match self {
            XField::Poverty => "poverty",
            XField::Age => "age",
            XField::Income => "income",
        }
    }

    /// Clickable axis label text.
    pub fn axis_title(self) -> &'static str {
        match self {
            XField::Poverty => "In Poverty (%)",
            XField::Age => "Age (Median)",
            XField::Income => "Household Income (Median)",
        }
    }

    /// Prefix shown before the value in the hover tooltip.
    pub fn tooltip_prefix(self) -> &'static str {
        match self {
            XField::Poverty => "Poverty(%):",
            XField::Age => "Age(Median):",
            XField::Income => "Household Income (Median):",
        }
    }

    /// The record's value for this field.
    pub fn value(self, record: &Record) -> f64 {
        match self {
            XField::Poverty => record.poverty,
            XField::Age => record.age,
            XField::Income => record.income,
        }
    }

    /// Resolve a raw field name; `None` for names outside the X set.
    pub fn parse(name: &str) -> Option<XField> {
        XField::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for XField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Health metric selectable for the vertical axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum YField {
    Obesity,
    Smokes,
    Healthcare,
}

impl YField {
    /// All Y fields, in label order (innermost column first, stacking
    /// outward from the plot edge).
    pub const ALL: [YField; 3] = [YField::Obesity, YField::Smokes, YField::Healthcare];

    /// Column name in the source CSV and in raw selection events.
    pub fn name(self) -> &'static str {
        match self {
            YField::Obesity => "obesity",
            YField::Smokes => "smokes",
            YField::Healthcare => "healthcare",
        }
    }

    /// Clickable axis label text.
    pub fn axis_title(self) -> &'static str {
        match self {
            YField::Obesity => "Obese (%)",
            YField::Smokes => "Smokes (%)",
            YField::Healthcare => "Lacks Healthcare (%)",
        }
    }

    /// Prefix shown before the value in the hover tooltip.
    pub fn tooltip_prefix(self) -> &'static str {
        match self {
            YField::Obesity => "Obesity:",
            YField::Smokes => "Smokes(%):",
            YField::Healthcare => "Healthcare(%):",
        }
    }

    /// The record's value for this field.
    pub fn value(self, record: &Record) -> f64 {
        match self {
            YField::Obesity => record.obesity,
            YField::Smokes => record.smokes,
            YField::Healthcare => record.healthcare,
        }
    }

    /// Resolve a raw field name; `None` for names outside the Y set.
    pub fn parse(name: &str) -> Option<YField> {
        YField::ALL.into_iter().find(|f| f.name() == name)
    }
}

impl fmt::Display for YField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
