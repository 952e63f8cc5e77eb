//! Fixlet model
//!
//! Every attribute is text, including `RelevantComputerCount`, so a row
//! round-trips through the file exactly as written.

use std::fmt;

use serde::Serialize;

/// A single fixlet record
///
/// Field order mirrors the on-disk column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fixlet {
    /// Identifier of the owning site
    #[serde(rename = "SiteID")]
    pub site_id: String,

    /// Lookup key for update and delete (not enforced unique)
    #[serde(rename = "FixletID")]
    pub fixlet_id: String,

    /// Human-readable label
    #[serde(rename = "Name")]
    pub name: String,

    /// Severity classification, e.g. "High", "Medium", "Low" (free text)
    #[serde(rename = "Criticality")]
    pub criticality: String,

    /// Count of affected machines, kept as text
    #[serde(rename = "RelevantComputerCount")]
    pub relevant_computer_count: String,
}

impl Fixlet {
    /// Number of columns in a fixlet row
    pub const FIELD_COUNT: usize = 5;

    /// Column names of the header row, in order
    pub const HEADER: [&'static str; Self::FIELD_COUNT] =
        ["SiteID", "FixletID", "Name", "Criticality", "RelevantComputerCount"];

    /// Create a fixlet from its five fields
    #[must_use]
    pub fn new(
        site_id: impl Into<String>,
        fixlet_id: impl Into<String>,
        name: impl Into<String>,
        criticality: impl Into<String>,
        relevant_computer_count: impl Into<String>,
    ) -> Self {
        Self {
            site_id: site_id.into(),
            fixlet_id: fixlet_id.into(),
            name: name.into(),
            criticality: criticality.into(),
            relevant_computer_count: relevant_computer_count.into(),
        }
    }

    /// The five fields in column order
    #[must_use]
    pub fn fields(&self) -> [&str; Self::FIELD_COUNT] {
        [
            self.site_id.as_str(),
            self.fixlet_id.as_str(),
            self.name.as_str(),
            self.criticality.as_str(),
            self.relevant_computer_count.as_str(),
        ]
    }

    /// Build a fixlet from exactly five column values
    ///
    /// Returns `None` if the number of values is not [`Self::FIELD_COUNT`].
    #[must_use]
    pub fn from_fields<'a, I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut values = values.into_iter();
        let fixlet = Self::new(
            values.next()?,
            values.next()?,
            values.next()?,
            values.next()?,
            values.next()?,
        );
        values.next().is_none().then_some(fixlet)
    }
}

impl fmt::Display for Fixlet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{} {} {} {} {}}}",
            self.site_id, self.fixlet_id, self.name, self.criticality, self.relevant_computer_count
        )
    }
}
