//! Sheet rows and the roster they make up.
//!
//! The sheet is filled by a Google Form, so column headers are whatever the
//! form author typed and have changed over time. Each logical field keeps an
//! ordered list of header spellings and the first one present wins.

use std::borrow::Cow;
use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Shown in place of a field the record does not carry.
pub const PLACEHOLDER: &str = "—";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    JuryNumber,
    Name,
    Size,
    Phone,
}

impl Field {
    /// Header spellings in lookup order.
    pub const fn keys(self) -> &'static [&'static str] {
        match self {
            Self::JuryNumber => &["Jurcy Number", "jersey Number"],
            Self::Name => &["Name", "Your Name (jersey name)"],
            Self::Size => &["Size"],
            Self::Phone => &["Phone Number"],
        }
    }
}

/// Read-only view over one upstream record.
#[derive(Debug, Clone, Copy)]
pub struct TeamMember<'a> {
    record: Option<&'a Map<String, Value>>,
}

impl<'a> TeamMember<'a> {
    /// Non-object records behave like an empty row.
    pub fn new(record: &'a Value) -> Self {
        Self {
            record: record.as_object(),
        }
    }

    /// First present value for `field`, `None` if no spelling is set.
    pub fn get(&self, field: Field) -> Option<Cow<'a, str>> {
        let record = self.record?;
        field
            .keys()
            .iter()
            .find_map(|key| record.get(*key).and_then(cell_text))
    }

    fn get_or_placeholder(&self, field: Field) -> Cow<'a, str> {
        self.get(field).unwrap_or(Cow::Borrowed(PLACEHOLDER))
    }

    pub fn jury_number(&self) -> Cow<'a, str> {
        self.get_or_placeholder(Field::JuryNumber)
    }

    pub fn name(&self) -> Cow<'a, str> {
        self.get_or_placeholder(Field::Name)
    }

    pub fn size(&self) -> Cow<'a, str> {
        self.get_or_placeholder(Field::Size)
    }

    pub fn phone(&self) -> Cow<'a, str> {
        self.get_or_placeholder(Field::Phone)
    }

    pub fn row(&self) -> MemberRow {
        MemberRow {
            jury_number: self.jury_number().into_owned(),
            name: self.name().into_owned(),
            size: self.size().into_owned(),
            phone: self.phone().into_owned(),
        }
    }
}

// Sheets hands back numeric cells as JSON numbers.
fn cell_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// A member flattened to display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberRow {
    pub jury_number: String,
    pub name: String,
    pub size: String,
    pub phone: String,
}

/// Every record the sheet currently holds, in sheet order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster(Vec<Value>);

impl Roster {
    pub fn new(records: Vec<Value>) -> Self {
        Self(records)
    }

    /// Anything other than a JSON array is an empty roster.
    pub fn from_json(value: Value) -> Self {
        match value {
            Value::Array(records) => Self(records),
            _ => Self::default(),
        }
    }

    pub fn records(&self) -> &[Value] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn members(&self) -> impl Iterator<Item = TeamMember<'_>> {
        self.0.iter().map(TeamMember::new)
    }

    pub fn rows(&self) -> Vec<MemberRow> {
        self.members().map(|m| m.row()).collect()
    }

    /// Trimmed jury numbers actually present on some record.
    pub fn taken_numbers(&self) -> BTreeSet<String> {
        self.members()
            .filter_map(|m| m.get(Field::JuryNumber))
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .collect()
    }

    /// Exact match after trimming both sides.
    pub fn is_number_taken(&self, number: &str) -> bool {
        let wanted = number.trim();
        !wanted.is_empty()
            && self
                .members()
                .filter_map(|m| m.get(Field::JuryNumber))
                .any(|n| n.trim() == wanted)
    }
}
