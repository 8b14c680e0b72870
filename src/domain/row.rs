use serde::Serialize;

/// The number of columns in the requirements table.
pub const COLUMN_COUNT: usize = 7;

/// The column labels, in table order.
///
/// These are written as the first record of the CSV export.
pub const HEADER: [&str; COLUMN_COUNT] = [
    "Package/App (Namespace)",
    "Requirement #",
    "Description",
    "Implemented in",
    "Status",
    "Notes",
    "Date",
];

/// A single row of the requirements table.
///
/// Every row has exactly [`COLUMN_COUNT`] fields. Missing trailing cells are
/// empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Row {
    /// The package or app the requirement belongs to.
    #[serde(rename = "Package/App (Namespace)")]
    pub package: String,

    /// The requirement identifier, eg. `REQ-1`.
    #[serde(rename = "Requirement #")]
    pub requirement: String,

    /// What the requirement asks for.
    #[serde(rename = "Description")]
    pub description: String,

    /// Where the requirement is implemented (class, file or method).
    #[serde(rename = "Implemented in")]
    pub implemented_in: String,

    /// Implementation status.
    #[serde(rename = "Status")]
    pub status: String,

    /// Free-form notes.
    #[serde(rename = "Notes")]
    pub notes: String,

    /// Date of the last status change.
    #[serde(rename = "Date")]
    pub date: String,
}

impl Row {
    /// Build a row from raw cell values.
    ///
    /// Short inputs are padded with empty fields and long inputs are
    /// truncated to [`COLUMN_COUNT`]. Backticks are removed from every field.
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut cells = fields
            .into_iter()
            .take(COLUMN_COUNT)
            .map(|field| strip_backticks(field.as_ref()))
            .chain(std::iter::repeat_with(String::new));

        let mut next = || cells.next().unwrap_or_default();

        Self {
            package: next(),
            requirement: next(),
            description: next(),
            implemented_in: next(),
            status: next(),
            notes: next(),
            date: next(),
        }
    }

    /// The fields of the row, in column order.
    #[must_use]
    pub fn fields(&self) -> [&str; COLUMN_COUNT] {
        [
            &self.package,
            &self.requirement,
            &self.description,
            &self.implemented_in,
            &self.status,
            &self.notes,
            &self.date,
        ]
    }
}

fn strip_backticks(field: &str) -> String {
    field.replace('`', "")
}
