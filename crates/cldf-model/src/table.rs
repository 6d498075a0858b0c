#![deny(unsafe_code)]

/// One cell of an output table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    List(Vec<String>),
    Missing,
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn optional(value: Option<&str>) -> Self {
        match value {
            Some(value) => Self::Text(value.to_string()),
            None => Self::Missing,
        }
    }

    pub fn list(values: &[String]) -> Self {
        Self::List(values.to_vec())
    }

    /// True for missing cells, empty text and empty lists.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(value) => value.is_empty(),
            Self::List(values) => values.is_empty(),
            Self::Missing => true,
        }
    }

    /// Individual non-empty values carried by the cell.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Text(value) if !value.is_empty() => vec![value.as_str()],
            Self::List(values) => values
                .iter()
                .map(String::as_str)
                .filter(|value| !value.is_empty())
                .collect(),
            Self::Text(_) | Self::Missing => Vec::new(),
        }
    }

    /// Render the cell as CSV field text; list cells are joined with `separator`.
    pub fn render(&self, separator: Option<&str>) -> String {
        match self {
            Self::Text(value) => value.clone(),
            Self::List(values) => values.join(separator.unwrap_or(" ")),
            Self::Missing => String::new(),
        }
    }
}

/// A row that can be projected onto the columns of an output table.
pub trait Record {
    /// Value of `column`, or `None` when the record has no such column.
    fn cell(&self, column: &str) -> Option<CellValue>;
}
