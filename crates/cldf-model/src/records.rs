//! One struct per output table row.

use crate::table::{CellValue, Record};

/// A language variety, keyed by glottocode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub id: String,
    pub name: String,
    pub glottocode: String,
    pub family: String,
    pub subbranch: String,
    pub subsubbranch: String,
    pub early_time_bp: String,
    pub late_time_bp: String,
    pub av_time_bp: String,
    pub latitude: String,
    pub longitude: String,
    pub source: Vec<String>,
}

impl Record for Language {
    fn cell(&self, column: &str) -> Option<CellValue> {
        let value = match column {
            "ID" => CellValue::text(&self.id),
            "Name" => CellValue::text(&self.name),
            "Glottocode" => CellValue::text(&self.glottocode),
            "Macroarea" | "ISO639P3code" => CellValue::Missing,
            "Family" => CellValue::text(&self.family),
            "Subbranch" => CellValue::text(&self.subbranch),
            "Subsubbranch" => CellValue::text(&self.subsubbranch),
            "EarlyTimeBP" => CellValue::text(&self.early_time_bp),
            "LateTimeBP" => CellValue::text(&self.late_time_bp),
            "AvTimeBP" => CellValue::text(&self.av_time_bp),
            "Latitude" => CellValue::text(&self.latitude),
            "Longitude" => CellValue::text(&self.longitude),
            "Source" => CellValue::list(&self.source),
            _ => return None,
        };
        Some(value)
    }
}

/// A feature coded for every construction (or aggregated per language).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Auxiliary grammatical category codes.
    pub grammacodes: Vec<String>,
    /// Column of the raw appendix holding this parameter's value.
    pub sheet_column: Option<String>,
}

impl Record for Parameter {
    fn cell(&self, column: &str) -> Option<CellValue> {
        let value = match column {
            "ID" => CellValue::text(&self.id),
            "Name" => CellValue::text(&self.name),
            "Description" => CellValue::text(&self.description),
            "Grammacodes" => CellValue::list(&self.grammacodes),
            _ => return None,
        };
        Some(value)
    }
}

/// A permissible value of a categorical parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    pub id: String,
    pub parameter_id: String,
    pub name: String,
    pub description: String,
}

impl Record for Code {
    fn cell(&self, column: &str) -> Option<CellValue> {
        let value = match column {
            "ID" => CellValue::text(&self.id),
            "Parameter_ID" => CellValue::text(&self.parameter_id),
            "Name" => CellValue::text(&self.name),
            "Description" => CellValue::text(&self.description),
            _ => return None,
        };
        Some(value)
    }
}

/// One attested relative-pronoun construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Construction {
    pub id: String,
    pub language_id: String,
    pub name: String,
    pub description: Option<String>,
}

impl Record for Construction {
    fn cell(&self, column: &str) -> Option<CellValue> {
        let value = match column {
            "ID" => CellValue::text(&self.id),
            "Language_ID" => CellValue::text(&self.language_id),
            "Name" => CellValue::text(&self.name),
            "Description" => CellValue::optional(self.description.as_deref()),
            _ => return None,
        };
        Some(value)
    }
}

/// The value of one parameter for one construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CValue {
    pub id: String,
    pub construction_id: String,
    pub parameter_id: String,
    pub code_id: Option<String>,
    pub value: String,
    pub comment: Option<String>,
}

impl Record for CValue {
    fn cell(&self, column: &str) -> Option<CellValue> {
        let value = match column {
            "ID" => CellValue::text(&self.id),
            "Construction_ID" => CellValue::text(&self.construction_id),
            "Parameter_ID" => CellValue::text(&self.parameter_id),
            "Code_ID" => CellValue::optional(self.code_id.as_deref()),
            "Value" => CellValue::text(&self.value),
            "Comment" => CellValue::optional(self.comment.as_deref()),
            _ => return None,
        };
        Some(value)
    }
}

/// A language-level value, such as the aggregated pronoun forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Value {
    pub id: String,
    pub language_id: String,
    pub parameter_id: String,
    pub value: String,
    pub code_id: Option<String>,
    pub comment: String,
    pub source: Vec<String>,
}

impl Record for Value {
    fn cell(&self, column: &str) -> Option<CellValue> {
        let value = match column {
            "ID" => CellValue::text(&self.id),
            "Language_ID" => CellValue::text(&self.language_id),
            "Parameter_ID" => CellValue::text(&self.parameter_id),
            "Value" => CellValue::text(&self.value),
            "Code_ID" => CellValue::optional(self.code_id.as_deref()),
            "Comment" => CellValue::text(&self.comment),
            "Source" => CellValue::list(&self.source),
            _ => return None,
        };
        Some(value)
    }
}
