use indexmap::IndexMap;

use crate::{Bibliography, CValue, Code, Construction, Language, Parameter, Value};

/// Every collection handed to the writer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CldfDataset {
    pub languages: Vec<Language>,
    pub parameters: Vec<Parameter>,
    pub codes: IndexMap<String, Code>,
    pub constructions: Vec<Construction>,
    pub cvalues: Vec<CValue>,
    pub values: Vec<Value>,
    pub sources: Bibliography,
}
