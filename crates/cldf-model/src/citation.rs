#![deny(unsafe_code)]

use std::fmt;
use std::str::FromStr;

use crate::ModelError;

/// A source citation such as `Smith2001` or `Smith2001[12-14]`.
///
/// Only the key is resolved against the bibliography; the bracketed part
/// carries page or section context.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourceRef {
    key: String,
    context: Option<String>,
}

impl SourceRef {
    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        let trimmed = raw.trim();
        let (key, context) = match trimmed.find('[') {
            Some(open) => {
                let Some(inner) = trimmed[open + 1..].strip_suffix(']') else {
                    return Err(ModelError::UnterminatedPages(raw.to_string()));
                };
                (&trimmed[..open], Some(inner.to_string()))
            }
            None => (trimmed, None),
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(ModelError::EmptyCitationKey(raw.to_string()));
        }
        Ok(Self {
            key: key.to_string(),
            context,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn context(&self) -> Option<&str> {
        self.context.as_deref()
    }
}

impl FromStr for SourceRef {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for SourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.context {
            Some(context) => write!(f, "{}[{}]", self.key, context),
            None => f.write_str(&self.key),
        }
    }
}
