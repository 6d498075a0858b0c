use indexmap::IndexMap;

/// A single BibTeX entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BibEntry {
    /// Lowercased entry type, e.g. `book`.
    pub entry_type: String,
    /// Citation key, case preserved.
    pub key: String,
    /// Lowercased field names mapped to their expanded values.
    pub fields: IndexMap<String, String>,
}

impl BibEntry {
    pub fn new(entry_type: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            entry_type: entry_type.into(),
            key: key.into(),
            fields: IndexMap::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    pub fn to_bibtex(&self) -> String {
        let mut out = format!("@{}{{{}", self.entry_type, self.key);
        for (name, value) in &self.fields {
            out.push_str(",\n    ");
            out.push_str(name);
            out.push_str(" = {");
            out.push_str(value);
            out.push('}');
        }
        out.push_str("\n}\n");
        out
    }
}

/// Citation-keyed bibliography in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bibliography {
    entries: IndexMap<String, BibEntry>,
}

impl Bibliography {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry, returning the entry it replaced, if any.
    pub fn insert(&mut self, entry: BibEntry) -> Option<BibEntry> {
        self.entries.insert(entry.key.clone(), entry)
    }

    pub fn get(&self, key: &str) -> Option<&BibEntry> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BibEntry> {
        self.entries.values()
    }

    /// Serialize every entry, separated by blank lines.
    pub fn to_bibtex(&self) -> String {
        self.iter()
            .map(BibEntry::to_bibtex)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl FromIterator<BibEntry> for Bibliography {
    fn from_iter<T: IntoIterator<Item = BibEntry>>(iter: T) -> Self {
        let mut bibliography = Self::new();
        for entry in iter {
            bibliography.insert(entry);
        }
        bibliography
    }
}
