//! Insertion-ordered lookups keyed by glottocode.

use cldf_ingest::LanguageSources;
use cldf_ingest::raw::{RawRow, columns};
use cldf_model::Language;
use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::error::Result;

/// One language per glottocode, taken from the first row that mentions it.
pub fn index_languages(
    rows: &[RawRow],
    language_sources: &LanguageSources,
) -> Result<IndexMap<String, Language>> {
    let mut languages = IndexMap::new();
    for row in rows {
        let glottocode = row.glottocode()?;
        if languages.contains_key(glottocode) {
            continue;
        }
        let language = Language {
            id: glottocode.to_string(),
            name: row.get(columns::LANGUAGE)?.to_string(),
            glottocode: glottocode.to_string(),
            family: row.get(columns::BRANCH)?.to_string(),
            subbranch: row.get(columns::SUBBRANCH)?.to_string(),
            subsubbranch: row.get(columns::SUBSUBBRANCH)?.to_string(),
            early_time_bp: row.get(columns::EARLY_TIME_BP)?.to_string(),
            late_time_bp: row.get(columns::LATE_TIME_BP)?.to_string(),
            av_time_bp: row.get(columns::AV_TIME_BP)?.to_string(),
            latitude: row.get(columns::LATITUDE)?.to_string(),
            longitude: row.get(columns::LONGITUDE)?.to_string(),
            source: language_sources
                .get(glottocode)
                .cloned()
                .unwrap_or_default(),
        };
        languages.insert(glottocode.to_string(), language);
    }
    Ok(languages)
}

/// Relative-marker forms per glottocode, one entry per row in row order.
pub fn index_forms(rows: &[RawRow]) -> Result<IndexMap<String, Vec<String>>> {
    let mut forms: IndexMap<String, Vec<String>> = IndexMap::new();
    for row in rows {
        let form = row.form()?.to_string();
        match forms.entry(row.glottocode()?.to_string()) {
            Entry::Occupied(mut entry) => entry.get_mut().push(form),
            Entry::Vacant(entry) => {
                entry.insert(vec![form]);
            }
        }
    }
    Ok(forms)
}
