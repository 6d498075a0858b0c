//! On-disk layout of a dataset directory.

use std::path::{Path, PathBuf};

/// Environment variable naming the dataset directory when none is given.
pub const DATASET_DIR_ENV_VAR: &str = "RELPRON_DATASET_DIR";

const ETC_DIR: &str = "etc";
const RAW_DIR: &str = "raw";
const CLDF_DIR: &str = "cldf";

const PARAMETERS_FILE: &str = "parameters.csv";
const CODES_FILE: &str = "codes.csv";
const LANGUAGE_SOURCES_FILE: &str = "language-sources.csv";
const VALUE_SOURCES_FILE: &str = "value-sources.csv";
const APPENDIX_FILE: &str = "InterrogativeRelativeIE_Appendix1.csv";
const BIBLIOGRAPHY_FILE: &str = "AudersetReferences.bib";

/// Paths of every input file and of the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetLayout {
    pub root: PathBuf,
    pub parameters: PathBuf,
    pub codes: PathBuf,
    pub language_sources: PathBuf,
    pub value_sources: PathBuf,
    pub appendix: PathBuf,
    pub bibliography: PathBuf,
    pub output_dir: PathBuf,
}

impl DatasetLayout {
    /// Standard layout: configuration under `etc/`, sources under `raw/`,
    /// output into `cldf/`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let etc = root.join(ETC_DIR);
        let raw = root.join(RAW_DIR);
        Self {
            parameters: etc.join(PARAMETERS_FILE),
            codes: etc.join(CODES_FILE),
            language_sources: etc.join(LANGUAGE_SOURCES_FILE),
            value_sources: etc.join(VALUE_SOURCES_FILE),
            appendix: raw.join(APPENDIX_FILE),
            bibliography: raw.join(BIBLIOGRAPHY_FILE),
            output_dir: root.join(CLDF_DIR),
            root,
        }
    }

    /// Layout rooted at `$RELPRON_DATASET_DIR`, if set.
    pub fn from_env() -> Option<Self> {
        std::env::var_os(DATASET_DIR_ENV_VAR).map(Self::new)
    }

    #[must_use]
    pub fn with_output_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }

    /// Every input file, labelled, in load order.
    pub fn inputs(&self) -> [(&'static str, &Path); 6] {
        [
            ("parameters", self.parameters.as_path()),
            ("codes", self.codes.as_path()),
            ("appendix", self.appendix.as_path()),
            ("bibliography", self.bibliography.as_path()),
            ("language sources", self.language_sources.as_path()),
            ("value sources", self.value_sources.as_path()),
        ]
    }

    /// Inputs that do not exist on disk.
    pub fn missing_inputs(&self) -> Vec<&Path> {
        self.inputs()
            .into_iter()
            .map(|(_, path)| path)
            .filter(|path| !path.is_file())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_layout_paths() {
        let layout = DatasetLayout::new("/data/relpron");
        assert_eq!(
            layout.parameters,
            PathBuf::from("/data/relpron/etc/parameters.csv")
        );
        assert_eq!(
            layout.appendix,
            PathBuf::from("/data/relpron/raw/InterrogativeRelativeIE_Appendix1.csv")
        );
        assert_eq!(layout.output_dir, PathBuf::from("/data/relpron/cldf"));

        let layout = layout.with_output_dir("/tmp/out");
        assert_eq!(layout.output_dir, PathBuf::from("/tmp/out"));
        assert_eq!(layout.root, PathBuf::from("/data/relpron"));
    }

    #[test]
    fn reports_missing_inputs() {
        let layout = DatasetLayout::new("/nonexistent/relpron");
        assert_eq!(layout.missing_inputs().len(), 6);
    }
}
