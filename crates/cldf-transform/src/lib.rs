//! Indexing and derivation of the CLDF collections.
//!
//! [`index`] groups the raw appendix by glottocode, [`build`] maps rows to
//! constructions, coded values and per-language aggregated values.

pub mod build;
mod error;
pub mod index;
mod slug;

pub use build::{
    FORM_PARAMETER, FORM_SEPARATOR, FORMS_PARAMETER, aggregated_value_id, build_constructions,
    build_cvalues, build_dataset, build_values, code_id, construction_name, cvalue_id,
};
pub use error::{Result, TransformError};
pub use index::{index_forms, index_languages};
pub use slug::slug;
