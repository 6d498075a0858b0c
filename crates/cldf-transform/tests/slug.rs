use cldf_transform::{code_id, slug};
use proptest::prelude::*;

proptest! {
    #[test]
    fn slug_is_lowercase_ascii_alphanumeric(text in "\\PC{0,40}") {
        let slugged = slug(&text);
        prop_assert!(slugged.chars().all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit()));
    }

    #[test]
    fn slug_is_idempotent(text in "\\PC{0,40}") {
        let once = slug(&text);
        prop_assert_eq!(slug(&once), once.clone());
    }

    #[test]
    fn code_ids_are_prefixed_by_parameter(parameter in "[a-z]{1,12}", value in "\\PC{0,20}") {
        let id = code_id(&parameter, &value);
        let prefix = format!("{parameter}-");
        prop_assert!(id.starts_with(&prefix));
        prop_assert_eq!(&id[prefix.len()..], slug(&value));
    }
}
