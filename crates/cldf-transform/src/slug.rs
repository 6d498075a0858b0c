use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Reduce free text to an identifier-safe slug.
///
/// Diacritics are stripped through canonical decomposition, the text is
/// lowercased, and everything but ASCII letters and digits is removed, so
/// `"Interrogative (wh-)"` becomes `"interrogativewh"` and `"hós"` becomes
/// `"hos"`.
pub fn slug(text: &str) -> String {
    text.nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_alphanumeric)
        .collect()
}
