// src/catalog/locale.rs

//! Request-language resolution for the bilingual reference tables.

/// Languages the reference tables carry columns for.
///
/// Only an exact `"en"` tag selects English; every other tag, recognized or
/// not, silently falls back to Turkish. No tag is ever rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
  En,
  Tr,
}

impl Lang {
  pub fn from_tag(tag: &str) -> Self {
    if tag == "en" {
      Lang::En
    } else {
      Lang::Tr
    }
  }

  /// Column holding the display name in this language. Returned values come
  /// from this closed set only and are safe to splice into query text.
  pub fn name_column(self) -> &'static str {
    match self {
      Lang::En => "name_en",
      Lang::Tr => "name_tr",
    }
  }
}
