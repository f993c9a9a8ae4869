//! User-facing strings

mod translations;

pub use translations::{Translations, TranslationsError};
