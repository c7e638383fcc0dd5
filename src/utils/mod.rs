//! Shared utilities.

mod hash;
mod text;

pub use hash::{content_hash, fingerprint};
pub use text::{
    closest_token, fold_diacritics, is_not_reported, normalize_token, parse_leading_number,
};
