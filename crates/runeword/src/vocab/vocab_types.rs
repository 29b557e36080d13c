//! # Vocabulary Types

use crate::types::RWHashMap;

/// `{ String -> T }` map.
///
/// ## Style Hints
/// Instance names should prefer `token_map`, or `token_id_map`.
pub type TokenIdMap<T> = RWHashMap<String, T>;

/// `{ T -> String }` map.
///
/// ## Style Hints
/// Instance names should prefer `id_map`, or `id_token_map`.
pub type IdTokenMap<T> = RWHashMap<T, String>;
