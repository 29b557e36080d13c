//! # Vocabulary
//!
//! This module provides the vocabulary table and related io mechanisms.
//!
//! ## Vocabulary Table
//!
//! [`VocabTable`] is a bidirectional ``{ String <-> T }`` mapping,
//! with an unknown-token fallback for lookups. It is built once,
//! from delimited text lines in one of the [`VocabLine`] shapes:
//! * ``<token>`` - the id is the 0-based line index,
//! * ``<id><sep><token>``,
//! * ``<token><sep><id>``.
//!
//! ## Model Vocabulary
//!
//! Models are backed by any [`ModelVocab`]; [`VocabTable`] is the
//! provided implementation.
pub mod io;

pub mod model_vocab;
pub mod vocab_line;
pub mod vocab_table;
pub mod vocab_types;

#[doc(inline)]
pub use model_vocab::ModelVocab;
#[doc(inline)]
pub use vocab_line::VocabLine;
#[doc(inline)]
pub use vocab_table::VocabTable;
#[doc(inline)]
pub use vocab_types::{IdTokenMap, TokenIdMap};
