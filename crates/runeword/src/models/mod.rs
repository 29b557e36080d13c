//! # Vocabulary Models
//!
//! Engine models over a [`ModelVocab`]:
//! * [`word_level`] - one id per pre-tokenized word,
//! * [`RuneLevel`] - one id per character of each word.
//!
//! [`VocabModel`] lets a single engine type host either.
//!
//! [`ModelVocab`]: crate::vocab::ModelVocab

pub mod rune_level;
pub mod vocab_model;
pub mod word_level;

#[doc(inline)]
pub use rune_level::RuneLevel;
#[doc(inline)]
pub use vocab_model::{ModelKind, VocabModel};
#[doc(inline)]
pub use word_level::build_word_level;

use crate::{
    errors::{RWResult, RunewordError},
    types::TokenType,
};

/// Narrow a vocabulary id to the engine's `u32` id space.
pub fn try_model_id<T: TokenType>(id: T) -> RWResult<u32> {
    id.to_u32().ok_or_else(|| RunewordError::TokenOutOfRange {
        value: id.to_string(),
    })
}
