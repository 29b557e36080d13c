//! # Word-Level Model

use tokenizers::models::wordlevel::WordLevel;

use crate::{
    errors::{RWResult, RunewordError},
    models::try_model_id,
    vocab::ModelVocab,
};

/// Build a [`WordLevel`] model over a vocabulary.
///
/// ## Arguments
/// * `vocab` - the backing vocabulary; its unknown token is the model's.
///
/// ## Returns
/// [`RunewordError::TokenOutOfRange`] if an id does not fit `u32`.
pub fn build_word_level<V: ModelVocab>(vocab: &V) -> RWResult<WordLevel> {
    let word_vocab = vocab
        .vocab_pairs()
        .map(|(token, id)| try_model_id(id).map(|id| (token.to_string(), id)))
        .collect::<RWResult<_>>()?;

    WordLevel::builder()
        .vocab(word_vocab)
        .unk_token(vocab.unk_token().to_string())
        .build()
        .map_err(RunewordError::EngineConfig)
}
