//! # Rune-Level Model

use std::{
    collections::HashMap,
    path::{Path, PathBuf},
    sync::Arc,
};

use tokenizers::{
    Model,
    Token,
    models::wordlevel::{WordLevel, WordLevelTrainer},
};

use crate::{
    errors::RWResult,
    models::{build_word_level, try_model_id},
    vocab::ModelVocab,
};

/// A model which splits each word into runes, and maps each rune to an id.
///
/// Vocabulary queries, saving, and training go through an inner
/// [`WordLevel`] over the same vocabulary; only tokenization differs.
#[derive(Debug)]
pub struct RuneLevel<V: ModelVocab> {
    word_level: WordLevel,
    vocab: Arc<V>,
}

impl<V: ModelVocab> Clone for RuneLevel<V> {
    fn clone(&self) -> Self {
        Self {
            word_level: self.word_level.clone(),
            vocab: self.vocab.clone(),
        }
    }
}

impl<V: ModelVocab> RuneLevel<V> {
    /// Build a rune-level model over a vocabulary.
    pub fn new(vocab: Arc<V>) -> RWResult<Self> {
        Ok(Self {
            word_level: build_word_level(vocab.as_ref())?,
            vocab,
        })
    }

    /// Get the backing vocabulary.
    pub fn vocab(&self) -> &Arc<V> {
        &self.vocab
    }

    /// Get the inner word-level model.
    pub fn word_level(&self) -> &WordLevel {
        &self.word_level
    }

    /// Split a word into one token per rune.
    ///
    /// Offsets are byte ranges into `word`.
    ///
    /// ## Returns
    /// The first lookup error, if any rune cannot be resolved;
    /// no partial result is returned.
    pub fn try_tokenize_word(
        &self,
        word: &str,
    ) -> RWResult<Vec<Token>> {
        let mut tokens = Vec::with_capacity(word.chars().count());
        for (start, rune) in word.char_indices() {
            let mut buf = [0u8; 4];
            let value: &str = rune.encode_utf8(&mut buf);

            let id = try_model_id(self.vocab.try_token_to_id(value)?)?;
            tokens.push(Token::new(
                id,
                value.to_string(),
                (start, start + value.len()),
            ));
        }
        Ok(tokens)
    }
}

impl<V: ModelVocab> Model for RuneLevel<V> {
    type Trainer = WordLevelTrainer;

    fn tokenize(
        &self,
        sequence: &str,
    ) -> tokenizers::Result<Vec<Token>> {
        Ok(self.try_tokenize_word(sequence)?)
    }

    fn token_to_id(
        &self,
        token: &str,
    ) -> Option<u32> {
        self.word_level.token_to_id(token)
    }

    fn id_to_token(
        &self,
        id: u32,
    ) -> Option<String> {
        self.word_level.id_to_token(id)
    }

    fn get_vocab(&self) -> HashMap<String, u32> {
        self.word_level.get_vocab()
    }

    fn get_vocab_size(&self) -> usize {
        self.word_level.get_vocab_size()
    }

    fn save(
        &self,
        folder: &Path,
        prefix: Option<&str>,
    ) -> tokenizers::Result<Vec<PathBuf>> {
        self.word_level.save(folder, prefix)
    }

    fn get_trainer(&self) -> WordLevelTrainer {
        self.word_level.get_trainer()
    }
}
