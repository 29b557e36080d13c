//! # Model Selection

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
    models::{RuneLevel, build_word_level},
    vocab::ModelVocab,
};

/// Which vocabulary model to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelKind {
    /// One id per pre-tokenized word.
    #[default]
    WordLevel,

    /// One id per rune of each pre-tokenized word.
    RuneLevel,
}

impl ModelKind {
    /// Build the selected model over a vocabulary.
    pub fn build<V: ModelVocab>(
        self,
        vocab: Arc<V>,
    ) -> RWResult<VocabModel<V>> {
        Ok(match self {
            ModelKind::WordLevel => VocabModel::WordLevel(build_word_level(vocab.as_ref())?),
            ModelKind::RuneLevel => VocabModel::RuneLevel(RuneLevel::new(vocab)?),
        })
    }
}

/// Either vocabulary model, as a single engine model type.
#[derive(Debug)]
pub enum VocabModel<V: ModelVocab> {
    /// See [`build_word_level`].
    WordLevel(WordLevel),

    /// See [`RuneLevel`].
    RuneLevel(RuneLevel<V>),
}

impl<V: ModelVocab> Clone for VocabModel<V> {
    fn clone(&self) -> Self {
        match self {
            VocabModel::WordLevel(model) => VocabModel::WordLevel(model.clone()),
            VocabModel::RuneLevel(model) => VocabModel::RuneLevel(model.clone()),
        }
    }
}

impl<V: ModelVocab> From<WordLevel> for VocabModel<V> {
    fn from(model: WordLevel) -> Self {
        VocabModel::WordLevel(model)
    }
}

impl<V: ModelVocab> From<RuneLevel<V>> for VocabModel<V> {
    fn from(model: RuneLevel<V>) -> Self {
        VocabModel::RuneLevel(model)
    }
}

impl<V: ModelVocab> VocabModel<V> {
    /// The kind of this model.
    pub fn kind(&self) -> ModelKind {
        match self {
            VocabModel::WordLevel(_) => ModelKind::WordLevel,
            VocabModel::RuneLevel(_) => ModelKind::RuneLevel,
        }
    }
}

impl<V: ModelVocab> Model for VocabModel<V> {
    type Trainer = WordLevelTrainer;

    fn tokenize(
        &self,
        sequence: &str,
    ) -> tokenizers::Result<Vec<Token>> {
        match self {
            VocabModel::WordLevel(model) => model.tokenize(sequence),
            VocabModel::RuneLevel(model) => model.tokenize(sequence),
        }
    }

    fn token_to_id(
        &self,
        token: &str,
    ) -> Option<u32> {
        match self {
            VocabModel::WordLevel(model) => model.token_to_id(token),
            VocabModel::RuneLevel(model) => model.token_to_id(token),
        }
    }

    fn id_to_token(
        &self,
        id: u32,
    ) -> Option<String> {
        match self {
            VocabModel::WordLevel(model) => model.id_to_token(id),
            VocabModel::RuneLevel(model) => model.id_to_token(id),
        }
    }

    fn get_vocab(&self) -> HashMap<String, u32> {
        match self {
            VocabModel::WordLevel(model) => model.get_vocab(),
            VocabModel::RuneLevel(model) => model.get_vocab(),
        }
    }

    fn get_vocab_size(&self) -> usize {
        match self {
            VocabModel::WordLevel(model) => model.get_vocab_size(),
            VocabModel::RuneLevel(model) => model.get_vocab_size(),
        }
    }

    fn save(
        &self,
        folder: &Path,
        prefix: Option<&str>,
    ) -> tokenizers::Result<Vec<PathBuf>> {
        match self {
            VocabModel::WordLevel(model) => model.save(folder, prefix),
            VocabModel::RuneLevel(model) => model.save(folder, prefix),
        }
    }

    fn get_trainer(&self) -> WordLevelTrainer {
        match self {
            VocabModel::WordLevel(model) => model.get_trainer(),
            VocabModel::RuneLevel(model) => model.get_trainer(),
        }
    }
}
