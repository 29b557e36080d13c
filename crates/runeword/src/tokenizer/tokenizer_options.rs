use std::sync::Arc;

use tokenizers::{
    PaddingDirection,
    PaddingParams,
    PaddingStrategy,
    TokenizerImpl,
    normalizers::{NormalizerWrapper, bert::BertNormalizer},
    pre_tokenizers::{
        PreTokenizerWrapper,
        bert::BertPreTokenizer,
        whitespace::WhitespaceSplit,
    },
};

use crate::{
    errors::RWResult,
    models::ModelKind,
    tokenizer::{BatchTokenizer, VocabTokenizer},
    vocab::ModelVocab,
};

/// Options for the engine's BERT normalizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizerOptions {
    /// Remove control characters, and map all whitespace to spaces.
    pub clean_text: bool,

    /// Surround CJK characters with spaces, so each becomes its own word.
    pub handle_chinese_chars: bool,

    /// Strip accents; `None` follows `lowercase`.
    pub strip_accents: Option<bool>,

    /// Lowercase all text.
    pub lowercase: bool,
}

impl Default for NormalizerOptions {
    fn default() -> Self {
        Self {
            clean_text: true,
            handle_chinese_chars: true,
            strip_accents: None,
            lowercase: false,
        }
    }
}

impl NormalizerOptions {
    /// Sets the `clean_text` value.
    pub fn with_clean_text(
        mut self,
        clean_text: bool,
    ) -> Self {
        self.clean_text = clean_text;
        self
    }

    /// Sets the `handle_chinese_chars` value.
    pub fn with_handle_chinese_chars(
        mut self,
        handle_chinese_chars: bool,
    ) -> Self {
        self.handle_chinese_chars = handle_chinese_chars;
        self
    }

    /// Sets the `strip_accents` value.
    pub fn with_strip_accents(
        mut self,
        strip_accents: Option<bool>,
    ) -> Self {
        self.strip_accents = strip_accents;
        self
    }

    /// Sets the `lowercase` value.
    pub fn with_lowercase(
        mut self,
        lowercase: bool,
    ) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// Build the engine normalizer.
    pub fn to_normalizer(&self) -> NormalizerWrapper {
        BertNormalizer::new(
            self.clean_text,
            self.handle_chinese_chars,
            self.strip_accents,
            self.lowercase,
        )
        .into()
    }
}

/// Which engine pre-tokenizer splits text into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreTokenizerKind {
    /// Split on whitespace and punctuation.
    #[default]
    Bert,

    /// Split on whitespace only.
    WhitespaceSplit,
}

impl PreTokenizerKind {
    /// Build the engine pre-tokenizer.
    pub fn to_pre_tokenizer(self) -> PreTokenizerWrapper {
        match self {
            PreTokenizerKind::Bert => BertPreTokenizer.into(),
            PreTokenizerKind::WhitespaceSplit => WhitespaceSplit.into(),
        }
    }
}

/// The side padding is added on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PadDirection {
    /// Prepend padding.
    Left,

    /// Append padding.
    #[default]
    Right,
}

/// Batch padding options.
///
/// The default pads every encoding to the batch's longest,
/// on the right, with id `0` and the empty token.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaddingOptions {
    /// The side to pad on.
    pub direction: PadDirection,

    /// Pad to this length, rather than to the batch's longest.
    pub fixed_length: Option<usize>,

    /// Round the padded length up to a multiple of this.
    pub pad_to_multiple_of: Option<usize>,

    /// The filler id.
    pub pad_id: u32,

    /// The filler type id.
    pub pad_type_id: u32,

    /// The filler token.
    pub pad_token: String,
}

impl PaddingOptions {
    /// Sets the padding direction.
    pub fn with_direction(
        mut self,
        direction: PadDirection,
    ) -> Self {
        self.direction = direction;
        self
    }

    /// Sets a fixed padding length.
    pub fn with_fixed_length(
        mut self,
        fixed_length: Option<usize>,
    ) -> Self {
        self.fixed_length = fixed_length;
        self
    }

    /// Sets the padding multiple.
    pub fn with_pad_to_multiple_of(
        mut self,
        pad_to_multiple_of: Option<usize>,
    ) -> Self {
        self.pad_to_multiple_of = pad_to_multiple_of;
        self
    }

    /// Sets the filler id and token.
    pub fn with_pad(
        mut self,
        pad_id: u32,
        pad_token: &str,
    ) -> Self {
        self.pad_id = pad_id;
        self.pad_token = pad_token.to_string();
        self
    }

    /// Build the engine padding parameters.
    pub fn to_padding_params(&self) -> PaddingParams {
        PaddingParams {
            strategy: match self.fixed_length {
                Some(len) => PaddingStrategy::Fixed(len),
                None => PaddingStrategy::BatchLongest,
            },
            direction: match self.direction {
                PadDirection::Left => PaddingDirection::Left,
                PadDirection::Right => PaddingDirection::Right,
            },
            pad_to_multiple_of: self.pad_to_multiple_of,
            pad_id: self.pad_id,
            pad_type_id: self.pad_type_id,
            pad_token: self.pad_token.clone(),
        }
    }
}

/// Options for configuring a [`BatchTokenizer`] over a vocabulary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenizerOptions {
    /// The vocabulary model.
    pub model: ModelKind,

    /// The normalizer; `None` disables normalization.
    pub normalizer: Option<NormalizerOptions>,

    /// The pre-tokenizer; `None` treats each text as a single word.
    pub pre_tokenizer: Option<PreTokenizerKind>,

    /// Batch padding; `None` disables padding.
    pub padding: Option<PaddingOptions>,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        Self {
            model: ModelKind::default(),
            normalizer: Some(NormalizerOptions::default()),
            pre_tokenizer: Some(PreTokenizerKind::default()),
            padding: None,
        }
    }
}

impl TokenizerOptions {
    /// Sets the model kind.
    pub fn with_model(
        mut self,
        model: ModelKind,
    ) -> Self {
        self.model = model;
        self
    }

    /// Sets the normalizer options.
    pub fn with_normalizer(
        mut self,
        normalizer: Option<NormalizerOptions>,
    ) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Sets the pre-tokenizer.
    pub fn with_pre_tokenizer(
        mut self,
        pre_tokenizer: Option<PreTokenizerKind>,
    ) -> Self {
        self.pre_tokenizer = pre_tokenizer;
        self
    }

    /// Sets the padding options.
    pub fn with_padding(
        mut self,
        padding: Option<PaddingOptions>,
    ) -> Self {
        self.padding = padding;
        self
    }

    /// Build the engine for the given vocab.
    pub fn build_engine<V: ModelVocab>(
        &self,
        vocab: Arc<V>,
    ) -> RWResult<VocabTokenizer<V>> {
        let mut engine: VocabTokenizer<V> = TokenizerImpl::new(self.model.build(vocab)?);

        if let Some(normalizer) = &self.normalizer {
            engine.with_normalizer(Some(normalizer.to_normalizer()));
        }
        if let Some(pre_tokenizer) = self.pre_tokenizer {
            engine.with_pre_tokenizer(Some(pre_tokenizer.to_pre_tokenizer()));
        }
        engine.with_padding(self.padding.as_ref().map(PaddingOptions::to_padding_params));

        log::debug!("tokenizer: built {:?} engine", self.model);

        Ok(engine)
    }

    /// Build a [`BatchTokenizer`] for the given vocab.
    pub fn build<V: ModelVocab>(
        &self,
        vocab: Arc<V>,
    ) -> RWResult<BatchTokenizer<VocabTokenizer<V>>> {
        Ok(BatchTokenizer::new(self.build_engine(vocab)?))
    }
}
