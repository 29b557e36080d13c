use tokenizers::{
    EncodeInput,
    Encoding,
    InputSequence,
    TokenizerImpl,
    decoders::DecoderWrapper,
    normalizers::NormalizerWrapper,
    pad_encodings,
    pre_tokenizers::PreTokenizerWrapper,
    processors::PostProcessorWrapper,
};

use crate::{
    engine::TokenizerEngine,
    errors::{RWResult, RunewordError},
    models::VocabModel,
};

/// The engine built by [`TokenizerOptions`](super::TokenizerOptions).
pub type VocabTokenizer<V> = TokenizerImpl<
    VocabModel<V>,
    NormalizerWrapper,
    PreTokenizerWrapper,
    PostProcessorWrapper,
    DecoderWrapper,
>;

/// Serial batch encoding over a [`TokenizerEngine`].
///
/// Each input is encoded by the engine, in order, on the calling thread.
/// If the engine has a padding configuration, it is applied once across
/// the whole batch after every input has encoded.
#[derive(Debug, Clone)]
pub struct BatchTokenizer<E: TokenizerEngine> {
    engine: E,
}

impl<E: TokenizerEngine> BatchTokenizer<E> {
    /// Wrap an engine.
    pub fn new(engine: E) -> Self {
        Self { engine }
    }

    /// Get the underlying engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Unwrap the underlying engine.
    pub fn into_engine(self) -> E {
        self.engine
    }

    /// Encode a batch of texts, one single-sequence input per text.
    ///
    /// ## Arguments
    /// * `texts` - the texts to encode.
    /// * `add_special_tokens` - whether the engine inserts special tokens.
    ///
    /// ## Returns
    /// One [`Encoding`] per text, in input order; or the first error.
    pub fn try_encode_batch_texts<S: AsRef<str>>(
        &self,
        texts: &[S],
        add_special_tokens: bool,
    ) -> RWResult<Vec<Encoding>> {
        self.try_encode_batch_serially(
            texts
                .iter()
                .map(|text| EncodeInput::Single(InputSequence::from(text.as_ref()))),
            add_special_tokens,
        )
    }

    /// Encode a batch of inputs serially.
    ///
    /// ## Arguments
    /// * `inputs` - single or pair inputs.
    /// * `add_special_tokens` - whether the engine inserts special tokens.
    ///
    /// ## Returns
    /// One [`Encoding`] per input, in input order, padded per the engine's
    /// padding configuration; or the first error, with no partial results.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self, inputs)))]
    pub fn try_encode_batch_serially<'s, I>(
        &self,
        inputs: I,
        add_special_tokens: bool,
    ) -> RWResult<Vec<Encoding>>
    where
        I: IntoIterator<Item = EncodeInput<'s>>,
    {
        let mut encodings = inputs
            .into_iter()
            .map(|input| self.engine.encode_input(input, add_special_tokens))
            .collect::<tokenizers::Result<Vec<Encoding>>>()
            .map_err(RunewordError::EngineEncodeFailure)?;

        let padding = self.engine.padding();
        if let Some(params) = padding {
            pad_encodings(&mut encodings, params).map_err(RunewordError::EngineEncodeFailure)?;
        }

        log::trace!(
            "encoded batch of {}; padded: {}",
            encodings.len(),
            padding.is_some()
        );

        Ok(encodings)
    }
}
