//! # Tokenizer Engine Seam
//!
//! Normalization, pre-tokenization, model encoding, and padding belong
//! to the engine. [`TokenizerEngine`] is the slice of it which
//! [`BatchTokenizer`](crate::tokenizer::BatchTokenizer) drives.

use tokenizers::{
    Decoder,
    EncodeInput,
    Encoding,
    Model,
    Normalizer,
    PaddingParams,
    PostProcessor,
    PreTokenizer,
    Tokenizer,
    TokenizerImpl,
};

/// A tokenizer engine which encodes one input at a time.
pub trait TokenizerEngine {
    /// Encode a single input.
    ///
    /// ## Arguments
    /// * `input` - a single sequence, or a pair.
    /// * `add_special_tokens` - whether the engine inserts special tokens.
    fn encode_input(
        &self,
        input: EncodeInput<'_>,
        add_special_tokens: bool,
    ) -> tokenizers::Result<Encoding>;

    /// The batch padding configuration, if any.
    fn padding(&self) -> Option<&PaddingParams>;
}

impl<M, N, PT, PP, D> TokenizerEngine for TokenizerImpl<M, N, PT, PP, D>
where
    M: Model,
    N: Normalizer,
    PT: PreTokenizer,
    PP: PostProcessor,
    D: Decoder,
{
    fn encode_input(
        &self,
        input: EncodeInput<'_>,
        add_special_tokens: bool,
    ) -> tokenizers::Result<Encoding> {
        self.encode(input, add_special_tokens)
    }

    fn padding(&self) -> Option<&PaddingParams> {
        self.get_padding()
    }
}

impl TokenizerEngine for Tokenizer {
    fn encode_input(
        &self,
        input: EncodeInput<'_>,
        add_special_tokens: bool,
    ) -> tokenizers::Result<Encoding> {
        self.encode(input, add_special_tokens)
    }

    fn padding(&self) -> Option<&PaddingParams> {
        self.get_padding()
    }
}

impl<E: TokenizerEngine + ?Sized> TokenizerEngine for &E {
    fn encode_input(
        &self,
        input: EncodeInput<'_>,
        add_special_tokens: bool,
    ) -> tokenizers::Result<Encoding> {
        (**self).encode_input(input, add_special_tokens)
    }

    fn padding(&self) -> Option<&PaddingParams> {
        (**self).padding()
    }
}
