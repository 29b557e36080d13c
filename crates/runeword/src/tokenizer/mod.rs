//! # Batch Tokenizer

mod batch_tokenizer;
mod tokenizer_options;

#[doc(inline)]
pub use batch_tokenizer::*;
#[doc(inline)]
pub use tokenizer_options::*;
