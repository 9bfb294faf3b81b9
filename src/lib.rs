pub mod config;
pub mod error;
pub mod lexicon;
pub mod normalize;
pub mod rules;
pub mod tagger;
pub mod token;

pub use config::TaggerConfig;
pub use error::{Error, Result};
pub use lexicon::Lexicon;
pub use tagger::Tagger;
pub use token::TaggedWord;
