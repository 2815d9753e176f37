use seqprime::sequences::SequenceError;
use thiserror::Error;

pub(crate) type SeqprimeResult<T> = Result<T, SeqprimeError>;

#[derive(Error, Debug)]
pub(crate) enum SeqprimeError {
    #[error("IO error, more details: {0}")]
    IOError(#[from] std::io::Error),
    #[error("Invalid sequence request, more details: {0}")]
    Sequence(#[from] SequenceError),
}
