//! Provides the error type used throughout this crate.

use thiserror::Error;

/// The error type used throughout this crate. Only tree construction and lookups
/// can fail; a drained iterator simply keeps returning `None`.
#[derive(Error, Debug)]
pub enum ArborError<Id> {
    #[error("node reference {0} is out of bounds")]
    ReferenceOutOfBound(usize),
    #[error("node not in tree: {0:?}")]
    UnknownNode(Id),
    #[error("no root node set")]
    RootNotSet,
    #[error("id not unique: {0:?}")]
    NotUnique(Id),
}
