use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum MerkleError {
    #[error("Merkle error: {0}")]
    GenericErr(String),
    #[error("Leaf index {index} does not fit in a tree of height {height}")]
    IndexOutOfRange { index: u64, height: usize },
}

impl MerkleError {
    pub fn generic_err(msg: impl Into<String>) -> Self {
        MerkleError::GenericErr(msg.into())
    }
}
