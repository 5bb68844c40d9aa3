mod vars;

pub use vars::EnvTable;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvError {
    #[error("Invalid variable name: {0:?}")]
    InvalidName(String),
}
