use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("block {block}: {token:?} is not a base-10 integer")]
    Parse {
        block: usize,
        token: String,
        #[source]
        source: nom::error::Error<String>,
    },

    #[error("block {block}: sum does not fit in an i64")]
    BlockOverflow { block: usize },

    #[error("total of the {n} largest block sums does not fit in an i64")]
    TotalOverflow { n: usize },
}
