use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreferenceError {
    #[error("could not access preferences at \"{}\"", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("preferences at \"{}\" are not a valid JSON object", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no configuration directory is available on this platform")]
    NoConfigDir,
}
