use std::io;
use thiserror::Error;

/// Failure of an external i3-resurrect invocation.
/// `Display` is the text shown to the user in the menu window.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The tool ran and exited non-zero; carries its stderr verbatim.
    #[error("{stderr}")]
    Failed { stderr: String },

    #[error("could not run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}
