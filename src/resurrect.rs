use std::process::Command;

use crate::cli::Action;
use crate::defaults::Defaults;
use crate::error::ToolError;

/// External session save/restore tool.
pub trait SessionTool {
    fn run(&self, action: Action, profile: &str) -> Result<(), ToolError>;
}

/// `i3-resurrect <save|restore> -p <profile>` with output captured.
#[derive(Debug, Clone)]
pub struct Resurrect {
    program: String,
}

impl Default for Resurrect {
    fn default() -> Self {
        Self { program: Defaults::RESURRECT_BIN.to_string() }
    }
}

impl Resurrect {
    #[cfg(test)]
    pub fn with_program(program: &str) -> Self {
        Self { program: program.to_string() }
    }
}

impl SessionTool for Resurrect {
    fn run(&self, action: Action, profile: &str) -> Result<(), ToolError> {
        log::info!("{} {} -p {}", self.program, action.as_str(), profile);
        let out = Command::new(&self.program)
            .args([action.as_str(), "-p", profile])
            .output()
            .map_err(|source| ToolError::Spawn { program: self.program.clone(), source })?;

        if out.status.success() {
            return Ok(());
        }
        log::debug!("{} exited with {}", self.program, out.status);
        Err(ToolError::Failed { stderr: String::from_utf8_lossy(&out.stderr).into_owned() })
    }
}
