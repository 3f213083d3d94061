use anyhow::Result;

use crate::cli::LinkAction;
use crate::commands::CommandError;

/// `link <action>` only points at the top-level command that does the work.
pub fn run(action: LinkAction) -> Result<()> {
    Err(CommandError::NotImplemented {
        action: action.as_str(),
    }
    .into())
}
