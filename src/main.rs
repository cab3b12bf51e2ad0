use std::process::ExitCode;

use anyhow::{Context, Result};
use frontend_fixer::{Config, Patcher};

fn main() -> Result<ExitCode> {
    let config = Config::from_cli()?;
    let repo_path = config.repo_path.clone();
    let outcome = Patcher::new(config)
        .run()
        .with_context(|| format!("patching {} failed", repo_path.display()))?;

    Ok(if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
