use std::env;
use std::ffi::OsStr;
use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{Args, Parser};

const DEFAULT_IMAGE: &str = "leninfitfreak/frontend";
const DEFAULT_BRANCH: &str = "dev";
const DEFAULT_VALUES_FILE: &str = "values-dev.yaml";
const DEFAULT_COMMIT_MESSAGE: &str = "fix: add K8s error handling";

#[derive(Debug, Parser)]
#[command(
    name = "frontend-fixer",
    version,
    about = "Back up and replace the entry point and manifest of the LeninKart frontend."
)]
pub struct Cli {
    /// Root of the frontend repository to patch.
    #[arg(default_value = ".")]
    pub repo_path: PathBuf,

    #[command(flatten)]
    pub next_steps: NextStepsArgs,

    /// Disable colored output. A non-empty NO_COLOR does the same.
    #[arg(long)]
    pub no_color: bool,
}

/// Values substituted into the printed follow-up commands. Nothing here is executed.
#[derive(Debug, Args)]
pub struct NextStepsArgs {
    /// Docker image repository used in the suggested build and push commands.
    #[arg(long, env = "FRONTEND_FIXER_IMAGE", default_value = DEFAULT_IMAGE)]
    pub image: String,

    /// Branch used in the suggested git push command.
    #[arg(long, env = "FRONTEND_FIXER_BRANCH", default_value = DEFAULT_BRANCH)]
    pub branch: String,

    /// Values file in the infra repository that carries the image tag.
    #[arg(long, env = "FRONTEND_FIXER_VALUES_FILE", default_value = DEFAULT_VALUES_FILE)]
    pub values_file: String,

    /// Message used in the suggested git commit command.
    #[arg(
        long,
        env = "FRONTEND_FIXER_COMMIT_MESSAGE",
        default_value = DEFAULT_COMMIT_MESSAGE
    )]
    pub commit_message: String,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub repo_path: PathBuf,
    pub image: String,
    pub branch: String,
    pub values_file: String,
    pub commit_message: String,
    pub color: bool,
}

impl Config {
    pub fn from_cli() -> Result<Self> {
        let cli = match Cli::try_parse() {
            Ok(cli) => cli,
            // --help and --version are not failures.
            Err(err) if !err.use_stderr() => err.exit(),
            Err(err) => return Err(anyhow!("{}", err.render().to_string().trim_end())),
        };
        let color = !cli.no_color
            && !no_color_requested(env::var_os("NO_COLOR").as_deref())
            && std::io::stdout().is_terminal();
        Config::from_parts(cli.repo_path, cli.next_steps, color)
    }

    pub fn from_parts(repo_path: PathBuf, next_steps: NextStepsArgs, color: bool) -> Result<Self> {
        if repo_path.as_os_str().is_empty() {
            return Err(anyhow!("repository path must not be empty"));
        }

        let image = require_non_empty("image", next_steps.image)?;
        if image.chars().any(char::is_whitespace) {
            return Err(anyhow!("image must not contain whitespace: {image:?}"));
        }

        Ok(Self {
            repo_path,
            image,
            branch: require_non_empty("branch", next_steps.branch)?,
            values_file: require_non_empty("values file", next_steps.values_file)?,
            commit_message: require_non_empty("commit message", next_steps.commit_message)?,
            color,
        })
    }

    /// Defaults for patching `repo_path`, with colors off.
    pub fn for_repo(repo_path: impl Into<PathBuf>) -> Self {
        Self {
            repo_path: repo_path.into(),
            image: DEFAULT_IMAGE.to_string(),
            branch: DEFAULT_BRANCH.to_string(),
            values_file: DEFAULT_VALUES_FILE.to_string(),
            commit_message: DEFAULT_COMMIT_MESSAGE.to_string(),
            color: false,
        }
    }
}

/// Follows https://no-color.org: any non-empty value disables color.
fn no_color_requested(value: Option<&OsStr>) -> bool {
    value.is_some_and(|value| !value.is_empty())
}

fn require_non_empty(name: &str, value: String) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(anyhow!("{name} must not be empty"))
    } else {
        Ok(trimmed.to_string())
    }
}
