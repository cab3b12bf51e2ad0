use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local, Utc};

use crate::backup::BackupDir;
use crate::config::Config;
use crate::console::Console;
use crate::error::FixError;
use crate::fixes::{self, Fix};
use crate::report;

/// Directory that must exist directly under the root for it to count as the frontend repo.
pub const SOURCE_DIR: &str = "src";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixOutcome {
    Applied,
    Skipped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    InvalidRepository,
}

impl RunOutcome {
    pub fn is_success(self) -> bool {
        self == RunOutcome::Completed
    }
}

#[derive(Debug)]
pub struct Patcher {
    config: Config,
    console: Console,
    backup: BackupDir,
    record: Vec<String>,
}

impl Patcher {
    pub fn new(config: Config) -> Self {
        Self::with_start_time(config, Local::now())
    }

    pub fn with_start_time(config: Config, started_at: DateTime<Local>) -> Self {
        let backup = BackupDir::for_run(&config.repo_path, started_at);
        let console = Console::new(config.color);
        Self {
            config,
            console,
            backup,
            record: Vec::new(),
        }
    }

    pub fn repo_root(&self) -> &Path {
        &self.config.repo_path
    }

    pub fn backup_dir(&self) -> &BackupDir {
        &self.backup
    }

    /// Descriptions of the fixes applied so far, in order.
    pub fn fix_record(&self) -> &[String] {
        &self.record
    }

    pub fn validate_repository(&self) -> Result<(), FixError> {
        if self.repo_root().join(SOURCE_DIR).is_dir() {
            Ok(())
        } else {
            Err(FixError::NotARepository(self.repo_root().to_path_buf()))
        }
    }

    pub fn backup_file(&self, file: &Path) -> Result<PathBuf, FixError> {
        self.backup.backup_file(file)
    }

    /// Backs up the fix's target and overwrites it with the replacement content.
    ///
    /// A missing target is logged and reported as [`FixOutcome::Skipped`]; only I/O failures
    /// surface as errors.
    pub fn apply_fix(&mut self, fix: &Fix) -> Result<FixOutcome, FixError> {
        let target = self.repo_root().join(fix.relative_path);
        if !target.is_file() {
            self.console.error(&format!("{} not found!", fix.relative_path));
            return Ok(FixOutcome::Skipped);
        }

        self.backup_file(&target)?;
        fs::write(&target, fix.content.as_bytes()).map_err(FixError::io("write", &target))?;

        self.record.push(fix.description.to_string());
        self.console.success(&format!("Fixed {}", fix.relative_path));
        Ok(FixOutcome::Applied)
    }

    pub fn run(&mut self) -> Result<RunOutcome, FixError> {
        let rule = report::rule();
        self.console.info(&rule);
        self.console.info(report::TITLE);
        self.console.info(&rule);

        if self.validate_repository().is_err() {
            self.console.error("ERROR: Not in leninkart-frontend repo!");
            self.console.error("Run this from the frontend repository root");
            return Ok(RunOutcome::InvalidRepository);
        }

        self.console.info("Starting fixes...");
        for fix in fixes::ALL {
            self.apply_fix(&fix)?;
        }

        self.print_summary();
        Ok(RunOutcome::Completed)
    }

    fn print_summary(&self) {
        let rule = report::rule();
        self.console.info("");
        self.console.success(&rule);
        self.console.success(&format!("Applied {} fixes:", self.record.len()));
        for entry in &self.record {
            self.console.success(&format!("  {entry}"));
        }

        self.console.info("");
        self.console.info(&format!("Backup: {}", self.backup.name()));
        self.console.info("");
        for line in report::next_steps(&self.config, Utc::now().timestamp()) {
            self.console.info(&line);
        }
        self.console.info(&rule);
    }
}
