use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::Command;

use async_trait::async_trait;

use crate::browser::BrowserFinder;
use crate::command_handler::CommandHandler;
use crate::constants::{BROWSER_CANDIDATES, INIT_RUN_ARGS, INSTALLER_ARGS, INSTALLER_PROGRAM};
use crate::errors::{CommandError, ParseError};

pub trait ProcessRunner: Send + Sync {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandError>;
}

pub struct SystemRunner;
impl ProcessRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str]) -> Result<String, CommandError> {
        let output = Command::new(program).args(args).output().map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                CommandError::SubprocessNotFound {
                    program: program.to_string(),
                }
            } else {
                CommandError::SubprocessIo {
                    program: program.to_string(),
                    source: err,
                }
            }
        })?;

        if !output.status.success() {
            return Err(CommandError::SubprocessFailed {
                program: program.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

pub struct SetupHandler {
    runner: Box<dyn ProcessRunner>,
    candidates: Vec<String>,
}

impl Default for SetupHandler {
    fn default() -> Self {
        Self {
            runner: Box::new(SystemRunner),
            candidates: BROWSER_CANDIDATES.clone(),
        }
    }
}

impl SetupHandler {
    fn locate_browser(&self) -> Option<PathBuf> {
        BrowserFinder::locate_in(self.candidates.iter().map(String::as_str))
    }
}

#[async_trait]
impl CommandHandler for SetupHandler {
    fn parse(&mut self, _args: &mut dyn Iterator<Item = String>) -> Result<(), ParseError> {
        Ok(())
    }

    async fn execute(&self) -> Result<(), CommandError> {
        let browser = match self.locate_browser() {
            Some(path) => path,
            None => {
                println!("Browser not found. Installing Chrome via Playwright...");
                self.runner.run(INSTALLER_PROGRAM, INSTALLER_ARGS)?;
                println!("Chrome installation completed!");

                self.locate_browser().ok_or(CommandError::BrowserNotFound)?
            }
        };

        println!("Verifying headless launch of '{}'...", browser.display());
        self.runner.run(&browser.to_string_lossy(), INIT_RUN_ARGS)?;
        println!("Setup completed successfully!");

        Ok(())
    }
}
