use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Command not found: {0}")]
    CommandNotFound(String),
    #[error("Missing argument: {0}")]
    MissingArgument(String),
    #[error("Unknown option: {0}")]
    UnknownOption(String),
    #[error("Invalid URL '{0}': {1}")]
    InvalidUrl(String, #[source] url::ParseError),
}

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Error fetching {url}: {source}")]
    FetchFailed {
        url: String,
        #[source]
        source: anyhow::Error,
    },
    #[error(
        "Error: no usable browser found after installation!\n\n\
        Possible solutions:\n\
        1. Install Google Chrome or Chromium manually\n\
        2. Make sure the browser binary is on your PATH"
    )]
    BrowserNotFound,
    #[error(
        "Error: Setup failed!\n\n\
        '{program}' exited with an error.\n\n\
        Error details:\n{stderr}\n\
        Possible solutions:\n\
        1. Check your network connection and try again\n\
        2. Install Google Chrome or Chromium manually, then re-run 'fetchmd setup'\n\
        3. Check that you have permission to install software on this system"
    )]
    SubprocessFailed { program: String, stderr: String },
    #[error(
        "Error: '{program}' command not found!\n\n\
        Possible solutions:\n\
        1. Install Playwright ('npm install -g playwright')\n\
        2. Make sure '{program}' is available on your PATH"
    )]
    SubprocessNotFound { program: String },
    #[error("Failed to run '{program}': {source}")]
    SubprocessIo {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Command(#[from] CommandError),
}
