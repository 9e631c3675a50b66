//! Logging
//!
//! Diagnostics go through `tracing` to stderr. The filter is taken from the
//! `YSHELL_LOG` environment variable when set, otherwise it is built from
//! single-letter debug flags:
//!
//! | flag | enables |
//! |------|---------|
//! | `c`  | command dispatch and handlers |
//! | `i`  | inode allocation and release |
//! | `p`  | path resolution steps |
//! | `y`  | session events |
//! | `@`  | everything |

use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

pub const LOG_ENV: &str = "YSHELL_LOG";

const BASE_LEVEL: &str = "warn";

#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("unknown debug flag '{0}'")]
    UnknownFlag(char),

    #[error("invalid log directive: {0}")]
    Directive(String),

    #[error("failed to install subscriber: {0}")]
    Init(String),
}

/// Filter directives for a string of debug flags.
pub fn directives_for_flags(flags: &str) -> Result<Vec<&'static str>, LoggingError> {
    let mut directives = Vec::new();
    for flag in flags.chars() {
        let directive = match flag {
            'c' => "yshell::commands=debug",
            'i' => "yshell::fs=debug",
            'p' => "yshell::fs::path=trace",
            'y' => "yshell::shell=debug",
            '@' => "yshell=trace",
            other => return Err(LoggingError::UnknownFlag(other)),
        };
        if !directives.contains(&directive) {
            directives.push(directive);
        }
    }
    Ok(directives)
}

pub fn build_env_filter(flags: &str) -> Result<EnvFilter, LoggingError> {
    if let Ok(filter) = EnvFilter::try_from_env(LOG_ENV) {
        return Ok(filter);
    }
    let mut filter = EnvFilter::new(BASE_LEVEL);
    for directive in directives_for_flags(flags)? {
        filter = filter.add_directive(
            directive
                .parse()
                .map_err(|e| LoggingError::Directive(format!("{}: {}", directive, e)))?,
        );
    }
    Ok(filter)
}

/// Installs the global subscriber. Call once, before the session starts.
pub fn init_logging(flags: &str) -> Result<(), LoggingError> {
    let filter = build_env_filter(flags)?;
    Registry::default()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init()
        .map_err(|e| LoggingError::Init(e.to_string()))
}
