//! Resolved run configuration.

use std::path::PathBuf;

use serde::Serialize;

use crate::defaults;
use crate::error::{Error, Result};
use crate::utils::command::CommandLine;
use crate::utils::shell;

/// Options as they arrive from the command line, before resolution.
#[derive(Debug, Clone)]
pub struct ConfigInput {
    pub public_key: String,
    pub private_key: String,
    pub cleos: String,
    pub nodeos: String,
    pub keosd: String,
    pub log_path: PathBuf,
    pub contract: String,
    pub contract2: String,
    pub contract_dir: String,
}

impl Default for ConfigInput {
    fn default() -> Self {
        Self {
            public_key: defaults::PUBLIC_KEY.to_string(),
            private_key: defaults::PRIVATE_KEY.to_string(),
            cleos: defaults::CLEOS.to_string(),
            nodeos: defaults::NODEOS.to_string(),
            keosd: defaults::KEOSD.to_string(),
            log_path: PathBuf::from(defaults::LOG_PATH),
            contract: defaults::CONTRACT.to_string(),
            contract2: defaults::CONTRACT2.to_string(),
            contract_dir: defaults::CONTRACT_DIR.to_string(),
        }
    }
}

/// Immutable configuration shared by every step.
#[derive(Debug, Clone, Serialize)]
pub struct Config {
    pub public_key: String,
    #[serde(skip_serializing)]
    pub private_key: String,
    /// Client program and its leading arguments (wallet and node URLs).
    pub cleos: CommandLine,
    pub nodeos: String,
    pub keosd: String,
    pub log_path: PathBuf,
    pub contract: String,
    pub contract2: String,
    pub contract_dir: String,
}

impl Config {
    /// Resolve raw options. Only the client prefix is checked: it has to
    /// name a program. Keys and paths are passed through untouched.
    pub fn resolve(input: ConfigInput) -> Result<Self> {
        let (program, args) = shell::split_command(&input.cleos).ok_or_else(|| {
            Error::config_invalid_value(
                "cleos",
                Some(input.cleos.clone()),
                "Client command is empty",
            )
            .with_hint("Pass --cleos with the path to the client binary")
        })?;

        Ok(Self {
            public_key: input.public_key,
            private_key: input.private_key,
            cleos: CommandLine::new(program).args(args),
            nodeos: input.nodeos.trim().to_string(),
            keosd: input.keosd.trim().to_string(),
            log_path: input.log_path,
            contract: input.contract,
            contract2: input.contract2,
            contract_dir: input.contract_dir,
        })
    }
}
