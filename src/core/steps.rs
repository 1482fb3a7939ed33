//! The step table.
//!
//! Table order is execution order. Command-line flags are generated from the
//! table, so a new step only needs an entry here.

use serde_json::json;

use crate::cleos::{self, Authority, InlineAct};
use crate::config::Config;
use crate::defaults::SEED_TABLE;
use crate::error::Result;
use crate::executor::Executor;

pub type StepAction = fn(&Config, &mut Executor<'_>) -> Result<()>;

pub struct Step {
    pub short: char,
    pub name: &'static str,
    pub action: StepAction,
    /// Runs under `--all`.
    pub in_all: bool,
    pub description: &'static str,
}

impl Step {
    /// Help text, marked `(*)` when the step is part of `--all`.
    pub fn help(&self) -> String {
        if self.in_all {
            format!("(*) {}", self.description)
        } else {
            self.description.to_string()
        }
    }
}

impl std::fmt::Debug for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Step")
            .field("short", &self.short)
            .field("name", &self.name)
            .field("in_all", &self.in_all)
            .finish()
    }
}

pub const STEPS: &[Step] = &[
    Step {
        short: 'i',
        name: "init",
        action: init,
        in_all: true,
        description: "Deploy the contract to both accounts and grant eosio.code",
    },
    Step {
        short: 'c',
        name: "clear",
        action: clear,
        in_all: true,
        description: "Clear seed objects on both accounts and show the tables",
    },
    Step {
        short: 'g',
        name: "generate",
        action: generate,
        in_all: true,
        description: "Push an inline action from the first account to the second",
    },
];

fn banner(title: &str) {
    println!("===========================    {}   ===========================", title);
}

fn init(config: &Config, exec: &mut Executor<'_>) -> Result<()> {
    banner("set contract");
    exec.run(&cleos::set_contract(config, &config.contract, &config.contract_dir))?;
    exec.run(&cleos::set_contract(config, &config.contract2, &config.contract_dir))?;

    let authority = Authority::with_code_permission(&config.public_key, &config.contract);
    exec.run(&cleos::set_account_permission(
        config,
        &config.contract,
        "active",
        &authority,
    ))?;
    Ok(())
}

fn clear(config: &Config, exec: &mut Executor<'_>) -> Result<()> {
    banner("clear seed objects");
    for account in [&config.contract, &config.contract2] {
        exec.run(&cleos::push_action(config, account, "clear", &json!([]), account, false))?;
        exec.run(&cleos::get_table(config, account, account, SEED_TABLE))?;
    }
    Ok(())
}

fn generate(config: &Config, exec: &mut Executor<'_>) -> Result<()> {
    banner("generate");
    let data = [InlineAct {
        payer: &config.contract,
        target: &config.contract2,
    }];
    exec.run(&cleos::push_action(
        config,
        &config.contract,
        "inlineact",
        &data,
        &config.contract,
        true,
    ))?;
    exec.run(&cleos::get_table(config, &config.contract, &config.contract, SEED_TABLE))?;
    exec.run(&cleos::get_table(config, &config.contract2, &config.contract2, SEED_TABLE))?;
    Ok(())
}
