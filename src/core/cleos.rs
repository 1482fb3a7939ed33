//! Command lines for the chain client.
//!
//! Each builder starts from the configured client prefix (program plus
//! wallet/node URL flags) and appends one sub-command.

use serde::Serialize;

use crate::config::Config;
use crate::utils::command::CommandLine;

/// Permission the chain grants to a contract's own code for inline actions.
pub const CODE_PERMISSION: &str = "eosio.code";

#[derive(Debug, Serialize)]
pub struct KeyWeight<'a> {
    pub key: &'a str,
    pub weight: u16,
}

#[derive(Debug, Serialize)]
pub struct PermissionLevel<'a> {
    pub actor: &'a str,
    pub permission: &'a str,
}

#[derive(Debug, Serialize)]
pub struct PermissionLevelWeight<'a> {
    pub permission: PermissionLevel<'a>,
    pub weight: u16,
}

#[derive(Debug, Serialize)]
pub struct Authority<'a> {
    pub threshold: u32,
    pub keys: Vec<KeyWeight<'a>>,
    pub accounts: Vec<PermissionLevelWeight<'a>>,
}

impl<'a> Authority<'a> {
    /// Single-key authority that also lets `account`'s own code sign.
    pub fn with_code_permission(key: &'a str, account: &'a str) -> Self {
        Self {
            threshold: 1,
            keys: vec![KeyWeight { key, weight: 1 }],
            accounts: vec![PermissionLevelWeight {
                permission: PermissionLevel {
                    actor: account,
                    permission: CODE_PERMISSION,
                },
                weight: 1,
            }],
        }
    }
}

/// Data for the demo contract's `inlineact` action, fields in ABI order.
#[derive(Debug, Serialize)]
pub struct InlineAct<'a> {
    pub payer: &'a str,
    #[serde(rename = "in")]
    pub target: &'a str,
}

fn client(config: &Config) -> CommandLine {
    config.cleos.clone()
}

/// `set contract <account> <dir>`
pub fn set_contract(config: &Config, account: &str, dir: &str) -> CommandLine {
    client(config).args(["set", "contract", account, dir])
}

/// `set account permission <account> <permission> <authority>`
pub fn set_account_permission(
    config: &Config,
    account: &str,
    permission: &str,
    authority: &Authority<'_>,
) -> CommandLine {
    client(config)
        .args(["set", "account", "permission", account, permission])
        .arg(compact_json(authority))
}

/// `push action <contract> <action> <data> -p <authorizer> [-f]`
pub fn push_action<T: Serialize + ?Sized>(
    config: &Config,
    contract: &str,
    action: &str,
    data: &T,
    authorizer: &str,
    force_unique: bool,
) -> CommandLine {
    let line = client(config)
        .args(["push", "action", contract, action])
        .arg(compact_json(data))
        .args(["-p", authorizer]);

    if force_unique {
        line.arg("-f")
    } else {
        line
    }
}

/// `get table <contract> <scope> <table>`
pub fn get_table(config: &Config, contract: &str, scope: &str, table: &str) -> CommandLine {
    client(config).args(["get", "table", contract, scope, table])
}

fn compact_json<T: Serialize + ?Sized>(value: &T) -> String {
    // Plain structs and json! values cannot fail to serialize.
    serde_json::to_string(value).unwrap_or_default()
}
