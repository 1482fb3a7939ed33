//! Built-in option values for a local single-node test network.

pub const PUBLIC_KEY: &str = "EOS8Znrtgwt8TfpmbVpTKvA2oB8Nqey625CLN8bCN3TEbgx86Dsvr";
pub const PRIVATE_KEY: &str = "5K463ynhZoCDDa4RDcr63cUwWLTnKqmdcoTKTHBjqoKfv4u5V7p";

pub const CLEOS: &str = "../../build/programs/cleos/cleos --wallet-url http://127.0.0.1:6666 --url http://127.0.0.1:8000";
pub const NODEOS: &str = "../../build/programs/nodeos/nodeos";
pub const KEOSD: &str = "../../build/programs/keosd/keosd";

pub const LOG_PATH: &str = "/mnt/d/Go/output.random.log";

pub const CONTRACT: &str = "producer111e";
pub const CONTRACT2: &str = "producer111v";
pub const CONTRACT_DIR: &str = "../randomdemo";

/// Table the demo contract stores its seed objects in.
pub const SEED_TABLE: &str = "seedobjs";
