use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Arg, ArgAction, ArgMatches, Command, CommandFactory, FromArgMatches, Parser};

use testtool::executor::PREFIX;
use testtool::{defaults, dispatch, Config, ConfigInput, RunLog, RunReport, Selection, Step, STEPS};

mod output;

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "testtool")]
#[command(version = VERSION)]
#[command(about = "Deploy and exercise the random demo contract on a local node")]
struct Cli {
    /// EOSIO public key
    #[arg(long = "public-key", value_name = "KEY", default_value = defaults::PUBLIC_KEY)]
    public_key: String,

    /// EOSIO private key
    #[arg(long = "private-Key", value_name = "KEY", default_value = defaults::PRIVATE_KEY)]
    private_key: String,

    /// Client command, including its wallet and node URL flags
    #[arg(long, value_name = "CMD", default_value = defaults::CLEOS)]
    cleos: String,

    /// Path to nodeos binary
    #[arg(long, value_name = "PATH", default_value = defaults::NODEOS)]
    nodeos: String,

    /// Path to keosd binary
    #[arg(long, value_name = "PATH", default_value = defaults::KEOSD)]
    keosd: String,

    /// Path to log file
    #[arg(long = "log-path", value_name = "PATH", default_value = defaults::LOG_PATH)]
    log_path: PathBuf,

    /// Account the contract is deployed to first
    #[arg(long, value_name = "ACCOUNT", default_value = defaults::CONTRACT)]
    contract: String,

    /// Second contract account
    #[arg(long, value_name = "ACCOUNT", default_value = defaults::CONTRACT2)]
    contract2: String,

    /// Directory holding the contract's wasm and abi
    #[arg(long = "contract-dir", value_name = "DIR", default_value = defaults::CONTRACT_DIR)]
    contract_dir: String,

    /// Do everything marked with (*)
    #[arg(short = 'a', long = "all")]
    all: bool,

    /// Print the run report as JSON
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn into_input(self) -> ConfigInput {
        ConfigInput {
            public_key: self.public_key,
            private_key: self.private_key,
            cleos: self.cleos,
            nodeos: self.nodeos,
            keosd: self.keosd,
            log_path: self.log_path,
            contract: self.contract,
            contract2: self.contract2,
            contract_dir: self.contract_dir,
        }
    }
}

/// Derived options plus one `-<short>/--<name>` flag per step. A repeated
/// flag is accepted and the last value wins.
fn build_augmented_command(steps: &[Step]) -> Command {
    let mut cmd = Cli::command().args_override_self(true);

    for step in steps {
        cmd = cmd.arg(
            Arg::new(step.name)
                .short(step.short)
                .long(step.name)
                .action(ArgAction::SetTrue)
                .help(step.help()),
        );
    }

    cmd
}

fn selection_from(matches: &ArgMatches, steps: &[Step], all: bool) -> Selection {
    Selection {
        all,
        named: steps
            .iter()
            .filter(|s| matches.get_flag(s.name))
            .map(|s| s.name.to_string())
            .collect(),
    }
}

fn run(input: ConfigInput, selection: &Selection) -> testtool::Result<RunReport> {
    let config = Config::resolve(input)?;
    let mut log = RunLog::open(&config.log_path)?;
    testtool::log_status!("run", "Logging commands to {}", log.path().display());
    dispatch(STEPS, selection, &config, &mut log)
}

fn report_error(err: &testtool::Error, json: bool) {
    report_error_with(err, json, output::print_error);
}

/// Falls back to plain stderr text when the JSON envelope cannot be written.
/// Returns whether the plain rendering was used.
fn report_error_with<F>(err: &testtool::Error, json: bool, print_json: F) -> bool
where
    F: FnOnce(&testtool::Error) -> testtool::Result<()>,
{
    if json && print_json(err).is_ok() {
        return false;
    }

    eprintln!("{} {}: {}", PREFIX, err.message, err.details);
    for hint in &err.hints {
        eprintln!("{} hint: {}", PREFIX, hint.message);
    }
    true
}

fn main() -> ExitCode {
    let matches = build_augmented_command(STEPS).get_matches();

    let cli = match Cli::from_arg_matches(&matches) {
        Ok(cli) => cli,
        Err(e) => {
            e.exit();
        }
    };

    let json = cli.json;
    let selection = selection_from(&matches, STEPS, cli.all);

    match run(cli.into_input(), &selection) {
        Ok(report) => {
            if json {
                if let Err(err) = output::print_success(&report) {
                    report_error(&err, false);
                }
            } else {
                testtool::log_status!("run", "{}", report.summary());
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            report_error(&err, json);
            ExitCode::from(exit_code_to_u8(output::exit_code_for_error(err.code)))
        }
    }
}

fn exit_code_to_u8(code: i32) -> u8 {
    if code <= 0 {
        0
    } else if code >= 255 {
        255
    } else {
        code as u8
    }
}
