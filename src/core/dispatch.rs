//! Step selection and execution.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::Config;
use crate::error::Result;
use crate::executor::{Executor, FailedCommand, PREFIX};
use crate::run_log::RunLog;
use crate::steps::Step;

pub const GUIDANCE: &str = "Tell me what to do. -a does almost everything. -h shows options.";

/// Which steps the command line asked for.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    pub all: bool,
    pub named: Vec<String>,
}

impl Selection {
    pub fn includes(&self, step: &Step) -> bool {
        self.named.iter().any(|n| n == step.name) || (step.in_all && self.all)
    }
}

/// Steps to run, in table order.
pub fn select<'s>(steps: &'s [Step], selection: &Selection) -> Vec<&'s Step> {
    steps.iter().filter(|s| selection.includes(s)).collect()
}

#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub log_path: String,
    pub steps: Vec<String>,
    pub commands: usize,
    pub failed: Vec<FailedCommand>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    pub fn summary(&self) -> String {
        if self.steps.is_empty() {
            return "nothing to do".to_string();
        }
        format!(
            "ran {} ({} commands, {} failed)",
            self.steps.join(", "),
            self.commands,
            self.failed.len()
        )
    }
}

/// Run every selected step in table order. With nothing selected, prints the
/// guidance message and returns an empty report without spawning anything.
pub fn dispatch(
    steps: &[Step],
    selection: &Selection,
    config: &Config,
    log: &mut RunLog,
) -> Result<RunReport> {
    let started_at = Utc::now();
    let log_path = log.path().display().to_string();
    let active = select(steps, selection);

    if active.is_empty() {
        println!("{} {}", PREFIX, GUIDANCE);
        return Ok(RunReport {
            log_path,
            steps: Vec::new(),
            commands: 0,
            failed: Vec::new(),
            started_at,
            finished_at: Utc::now(),
        });
    }

    let mut exec = Executor::new(log);
    let mut ran = Vec::with_capacity(active.len());
    for step in active {
        crate::log_status!("step", "{}", step.name);
        (step.action)(config, &mut exec)?;
        ran.push(step.name.to_string());
    }

    let commands = exec.commands_issued();
    Ok(RunReport {
        log_path,
        steps: ran,
        commands,
        failed: exec.into_failures(),
        started_at,
        finished_at: Utc::now(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigInput;
    use crate::utils::command::CommandLine;

    fn touch(name: &str, config: &Config, exec: &mut Executor<'_>) -> Result<()> {
        exec.run(&CommandLine::new(&config.contract).arg(name))
    }

    fn step_a(config: &Config, exec: &mut Executor<'_>) -> Result<()> {
        touch("a", config, exec)
    }

    fn step_b(config: &Config, exec: &mut Executor<'_>) -> Result<()> {
        touch("b", config, exec)
    }

    fn step_c(config: &Config, exec: &mut Executor<'_>) -> Result<()> {
        touch("c", config, exec)
    }

    const TABLE: &[Step] = &[
        Step {
            short: 'x',
            name: "a",
            action: step_a,
            in_all: true,
            description: "",
        },
        Step {
            short: 'y',
            name: "b",
            action: step_b,
            in_all: false,
            description: "",
        },
        Step {
            short: 'z',
            name: "c",
            action: step_c,
            in_all: true,
            description: "",
        },
    ];

    fn names(steps: Vec<&Step>) -> Vec<&'static str> {
        steps.into_iter().map(|s| s.name).collect()
    }

    fn selection(all: bool, named: &[&str]) -> Selection {
        Selection {
            all,
            named: named.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn select_keeps_table_order() {
        let picked = select(TABLE, &selection(false, &["c", "a"]));
        assert_eq!(names(picked), vec!["a", "c"]);
    }

    #[test]
    fn select_all_skips_untagged() {
        assert_eq!(names(select(TABLE, &selection(true, &[]))), vec!["a", "c"]);
        assert_eq!(
            names(select(TABLE, &selection(true, &["b"]))),
            vec!["a", "b", "c"]
        );
    }

    #[test]
    fn select_all_with_duplicate_flag_runs_once() {
        assert_eq!(names(select(TABLE, &selection(true, &["a"]))), vec!["a", "c"]);
    }

    #[test]
    fn select_nothing() {
        assert!(select(TABLE, &Selection::default()).is_empty());
    }

    #[test]
    fn dispatch_runs_in_table_order() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::resolve(ConfigInput {
            contract: "echo".to_string(),
            ..ConfigInput::default()
        })
        .unwrap();
        let mut log = RunLog::open(dir.path().join("run.log")).unwrap();

        let report = dispatch(TABLE, &selection(false, &["c", "b", "a"]), &config, &mut log).unwrap();

        assert_eq!(report.steps, vec!["a", "b", "c"]);
        assert_eq!(report.commands, 3);
        assert!(report.failed.is_empty());
        assert_eq!(report.summary(), "ran a, b, c (3 commands, 0 failed)");

        let content = std::fs::read_to_string(dir.path().join("run.log")).unwrap();
        assert!(content.ends_with("echo a\necho b\necho c\n"));
    }

    #[test]
    fn dispatch_without_selection_spawns_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::resolve(ConfigInput::default()).unwrap();
        let mut log = RunLog::open(dir.path().join("run.log")).unwrap();

        let report = dispatch(TABLE, &Selection::default(), &config, &mut log).unwrap();

        assert!(report.steps.is_empty());
        assert_eq!(report.commands, 0);
        assert_eq!(report.summary(), "nothing to do");
        assert_eq!(log.lines(), 0);
    }
}
