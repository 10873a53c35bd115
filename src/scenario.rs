//! Scripted tree scenarios loaded from TOML

use serde::Deserialize;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

use crate::output::render_to_string;
use crate::tree::{Key, Traversal, Tree, TreeError};

/// File name searched for by [`Scenario::discover`]
pub const SCENARIO_FILE: &str = "sapling.toml";

#[derive(Error, Debug)]
pub enum ScenarioError {
    #[error("Could not find sapling.toml in current directory or any parent")]
    NotFound,

    #[error("Failed to read scenario: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse scenario: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("Step {step} ({op}): expected {expected}, got {actual}")]
    ExpectationFailed {
        step: usize,
        op: String,
        expected: String,
        actual: String,
    },
}

/// One operation applied to the tree
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Step {
    Insert { value: Key },
    Delete { value: Key },
    Find { value: Key },
    Height { value: Key },
    Depth { value: Key },
    Balanced {
        #[serde(default)]
        expect: Option<bool>,
    },
    Rebalance,
    Traverse {
        order: String,
        #[serde(default)]
        expect: Option<Vec<Key>>,
    },
    Print,
}

impl Step {
    fn op(&self) -> &'static str {
        match self {
            Step::Insert { .. } => "insert",
            Step::Delete { .. } => "delete",
            Step::Find { .. } => "find",
            Step::Height { .. } => "height",
            Step::Depth { .. } => "depth",
            Step::Balanced { .. } => "balanced",
            Step::Rebalance => "rebalance",
            Step::Traverse { .. } => "traverse",
            Step::Print => "print",
        }
    }
}

/// Initial keys plus the steps to run against the tree built from them
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Scenario {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub keys: Vec<Key>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Scenario {
    /// Load a scenario file. The name defaults to the file stem.
    pub fn load(path: &Path) -> Result<Self, ScenarioError> {
        log::debug!("Loading scenario from {:?}", path);

        let content = fs::read_to_string(path)?;
        let mut scenario: Scenario = toml::from_str(&content)?;

        if scenario.name.is_none() {
            scenario.name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .map(str::to_string);
        }

        Ok(scenario)
    }

    /// Find and load `sapling.toml` from the current directory or a parent
    pub fn discover() -> Result<Self, ScenarioError> {
        let current_dir = std::env::current_dir()?;
        let path = Self::find_scenario_file(&current_dir)?;
        log::info!("Found scenario at {:?}", path);

        Self::load(&path)
    }

    fn find_scenario_file(start: &Path) -> Result<PathBuf, ScenarioError> {
        let mut current = start.to_path_buf();

        loop {
            let candidate = current.join(SCENARIO_FILE);
            if candidate.is_file() {
                return Ok(candidate);
            }

            if !current.pop() {
                return Err(ScenarioError::NotFound);
            }
        }
    }

    /// The demo sequence: check and show the built tree, unbalance it with
    /// `extra` inserts, then rebalance and show it again.
    pub fn demo(keys: &[Key], extra: &[Key]) -> Self {
        let traversals = || {
            Traversal::ALL.into_iter().map(|order| Step::Traverse {
                order: order.name().to_string(),
                expect: None,
            })
        };

        let mut steps = vec![Step::Balanced { expect: Some(true) }, Step::Print];
        steps.extend(traversals());

        if !extra.is_empty() {
            steps.extend(extra.iter().map(|&value| Step::Insert { value }));
            steps.push(Step::Balanced { expect: None });
            steps.push(Step::Rebalance);
            steps.push(Step::Balanced { expect: Some(true) });
            steps.extend(traversals());
        }

        Self {
            name: Some("demo".to_string()),
            keys: keys.to_vec(),
            steps,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_deref().unwrap_or("scenario")
    }

    /// Build the tree, run every step, and return the report text
    pub fn run(&self) -> Result<String, ScenarioError> {
        let mut tree = Tree::new(&self.keys);
        let mut report = String::new();
        log::info!(
            "Running scenario '{}' ({} keys, {} steps)",
            self.name(),
            tree.len(),
            self.steps.len()
        );

        let _ = writeln!(report, "build {:?}", tree.traversal_order(Traversal::In));

        for (index, step) in self.steps.iter().enumerate() {
            Self::run_step(&mut tree, index + 1, step, &mut report)?;
        }

        Ok(report)
    }

    fn run_step(
        tree: &mut Tree,
        index: usize,
        step: &Step,
        report: &mut String,
    ) -> Result<(), ScenarioError> {
        log::trace!("step {}: {:?}", index, step);

        match step {
            Step::Insert { value } => {
                tree.insert(*value);
                let _ = writeln!(report, "insert {}", value);
            }
            Step::Delete { value } => {
                tree.delete(*value);
                let _ = writeln!(report, "delete {}", value);
            }
            Step::Find { value } => {
                let found = if tree.find(*value).is_some() {
                    "found"
                } else {
                    "not found"
                };
                let _ = writeln!(report, "find {}: {}", value, found);
            }
            Step::Height { value } => {
                let _ = writeln!(report, "height {}: {}", value, describe(tree.height(*value)));
            }
            Step::Depth { value } => {
                let _ = writeln!(report, "depth {}: {}", value, describe(tree.depth(*value)));
            }
            Step::Balanced { expect } => {
                let actual = tree.is_balanced();
                let _ = writeln!(report, "balanced: {}", actual);
                check(index, step, *expect, actual)?;
            }
            Step::Rebalance => {
                tree.rebalance();
                let _ = writeln!(report, "rebalance");
            }
            Step::Traverse { order, expect } => {
                let order: Traversal = order.parse()?;
                let keys = tree.traversal_order(order);
                let _ = writeln!(report, "{} order: {:?}", order, keys);
                check(index, step, expect.clone(), keys)?;
            }
            Step::Print => report.push_str(&render_to_string(tree)),
        }

        Ok(())
    }
}

fn describe(value: Option<usize>) -> String {
    value.map_or_else(|| "not found".to_string(), |v| v.to_string())
}

fn check<T>(index: usize, step: &Step, expected: Option<T>, actual: T) -> Result<(), ScenarioError>
where
    T: PartialEq + std::fmt::Debug,
{
    match expected {
        Some(expected) if expected != actual => Err(ScenarioError::ExpectationFailed {
            step: index,
            op: step.op().to_string(),
            expected: format!("{:?}", expected),
            actual: format!("{:?}", actual),
        }),
        _ => Ok(()),
    }
}

/// Find all scenario files under `dir`, sorted by path
pub fn find_all_scenarios(dir: &Path) -> Vec<PathBuf> {
    let mut scenarios = Vec::new();

    for entry in WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if entry.file_type().is_file() {
            if let Some(ext) = entry.path().extension() {
                if ext == "toml" {
                    scenarios.push(entry.path().to_path_buf());
                }
            }
        }
    }

    scenarios
}
