use clap::{Parser, Subcommand};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use sapling::output::{render_to_string, render_tree};
use sapling::scenario::{find_all_scenarios, Scenario};
use sapling::{Key, Traversal, Tree};

/// Sapling - balanced binary search tree playground
#[derive(Parser)]
#[command(name = "sapling")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a tree, unbalance it with extra inserts, then rebalance it
    Demo {
        /// Initial keys
        #[arg(
            value_name = "KEYS",
            allow_negative_numbers = true,
            default_values_t = vec![1, 7, 4, 23, 8, 9, 4, 3, 5, 7, 9, 67, 95, 28]
        )]
        keys: Vec<Key>,

        /// Keys inserted to unbalance the tree (comma separated)
        #[arg(
            short,
            long,
            value_delimiter = ',',
            allow_negative_numbers = true,
            default_values_t = vec![555, 665, 777, 999]
        )]
        unbalance: Vec<Key>,
    },

    /// Print a tree built from keys along with its traversals
    Show {
        #[arg(value_name = "KEYS", required = true, allow_negative_numbers = true)]
        keys: Vec<Key>,

        /// Only print this traversal: level, in, pre or post
        #[arg(long)]
        order: Option<Traversal>,

        /// Also write the rendered tree to this file
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Run scenario files
    Run {
        /// Scenario file or directory (default: sapling.toml in this or a parent directory)
        #[arg(value_name = "PATH")]
        path: Option<String>,

        /// Directory to write one report per scenario into
        #[arg(short, long)]
        output: Option<String>,
    },
}

impl Cli {
    pub fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        match self.command {
            Commands::Demo { keys, unbalance } => run_demo(&keys, &unbalance),
            Commands::Show {
                keys,
                order,
                output,
            } => show_tree(&keys, order, output.as_deref()),
            Commands::Run { path, output } => run_scenarios(path.as_deref(), output.as_deref()),
        }
    }
}

fn run_demo(keys: &[Key], unbalance: &[Key]) -> Result<(), Box<dyn std::error::Error>> {
    let report = Scenario::demo(keys, unbalance).run()?;
    print!("{}", report);
    Ok(())
}

fn show_tree(
    keys: &[Key],
    order: Option<Traversal>,
    output: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let tree = Tree::new(keys);

    print!("{}", render_to_string(&tree));
    println!("balanced: {}", tree.is_balanced());

    let orders = match order {
        Some(order) => vec![order],
        None => Traversal::ALL.to_vec(),
    };
    for order in orders {
        println!("{} order: {:?}", order, tree.traversal_order(order));
    }

    if let Some(output) = output {
        let path = Path::new(output);
        render_tree(&tree, path)?;
        println!("Wrote tree to: {:?}", path);
    }

    Ok(())
}

fn run_scenarios(
    path: Option<&str>,
    output_dir: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let scenarios = match path {
        None => vec![Scenario::discover()?],
        Some(path) if Path::new(path).is_dir() => {
            let files = find_all_scenarios(Path::new(path));
            if files.is_empty() {
                println!("No scenario files found in {}", path);
                return Ok(());
            }

            println!("Found {} scenario files", files.len());
            let mut loaded = Vec::new();
            for file in files {
                match Scenario::load(&file) {
                    Ok(scenario) => loaded.push(scenario),
                    Err(e) => eprintln!("Warning: Failed to load {:?}: {}", file, e),
                }
            }
            loaded
        }
        Some(path) => vec![Scenario::load(Path::new(path))?],
    };

    let mut failed = 0;

    for scenario in &scenarios {
        println!("== {}", scenario.name());

        let report = match scenario.run() {
            Ok(report) => report,
            Err(e) => {
                eprintln!("Scenario '{}' failed: {}", scenario.name(), e);
                failed += 1;
                continue;
            }
        };
        print!("{}", report);

        if let Some(dir) = output_dir {
            fs::create_dir_all(dir)?;
            let report_path = report_path(Path::new(dir), scenario.name());
            let mut file = fs::File::create(&report_path)?;
            file.write_all(report.as_bytes())?;
            println!("  -> {:?}", report_path);
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} scenarios failed", failed, scenarios.len()).into());
    }

    Ok(())
}

/// Report file for a scenario, with path separators in the name replaced
fn report_path(dir: &Path, name: &str) -> PathBuf {
    let file_name: String = name
        .chars()
        .map(|c| if c == '/' || c == '\\' { '_' } else { c })
        .collect();
    dir.join(format!("{}.txt", file_name))
}
