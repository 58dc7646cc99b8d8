//! Simulation command

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use qalloc_rl::{simulation, Allocator, Release};

use crate::config::Config;

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Number of resources (overrides simulation.n_resources)
    #[arg(short = 'r', long = "resources")]
    pub n_resources: Option<usize>,

    /// Number of tasks (overrides simulation.n_tasks)
    #[arg(short = 't', long = "tasks")]
    pub n_tasks: Option<usize>,

    /// Learning rate
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Discount factor
    #[arg(long)]
    pub gamma: Option<f64>,

    /// Exploration rate
    #[arg(long)]
    pub epsilon: Option<f64>,

    /// Seed for reproducible exploration
    #[arg(long)]
    pub seed: Option<u64>,

    /// Keep resources busy after assignment instead of freeing them
    #[arg(long)]
    pub hold: bool,

    /// Print the learned Q-table as JSON after the run
    #[arg(long)]
    pub dump_q_table: bool,

    /// Print allocator statistics as JSON after the run
    #[arg(long)]
    pub stats: bool,
}

impl RunArgs {
    /// Layer command-line values over the loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(n) = self.n_resources {
            config.simulation.n_resources = n;
        }
        if let Some(n) = self.n_tasks {
            config.simulation.n_tasks = n;
        }
        if let Some(alpha) = self.alpha {
            config.learning.alpha = alpha;
        }
        if let Some(gamma) = self.gamma {
            config.learning.gamma = gamma;
        }
        if let Some(epsilon) = self.epsilon {
            config.learning.epsilon = epsilon;
        }
        if self.seed.is_some() {
            config.simulation.seed = self.seed;
        }
    }
}

pub fn run(args: &RunArgs, mut config: Config) -> Result<()> {
    args.apply(&mut config);
    let params = config.validate().context("Invalid simulation configuration")?;

    let n_resources = config.simulation.n_resources;
    let n_tasks = config.simulation.n_tasks;
    let mut allocator = match config.simulation.seed {
        Some(seed) => {
            info!("Using exploration seed {}", seed);
            Allocator::seeded(n_resources, n_tasks, params, seed)
        }
        None => Allocator::new(n_resources, n_tasks, params),
    };

    let release = if args.hold {
        Release::Never
    } else {
        Release::Immediate
    };

    for outcome in simulation::run(&mut allocator, n_tasks, release) {
        println!("{outcome}");
    }

    if args.dump_q_table {
        println!(
            "{}",
            serde_json::to_string_pretty(&allocator.q_table().snapshot())?
        );
    }

    if args.stats {
        println!("{}", serde_json::to_string_pretty(&allocator.stats())?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_overrides_only_given_values() {
        let mut config = Config::default();
        let args = RunArgs {
            n_resources: Some(1),
            epsilon: Some(0.0),
            seed: Some(9),
            ..RunArgs::default()
        };

        args.apply(&mut config);

        assert_eq!(config.simulation.n_resources, 1);
        assert_eq!(config.simulation.n_tasks, 10);
        assert_eq!(config.simulation.seed, Some(9));
        assert_eq!(config.learning.epsilon, 0.0);
        assert_eq!(config.learning.alpha, 0.1);
    }

    #[test]
    fn test_run_rejects_zero_resources() {
        let args = RunArgs {
            n_resources: Some(0),
            ..RunArgs::default()
        };
        assert!(run(&args, Config::default()).is_err());
    }

    #[test]
    fn test_run_reference_configuration() {
        let args = RunArgs {
            seed: Some(1),
            ..RunArgs::default()
        };
        assert!(run(&args, Config::default()).is_ok());
    }
}
