use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, ValueEnum};
use log::{LevelFilter, info};

use digitnet::prelude::*;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Rule {
    /// Incoming gradient without activation derivative, input gradient from pre-update weights
    Simplified,
    /// Textbook backpropagation through the activation
    Canonical,
    /// Parameters updated before the input gradient is computed
    Legacy,
}

impl From<Rule> for GradientRule {
    fn from(rule: Rule) -> Self {
        match rule {
            Rule::Simplified => GradientRule::Simplified,
            Rule::Canonical => GradientRule::Canonical,
            Rule::Legacy => GradientRule::Legacy,
        }
    }
}

#[derive(Parser)]
#[command(version, about = "Train a feed-forward network on digit CSV files and report test accuracy")]
struct Cli {
    #[arg(long)]
    /// Path to the training CSV file.
    train: PathBuf,

    #[arg(long)]
    /// Path to the test CSV file.
    test: PathBuf,

    #[arg(long, default_value_t = 35)]
    /// Number of passes over the training data.
    epochs: usize,

    #[arg(long, default_value_t = 0.01)]
    /// Gradient descent step size.
    learning_rate: f64,

    #[arg(long, default_value_t = 10)]
    /// Number of classes; also the size of the output layer.
    num_classes: usize,

    #[arg(long, value_delimiter = ',', default_values_t = vec![16, 10])]
    /// Hidden layer sizes, comma separated.
    hidden: Vec<usize>,

    #[arg(long, default_value_t = 42)]
    /// Seed of the parameter initialization.
    seed: u64,

    #[arg(long)]
    /// Keep raw pixel values instead of dividing them by 255.
    no_normalize: bool,

    #[arg(long)]
    /// The label is the last column instead of the first.
    label_last: bool,

    #[arg(long)]
    /// Skip the first line of each CSV file.
    has_headers: bool,

    #[arg(long, value_enum, default_value_t = Rule::Simplified)]
    /// How layers turn output gradients into updates.
    gradient_rule: Rule,
}

impl Cli {
    fn dataset_config(&self) -> DatasetConfig {
        DatasetConfig {
            normalize: !self.no_normalize,
            label_position: if self.label_last {
                LabelPosition::Last
            } else {
                LabelPosition::First
            },
            has_headers: self.has_headers,
            ..DatasetConfig::default()
        }
    }

    fn execute(self) -> Result<()> {
        let config = self.dataset_config();

        let train_rows = load_csv(&self.train, &config)
            .with_context(|| format!("Failed to load training data from {:?}", self.train))?;
        let test_rows = load_csv(&self.test, &config)
            .with_context(|| format!("Failed to load test data from {:?}", self.test))?;

        let Some(first) = train_rows.first() else {
            bail!("Training data {:?} holds no rows", self.train);
        };

        let mut sizes = Vec::with_capacity(self.hidden.len() + 2);
        sizes.push(first.len().saturating_sub(1));
        sizes.extend(&self.hidden);
        sizes.push(self.num_classes);

        let mut network = Network::new(&LayerSpec::chain(&sizes), self.seed)?
            .with_gradient_rule(self.gradient_rule.into());

        println!("{}", network.summary());

        network.train(&train_rows, self.epochs, self.num_classes, self.learning_rate)?;

        let evaluation = network.evaluate(&test_rows, self.num_classes)?;
        info!("Evaluated {} test rows", evaluation.total);

        println!("{}", evaluation);
        println!("Accuracy: {:.2}%", evaluation.accuracy() * 100.0);

        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Info)
        .parse_env(env_logger::Env::default().filter_or("DIGITNET_LOG", "info"))
        .init();

    Cli::parse().execute()
}
