use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

use pagesim::common::config::{DEFAULT_LOCALITY, DEFAULT_PAGE_RANGE, DEFAULT_REPETITIONS};
use pagesim::report::render_table;
use pagesim::{Experiment, ExperimentKind};

#[derive(Parser)]
#[command(author, version, about = "Compare FIFO and MFU page replacement on synthetic traces")]
struct Cli {
    /// Run only this experiment: length, frames or locality
    #[arg(short, long)]
    experiment: Option<String>,

    /// Trials averaged per swept value
    #[arg(short, long, default_value_t = DEFAULT_REPETITIONS)]
    repetitions: usize,

    /// Pages are drawn from [0, PAGE_RANGE)
    #[arg(short, long, default_value_t = DEFAULT_PAGE_RANGE)]
    page_range: u32,

    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,
}

/// Swept values and the held parameter of each reference experiment.
///
/// The locality sweep ignores its held parameter.
fn sweep(kind: ExperimentKind) -> (Vec<f64>, f64) {
    match kind {
        ExperimentKind::Length => (vec![50.0, 100.0, 150.0, 200.0, 250.0], DEFAULT_LOCALITY),
        ExperimentKind::Frames => (vec![2.0, 3.0, 4.0, 5.0, 6.0], DEFAULT_LOCALITY),
        ExperimentKind::Locality => (vec![0.1, 0.3, 0.5, 0.7, 0.9], DEFAULT_LOCALITY),
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let kinds = match cli.experiment.as_deref() {
        Some(name) => vec![name.parse::<ExperimentKind>()?],
        None => ExperimentKind::ALL.to_vec(),
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    for kind in kinds {
        let (values, fixed_param) = sweep(kind);
        info!("running {} sweep over {:?}", kind, values);

        let result = Experiment::new(kind, fixed_param)
            .with_repetitions(cli.repetitions)
            .with_page_range(cli.page_range)
            .run(&values, &mut rng)
            .with_context(|| format!("{} experiment failed", kind))?;

        let title = format!(
            "FIFO vs MFU by {} (pages 0-{})",
            kind.label().to_lowercase(),
            cli.page_range.saturating_sub(1)
        );
        println!("{}", render_table(&title, kind.label(), &result));
    }

    Ok(())
}
