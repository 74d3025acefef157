use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use range_tree::{Combiner, RangeTree};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "range-tree", about = "Associative range queries over a static sequence")]
struct Cli {
    /// Log tree construction and queries.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the built-in min and sum examples (default).
    Demo,
    /// Answer a single range query over the given values.
    Query {
        /// Combining operation.
        #[arg(long, value_enum, default_value_t = Operation::Sum)]
        op: Operation,
        /// Comma-separated values, e.g. `6,5,4,3,2,1`.
        #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
        /// Lower index (inclusive).
        #[arg(long)]
        lo: usize,
        /// Upper index (inclusive).
        #[arg(long)]
        hi: usize,
        /// Cross-check the answer against a linear fold.
        #[arg(long)]
        verify: bool,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Operation {
    Sum,
    Min,
    Max,
}

impl Operation {
    fn combiner(self) -> Combiner<i64> {
        match self {
            Operation::Sum => Combiner::sum(),
            Operation::Min => Combiner::min(),
            Operation::Max => Combiner::max(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => run_demo()?,
        Commands::Query {
            op,
            values,
            lo,
            hi,
            verify,
        } => run_query(op, values, lo, hi, verify)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_demo() -> Result<()> {
    let tree_min = RangeTree::build(vec![1, 2, 3, 4, 5, 6], Combiner::<i32>::min())
        .context("failed to build min tree")?;
    println!("{}", tree_min.get(2, 4).context("min query failed")?);

    let nums = vec![6, 5, 4, 3, 2, 1];
    let tree_sum = RangeTree::<i32>::new(nums).context("failed to build sum tree")?;
    println!("{}", tree_sum.get(1, 3).context("sum query failed")?);

    Ok(())
}

fn run_query(op: Operation, values: Vec<i64>, lo: usize, hi: usize, verify: bool) -> Result<()> {
    let tree = RangeTree::build(values, op.combiner())
        .with_context(|| format!("failed to build {:?} tree", op))?;
    let answer = tree
        .get(lo, hi)
        .with_context(|| format!("query [{}, {}] failed", lo, hi))?;

    if verify {
        let expected = tree.combiner().fold(&tree.values()[lo..=hi]);
        if expected != answer {
            anyhow::bail!("tree answered {} but linear fold gives {}", answer, expected);
        }
        info!(lo, hi, "answer verified against linear fold");
    }

    println!("{}", answer);
    Ok(())
}
