use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use spmat::io::error::Export;
use spmat::{EntryOrder, Error, ErrorKind, Operation, SparseMatrix, Strategy, load, save_with_order};

/// Directory that holds input matrices. Results are written next to it.
const SAMPLE_INPUTS: &str = "sample_inputs";
/// Directory results are written to.
const OUTPUTS: &str = "outputs";

/// Arithmetic on sparse integer matrices stored in text files.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    #[command(subcommand)]
    command: Command,

    /// Order of the entry lines in written or displayed matrices
    #[arg(long, value_enum, default_value = "lexicographic", global = true)]
    order: Order,
}

#[derive(Subcommand)]
enum Command {
    /// Add the second matrix to the first
    Add(Operands),
    /// Subtract the second matrix from the first
    Subtract(Operands),
    /// Multiply the first matrix by the second
    Multiply {
        #[command(flatten)]
        operands: Operands,

        /// How the product is computed
        #[arg(long, value_enum, default_value = "optimal")]
        strategy: StrategyArg,
    },
    /// Print a matrix
    Display {
        /// Matrix file
        matrix: PathBuf,
    },
}

#[derive(Args)]
struct Operands {
    /// First matrix file
    first: PathBuf,
    /// Second matrix file
    second: PathBuf,
    /// Where to write the result, instead of an `outputs` directory next to the inputs
    #[arg(long, short)]
    output: Option<PathBuf>,
}

#[derive(Copy, Clone, ValueEnum)]
enum Order {
    Lexicographic,
    RowMajor,
}

impl From<Order> for EntryOrder {
    fn from(order: Order) -> Self {
        match order {
            Order::Lexicographic => EntryOrder::Lexicographic,
            Order::RowMajor => EntryOrder::RowMajor,
        }
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum StrategyArg {
    Optimal,
    Naive,
}

impl From<StrategyArg> for Strategy {
    fn from(strategy: StrategyArg) -> Self {
        match strategy {
            StrategyArg::Optimal => Strategy::Optimal,
            StrategyArg::Naive => Strategy::Naive,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let opts = Opts::parse();

    match run(opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            let code = match error.kind() {
                ErrorKind::Format | ErrorKind::DimensionMismatch => {
                    eprintln!("Syntax Error: {error}");
                    1
                }
                ErrorKind::FileNotFound => {
                    eprintln!("File Not Found Error: {error}");
                    2
                }
                ErrorKind::Other => {
                    eprintln!("Unexpected Error: An unexpected error occurred: {error}");
                    3
                }
            };
            ExitCode::from(code)
        }
    }
}

fn run(opts: Opts) -> Result<(), Error> {
    let order = opts.order.into();

    let (operation, operands) = match opts.command {
        Command::Add(operands) => (Operation::Addition, operands),
        Command::Subtract(operands) => (Operation::Subtraction, operands),
        Command::Multiply { operands, strategy } => {
            (Operation::Multiplication(strategy.into()), operands)
        }
        Command::Display { matrix } => {
            info!(path = %matrix.display(), "displaying matrix");
            let matrix: SparseMatrix = load(&matrix)?;
            print!("{}", matrix.render(order));
            return Ok(());
        }
    };

    info!(
        %operation,
        first = %operands.first.display(),
        second = %operands.second.display(),
        "loading matrices",
    );
    let first: SparseMatrix = load(&operands.first)?;
    let second: SparseMatrix = load(&operands.second)?;
    let result = operation.apply(&first, &second)?;

    let output = match operands.output {
        Some(output) => output,
        None => {
            let output = default_output_path(operation, &operands.first, &operands.second);
            if let Some(directory) = output.parent() {
                fs::create_dir_all(directory)
                    .map_err(|source| Export { path: directory.to_path_buf(), source })?;
            }
            output
        }
    };
    save_with_order(&result, &output, order)?;

    println!("Operation successful! Result written to {}", output.display());
    Ok(())
}

/// Path to write the result of `operation` on `first` and `second` to.
///
/// This is `<base>/outputs/<title>.txt`, where `<base>` is the directory containing the
/// `sample_inputs` directory that `first` is in, or the directory of `first` otherwise.
fn default_output_path(operation: Operation, first: &Path, second: &Path) -> PathBuf {
    let base = first.ancestors()
        .find(|ancestor| ancestor.file_name() == Some(OsStr::new(SAMPLE_INPUTS)))
        .and_then(Path::parent)
        .or_else(|| first.parent())
        .unwrap_or_else(|| Path::new(""));

    let title = operation.describe(&file_stem(first), &file_stem(second));
    base.join(OUTPUTS).join(format!("{title}.txt"))
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
