//! SEMANTIX CLI
//!
//! Loads a word-vector table and answers neighbor and analogy queries.

use clap::{Parser, Subcommand};
use semantix::display::{render_analogy, render_nearest};
use semantix::{Config, Engine, Vector};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// SEMANTIX - Word Vector Similarity and Analogies
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Vector table (word,v1,...,vn per line)
    #[arg(short, long, default_value = "glove.6B.50d_Reduced.csv")]
    vectors: PathBuf,

    /// Stopword list, one word per line
    #[arg(short, long, default_value = "stopwords.csv")]
    stopwords: PathBuf,

    /// Build the catalog without a stopword filter
    #[arg(long, default_value_t = false)]
    no_stopwords: bool,

    /// Word whose vector replaces unknown query words
    #[arg(long, default_value = "error")]
    fallback: String,

    /// Require exactly this many components per row
    #[arg(long)]
    dimension: Option<usize>,

    /// Number of worker threads (0 = auto-detect based on CPU cores)
    #[arg(short, long, default_value_t = 0)]
    workers: usize,

    /// Minimum catalog size before scoring is split across workers
    #[arg(long, default_value_t = 4096)]
    parallel_threshold: usize,

    #[command(subcommand)]
    command: Query,
}

#[derive(Subcommand, Debug)]
enum Query {
    /// Words most similar to a word
    Nearest {
        word: String,
        #[arg(short, long, default_value_t = 5, allow_negative_numbers = true)]
        top: i64,
    },

    /// Words most similar to a raw vector, e.g. "0.1,-0.3,0.7"
    Vector {
        components: String,
        #[arg(short, long, default_value_t = 5, allow_negative_numbers = true)]
        top: i64,
    },

    /// Solve SECOND_IS : FIRST_IS :: FIRST_TO : ?
    Analogy {
        second_is: String,
        first_is: String,
        first_to: String,
        #[arg(short, long, default_value_t = 5, allow_negative_numbers = true)]
        top: i64,
    },

    /// Run the built-in sample queries
    Demo,
}

/// Negative counts mean "nothing"
fn count(top: i64) -> usize {
    usize::try_from(top).unwrap_or(0)
}

fn nearest(engine: &Engine, word: &str, top: i64) -> anyhow::Result<()> {
    let results = engine.top_nearest_to_word(word, count(top))?;
    print!("{}", render_nearest(&results, count(top)));
    Ok(())
}

fn analogy(engine: &Engine, second_is: &str, first_is: &str, first_to: &str, top: i64) {
    let results = engine.analogy(second_is, first_is, first_to, count(top));
    print!("{}", render_analogy(second_is, first_is, first_to, &results));
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("semantix=info".parse()?))
        .init();

    let args = Args::parse();
    let start = Instant::now();

    let config = Config::default()
        .with_vectors_path(&args.vectors)
        .with_stopwords_path((!args.no_stopwords).then(|| args.stopwords.clone()))
        .with_fallback_word(&args.fallback)
        .with_dimension(args.dimension)
        .with_workers(args.workers)
        .with_parallel_threshold(args.parallel_threshold);

    info!(
        "Loading {} with {} workers",
        config.vectors_path.display(),
        config.resolved_workers()
    );
    let engine = Engine::load(&config)?;

    match &args.command {
        Query::Nearest { word, top } => nearest(&engine, word, *top)?,

        Query::Vector { components, top } => {
            let vector: Vector = components.parse()?;
            let results = engine.top_nearest_to_vector(&vector, count(*top));
            print!("{}", render_nearest(&results, count(*top)));
        }

        Query::Analogy {
            second_is,
            first_is,
            first_to,
            top,
        } => analogy(&engine, second_is, first_is, first_to, *top),

        Query::Demo => {
            nearest(&engine, "computer", 5)?;
            nearest(&engine, "phd", 5)?;
            analogy(&engine, "china", "uk", "london", 5);
            analogy(&engine, "woman", "man", "king", 5);
            analogy(&engine, "banana", "apple", "red", 3);
        }
    }

    info!("{}", engine.metrics().summary());
    info!("Elapsed: {:?}", start.elapsed());

    Ok(())
}
