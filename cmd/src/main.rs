use clap::{Args, Parser, Subcommand};
use log::{info, LevelFilter};
use rand::Rng;
use tabled::{builder::Builder, settings::Style};

use skipdex_common::rng::seeded_rng;
use skipdex_skip_list::skip_list::SkipIndex;
use skipdex_traits::default::{IndexConfig, DEFAULT_PROMOTION_PROBABILITY};
use skipdex_traits::index::{IndexError, OrderedIndex};
use skipdex_xor_list::XorList;

const DEMO_KEYS: [i64; 10] = [3, 6, 7, 9, 12, 19, 17, 26, 21, 25];

#[derive(Parser)]
#[command(name = "skipdexcli")]
#[command(version = "0.1.0")]
#[command(about = "A simple CLI for the skipdex skip list and XOR list")]
struct Cli {
    /// Log every insert and delete
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}
#[derive(Subcommand)]
enum Commands {
    /// Insert 3 6 7 9 12 19 17 26 21 25, find 25, delete 12, then print the levels
    Demo {
        #[command(flatten)]
        index: IndexArgs,
    },
    /// Run custom inserts, lookups and deletes, in that order
    Run {
        #[command(flatten)]
        index: IndexArgs,
        #[arg(short, long, value_delimiter = ',')]
        insert: Vec<i64>,
        #[arg(short, long, value_delimiter = ',')]
        find: Vec<i64>,
        #[arg(short, long, value_delimiter = ',')]
        delete: Vec<i64>,
    },
    /// Push values onto the front of an XOR list and print it
    Xor {
        #[arg(default_values_t = [1, 2, 3])]
        values: Vec<i64>,
    },
}
#[derive(Args)]
struct IndexArgs {
    /// Highest level a node may reach
    #[arg(short, long, default_value_t = 3)]
    max_level: usize,
    /// Probability that a node joins the next level up
    #[arg(short, long, default_value_t = DEFAULT_PROMOTION_PROBABILITY)]
    probability: f64,
    /// Seed string for reproducible level draws
    #[arg(short, long)]
    seed: Option<String>,
}
impl IndexArgs {
    fn config(&self) -> IndexConfig {
        let mut config = IndexConfig::default();
        config
            .set_max_level(self.max_level)
            .set_promotion_probability(self.probability)
            .set_seed(self.seed.as_deref().map(|seed| seeded_rng(seed).gen()));
        config
    }
}
struct Script {
    insert: Vec<i64>,
    find: Vec<i64>,
    delete: Vec<i64>,
}
impl Script {
    fn demo() -> Self {
        Self {
            insert: DEMO_KEYS.to_vec(),
            find: vec![25],
            delete: vec![12],
        }
    }
}
fn main() {
    let cli = Cli::parse();
    let mut logger = env_logger::builder();
    logger.filter_level(if cli.verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    });
    logger.parse_default_env();
    logger.init();

    if let Err(e) = main_impl(cli.command) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
fn main_impl(command: Commands) -> Result<(), IndexError> {
    match command {
        Commands::Demo { index } => {
            let skip_index: SkipIndex<i64> = run_script(&index.config(), &Script::demo())?;
            println!("{}", render_levels(&skip_index));
        }
        Commands::Run {
            index,
            insert,
            find,
            delete,
        } => {
            let script = Script {
                insert,
                find,
                delete,
            };
            let skip_index: SkipIndex<i64> = run_script(&index.config(), &script)?;
            println!("{}", render_levels(&skip_index));
        }
        Commands::Xor { values } => {
            let mut list = XorList::new();
            for value in values {
                list.push_front(value);
            }
            println!("{}", list);
        }
    }
    Ok(())
}
fn run_script<T: OrderedIndex<i64>>(config: &IndexConfig, script: &Script) -> Result<T, IndexError> {
    info!(
        "max level {}, promotion probability {}",
        config.max_level(),
        config.promotion_probability()
    );
    let mut index = T::new(config)?;
    for &key in &script.insert {
        if index.insert(key) {
            println!("Key {} inserted", key);
        } else {
            println!("Key {} already present", key);
        }
    }
    for key in &script.find {
        if index.contains(key) {
            println!("Found key: {}", key);
        } else {
            println!("Key {} not found", key);
        }
    }
    for key in &script.delete {
        if index.delete(key) {
            println!("Key {} deleted", key);
        } else {
            println!("Key {} not found", key);
        }
    }
    Ok(index)
}
fn render_levels<T: OrderedIndex<i64>>(index: &T) -> String {
    let mut rows = vec![vec!["Level".to_string(), "Keys".to_string()]];
    for level in 0..=index.height() {
        let keys: Vec<String> = index.keys_at(level).map(|k| k.to_string()).collect();
        rows.push(vec![level.to_string(), keys.join(" ")]);
    }
    let mut table = Builder::from(rows).build();
    table.with(Style::modern());
    table.to_string()
}
