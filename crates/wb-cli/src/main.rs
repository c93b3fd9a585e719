//! weekbeeld CLI — weekly municipal field-report store and compiler
//!
//! Commands: init, submit, compile, list, completions

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::Shell;
use tracing_subscriber::EnvFilter;

use wb_core::{default_report_week, Config};
use wb_report::{compile, write_report, OutputFormat};
use wb_store::RecordStore;

mod auth;

#[derive(Parser)]
#[command(name = "weekbeeld")]
#[command(version)]
#[command(about = "Weekly municipal field-report store and compiler")]
struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, default_value = "weekbeeld.yaml")]
    config: PathBuf,

    /// Username for the login gate
    #[arg(long, global = true, env = "WEEKBEELD_USER")]
    user: Option<String>,

    /// Password for the login gate
    #[arg(long, global = true, env = "WEEKBEELD_PASSWORD")]
    password: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Initialize data/output directories and a default configuration
    Init {
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
    /// Submit this week's texts for one area (all topics in one batch)
    Submit {
        /// Area the texts apply to
        #[arg(long)]
        area: String,
        /// ISO week number (default: the week of seven days ago)
        #[arg(long)]
        week: Option<u32>,
        /// One "Topic=text" pair per flag
        #[arg(long = "entry", value_name = "TOPIC=TEXT")]
        entries: Vec<String>,
        /// YAML file mapping topic names to texts
        #[arg(long, value_name = "FILE")]
        from_file: Option<PathBuf>,
    },
    /// Compile the weekly report document
    #[command(alias = "c")]
    Compile {
        /// ISO week number (default: the week of seven days ago)
        #[arg(long)]
        week: Option<u32>,
        #[arg(long, value_enum, default_value_t = FormatArg::Markdown)]
        format: FormatArg,
    },
    /// List stored records for a week as JSON
    #[command(alias = "ls")]
    List {
        /// ISO week number (default: the week of seven days ago)
        #[arg(long)]
        week: Option<u32>,
    },
    /// Generate shell completions
    Completions { shell: Shell },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Markdown,
    Html,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Markdown => OutputFormat::Markdown,
            FormatArg::Html => OutputFormat::Html,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Init { ref dir } => init(dir),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "weekbeeld", &mut io::stdout());
            Ok(())
        }
        ref command => {
            let config = Config::load_or_default(&cli.config)
                .with_context(|| format!("loading {}", cli.config.display()))?;
            auth::require_login(&config.users, cli.user.as_deref(), cli.password.as_deref())?;

            let base = cli.config.parent().unwrap_or_else(|| Path::new("."));
            match command {
                Commands::Submit {
                    area,
                    week,
                    entries,
                    from_file,
                } => submit(
                    &config,
                    base,
                    area,
                    week.unwrap_or_else(default_report_week),
                    entries,
                    from_file.as_deref(),
                ),
                Commands::Compile { week, format } => compile_week(
                    &config,
                    base,
                    week.unwrap_or_else(default_report_week),
                    (*format).into(),
                ),
                Commands::List { week } => {
                    list(&config, base, week.unwrap_or_else(default_report_week))
                }
                Commands::Init { .. } | Commands::Completions { .. } => unreachable!(),
            }
        }
    }
}

fn init(dir: &Path) -> Result<()> {
    let config = Config::default();
    fs::create_dir_all(dir.join(&config.data_dir))?;
    fs::create_dir_all(dir.join(&config.output_dir))?;

    let config_path = dir.join("weekbeeld.yaml");
    if !config_path.exists() {
        config.save(&config_path)?;
    }
    println!("Initialized weekbeeld workspace at {}", dir.display());
    Ok(())
}

fn submit(
    config: &Config,
    base: &Path,
    area: &str,
    week: u32,
    entries: &[String],
    from_file: Option<&Path>,
) -> Result<()> {
    config.catalog.require_area(area)?;

    // File entries first; --entry flags override on topic clashes.
    let mut texts: BTreeMap<String, String> = BTreeMap::new();
    if let Some(path) = from_file {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        texts = serde_yaml::from_str(&raw)
            .with_context(|| format!("parsing {}", path.display()))?;
    }
    for entry in entries {
        let Some((topic, text)) = entry.split_once('=') else {
            bail!("invalid --entry '{entry}': expected TOPIC=TEXT");
        };
        texts.insert(topic.to_string(), text.to_string());
    }
    if texts.is_empty() {
        bail!("nothing to submit: pass --entry or --from-file");
    }
    for topic in texts.keys() {
        config.catalog.require_topic(area, topic)?;
    }

    tracing::debug!(week, area, topics = texts.len(), "submitting batch");
    let store = RecordStore::new(base.join(&config.data_dir));
    let paths = store.put_batch(
        week,
        area,
        texts.iter().map(|(t, x)| (t.as_str(), x.as_str())),
        config.policy.reject_blank,
    )?;

    println!(
        "{}",
        serde_json::json!({ "week": week, "area": area, "stored": paths.len() })
    );
    Ok(())
}

fn compile_week(config: &Config, base: &Path, week: u32, format: OutputFormat) -> Result<()> {
    let store = RecordStore::new(base.join(&config.data_dir));
    let records = store.get_all(week)?.len();
    let doc = compile(&store, week, &config.catalog, &config.policy)?;
    let path = write_report(&doc, format, &base.join(&config.output_dir), &config.policy)?;

    println!(
        "{}",
        serde_json::json!({
            "week": week,
            "records": records,
            "output": path.display().to_string(),
        })
    );
    Ok(())
}

fn list(config: &Config, base: &Path, week: u32) -> Result<()> {
    let store = RecordStore::new(base.join(&config.data_dir));
    let records = store.get_all(week)?;
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}
