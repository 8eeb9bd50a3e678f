mod locate;
mod settings;

use anyhow::{bail, Context, Result};
use clap::{ArgAction, CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use model::{DuplicatePolicy, Modules, Tag};
use parser::{export, write_output, MailIndexFormat, MaintainersLoader, MatcherSet};
use settings::{OutputSettings, Settings};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Kernel MAINTAINERS converter - turns the MAINTAINERS file into JSON, CSV and mail indexes
#[derive(Parser, Debug)]
#[command(name = "maintainers", author, version, about, long_about = None)]
struct Args {
    /// MAINTAINERS file to read (auto-detected if not specified)
    #[arg(short, long, env = "MAINTAINERS_FILE", global = true)]
    file: Option<PathBuf>,

    /// TOML settings file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// How to handle a module header that appears twice
    #[arg(long, value_enum, global = true)]
    on_duplicate: Option<DuplicateArg>,

    /// Verbosity level (can be repeated for more verbosity)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Convert the MAINTAINERS file to JSON, mail index and CSV files
    Convert(ConvertArgs),
    /// Show a single module record
    Show {
        /// Module name, exactly as written in the file
        module: String,

        /// Print only the values of this field tag (for example `M` or `F:`)
        #[arg(short, long)]
        tag: Option<Tag>,
    },
    /// List the modules maintaining the given paths
    Lookup {
        /// Repository-relative paths
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Print the field tag legend
    Tags,
    /// Print a shell completion script
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the convert command.
#[derive(clap::Args, Debug, Default)]
struct ConvertArgs {
    /// Write the module collection as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Write the mail to module index
    #[arg(long)]
    mail_index: Option<PathBuf>,

    /// Layout of the mail index
    #[arg(long, value_enum)]
    mail_format: Option<MailFormatArg>,

    /// Write a CSV summary
    #[arg(long)]
    csv: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum DuplicateArg {
    /// Replace the earlier record
    Overwrite,
    /// Append to the earlier record
    Merge,
    /// Abort parsing
    Error,
}

impl From<DuplicateArg> for DuplicatePolicy {
    fn from(arg: DuplicateArg) -> Self {
        match arg {
            DuplicateArg::Overwrite => DuplicatePolicy::Overwrite,
            DuplicateArg::Merge => DuplicatePolicy::Merge,
            DuplicateArg::Error => DuplicatePolicy::Error,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum MailFormatArg {
    /// module<TAB>mail per line
    Flat,
    /// mail<TAB>"modules" per line
    Grouped,
    /// module followed by its mails
    Sections,
}

impl From<MailFormatArg> for MailIndexFormat {
    fn from(arg: MailFormatArg) -> Self {
        match arg {
            MailFormatArg::Flat => MailIndexFormat::Flat,
            MailFormatArg::Grouped => MailIndexFormat::Grouped,
            MailFormatArg::Sections => MailIndexFormat::Sections,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    match &args.command {
        Commands::Completions { shell } => {
            clap_complete::generate(*shell, &mut Args::command(), "maintainers", &mut std::io::stdout());
            Ok(())
        }
        Commands::Convert(convert) => {
            let settings = Settings::load_optional(args.config.as_deref())?;
            let modules = load_modules(&args, &settings)?;
            run_convert(&modules, convert, &settings.output)
        }
        Commands::Show { module, tag } => {
            let settings = Settings::load_optional(args.config.as_deref())?;
            let modules = load_modules(&args, &settings)?;
            println!("{}", render_module(&modules, module, *tag)?);
            Ok(())
        }
        Commands::Tags => {
            print!("{}", render_tags());
            Ok(())
        }
        Commands::Lookup { paths } => {
            let settings = Settings::load_optional(args.config.as_deref())?;
            let modules = load_modules(&args, &settings)?;
            print!("{}", render_lookup(&modules, paths)?);
            Ok(())
        }
    }
}

/// Log to stderr; `RUST_LOG` overrides the level picked by `-v`
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_modules(args: &Args, settings: &Settings) -> Result<Modules> {
    let path = locate::detect_maintainers_path(args.file.as_deref(), settings.input.as_deref())?;
    let policy = args
        .on_duplicate
        .map(DuplicatePolicy::from)
        .or(settings.on_duplicate)
        .unwrap_or_default();

    tracing::info!(path = %path.display(), %policy, "loading MAINTAINERS");
    MaintainersLoader::new(&path)
        .on_duplicate(policy)
        .load()
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Run the convert command.
fn run_convert(modules: &Modules, args: &ConvertArgs, defaults: &OutputSettings) -> Result<()> {
    let json = args.json.as_ref().or(defaults.json.as_ref());
    let mail_index = args.mail_index.as_ref().or(defaults.mail_index.as_ref());
    let csv = args.csv.as_ref().or(defaults.csv.as_ref());
    let mail_format = args
        .mail_format
        .map(MailIndexFormat::from)
        .or(defaults.mail_format)
        .unwrap_or_default();

    if json.is_none() && mail_index.is_none() && csv.is_none() {
        println!("{}", export::to_json(modules)?);
        return Ok(());
    }

    if let Some(path) = json {
        write_file(path, &export::to_json(modules)?)?;
    }
    if let Some(path) = mail_index {
        write_file(path, &export::mail_index(modules, mail_format))?;
    }
    if let Some(path) = csv {
        write_file(path, &export::to_csv(modules))?;
    }

    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    write_output(path, content)?;
    tracing::info!(path = %path.display(), "wrote output");
    Ok(())
}

/// Render one module as `name` followed by its JSON record, or only the
/// values of `tag`, one per line
fn render_module(modules: &Modules, module: &str, tag: Option<Tag>) -> Result<String> {
    let Some(record) = modules.get(module) else {
        let needle = module.to_lowercase();
        let similar: Vec<String> = modules
            .names()
            .filter(|name| name.to_lowercase().contains(&needle))
            .take(10)
            .map(|name| format!("  - {}", name))
            .collect();

        if similar.is_empty() {
            bail!("No module named '{}'", module);
        }
        bail!("No module named '{}'. Similar modules:\n{}", module, similar.join("\n"));
    };

    match tag {
        Some(tag) => Ok(record.field(tag).values().join("\n")),
        None => Ok(format!("{}\n{}", module, export::record_to_json(record)?)),
    }
}

/// Render the tag legend: prefix, JSON field and description per tag
fn render_tags() -> String {
    let mut output = String::new();
    for tag in Tag::ALL {
        output.push_str(&format!(
            "{}  {:<13} {}\n",
            tag,
            tag.field_name(),
            tag.description()
        ));
    }
    output
}

/// Render the lookup report for each path
fn render_lookup(modules: &Modules, paths: &[String]) -> Result<String> {
    let matchers = MatcherSet::compile(modules)?;
    let mut output = String::new();

    for path in paths {
        output.push_str(&format!("{}:\n", path));

        let names = matchers.lookup(path);
        if names.is_empty() {
            output.push_str("  (no maintainers found)\n");
            continue;
        }

        for name in names {
            output.push_str(&format!("  {}\n", name));
            if let Some(record) = modules.get(name) {
                for mail in &record.mails {
                    output.push_str(&format!("    M: {}\n", mail));
                }
                for list in &record.relevant_mails {
                    output.push_str(&format!("    L: {}\n", list));
                }
                if let Some(status) = &record.status {
                    output.push_str(&format!("    S: {}\n", status));
                }
            }
        }
    }

    Ok(output)
}
