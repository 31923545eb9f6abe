use clap::{Parser, Subcommand};
use proverb_gen::{config, generate, logging, output, scaffold, scan};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "proverb-gen")]
#[command(about = "Collect HTML proverb snippets into one grouped Markdown document")]
#[command(long_about = "\
Collect HTML proverb snippets into one grouped Markdown document

Your filesystem is the data source. Folders become groups, filenames carry
titles and tags, and images attach to the snippet with the same title.

Project structure:

  ./
  ├── proverbs.toml                       # Config (optional)
  ├── _proverb_template.md                # Template for `new`
  ├── proverbs/
  │   ├── code/                           # Group
  │   │   ├── Clear is better than clever|simplicity,readability.html
  │   │   └── Errors are values|errors.html
  │   └── life/
  │       └── Measure twice, cut once.html   # No tags
  └── images/
      └── Clear is better than clever|A squinting gopher.png

Snippet filenames: <title>[|<tag>,<tag>,...].html
Image filenames:   <title>[|<alt text>].<ext>

Run 'proverb-gen gen-config' to print a documented proverbs.toml.")]
#[command(version)]
struct Cli {
    /// Project root
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    /// Debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Args)]
struct NewArgs {
    /// Title for the new snippet [default: scaffold.title, "Some Title"]
    #[arg(long)]
    title: Option<String>,

    /// Comma separated tags [default: scaffold.tags, "general,code-design"]
    #[arg(long)]
    tags: Option<String>,

    /// Template file [default: <root>/<template_file>]
    #[arg(long)]
    template: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Render the grouped document to stdout
    Generate,
    /// Scaffold a new snippet from the project template
    New(NewArgs),
    /// Print the scanned snippets and images as JSON
    Scan,
    /// Validate the project and print an inventory
    Check,
    /// Print a stock proverbs.toml with all options documented
    GenConfig,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            let message = e.to_string();
            let message = message.strip_prefix("error: ").unwrap_or(&message);
            eprint!("ERROR: {message}");
            return ExitCode::FAILURE;
        }
        // --help and --version
        Err(e) => e.exit(),
    };

    logging::init_logger(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let load_config = || config::load_config(&cli.root);

    match cli.command {
        Command::Generate => {
            let site_config = load_config()?;
            let manifest = scan::scan(&cli.root, &site_config)?;
            let document = generate::render_document(&manifest.groups, &site_config.document)?;
            write_stdout(&document)?;
        }
        Command::New(args) => {
            let site_config = load_config()?;
            let template_path = args
                .template
                .unwrap_or_else(|| cli.root.join(&site_config.template_file));
            let title = args.title.unwrap_or(site_config.scaffold.title);
            let tags = scaffold::split_tags(
                args.tags.as_deref().unwrap_or(&site_config.scaffold.tags),
            );
            let rendered = scaffold::scaffold(&template_path, &title, &tags)?;
            write_stdout(&rendered)?;
        }
        Command::Scan => {
            let site_config = load_config()?;
            let manifest = scan::scan(&cli.root, &site_config)?;
            let json = serde_json::to_string_pretty(&manifest)?;
            write_stdout(&format!("{json}\n"))?;
        }
        Command::Check => {
            let site_config = load_config()?;
            let manifest = scan::scan(&cli.root, &site_config)?;
            output::print_check_output(&manifest);
            println!("==> {} snippets are valid", manifest.snippet_count());
        }
        Command::GenConfig => {
            write_stdout(config::stock_config_toml())?;
        }
    }

    Ok(())
}

/// The whole product is rendered before anything is written, so a failed run
/// never leaves a partial document on stdout.
fn write_stdout(content: &str) -> std::io::Result<()> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    stdout.flush()
}
