use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sprite_importer::{AssetStore, ImportOutcome, ImportSettings, TemplateStore};

#[derive(Parser, Debug)]
#[command(name = "sprite-importer", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Import one texture and print its resolved settings and slices as JSON.
    Slice(SliceArgs),
    /// Write default import settings into a folder.
    Init(InitArgs),
    /// Manage settings templates.
    Template(TemplateArgs),
}

#[derive(Parser, Debug)]
struct SliceArgs {
    /// Input texture.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Settings JSON (defaults to the texture folder's settings file).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Pivot map image (defaults to the `_pivotmap` sibling of the texture).
    #[arg(long)]
    pivot_map: Option<PathBuf>,

    /// Output JSON path (stdout when omitted).
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct InitArgs {
    /// Folder that will own the settings.
    #[arg(long)]
    folder: PathBuf,

    /// Replace existing settings.
    #[arg(long, default_value_t = false)]
    force: bool,
}

#[derive(Parser, Debug)]
struct TemplateArgs {
    /// Template directory.
    #[arg(long)]
    dir: PathBuf,

    #[command(subcommand)]
    cmd: TemplateCommand,
}

#[derive(Subcommand, Debug)]
enum TemplateCommand {
    /// List template names.
    List,
    /// Save a settings file as a named template.
    Save {
        /// Template name.
        #[arg(long)]
        name: String,
        /// Settings JSON to copy.
        #[arg(long)]
        from: PathBuf,
        /// Replace an existing template.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
    /// Copy a template into a folder as its import settings.
    Apply {
        /// Template name.
        #[arg(long)]
        name: String,
        /// Destination folder.
        #[arg(long)]
        folder: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Slice(args) => cmd_slice(args),
        Command::Init(args) => cmd_init(args),
        Command::Template(args) => cmd_template(args),
    }
}

fn split_texture_path(path: &Path) -> anyhow::Result<(&Path, String)> {
    let folder = path.parent().unwrap_or_else(|| Path::new("."));
    let file = path
        .file_name()
        .and_then(|f| f.to_str())
        .with_context(|| format!("texture path '{}' has no UTF-8 file name", path.display()))?;
    Ok((folder, file.to_string()))
}

fn cmd_slice(args: SliceArgs) -> anyhow::Result<()> {
    let (folder, file) = split_texture_path(&args.in_path)?;
    let store = AssetStore::new(folder);

    let settings = match &args.settings {
        Some(path) => ImportSettings::from_path(path)?,
        None => store.load_settings_for(&file)?.with_context(|| {
            format!(
                "no import settings beside '{}' (run `sprite-importer init`)",
                args.in_path.display()
            )
        })?,
    };

    let image = store.load_texture(&file)?;
    let pivot_map = match &args.pivot_map {
        Some(path) => Some(sprite_importer::load_bitmap(path)?),
        None if settings.pivot_map_enabled => store.load_pivot_map_for(&file)?,
        None => None,
    };

    let outcome = sprite_importer::import_texture(&file, &image, pivot_map.as_ref(), &settings)?;
    let Some(outcome) = outcome else {
        eprintln!("import settings are disabled; nothing to do");
        return Ok(());
    };
    write_outcome(&outcome, args.out.as_deref())
}

fn write_outcome(outcome: &ImportOutcome, out: Option<&Path>) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(outcome).context("serialize import outcome")?;
    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, json)
                .with_context(|| format!("write outcome '{}'", path.display()))?;
            let count = outcome.slices.as_ref().map_or(0, Vec::len);
            eprintln!("wrote {} ({count} slices)", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_init(args: InitArgs) -> anyhow::Result<()> {
    let store = AssetStore::new(&args.folder);
    let path = store.init_settings(".", args.force)?;
    eprintln!("wrote {}", path.display());
    Ok(())
}

fn cmd_template(args: TemplateArgs) -> anyhow::Result<()> {
    let templates = TemplateStore::new(&args.dir);
    match args.cmd {
        TemplateCommand::List => {
            for name in templates.list()? {
                println!("{name}");
            }
        }
        TemplateCommand::Save { name, from, force } => {
            let settings = ImportSettings::from_path(&from)?;
            let path = templates.save(&name, &settings, force)?;
            eprintln!("wrote {}", path.display());
        }
        TemplateCommand::Apply { name, folder } => {
            let path = templates.apply_to_folder(&name, &folder)?;
            eprintln!("wrote {}", path.display());
        }
    }
    Ok(())
}
