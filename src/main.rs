use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use shardline::{init_tracing, restore_file, RestoreConfig, RestoreFlag, SQLType};
use std::path::PathBuf;
use strum::IntoEnumIterator;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Restore a JSON statement tree to SQL
    Restore {
        file: PathBuf,
        /// Extra rendering flag, may be repeated
        #[arg(short, long = "flag", value_enum)]
        flags: Vec<FlagArg>,
        /// Start from an empty flag set instead of the configured one
        #[arg(long)]
        raw: bool,
    },
    /// List statement kinds
    Kinds,
}

#[derive(Clone, Copy, ValueEnum)]
enum FlagArg {
    NameBackQuotes,
    StringSingleQuotes,
    StringDoubleQuotes,
    StringEscapeBackslash,
    MaskLiterals,
}

impl From<FlagArg> for RestoreFlag {
    fn from(value: FlagArg) -> Self {
        match value {
            FlagArg::NameBackQuotes => RestoreFlag::NAME_BACK_QUOTES,
            FlagArg::StringSingleQuotes => RestoreFlag::STRING_SINGLE_QUOTES,
            FlagArg::StringDoubleQuotes => RestoreFlag::STRING_DOUBLE_QUOTES,
            FlagArg::StringEscapeBackslash => RestoreFlag::STRING_ESCAPE_BACKSLASH,
            FlagArg::MaskLiterals => RestoreFlag::MASK_LITERALS,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => RestoreConfig::from_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => RestoreConfig::default(),
    };
    init_tracing(&config.log_level);

    match cli.command {
        Commands::Restore { file, flags, raw } => {
            if raw {
                config.flags = RestoreFlag::empty();
            }
            for f in flags {
                config.apply_flag(RestoreFlag::from(f));
            }
            config.validate()?;
            let flag = config.flags;
            info!("Restoring {} with flags {:?}", file.display(), flag);

            let restored = restore_file(&file, flag)
                .with_context(|| format!("failed to restore {}", file.display()))?;
            println!("{}", restored.sql);
            if !restored.args.is_empty() {
                println!("-- params: {}", serde_json::to_string(&restored.args)?);
            }
        }
        Commands::Kinds => {
            for kind in SQLType::iter() {
                println!("{}", kind);
            }
        }
    }
    Ok(())
}
