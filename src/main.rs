//! LED animation project tool - CLI entry point.

use anyhow::{Result, bail};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::path::PathBuf;

use ledproj::color::{Hsv, hsv2rgb_raw};
use ledproj::config::{self, DumpOptions};

#[derive(Parser)]
#[command(name = "ledproj")]
#[command(about = "LED animation project configuration tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a project file as formatted JSON
    Show {
        /// Project file, JSON or YAML (default: auto-detect)
        file: Option<PathBuf>,
    },

    /// Convert a project file to formatted JSON
    Convert {
        /// Project file to convert
        file: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Spaces per indentation level
        #[arg(long, default_value_t = 4)]
        indent: usize,
    },

    /// Check that project files parse and normalize
    Check {
        /// Project files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Print blank example project file
    Example,

    /// Show the RGB value for an HSV color
    Color {
        /// Hue (0-255)
        hue: u8,

        /// Saturation (0-255)
        #[arg(short, long, default_value_t = 255)]
        saturation: u8,

        /// Value (0-255)
        #[arg(short, long, default_value_t = 255)]
        value: u8,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Show { file } => {
            let doc = match file {
                Some(path) => config::load(path)?,
                None => match config::load_default()? {
                    Some(doc) => doc,
                    None => bail!(
                        "no project file found; looked for ./project.json, ./project.yml, \
                         and ~/.config/ledproj/project.json"
                    ),
                },
            };
            println!("{}", config::dumps(&doc));
        }
        Commands::Convert {
            file,
            output,
            indent,
        } => {
            let doc = config::load(&file)?;
            let options = DumpOptions { indent };
            match output {
                Some(path) => config::dump_with(&doc, &path, &options)?,
                None => println!("{}", config::dumps_with(&doc, &options)),
            }
        }
        Commands::Check { files } => {
            let mut failed = 0;
            for file in &files {
                match config::load(file) {
                    Ok(_) => println!("{}: ok", file.display()),
                    Err(e) => {
                        failed += 1;
                        eprintln!("{}: {:#}", file.display(), anyhow::Error::from(e));
                    }
                }
            }
            if failed > 0 {
                bail!("{} file(s) failed to load", failed);
            }
        }
        Commands::Example => {
            print!("{}", config::example_project());
        }
        Commands::Color {
            hue,
            saturation,
            value,
        } => {
            let rgb = hsv2rgb_raw(Hsv::new(hue, saturation, value));
            println!("{} (r={} g={} b={})", rgb, rgb.r, rgb.g, rgb.b);
        }
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "ledproj", &mut std::io::stdout());
        }
    }

    Ok(())
}
