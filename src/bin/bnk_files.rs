use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use bnk_tools::{
    commands::{info::print_info, repack::repack_blobs, unpack::unpack_blobs},
    soundbank::load_soundbank_file,
    VERBOSE,
};

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a summary of the SoundBank's chunks
    Info {
        /// Path to the source .bnk file
        bnk_path: PathBuf,
    },
    /// Unpack a .bnk into separate .wem files
    Unpack {
        /// Path to the source .bnk file
        bnk_path: PathBuf,
        /// Path to the folder to output the extracted .wem files
        output_folder: PathBuf,
    },
    /// Repack a set of .wem files into a .bnk file
    Repack {
        /// Path to the template .bnk; blobs are replaced using this bank as a source
        bnk_path: PathBuf,
        /// Path to write the combined .bnk file to
        output_file: PathBuf,
        /// The folder to find replacement .wem files in, named by blob position (e.g. 075.wem)
        target_folder: PathBuf,
    },
}

/// A CLI tool to inspect, unpack, and repack Wwise SoundBank files.
#[derive(Parser, Debug)]
#[command(name = "bnk_files")]
#[clap(version)]
struct Cli {
    /// Verbose printing of per-blob progress
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    VERBOSE.set(cli.verbose).unwrap();

    match cli.command {
        Command::Info { bnk_path } => {
            let bank = load_soundbank_file(&bnk_path)?;
            print_info(&bank).context("Info command failed")?;
        }
        Command::Unpack {
            bnk_path,
            output_folder,
        } => {
            let bank = load_soundbank_file(&bnk_path)?;
            unpack_blobs(&bank, &output_folder).context("Unpack command failed")?;
        }
        Command::Repack {
            bnk_path,
            output_file,
            target_folder,
        } => {
            let mut bank = load_soundbank_file(&bnk_path)?;
            repack_blobs(&mut bank, &target_folder, &output_file)
                .context("Repack command failed")?;
        }
    }

    Ok(())
}
