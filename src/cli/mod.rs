// CLI module for command-line interface

pub mod stamp;
pub mod update;

use std::path::PathBuf;
use clap::{Parser, Subcommand};
use crate::utils::error::Result;

use self::stamp::{StampCommand, StampTarget};
use self::update::UpdateCommand;

/// Main CLI structure
#[derive(Parser)]
#[command(name = "verstamp")]
#[command(about = "Stamp a release version into CMakeLists.txt and version.h")]
#[command(long_about = r#"verstamp rewrites the version fields of a CMake project and its generated
version header as part of a release pipeline.

It updates:
  • set(LEXER_LIB_VERSION ...) and set(LEXER_LIB_SOVERSION ...) in CMakeLists.txt
  • the VERSION of the project(...) declaration
  • #define LEXER_VERSION and the MAJOR/MINOR/REVISION enum constants in version.h

Every other line is left exactly as it was.

Examples:
  NEXT_RELEASE_TAG=v1.2.3 verstamp update   Stamp the tag from the environment
  verstamp update --tag v1.2.3 --root ../lexer
  verstamp header 1.2.3 include/lexer/version.h"#)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// All available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Stamp the next release tag into the manifest and the header
    #[command(long_about = r#"Stamp the next release tag into the manifest and the header.

The tag is read from --tag or from the NEXT_RELEASE_TAG environment variable
(the variable name can be changed in release.toml). It must look like v1.2.3.

Paths default to CMakeLists.txt and include/lexer/version.h under the work
directory and can be overridden in release.toml:

  [release]
  manifest = "CMakeLists.txt"
  header = "include/lexer/version.h"
  tag_variable = "NEXT_RELEASE_TAG"

Examples:
  NEXT_RELEASE_TAG=v2.0.0 verstamp update
  verstamp update --tag v2.0.0 --json"#)]
    Update {
        /// Release tag to stamp (default: value of the configured tag variable)
        #[arg(long)]
        tag: Option<String>,

        /// Project work directory (default: current directory)
        #[arg(long, env = "VERSTAMP_ROOT")]
        root: Option<PathBuf>,

        /// Build manifest to update, relative to the work directory
        #[arg(long)]
        manifest: Option<PathBuf>,

        /// Version header to update, relative to the work directory
        #[arg(long)]
        header: Option<PathBuf>,

        /// Output JSON instead of human-readable text
        #[arg(long)]
        json: bool,
    },

    /// Stamp a version into a single build manifest
    Manifest {
        /// Version in MAJOR.MINOR.PATCH form
        version: String,
        /// Path to the manifest (e.g. CMakeLists.txt)
        path: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Stamp a version into a single version header
    Header {
        /// Version in MAJOR.MINOR.PATCH form
        version: String,
        /// Path to the header (e.g. include/lexer/version.h)
        path: PathBuf,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// CLI command dispatcher
pub struct CliDispatcher;

impl CliDispatcher {
    /// Execute a CLI command
    pub fn execute(command: Commands) -> Result<()> {
        match command {
            Commands::Update { tag, root, manifest, header, json } => {
                let cmd = UpdateCommand {
                    tag,
                    root,
                    manifest,
                    header,
                    json,
                };
                cmd.run()
            }

            Commands::Manifest { version, path, json } => {
                let cmd = StampCommand {
                    target: StampTarget::Manifest,
                    version,
                    path,
                    json,
                };
                cmd.run()
            }

            Commands::Header { version, path, json } => {
                let cmd = StampCommand {
                    target: StampTarget::Header,
                    version,
                    path,
                    json,
                };
                cmd.run()
            }
        }
    }
}
