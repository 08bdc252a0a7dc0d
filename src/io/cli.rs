//! Command-line interface for batch reconstruction of capture files

use std::path::{Path, PathBuf};

use clap::Parser;

use crate::io::configuration::{DATA_EXTENSION, PREVIEW_SUFFIX, load_params};
use crate::io::error::{ReconstructionError, Result};
use crate::io::preview::export_preview_png;
use crate::io::progress::ProgressManager;
use crate::reconstruct::executor::Reconstructor;
use crate::scan::params::ReconstructionParams;

#[derive(Debug, Parser)]
#[command(name = "scanstitch")]
#[command(
    author,
    version,
    about = "Reassemble raster-scanned tile captures into composite images"
)]
/// Command-line arguments for the reconstruction tool
pub struct Cli {
    /// Input capture file or directory of whitespace-delimited .txt captures
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// JSON file holding the scan parameters
    #[arg(short, long, value_name = "FILE")]
    pub params: PathBuf,

    /// Directory for reconstructed artifacts
    #[arg(short, long, default_value = "output")]
    pub output: PathBuf,

    /// Also export an 8-bit preview PNG alongside the artifacts
    #[arg(long)]
    pub preview: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch reconstruction of capture files with progress tracking
#[derive(Debug)]
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if the parameter file is unusable, target
    /// validation fails, or any file fails to reconstruct.
    pub fn process(&mut self) -> Result<()> {
        let params = load_params(&self.cli.params)?;
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file, &params)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let is_capture =
            |path: &Path| path.extension().and_then(|s| s.to_str()) == Some(DATA_EXTENSION);

        if self.cli.target.is_file() {
            if is_capture(&self.cli.target) {
                Ok(vec![self.cli.target.clone()])
            } else {
                Err(ReconstructionError::FileSystem {
                    path: self.cli.target.clone(),
                    operation: "validate target",
                    source: std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        format!("target file must be a .{DATA_EXTENSION} capture"),
                    ),
                })
            }
        } else if self.cli.target.is_dir() {
            let scan_failed = |e| ReconstructionError::FileSystem {
                path: self.cli.target.clone(),
                operation: "scan target directory",
                source: e,
            };

            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target).map_err(scan_failed)? {
                let path = entry.map_err(scan_failed)?.path();
                if is_capture(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(ReconstructionError::FileSystem {
                path: self.cli.target.clone(),
                operation: "validate target",
                source: std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "target must be a capture file or directory",
                ),
            })
        }
    }

    fn process_file(&self, input_path: &Path, params: &ReconstructionParams) -> Result<()> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let reconstructor = Reconstructor::from_data_file(input_path, &self.cli.output)?;
        let output = reconstructor.reconstruct(params)?;

        if self.cli.preview {
            let preview_path = self.get_preview_path(input_path);
            export_preview_png(&output.composition.canvas, &preview_path)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }

    fn get_preview_path(&self, input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        self.cli
            .output
            .join(format!("{}{PREVIEW_SUFFIX}.png", stem.to_string_lossy()))
    }
}
