//! Command-line interface for stylizing images and building style profiles

use crate::analysis::profile::{ImageAnalysis, StyleProfile, aggregate};
use crate::color::Rgb;
use crate::io::configuration::{DEFAULT_PROFILE_KEY, DEFAULT_PROFILE_NAME, OUTPUT_SUFFIX};
use crate::io::error::{Result, StyleError};
use crate::io::image::{load_pixel_buffer, save_pixel_buffer};
use crate::io::progress::ProgressManager;
use crate::io::store::{DirectoryStore, load_profile, save_profile};
use crate::pipeline::composite::stylize_with_rng;
use crate::pipeline::params::{MotifPack, ParameterSet};
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::{Path, PathBuf};
use tracing::info;

const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

#[derive(Parser)]
#[command(name = "inkposter")]
#[command(
    author,
    version,
    about = "Turn photographs into posterized, inked poster illustrations"
)]
/// Command-line arguments for the stylization tool
pub struct Cli {
    /// Operation to run
    #[command(subcommand)]
    pub command: Command,

    /// Random seed for motif placement and palette clustering
    #[arg(short, long, global = true)]
    pub seed: Option<u64>,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available operations
#[derive(Subcommand)]
pub enum Command {
    /// Stylize an image or every image in a directory
    Stylize(StylizeArgs),
    /// Build a style profile from reference images
    Analyze(AnalyzeArgs),
}

/// Arguments of the `stylize` subcommand
#[derive(Args)]
// Each flag toggles an independent layer of the recipe
#[allow(clippy::struct_excessive_bools)]
pub struct StylizeArgs {
    /// Input image file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Output file (single input only; defaults to <input>_poster.png)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Style profile JSON whose suggested parameters and palette are used
    #[arg(short, long)]
    pub profile: Option<PathBuf>,

    /// Profile directory to read the active profile from
    #[arg(long, conflicts_with = "profile")]
    pub store: Option<PathBuf>,

    /// Style intensity in [0, 1]
    #[arg(long)]
    pub intensity: Option<f64>,

    /// Outline weight in [0.3, 1]
    #[arg(long)]
    pub outline: Option<f64>,

    /// Saturation boost in [0, 0.5]
    #[arg(long)]
    pub saturation: Option<f64>,

    /// Halftone density in [0, 0.4]
    #[arg(long)]
    pub halftone: Option<f64>,

    /// Disable the halftone overlay
    #[arg(long)]
    pub no_halftone: bool,

    /// Sunburst strength in [0, 1]
    #[arg(long)]
    pub burst: Option<f64>,

    /// Motif pack: none, waves, flames or psychedelia
    #[arg(long)]
    pub motif: Option<MotifPack>,

    /// Keep the background transparent
    #[arg(long)]
    pub transparent: bool,

    /// Remap the result onto the profile palette
    #[arg(long)]
    pub palette_transfer: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

/// Arguments of the `analyze` subcommand
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Reference images
    #[arg(value_name = "REFERENCE", required = true)]
    pub references: Vec<PathBuf>,

    /// Profile name
    #[arg(short, long, default_value = DEFAULT_PROFILE_NAME)]
    pub name: String,

    /// JSON file to write the profile to
    #[arg(short, long, default_value = "style-profile.json")]
    pub output: PathBuf,

    /// Profile directory to save the profile into as the active profile
    #[arg(long)]
    pub store: Option<PathBuf>,
}

impl StylizeArgs {
    /// Resolve the parameter set: profile suggestion (or defaults) overridden by flags
    pub fn parameters(&self, profile: Option<&StyleProfile>) -> ParameterSet {
        let mut params = profile.map_or_else(ParameterSet::default, |p| p.suggested);
        if let Some(v) = self.intensity {
            params.style_intensity = v;
        }
        if let Some(v) = self.outline {
            params.outline_weight = v;
        }
        if let Some(v) = self.saturation {
            params.saturation_boost = v;
        }
        if let Some(v) = self.halftone {
            params.halftone_density = v;
        }
        if self.no_halftone {
            params.halftone_enabled = false;
        }
        if let Some(v) = self.burst {
            params.burst_strength = v;
        }
        if let Some(pack) = self.motif {
            params.motif_pack = pack;
        }
        if self.transparent {
            params.transparent_background = true;
        }
        if self.palette_transfer {
            params.apply_palette_transfer = true;
        }
        params.clamped()
    }
}

/// Run the parsed command line
///
/// # Errors
///
/// Returns an error if any input cannot be read, processed or written
pub fn run(cli: &Cli) -> Result<()> {
    let mut rng = cli
        .seed
        .map_or_else(|| StdRng::from_rng(&mut rand::rng()), StdRng::seed_from_u64);
    match &cli.command {
        Command::Stylize(args) => FileProcessor::new(args, cli.quiet).process(&mut rng),
        Command::Analyze(args) => build_profile(args, cli.quiet, &mut rng),
    }
}

/// Orchestrates stylization of one file or a directory of files
pub struct FileProcessor<'a> {
    args: &'a StylizeArgs,
    quiet: bool,
}

impl<'a> FileProcessor<'a> {
    /// Processor for the given arguments
    pub const fn new(args: &'a StylizeArgs, quiet: bool) -> Self {
        Self { args, quiet }
    }

    /// Stylize every selected file
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, profile loading or file processing fails
    pub fn process(&self, rng: &mut StdRng) -> Result<()> {
        let profile = self.load_profile()?;
        let params = self.args.parameters(profile.as_ref());
        let palette: Option<&[Rgb]> = profile.as_ref().map(|p| p.palette.as_slice());
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        let progress = (!self.quiet).then(|| ProgressManager::new("stylize", files.len()));
        for file in &files {
            if let Some(ref pm) = progress {
                pm.start_file(file);
            }
            let output_path = match &self.args.output {
                Some(output) if self.args.target.is_file() => output.clone(),
                _ => Self::get_output_path(file),
            };
            let source = load_pixel_buffer(file)?;
            let stylized = stylize_with_rng(&source, &params, palette, rng)?;
            save_pixel_buffer(&stylized, &output_path)?;
            info!(input = %file.display(), output = %output_path.display(), "stylized");
            if let Some(ref pm) = progress {
                pm.complete_file();
            }
        }

        if let Some(ref pm) = progress {
            pm.finish();
        }
        Ok(())
    }

    fn load_profile(&self) -> Result<Option<StyleProfile>> {
        if let Some(path) = &self.args.profile {
            let text = std::fs::read_to_string(path).map_err(|e| StyleError::FileSystem {
                path: path.clone(),
                operation: "read profile",
                source: e,
            })?;
            return StyleProfile::from_json(&text).map(Some);
        }
        if let Some(dir) = &self.args.store {
            return load_profile(&DirectoryStore::new(dir), DEFAULT_PROFILE_KEY);
        }
        Ok(None)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.args.target;
        if target.is_file() {
            if !is_image(target) {
                return Err(StyleError::UnsupportedInput {
                    path: target.clone(),
                    reason: "target file must be a PNG or JPEG image".to_string(),
                });
            }
            return Ok(vec![target.clone()]);
        }
        if !target.is_dir() {
            return Err(StyleError::UnsupportedInput {
                path: target.clone(),
                reason: "target must be an image file or directory".to_string(),
            });
        }

        let mut files = Vec::new();
        let entries = std::fs::read_dir(target).map_err(|e| StyleError::FileSystem {
            path: target.clone(),
            operation: "read directory",
            source: e,
        })?;
        for entry in entries {
            let path = entry
                .map_err(|e| StyleError::FileSystem {
                    path: target.clone(),
                    operation: "read directory entry",
                    source: e,
                })?
                .path();
            if is_image(&path) && !is_output(&path) && self.should_process_file(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if self.args.no_skip {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for progress messages
            #[allow(clippy::print_stderr)]
            if !self.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    /// `<stem>_poster.png` next to the input
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{OUTPUT_SUFFIX}.png", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

/// Analyze every reference, then save the profile to a file and optionally a store
///
/// # Errors
///
/// Returns an error if a reference cannot be loaded or the profile cannot be written
pub fn build_profile(args: &AnalyzeArgs, quiet: bool, rng: &mut StdRng) -> Result<()> {
    let progress = (!quiet).then(|| ProgressManager::new("analyze", args.references.len()));

    let mut analyses = Vec::with_capacity(args.references.len());
    for path in &args.references {
        if let Some(ref pm) = progress {
            pm.start_file(path);
        }
        let reference = load_pixel_buffer(path)?;
        analyses.push(ImageAnalysis::of(&reference)?);
        if let Some(ref pm) = progress {
            pm.complete_file();
        }
    }
    if let Some(ref pm) = progress {
        pm.finish();
    }

    let profile = aggregate(&args.name, analyses, rng)?;
    std::fs::write(&args.output, profile.to_json()?).map_err(|e| StyleError::FileSystem {
        path: args.output.clone(),
        operation: "write profile",
        source: e,
    })?;

    if let Some(dir) = &args.store {
        save_profile(&mut DirectoryStore::new(dir), DEFAULT_PROFILE_KEY, &profile)?;
    }
    Ok(())
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
}

fn is_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}
