use std::path::{
    Path,
    PathBuf,
};

use anyhow::ensure;
use clap::Args;
use glob::glob;
use indicatif::{
    ProgressBar,
    ProgressStyle,
};
use log::LevelFilter;

#[derive(Args, Debug, Clone)]
pub(crate) struct UtilsArgs {
    #[arg(short, long, default_value_t = false, help = "Verbose output.")]
    pub verbose: bool,
}

impl UtilsArgs {
    pub fn setup(&self) -> anyhow::Result<()> {
        let level = if self.verbose {
            LevelFilter::Debug
        }
        else {
            LevelFilter::Info
        };
        pretty_env_logger::formatted_builder()
            .filter_level(level)
            .try_init()?;
        Ok(())
    }
}

pub(crate) fn expand_wildcards(paths: &[String]) -> Vec<PathBuf> {
    let mut expanded_paths = Vec::new();

    for path in paths {
        if path.contains('*') || path.contains('?') {
            match glob(path) {
                Ok(matches) => {
                    for entry in matches.filter_map(Result::ok) {
                        expanded_paths.push(entry);
                    }
                },
                Err(e) => {
                    eprintln!("Error processing wildcard '{}': {}", path, e)
                },
            }
        }
        else {
            expanded_paths.push(PathBuf::from(path));
        }
    }

    expanded_paths
}

pub(crate) fn init_pbar(total: usize) -> anyhow::Result<ProgressBar> {
    let progress_bar = ProgressBar::new(total as u64);
    progress_bar.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos:>5.green}/{len:5} {msg}")?
            .progress_chars("#>-"),
    );
    progress_bar.set_message("Processing...");
    Ok(progress_bar)
}

pub(crate) fn validate_input(path: &Path) -> anyhow::Result<()> {
    ensure!(
        path.exists(),
        "Input path '{}' does not exist",
        path.display()
    );
    Ok(())
}

pub(crate) fn validate_output(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        ensure!(
            parent.as_os_str().is_empty() || parent.exists(),
            "Output directory '{}' does not exist",
            parent.display()
        );
    }
    Ok(())
}
