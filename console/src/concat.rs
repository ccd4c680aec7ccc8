use std::path::{
    Path,
    PathBuf,
};

use anyhow::ensure;
use clap::Args;
use console::style;
use countmat::prelude::*;
use log::info;

use crate::utils::{
    expand_wildcards,
    init_pbar,
    validate_input,
    validate_output,
};
use crate::PipelineCommand;

/// Glob pattern for quantifier outputs inside an input directory.
const QUANT_PATTERN: &str = "*_quant.tsv";

#[derive(Args, Debug, Clone)]
pub(crate) struct ConcatArgs {
    #[arg(
        short = 'i',
        long = "input-dir",
        conflicts_with = "paths",
        help = "Directory with quantification output files."
    )]
    input_dir: Option<PathBuf>,

    #[arg(help = "Explicit count file paths; wildcards are allowed.")]
    paths: Vec<String>,

    #[arg(
        short,
        long,
        required = true,
        help = "Output file path for the final count matrix."
    )]
    output: PathBuf,
}

impl PipelineCommand for ConcatArgs {
    fn run(&self) -> anyhow::Result<()> {
        let files = match &self.input_dir {
            Some(dir) => discover_count_files(dir)?,
            None => {
                expand_wildcards(&self.paths)
                    .into_iter()
                    .filter(|path| !is_summary_file(path))
                    .collect()
            },
        };
        ensure!(!files.is_empty(), "No quantification output files found");
        validate_output(&self.output)?;

        info!("Reading {} count files", files.len());
        let progress_bar = init_pbar(files.len())?;

        let mut tables = Vec::with_capacity(files.len());
        for path in &files {
            tables.push(SampleCountTable::from_path(path)?);
            progress_bar.inc(1);
        }
        progress_bar.finish_and_clear();

        let matrix = MergedCountMatrix::merge(&tables)?;
        write_matrix(&matrix, &self.output)?;

        println!(
            "Merged {} samples ({} genes) into {}",
            style(matrix.n_samples()).green(),
            style(matrix.n_genes()).green(),
            self.output.display()
        );
        Ok(())
    }
}

/// Finds quantifier outputs under `dir`, skipping run summaries. Sorted for
/// a deterministic column order.
fn discover_count_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    validate_input(dir)?;

    let pattern = dir.join(QUANT_PATTERN);
    let mut files = glob::glob(&pattern.to_string_lossy())?
        .filter_map(std::result::Result::ok)
        .filter(|path| !is_summary_file(path))
        .collect::<Vec<_>>();
    files.sort();

    Ok(files)
}
