use std::path::PathBuf;

use clap::Args;
use console::style;
use countmat::prelude::*;
use log::info;

use crate::utils::{
    validate_input,
    validate_output,
};
use crate::PipelineCommand;

#[derive(Args, Debug, Clone)]
pub(crate) struct GenemapArgs {
    #[arg(short = 'i', long, required = true, help = "Path to the GTF file.")]
    input: PathBuf,

    #[arg(
        short = 'o',
        long,
        required = true,
        help = "Output file for the gene ID and name mapping."
    )]
    output: PathBuf,
}

impl PipelineCommand for GenemapArgs {
    fn run(&self) -> anyhow::Result<()> {
        validate_input(&self.input)?;
        validate_output(&self.output)?;

        let table = AnnotationTable::from_path(&self.input)?;
        info!("Extracted {} gene records", table.len());

        write_annotation_table(&table, &self.output)?;

        println!(
            "Parsing complete. Output written to {}",
            style(self.output.display()).green()
        );
        Ok(())
    }
}
