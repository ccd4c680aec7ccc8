mod concat;
mod genemap;
mod utils;

use clap::{
    Parser,
    Subcommand,
};
use concat::ConcatArgs;
use genemap::GenemapArgs;
use utils::UtilsArgs;
use wild::ArgsOs;

pub(crate) trait PipelineCommand {
    fn run(&self) -> anyhow::Result<()>;
}

#[derive(Parser, Debug)]
#[command(
    version = env!("CARGO_PKG_VERSION"),
    about = env!("CARGO_PKG_DESCRIPTION"),
    long_about = None,)]
struct Cli {
    #[command(subcommand)]
    command: MainMenu,
}

#[derive(Subcommand, Debug)]
enum MainMenu {
    #[command(
        about = "Merge per-sample quantification outputs into one \
                 gene-by-sample count matrix"
    )]
    Concat {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  ConcatArgs,
    },

    #[command(
        about = "Extract Ensembl gene IDs and gene names from a GTF \
                 annotation"
    )]
    Genemap {
        #[clap(flatten)]
        utils: UtilsArgs,
        #[clap(flatten)]
        args:  GenemapArgs,
    },
}

fn main() -> anyhow::Result<()> {
    let args: ArgsOs = wild::args_os();
    let cli = Cli::parse_from(args);

    match cli.command {
        MainMenu::Concat { utils, args } => {
            utils.setup()?;
            args.run()?;
        },
        MainMenu::Genemap { utils, args } => {
            utils.setup()?;
            args.run()?;
        },
    }
    Ok(())
}
