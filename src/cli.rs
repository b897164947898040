use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, ValueEnum};
use linetrace::{ChainApproximation, ContourOptions, RetrievalMode};

/// Command line interface definition.
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Input image path
    pub input: PathBuf,
    /// Output SVG path (overwritten if it exists)
    pub output: PathBuf,
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
    #[command(flatten)]
    pub contour_options: ContourOptionsArgs,
}

/// Which traced borders end up in the SVG.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum RetrievalArg {
    Tree,
    List,
    External,
}

impl From<RetrievalArg> for RetrievalMode {
    fn from(value: RetrievalArg) -> Self {
        match value {
            RetrievalArg::Tree => RetrievalMode::Tree,
            RetrievalArg::List => RetrievalMode::List,
            RetrievalArg::External => RetrievalMode::External,
        }
    }
}

/// How boundary pixels are turned into path vertices.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ApproximationArg {
    Simple,
    None,
}

impl From<ApproximationArg> for ChainApproximation {
    fn from(value: ApproximationArg) -> Self {
        match value {
            ApproximationArg::Simple => ChainApproximation::Simple,
            ApproximationArg::None => ChainApproximation::None,
        }
    }
}

#[derive(Args, Debug)]
pub struct ContourOptionsArgs {
    /// Borders to keep: all with nesting, all flat, or only outermost outlines
    #[arg(long = "retrieval", value_enum, default_value_t = RetrievalArg::Tree)]
    pub retrieval: RetrievalArg,
    /// Collapse straight runs to their endpoints (simple) or keep every border pixel (none)
    #[arg(long = "approximation", value_enum, default_value_t = ApproximationArg::Simple)]
    pub approximation: ApproximationArg,
}

impl From<&ContourOptionsArgs> for ContourOptions {
    fn from(args: &ContourOptionsArgs) -> Self {
        ContourOptions::default()
            .with_retrieval(args.retrieval.into())
            .with_approximation(args.approximation.into())
    }
}
