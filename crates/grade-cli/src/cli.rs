//! CLI argument definitions for grade.

use clap::{Parser, Subcommand};
use grade_core::parse_score;

#[derive(Parser)]
#[command(name = "grade")]
#[command(about = "Letter grade from the average of three scores", version)]
#[command(
    args_conflicts_with_subcommands = true,
    subcommand_negates_reqs = true,
    arg_required_else_help = true
)]
pub struct Args {
    #[command(flatten)]
    pub grade: GradeArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(clap::Args)]
pub struct GradeArgs {
    /// Three scores to average (any finite number, e.g. 88 92.5 79)
    #[arg(
        value_name = "SCORE",
        required = true,
        num_args = 3,
        allow_negative_numbers = true,
        value_parser = parse_score
    )]
    pub scores: Vec<f64>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the grading scale
    Bands,
}
