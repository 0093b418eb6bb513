use crate::commands::validators;
use crate::core::formatter::OutputFormat;
use clap::Args;

#[derive(Debug, Args)]
pub struct OutputArgs {
    #[arg(
        short = 'o',
        long = "output",
        help = "Output format: text or json",
        default_value_t = OutputFormat::Text,
        value_enum,
        ignore_case = true
    )]
    pub output: OutputFormat,
}

#[derive(Debug, Args)]
pub struct SourceArgs {
    #[arg(
        short = 'f',
        long = "collection",
        help = "Path to collection file",
        value_parser = validators::validate_path_exists
    )]
    pub collection: String,
}

#[derive(Debug, Args)]
pub struct EnvArgs {
    #[arg(
        short = 'e',
        long = "environment",
        alias = "env",
        help = "Path to environment file",
        value_parser = validators::validate_path_exists
    )]
    pub environment: Option<String>,

    #[arg(
        short = 'v',
        long = "variable",
        value_name = "NAME=VALUE",
        help = "Override a variable (applied after the environment)",
        value_parser = validators::validate_variable
    )]
    pub variable: Vec<String>,
}
