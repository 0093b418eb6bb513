use crate::client::{DuffClient, DuffConfig};
use crate::commands::shared::{EnvArgs, OutputArgs, SourceArgs};
use crate::core::formatter::get_formatter;
use clap::{Args, Subcommand};

#[derive(Args)]
#[command(name = "env")]
#[command(about = "Inspect variables")]
pub struct EnvCommand {
    #[command(subcommand)]
    pub command: EnvSubcommand,
}

#[derive(Subcommand)]
pub enum EnvSubcommand {
    #[command(about = "List variables in resolution order")]
    List(ListArgs),
}

#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub env_args: EnvArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

pub fn execute_list(args: &ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = DuffConfig {
        collection_path: args.source.collection.clone(),
        environment_path: args.env_args.environment.clone(),
        request_name: None,
        variables: args.env_args.variable.clone(),
        output_format: args.output.output,
    };
    let client = DuffClient::load(config)?;
    let variables = client.list_variables()?;

    let formatter = get_formatter(&args.output.output);
    print!(
        "{}",
        formatter.format_list(&variables, "Variables:", "No variables defined")
    );

    Ok(())
}
