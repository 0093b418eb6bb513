use crate::client::{DuffClient, DuffConfig, ExecutionResult};
use crate::commands::shared::{EnvArgs, OutputArgs, SourceArgs};
use crate::commands::validators;
use crate::core::formatter::{get_formatter, OutputFormat};
use clap::{Args, Subcommand};
use serde::Serialize;

#[derive(Serialize)]
pub struct ExecutionResultView {
    pub result: ExecutionResult,
}

#[derive(Debug, Args)]
#[command(about = "Browse and send collection requests")]
pub struct RequestCommand {
    #[command(subcommand)]
    pub command: RequestSubcommand,
}

#[derive(Debug, Subcommand)]
pub enum RequestSubcommand {
    #[command(about = "List folders and requests of the collection")]
    List(ListArgs),
    #[command(about = "Show a request with its variables resolved")]
    Show(ShowArgs),
    #[command(about = "Send a request once")]
    Run(RunArgs),
}

#[derive(Debug, Args)]
pub struct RequestNameArgs {
    #[arg(
        short = 'n',
        long = "name",
        value_name = "FOLDER/REQUEST",
        help = "Path of the request; prompts interactively when omitted",
        value_parser = validators::validate_request_path
    )]
    pub name: Option<String>,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub request_name_args: RequestNameArgs,

    #[command(flatten)]
    pub env_args: EnvArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[command(flatten)]
    pub request_name_args: RequestNameArgs,

    #[command(flatten)]
    pub env_args: EnvArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

fn client_config(
    source: &SourceArgs,
    name: &RequestNameArgs,
    env_args: Option<&EnvArgs>,
    output: OutputFormat,
) -> DuffConfig {
    DuffConfig {
        collection_path: source.collection.clone(),
        environment_path: env_args.and_then(|e| e.environment.clone()),
        request_name: name.name.clone(),
        variables: env_args.map(|e| e.variable.clone()).unwrap_or_default(),
        output_format: output,
    }
}

pub fn execute_list(args: &ListArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = client_config(
        &args.source,
        &RequestNameArgs { name: None },
        None,
        args.output.output,
    );
    let client = DuffClient::load(config)?;
    let requests = client.list_requests();

    let formatter = get_formatter(&args.output.output);
    print!(
        "{}",
        formatter.format_list(&requests, "", "No requests found")
    );

    Ok(())
}

pub fn execute_show(args: &ShowArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = client_config(
        &args.source,
        &args.request_name_args,
        Some(&args.env_args),
        args.output.output,
    );
    let client = DuffClient::load(config)?;
    let details = client.details()?;

    let formatter = get_formatter(&args.output.output);
    print!("{}", formatter.format(&details));

    Ok(())
}

pub async fn execute_run(args: &RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = client_config(
        &args.source,
        &args.request_name_args,
        Some(&args.env_args),
        args.output.output,
    );
    let client = DuffClient::load(config)?;
    let result = client.run().await?;

    tracing::debug!(
        status = result.status,
        elapsed_ms = result.elapsed_ms,
        "response status"
    );
    for (key, value) in &result.response_headers {
        tracing::debug!("  {key}: {value}");
    }

    let formatter = get_formatter(&args.output.output);
    let view = ExecutionResultView { result };
    print!("{}", formatter.format(&view));

    Ok(())
}
