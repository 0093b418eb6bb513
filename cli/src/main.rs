use clap::{CommandFactory, Parser};

mod client;
mod commands;
mod core;
mod shell;

use commands::Commands;
use core::error::DuffError;
use core::exit_code::ExitCode;

#[derive(Parser)]
#[command(name = "duffman")]
#[command(about = "Pick a request from a Postman collection, resolve its variables and send it.")]
#[command(version = crate::core::version::app_version())]
struct Args {
    #[arg(short, long, help = "Enable debug logging", global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        match e.downcast_ref::<DuffError>() {
            Some(DuffError::Cancelled) => eprintln!("{}", shell::DEFAULT_STYLE.cancel_notice),
            _ => eprintln!("Error: {e}"),
        }
        if core::logger::Logger::is_debug() {
            let mut source = e.source();
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
        }
        let exit_code = ExitCode::from(&e);
        std::process::exit(exit_code.code());
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    crate::core::logger::Logger::init(args.debug);

    match args.command {
        Some(Commands::Env(env_command)) => match env_command.command {
            commands::env::EnvSubcommand::List(list_args) => commands::env::execute_list(&list_args),
        },
        Some(Commands::Request(request_command)) => match request_command.command {
            commands::request::RequestSubcommand::List(list_args) => {
                commands::request::execute_list(&list_args)
            }
            commands::request::RequestSubcommand::Show(show_args) => {
                commands::request::execute_show(&show_args)
            }
            commands::request::RequestSubcommand::Run(run_args) => {
                commands::request::execute_run(&run_args).await
            }
        },
        None => {
            Args::command().print_help()?;
            println!();
            Ok(())
        }
    }
}
