//! tprompts CLI - install reusable prompt bundles for AI coding assistants
//!
//! Usage: tprompts <COMMAND>
//!
//! Commands:
//!   register    Register a git or local prompt repository
//!   unregister  Remove a repository from the registry
//!   repos       List registered repositories
//!   list        List available prompts
//!   update      Pull git repositories
//!   version     Show, list or switch repository versions
//!   install     Install a prompt into the current directory
//!   remove      Remove the files a prompt installed

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};
use commands::install::{InstallArgs, RemoveArgs};
use commands::Context;

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbosity);

    let ctx = Context::load(cli.json)?;

    match cli.command {
        Commands::Register {
            source,
            name,
            default,
            version,
        } => commands::register::cmd_register(&ctx, source, name, default, version),
        Commands::Unregister {
            name,
            keep_files,
            yes,
        } => commands::register::cmd_unregister(&ctx, &name, keep_files, yes),
        Commands::Repos { verbose } => commands::repos::cmd_repos(&ctx, verbose),
        Commands::List {
            repository,
            verbose,
        } => commands::list::cmd_list(&ctx, repository.as_deref(), verbose),
        Commands::Update {
            repository,
            all,
            version,
        } => commands::update::cmd_update(&ctx, repository.as_deref(), all, version.as_deref()),
        Commands::Version {
            repository,
            list,
            checkout,
        } => commands::version::cmd_version(&ctx, &repository, list, checkout.as_deref()),
        Commands::Install {
            identifier,
            editor_arg,
            editor,
            force,
            dry_run,
            version,
        } => commands::install::cmd_install(
            &ctx,
            InstallArgs {
                identifier,
                editor: editor.or(editor_arg),
                force,
                dry_run,
                version,
            },
        ),
        Commands::Remove {
            identifier,
            editor_arg,
            editor,
            force,
            dry_run,
        } => commands::install::cmd_remove(
            &ctx,
            RemoveArgs {
                identifier,
                editor: editor.or(editor_arg),
                force,
                dry_run,
            },
        ),
    }
}
