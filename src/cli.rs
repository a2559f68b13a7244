use clap::{Parser, Subcommand};

use tprompts::Editor;

/// tprompts - install reusable prompt bundles for AI coding assistants
#[derive(Parser, Debug)]
#[command(name = "tprompts")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format for CI
    #[arg(long, global = true)]
    pub json: bool,

    /// Log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a prompt repository (git URL or local directory)
    Register {
        /// Git URL or path to a local directory
        source: String,

        /// Name to register under (derived from the source by default)
        #[arg(short, long)]
        name: Option<String>,

        /// Make this the default repository
        #[arg(long)]
        default: bool,

        /// Branch, tag or commit to check out (git only)
        #[arg(long)]
        version: Option<String>,
    },

    /// Unregister a repository
    Unregister {
        name: String,

        /// Keep the cloned files of a git repository
        #[arg(long)]
        keep_files: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List registered repositories
    Repos {
        /// Show paths, timestamps and metadata
        #[arg(long)]
        verbose: bool,
    },

    /// List prompts available in registered repositories
    List {
        /// Only list this repository
        repository: Option<String>,

        /// Show top-level files of each prompt
        #[arg(long)]
        verbose: bool,
    },

    /// Pull git repositories
    Update {
        /// Repository to update
        #[arg(required_unless_present = "all", conflicts_with = "all")]
        repository: Option<String>,

        /// Update every registered repository
        #[arg(long)]
        all: bool,

        /// Switch to this branch, tag or commit after pulling
        #[arg(long)]
        version: Option<String>,
    },

    /// Show, list or switch the version of a git repository
    Version {
        repository: String,

        /// List available branches and tags
        #[arg(long, conflicts_with = "checkout")]
        list: bool,

        /// Check out a branch, tag or commit
        #[arg(long, value_name = "VERSION")]
        checkout: Option<String>,
    },

    /// Install a prompt into the current directory
    Install {
        /// `prompt`, `repo/prompt` or a repository URL
        identifier: String,

        /// Target editor
        #[arg(value_enum, conflicts_with = "editor")]
        editor_arg: Option<Editor>,

        /// Target editor
        #[arg(short, long, value_enum)]
        editor: Option<Editor>,

        /// Overwrite existing files without asking
        #[arg(short, long)]
        force: bool,

        /// Dry run - show what would be done
        #[arg(long)]
        dry_run: bool,

        /// Branch or tag to install from (URL identifiers only)
        #[arg(long)]
        version: Option<String>,
    },

    /// Remove the files a prompt installed into the current directory
    Remove {
        /// `prompt` or `repo/prompt`
        identifier: String,

        /// Target editor
        #[arg(value_enum, conflicts_with = "editor")]
        editor_arg: Option<Editor>,

        /// Target editor
        #[arg(short, long, value_enum)]
        editor: Option<Editor>,

        /// Remove without asking
        #[arg(short, long)]
        force: bool,

        /// Dry run - show what would be done
        #[arg(long)]
        dry_run: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_register() {
        let cli = Cli::try_parse_from([
            "tprompts",
            "register",
            "https://github.com/acme/prompts",
            "--default",
            "--version",
            "v1.0.0",
        ])
        .unwrap();
        if let Commands::Register {
            source,
            name,
            default,
            version,
        } = cli.command
        {
            assert_eq!(source, "https://github.com/acme/prompts");
            assert_eq!(name, None);
            assert!(default);
            assert_eq!(version.as_deref(), Some("v1.0.0"));
        } else {
            panic!("Expected Register command");
        }
    }

    #[test]
    fn test_cli_parse_install_positional_editor() {
        let cli = Cli::try_parse_from(["tprompts", "install", "team/react", "cursor"]).unwrap();
        if let Commands::Install {
            identifier,
            editor_arg,
            editor,
            force,
            dry_run,
            ..
        } = cli.command
        {
            assert_eq!(identifier, "team/react");
            assert_eq!(editor_arg, Some(Editor::Cursor));
            assert_eq!(editor, None);
            assert!(!force);
            assert!(!dry_run);
        } else {
            panic!("Expected Install command");
        }
    }

    #[test]
    fn test_cli_parse_install_editor_flag() {
        let cli = Cli::try_parse_from([
            "tprompts",
            "install",
            "react",
            "--editor",
            "claude-code",
            "--force",
        ])
        .unwrap();
        if let Commands::Install { editor, force, .. } = cli.command {
            assert_eq!(editor, Some(Editor::ClaudeCode));
            assert!(force);
        } else {
            panic!("Expected Install command");
        }
    }

    #[test]
    fn test_cli_rejects_unknown_editor() {
        assert!(Cli::try_parse_from(["tprompts", "install", "react", "emacs"]).is_err());
    }

    #[test]
    fn test_cli_update_requires_repository_or_all() {
        assert!(Cli::try_parse_from(["tprompts", "update"]).is_err());
        assert!(Cli::try_parse_from(["tprompts", "update", "--all"]).is_ok());
        assert!(Cli::try_parse_from(["tprompts", "update", "team", "--all"]).is_err());
    }

    #[test]
    fn test_cli_version_list_conflicts_with_checkout() {
        assert!(
            Cli::try_parse_from(["tprompts", "version", "team", "--list", "--checkout", "v1"])
                .is_err()
        );
    }

    #[test]
    fn test_cli_repos_verbose_is_distinct_from_log_level() {
        let cli = Cli::try_parse_from(["tprompts", "repos", "--verbose"]).unwrap();
        assert_eq!(cli.verbosity, 0);
        assert!(matches!(cli.command, Commands::Repos { verbose: true }));
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["tprompts", "repos", "--json", "-vv"]).unwrap();
        assert!(cli.json);
        assert_eq!(cli.verbosity, 2);
    }
}
