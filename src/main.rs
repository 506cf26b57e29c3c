use std::io::{self, Read};
use std::path::Path;

use clap::Parser;

use commit_guard::cli::Cli;
use commit_guard::config::{Config, FileConfigLoader, load_config};
use commit_guard::git::{GitHistory, cleanup_message};
use commit_guard::output::ErrorOutput;
use commit_guard::walker::{CommitWalker, Reporter, WalkOptions, check_message, exit_code_for};
use commit_guard::{CommitGuardError, EXIT_RUNTIME_ERROR, EXIT_SUCCESS};

fn main() {
    let cli = Cli::parse();
    let errors = ErrorOutput::new(cli.color.mode());

    let exit_code = match run(&cli, &errors) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            errors.write_error(
                &mut io::stderr().lock(),
                e.error_type(),
                &e.to_string(),
                e.detail().as_deref(),
                None,
            );
            EXIT_RUNTIME_ERROR
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli, errors: &ErrorOutput) -> commit_guard::Result<i32> {
    // 1. Load configuration, command line takes precedence
    let config = load_config(&FileConfigLoader::new(), cli.config.as_deref(), cli.no_config)?
        .with_overrides(cli.base.as_deref(), cli.limit);

    let reporter = Reporter::new(cli.format, cli.color.mode())
        .quiet(cli.quiet)
        .verbose(cli.verbose);

    // 2. commit-msg hook mode: a single message, no history
    if let Some(path) = &cli.message_file {
        let message = cleanup_message(&read_message(path)?);
        let count = check_message(
            &reporter,
            &message,
            &mut io::stderr().lock(),
            &mut io::stdout().lock(),
        )?;
        return Ok(exit_code_for(count));
    }

    // 3. Walk the branch history
    let Ok(history) = GitHistory::discover(Path::new("."), config.base_ref.clone()) else {
        errors.write_warning(
            &mut io::stderr().lock(),
            "No git repository found; no commits were checked",
            None,
            Some("Run commit-guard inside a git work tree"),
        );
        return Ok(EXIT_SUCCESS);
    };

    let outcome = CommitWalker::new(&history, walk_options(cli, &config), &reporter)
        .walk(&mut io::stderr().lock(), &mut io::stdout().lock())?;
    Ok(outcome.exit_code())
}

const fn walk_options(cli: &Cli, config: &Config) -> WalkOptions {
    WalkOptions {
        full_mode: cli.full,
        limit: config.limit,
    }
}

/// Read the message to check from `path`, or from stdin for `-`.
fn read_message(path: &Path) -> commit_guard::Result<String> {
    if path == Path::new("-") {
        let mut message = String::new();
        io::stdin().read_to_string(&mut message)?;
        return Ok(message);
    }
    std::fs::read_to_string(path).map_err(|source| CommitGuardError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
