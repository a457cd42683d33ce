//! `stockroom` shell entry point.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::fs::File;
    use std::io::{self, BufRead, BufReader, IsTerminal, Write};
    use std::path::PathBuf;

    use anyhow::Context;
    use clap::Parser;

    use stockroom_app::{AppConfig, AppState, Shell};
    use stockroom_inventory::SortDirection;
    use stockroom_observability::LogFormat;

    #[derive(Debug, Parser)]
    #[command(name = "stockroom")]
    #[command(about = "In-memory inventory manager")]
    #[command(version)]
    struct Cli {
        /// Initial quantity sort direction (asc or desc)
        #[arg(long, env = "STOCKROOM_SORT", default_value = "desc")]
        sort: SortDirection,

        /// Initial category filter
        #[arg(long, env = "STOCKROOM_FILTER")]
        filter: Option<String>,

        /// Log output format (json or pretty)
        #[arg(long, env = "STOCKROOM_LOG_FORMAT", default_value = "pretty")]
        log_format: LogFormat,

        /// Log filter used when RUST_LOG is unset
        #[arg(long, env = "STOCKROOM_LOG", default_value = "info")]
        log_level: String,

        /// Read commands from a file instead of stdin
        #[arg(long)]
        script: Option<PathBuf>,
    }

    pub fn run() -> anyhow::Result<()> {
        dotenvy::dotenv().ok();
        let cli = Cli::parse();

        stockroom_observability::init_with(cli.log_format, &cli.log_level);

        let config = AppConfig::new(cli.sort, cli.filter);
        tracing::info!(sort = %config.sort, "starting stockroom");
        let mut shell = Shell::new(AppState::from_config(&config));

        let (input, interactive): (Box<dyn BufRead>, bool) = match &cli.script {
            Some(path) => {
                let file = File::open(path)
                    .with_context(|| format!("failed to open script {}", path.display()))?;
                (Box::new(BufReader::new(file)), false)
            }
            None => {
                let stdin = io::stdin();
                let interactive = stdin.is_terminal();
                (Box::new(stdin.lock()), interactive)
            }
        };

        let mut stdout = io::stdout().lock();
        if interactive {
            writeln!(stdout, "{}", shell.state().table_view().render_text())?;
            writeln!(stdout, "type `help` for commands")?;
        }

        let mut lines = input.lines();
        loop {
            if interactive {
                write!(stdout, "> ")?;
                stdout.flush()?;
            }
            let Some(line) = lines.next() else { break };
            let line = line.context("failed to read input")?;

            let response = shell.run_line(&line);
            write!(stdout, "{}", response.output)?;
            if response.quit {
                break;
            }
        }

        tracing::info!(items = shell.state().store().len(), "session ended");
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    cli::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // The wasm build is mounted through `stockroom_app::frontend`.
}
