// Muxkeys CLI
// Loads the key-binding config and dispatches key names read from stdin

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use muxkeys_core::{
    default_config_path, load_and_compile, Action, ActionHandler, ActionRegistry,
    CompiledConfig, DispatchOutcome, Dispatcher, DEFAULT_CONFIG,
};

/// Modal key-binding dispatcher for a terminal multiplexer
#[derive(Parser, Debug)]
#[command(name = "muxkeys")]
#[command(author = "muxkeys contributors")]
#[command(version)]
#[command(about = "Modal key-binding dispatcher", long_about = None)]
struct Args {
    /// TOML configuration file (default: ~/.config/muxkeys/config.toml)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Validate config and exit
    #[arg(long)]
    check_config: bool,

    /// Print the default config document and exit
    #[arg(long)]
    print_default: bool,
}

/// Writes one line per dispatched key
struct Reporter<W: Write> {
    out: W,
    /// First write failure from `perform`, surfaced by `run`
    failed: Option<io::Error>,
}

impl<W: Write> Reporter<W> {
    fn new(out: W) -> Self {
        Self { out, failed: None }
    }

    fn check(&mut self) -> io::Result<()> {
        match self.failed.take() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl<W: Write> ActionHandler for Reporter<W> {
    fn perform(&mut self, action: Action) {
        if self.failed.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "action {}", action) {
            self.failed = Some(e);
        }
    }
}

/// Main application state
struct Application {
    config_path: PathBuf,
    config: CompiledConfig,
}

impl Application {
    /// Resolve the config path and compile the config
    fn new(args: &Args) -> Result<Self> {
        let config_path = match &args.config {
            Some(path) => path.clone(),
            None => default_config_path().context("Could not determine config directory")?,
        };

        let config = load_and_compile(&config_path, &ActionRegistry::builtin())
            .with_context(|| format!("Failed to load config at `{}`", config_path.display()))?;

        Ok(Self {
            config_path,
            config,
        })
    }

    /// Report what the config compiled to
    fn validate(&self, out: &mut impl Write) -> Result<()> {
        writeln!(out, "Config: {}", self.config_path.display())?;
        for warning in self.config.warnings() {
            writeln!(out, "  warning: {}", warning)?;
        }

        let mut modes: Vec<&str> = self.config.mode_names().collect();
        modes.sort_unstable();
        writeln!(
            out,
            "{} default bindings, {} modes",
            self.config.default_bindings().len(),
            modes.len()
        )?;
        for mode in modes {
            let bindings = self.config.mode_bindings(mode).map_or(0, |b| b.len());
            writeln!(
                out,
                "  - mode '{}': {} bindings, sticky={}",
                mode,
                bindings,
                self.config.is_sticky(mode)
            )?;
        }
        writeln!(out, "Configuration is valid")?;
        Ok(())
    }

    /// Dispatch every input line as a key event
    fn run(self, input: impl BufRead, out: impl Write) -> Result<()> {
        let mut dispatcher = Dispatcher::new(self.config);
        let mut reporter = Reporter::new(out);

        for line in input.lines() {
            let line = line.context("Failed to read key event")?;
            let event = line.trim();
            if event.is_empty() {
                continue;
            }

            match dispatcher.process_event(event, &mut reporter) {
                DispatchOutcome::ModeStarted(mode) => writeln!(reporter.out, "mode {}", mode)?,
                DispatchOutcome::Performed(action) => {
                    log::debug!("'{}' -> {}", event, action)
                }
                DispatchOutcome::Unmatched => writeln!(reporter.out, "forward {}", event)?,
            }
            reporter.check().context("Failed to write output")?;
        }
        reporter.out.flush()?;
        Ok(())
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.print_default {
        print!("{}", DEFAULT_CONFIG);
        return Ok(());
    }

    let app = Application::new(&args)?;

    if args.check_config {
        return app.validate(&mut io::stdout().lock());
    }

    let stdin = io::stdin();
    app.run(stdin.lock(), io::stdout().lock())
}
