//! Command-line entry point and event loop.
//!
//! The binary is a thin shell around the library: it parses arguments, loads
//! configuration, and pumps [`Event`]s through [`handle_event`], executing the
//! returned [`Action`]s.
//!
//! # Architecture
//!
//! Everything runs on a single-threaded Tokio runtime:
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  Shell (event loop)                      │
//! │   stdin lines ──► parse_command ──┐      │
//! │                                   ▼      │
//! │                     handle_event(AppState)│
//! │                                   │      │
//! │           Action::Fetch ──► FetchWorker  │
//! │                                   │      │
//! │   FetchResponse ◄── mpsc ◄── spawned task│
//! └──────────────────────────────────────────┘
//! ```
//!
//! One-shot commands issue their events, wait until no fetch is in flight,
//! and render once. `browse` keeps the loop running, selecting between user
//! input and fetch responses.

#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use reelmark::app::input::parse_command;
use reelmark::provider::{MovieProvider, OmdbClient};
use reelmark::storage::Toggled;
use reelmark::ui::{self, DEFAULT_COLUMNS};
use reelmark::worker::{FeedQueries, FetchRequest, FetchResponse, FetchWorker};
use reelmark::{handle_event, Action, AppState, Config, Event, ReelmarkError, Result, ViewMode};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, UnboundedReceiver};

#[derive(Debug, Parser)]
#[command(name = "reelmark", version, about = "Search movies and keep a list of favorites")]
struct Cli {
    /// Configuration file (default: <config_dir>/reelmark/config.toml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Render width in columns.
    #[arg(long, global = true, default_value_t = DEFAULT_COLUMNS)]
    width: usize,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search titles.
    Search {
        #[arg(required = true)]
        term: Vec<String>,

        /// Result pages to load.
        #[arg(long, default_value_t = 1)]
        pages: u32,
    },

    /// Show the popular and trending feeds.
    Home,

    /// Show details for a title id (e.g. tt1160419).
    Show { id: String },

    /// List favorites, optionally fuzzy-filtered by title.
    Favorites { filter: Vec<String> },

    /// Change favorites by title id.
    Bookmark {
        #[command(subcommand)]
        action: BookmarkAction,
    },

    /// Interactive session.
    Browse,
}

#[derive(Debug, Subcommand)]
enum BookmarkAction {
    Add { id: String },
    Remove { id: String },
    Toggle { id: String },
}

impl Command {
    const fn needs_network(&self) -> bool {
        match self {
            Self::Favorites { .. } => false,
            Self::Bookmark { action } => !matches!(action, BookmarkAction::Remove { .. }),
            _ => true,
        }
    }
}

/// Event loop state shared by every command.
struct Shell {
    state: AppState,
    worker: Option<FetchWorker>,
    responses: UnboundedReceiver<FetchResponse>,
    in_flight: usize,
    width: usize,
}

/// What one event did.
#[derive(Debug, Clone, Copy, Default)]
struct Outcome {
    render: bool,
    quit: bool,
}

impl Shell {
    fn new(config: &Config, width: usize, with_network: bool) -> Result<Self> {
        let provider: Option<Arc<dyn MovieProvider>> = if with_network {
            Some(Arc::new(OmdbClient::from_config(config)?))
        } else {
            None
        };

        Ok(Self::with_provider(
            reelmark::initialize(config),
            provider,
            FeedQueries::from_config(config),
            width,
        ))
    }

    /// A shell over existing state. Without a provider every fetch fails.
    fn with_provider(
        state: AppState,
        provider: Option<Arc<dyn MovieProvider>>,
        feeds: FeedQueries,
        width: usize,
    ) -> Self {
        let (sender, responses) = mpsc::unbounded_channel();
        let worker = provider.map(|provider| FetchWorker::new(provider, feeds, sender));

        Self {
            state,
            worker,
            responses,
            in_flight: 0,
            width,
        }
    }

    fn apply(&mut self, event: &Event) -> Result<Outcome> {
        let (render, actions) = handle_event(&mut self.state, event)?;
        let mut outcome = Outcome {
            render,
            quit: false,
        };

        for action in actions {
            match action {
                Action::Fetch(request) => self.dispatch(request)?,
                Action::Quit => outcome.quit = true,
            }
        }
        Ok(outcome)
    }

    fn dispatch(&mut self, request: FetchRequest) -> Result<()> {
        let worker = self
            .worker
            .as_ref()
            .ok_or_else(|| ReelmarkError::Worker("no provider configured".to_string()))?;
        worker.dispatch(request);
        self.in_flight += 1;
        Ok(())
    }

    fn receive(&mut self, response: FetchResponse) -> Result<Outcome> {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.apply(&Event::Fetched(response))
    }

    /// Waits until every dispatched fetch has been answered.
    async fn settle(&mut self) -> Result<()> {
        while self.in_flight > 0 {
            let response = self
                .responses
                .recv()
                .await
                .ok_or_else(|| ReelmarkError::Worker("fetch worker stopped".to_string()))?;
            self.receive(response)?;
        }
        Ok(())
    }

    fn render(&self) -> Result<()> {
        let mut out = std::io::stdout().lock();
        ui::render(&self.state, &mut out, self.width)?;
        Ok(())
    }

    /// Whether the current view shows a failed request.
    fn view_failed(&self) -> bool {
        match self.state.view_mode {
            ViewMode::Home => {
                self.state.popular.status.is_failed() || self.state.trending.status.is_failed()
            }
            ViewMode::Search => self.state.search_status.is_failed(),
            ViewMode::Details => self.state.details_status.is_failed(),
            ViewMode::Favorites => false,
        }
    }

    async fn run(&mut self, command: Command) -> Result<ExitCode> {
        match command {
            Command::Search { term, pages } => {
                self.apply(&Event::Search(term.join(" ")))?;
                self.settle().await?;
                for _ in 1..pages {
                    if !self.state.can_load_more() {
                        break;
                    }
                    self.apply(&Event::LoadMore)?;
                    self.settle().await?;
                }
            }
            Command::Home => {
                self.apply(&Event::Start)?;
                self.settle().await?;
            }
            Command::Show { id } => {
                self.apply(&Event::OpenTitle(id))?;
                self.settle().await?;
            }
            Command::Favorites { filter } => {
                self.apply(&Event::FilterFavorites(filter.join(" ")))?;
            }
            Command::Bookmark { action } => return self.bookmark(action).await,
            Command::Browse => {
                self.browse().await?;
                return Ok(ExitCode::SUCCESS);
            }
        }

        self.render()?;
        Ok(if self.view_failed() {
            ExitCode::FAILURE
        } else {
            ExitCode::SUCCESS
        })
    }

    async fn bookmark(&mut self, action: BookmarkAction) -> Result<ExitCode> {
        let (id, toggle) = match action {
            BookmarkAction::Remove { id } => {
                if self.state.favorites.remove(&id) {
                    println!("Removed {id} from favorites");
                } else {
                    println!("{id} is not a favorite");
                }
                return Ok(ExitCode::SUCCESS);
            }
            BookmarkAction::Toggle { id } if self.state.favorites.is_favorite(&id) => {
                self.state.favorites.remove(&id);
                println!("Removed {id} from favorites");
                return Ok(ExitCode::SUCCESS);
            }
            BookmarkAction::Add { id } if self.state.favorites.is_favorite(&id) => {
                println!("{id} is already a favorite");
                return Ok(ExitCode::SUCCESS);
            }
            BookmarkAction::Add { id } => (id, false),
            BookmarkAction::Toggle { id } => (id, true),
        };

        self.apply(&Event::OpenTitle(id.clone()))?;
        self.settle().await?;

        let Some(details) = self.state.details.as_ref() else {
            let message = self.state.details_status.error().unwrap_or("no details returned");
            eprintln!("reelmark: cannot bookmark {id}: {message}");
            return Ok(ExitCode::FAILURE);
        };

        let summary = details.to_summary();
        let label = format!("{} ({})", summary.title, summary.year);
        match self.state.favorites.toggle(summary) {
            Toggled::Added => println!("Added {label} to favorites"),
            Toggled::Removed if toggle => println!("Removed {label} from favorites"),
            Toggled::Removed => {}
        }
        Ok(ExitCode::SUCCESS)
    }

    async fn browse(&mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        let outcome = self.apply(&Event::Start)?;
        if outcome.render {
            self.render()?;
        }
        prompt()?;

        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else { break };

                    match parse_command(&line) {
                        Some(event) => {
                            let outcome = self.apply(&event)?;
                            if outcome.quit {
                                break;
                            }
                            if outcome.render {
                                self.render()?;
                            }
                        }
                        None if line.trim().is_empty() => {}
                        None => eprintln!("unknown command: {}", line.trim()),
                    }
                    prompt()?;
                }
                Some(response) = self.responses.recv() => {
                    if self.receive(response)?.render {
                        self.render()?;
                        prompt()?;
                    }
                }
            }
        }

        Ok(())
    }
}

fn prompt() -> Result<()> {
    let mut out = std::io::stdout().lock();
    write!(out, "> ")?;
    out.flush()?;
    Ok(())
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::load(cli.config.as_deref())?;
    reelmark::observability::init_tracing(&config);

    let _span = tracing::info_span!("reelmark", command = ?cli.command).entered();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let mut shell = Shell::new(&config, cli.width, cli.command.needs_network())?;
        shell.run(cli.command).await
    })
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("reelmark: {e}");
            ExitCode::FAILURE
        }
    }
}
