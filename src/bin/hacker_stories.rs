//! Hacker Stories Terminal Driver
//!
//! Line-oriented front end over the library: type commands, see the list.

use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use hacker_stories::fetch::{FetchOutcome, HttpStorySource, StaticStorySource, StorySource};
use hacker_stories::storage::{FileStorage, KeyValueStorage, MemoryStorage};
use hacker_stories::{App, AppView, Config, StaleResponsePolicy, ViewStatus};
use parking_lot::Mutex;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::{JoinError, JoinHandle};
use tracing_subscriber::{fmt, EnvFilter};

/// Hacker Stories
#[derive(Parser, Debug)]
#[command(name = "hacker-stories")]
#[command(about = "Search, filter and dismiss Hacker News stories")]
#[command(version)]
struct Args {
    /// Directory holding the persisted search term
    #[arg(short, long, default_value = "./hacker_stories_data")]
    data_dir: String,

    /// Search endpoint
    #[arg(short, long, default_value = "https://hn.algolia.com/api/v1/search")]
    endpoint: String,

    /// Serve the two built-in stories instead of calling the endpoint
    #[arg(long)]
    offline: bool,

    /// Keep the search term in memory only
    #[arg(long)]
    ephemeral: bool,

    /// Drop responses that arrive after a newer search was started
    #[arg(long)]
    discard_stale: bool,

    /// Delay of the offline source in milliseconds
    #[arg(long, default_value = "2000")]
    offline_delay_ms: u64,
}

/// One line of user input
#[derive(Debug, PartialEq)]
enum Input {
    Search(String),
    Dismiss(String),
    Show,
    Help,
    Quit,
    Unknown(String),
}

impl Input {
    fn parse(line: &str) -> Self {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command {
            "search" | "s" => Input::Search(rest.to_string()),
            "dismiss" | "d" if !rest.is_empty() => Input::Dismiss(rest.to_string()),
            "show" | "" => Input::Show,
            "help" | "?" => Input::Help,
            "quit" | "q" | "exit" => Input::Quit,
            _ => Input::Unknown(line.to_string()),
        }
    }
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,hacker_stories=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    tracing::info!("Hacker Stories v{}", hacker_stories::VERSION);

    let policy = if args.discard_stale {
        StaleResponsePolicy::Discard
    } else {
        StaleResponsePolicy::Apply
    };

    // Build config from args
    let config = Config::builder()
        .data_dir(&args.data_dir)
        .api_endpoint(&args.endpoint)
        .stale_response_policy(policy)
        .static_delay_ms(args.offline_delay_ms)
        .build();

    let storage: Arc<dyn KeyValueStorage> = if args.ephemeral {
        Arc::new(MemoryStorage::new())
    } else {
        match FileStorage::open(config.storage_path()) {
            Ok(storage) => Arc::new(storage),
            Err(e) => {
                tracing::warn!("Storage unavailable, search term will not persist: {}", e);
                Arc::new(MemoryStorage::new())
            }
        }
    };

    let source: Arc<dyn StorySource> = if args.offline {
        Arc::new(StaticStorySource::new(Duration::from_millis(config.static_delay_ms)))
    } else {
        match HttpStorySource::from_config(&config) {
            Ok(source) => Arc::new(source),
            Err(e) => {
                tracing::error!("Failed to build HTTP client: {}", e);
                std::process::exit(1);
            }
        }
    };

    let app = match App::new(config, storage, source) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!("Failed to start: {}", e);
            std::process::exit(1);
        }
    };

    println!("My Hacker Stories");
    print_help();

    let mut driver = Driver::new(app);
    driver.start();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                tracing::error!("Failed to read input: {}", e);
                break;
            }
        };

        if !driver.handle(Input::parse(&line)) {
            break;
        }
        driver.reap().await;
    }

    driver.finish().await;
    tracing::info!("Bye");
}

/// Input loop state
///
/// Searches run on tokio tasks so the loop keeps reading while a fetch is in
/// flight. The store subscriber redraws on every transition.
struct Driver {
    app: App,

    /// Term the subscriber filters with, kept in step with the app
    shown_term: Arc<Mutex<String>>,

    /// Searches not yet reported
    pending: Vec<JoinHandle<FetchOutcome>>,
}

impl Driver {
    fn new(app: App) -> Self {
        let shown_term = Arc::new(Mutex::new(app.search_term().to_string()));

        let term = Arc::clone(&shown_term);
        app.store().subscribe(move |state| {
            render(&AppView::from_state(state, &term.lock()));
        });

        Self {
            app,
            shown_term,
            pending: Vec::new(),
        }
    }

    /// Initial fetch for the persisted term
    fn start(&mut self) {
        let handle = self.app.spawn_refresh();
        self.pending.push(handle);
        self.redraw_if_idle();
    }

    /// Apply one command; returns false on quit
    fn handle(&mut self, input: Input) -> bool {
        match input {
            Input::Search(term) => {
                *self.shown_term.lock() = term.clone();
                let handle = self.app.submit_search_term(term);
                self.pending.push(handle);
                self.redraw_if_idle();
            }
            Input::Dismiss(id) => self.app.remove_story(id.as_str()),
            Input::Show => render(&self.app.view()),
            Input::Help => print_help(),
            Input::Quit => return false,
            Input::Unknown(line) => println!("Unknown command: {line} (type `help`)"),
        }
        true
    }

    /// Skipped searches dispatch nothing, so draw the refiltered list here
    fn redraw_if_idle(&self) {
        if !self.app.store().read(|state| state.is_loading) {
            render(&self.app.view());
        }
    }

    /// Report searches that have completed
    async fn reap(&mut self) {
        let (done, running): (Vec<_>, Vec<_>) = self.pending.drain(..).partition(|h| h.is_finished());
        self.pending = running;
        for handle in done {
            report(handle.await);
        }
    }

    /// Wait for every search still in flight
    async fn finish(mut self) -> Vec<FetchOutcome> {
        let mut outcomes = Vec::new();
        for handle in self.pending.drain(..) {
            if let Some(outcome) = report(handle.await) {
                outcomes.push(outcome);
            }
        }
        outcomes
    }
}

fn print_help() {
    println!("Commands: search <term> | dismiss <id> | show | help | quit");
}

fn report(joined: std::result::Result<FetchOutcome, JoinError>) -> Option<FetchOutcome> {
    let outcome = match joined {
        Ok(outcome) => outcome,
        Err(e) => {
            tracing::error!("Search task failed: {}", e);
            return None;
        }
    };

    match &outcome {
        FetchOutcome::Skipped => tracing::debug!("No fetch for empty search term"),
        FetchOutcome::Loaded { count, .. } => tracing::debug!("Loaded {} stories", count),
        FetchOutcome::Failed { error, .. } => tracing::debug!("Fetch failed: {}", error),
        FetchOutcome::Stale { generation, latest } => {
            tracing::debug!("Response {} superseded by {}", generation, latest)
        }
    }
    Some(outcome)
}

fn render(view: &AppView) {
    println!();
    println!("Search: {}", view.search_term);
    println!("--------");

    if view.status == ViewStatus::Error {
        println!("Something went wrong ...");
    }

    if view.status == ViewStatus::Loading {
        println!("Loading ...");
        return;
    }

    for story in &view.stories {
        println!(
            "[{}] {} <{}> by {} | {} comments | {} points",
            story.id, story.title, story.url, story.author, story.num_comments, story.points
        );
    }
    if view.stories.is_empty() {
        println!("(no stories)");
    }
}
