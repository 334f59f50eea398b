//! CLI replaying workpad editor actions through the persisting workpad store
//!
//! Loads a workpad and its assets (never persisted), then dispatches every
//! action of a JSON lines log. Actions that change the workpad or its asset
//! set are written to the configured workpad service.
//!
//! # Examples
//!
//! ```bash
//! # help menu
//! workpad --help
//!
//! # replay edits against a local kibana
//! workpad --workpad workpad.json --actions edits.jsonl
//!
//! # print what would be written without sending anything
//! workpad --workpad workpad.json --actions edits.jsonl --dry-run
//! ```
use clap::Parser;
use color_eyre::eyre::{Result, eyre};
use directories::ProjectDirs;
use itertools::Itertools;
use log::*;
use std::{
    fs,
    io::{BufRead, BufReader, Write},
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use workpad_lib::{
    config::{Config, NotificationMode},
    error::Result as LibResult,
    notify::{LogNotifier, Notifier, SilentNotifier},
    persist::{PersistGate, PersistHandle, PersistOutcome},
    service::WorkpadService,
    store::{
        Dispatcher, Store, action::Action, reducer::StoreReducer, state::State,
    },
    workpad::{AssetMap, PersistedWorkpad, Workpad},
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
/// CLI replaying workpad editor actions through the persisting workpad store
struct Args {
    /// Path to the yaml config file. Defaults to the user config directory
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Overrides the url of the workpad service from the config file
    #[arg(long)]
    kibana_url: Option<String>,

    /// JSON file holding the workpad to load before replaying
    #[arg(short, long)]
    workpad: PathBuf,

    /// JSON file holding the asset registry to load before replaying
    #[arg(short, long)]
    assets: Option<PathBuf>,

    /// JSON lines file with one action per line
    #[arg(long)]
    actions: Option<PathBuf>,

    /// Print persisted workpads as json instead of sending them
    #[arg(long, default_value_t = false)]
    dry_run: bool,

    /// Only print final output nothing else
    #[arg(short, long, default_value_t = false)]
    quiet: bool,

    /// Prints debug logs including those from workpad-lib
    #[arg(long, default_value_t = false)]
    debug: bool,
}

/// Tally of settled persist requests
#[derive(Debug, Default, PartialEq, Eq)]
struct Summary {
    saved: usize,
    failed: usize,
    aborted: usize,
}

/// Workpad service writing every update to `out` instead of the network
struct DryRunService<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> DryRunService<W> {
    fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out.into_inner().unwrap()
    }
}

impl<W: Write + Send> WorkpadService for DryRunService<W> {
    fn update(&self, id: &str, workpad: &PersistedWorkpad) -> LibResult<()> {
        let serialized = serde_json::to_string(workpad)?;
        let mut out = self
            .out
            .lock()
            .map_err(|e| std::io::Error::other(e.to_string()))?;
        writeln!(out, "{serialized}")?;
        debug!("dry run: skipped update of workpad {id}");
        Ok(())
    }
}

#[doc(hidden)]
fn initialize_logger(args: &Args) -> Result<()> {
    let filter = if args.quiet {
        simplelog::LevelFilter::Error
    } else if args.debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    simplelog::TermLogger::init(
        filter,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

#[doc(hidden)]
fn get_project_config_path() -> Result<PathBuf> {
    let project_dir = ProjectDirs::from("", "", "workpad")
        .ok_or(eyre!("failed to get project directory"))?;
    let config_dir = project_dir.config_dir();
    fs::create_dir_all(config_dir)?;
    Ok(config_dir.join("config.yml"))
}

#[doc(hidden)]
fn load_config(args: &Args) -> Result<Config> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => get_project_config_path()?,
    };

    let mut config = Config::load(&path)?;

    if let Some(url) = &args.kibana_url {
        config.kibana_url = url.clone();
    }

    Ok(config)
}

#[doc(hidden)]
fn print_args(args: &Args, config: &Config) {
    info!("configuration:");
    info!("workpad:       {}", args.workpad.display());
    info!(
        "assets:        {}",
        args.assets
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    );
    info!(
        "actions:       {}",
        args.actions
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_default()
    );
    info!("dry_run:       {}", args.dry_run);
    info!("kibana_url:    {}", config.kibana_url);
    info!("api_path:      {}", config.api_path);
    info!("timeout_ms:    {}", config.timeout_ms);
    info!("notifications: {:?}", config.notifications);
}

#[doc(hidden)]
fn load_workpad(path: &Path) -> Result<Workpad> {
    let file = fs::File::open(path)
        .map_err(|e| eyre!("failed to open workpad {}: {}", path.display(), e))?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

#[doc(hidden)]
fn load_assets(path: &Path) -> Result<AssetMap> {
    let file = fs::File::open(path)
        .map_err(|e| eyre!("failed to open assets {}: {}", path.display(), e))?;
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

#[doc(hidden)]
fn parse_actions(reader: impl BufRead) -> Result<Vec<Action>> {
    let mut actions = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let action = serde_json::from_str::<Action>(line)
            .map_err(|e| eyre!("invalid action on line {}: {}", index + 1, e))?;

        actions.push(action);
    }

    Ok(actions)
}

#[doc(hidden)]
fn create_notifier(mode: NotificationMode) -> Arc<dyn Notifier> {
    match mode {
        NotificationMode::Log => Arc::new(LogNotifier),
        NotificationMode::Silent => Arc::new(SilentNotifier),
    }
}

#[doc(hidden)]
fn create_service(args: &Args, config: &Config) -> Result<Arc<dyn WorkpadService>> {
    if args.dry_run {
        return Ok(Arc::new(DryRunService::new(std::io::stdout())));
    }
    Ok(Arc::new(config.service()?))
}

#[doc(hidden)]
fn replay(dispatcher: &dyn Dispatcher, actions: Vec<Action>) -> Vec<PersistHandle> {
    actions
        .into_iter()
        .filter_map(|action| {
            debug!("dispatching {}", action.type_tag());
            dispatcher.dispatch(action).into_persist()
        })
        .collect_vec()
}

#[doc(hidden)]
fn summarize(handles: Vec<PersistHandle>) -> Summary {
    let mut summary = Summary::default();

    let pending = handles.iter().filter(|h| !h.is_finished()).count();
    info!("waiting on {pending} of {} persist requests", handles.len());

    for handle in handles {
        let id = handle.workpad_id().to_string();
        match handle.wait() {
            PersistOutcome::Saved { .. } => summary.saved += 1,
            PersistOutcome::Notified { title } => {
                debug!("persist of {id} failed: {title}");
                summary.failed += 1;
            }
            PersistOutcome::Aborted(message) => {
                error!("persist of {id} aborted: {message}");
                summary.aborted += 1;
            }
        }
    }

    summary
}

#[doc(hidden)]
fn print_summary(summary: &Summary) {
    info!("summary:");
    info!("saved:   {}", summary.saved);
    info!("failed:  {}", summary.failed);
    info!("aborted: {}", summary.aborted);
}

#[doc(hidden)]
fn main() -> Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    initialize_logger(&args)?;

    let config = load_config(&args)?;

    print_args(&args, &config);

    let gate = PersistGate::builder()
        .service(create_service(&args, &config)?)
        .notifier(create_notifier(config.notifications))
        .build()?;

    let mut store = Store::new(State::default(), StoreReducer::boxed());
    store.add_middleware(gate);

    store.dispatch(Action::SetWorkpad(load_workpad(&args.workpad)?));

    if let Some(path) = &args.assets {
        store.dispatch(Action::SetAssets(load_assets(path)?));
    }

    let actions = match &args.actions {
        Some(path) => parse_actions(BufReader::new(fs::File::open(path)?))?,
        None => Vec::new(),
    };

    info!("replaying {} actions", actions.len());

    let handles = replay(&store, actions);
    let summary = summarize(handles);

    print_summary(&summary);

    if summary.failed + summary.aborted > 0 {
        return Err(eyre!(
            "{} of {} persist requests failed",
            summary.failed + summary.aborted,
            summary.saved + summary.failed + summary.aborted
        ));
    }

    Ok(())
}

#[cfg(test)]
#[path = "./main_tests.rs"]
mod tests;
