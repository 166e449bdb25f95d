//! Line-driven host for the selection controller.
//!
//! Loads item records and configuration, then reads one command per line
//! from stdin and feeds it to the library as an inbound [`Event`].
//! Notifications are printed as the controller fires them and the view is
//! re-rendered whenever an event changes state.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────┐
//! │ stdin line                │
//! │   → Command               │  ← parse_command
//! │   → Event<ItemKey>        │  ← Host::resolve (key lookup)
//! │   → handle_event          │  ← library
//! │   → PrintingListener      │  ← notifications to stdout
//! │   → render                │  ← re-render on change
//! └───────────────────────────┘
//! ```
//!
//! # Commands
//!
//! - `tap <key>`: tap the candidate row with this key
//! - `header`: tap the header (open/close the panel)
//! - `search <text>`: replace the search input text
//! - `back`: tap the back icon
//! - `submit`: tap the submit affordance
//! - `untag <key>`: tap the remove icon on a selected-item tag
//! - `add`: tap the add-item affordance
//! - `show`: render the current view
//! - `quit`: exit
//!
//! # Example
//!
//! ```text
//! $ multiselect --items fruit.json --set single=true
//! Select ▾
//! header
//! > panel-toggled
//! ...
//! ```

use clap::Parser;
use multiselect::app::{Notification, SelectionListener};
use multiselect::infrastructure::{load_config, load_items};
use multiselect::observability::init_tracing;
use multiselect::ui::render;
use multiselect::{handle_event, initialize, Config, Event, Item, ItemKey, SelectionController};
use std::collections::BTreeMap;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Drive a selectable list from the terminal
#[derive(Parser, Debug)]
#[command(name = "multiselect")]
#[command(version)]
#[command(about = "Single- and multi-select list driven by stdin commands")]
struct Args {
    /// JSON file holding an array of item records
    #[arg(short, long)]
    items: PathBuf,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override a configuration option (repeatable), e.g. `--set single=true`
    #[arg(short, long = "set", value_name = "KEY=VALUE", value_parser = parse_key_val)]
    set: Vec<(String, String)>,
}

fn parse_key_val(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.to_string()))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))
}

/// One parsed stdin line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Tap(String),
    Header,
    Search(String),
    Back,
    Submit,
    Untag(String),
    Add,
    Show,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));

    let argument = |name: &str| {
        let value = rest.trim();
        if value.is_empty() {
            Err(format!("'{name}' needs a key"))
        } else {
            Ok(value.to_string())
        }
    };

    match verb.trim() {
        "tap" => argument("tap").map(Command::Tap),
        "untag" => argument("untag").map(Command::Untag),
        "search" => Ok(Command::Search(rest.to_string())),
        "header" => Ok(Command::Header),
        "back" => Ok(Command::Back),
        "submit" => Ok(Command::Submit),
        "add" => Ok(Command::Add),
        "show" => Ok(Command::Show),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command '{other}'")),
    }
}

/// Prints each notification to stdout as it fires.
struct PrintingListener;

impl PrintingListener {
    fn print(notification: &Notification<ItemKey>) {
        println!("> {notification}");
    }
}

impl SelectionListener<ItemKey> for PrintingListener {
    fn on_selection_changed(&mut self, keys: &[ItemKey]) {
        Self::print(&Notification::SelectionChanged(keys.to_vec()));
    }

    fn on_panel_toggled(&mut self) {
        Self::print(&Notification::PanelToggled);
    }

    fn on_panel_cleared(&mut self) {
        Self::print(&Notification::PanelCleared);
    }

    fn on_search_changed(&mut self, term: &str) {
        Self::print(&Notification::SearchChanged(term.to_string()));
    }

    fn on_add_item_requested(&mut self) {
        Self::print(&Notification::AddItemRequested);
    }

    fn on_submitted(&mut self) {
        Self::print(&Notification::Submitted);
    }
}

/// Items plus the controller driving them.
struct Host<L> {
    items: Vec<Item<ItemKey>>,
    controller: SelectionController<ItemKey, L>,
}

impl<L: SelectionListener<ItemKey>> Host<L> {
    fn new(config: &Config, items: Vec<Item<ItemKey>>, listener: L) -> Self {
        Self {
            items,
            controller: initialize(config, listener),
        }
    }

    /// Maps a command to an inbound event, looking keys up by their text.
    fn resolve(&self, command: Command) -> Result<Option<Event<ItemKey>>, String> {
        let event = match command {
            Command::Tap(key) => {
                let item = self
                    .items
                    .iter()
                    .find(|item| item.key.as_ref().is_some_and(|k| k.to_string() == key))
                    .ok_or_else(|| format!("no item with key '{key}'"))?;
                Event::ItemTapped(item.clone())
            }
            Command::Untag(key) => {
                let selected = self
                    .controller
                    .selected_keys()
                    .iter()
                    .find(|k| k.to_string() == key)
                    .ok_or_else(|| format!("'{key}' is not selected"))?;
                Event::TagRemoveTapped(selected.clone())
            }
            Command::Header => Event::HeaderTapped,
            Command::Search(text) => Event::SearchTextChanged(text),
            Command::Back => Event::BackIconTapped,
            Command::Submit => Event::SubmitTapped,
            Command::Add => Event::AddItemTapped,
            Command::Show | Command::Quit => return Ok(None),
        };
        Ok(Some(event))
    }

    fn update(&mut self, event: &Event<ItemKey>) -> bool {
        handle_event(&mut self.controller, event)
    }

    fn render(&self) -> String {
        render(&self.controller.compute_viewmodel(&self.items))
    }
}

fn main() -> multiselect::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    let overrides: BTreeMap<String, String> = args.set.into_iter().collect();
    config.apply_options(&overrides)?;

    init_tracing(&config);

    let items = load_items(&args.items, &config.field_names())?;
    tracing::info!(count = items.len(), single = config.single, "selector ready");

    let mut host = Host::new(&config, items, PrintingListener);
    let mut stdout = io::stdout();
    write!(stdout, "{}", host.render())?;
    stdout.flush()?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                eprintln!("error: {message}");
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }
        let show = command == Command::Show;

        match host.resolve(command) {
            Ok(Some(event)) => {
                if host.update(&event) {
                    write!(stdout, "{}", host.render())?;
                }
            }
            Ok(None) if show => write!(stdout, "{}", host.render())?,
            Ok(None) => {}
            Err(message) => eprintln!("error: {message}"),
        }
        stdout.flush()?;
    }

    Ok(())
}
