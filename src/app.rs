use crate::config::Config;
use crate::dataset::Dataset;
use crate::error::{AppError, AppResult};
use crate::events::network::{Event as NetworkEvent, Handler as NetworkEventHandler};
use crate::events::terminal::{Handler as TerminalEventHandler, Outcome};
use crate::logger::{self, LogEntries};
use crate::state::State;
use crate::ui::Theme;
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use log::*;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout, Stdout};
use std::sync::{Arc, Mutex as StdMutex};
use tokio::sync::Mutex;

pub type NetworkEventSender = std::sync::mpsc::Sender<NetworkEvent>;
type NetworkEventReceiver = std::sync::mpsc::Receiver<NetworkEvent>;

/// Oversees event processing, state management, and terminal output.
///
pub struct App {
    state: Arc<Mutex<State>>,
}

impl App {
    /// Start a new application according to the given configuration. Returns
    /// the result of the application execution.
    ///
    pub async fn start(config: Config) -> Result<()> {
        let log_entries: LogEntries = Arc::new(StdMutex::new(vec![]));
        logger::init(Arc::clone(&log_entries), LevelFilter::Debug)?;

        info!("Starting application...");
        if let Some(path) = config.file_path() {
            debug!("Using configuration file '{}'.", path.display());
        }
        let theme = match Theme::from_name(&config.theme_name) {
            Some(theme) => theme,
            None => {
                warn!(
                    "Unknown theme '{}', expected one of {:?}. Using default.",
                    config.theme_name,
                    Theme::available_themes()
                );
                Theme::default()
            }
        };
        let source = config.dataset_source();
        let dataset = Dataset::new(source.clone()).map_err(AppError::Load)?;

        let (tx, rx) = std::sync::mpsc::channel::<NetworkEvent>();
        let app = App {
            state: Arc::new(Mutex::new(State::new(
                config.mode,
                source.to_string(),
                theme,
                log_entries,
            ))),
        };
        app.start_network(rx, dataset);
        app.start_ui(tx).await?;

        info!("Exiting application...");
        Ok(())
    }

    /// Start a separate thread for asynchronous state mutations.
    ///
    fn start_network(&self, net_receiver: NetworkEventReceiver, dataset: Dataset) {
        debug!("Creating new thread for asynchronous networking...");
        let cloned_state = Arc::clone(&self.state);
        std::thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(e) => {
                    error!("Failed to build network runtime: {}", e);
                    return;
                }
            };
            runtime.block_on(async {
                let mut network_event_handler = NetworkEventHandler::new(&cloned_state, &dataset);
                while let Ok(network_event) = net_receiver.recv() {
                    if let Err(e) = network_event_handler.handle(network_event).await {
                        error!("Failed to handle network event: {}", e);
                    }
                }
            })
        });
    }

    /// Begin the terminal event poll on a separate thread before starting the
    /// render loop on the main thread. The terminal is restored even when the
    /// loop fails.
    ///
    async fn start_ui(&self, net_sender: NetworkEventSender) -> Result<()> {
        debug!("Starting user interface on main thread...");
        enter_terminal()?;

        let result = match Terminal::new(CrosstermBackend::new(stdout())) {
            Ok(mut terminal) => self.run(&mut terminal, net_sender).await,
            Err(e) => Err(AppError::Terminal(e.to_string()).into()),
        };

        leave_terminal()?;
        result
    }

    async fn run(
        &self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        net_sender: NetworkEventSender,
    ) -> Result<()> {
        terminal.hide_cursor()?;
        net_sender.send(NetworkEvent::LoadDataset)?;

        let terminal_event_handler = TerminalEventHandler::new();
        loop {
            let outcome = {
                let mut state = self.state.lock().await;
                terminal
                    .draw(|frame| crate::ui::render(frame, &mut state))
                    .map_err(|e| AppError::Terminal(e.to_string()))?;
                terminal_event_handler.handle_next(&mut state)?
            };
            match outcome {
                Outcome::Continue => (),
                Outcome::Open(url) => open_link(terminal, &url)?,
                Outcome::Exit => {
                    debug!("Received application exit request.");
                    break;
                }
            }
        }
        terminal.show_cursor()?;
        Ok(())
    }
}

fn enter_terminal() -> AppResult<()> {
    execute!(stdout(), EnterAlternateScreen)?;
    enable_raw_mode()?;
    Ok(())
}

fn leave_terminal() -> AppResult<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Open a project link in the system browser. The terminal is handed back
/// to the shell meanwhile, as text browsers take it over until they exit.
///
fn open_link(terminal: &mut Terminal<CrosstermBackend<Stdout>>, url: &str) -> AppResult<()> {
    leave_terminal()?;
    if let Err(e) = webbrowser::open(url) {
        error!("Failed to open '{}' in the browser: {}", url, e);
    }
    enter_terminal()?;
    terminal
        .clear()
        .map_err(|e| AppError::Terminal(e.to_string()))
}
