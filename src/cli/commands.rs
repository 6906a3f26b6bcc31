use clap::Parser;
use crate::cli::dispatch::Dispatcher;
use crate::cli::output::write_tasks;
use crate::cli::selection::interpret;
use crate::config::Config;
use crate::db::DbConnection;
use crate::effects::{Notifier, ProcessAlarmScheduler, ProcessClipboard, ProcessNotifier};
use crate::repo::TaskRepo;
use anyhow::Result;

/// Notifier used before the configuration is known
const FALLBACK_NOTIFY_COMMAND: &str = "notify-send";

#[derive(Parser, Debug)]
#[command(name = "rofi-todo")]
#[command(about = "Launcher-driven todo list: apply one selection, print the refreshed list")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Cli {
    /// "+text" add, "!id" done, "?id" undone, "-done|all|id" clear, ">id text" edit,
    /// "pid n" set priority, or a line of the printed list
    #[arg(allow_hyphen_values = true)]
    pub selection: Option<String>,
}

fn init_logging() {
    // Logs go to stderr; stdout belongs to the launcher
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init();
}

/// Log an error and show it as a desktop notification
pub fn report_error(notifier: &dyn Notifier, err: &anyhow::Error) {
    log::error!("{:#}", err);
    notifier.notify("Error", &format!("{:#}", err));
}

/// Interpret and run one raw selection.
///
/// Failures are reported through `notifier` and never abort the invocation, so the list is
/// still printed afterwards. Returns whether the selection succeeded.
pub fn execute_selection(dispatcher: &Dispatcher<'_>, raw: &str, notifier: &dyn Notifier) -> bool {
    let result = interpret(raw)
        .map_err(anyhow::Error::from)
        .and_then(|command| match command {
            Some(command) => dispatcher.run(&command),
            None => Ok(()),
        });

    match result {
        Ok(()) => true,
        Err(e) => {
            report_error(notifier, &e);
            false
        }
    }
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            let notifier = ProcessNotifier {
                program: FALLBACK_NOTIFY_COMMAND.to_string(),
            };
            report_error(&notifier, &e);
            return Err(e);
        }
    };

    let notifier = ProcessNotifier {
        program: config.notify_command.clone(),
    };
    let alarms = ProcessAlarmScheduler {
        program: config.alarm_command.clone(),
    };
    let clipboard = ProcessClipboard {
        program: config.clipboard_command.clone(),
    };

    let conn = match DbConnection::connect(&config) {
        Ok(conn) => conn,
        Err(e) => {
            report_error(&notifier, &e);
            return Err(e);
        }
    };

    let dispatcher = Dispatcher::new(&conn, &alarms, &clipboard, config.selection);
    execute_selection(&dispatcher, cli.selection.as_deref().unwrap_or(""), &notifier);

    let tasks = match TaskRepo::list_ordered(&conn) {
        Ok(tasks) => tasks,
        Err(e) => {
            report_error(&notifier, &e);
            return Err(e);
        }
    };

    let stdout = std::io::stdout();
    write_tasks(&mut stdout.lock(), &tasks, config.output)?;
    Ok(())
}
