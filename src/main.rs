mod app;
mod bigtext;
mod display;
mod editor;
mod help;
mod logging;
mod notes;
mod scale;
mod theme;
use crate::app::App;
use crate::display::LocalClock;
use crate::notes::NotesFile;
use anyhow::Context;
use lexopt::{Arg, Parser};
use ratatui::DefaultTerminal;
use std::path::PathBuf;
use time::UtcOffset;
use tracing::{info, warn};

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run { notes: Option<PathBuf> },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut notes = None;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('n') | Arg::Long("notes") => {
                    notes = Some(PathBuf::from(parser.value()?));
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run { notes })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run { notes } => {
                // Must happen while the process is still single-threaded
                let offset = UtcOffset::current_local_offset();
                let _guard = logging::init();
                let offset = offset.unwrap_or_else(|e| {
                    warn!(error = %e, "Could not determine local UTC offset; using UTC");
                    UtcOffset::UTC
                });
                let notes_file = notes.map_or_else(NotesFile::default, NotesFile::new);
                info!(%offset, notes = %notes_file.path().display(), "Starting");
                let app = App::new(LocalClock::new(offset), notes_file);
                with_terminal(|terminal| app.run(terminal).context("terminal I/O failed"))
            }
            Command::Help => {
                println!("Usage: calendar-square [-n|--notes <PATH>]");
                println!();
                println!("Square terminal calendar showing today's date beside a persistent notes pad");
                println!();
                println!("Options:");
                println!("  -n, --notes <PATH>");
                println!("                    Keep notes in the given file [default: calendar_square/calendar_notes.txt]");
                println!();
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                println!();
                println!("Set CALENDAR_SQUARE_LOG=1 to write a log file.");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
