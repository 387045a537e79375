//! rlmotion entrypoint: apply readline motions and kills to a piece of text.
use anyhow::{Context, Result, bail};
use clap::Parser;
use core_actions::{BufferHost, CommandLineHost, EditorHost, ReadlineCommand, dispatch};
use core_config::{Config, load_from};
use core_state::{CommandLineState, CursorShape, EditorState};
use core_text::{Buffer, Position};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "rlmotion", version, about = "Apply readline motions and kills to text")]
struct Args {
    /// Text to edit (may contain newlines).
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    text: Option<String>,
    /// Read the text to edit from a file.
    #[arg(long)]
    file: Option<PathBuf>,
    /// Configuration file path (overrides discovery of `rlmotion.toml`).
    #[arg(long)]
    config: Option<PathBuf>,
    /// Filetype used for word characters and comment leaders.
    #[arg(long)]
    filetype: Option<String>,
    /// Buffer-local word characters.
    #[arg(long)]
    word_chars: Option<String>,
    /// Starting line (one-based).
    #[arg(long, default_value_t = 1)]
    line: usize,
    /// Starting column; defaults to the end of the starting line.
    #[arg(long)]
    cursor: Option<usize>,
    /// Cursor rests on a character instead of between characters.
    #[arg(long)]
    block_cursor: bool,
    /// Treat the text as a single-line prompt without line numbers.
    #[arg(long)]
    command_line: bool,
    /// Write logs to this file instead of stderr.
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Commands to apply in order (e.g. `forward-word kill-word`).
    #[arg(required = true)]
    commands: Vec<ReadlineCommand>,
}

/// Final text, cursor and small-delete register after all commands ran.
#[derive(Debug, PartialEq, Eq)]
struct Report {
    text: String,
    line: Option<usize>,
    column: usize,
    register: String,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.text)?;
        match self.line {
            Some(line) => writeln!(f, "cursor: {}:{}", line, self.column)?,
            None => writeln!(f, "cursor: {}", self.column)?,
        }
        write!(f, "register: {:?}", self.register)
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _guard = configure_logging(args.log_file.as_deref())?;
    install_panic_hook();

    let config = load_from(args.config.clone())?;
    let text = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        (None, None) => bail!("either --text or --file is required"),
    };
    let report = run(&args, &config, &text)?;
    println!("{report}");
    Ok(())
}

fn configure_logging(log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let Some(path) = log_file else {
        // Global subscriber may already be installed; ignore.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
        return Ok(None);
    };
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let name = path
        .file_name()
        .with_context(|| format!("log file path {} has no file name", path.display()))?;
    let file_appender = tracing_appender::rolling::never(dir, name);
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    match tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_ansi(false)
        .with_writer(nb_writer)
        .try_init()
    {
        Ok(_) => Ok(Some(guard)),
        // Already installed; drop guard so writer shuts down.
        Err(_) => Ok(None),
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

fn build_state(args: &Args, text: &str) -> Result<EditorState> {
    let buffer = Buffer::from_str(
        args.file
            .as_ref()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str())
            .unwrap_or("untitled"),
        if args.command_line { "" } else { text },
    )?;
    let mut state = EditorState::new(buffer);
    state.filetype = args.filetype.clone();
    state.word_chars = args.word_chars.clone();
    if args.block_cursor {
        state.cursor_shape = CursorShape::Block;
    }

    if args.command_line {
        if text.contains('\n') {
            bail!("a command-line prompt holds a single line");
        }
        state.command_line = CommandLineState::new(text);
        let len = state.command_line.len();
        let column = args.cursor.unwrap_or(len);
        if column > len {
            bail!("cursor column {column} is past the end of the prompt ({len} characters)");
        }
        while state.command_line.cursor() > column {
            state.command_line.move_left();
        }
        return Ok(state);
    }

    let line_count = state.active_buffer().line_count();
    if args.line == 0 || args.line > line_count {
        bail!("line {} out of range (1..={line_count})", args.line);
    }
    let line = args.line - 1;
    let len = state.active_buffer().line_char_len(line);
    let column = args.cursor.unwrap_or(len);
    if column > len {
        bail!("cursor column {column} is past the end of line {} ({len} characters)", args.line);
    }
    state.cursor = Position::new(line, column);
    Ok(state)
}

fn run(args: &Args, config: &Config, text: &str) -> Result<Report> {
    let mut state = build_state(args, text)?;
    {
        let mut host: Box<dyn EditorHost + '_> = if args.command_line {
            Box::new(CommandLineHost::new(&mut state))
        } else {
            Box::new(BufferHost::new(&mut state))
        };
        for &command in &args.commands {
            dispatch(command, host.as_mut(), config);
        }
    }
    info!(
        target: "runtime",
        commands = args.commands.len(),
        undo_groups = state.undo_groups(),
        "commands_applied"
    );
    Ok(if args.command_line {
        Report {
            text: state.command_line.text(),
            line: None,
            column: state.command_line.cursor(),
            register: state.registers.small_delete().to_string(),
        }
    } else {
        Report {
            text: state.active_buffer().contents(),
            line: Some(state.cursor.line + 1),
            column: state.cursor.column,
            register: state.registers.small_delete().to_string(),
        }
    })
}
