//! tdot CLI entry point.
//!
//! Reads Graphviz JSON (`dot -Tjson`) from a file or stdin and prints it as
//! text sized to the terminal.

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use tdot::config::DEFAULT_RESERVED_ROWS;
use tdot::renderers::charset::CharSet;
use tdot::{LabelAnchor, RenderConfig, TermSize, render_json};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Anchor {
    /// Start labels at the node center
    Center,
    /// Start labels at the node's lower-left corner
    LowerLeft,
}

impl From<Anchor> for LabelAnchor {
    fn from(a: Anchor) -> Self {
        match a {
            Anchor::Center => LabelAnchor::Center,
            Anchor::LowerLeft => LabelAnchor::LowerLeft,
        }
    }
}

/// Graphviz JSON layout to terminal text.
#[derive(Parser, Debug)]
#[command(
    name = "tdot",
    version = env!("TDOT_VERSION"),
    about = "Render Graphviz JSON layouts (dot -Tjson) as terminal text"
)]
struct Cli {
    /// Input file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Use plain ASCII instead of Unicode box-drawing characters
    #[arg(short = 'a', long = "ascii")]
    use_ascii: bool,

    /// Output width in columns (default: terminal width)
    #[arg(long, env = "COLUMNS")]
    cols: Option<u16>,

    /// Terminal height in rows (default: terminal height)
    #[arg(long, env = "LINES")]
    rows: Option<u16>,

    /// Rows left free below the drawing
    #[arg(long, default_value_t = DEFAULT_RESERVED_ROWS)]
    reserved_rows: u16,

    /// Where node labels are anchored
    #[arg(long, value_enum, default_value = "lower-left")]
    anchor: Anchor,

    /// Write output to this file instead of stdout
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Log parsing and drawing steps to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("tdot=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Explicit sizes win; otherwise ask the terminal, falling back to 80x24.
fn terminal_size(cols: Option<u16>, rows: Option<u16>) -> TermSize {
    if let (Some(cols), Some(rows)) = (cols, rows) {
        return TermSize::new(cols, rows);
    }
    let queried = match crossterm::terminal::size() {
        Ok((c, r)) if c > 0 && r > 0 => TermSize::new(c, r),
        Ok(_) | Err(_) => {
            debug!("terminal size unavailable, using fallback");
            TermSize::FALLBACK
        }
    };
    TermSize::new(cols.unwrap_or(queried.cols), rows.unwrap_or(queried.rows))
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("error: {}", msg);
    process::exit(1);
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Read input from file or stdin
    let text = if let Some(ref path) = cli.input {
        fs::read_to_string(path)
            .unwrap_or_else(|e| fail(format!("cannot read '{}': {}", path.display(), e)))
    } else {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            fail(format!("cannot read stdin: {}", e));
        }
        buf
    };

    let term = terminal_size(cli.cols, cli.rows);
    debug!(cols = term.cols, rows = term.rows, "terminal size");

    let config = RenderConfig {
        charset: if cli.use_ascii {
            CharSet::Ascii
        } else {
            CharSet::Unicode
        },
        label_anchor: cli.anchor.into(),
        reserved_rows: cli.reserved_rows,
        ..RenderConfig::default()
    };

    let mut rendered = render_json(&text, term, &config).unwrap_or_else(|e| fail(e));
    rendered.push('\n');

    // Write output to file or stdout
    if let Some(ref path) = cli.output {
        if let Err(e) = fs::write(path, rendered) {
            fail(format!("cannot write '{}': {}", path.display(), e));
        }
    } else {
        let mut stdout = io::stdout().lock();
        if let Err(e) = stdout
            .write_all(rendered.as_bytes())
            .and_then(|()| stdout.flush())
        {
            fail(format!("cannot write stdout: {}", e));
        }
    }
}
