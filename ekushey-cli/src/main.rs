//! ekushey command-line tool: an interactive typing REPL plus glyph-table
//! inspection utilities.

use std::io::{self, BufRead, Write};

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use ekushey_engine::phonetic::{build_arabic_phonetic, build_avro};
use ekushey_engine::direct::{build_arabic, build_jatiyo, build_provhat, build_unibijoy};
use ekushey_engine::{EditableText, GlyphTable, Layout};
use ekushey_im::config::Settings;
use ekushey_im::{Key, KeyEvent, KeyModifiers, KeyboardEngine, SwitchDirection};

#[derive(Parser)]
#[command(name = "ekushey", about = "Multilingual phonetic keyboard engine", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Interactive typing session against a layout
    Repl {
        /// Layout to start on (defaults to the configured default layout)
        #[arg(long)]
        layout: Option<String>,
    },
    /// List known layouts
    Layouts,
    /// Dump a layout's glyph table as JSON
    Dump {
        #[arg(long)]
        layout: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Repl { layout } => repl(layout.as_deref()),
        Command::Layouts => {
            list_layouts();
            Ok(())
        }
        Command::Dump { layout } => dump_layout(&layout),
    }
}

fn list_layouts() {
    for layout in Layout::ALL {
        let kind = if layout.is_phonetic() {
            "phonetic"
        } else if layout.is_direct() {
            "direct"
        } else {
            "passthrough"
        };
        println!("{:16} {}", layout.id(), kind);
    }
}

fn glyph_table_json(layout: Layout, table: &GlyphTable) -> serde_json::Value {
    let general: serde_json::Map<String, serde_json::Value> = table
        .general_entries()
        .map(|(k, v)| (k.to_string(), v.into()))
        .collect();
    let word_initial: serde_json::Map<String, serde_json::Value> = table
        .word_initial_entries()
        .map(|(k, v)| (k.to_string(), v.into()))
        .collect();
    serde_json::json!({
        "layout": layout.id(),
        "general": general,
        "word_initial": word_initial,
    })
}

fn dump_layout(name: &str) -> Result<()> {
    let layout: Layout = name.parse()?;
    let value = match layout {
        Layout::Avro => glyph_table_json(layout, &build_avro()),
        Layout::ArabicPhonetic => glyph_table_json(layout, &build_arabic_phonetic()),
        Layout::Jatiyo | Layout::UniBijoy | Layout::Provhat | Layout::Arabic => {
            let map = match layout {
                Layout::Jatiyo => build_jatiyo(),
                Layout::UniBijoy => build_unibijoy(),
                Layout::Provhat => build_provhat(),
                _ => build_arabic(),
            };
            let keys: serde_json::Map<String, serde_json::Value> = map
                .entries()
                .map(|(k, v)| (k.to_string(), v.into()))
                .collect();
            serde_json::json!({ "layout": layout.id(), "keys": keys })
        }
        Layout::English => bail!("english is a passthrough layout, nothing to dump"),
    };
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn print_help() {
    println!("  :layout <id>   switch to a layout");
    println!("  :switch        cycle to the next enabled layout");
    println!("  :clear         clear the buffer");
    println!("  :quit          exit");
}

fn repl(layout: Option<&str>) -> Result<()> {
    let settings = Settings::load()?;
    let mut engine = KeyboardEngine::with_config(settings.engine_config());
    let initial = match layout {
        Some(name) => name.parse()?,
        None => settings.input.default_layout,
    };
    engine.set_layout(initial);

    let mut editor = EditableText::new();
    println!("ekushey repl - layout {} (:q to quit)", engine.layout());
    print_help();

    let stdin = io::stdin();
    loop {
        print!("{}> ", engine.layout());
        io::stdout().flush()?;
        let Some(line) = stdin.lock().lines().next() else {
            break;
        };
        let line = line?;

        if let Some(command) = line.strip_prefix(':') {
            match command.split_whitespace().collect::<Vec<_>>().as_slice() {
                ["quit"] | ["q"] => break,
                ["clear"] => {
                    editor = EditableText::new();
                    engine.reset();
                }
                ["switch"] => {
                    engine.switch_layout(SwitchDirection::Next);
                }
                ["layout", name] => match name.parse() {
                    Ok(layout) => engine.set_layout(layout),
                    Err(e) => eprintln!("{e}"),
                },
                _ => print_help(),
            }
            continue;
        }

        for ch in line.chars() {
            let key = if ch.is_ascii_uppercase() {
                KeyEvent::new(Key::from_char(ch), KeyModifiers::new().with_shift(true), true)
            } else {
                KeyEvent::press_char(ch)
            };
            let result = engine.process_key(&key, &editor);
            if let Some(splice) = &result.splice {
                editor.apply_splice(splice);
            }
        }
        println!("{}", editor.text());
    }
    Ok(())
}
