use clap::Parser;
use console::style;
use directories::ProjectDirs;
use resub::api::ResubApi;
use resub::commands::{CmdMessage, ListEntry, MessageLevel};
use resub::error::{ResubError, Result};
use resub::idgen::UuidSource;
use resub::migrate;
use resub::store::fs::FileStore;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

mod args;
use args::{Cli, Commands, PatternCommands, ReplacerCommands};

fn main() {
    if let Err(e) = run() {
        print_messages(&[CmdMessage::error(format!("Error: {}", e))]);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings_path = settings_path(&cli)?;

    // Migrate works on raw files and does not need a session.
    if let Some(Commands::Migrate { file, write }) = &cli.command {
        let target = file.clone().unwrap_or(settings_path);
        return handle_migrate(target, *write);
    }

    let store = FileStore::at_path(settings_path);
    let mut api = ResubApi::open(store, Box::new(UuidSource::new()))?;

    match cli.command {
        Some(Commands::Apply { text }) => handle_apply(&mut api, text),
        Some(Commands::Pattern(cmd)) => match cmd {
            PatternCommands::Add { text } => print_result(api.add_pattern(text)?),
            PatternCommands::Remove { index } => print_result(api.remove_pattern(&index)?),
        },
        Some(Commands::Replacer(cmd)) => match cmd {
            ReplacerCommands::Add { text } => print_result(api.add_replacer(text)?),
            ReplacerCommands::Remove { index } => print_result(api.remove_replacer(&index)?),
        },
        Some(Commands::Link { pattern, replacer }) => print_result(api.link(&pattern, &replacer)?),
        Some(Commands::Unlink { link }) => print_result(api.unlink(&link)?),
        Some(Commands::Enable { link }) => print_result(api.set_link_enabled(&link, true)?),
        Some(Commands::Disable { link }) => print_result(api.set_link_enabled(&link, false)?),
        Some(Commands::Comment { link, text }) => print_result(api.set_link_comment(&link, text)?),
        Some(Commands::On) => print_result(api.set_active(true)?),
        Some(Commands::Off) => print_result(api.set_active(false)?),
        Some(Commands::Doctor) => print_result(api.doctor()?),
        Some(Commands::List) | None => handle_list(&api),
        // Handled before the session was opened.
        Some(Commands::Migrate { .. }) => Ok(()),
    }
}

fn settings_path(cli: &Cli) -> Result<PathBuf> {
    if let Some(path) = &cli.settings {
        return Ok(path.clone());
    }
    let dirs = ProjectDirs::from("com", "resub", "resub")
        .ok_or_else(|| ResubError::Store("Could not determine the data directory".to_string()))?;
    Ok(dirs.data_dir().join("settings.json"))
}

fn handle_apply(api: &mut ResubApi<FileStore>, text: Option<String>) -> Result<()> {
    let input = match text {
        Some(t) => t,
        None => {
            if std::io::stdin().is_terminal() {
                return Err(ResubError::Api(
                    "No input text (pass an argument or pipe stdin)".into(),
                ));
            }
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(ResubError::Io)?;
            buffer
        }
    };

    let result = api.apply(&input)?;
    print_messages(&result.messages);
    if let Some(output) = result.output {
        print!("{}", output);
        if !output.ends_with('\n') {
            println!();
        }
    }
    Ok(())
}

fn handle_list(api: &ResubApi<FileStore>) -> Result<()> {
    print_section("Patterns", &api.list_patterns()?.listing, "No patterns.");
    print_section("Replacers", &api.list_replacers()?.listing, "No replacers.");
    print_section("Links", &api.list_links()?.listing, "No links.");
    if !api.settings().active {
        println!("{}", style("resub is off").yellow());
    }
    Ok(())
}

fn handle_migrate(path: PathBuf, write: bool) -> Result<()> {
    let content = std::fs::read_to_string(&path).map_err(ResubError::Io)?;
    let blob = serde_json::from_str(&content).map_err(ResubError::Serialization)?;

    let mut ids = UuidSource::new();
    let mut settings = migrate::migrate(&blob, &mut ids);
    migrate::ensure_default_links(&mut settings, &mut ids);

    let pretty = serde_json::to_string_pretty(&settings).map_err(ResubError::Serialization)?;
    if write {
        std::fs::write(&path, pretty).map_err(ResubError::Io)?;
        println!("{}", style(format!("Migrated {}", path.display())).green());
    } else {
        println!("{}", pretty);
    }
    Ok(())
}

fn print_result(result: resub::commands::CmdResult) -> Result<()> {
    print_listing(&result.listing);
    print_messages(&result.messages);
    Ok(())
}

fn print_section(title: &str, entries: &[ListEntry], empty: &str) {
    println!("{}", style(title).bold());
    if entries.is_empty() {
        println!("  {}", style(empty).dim());
    } else {
        print_listing(entries);
    }
}

fn print_listing(entries: &[ListEntry]) {
    for entry in entries {
        if entry.detail.is_empty() {
            println!("  {}  {}", style(&entry.index).cyan(), entry.text);
        } else {
            println!(
                "  {}  {}  {}",
                style(&entry.index).cyan(),
                entry.text,
                style(format!("({})", entry.detail)).dim()
            );
        }
    }
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", style(&message.content).green()),
            MessageLevel::Warning => eprintln!("{}", style(&message.content).yellow()),
            MessageLevel::Error => eprintln!("{}", style(&message.content).red()),
        }
    }
}
