// Terminal Sokoban front-end.
// Controls: W/A/S/D or arrow keys (immediate response), R to reset, Q to quit.

use std::io;
use std::path::Path;

use clap::Parser;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use serde_json::Value;
use tracing::{error, info};

use sokoban_engine::config::{Cli, Command, CreateArgs, Identity, LayoutSource, MapsCommand, PlayArgs};
use sokoban_engine::console_interface::ConsoleInput::*;
use sokoban_engine::console_interface::{
    cleanup_terminal, handle_input, parse_level, render_game, setup_terminal,
};
use sokoban_engine::layout::{EncodedLayout, TEMPLATES, template, validate_layout_str};
use sokoban_engine::models::GameRenderState;
use sokoban_engine::play::PlaySession;
use sokoban_engine::store::{InMemoryMapStore, MapRepository, NewMap, Role, Session, StoreError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    sokoban_engine::logging::init_tracing(&cli.log_file)?;

    let mut store = InMemoryMapStore::load(&cli.store)?;
    let session = open_session(&mut store, &cli.identity)?;
    let writes_store = cli.identity.user.is_some()
        || matches!(cli.command, Command::Play(_) | Command::Maps(_));

    let result = match cli.command {
        Command::Play(args) => run_play(args, &mut store, &session),
        Command::Validate { file } => run_validate(&file),
        Command::Templates => {
            for t in TEMPLATES {
                println!("{:<14} {}x{}  {} - {}", t.key, t.width(), t.height(), t.name, t.description);
            }
            Ok(())
        }
        Command::Maps(command) => run_maps(command, &mut store, &session),
    };

    if let Err(err) = &result {
        error!(error = %err, "command failed");
    }
    if writes_store {
        store.save(&cli.store)?;
    }
    result
}

fn open_session(store: &mut InMemoryMapStore, identity: &Identity) -> Result<Session, StoreError> {
    match &identity.user {
        Some(name) => {
            let role = if identity.admin { Role::Admin } else { Role::Player };
            Ok(Session::for_user(store.sign_in(name, role)?))
        }
        None => Ok(Session::anonymous()),
    }
}

/// Plain-text grids are converted; anything starting with `{` is taken as JSON.
fn read_layout_text(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    if text.trim_start().starts_with('{') {
        Ok(text)
    } else {
        Ok(parse_level(&text))
    }
}

fn run_validate(file: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let text = read_layout_text(file)?;
    match validate_layout_str(&text) {
        Ok(validated) => {
            println!("OK {}", validated.encode());
            Ok(())
        }
        Err(err) => Err(format!("{}: {}", err.title(), err).into()),
    }
}

fn resolve_layout(
    source: &LayoutSource,
) -> Result<Value, Box<dyn std::error::Error>> {
    if let Some(key) = &source.template {
        let t = template(key).ok_or_else(|| format!("Unknown template: {}", key))?;
        return Ok(t.layout_value());
    }
    match &source.file {
        Some(path) => Ok(Value::String(read_layout_text(path)?)),
        None => Err("A template or file is required".into()),
    }
}

fn run_maps(
    command: MapsCommand,
    store: &mut InMemoryMapStore,
    session: &Session,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        MapsCommand::List => {
            for map in store.list_maps() {
                println!("{:>4}  {:<24} by {}", map.id, map.name, map.created_by);
            }
        }
        MapsCommand::Show { id } => {
            let detail = store.get_map(id)?;
            println!("{} (#{}) by {}", detail.map.name, detail.map.id, detail.map.created_by);
            if !detail.map.description.is_empty() {
                println!("{}", detail.map.description);
            }
            let layout: EncodedLayout = serde_json::from_str(&detail.map.layout)?;
            for row in &layout.grid {
                println!("  {}", row);
            }
            if detail.scores.is_empty() {
                println!("No scores yet");
            }
            for (rank, score) in detail.scores.iter().enumerate() {
                println!("{:>3}. {:<16} {}", rank + 1, score.username, score.steps);
            }
        }
        MapsCommand::Create(CreateArgs { name, description, source }) => {
            let layout = resolve_layout(&source)?;
            let record = store.create_map(session, NewMap {
                name,
                description,
                layout: Some(layout),
            })?;
            println!("Created map #{} {}", record.id, record.name);
        }
        MapsCommand::Delete { id } => {
            store.delete_map(session, id)?;
            println!("Deleted map #{}", id);
        }
    }
    Ok(())
}

fn run_play(
    args: PlayArgs,
    store: &mut InMemoryMapStore,
    session: &Session,
) -> Result<(), Box<dyn std::error::Error>> {
    let (title, layout) = match (&args.map, &args.template, &args.file) {
        (Some(id), _, _) => {
            let detail = store.get_map(*id)?;
            (detail.map.name, detail.map.layout)
        }
        (_, Some(key), _) => {
            let t = template(key).ok_or_else(|| format!("Unknown template: {}", key))?;
            (t.name.to_string(), t.layout_value().to_string())
        }
        (_, _, Some(path)) => (path.display().to_string(), read_layout_text(path)?),
        _ => return Err("A map, template or file is required".into()),
    };

    info!(%title, map_id = ?args.map, "starting level");
    let mut play = PlaySession::new(&layout, args.map);
    let mut terminal = setup_terminal()?;
    let result = run_interactive(&mut terminal, &title, &mut play, store, session);
    cleanup_terminal()?;
    result
}

fn run_interactive(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    title: &str,
    play: &mut PlaySession,
    store: &mut InMemoryMapStore,
    session: &Session,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut to_render = GameRenderState {
        title: title.to_string(),
        game: play.engine().game_state().clone(),
        won: play.engine().is_complete(),
        last_outcome: None,
        message: None,
    };
    render_game(terminal, &to_render)?;

    loop {
        match handle_input()? {
            Quit => break,
            Play(action) => {
                let (outcome, completion) = play.apply(action, store, session);
                to_render.game = play.engine().game_state().clone();
                to_render.won = play.engine().is_complete();
                to_render.last_outcome = outcome;
                if let Some(event) = completion {
                    to_render.message = Some(match event.submission {
                        Some(Ok(score)) => format!("Score saved, best: {} steps", score.steps),
                        Some(Err(err)) => format!("Score not saved: {}", err),
                        None => format!("Solved in {} steps", event.steps),
                    });
                }
                render_game(terminal, &to_render)?;

                if to_render.won {
                    // Keep showing the win screen until user inputs
                    loop {
                        match handle_input()? {
                            Timeout => {}
                            _ => break,
                        }
                    }
                    break;
                }
            }
            Timeout | Unknown => {}
        }
    }

    Ok(())
}
