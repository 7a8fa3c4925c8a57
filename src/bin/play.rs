//! Interactive play loop: everyone shares one keyboard.
//!
//! Usage: `wordfield [WORD_LIST] [SAVE_DIR]`
//!
//! The word list is a newline-separated file (default `dictionary.txt`).
//! Every committed turn is persisted, so a game can be resumed by id.

use std::io::{self, BufRead, Write};
use std::process;

use wordfield::{
    parse_command, FileStore, Game, GameBuilder, SnapshotError, SnapshotStore, WordList,
};

fn main() {
    let mut args = std::env::args().skip(1);
    let dict_path = args.next().unwrap_or_else(|| "dictionary.txt".to_string());
    let save_dir = args.next().unwrap_or_else(|| "saves".to_string());

    let lexicon = match WordList::from_path(&dict_path) {
        Ok(lexicon) => lexicon,
        Err(err) => {
            eprintln!("could not load word list {dict_path:?}: {err}");
            process::exit(1);
        }
    };

    let store = match FileStore::new(&save_dir) {
        Ok(store) => store,
        Err(err) => {
            eprintln!("could not open save directory {save_dir:?}: {err}");
            process::exit(1);
        }
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let (id, mut game) = start_game(&mut lines, &store);
    println!("game id: {id}");

    loop {
        println!();
        print!("{}", game.board());
        let current = game.current_player();
        println!(
            "{} ({} points): {}",
            current.name(),
            current.score(),
            rack(current.hand()),
        );
        println!("tiles remaining: {}", game.bag().len());

        let Some(line) = prompt(&mut lines, "move> ") else {
            return;
        };
        if line == "quit" {
            return;
        }

        let request = match parse_command(&line) {
            Ok(request) => request,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        let acting = game.current_player().name().to_string();
        match game.apply_turn_saved(&id, request, &lexicon, &store) {
            Err(err) => println!("{err}"),
            Ok(outcome) => {
                println!("{acting}: {outcome}");
                if let Some(standings) = outcome.standings {
                    println!();
                    println!("winning player: {}", standings.winner);
                    for (name, score) in &standings.scores {
                        println!("  {name}: {score} points");
                    }
                    for player in game.roster().players() {
                        println!(
                            "  {} best word: {} ({} points)",
                            player.name(),
                            player.best_word(),
                            player.best_turn_score(),
                        );
                    }
                    return;
                }
            }
        }
    }
}

fn start_game(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    store: &FileStore,
) -> (String, Game) {
    loop {
        let Some(action) = prompt(lines, "new game or load one? [new/load]: ") else {
            process::exit(0);
        };
        match action.as_str() {
            "new" => {
                let Some(id) = prompt(lines, "game id: ") else {
                    process::exit(0);
                };
                return (id, new_game(lines));
            }
            "load" => {
                let Some(id) = prompt(lines, "game id: ") else {
                    process::exit(0);
                };
                match store.load(&id) {
                    Ok(snapshot) => return (id, Game::restore(snapshot)),
                    Err(SnapshotError::NotFound(_)) => println!("no saved game {id:?}"),
                    Err(err) => {
                        eprintln!("could not load game {id:?}: {err}");
                        process::exit(1);
                    }
                }
            }
            other => println!("invalid action {other:?}"),
        }
    }
}

fn new_game(lines: &mut impl Iterator<Item = io::Result<String>>) -> Game {
    let count = loop {
        let Some(text) = prompt(lines, "number of players [1-4]: ") else {
            process::exit(0);
        };
        match text.parse::<usize>() {
            Ok(n) if (1..=4).contains(&n) => break n,
            _ => println!("invalid number of players"),
        }
    };

    let mut builder = GameBuilder::new();
    for i in 1..=count {
        let Some(name) = prompt(lines, &format!("player {i} name: ")) else {
            process::exit(0);
        };
        builder = builder.player(name);
    }
    builder.build()
}

fn prompt(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    text: &str,
) -> Option<String> {
    loop {
        print!("{text}");
        let _ = io::stdout().flush();
        let line = lines.next()?.ok()?;
        let line = line.trim().to_string();
        if !line.is_empty() {
            return Some(line);
        }
    }
}

fn rack(hand: &[wordfield::Tile]) -> String {
    hand.iter().map(ToString::to_string).collect()
}
