#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Console adapter that runs the Snake Maze prompt loop.

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::Parser;
use snake_maze_core::{Command, Direction, Mode, Outcome};
use snake_maze_world::{apply, map::MapDescriptor, query, World};

mod board;

/// Command-line arguments accepted by the console adapter.
#[derive(Parser, Debug)]
#[command(name = "snake-maze", about = "Console pursuit maze")]
struct Args {
    /// Map descriptor file to load.
    #[arg(short, long, value_name = "FILE", default_value = "maps.txt")]
    map: PathBuf,
}

/// Entry point for the Snake Maze command-line interface.
fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let descriptor = MapDescriptor::load(&args.map)?;
    let mut world = World::from_descriptor(descriptor);
    let mut events = Vec::new();

    println!("{}", query::welcome_banner(&world));
    apply(&mut world, Command::Start, &mut events);

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        print!("{}", board::render(query::grid_view(&world)));
        println!("turns: {}", query::turns_taken(&world));

        if query::mode(&world) == Mode::GameOver {
            match query::outcome(&world) {
                Some(Outcome::Won) => println!("You reached the goal. You win!"),
                _ => println!("The chaser caught you. Game over."),
            }
            break;
        }

        print!("move (u/d/l/r) or undo (n): ");
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let Some(command) = parse_command(line.trim()) else {
            continue;
        };

        events.clear();
        apply(&mut world, command, &mut events);
    }

    Ok(())
}

fn parse_command(input: &str) -> Option<Command> {
    match input {
        "u" => Some(Command::Move {
            direction: Direction::Up,
        }),
        "d" => Some(Command::Move {
            direction: Direction::Down,
        }),
        "l" => Some(Command::Move {
            direction: Direction::Left,
        }),
        "r" => Some(Command::Move {
            direction: Direction::Right,
        }),
        "n" => Some(Command::Undo),
        _ => None,
    }
}
