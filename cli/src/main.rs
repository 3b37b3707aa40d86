use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::thread;

use anyhow::Context;
use memoreto_core::{
    BoardGenerator, Coord2, GameSession, MatchOutcome, ShuffleGenerator,
};
use prompt::Command;
use settings::Settings;

mod prompt;
mod settings;
mod view;

fn main() -> ExitCode {
    env_logger::init();

    let settings = Settings::default();
    match run(&settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(settings: &Settings) -> anyhow::Result<()> {
    let board = ShuffleGenerator::new(rand::random())
        .generate(&settings.config)
        .context("board configuration is invalid")?;
    let mut session = GameSession::new(board);
    let mut stdin = io::stdin().lock();

    loop {
        draw(&session, &[], settings);

        let Some(first) = pick(
            &mut stdin,
            "Pick first card  (row,col) or q to quit: ",
            &session,
            None,
        )?
        else {
            return farewell();
        };
        let Some(second) = pick(
            &mut stdin,
            "Pick second card (row,col): ",
            &session,
            Some(first),
        )?
        else {
            return farewell();
        };

        // show both cards before judging them
        draw(&session, &[first, second], settings);
        thread::sleep(settings.reveal_delay);

        match session.select_pair(first, second) {
            Ok(MatchOutcome::Matched) => {
                println!(
                    "{}",
                    view::paint("Match!", view::SUCCESS, settings.color_enabled)
                );
            }
            Ok(MatchOutcome::NoMatch) => {
                println!(
                    "{}",
                    view::paint("Not a match...", view::FAIL, settings.color_enabled)
                );
            }
            // the prompts pre-validate, so this only triggers under races the
            // session guards against itself; re-prompt either way
            Err(err) => {
                log::warn!("selection rejected by session: {err}");
                println!("{err}");
                continue;
            }
        }
        thread::sleep(settings.reveal_delay);

        if session.is_complete() {
            draw(&session, &[], settings);
            println!(
                "You matched all pairs in {} moves, {:.2}s!",
                session.move_count(),
                session.elapsed().as_secs_f64()
            );
            return Ok(());
        }
    }
}

/// Prompts until the player names a hidden, in-range cell distinct from
/// `taken`, or asks to quit (`None`). End of input counts as quitting.
fn pick(
    stdin: &mut impl BufRead,
    prompt_text: &str,
    session: &GameSession,
    taken: Option<Coord2>,
) -> anyhow::Result<Option<Coord2>> {
    let mut line = String::new();
    loop {
        print!("{prompt_text}");
        io::stdout().flush().context("failed to flush stdout")?;

        line.clear();
        let bytes = stdin.read_line(&mut line).context("failed to read input")?;
        if bytes == 0 {
            return Ok(None);
        }

        match line.parse::<Command>() {
            Ok(Command::Quit) => return Ok(None),
            Ok(Command::Pick(coords)) => {
                let size = session.size();
                if coords.0 >= size || coords.1 >= size {
                    println!("Enter as row,col within range, e.g. 1,2");
                    continue;
                }
                if taken == Some(coords) {
                    println!("You already picked that card.");
                    continue;
                }
                if !session.card_at(coords).is_hidden() {
                    println!("Card already matched, pick another.");
                    continue;
                }
                return Ok(Some(coords));
            }
            Err(_) => println!("Enter as row,col within range, e.g. 1,2"),
        }
    }
}

fn draw(session: &GameSession, flips: &[Coord2], settings: &Settings) {
    print!("{}", view::CLEAR_SCREEN);
    print!("{}", view::render(session, flips, settings));
}

fn farewell() -> anyhow::Result<()> {
    println!("Goodbye!");
    Ok(())
}
