use std::io;
use std::path::Path;

use rand::rngs::StdRng;
use tracing::info;

use hr_mechanics::{CheckOutcome, ExtendedTest, Roster, RollError, RoundInput, TestComposer};

use crate::{prompt, render};

/// Flags for `hr roll`.
pub struct RollOptions {
    pub mods: i32,
    pub verbose: bool,
    pub edge: bool,
    pub opposed: i32,
    pub extended: bool,
}

pub fn run(
    config_path: Option<&Path>,
    target: &str,
    options: RollOptions,
    rng: &mut StdRng,
) -> Result<(), String> {
    let composer = super::load_composer(config_path)?;

    if options.opposed != 0 {
        let result = composer
            .run_opposed_target(target, options.mods, options.opposed, options.edge, rng)
            .map(Some)
            .or_else(no_test)?;
        if let Some(result) = result {
            println!("{}", render::opposed(&result, options.verbose));
        }
        return Ok(());
    }

    let outcome = composer
        .run_test(target, options.mods, options.edge, options.extended, rng)
        .map(Some)
        .or_else(no_test)?;
    match outcome {
        Some(CheckOutcome::Simple(result)) => {
            println!("{}", render::check(&result, options.verbose));
            Ok(())
        }
        Some(CheckOutcome::Extended(test)) => run_extended(&composer, test, &options, rng),
        None => Ok(()),
    }
}

/// An unknown character means no test was performed; it is not a failure.
fn no_test<T>(err: RollError) -> Result<Option<T>, String> {
    match err {
        RollError::SubjectNotFound(subject) => {
            println!("no test performed: unknown character '{subject}'");
            Ok(None)
        }
        other => Err(other.to_string()),
    }
}

/// Roll rounds until the pool is down to one die, the player stops, or input ends.
fn run_extended(
    composer: &TestComposer<Roster>,
    mut test: ExtendedTest,
    options: &RollOptions,
    rng: &mut StdRng,
) -> Result<(), String> {
    info!(subject = test.subject_id(), pool = test.base_pool(), "extended test");
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = io::stdout();

    let mut input = RoundInput::new(0, options.edge);
    loop {
        let round_number = test.round();
        let round = test
            .advance(input, composer.config(), rng)
            .map_err(|e| e.to_string())?;

        println!("{}", render::extended_header(round_number, &round.result));
        println!("{}", render::check(&round.result, options.verbose));
        println!("TOTAL NET HITS: {}", round.state.cumulative_hits());

        if round.terminated {
            break;
        }
        match prompt::ask(&mut reader, &mut stdout).map_err(|e| e.to_string())? {
            Some(next) => input = next,
            None => break,
        }
        test = round.state;
    }

    Ok(())
}
