use pokemon_duel::config::DEFAULT_ENCOUNTER_PATH;
use pokemon_duel::{
    defeat_xp, Battle, BattleEvent, BattleOutcome, BattleResult, EncounterConfig, FirstMoveAI,
    LiveRng, Move, MoveSelector, PokemonInst, Side, SideSelector,
};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Asks the human at the terminal which move to use. EOF cancels the battle.
struct StdinMoveSelector<R> {
    input: R,
}

impl<R: BufRead> MoveSelector for StdinMoveSelector<R> {
    fn choose_move(&mut self, _side: Side, pokemon: &PokemonInst) -> Option<Move> {
        if pokemon.moves.is_empty() {
            return None;
        }

        println!("\nWhat should {} do?", pokemon.name());
        for (i, move_) in pokemon.moves.iter().enumerate() {
            println!("  {}: {}", i + 1, move_);
        }

        loop {
            print!("Enter move number: ");
            io::stdout().flush().ok()?;

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => {
                    println!("\nBattle input cancelled.");
                    return None;
                }
                Ok(_) => {}
            }

            match line.trim().parse::<usize>() {
                Ok(choice) if (1..=pokemon.moves.len()).contains(&choice) => {
                    return Some(pokemon.moves[choice - 1].clone());
                }
                Ok(_) => println!(
                    "Invalid choice. Please enter a number between 1 and {}.",
                    pokemon.moves.len()
                ),
                Err(_) => println!("Invalid input. Please enter a number."),
            }
        }
    }
}

fn narrate(event: &BattleEvent) {
    if let Some(line) = event.format() {
        println!("{}", line);
    }
}

fn run() -> BattleResult<()> {
    let mut path = DEFAULT_ENCOUNTER_PATH.to_string();
    let mut events_json = false;
    for arg in std::env::args().skip(1) {
        if arg == "--events-json" {
            events_json = true;
        } else {
            path = arg;
        }
    }

    let config = EncounterConfig::load(&path)?;
    let progression = config.progression()?;
    let mut player = config.build_player()?;
    let mut opponent = config.build_opponent()?;
    let mut rng = match config.seed {
        Some(seed) => LiveRng::from_seed(seed),
        None => LiveRng::new_random(),
    };

    println!("{}", player);
    println!("Opponent: {}", opponent);

    let reward = defeat_xp(&opponent);
    let mut selector = SideSelector::new(
        StdinMoveSelector {
            input: io::stdin().lock(),
        },
        FirstMoveAI,
    );

    let mut battle = Battle::new(&mut player, &mut opponent)?.with_listener(narrate);
    let outcome = battle.run(&mut selector, &mut rng);

    match outcome {
        BattleOutcome::Winner(Side::Player) => {
            if let Some(winner) = battle.winner_mut() {
                println!("\n{} gains {} XP!", winner.name(), reward);
                for level_up in winner.gain_xp(reward, &progression, &mut rng) {
                    println!(
                        "*** {} grew to Level {}! ***",
                        winner.name(),
                        level_up.new_level
                    );
                }
                if winner.level < progression.max_level() {
                    println!("Current XP: {}/{}", winner.xp, progression.xp_per_level());
                } else {
                    println!("{} reached Max Level!", winner.name());
                }
                println!("{}", winner);
            }
        }
        BattleOutcome::Winner(Side::Opponent) => {
            if let Some(winner) = battle.winner() {
                println!("\nGame Over: {} is the final winner!", winner.name());
            }
        }
        BattleOutcome::NoWinner => {
            println!("\nGame Over: The battle ended in a draw or unexpectedly.");
        }
    }

    if events_json {
        println!("{}", serde_json::to_string_pretty(battle.event_bus())?);
    }

    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}
