//! Self-play command - agent-vs-agent series with a win/draw tally

use anyhow::{Result, anyhow};
use clap::Parser;
use serde::Serialize;

use crate::{
    agent::{Agent, EngineAgent, RandomAgent},
    arena::{Arena, MatchSummary},
    cli::{
        config::{GlobalArgs, parse_player_token},
        output::{create_games_progress, format_percent, print_json, print_kv, print_section},
    },
    engine::Engine,
    tictactoe::Player,
};

#[derive(Parser, Debug)]
#[command(about = "Play a series of games between two agents")]
pub struct SelfPlayArgs {
    /// Board edge length
    #[arg(long, short = 's', default_value_t = 3)]
    pub size: usize,

    /// Number of games
    #[arg(long, short = 'g', default_value_t = 10)]
    pub games: usize,

    /// Agent playing X (minimax, random)
    #[arg(long, default_value = "minimax")]
    pub x: String,

    /// Agent playing O (minimax, random)
    #[arg(long, default_value = "random")]
    pub o: String,

    /// Which token opens the first game (`x` or `o`)
    #[arg(long = "first-player", default_value = "x")]
    pub first_player: String,

    /// Swap the opening player after every game
    #[arg(long)]
    pub alternate: bool,
}

#[derive(Debug, Serialize)]
struct SelfPlayReport {
    size: usize,
    x: String,
    o: String,
    #[serde(flatten)]
    summary: MatchSummary,
}

fn create_agent(
    kind: &str,
    player: Player,
    engine: &Engine,
    seed: Option<u64>,
) -> Result<Box<dyn Agent>> {
    let name = format!("{}-{player}", kind.to_lowercase());
    let mut agent: Box<dyn Agent> = match kind.to_lowercase().as_str() {
        "minimax" | "engine" => Box::new(EngineAgent::new(name, engine.clone())),
        "random" => Box::new(RandomAgent::new(name)),
        other => {
            return Err(anyhow!(
                "Unknown agent type: '{other}'. Supported: minimax, random"
            ));
        }
    };

    if let Some(seed) = seed {
        let offset = match player {
            Player::X => 0,
            Player::O => 1,
        };
        agent.set_rng_seed(seed.wrapping_add(offset))?;
    }

    Ok(agent)
}

pub fn execute(args: SelfPlayArgs, global: &GlobalArgs) -> Result<()> {
    let engine = global.engine()?;
    let seed = engine.config().seed;
    let first_player = parse_player_token(&args.first_player, "--first-player")?;

    let mut x = create_agent(&args.x, Player::X, &engine, seed)?;
    let mut o = create_agent(&args.o, Player::O, &engine, seed)?;

    let arena = Arena::new(args.size)
        .with_first_player(first_player)
        .with_alternating_first(args.alternate);

    let summary = if global.json {
        arena.run(x.as_mut(), o.as_mut(), args.games)?
    } else {
        let progress = create_games_progress(args.games as u64);
        progress.set_message(format!("{} vs {}", x.name(), o.name()));
        let summary = arena.run_with_progress(x.as_mut(), o.as_mut(), args.games, |done| {
            progress.set_position(done as u64)
        })?;
        progress.finish_and_clear();
        summary
    };

    let report = SelfPlayReport {
        size: args.size,
        x: x.name().to_string(),
        o: o.name().to_string(),
        summary,
    };

    if global.json {
        return print_json(&report);
    }

    print_section(&format!(
        "{} vs {} on {}x{}",
        report.x, report.o, args.size, args.size
    ));
    print_kv("Games", &summary.games.to_string());
    print_kv(
        "X wins",
        &format!("{} ({})", summary.x_wins, format_percent(summary.x_win_rate())),
    );
    print_kv(
        "O wins",
        &format!("{} ({})", summary.o_wins, format_percent(summary.o_win_rate())),
    );
    print_kv(
        "Draws",
        &format!("{} ({})", summary.draws, format_percent(summary.draw_rate())),
    );

    Ok(())
}
