//! Funtexto command-line entrypoint.

use anyhow::{Context, bail};
use mimalloc::MiMalloc;
use serde_json::json;

use funtexto::{Config, Difficulty, Game, daily_game_id};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

const USAGE: &str = "usage:
  funtexto guess <target> <word>
  funtexto hint <target> [best-guess] [--difficulty easy|medium|hard]
  funtexto nearby <target>
  funtexto warm <target>
  funtexto daily";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        bail!("{USAGE}");
    };

    let config = Config::from_env()?;
    config.validate()?;
    tracing::debug!(?config, "Configuration loaded");

    let game = Game::from_config(&config)?;

    let output = run(&game, command, &args[1..]).await;
    game.shutdown().await;

    println!("{}", serde_json::to_string_pretty(&output?)?);
    Ok(())
}

async fn run(game: &Game, command: &str, args: &[String]) -> anyhow::Result<serde_json::Value> {
    let output = match command {
        "guess" => {
            let [target, word] = positional::<2>(args)?;
            serde_json::to_value(game.guess(target, word).await?)?
        }
        "hint" => {
            let (difficulty, rest) = split_difficulty(args)?;
            let Some(target) = rest.first() else {
                bail!("{USAGE}");
            };
            let best = rest.get(1).map(String::as_str);
            serde_json::to_value(game.hint(target, best, difficulty).await?)?
        }
        "nearby" => {
            let [target] = positional::<1>(args)?;
            serde_json::to_value(game.nearby(target).await)?
        }
        "warm" => {
            let [target] = positional::<1>(args)?;
            let list = game.warm(target).await?;
            json!({ "target": list.target(), "words": list.len() })
        }
        "daily" => {
            let today = chrono::Local::now().date_naive();
            let target = game.reveal(None, today)?;
            json!({ "game_id": daily_game_id(today), "date": today.to_string(), "target": target })
        }
        other => bail!("unknown command '{other}'\n{USAGE}"),
    };

    Ok(output)
}

fn positional<const N: usize>(args: &[String]) -> anyhow::Result<[&str; N]> {
    let refs: Vec<&str> = args.iter().map(String::as_str).collect();
    <[&str; N]>::try_from(refs.as_slice())
        .ok()
        .with_context(|| format!("expected {N} argument(s)\n{USAGE}"))
}

fn split_difficulty(args: &[String]) -> anyhow::Result<(Difficulty, Vec<String>)> {
    let mut difficulty = Difficulty::default();
    let mut rest = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if arg == "--difficulty" {
            let value = iter.next().context("--difficulty needs a value")?;
            difficulty = value.parse()?;
        } else {
            rest.push(arg.clone());
        }
    }

    Ok((difficulty, rest))
}
