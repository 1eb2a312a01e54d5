//! Terminal blackjack.

use std::io;

use anyhow::Context;
use bjterm::{AccountStore, Cli, Console, Deck, Game, Session, SessionOptions, load_canonical};
use clap::Parser;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let options = SessionOptions::from(Cli::parse());

    let cards = load_canonical(&options.deck_path).context("missing or invalid deck")?;
    let seed = options.seed_or_random();
    log::debug!("shuffle seed {seed}");
    let deck = Deck::new(cards, seed)?;

    let store = AccountStore::new(&options.account_path);
    let account = store
        .load_or_create(options.starting_money)
        .context("cannot create account")?;

    let game = Game::new(deck, account.money);
    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    Session::new(game, store, console)
        .run()
        .context("session ended abnormally")?;

    Ok(())
}
