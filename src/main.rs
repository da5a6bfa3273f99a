use std::sync::Arc;

use movie_finder::{
    ClientConfig, HttpCatalog, LibraryController, SearchController, SearchSettings,
    TerminalRenderer,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

const HELP: &str = "Type to search. Commands: /go, /user <id>, /favs, /add <n>, /del <movie_id>, /reco, /quit";

#[derive(Debug, PartialEq)]
enum Command<'a> {
    Input(&'a str),
    Submit,
    User(&'a str),
    Favorites,
    Add(usize),
    Remove(u64),
    Recommend,
    Quit,
    Unknown(&'a str),
}

fn parse(line: &str) -> Command<'_> {
    let Some(rest) = line.strip_prefix('/') else {
        return Command::Input(line);
    };
    let (name, arg) = rest
        .split_once(char::is_whitespace)
        .map(|(name, arg)| (name, arg.trim()))
        .unwrap_or((rest.trim(), ""));

    match name {
        "go" => Command::Submit,
        "user" => Command::User(arg),
        "favs" => Command::Favorites,
        "add" => arg.parse().map(Command::Add).unwrap_or(Command::Unknown(line)),
        "del" => arg.parse().map(Command::Remove).unwrap_or(Command::Unknown(line)),
        "reco" => Command::Recommend,
        "quit" => Command::Quit,
        _ => Command::Unknown(line),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("movie_finder=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::from_env()?;
    tracing::info!(api_url = %config.api_url, "Starting movie finder");

    let api = Arc::new(HttpCatalog::new(config.api_url.clone()));
    let renderer = Arc::new(TerminalRenderer::new());
    let search = SearchController::new(api.clone(), renderer.clone(), SearchSettings::from(&config));
    let library = LibraryController::new(api, renderer.clone(), &config);
    let mut user_id = config.user_id.clone().unwrap_or_default();

    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse(&line) {
            Command::Input(text) => search.input(text),
            Command::Submit => search.submit(),
            Command::User(id) => user_id = id.to_string(),
            Command::Favorites => library.load_favorites(&user_id).await,
            Command::Add(n) => match renderer.result_at(n) {
                Some(movie) => library.add_favorite(&user_id, &movie).await,
                None => println!("No result #{}", n),
            },
            Command::Remove(movie_id) => library.remove_favorite(&user_id, movie_id).await,
            Command::Recommend if !renderer.recommendations_available() => println!(
                "Recommendations need at least {} favorites; load them with /favs",
                config.recommendation_threshold
            ),
            Command::Recommend => library.recommend(&user_id).await,
            Command::Quit => break,
            Command::Unknown(line) => println!("Unknown command: {}\n{}", line, HELP),
        }
    }

    search.shutdown();
    Ok(())
}
