use anyhow::Result;
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

use super::app::RecipeApp;
use super::collection::CollectionBackend;
use super::provider::RecipeProvider;
use super::view::Screen;

const HELP: &str = "\
Commands:
  search <query>   search the recipe provider
  areas            list areas in the current results
  area [name]      select an area for filtering (no name clears it)
  filter           keep only results from the selected area
  sort             sort results by ingredient count
  save <n>         save result n to the collection
  collection       show the saved collection
  help             show this message
  quit             exit";

/// One parsed input line.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Areas,
    Area(Option<String>),
    Filter,
    Sort,
    Save(usize),
    Collection,
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();

    let command = match word {
        "search" | "s" => Command::Search(rest.to_string()),
        "areas" => Command::Areas,
        "area" => Command::Area((!rest.is_empty()).then(|| rest.to_string())),
        "filter" => Command::Filter,
        "sort" => Command::Sort,
        "save" => Command::Save(rest.parse().ok()?),
        "collection" | "c" => Command::Collection,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Read commands from stdin until `quit` or EOF, printing the screen after each.
pub async fn run<P: RecipeProvider, C: CollectionBackend>(mut app: RecipeApp<P, C>) -> Result<()> {
    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();
    stdout.write_all(format!("{HELP}\n> ").as_bytes()).await?;
    stdout.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let output = match parse_command(&line) {
            Some(Command::Quit) => break,
            Some(Command::Help) => HELP.to_string(),
            Some(Command::Areas) => app.state().area_options().join("\n"),
            Some(command) => {
                execute(&mut app, command).await;
                let screen = Screen(app.state()).to_string();
                app.dismiss_notice();
                screen
            }
            None if line.trim().is_empty() => String::new(),
            None => format!("Unknown command: {}. Type `help`.", line.trim()),
        };
        stdout.write_all(format!("{output}\n> ").as_bytes()).await?;
        stdout.flush().await?;
    }
    Ok(())
}

async fn execute<P: RecipeProvider, C: CollectionBackend>(app: &mut RecipeApp<P, C>, command: Command) {
    match command {
        Command::Search(query) => {
            app.set_query(query);
            app.search().await;
        }
        Command::Area(area) => app.select_area(area),
        Command::Filter => app.apply_area_filter(),
        Command::Sort => app.sort_by_ingredients(),
        Command::Save(n) => app.save(n).await,
        Command::Collection => app.show_collection().await,
        Command::Areas | Command::Help | Command::Quit => {}
    }
}
