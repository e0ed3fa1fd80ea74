// src/cli/commands.rs
//
// Command tree and one-shot rendering
//
// Usage:
//   opkb                         - interactive browser on /
//   opkb characters --search X   - one page of a collection
//   opkb character 1             - one entity
//   opkb open /crews/3           - any route
//   opkb browse /fruits          - interactive browser on a route

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use crate::application::{kind_error_message, list_error_message, open_list, open_screen, Route};
use crate::cli::interactive::Browser;
use crate::config::Config;
use crate::domain::ResourceKind;
use crate::error::AppResult;
use crate::integrations::api::{ApiClient, ListQuery};
use crate::services::EncyclopediaService;

#[derive(Parser, Debug)]
#[command(name = "opkb")]
#[command(about = "Browse the One Piece knowledge base from the terminal")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// API root, e.g. http://localhost:8000/api/
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Page size used to count pages
    #[arg(long, global = true, value_name = "N")]
    pub page_size: Option<u32>,

    #[arg(long, global = true)]
    pub no_color: bool,

    /// Print the fetched JSON instead of the page
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (default: {CONFIG_DIR}/opkb/config.json)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// List characters
    Characters(ListArgs),
    /// List crews
    Crews(ListArgs),
    /// List devil fruits
    Fruits(ListArgs),
    /// List story arcs
    Arcs(ListArgs),
    /// List episodes
    Episodes(ListArgs),
    /// Show one character
    Character(ItemArgs),
    /// Show one crew
    Crew(ItemArgs),
    /// Show one devil fruit
    Fruit(ItemArgs),
    /// Show one arc
    Arc(ItemArgs),
    /// Show one episode
    Episode(ItemArgs),
    /// Render a route such as /characters/1
    Open { path: String },
    /// Start the interactive browser
    Browse { path: Option<String> },
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ListArgs {
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    #[arg(long, allow_hyphen_values = true)]
    pub search: Option<String>,

    /// Server-side ordering, e.g. -bounty
    #[arg(long, allow_hyphen_values = true)]
    pub ordering: Option<String>,
}

impl ListArgs {
    pub fn to_query(&self) -> ListQuery {
        ListQuery {
            page: self.page.max(1),
            search: self.search.clone().filter(|s| !s.is_empty()),
            ordering: self.ordering.clone().filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ItemArgs {
    pub id: u64,
}

/// What a parsed command line asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    Show(Route, ListQuery),
    Browse(Route),
}

impl Commands {
    pub fn invocation(&self) -> AppResult<Invocation> {
        let list = |kind, args: &ListArgs| Invocation::Show(Route::List(kind), args.to_query());
        let item = |kind, args: &ItemArgs| Invocation::Show(Route::Detail(kind, args.id), ListQuery::default());

        Ok(match self {
            Commands::Characters(args) => list(ResourceKind::Characters, args),
            Commands::Crews(args) => list(ResourceKind::Crews, args),
            Commands::Fruits(args) => list(ResourceKind::DevilFruits, args),
            Commands::Arcs(args) => list(ResourceKind::Arcs, args),
            Commands::Episodes(args) => list(ResourceKind::Episodes, args),
            Commands::Character(args) => item(ResourceKind::Characters, args),
            Commands::Crew(args) => item(ResourceKind::Crews, args),
            Commands::Fruit(args) => item(ResourceKind::DevilFruits, args),
            Commands::Arc(args) => item(ResourceKind::Arcs, args),
            Commands::Episode(args) => item(ResourceKind::Episodes, args),
            Commands::Open { path } => Invocation::Show(path.parse()?, ListQuery::default()),
            Commands::Browse { path } => match path {
                Some(path) => Invocation::Browse(path.parse()?),
                None => Invocation::Browse(Route::HOME),
            },
        })
    }
}

impl Cli {
    pub fn invocation(&self) -> AppResult<Invocation> {
        match &self.command {
            Some(command) => command.invocation(),
            None => Ok(Invocation::Browse(Route::HOME)),
        }
    }

    /// File and environment layers, then these flags
    pub fn load_config(&self) -> AppResult<Config> {
        let mut config = Config::load(self.config.as_deref())?;
        self.apply_overrides(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(url) = &self.api_url {
            config.api_base_url = url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(page_size) = self.page_size {
            config.page_size = page_size;
        }
        if self.no_color {
            config.color = false;
        }
    }
}

/// Outcome of a one-shot command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Shown {
    /// Goes to stdout
    Page(String),
    /// "Erreur: ..." line for stderr
    Failed(String),
}

/// Fetch and render one route
pub async fn show(
    service: Arc<EncyclopediaService>,
    config: &Config,
    route: Route,
    query: ListQuery,
    json: bool,
) -> AppResult<Shown> {
    if json {
        return show_json(&service, route, &query).await;
    }

    let mut screen = match route {
        Route::List(kind) => open_list(kind, query, service, config.page_size),
        Route::Detail(..) => open_screen(route, service, config.page_size),
    };
    screen.load().await;

    let doc = screen.render();
    Ok(match screen.error() {
        Some(_) => Shown::Failed(doc.render(false)),
        None => Shown::Page(doc.render(config.color)),
    })
}

async fn show_json(service: &EncyclopediaService, route: Route, query: &ListQuery) -> AppResult<Shown> {
    let fetched = match route {
        Route::List(kind) => service
            .list_json(kind, query)
            .await
            .map_err(|e| list_error_message(&e)),
        Route::Detail(kind, id) => service
            .get_json(kind, id)
            .await
            .map_err(|e| kind_error_message(kind, &e)),
    };

    Ok(match fetched {
        Ok(value) => Shown::Page(format!("{}\n", serde_json::to_string_pretty(&value)?)),
        Err(message) => Shown::Failed(format!("Erreur: {}\n", message)),
    })
}

/// Entry point behind `main`
pub async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = cli.load_config()?;
    let invocation = cli.invocation()?;

    let client = ApiClient::new(&config)?;
    log::debug!("Using API at {}", client.base_url());
    let service = Arc::new(EncyclopediaService::new(Arc::new(client)));

    match invocation {
        Invocation::Browse(route) => {
            let mut browser = Browser::new(service, config.page_size, config.color, route);
            browser.run_stdio().await?;
            Ok(ExitCode::SUCCESS)
        }
        Invocation::Show(route, query) => match show(service, &config, route, query, cli.json).await? {
            Shown::Page(text) => {
                print!("{}", text);
                Ok(ExitCode::SUCCESS)
            }
            Shown::Failed(text) => {
                eprint!("{}", text);
                Ok(ExitCode::FAILURE)
            }
        },
    }
}
