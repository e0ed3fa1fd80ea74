// src/cli/interactive.rs
//
// Interactive browser (REPL)
//
// One screen at a time plus a stack of visited routes for `back`.

use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::application::{open_screen, Route, Screen};
use crate::services::EncyclopediaService;
use crate::views::navigation;

pub const HELP: &str = "\
Commandes:
  /search TEXTE  - rechercher (vide pour effacer)
  n | p          - page suivante / précédente
  r              - recharger
  <numéro>       - suivre un lien
  open CHEMIN    - ouvrir une route, ex. /characters/1
  back           - page précédente dans l'historique
  help           - cette aide
  quit           - quitter";

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Empty,
    Search(String),
    Next,
    Previous,
    Reload,
    Follow(usize),
    Open(String),
    Back,
    Help,
    Quit,
    Unknown(String),
}

pub fn parse_input(line: &str) -> Input {
    let line = line.trim();
    if line.is_empty() {
        return Input::Empty;
    }
    if let Ok(index) = line.parse::<usize>() {
        return Input::Follow(index);
    }

    let (cmd, rest) = match line.split_once(char::is_whitespace) {
        Some((cmd, rest)) => (cmd, rest.trim()),
        None => (line, ""),
    };

    match cmd {
        "/search" | "/s" => Input::Search(rest.to_string()),
        "n" | "next" => Input::Next,
        "p" | "prev" | "previous" => Input::Previous,
        "r" | "reload" => Input::Reload,
        "open" | "o" if !rest.is_empty() => Input::Open(rest.to_string()),
        "back" | "b" => Input::Back,
        "help" | "h" | "?" => Input::Help,
        "quit" | "exit" | "q" => Input::Quit,
        // A bare path is shorthand for `open`
        _ if line.starts_with('/') && !line.starts_with("/search") => Input::Open(line.to_string()),
        _ => Input::Unknown(line.to_string()),
    }
}

/// What the loop should do after an input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Render,
    Message(String),
    Quit,
}

pub struct Browser {
    service: Arc<EncyclopediaService>,
    page_size: u32,
    color: bool,
    screen: Box<dyn Screen>,
    history: Vec<Route>,
}

impl Browser {
    pub fn new(service: Arc<EncyclopediaService>, page_size: u32, color: bool, start: Route) -> Self {
        let screen = open_screen(start, service.clone(), page_size);
        Self {
            service,
            page_size,
            color,
            screen,
            history: Vec::new(),
        }
    }

    pub fn route(&self) -> Route {
        self.screen.route()
    }

    pub fn history(&self) -> &[Route] {
        &self.history
    }

    pub async fn handle(&mut self, input: Input) -> Outcome {
        match input {
            Input::Empty => Outcome::Render,
            Input::Search(text) => {
                if self.screen.search(&text).await {
                    Outcome::Render
                } else {
                    Outcome::Message("Pas de recherche sur cette page".to_string())
                }
            }
            Input::Next => {
                if self.screen.next().await {
                    Outcome::Render
                } else {
                    Outcome::Message("Pas de page suivante".to_string())
                }
            }
            Input::Previous => {
                if self.screen.previous().await {
                    Outcome::Render
                } else {
                    Outcome::Message("Pas de page précédente".to_string())
                }
            }
            Input::Reload => {
                self.screen.load().await;
                Outcome::Render
            }
            Input::Follow(index) => match self.screen.render().follow(index) {
                Some(route) => {
                    self.go(route).await;
                    Outcome::Render
                }
                None => Outcome::Message(format!("Lien inconnu: {}", index)),
            },
            Input::Open(path) => match path.parse::<Route>() {
                Ok(route) => {
                    self.go(route).await;
                    Outcome::Render
                }
                Err(e) => Outcome::Message(e.to_string()),
            },
            Input::Back => match self.history.pop() {
                Some(route) => {
                    self.replace(route).await;
                    Outcome::Render
                }
                None => Outcome::Message("Début de l'historique".to_string()),
            },
            Input::Help => Outcome::Message(format!("{}\n{}", navigation().render(false), HELP)),
            Input::Quit => Outcome::Quit,
            Input::Unknown(line) => {
                Outcome::Message(format!("Commande inconnue: {} (help pour l'aide)", line))
            }
        }
    }

    /// Visit `route`, remembering the current one
    async fn go(&mut self, route: Route) {
        let current = self.screen.route();
        if route == current {
            return;
        }
        self.history.push(current);
        log::info!("Opening {}", route);
        if !self.screen.navigate(&route).await {
            self.replace(route).await;
        }
    }

    async fn replace(&mut self, route: Route) {
        self.screen = open_screen(route, self.service.clone(), self.page_size);
        self.screen.load().await;
    }

    /// Load the first screen, then read commands until `quit` or end of input
    pub async fn run<R, W>(&mut self, input: R, mut out: W) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        write!(out, "{}", navigation().render(self.color))?;
        writeln!(out)?;
        self.screen.load().await;
        write!(out, "{}", self.screen.render().render(self.color))?;

        let mut lines = input.lines();
        loop {
            write!(out, "{}> ", self.route())?;
            out.flush()?;

            let Some(line) = lines.next_line().await? else {
                writeln!(out)?;
                break;
            };

            match self.handle(parse_input(&line)).await {
                Outcome::Render => write!(out, "{}", self.screen.render().render(self.color))?,
                Outcome::Message(message) => writeln!(out, "{}", message)?,
                Outcome::Quit => break,
            }
        }
        Ok(())
    }

    pub async fn run_stdio(&mut self) -> anyhow::Result<()> {
        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        self.run(stdin, std::io::stdout()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ResourceKind;
    use crate::integrations::api::MockEncyclopediaApi;
    use serde_json::json;

    fn service(api: MockEncyclopediaApi) -> Arc<EncyclopediaService> {
        Arc::new(EncyclopediaService::new(Arc::new(api)))
    }

    fn characters_api() -> MockEncyclopediaApi {
        let mut api = MockEncyclopediaApi::new();
        api.expect_fetch_collection()
            .withf(|collection, _| collection == "characters")
            .returning(|_, query| {
                Ok(json!({
                    "results": [
                        { "id": 1, "name": "Monkey D. Luffy" },
                        { "id": 2, "name": "Roronoa Zoro" }
                    ],
                    "count": 2,
                    "next": null,
                    "previous": if query.page > 1 { json!("prev") } else { json!(null) }
                }))
            });
        api.expect_fetch_item()
            .withf(|collection, _| collection == "characters")
            .returning(|_, id| {
                Ok(json!({
                    "id": id,
                    "name": if id == 1 { "Monkey D. Luffy" } else { "Roronoa Zoro" },
                    "crews": [{ "id": 1, "name": "Straw Hat Pirates" }]
                }))
            });
        api.expect_fetch_item()
            .withf(|collection, _| collection == "crews")
            .returning(|_, id| Ok(json!({ "id": id, "name": "Straw Hat Pirates", "members": [] })));
        api
    }

    // ============== Input parsing ==============

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_input("  "), Input::Empty);
        assert_eq!(parse_input("/search Luffy"), Input::Search("Luffy".to_string()));
        assert_eq!(parse_input("/search"), Input::Search(String::new()));
        assert_eq!(parse_input("/search  Monkey D. "), Input::Search("Monkey D.".to_string()));
        assert_eq!(parse_input("n"), Input::Next);
        assert_eq!(parse_input("p"), Input::Previous);
        assert_eq!(parse_input("r"), Input::Reload);
        assert_eq!(parse_input("3"), Input::Follow(3));
        assert_eq!(parse_input("open /crews/1"), Input::Open("/crews/1".to_string()));
        assert_eq!(parse_input("/fruits"), Input::Open("/fruits".to_string()));
        assert_eq!(parse_input("back"), Input::Back);
        assert_eq!(parse_input("help"), Input::Help);
        assert_eq!(parse_input("quit"), Input::Quit);
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(parse_input("open"), Input::Unknown("open".to_string()));
        assert_eq!(parse_input("sail"), Input::Unknown("sail".to_string()));
        assert_eq!(parse_input("-1"), Input::Unknown("-1".to_string()));
    }

    // ============== Navigation ==============

    #[tokio::test]
    async fn test_follow_and_back() {
        let mut browser = Browser::new(service(characters_api()), 10, false, Route::HOME);
        browser.handle(Input::Reload).await;

        assert_eq!(browser.handle(Input::Follow(2)).await, Outcome::Render);
        assert_eq!(browser.route(), Route::Detail(ResourceKind::Characters, 2));
        assert_eq!(browser.history(), &[Route::HOME]);

        // [1] is the back link, [2] the crew
        browser.handle(Input::Follow(2)).await;
        assert_eq!(browser.route(), Route::Detail(ResourceKind::Crews, 1));

        browser.handle(Input::Back).await;
        assert_eq!(browser.route(), Route::Detail(ResourceKind::Characters, 2));
        browser.handle(Input::Back).await;
        assert_eq!(browser.route(), Route::HOME);
        assert_eq!(
            browser.handle(Input::Back).await,
            Outcome::Message("Début de l'historique".to_string())
        );
    }

    #[tokio::test]
    async fn test_detail_to_detail_stays_on_screen() {
        let mut browser = Browser::new(
            service(characters_api()),
            10,
            false,
            Route::Detail(ResourceKind::Characters, 1),
        );
        browser.handle(Input::Reload).await;

        browser.handle(Input::Open("/characters/2".to_string())).await;
        assert_eq!(browser.route(), Route::Detail(ResourceKind::Characters, 2));
        assert_eq!(browser.history(), &[Route::Detail(ResourceKind::Characters, 1)]);
    }

    #[tokio::test]
    async fn test_messages() {
        let mut browser = Browser::new(service(characters_api()), 10, false, Route::HOME);
        browser.handle(Input::Reload).await;

        assert_eq!(
            browser.handle(Input::Next).await,
            Outcome::Message("Pas de page suivante".to_string())
        );
        assert_eq!(
            browser.handle(Input::Follow(9)).await,
            Outcome::Message("Lien inconnu: 9".to_string())
        );
        match browser.handle(Input::Open("/ships".to_string())).await {
            Outcome::Message(message) => assert!(message.contains("/ships")),
            other => panic!("unexpected {:?}", other),
        }
        match browser.handle(Input::Help).await {
            Outcome::Message(message) => {
                assert!(message.contains("Fruits du Démon: /fruits"));
                assert!(message.contains("Commandes:"));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert_eq!(browser.handle(Input::Quit).await, Outcome::Quit);
    }

    #[tokio::test]
    async fn test_run_session() {
        let mut browser = Browser::new(service(characters_api()), 10, false, Route::HOME);
        let mut out = Vec::new();

        browser
            .run(&b"1\nback\nhelp\nquit\nnever read\n"[..], &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("== Encyclopédie de One Piece ==\n"));
        assert!(text.contains("Équipages: /crews"));
        assert!(text.contains("== Personnages =="));
        assert!(text.contains("/characters/1> "));
        assert!(text.contains("== Monkey D. Luffy =="));
        assert!(text.contains("Commandes:"));
        assert_eq!(browser.route(), Route::HOME);
    }

    #[tokio::test]
    async fn test_run_stops_at_end_of_input() {
        let mut browser = Browser::new(service(characters_api()), 10, false, Route::HOME);
        let mut out = Vec::new();

        browser.run(&b"n\n"[..], &mut out).await.unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("/characters> \n"));
    }
}
