//! Dart Scorer entry point
//!
//! Browser: wires canvas clicks and buttons to the scoring core.
//! Native: command-line tools over the same core.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{
        Document, HtmlAnchorElement, HtmlCanvasElement, HtmlElement, HtmlInputElement, MouseEvent,
    };

    use dart_scorer::board::Point;
    use dart_scorer::persistence;
    use dart_scorer::renderer::{CanvasPainter, render_table};
    use dart_scorer::{Classic301, DartsError, Settings, ThrowLog};

    /// App instance holding all state
    struct App {
        session: Classic301,
        painter: CanvasPainter,
        settings: Settings,
    }

    impl App {
        /// Replace the board and scoreboard from the current log
        fn redraw(&self, document: &Document) {
            let darts = if self.settings.show_darts {
                self.session.log().records()
            } else {
                &[]
            };
            self.painter.draw(self.session.board(), darts);

            let scoreboard = self.session.scoreboard();
            if let Some(el) = document.get_element_by_id("scoreboard") {
                el.set_inner_html(&render_table(&scoreboard).into_string());
            }
            if let Some(el) = document.get_element_by_id("remaining") {
                el.set_text_content(Some(&scoreboard.remaining.to_string()));
            }
        }

        fn on_click(&mut self, point: Point) -> bool {
            match self.session.throw_at(point, persistence::now_millis()) {
                Ok(_) => {
                    persistence::save_records(self.session.log());
                    true
                }
                Err(DartsError::GameFinished) => false,
                Err(e) => {
                    log::warn!("Rejected click: {e}");
                    false
                }
            }
        }

        fn resize(&mut self, size: f64) {
            self.painter.resize(size);
            if let Err(e) = self.session.resize(size) {
                log::warn!("Resize to {size} failed: {e}");
            }
        }
    }

    /// Largest square that fits the content area
    fn content_size(document: &Document, fallback: f64) -> f64 {
        document
            .get_element_by_id("content")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|el| el.offset_width().min(el.offset_height()) as f64)
            .filter(|size| *size > 0.0)
            .unwrap_or(fallback)
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");
        let canvas = document
            .get_element_by_id("dartboard")
            .expect("no #dartboard canvas")
            .dyn_into::<HtmlCanvasElement>()
            .expect("#dartboard is not a canvas");

        let settings = Settings::load();
        let size = content_size(&document, settings.board_size);

        let mut session = match Classic301::from_settings(&settings, size) {
            Ok(session) => session,
            Err(e) => {
                log::error!("Cannot start game: {e}");
                return;
            }
        };
        if let Err(e) = session.load(persistence::load_records()) {
            log::warn!("Stored throws not loaded: {e}");
        }

        let mut painter = CanvasPainter::new(&canvas).expect("no 2d context");
        painter.debug = settings.debug;
        painter.resize(size);

        let app = Rc::new(RefCell::new(App {
            session,
            painter,
            settings,
        }));
        app.borrow().redraw(&document);

        setup_board_click(&canvas, app.clone());
        setup_buttons(&document, app.clone());
        setup_load(&document, app.clone());
        setup_player_input(&document, app.clone());
        setup_resize(app);

        log::info!("Dart Scorer ready");
    }

    fn setup_board_click(canvas: &HtmlCanvasElement, app: Rc<RefCell<App>>) {
        let target = canvas.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let rect = target.get_bounding_client_rect();
            let point = Point::new(
                event.client_x() as f64 - rect.left(),
                event.client_y() as f64 - rect.top(),
            );
            if point.x < 0.0 || point.y < 0.0 || point.x > rect.width() || point.y > rect.height() {
                return;
            }

            let mut a = app.borrow_mut();
            if a.on_click(point) {
                if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                    a.redraw(&document);
                }
            }
        });
        let _ = canvas.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn on_button(document: &Document, id: &str, app: Rc<RefCell<App>>, action: fn(&mut App)) {
        let Some(btn) = document.get_element_by_id(id) else {
            log::warn!("No #{id} button");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            let mut a = app.borrow_mut();
            action(&mut a);
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                a.redraw(&document);
            }
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_buttons(document: &Document, app: Rc<RefCell<App>>) {
        on_button(document, "undo", app.clone(), |a| {
            a.session.undo();
            persistence::save_records(a.session.log());
        });

        on_button(document, "reset", app.clone(), |a| {
            a.session.reset();
            persistence::save_records(a.session.log());
        });

        on_button(document, "clear", app.clone(), |a| {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message("Do you really want to clear local storage?").ok())
                .unwrap_or(false);
            if confirmed {
                persistence::clear_records();
                a.session.reset();
            }
        });

        on_button(document, "export", app, |a| {
            if let Err(e) = export(&a.session) {
                log::warn!("Export failed: {e:?}");
            }
        });
    }

    /// Download the throw log as a JSON file
    fn export(session: &Classic301) -> Result<(), JsValue> {
        let json = session
            .log()
            .to_json()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let name = persistence::export_file_name(chrono::Utc::now());

        let parts = js_sys::Array::of1(&JsValue::from_str(&json));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("application/json");
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let anchor = document
            .create_element("a")?
            .dyn_into::<HtmlAnchorElement>()?;
        anchor.set_href(&url);
        anchor.set_download(&name);
        if let Some(body) = document.body() {
            body.append_child(&anchor)?;
            anchor.click();
            anchor.remove();
        }
        web_sys::Url::revoke_object_url(&url)?;
        log::info!("Exported {} throws to {name}", session.log().len());
        Ok(())
    }

    /// `#load` opens a file picker; the chosen export replaces the throw log
    fn setup_load(document: &Document, app: Rc<RefCell<App>>) {
        let Some(btn) = document.get_element_by_id("load") else {
            log::warn!("No #load button");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
            if let Err(e) = pick_log_file(app.clone()) {
                log::warn!("Load failed: {e:?}");
            }
        });
        let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn pick_log_file(app: Rc<RefCell<App>>) -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let input = document
            .create_element("input")?
            .dyn_into::<HtmlInputElement>()?;
        input.set_type("file");
        input.set_accept(".json,application/json");

        let field = input.clone();
        let on_change = Closure::once(move |_event: web_sys::Event| {
            let Some(file) = field.files().and_then(|files| files.get(0)) else {
                return;
            };
            wasm_bindgen_futures::spawn_local(async move {
                match JsFuture::from(file.text()).await {
                    Ok(text) => import_log(&app, &text.as_string().unwrap_or_default()),
                    Err(e) => log::warn!("Could not read {}: {e:?}", file.name()),
                }
            });
        });
        input.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
        on_change.forget();
        input.click();
        Ok(())
    }

    /// Replace the session log with imported JSON, then store and redraw
    fn import_log(app: &Rc<RefCell<App>>, json: &str) {
        let mut a = app.borrow_mut();
        let loaded = ThrowLog::from_json(json).and_then(|log| a.session.load(log));
        if let Err(e) = loaded {
            log::warn!("Ignoring imported log: {e}");
            return;
        }
        persistence::save_records(a.session.log());
        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            a.redraw(&document);
        }
    }

    /// `#player` renames the thrower and persists the name
    fn setup_player_input(document: &Document, app: Rc<RefCell<App>>) {
        let Some(input) = document
            .get_element_by_id("player")
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
        else {
            return;
        };
        input.set_value(&app.borrow().settings.player);

        let field = input.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let name = field.value().trim().to_string();
            if name.is_empty() {
                return;
            }
            let mut a = app.borrow_mut();
            a.session.set_player(name.clone());
            a.settings.player = name;
            a.settings.save();
        });
        let _ = input.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_resize(app: Rc<RefCell<App>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };
            let mut a = app.borrow_mut();
            let size = content_size(&document, a.session.board().size());
            a.resize(size);
            a.redraw(&document);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::PathBuf;

    use clap::{Parser, Subcommand};

    use dart_scorer::board::{Board, Point};
    use dart_scorer::game::{Classic301, derive};
    use dart_scorer::persistence;
    use dart_scorer::practice::{self, Thrower};
    use dart_scorer::renderer::render_text;
    use dart_scorer::{DartsError, Game, Result, Settings};

    #[derive(Parser, Debug)]
    #[command(name = "dart-scorer", version, about = "Dartboard hit-testing and 301 scoring")]
    pub struct Cli {
        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Subcommand, Debug)]
    pub enum Command {
        /// Score a single canvas point
        Score {
            x: f64,
            y: f64,
            /// Square canvas size in pixels
            #[arg(long, default_value_t = 451.0)]
            size: f64,
        },
        /// Print the scoreboard for an exported throw log
        Replay {
            file: PathBuf,
            /// Print the derived scoreboard as JSON
            #[arg(long)]
            json: bool,
        },
        /// Play a simulated 301 leg
        Simulate {
            #[arg(long)]
            seed: Option<u64>,
            /// Grouping standard deviation in millimetres
            #[arg(long)]
            spread: Option<f64>,
            #[arg(long, default_value_t = 90)]
            max_darts: usize,
            #[arg(long)]
            player: Option<String>,
            /// Write the throw log here
            #[arg(long)]
            out: Option<PathBuf>,
        },
    }

    pub fn run(cli: Cli) -> Result<()> {
        let mut settings = Settings::load();
        match cli.command {
            Command::Score { x, y, size } => {
                let board = Board::for_canvas(size)?;
                let hit = board.hit(Point::new(x, y))?;
                let throw = hit.throw()?;
                println!("{}\t{}\t{} points", hit.token(), throw.label(), throw.points());
            }
            Command::Replay { file, json } => {
                let log = persistence::load_records_from(&file)?;
                let start = settings
                    .starting_score()
                    .ok_or(DartsError::UnsupportedGame(settings.game))?;
                let scoreboard = derive(log.throws(), start);
                if json {
                    println!("{}", serde_json::to_string_pretty(&scoreboard)?);
                } else {
                    print!("{}", render_text(&scoreboard));
                }
            }
            Command::Simulate {
                seed,
                spread,
                max_darts,
                player,
                out,
            } => {
                if let Some(seed) = seed {
                    settings.seed = seed;
                }
                if let Some(spread) = spread {
                    settings.spread_mm = spread;
                }
                if let Some(player) = player {
                    settings.player = player;
                }
                settings.game = Game::Classic301;

                let mut session = Classic301::from_settings(&settings, settings.board_size)?;
                let mut thrower = Thrower::from_settings(&settings);
                let scoreboard = practice::play_leg(&mut session, &mut thrower, max_darts)?;
                print!("{}", render_text(&scoreboard));

                if let Some(path) = out {
                    persistence::save_records_to(&path, session.log())?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use clap::Parser;

    env_logger::init();
    let cli = cli::Cli::parse();
    if let Err(e) = cli::run(cli) {
        log::error!("{e}");
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
