//! Swarm Bee entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{
        CanvasRenderingContext2d, Document, Element, HtmlCanvasElement, HtmlInputElement,
        KeyboardEvent, MouseEvent, TouchEvent,
    };

    use swarm_bee::hud::{GameOverView, Presenter};
    use swarm_bee::renderer::draw_frame;
    use swarm_bee::sim::GamePhase;
    use swarm_bee::{Session, Tuning};

    const OVERLAY_ID: &str = "gameOverOverlay";
    const RESTART_ID: &str = "restartBtn";

    /// HUD bindings on top of the page's DOM
    struct DomPresenter {
        document: Document,
    }

    impl DomPresenter {
        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }

        fn remove_overlay(&self) {
            if let Some(el) = self.document.get_element_by_id(OVERLAY_ID) {
                el.remove();
            }
        }

        fn child(&self, tag: &str, text: &str, style: &str) -> Option<Element> {
            let el = self.document.create_element(tag).ok()?;
            el.set_text_content(Some(text));
            let _ = el.set_attribute("style", style);
            Some(el)
        }
    }

    impl Presenter for DomPresenter {
        fn show_session(&mut self, header: &str) {
            self.remove_overlay();
            self.set_text("playerName", header);
        }

        fn show_score(&mut self, label: &str) {
            self.set_text("scoreDisplay", label);
        }

        fn show_game_over(&mut self, view: &GameOverView) {
            self.remove_overlay();
            let (Some(screen), Ok(overlay)) = (
                self.document.get_element_by_id("gameScreen"),
                self.document.create_element("div"),
            ) else {
                log::warn!("Cannot show game over overlay");
                return;
            };
            overlay.set_id(OVERLAY_ID);

            let title = self.child("div", &view.title, "font-size:2.5rem; margin-bottom:0.5rem;");
            let summary = self.child("div", &view.summary, "font-size:1.3rem; margin:1rem 0;");
            for part in [title, summary].into_iter().flatten() {
                let _ = overlay.append_child(&part);
            }
            if let Some(button) = self.child(
                "button",
                &view.restart_label,
                "margin-top:1rem; padding:0.8rem 2rem; font-size:1.1rem;",
            ) {
                button.set_id(RESTART_ID);
                let _ = overlay.append_child(&button);
            }
            let _ = overlay.set_attribute("style", "display:flex;");
            let _ = screen.append_child(&overlay);
        }
    }

    /// Game instance holding all state
    struct Game {
        session: Session,
        ctx: CanvasRenderingContext2d,
        presenter: DomPresenter,
    }

    impl Game {
        fn present(&mut self) {
            self.session.present(&mut self.presenter);
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Swarm Bee starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")
            .ok()
            .flatten()
            .expect("no 2d context")
            .dyn_into()
            .expect("not a 2d context");

        let tuning = Tuning::load().fit_canvas(canvas.width() as f32, canvas.height() as f32);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            session: Session::new(tuning, seed),
            ctx,
            presenter: DomPresenter {
                document: document.clone(),
            },
        }));

        setup_login(&document, game.clone());
        setup_input_handlers(&canvas, game.clone());
        setup_restart_button(&document, game);

        if let Some(login) = document.get_element_by_id("loginScreen") {
            let _ = login.class_list().add_1("active");
        }

        log::info!("Swarm Bee ready, waiting for a name");
    }

    fn start_with_name(game: &Rc<RefCell<Game>>, name: &str) {
        {
            let mut g = game.borrow_mut();
            if g.session.phase() != GamePhase::NotStarted {
                return;
            }
            g.session.submit_name(name, js_sys::Date::now() as u64);
            g.present();
        }

        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(el) = document.get_element_by_id("loginScreen") {
            let _ = el.class_list().remove_1("active");
        }
        if let Some(el) = document.get_element_by_id("gameScreen") {
            let _ = el.class_list().add_1("active");
        }

        request_animation_frame(game.clone());
    }

    fn setup_login(document: &Document, game: Rc<RefCell<Game>>) {
        let input: Option<HtmlInputElement> = document
            .get_element_by_id("usernameInput")
            .and_then(|el| el.dyn_into().ok());
        let Some(input) = input else {
            log::warn!("No name input found");
            return;
        };

        // Login button
        if let Some(btn) = document.get_element_by_id("loginBtn") {
            let game = game.clone();
            let input = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: MouseEvent| {
                start_with_name(&game, &input.value());
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Enter in the name field
        {
            let input_clone = input.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.key() == "Enter" {
                    start_with_name(&game, &input_clone.value());
                }
            });
            let _ = input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_input_handlers(canvas: &HtmlCanvasElement, game: Rc<RefCell<Game>>) {
        // Keyboard
        {
            let game = game.clone();
            let document = web_sys::window().unwrap().document().unwrap();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                if event.code() == "Space" {
                    game.borrow_mut().session.jump(js_sys::Date::now());
                }
            });
            let _ = document
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Touch start
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                game.borrow_mut().session.jump(js_sys::Date::now());
            });
            let _ = canvas
                .add_event_listener_with_callback("touchstart", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// The overlay is rebuilt on every game over, so listen on the game
    /// screen and pick out clicks on the restart button
    fn setup_restart_button(document: &Document, game: Rc<RefCell<Game>>) {
        let Some(screen) = document.get_element_by_id("gameScreen") else {
            log::warn!("No game screen found");
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
            let is_restart = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .is_some_and(|el| el.id() == RESTART_ID);
            if !is_restart {
                return;
            }

            let restarted = {
                let mut g = game.borrow_mut();
                let restarted = g.session.restart(js_sys::Date::now() as u64);
                g.present();
                restarted
            };
            if restarted {
                request_animation_frame(game.clone());
            }
        });
        let _ = screen.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        let running = {
            let mut g = game.borrow_mut();
            let g = &mut *g;

            // Restart can land between frames; a stale frame just stops
            if g.session.phase() != GamePhase::Running {
                return;
            }

            let running = g.session.tick();
            draw_frame(g.session.state(), &mut g.ctx, time);
            g.session.present(&mut g.presenter);
            running
        };

        if running {
            request_animation_frame(game);
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

/// Headless play-through with a simple autopilot
#[cfg(not(target_arch = "wasm32"))]
mod native_game {
    use std::time::{SystemTime, UNIX_EPOCH};

    use swarm_bee::hud::LogPresenter;
    use swarm_bee::renderer::{Recorder, draw_frame};
    use swarm_bee::sim::{GameState, obstacle_hitbox, player_hitbox};
    use swarm_bee::{Session, Tuning};

    /// Frame length of the simulated display (ms)
    const FRAME_MS: f64 = 1000.0 / 60.0;
    /// Give up after this many frames (about 10 minutes at 60 fps)
    const MAX_TICKS: u64 = 36_000;
    /// Jump this many frames before the next cloud reaches the bee
    const LEAD_TICKS: f32 = 10.0;

    /// Jump when the next cloud is about to reach the bee
    pub fn should_jump(state: &GameState) -> bool {
        let bee = player_hitbox(&state.player, &state.tuning);
        state
            .obstacles
            .iter()
            .map(|o| obstacle_hitbox(o, &state.tuning))
            .find(|hb| hb.max.x > bee.min.x)
            .is_some_and(|hb| hb.min.x - bee.max.x < state.speed * LEAD_TICKS)
    }

    pub fn run() {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);

        let mut session = Session::new(Tuning::load(), seed);
        let mut presenter = LogPresenter;
        session.submit_name("", seed);
        session.present(&mut presenter);

        let mut ticks = 0;
        while ticks < MAX_TICKS {
            if should_jump(session.state()) {
                session.jump(ticks as f64 * FRAME_MS);
            }
            let running = session.tick();
            session.present(&mut presenter);
            ticks += 1;
            if !running {
                break;
            }
        }

        let mut recorder = Recorder::new();
        draw_frame(session.state(), &mut recorder, ticks as f64 * FRAME_MS);

        let state = session.state();
        log::info!(
            "Finished after {} ticks: phase {:?}, score {}, speed {:.2}, {} draw calls in last frame",
            ticks,
            state.phase,
            state.score,
            state.speed,
            recorder.commands.len()
        );
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Swarm Bee (native) starting...");
    log::info!("Native mode runs a headless autopilot - run with `trunk serve` for the web version");

    native_game::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
