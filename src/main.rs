//! DeckHeads entry point
//!
//! Handles platform-specific initialization and wires touch events to the table.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_app {
    use std::cell::RefCell;
    use std::rc::Rc;

    use glam::Vec2;
    use wasm_bindgen::prelude::*;
    use web_sys::{AddEventListenerOptions, TouchEvent};

    use deckheads::persistence::{AutoSave, restore_or_default};
    use deckheads::platform::{LocalStore, interval_timeout, now_ms};
    use deckheads::renderer::{DomSurface, Renderer};
    use deckheads::{Settings, Table, TouchInput, TouchPhase};

    /// App instance holding all state
    struct App {
        table: Table,
        renderer: Renderer<DomSurface>,
        store: LocalStore,
        autosave: AutoSave,
    }

    impl App {
        fn handle(&mut self, input: &TouchInput) {
            self.table.dispatch(input);
            self.renderer.sync(&self.table);
        }

        fn save(&mut self) {
            self.autosave
                .save_now(now_ms(), self.table.deck(), &mut self.store);
        }
    }

    /// Translate a DOM touch event; only the primary contact is kept
    fn touch_input(phase: TouchPhase, event: &TouchEvent) -> TouchInput {
        let points = event
            .touches()
            .get(0)
            .map(|t| vec![Vec2::new(t.client_x() as f32, t.client_y() as f32)])
            .unwrap_or_default();
        let target = event
            .target()
            .and_then(|target| DomSurface::card_index(&target));
        TouchInput {
            phase,
            points,
            target,
            time_ms: now_ms(),
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("DeckHeads starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let store = LocalStore::new();
        let settings = Settings::load(&store);
        let deck = restore_or_default(&store, &settings.deck_key);
        let interval_ms = settings.save_interval_ms;
        let autosave = AutoSave::new(interval_ms, settings.deck_key.clone(), now_ms());

        let seed = now_ms() as u64;
        let table = Table::new(deck, settings, seed);
        log::info!("Table initialized with seed: {}", seed);

        let surface = DomSurface::new(document.clone(), "draw").expect("no #draw element");
        let mut renderer = Renderer::new(surface);
        renderer.mount(&table);

        let app = Rc::new(RefCell::new(App {
            table,
            renderer,
            store,
            autosave,
        }));

        setup_touch_handlers(&document, app.clone());
        setup_autosave(&window, app, interval_ms);

        log::info!("DeckHeads running!");
    }

    fn setup_touch_handlers(document: &web_sys::Document, app: Rc<RefCell<App>>) {
        // Non-passive so preventDefault suppresses scrolling and zoom
        let options = AddEventListenerOptions::new();
        options.set_passive(false);

        for (name, phase) in [
            ("touchstart", TouchPhase::Start),
            ("touchmove", TouchPhase::Move),
            ("touchend", TouchPhase::End),
        ] {
            let app = app.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: TouchEvent| {
                event.prevent_default();
                let input = touch_input(phase, &event);
                app.borrow_mut().handle(&input);
            });
            let _ = document.add_event_listener_with_callback_and_add_event_listener_options(
                name,
                closure.as_ref().unchecked_ref(),
                &options,
            );
            closure.forget();
        }
    }

    fn setup_autosave(window: &web_sys::Window, app: Rc<RefCell<App>>, interval_ms: f64) {
        let closure = Closure::<dyn FnMut()>::new(move || {
            app.borrow_mut().save();
        });
        if let Err(e) = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval_timeout(interval_ms),
        ) {
            log::error!("Autosave disabled: {:?}", e);
        }
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_app::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("DeckHeads (native) starting...");
    log::info!("Touch input needs a browser - run with `trunk serve`; replaying a scripted session");
    log::info!("Set DECKHEADS_SHAKE=gentle|normal|vigorous to pick the shake sensitivity");

    replay_session();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Deal, box-select a row, drag it, shake it, save and restore
#[cfg(not(target_arch = "wasm32"))]
fn replay_session() {
    use deckheads::persistence::{AutoSave, MemoryStore, restore_or_default};
    use deckheads::settings::ShakeSensitivity;
    use deckheads::{Settings, Table, TouchInput};
    use glam::Vec2;

    let mut store = MemoryStore::new();
    let settings = match std::env::var("DECKHEADS_SHAKE") {
        Ok(name) => match ShakeSensitivity::from_str(&name) {
            Some(preset) => {
                log::info!("Shake sensitivity: {}", preset.as_str());
                let settings = Settings::from_preset(preset);
                settings.save(&mut store);
                settings
            }
            None => {
                log::warn!("Unknown shake sensitivity {:?}, using stored settings", name);
                Settings::load(&store)
            }
        },
        Err(_) => Settings::load(&store),
    };
    let key = settings.deck_key.clone();
    let mut autosave = AutoSave::new(settings.save_interval_ms, key.clone(), 0.0);
    let mut table = Table::new(restore_or_default(&store, &key), settings, 42);

    // Lay the deck out in rows of 13
    for (i, card) in table.deck_mut().iter_mut().enumerate() {
        card.set_position(20.0 + 70.0 * (i % 13) as f32, 20.0 + 100.0 * (i / 13) as f32);
    }

    let mut t = 1_000.0;

    // Box-select the first row
    table.dispatch(&TouchInput::start(Vec2::new(10.0, 10.0), None, t));
    table.dispatch(&TouchInput::moved(Vec2::new(900.0, 30.0), t + 16.0));
    table.dispatch(&TouchInput::end(None, t + 32.0));
    log::info!("Selected {} cards", table.deck().selected_count());

    // Grab the first row by its first card and shake it
    t += 1_000.0;
    let grab = Vec2::new(25.0, 25.0);
    let target = table.card_at(grab);
    table.dispatch(&TouchInput::start(grab, target, t));
    for i in 0..6 {
        let x = if i % 2 == 0 { 400.0 } else { 300.0 };
        table.dispatch(&TouchInput::moved(Vec2::new(x, 400.0), t + 16.0 * (i + 1) as f64));
    }
    table.dispatch(&TouchInput::end(target, t + 200.0));

    for card in table.deck().iter().filter(|c| c.selected) {
        log::info!(
            "{:>5} at ({}, {}) z={}",
            card.value(),
            card.pos.x,
            card.pos.y,
            card.z
        );
    }

    autosave.poll(deckheads::consts::SAVE_INTERVAL_MS, table.deck(), &mut store);
    let restored = restore_or_default(&store, &key);
    log::info!("Snapshot holds {} cards", restored.len());
    println!(
        "Replayed session: {} cards, {} selected, {} saves",
        restored.len(),
        table.deck().selected_count(),
        autosave.saves()
    );
}
