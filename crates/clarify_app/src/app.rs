use std::io::{self, BufRead};
use std::sync::mpsc;
use std::thread;

use chat_logging::{chat_info, set_turn};
use clarify_core::{update, ChatState, Heuristics, Msg, Role};
use clarify_engine::BackendSettings;

use crate::effects::EffectRunner;

/// Console input and engine events merged into one stream.
enum AppEvent {
    Core(Msg),
    Quit,
}

pub fn run(heuristics: Heuristics, settings: BackendSettings) -> anyhow::Result<()> {
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();

    // The effect runner speaks core messages; forward them into the merged
    // stream.
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    {
        let event_tx = event_tx.clone();
        thread::spawn(move || {
            while let Ok(msg) = msg_rx.recv() {
                if event_tx.send(AppEvent::Core(msg)).is_err() {
                    break;
                }
            }
        });
    }

    let effects = EffectRunner::new(settings, msg_tx)?;
    spawn_stdin_reader(event_tx);

    println!("Clarify: ask about the active book.");
    println!("/image toggles image mode, /retry reconnects, /quit exits.");

    let mut state = ChatState::new();
    let mut console = Console::default();
    let mut turn: u64 = 0;

    // Kick off the catalog bootstrap.
    let (next, startup_effects) = update(state, Msg::SessionStarted, &heuristics);
    state = next;
    effects.run(startup_effects);
    console.render(&mut state);

    while let Ok(event) = event_rx.recv() {
        let msg = match event {
            AppEvent::Quit => break,
            AppEvent::Core(msg) => msg,
        };
        if matches!(msg, Msg::InputSubmitted(_)) {
            turn += 1;
            set_turn(turn);
        }
        let (next, new_effects) = update(state, msg, &heuristics);
        state = next;
        effects.run(new_effects);
        console.render(&mut state);
    }

    chat_info!("session ended after {} turns", turn);
    Ok(())
}

fn spawn_stdin_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            let event = match line.trim() {
                "/quit" | "/exit" => AppEvent::Quit,
                "/image" => AppEvent::Core(Msg::ImageModeToggled),
                "/retry" => AppEvent::Core(Msg::RetryConnect),
                text => AppEvent::Core(Msg::InputSubmitted(text.to_string())),
            };
            let quit = matches!(event, AppEvent::Quit);
            if event_tx.send(event).is_err() || quit {
                return;
            }
        }
        // EOF on stdin ends the session too.
        let _ = event_tx.send(AppEvent::Quit);
    });
}

/// Tracks what is already on screen so renders only print the delta.
#[derive(Default)]
struct Console {
    printed: usize,
    last_banner: Option<String>,
    last_book: Option<String>,
}

impl Console {
    /// Prints messages appended since the last render, plus banner and
    /// active-book changes.
    fn render(&mut self, state: &mut ChatState) {
        if !state.consume_dirty() {
            return;
        }
        let view = state.view();
        for message in &view.messages[self.printed..] {
            match message.role {
                // The console already shows what the user typed.
                Role::User => {}
                Role::Bot => println!("bot> {}", message.content),
                Role::System => println!("sys> {}", message.content),
                Role::Error => println!("err> {}", message.content),
            }
        }
        self.printed = view.messages.len();

        if view.banner != self.last_banner {
            if let Some(banner) = &view.banner {
                println!("!! {banner} (type /retry to reconnect)");
            }
            self.last_banner = view.banner.clone();
        }

        let book = view.active_book.map(|book| book.name);
        if book != self.last_book {
            if let Some(name) = &book {
                println!("sys> connected, active book: {name}");
            }
            self.last_book = book;
        }
    }
}
