//! Bridge to the embedding Telegram Mini App host.
//!
//! Quick actions forward a fixed command string through
//! `Telegram.WebApp.sendData` and then ask the host to close the view. This
//! is fire-and-forget: the bot answers in the chat, not in the page. Outside
//! a Telegram container the bridge degrades to a logged no-op, and on
//! non-wasm targets every outbound message lands in a thread-local outbox so
//! the send-then-close contract stays testable.

/// Bot commands wired to the quick-action buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TodayQuiz,
    ListFile,
    MyStats,
    GroupLink,
}

impl Command {
    /// The exact token the bot dispatches on.
    pub fn as_str(self) -> &'static str {
        match self {
            Command::TodayQuiz => "/todayquiz",
            Command::ListFile => "/listfile",
            Command::MyStats => "/mystats",
            Command::GroupLink => "/group link open",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Command::TodayQuiz => "Today's quiz",
            Command::ListFile => "Study files",
            Command::MyStats => "My stats",
            Command::GroupLink => "Open group",
        }
    }

    pub const ALL: [Command; 4] = [
        Command::TodayQuiz,
        Command::ListFile,
        Command::MyStats,
        Command::GroupLink,
    ];
}

/// Forward a command to the host and close the view.
pub fn send(command: Command) {
    log::info!("forwarding host command {}", command.as_str());
    bridge::send_data(command.as_str());
    bridge::close();
}

/// Tell the host the page finished booting (mirrors `tg.ready()`).
pub fn ready() {
    bridge::ready();
    bridge::expand();
}

#[cfg(target_arch = "wasm32")]
mod bridge {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        // All imports are `catch`: outside Telegram the `Telegram.WebApp`
        // global is absent and the call throws.
        #[wasm_bindgen(js_namespace = ["Telegram", "WebApp"], js_name = sendData, catch)]
        fn tg_send_data(data: &str) -> Result<(), JsValue>;
        #[wasm_bindgen(js_namespace = ["Telegram", "WebApp"], js_name = close, catch)]
        fn tg_close() -> Result<(), JsValue>;
        #[wasm_bindgen(js_namespace = ["Telegram", "WebApp"], js_name = ready, catch)]
        fn tg_ready() -> Result<(), JsValue>;
        #[wasm_bindgen(js_namespace = ["Telegram", "WebApp"], js_name = expand, catch)]
        fn tg_expand() -> Result<(), JsValue>;
    }

    pub fn send_data(data: &str) {
        if tg_send_data(data).is_err() {
            log::warn!("Telegram host unavailable; dropping command {data}");
        }
    }

    pub fn close() {
        let _ = tg_close();
    }

    pub fn ready() {
        if tg_ready().is_err() {
            log::warn!("page is running outside a Telegram container");
        }
    }

    pub fn expand() {
        let _ = tg_expand();
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod bridge {
    use std::cell::RefCell;

    thread_local! {
        static OUTBOX: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    }

    pub fn send_data(data: &str) {
        OUTBOX.with(|outbox| outbox.borrow_mut().push(data.to_string()));
    }

    pub fn close() {
        OUTBOX.with(|outbox| outbox.borrow_mut().push("close".to_string()));
    }

    pub fn ready() {}

    pub fn expand() {}

    /// Drain everything sent to the fake host so far.
    pub fn take_outbox() -> Vec<String> {
        OUTBOX.with(|outbox| outbox.borrow_mut().drain(..).collect())
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use bridge::take_outbox;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_strings_are_fixed() {
        assert_eq!(Command::TodayQuiz.as_str(), "/todayquiz");
        assert_eq!(Command::ListFile.as_str(), "/listfile");
        assert_eq!(Command::MyStats.as_str(), "/mystats");
        assert_eq!(Command::GroupLink.as_str(), "/group link open");
    }

    #[test]
    fn send_forwards_command_then_closes() {
        let _ = take_outbox();
        send(Command::MyStats);
        assert_eq!(take_outbox(), vec!["/mystats".to_string(), "close".to_string()]);
    }

    #[test]
    fn every_command_has_a_label() {
        for command in Command::ALL {
            assert!(!command.label().is_empty());
        }
    }
}
