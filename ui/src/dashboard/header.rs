use dioxus::prelude::*;

use crate::core::summary::PLACEHOLDER;

#[component]
pub fn DashboardHeader(user_name: String) -> Element {
    let greeting = greeting_line(&user_name);

    rsx! {
        header { class: "dash-header",
            h1 { class: "dash-header__title", "{greeting}" }
            p { class: "dash-header__subtitle", "Here's how your preparation is going." }
        }
    }
}

/// The bot greets unnamed users generically rather than showing the
/// placeholder label.
fn greeting_line(user_name: &str) -> String {
    if user_name == PLACEHOLDER {
        "Hey Buddy!".to_string()
    } else {
        format!("Hey {user_name}!")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_users_are_greeted_by_name() {
        assert_eq!(greeting_line("Asha"), "Hey Asha!");
    }

    #[test]
    fn placeholder_name_falls_back_to_generic_greeting() {
        assert_eq!(greeting_line(PLACEHOLDER), "Hey Buddy!");
    }
}
