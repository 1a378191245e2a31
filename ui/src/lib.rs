// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod components;
mod screens;

use components::pico::Container;
use screens::calculator::CalculatorScreen;

const APP_CSS: &str = r#"
    .app-main-container {
        max-width: 640px;
        margin: 0 auto;
        padding-top: 2rem;
    }

    .chip {
        font-size: 0.8rem;
        padding: 0.1rem 0.4rem;
        border-radius: var(--pico-border-radius);
        background-color: var(--pico-card-sectioning-background-color);
    }

    .date {
        color: var(--pico-muted-color);
        font-size: 0.85rem;
    }

    .history {
        list-style: none;
        padding-left: 0;
    }

    .history li {
        margin-bottom: 0.5rem;
    }

    .filters {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
        align-items: flex-end;
        margin-bottom: 1rem;
    }

    .result {
        margin-top: 1rem;
    }
"#;

/// Root component: document metadata, styling, and the calculator screen.
#[allow(non_snake_case)]
pub fn App() -> Element {
    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css",
        }
        style {
            "{APP_CSS}"
        }
        div {
            class: "app-main-container",
            Container {
                CalculatorScreen {}
            }
        }
    }
}
