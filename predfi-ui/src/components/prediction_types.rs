use dioxus::prelude::*;

struct PredictionType {
    glyph: &'static str,
    title: &'static str,
    description: &'static str,
}

const PREDICTION_TYPES: [PredictionType; 4] = [
    PredictionType {
        glyph: "◈",
        title: "Decentralized and Transparent",
        description: "Every pool settles on-chain, so outcomes and payouts are verifiable by \
            anyone.",
    },
    PredictionType {
        glyph: "⌘",
        title: "No Coding Required",
        description: "Open a prediction pool from the browser in a few clicks; no contracts to \
            write or deploy.",
    },
    PredictionType {
        glyph: "◎",
        title: "Profit While Engaging",
        description: "Back your opinion on events you already follow and earn from accurate \
            calls.",
    },
    PredictionType {
        glyph: "✦",
        title: "Community-Driven Predictions",
        description: "Pools are proposed and resolved by the community, keeping markets close to \
            what people actually care about.",
    },
];

#[component]
pub fn PredictionTypes() -> Element {
    rsx! {
        section { class: "prediction-types",
            h2 { class: "section-title", "Why Choose PredFi" }
            div { class: "prediction-grid",
                for card in &PREDICTION_TYPES {
                    div { class: "prediction-card",
                        span { class: "prediction-glyph", "{card.glyph}" }
                        h3 { class: "prediction-title", "{card.title}" }
                        p { class: "prediction-description", "{card.description}" }
                        button { class: "btn btn-ghost", "Learn more" }
                    }
                }
            }
        }
    }
}
