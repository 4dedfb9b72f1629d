use dioxus::prelude::*;

struct PoolType {
    title: &'static str,
    description: &'static str,
    use_cases: &'static [&'static str],
    reversed: bool,
}

const POOL_TYPES: [PoolType; 4] = [
    PoolType {
        title: "Win Bet (Main Pool Type)",
        description: "The Win Bet is a straightforward prediction pool where participants \
            choose between two clear outcomes. This format is ideal for events with definitive \
            winners, such as sports matches, political elections, or game show outcomes. Win Bet \
            establishes a clear and simple entry point for users, making it the cornerstone of \
            PredFi's prediction markets.",
        use_cases: &[
            "Predict the winner of the FIFA World Cup final: Team A vs. Team B",
            "Predict the outcome of a boxing match: Fighter A vs. Fighter B.",
        ],
        reversed: false,
    },
    PoolType {
        title: "Opinion-Based Prediction (Secondary Pool Type)",
        description: "This pool format focuses on opinion-based events where there isn't a \
            definitive answer. Instead, participants place bets on subjective topics. The outcome \
            with the most votes at the end of the event wins. Fosters engagement by involving \
            communities in fun and subjective debates.",
        use_cases: &[
            "\"Who is the GOAT of football: Messi or Ronaldo?\"",
            "\"Which song will top the charts this week: Song A or Song B?\"",
        ],
        reversed: true,
    },
    PoolType {
        title: "Over/Under Pools",
        description: "In Over/Under pools, participants bet on whether an event's outcome will \
            be above or below a specified threshold. An example use case is predicting the total \
            goals in a football match: Over/Under 2.5 goals.",
        use_cases: &[
            "With Over 2.5 goals, you win if the total goals scored is 3 or more (e.g., 2-1 or 3-2).",
            "With Under 2.5 goals, you win if the total goals scored is 2 or fewer (e.g., 0-0 or 1-1).",
        ],
        reversed: false,
    },
    PoolType {
        title: "Parlay Pools",
        description: "Parlay pools combine multiple bets into one. Participants must correctly \
            predict the outcomes of all events in the parlay to win. While the risk is higher, the \
            potential rewards are significantly greater.",
        use_cases: &[
            "Predict the outcomes of multiple football matches in a single pool: Team A, Team C, \
                and Team E all to win.",
            "Combine predictions from different events: Predict the winner of a basketball match \
                and the top scorer in a tennis match.",
        ],
        reversed: true,
    },
];

#[component]
pub fn PoolTypes() -> Element {
    rsx! {
        section { class: "pool-types",
            for pool in &POOL_TYPES {
                div {
                    class: if pool.reversed { "pool-card pool-card-reversed" } else { "pool-card" },
                    div { class: "pool-card-main",
                        h3 { class: "pool-title", "{pool.title}" }
                        p { class: "pool-description", "{pool.description}" }
                    }
                    div { class: "pool-card-side",
                        h3 { class: "pool-title", "Use case" }
                        for use_case in pool.use_cases {
                            p { class: "pool-use-case", "- {use_case}" }
                        }
                    }
                }
            }
        }
    }
}
