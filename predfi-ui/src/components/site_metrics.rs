use dioxus::prelude::*;

struct Metric {
    title: &'static str,
    value: &'static str,
}

const SITE_METRICS: [Metric; 3] = [
    Metric {
        title: "Total Bets Open",
        value: "17",
    },
    Metric {
        title: "Total Volume",
        value: "$45K",
    },
    Metric {
        title: "Active Users",
        value: "250",
    },
];

#[component]
pub fn SiteMetrics() -> Element {
    rsx! {
        section { class: "metrics",
            div { class: "metrics-panel",
                h2 { class: "section-title", "Site Metrics" }
                div { class: "metrics-row",
                    for metric in &SITE_METRICS {
                        div { class: "metric-card",
                            h3 { class: "metric-label", "{metric.title}" }
                            p { class: "metric-value", "{metric.value}" }
                        }
                    }
                }
            }
        }
    }
}
