use dioxus::prelude::*;

use crate::domain::models::Metric;

#[component]
pub fn MetricCard(metric: Metric) -> Element {
    let accent = metric.accent.as_str();

    rsx! {
        div { class: "c-card",
            h3 { class: "c-card__title", "{metric.label}" }
            p { class: "c-card__value c-card__value--{accent}", "{metric.value}" }
        }
    }
}
