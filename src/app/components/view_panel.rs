use dioxus::prelude::*;

use crate::app::components::{Button, MetricCard, TenantTable};
use crate::domain::services::View;

/// Renders whichever view the router selected
#[component]
pub fn ViewPanel(view: View) -> Element {
    let title = view.title();
    let placeholder = view.placeholder().unwrap_or_default();

    match view {
        View::Dashboard { metrics } => rsx! {
            div { class: "c-view c-view--dashboard",
                h2 { class: "c-view__title", "{title}" }
                div { class: "c-metric-grid",
                    for metric in metrics.iter() {
                        MetricCard { key: "{metric.label}", metric: *metric }
                    }
                }
            }
        },
        View::Tenants { columns, rows } => rsx! {
            div { class: "c-view c-view--tenants",
                div { class: "c-view__header",
                    h2 { class: "c-view__title", "{title}" }
                    Button { "Create Tenant" }
                }
                TenantTable { columns: columns, rows: rows }
            }
        },
        View::Users | View::Settings => rsx! {
            div { class: "c-view c-view__placeholder", "{placeholder}" }
        },
        View::NotFound { path } => rsx! {
            div { class: "c-view c-view--not-found",
                h2 { class: "c-view__title", "{title}" }
                p { class: "c-view__placeholder", "Nothing is mapped to {path}." }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::route;

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    fn dashboard() -> Element {
        rsx! { ViewPanel { view: route("/") } }
    }

    fn tenants() -> Element {
        rsx! { ViewPanel { view: route("/tenants") } }
    }

    fn users() -> Element {
        rsx! { ViewPanel { view: route("/users") } }
    }

    fn settings() -> Element {
        rsx! { ViewPanel { view: route("/settings") } }
    }

    fn unknown() -> Element {
        rsx! { ViewPanel { view: route("/unknown") } }
    }

    #[test]
    fn test_dashboard_renders_three_metrics() {
        let html = render(dashboard);
        for text in ["Active Tenants", "Total Users", "API Calls Today", "12", "248", "3,421"] {
            assert!(html.contains(text), "missing {text} in {html}");
        }
        assert_eq!(html.matches("class=\"c-card\"").count(), 3);
        assert!(html.contains("c-card__value--purple"));
    }

    #[test]
    fn test_tenants_renders_table_and_inert_controls() {
        let html = render(tenants);
        for text in ["Name", "Domain", "Status", "Actions", "Acme Corp", "acme.cloudity.io", "Active"] {
            assert!(html.contains(text), "missing {text} in {html}");
        }
        for control in ["Create Tenant", "Edit", "Delete"] {
            assert!(html.contains(control), "missing {control}");
        }
        assert_eq!(html.matches("<th class").count(), 4);
        assert_eq!(html.matches("<tr class=\"c-table__row\"").count(), 1);
    }

    #[test]
    fn test_placeholders_render() {
        assert!(render(users).contains("Users Page"));
        assert!(render(settings).contains("Settings Page"));
    }

    #[test]
    fn test_not_found_names_the_path() {
        let html = render(unknown);
        assert!(html.contains("Page not found"));
        assert!(html.contains("/unknown"));
    }
}
