use dioxus::prelude::*;

use crate::app::components::{Button, ButtonVariant};
use crate::domain::models::TenantRow;

#[component]
pub fn TenantTable(columns: [&'static str; 4], rows: Vec<TenantRow>) -> Element {
    rsx! {
        div { class: "c-table-wrapper",
            table { class: "c-table",
                thead { class: "c-table__head",
                    tr {
                        for column in columns {
                            th { key: "{column}", class: "c-table__heading", "{column}" }
                        }
                    }
                }
                tbody {
                    for row in rows {
                        TenantTableRow { key: "{row.domain}", row: row.clone() }
                    }
                }
            }
        }
    }
}

// Edit and Delete stay inert until tenant management is backed by the API
#[component]
fn TenantTableRow(row: TenantRow) -> Element {
    let badge_class = row.status.badge_class();
    let status = row.status.label();

    rsx! {
        tr { class: "c-table__row",
            td { class: "c-table__cell", "{row.name}" }
            td { class: "c-table__cell", "{row.domain}" }
            td { class: "c-table__cell",
                span { class: "{badge_class}", "{status}" }
            }
            td { class: "c-table__cell c-table__cell--actions",
                Button { variant: ButtonVariant::Link, "Edit" }
                Button { variant: ButtonVariant::Danger, "Delete" }
            }
        }
    }
}
