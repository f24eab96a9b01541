//! Facet selection: categories, countries and period

use dioxus::prelude::*;
use shorts_types::{CATEGORIES, COUNTRIES, Period};

use crate::state::use_dashboard;

#[component]
pub fn FilterBar() -> Element {
    let mut state = use_dashboard();
    let selection = state.selection.read();
    let current_period = selection.period();

    rsx! {
        section { class: "filter-bar",
            div { class: "filter-group",
                h4 { "Categories" }
                div { class: "chip-row",
                    for category in CATEGORIES.iter().copied() {
                        button {
                            key: "{category}",
                            class: if selection.has_category(category) { "chip chip-active" } else { "chip" },
                            onclick: move |_| state.toggle_category(category),
                            "{category}"
                        }
                    }
                }
            }

            div { class: "filter-group",
                h4 { "Countries" }
                div { class: "chip-row",
                    for (code, name) in COUNTRIES.iter().copied() {
                        button {
                            key: "{code}",
                            class: if selection.has_country(code) { "chip chip-active" } else { "chip" },
                            title: "{name}",
                            onclick: move |_| state.toggle_country(code),
                            "{code}"
                        }
                    }
                }
            }

            div { class: "filter-group",
                h4 { "Period" }
                select {
                    class: "period-select",
                    onchange: move |e| state.set_period_key(&e.value()),
                    for period in Period::all().iter().copied() {
                        option {
                            key: "{period.key()}",
                            value: period.key(),
                            selected: period == current_period,
                            "{period.label()}"
                        }
                    }
                }
            }
        }
    }
}
