// services/frota-dash/src/components/log.rs
//
// Frota Dashboard - Event Log Component
//

use leptos::*;
use crate::state::DiagnosticsState;

#[component]
pub fn EventLog(state: DiagnosticsState) -> impl IntoView {
    let logs = move || state.logs.get();
    let recent = move || logs().into_iter().rev().take(50).collect::<Vec<_>>();

    view! {
        <div class="log-container">
            <Show
                when=move || !logs().is_empty()
                fallback=|| view! { <p class="log-empty">"Nenhum evento registrado"</p> }
            >
                <div class="log-scroll">
                    <For
                        each=recent
                        key=|entry| entry.seq
                        children=move |entry| {
                            let (level_class, level_icon) = level_style(&entry.level);
                            let time = time_of_day(&entry.timestamp);

                            view! {
                                <div class=format!("log-entry {}", level_class)>
                                    <span class="log-time">{time}</span>
                                    <span class="log-icon">{level_icon}</span>
                                    <span class="log-message">{entry.message.clone()}</span>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}

fn level_style(level: &str) -> (&'static str, &'static str) {
    match level {
        "error" => ("log-error", "✗"),
        "warn" => ("log-warn", "⚠"),
        _ => ("log-info", "●"),
    }
}

/// "2024-05-01T13:45:10.123Z" -> "13:45:10"
fn time_of_day(timestamp: &str) -> String {
    timestamp
        .split('T')
        .nth(1)
        .and_then(|t| t.split('.').next())
        .unwrap_or(timestamp)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day() {
        assert_eq!(time_of_day("2024-05-01T13:45:10.123Z"), "13:45:10");
        assert_eq!(time_of_day("sem hora"), "sem hora");
    }

    #[test]
    fn test_level_style() {
        assert_eq!(level_style("error").0, "log-error");
        assert_eq!(level_style("warn").0, "log-warn");
        assert_eq!(level_style("info").0, "log-info");
    }
}
