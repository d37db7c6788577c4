// services/frota-dash/src/components/report_base.rs
//
// Frota Dashboard - Shared report form and results panel
//

use leptos::*;
use svckit::{FrotaError, ReportFormData};

/// Filter form plus a summary of the last accepted submission.
/// `on_submit` only fires for input that parses and validates.
#[component]
pub fn RelatorioBase(
    title: &'static str,
    description: &'static str,
    #[prop(into)] on_submit: Callback<ReportFormData>,
) -> impl IntoView {
    let data_inicio = create_rw_signal(String::new());
    let data_fim = create_rw_signal(String::new());
    let veiculo = create_rw_signal(String::new());
    let motorista = create_rw_signal(String::new());
    let busca = create_rw_signal(String::new());

    let error = create_rw_signal(None::<String>);
    let applied = create_rw_signal(None::<ReportFormData>);

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let inputs = [data_inicio, data_fim, veiculo, motorista, busca].map(|f| f.get_untracked());

        match accept(&inputs, |data| on_submit.call(data)) {
            Ok(data) => {
                error.set(None);
                applied.set(Some(data));
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let clear = move |_: ev::MouseEvent| {
        for field in [data_inicio, data_fim, veiculo, motorista, busca] {
            field.set(String::new());
        }
        error.set(None);
        applied.set(None);
    };

    view! {
        <section class="panel report-panel">
            <header class="report-header">
                <h2 class="panel-title">{title}</h2>
                <p class="report-description">{description}</p>
            </header>

            <form class="report-form" on:submit=submit>
                <div class="form-grid">
                    <FormField label="Data inicial" input_type="date" value=data_inicio />
                    <FormField label="Data final" input_type="date" value=data_fim />
                    <FormField label="Veículo" input_type="text" value=veiculo />
                    <FormField label="Motorista" input_type="text" value=motorista />
                    <FormField label="Busca" input_type="search" value=busca />
                </div>

                <Show when=move || error.get().is_some() fallback=|| view! {}>
                    <p class="form-error">{move || error.get().unwrap_or_default()}</p>
                </Show>

                <div class="form-actions">
                    <button type="submit" class="btn btn-primary">"Gerar relatório"</button>
                    <button type="button" class="btn btn-secondary" on:click=clear>"Limpar"</button>
                </div>
            </form>

            <Show when=move || applied.get().is_some() fallback=|| view! {}>
                <AppliedFilters data=Signal::derive(move || applied.get().unwrap_or_default()) />
            </Show>
        </section>
    }
}

#[component]
fn FormField(
    label: &'static str,
    input_type: &'static str,
    value: RwSignal<String>,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <input
                class="form-input"
                type=input_type
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
fn AppliedFilters(data: Signal<ReportFormData>) -> impl IntoView {
    let rows = move || data.get().fields();

    view! {
        <div class="report-results">
            <h3 class="results-title">"Filtros aplicados"</h3>
            <Show
                when=move || !rows().is_empty()
                fallback=|| view! { <p class="results-empty">"Nenhum filtro aplicado"</p> }
            >
                <table class="results-table">
                    <tbody>
                        <For
                            each=rows
                            key=|(name, value)| format!("{}={}", name, value)
                            children=move |(name, value)| {
                                view! {
                                    <tr>
                                        <th>{field_label(name)}</th>
                                        <td>{value}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}

/// Parses and validates the raw inputs in form order, handing the result to
/// `on_accept` only when both steps succeed.
fn accept(
    inputs: &[String; 5],
    on_accept: impl FnOnce(ReportFormData),
) -> Result<ReportFormData, FrotaError> {
    let [data_inicio, data_fim, veiculo, motorista, busca] = inputs;
    let data = ReportFormData::from_inputs(data_inicio, data_fim, veiculo, motorista, busca)?;
    data.validate()?;
    on_accept(data.clone());
    Ok(data)
}

fn field_label(name: &str) -> &'static str {
    match name {
        "data_inicio" => "Data inicial",
        "data_fim" => "Data final",
        "veiculo" => "Veículo",
        "motorista" => "Motorista",
        "busca" => "Busca",
        _ => "Campo",
    }
}
