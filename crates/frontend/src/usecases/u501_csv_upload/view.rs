//! Upload wizard: pick a CSV, review the suggested column mapping, submit.
//!
//! Submission is simulated with a fixed delay; nothing is sent anywhere.

use super::reader::read_csv_file;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use contracts::shared::config::AppConfig;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_csv_upload::{
    inspect_csv, suggest_mappings, update_mapping, ColumnMapping, CsvSummary, CsvUpload,
    KeywordMatcher, TargetField, UploadRecord, UploadStatus, WizardGeneration, SUPPORTED_FORMATS,
};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;
use wasm_bindgen::JsCast;

/// Number of columns that feed a field
fn mapped_count(mappings: &[ColumnMapping]) -> usize {
    mappings
        .iter()
        .filter(|m| m.target != TargetField::Ignore)
        .count()
}

/// Outcome of a submission once the delay has passed
fn submission_result(mappings: &[ColumnMapping]) -> UploadStatus {
    if mapped_count(mappings) == 0 {
        UploadStatus::Failed("No columns are mapped to a field".to_string())
    } else {
        UploadStatus::Succeeded
    }
}

/// File chosen in the wizard with what was read from it
#[derive(Debug, Clone, PartialEq)]
struct SelectedFile {
    name: String,
    summary: CsvSummary,
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let selected = RwSignal::new(None::<SelectedFile>);
    let mappings = RwSignal::new(Vec::<ColumnMapping>::new());
    let status = RwSignal::new(UploadStatus::Idle);
    let error = RwSignal::new(None::<String>);
    let is_reading = RwSignal::new(false);
    let dragging = RwSignal::new(false);
    let history = RwSignal::new(UploadRecord::seed_history());
    let generation = RwSignal::new(WizardGeneration::default());

    // Unmounted page or a restarted wizard both mean the task is stale
    let still_current = move |started: WizardGeneration| {
        generation
            .try_with_untracked(|g| g.is_current(started))
            .unwrap_or(false)
    };

    let reset = move || {
        if !status.get_untracked().can_reset() {
            return;
        }
        generation.update(|g| g.bump());
        selected.set(None);
        mappings.set(Vec::new());
        status.set(UploadStatus::Idle);
        error.set(None);
    };

    let accept_file = move |file: web_sys::File| {
        if !status.get_untracked().can_reset() {
            return;
        }
        reset();
        let started = generation.get_untracked();
        is_reading.set(true);
        spawn_local(async move {
            let name = file.name();
            let read = read_csv_file(file).await;
            if !still_current(started) {
                log::debug!("dropping stale read of {}", name);
                return;
            }
            match read {
                Ok(text) => {
                    let summary = inspect_csv(&text);
                    log::info!(
                        "read {}: {} columns, {} rows",
                        name,
                        summary.headers.len(),
                        summary.row_count
                    );
                    mappings.set(suggest_mappings(&summary.headers, &KeywordMatcher::default()));
                    selected.set(Some(SelectedFile { name, summary }));
                }
                Err(e) => {
                    log::warn!("rejected upload {}: {}", name, e);
                    error.set(Some(e.to_string()));
                }
            }
            is_reading.set(false);
        });
    };

    let on_input = move |ev: leptos::ev::Event| {
        let file = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            accept_file(file);
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        dragging.set(false);
        let file = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0));
        if let Some(file) = file {
            accept_file(file);
        }
    };

    let on_submit = move |_| {
        if !status.get_untracked().can_submit() {
            return;
        }
        let Some(file) = selected.get_untracked() else {
            return;
        };
        status.set(UploadStatus::Processing);
        let started = generation.get_untracked();
        spawn_local(async move {
            TimeoutFuture::new(AppConfig::UPLOAD_DELAY_MS).await;
            if !still_current(started) {
                log::debug!("dropping stale upload of {}", file.name);
                return;
            }
            let result = mappings.with_untracked(|m| submission_result(m));
            let succeeded = result == UploadStatus::Succeeded;
            history.update(|h| {
                h.insert(
                    0,
                    UploadRecord {
                        file_name: file.name.clone(),
                        when: "Just now".to_string(),
                        succeeded,
                        rows: if succeeded { file.summary.row_count } else { 0 },
                    },
                )
            });
            log::info!("upload of {} finished: {:?}", file.name, result);
            status.set(result);
        });
    };

    let mapping_rows = move || {
        mappings
            .get()
            .into_iter()
            .map(|m| {
                let source = m.source_column.clone();
                view! {
                    <TableRow>
                        <TableCell>{m.source_column.clone()}</TableCell>
                        <TableCell>
                            <select
                                class="upload__select"
                                disabled=move || !status.get().can_submit()
                                on:change=move |ev| {
                                    if let Some(target) = TargetField::from_code(&event_target_value(&ev)) {
                                        mappings.update(|all| {
                                            update_mapping(all, &source, target);
                                        });
                                    }
                                }
                            >
                                {TargetField::ALL
                                    .into_iter()
                                    .map(|f| view! { <option value=f.code() selected={f == m.target}>{f.label()}</option> })
                                    .collect_view()}
                            </select>
                        </TableCell>
                    </TableRow>
                }
            })
            .collect_view()
    };

    let status_banner = move || match status.get() {
        UploadStatus::Idle => None,
        UploadStatus::Processing => Some(
            view! {
                <div class="info-box">
                    <Spinner size=SpinnerSize::Tiny />
                    <span>"Processing upload..."</span>
                </div>
            }
            .into_any(),
        ),
        UploadStatus::Succeeded => Some(
            view! {
                <div class="info-box info-box--success">
                    {icon("check-circle")}
                    <span>"Upload complete. Data will appear on the dashboards after the next refresh."</span>
                </div>
            }
            .into_any(),
        ),
        UploadStatus::Failed(reason) => Some(
            view! {
                <div class="warning-box warning-box--error">
                    {icon("alert-circle")}
                    <span class="warning-box__text">{format!("Upload failed: {}", reason)}</span>
                </div>
            }
            .into_any(),
        ),
    };

    view! {
        <div class="page">
            <PageHeader title=CsvUpload::display_name() subtitle=CsvUpload::description().to_string() />

            <div class="page__content upload">
                <div class="upload__main">
                    {move || error.get().map(|e| view! {
                        <div class="warning-box warning-box--error">
                            {icon("alert-triangle")}
                            <span class="warning-box__text">{e}</span>
                        </div>
                    })}

                    <Show
                        when=move || selected.with(|s| s.is_some())
                        fallback=move || view! {
                            <label
                                class="upload__dropzone"
                                class:upload__dropzone--active=move || dragging.get()
                                on:dragover=move |ev: leptos::ev::DragEvent| {
                                    ev.prevent_default();
                                    dragging.set(true);
                                }
                                on:dragleave=move |_| dragging.set(false)
                                on:drop=on_drop
                            >
                                {icon("upload")}
                                <span class="upload__dropzone-title">
                                    {move || if is_reading.get() { "Reading file..." } else { "Drop your CSV file here" }}
                                </span>
                                <span class="upload__dropzone-hint">"or click to browse"</span>
                                <input type="file" accept=".csv,text/csv" class="upload__file-input" on:change=on_input />
                            </label>
                        }
                    >
                        <div class="card">
                            <div class="card__header">
                                <h3 class="card__title">
                                    {icon("file")}
                                    {move || selected.with(|s| s.as_ref().map(|f| f.name.clone()).unwrap_or_default())}
                                </h3>
                                <span class="card__meta">
                                    {move || selected.with(|s| s.as_ref().map(|f| {
                                        if f.summary.used_sample_headers {
                                            "No header row found, sample columns shown".to_string()
                                        } else {
                                            format!("{} rows • {} mapped", f.summary.row_count, mappings.with(|m| mapped_count(m)))
                                        }
                                    }).unwrap_or_default())}
                                </span>
                            </div>
                            <Table>
                                <TableHeader>
                                    <TableRow>
                                        <TableHeaderCell>"File Column"</TableHeaderCell>
                                        <TableHeaderCell>"Maps To"</TableHeaderCell>
                                    </TableRow>
                                </TableHeader>
                                <TableBody>{mapping_rows}</TableBody>
                            </Table>
                            <div class="card__footer">
                                <Button
                                    appearance=ButtonAppearance::Secondary
                                    disabled=Signal::derive(move || !status.get().can_reset())
                                    on_click=move |_| reset()
                                >
                                    {move || if status.get().is_terminal() { "Upload Another" } else { "Cancel" }}
                                </Button>
                                <Button
                                    appearance=ButtonAppearance::Primary
                                    disabled=Signal::derive(move || !status.get().can_submit())
                                    on_click=on_submit
                                >
                                    {move || if status.get().is_processing() { "Uploading..." } else { "Upload" }}
                                </Button>
                            </div>
                        </div>
                    </Show>

                    {status_banner}
                </div>

                <aside class="upload__side">
                    <div class="card">
                        <div class="card__header">
                            <h3 class="card__title">"Supported Formats"</h3>
                        </div>
                        <ul class="card__body upload__formats">
                            {SUPPORTED_FORMATS
                                .iter()
                                .map(|f| view! {
                                    <li class="upload__format">
                                        <strong>{f.name}</strong>
                                        <span>{f.description}</span>
                                        <code>{f.required_columns}</code>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>

                    <div class="card">
                        <div class="card__header">
                            <h3 class="card__title">"Recent Uploads"</h3>
                        </div>
                        <ul class="card__body upload__history">
                            {move || history
                                .get()
                                .into_iter()
                                .map(|r| {
                                    let (icon_name, cls) = if r.succeeded {
                                        ("check-circle", "upload__record upload__record--ok")
                                    } else {
                                        ("alert-circle", "upload__record upload__record--failed")
                                    };
                                    view! {
                                        <li class=cls>
                                            {icon(icon_name)}
                                            <div>
                                                <div class="upload__record-name">{r.file_name.clone()}</div>
                                                <div class="upload__record-meta">{r.summary()}</div>
                                            </div>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </aside>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(source: &str, target: TargetField) -> ColumnMapping {
        ColumnMapping {
            source_column: source.to_string(),
            target,
        }
    }

    #[test]
    fn test_submission_result() {
        let mut mappings = vec![
            mapping("Notes", TargetField::Ignore),
            mapping("Amount", TargetField::Ignore),
        ];
        assert!(matches!(submission_result(&mappings), UploadStatus::Failed(_)));

        update_mapping(&mut mappings, "Amount", TargetField::Revenue);
        assert_eq!(mapped_count(&mappings), 1);
        assert_eq!(submission_result(&mappings), UploadStatus::Succeeded);
    }
}
