//! Document upload component with drag & drop support.
//!
//! Handles file selection, upload to backend, and result rendering.

use leptos::*;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{DragEvent, Event, FormData, HtmlInputElement, SubmitEvent};

use crate::config::{accept_attribute, ACCEPTED_EXTENSIONS, DROP_ZONE_PROMPT, MAX_FILE_SIZE};
use crate::services::submit_document;
use crate::types::{selected_label, DragKind, DropState, ProcessedDocument, UploadError};
use crate::{ProgressBar, ResultPanel};

#[component]
pub fn UploadSection() -> impl IntoView {
    let (drop_state, set_drop_state) = create_signal(DropState::Idle);
    let (selected_name, set_selected_name) = create_signal(None::<String>);
    let (is_submitting, set_is_submitting) = create_signal(false);
    let (outcome, set_outcome) = create_signal(None::<Result<ProcessedDocument, UploadError>>);

    let form_ref = create_node_ref::<html::Form>();
    let file_input = create_node_ref::<html::Input>();

    // One handler per drag-lifecycle event: suppress the browser's own
    // handling (it would open the file) and step the hover state machine.
    let drag_transition = move |kind: DragKind| {
        move |ev: DragEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            set_drop_state.update(|state| *state = state.on_drag(kind));
        }
    };

    // Drop also captures the released files. The dropped list replaces
    // the input's file set so the form submission picks it up; empty
    // drops change nothing.
    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        set_drop_state.update(|state| *state = state.on_drag(DragKind::Drop));

        let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) else {
            return;
        };
        if files.length() == 0 {
            return;
        }
        if let Some(file) = files.get(0) {
            if let Some(input) = file_input.get() {
                input.set_files(Some(&files));
            }
            log::info!("📄 File dropped: {}", file.name());
            set_selected_name.set(Some(file.name()));
        }
    };

    // Handler for selection through the OS file picker
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);

        if let Some(files) = input.files() {
            if files.length() > 0 {
                if let Some(file) = files.get(0) {
                    log::info!("📄 File selected: {}", file.name());
                    set_selected_name.set(Some(file.name()));
                }
            }
        }
    };

    // Handler for clicking the drop zone
    let trigger_file_input = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    // Intercepts native submission and runs the upload over fetch;
    // a full page navigation never happens.
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        let Some(form) = form_ref.get() else {
            return;
        };
        let form_data = match FormData::new_with_form(&form) {
            Ok(data) => data,
            Err(e) => {
                log::error!("Failed to read form fields: {:?}", e);
                set_outcome.set(Some(Err(UploadError::Network(js_error_message(&e)))));
                return;
            }
        };

        set_is_submitting.set(true);
        set_outcome.set(None);

        spawn_local(async move {
            log::info!("📤 Uploading document...");

            let result = submit_document(form_data).await;
            match &result {
                Ok(doc) => log::info!(
                    "✅ Document processed: {} ({} words, {} sentences)",
                    doc.filename,
                    doc.word_count,
                    doc.sentence_count
                ),
                Err(e) => log::error!("❌ Upload failed: {}", e),
            }
            set_outcome.set(Some(result));

            // Runs on every path so another attempt stays possible.
            set_is_submitting.set(false);
        });
    };

    let format_hint = format!(
        "Supported formats: {} (max {} MB)",
        ACCEPTED_EXTENSIONS.join(", ").to_uppercase(),
        MAX_FILE_SIZE / (1024 * 1024)
    );

    view! {
        <form class="upload-form" id="uploadForm" node_ref=form_ref on:submit=on_submit>
            <div
                class=move || drop_state.get().css_class()
                id="dropArea"
                on:click=trigger_file_input
                on:dragenter=drag_transition(DragKind::Enter)
                on:dragover=drag_transition(DragKind::Over)
                on:dragleave=drag_transition(DragKind::Leave)
                on:drop=on_drop
            >
                <div class="upload-icon">"📄"</div>
                <p class="upload-text">
                    {move || match selected_name.get() {
                        Some(name) => selected_label(&name),
                        None => DROP_ZONE_PROMPT.to_string(),
                    }}
                </p>
                <p class="upload-hint">{format_hint}</p>

                <input
                    type="file"
                    id="fileInput"
                    name="file"
                    accept=accept_attribute()
                    style="display:none"
                    node_ref=file_input
                    on:change=on_file_change
                    // Programmatic clicks bubble; don't retrigger the zone handler.
                    on:click=move |ev| ev.stop_propagation()
                />
            </div>

            <button
                type="submit"
                class="btn btn-primary"
                id="uploadBtn"
                disabled=move || is_submitting.get()
            >
                {move || if is_submitting.get() { "Uploading..." } else { "Upload Document" }}
            </button>
        </form>

        <Show
            when=move || is_submitting.get()
            fallback=|| view! { }
        >
            <ProgressBar/>
        </Show>

        <Show
            when=move || outcome.get().is_some()
            fallback=|| view! { }
        >
            <ResultPanel outcome=outcome/>
        </Show>
    }
}

/// Message text of a raw JS exception.
fn js_error_message(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        String::from(error.message())
    } else {
        value.as_string().unwrap_or_else(|| format!("{value:?}"))
    }
}
