//! Inline panel shown when a page cannot load its records.

use leptos::prelude::*;

use crate::data::{DataError, RecordSource};

/// Read every record from `source`, logging a failure before handing it back.
///
/// # Errors
///
/// Returns the source's [`DataError`] unchanged.
pub fn load<T>(source: &dyn RecordSource<T>) -> Result<Vec<T>, DataError> {
    source.list().inspect_err(|e| log::error!("record load failed: {e}"))
}

#[component]
pub fn ErrorPanel(error: DataError) -> impl IntoView {
    view! {
        <div class="card error-panel" role="alert">
            <p class="error-panel__title">"Something went wrong"</p>
            <p class="error-panel__detail">{error.to_string()}</p>
        </div>
    }
}
