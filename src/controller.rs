// src/controller.rs
//
// The two page operations. Both are single-attempt: no retry, no backoff.
// Failures end up as one fixed message in the view; the returned Result is
// only for logs and exit codes.

use crate::{
    api::ApiClient,
    config::consts::{MSG_LOAD_ERROR, MSG_SCRAPE_ERROR, MSG_SCRAPE_RUNNING, MSG_SCRAPE_STARTED},
    core::{FetchError, Transport},
    data::render_rows,
    view::View,
};

/// GET /data and replace the table with the result.
/// On failure the previous rows are left untouched.
pub fn load_and_render<T: Transport>(
    api: &ApiClient<T>,
    view: &mut dyn View,
) -> Result<usize, FetchError> {
    logd!("Load: Begin {}", api.data_url());

    match api.fetch_rows() {
        Ok(rows) => {
            let rendered = render_rows(&rows);
            let n = rendered.len();
            view.replace_rows(rendered);
            view.set_message("");
            logf!("Load: OK rows={}", n);
            Ok(n)
        }
        Err(e) => {
            loge!("Load: Error: {}", e);
            view.set_message(MSG_LOAD_ERROR);
            Err(e)
        }
    }
}

/// POST /scrape; on success reload the table exactly once.
pub fn trigger_scrape<T: Transport>(
    api: &ApiClient<T>,
    view: &mut dyn View,
) -> Result<usize, FetchError> {
    view.set_message(MSG_SCRAPE_RUNNING);
    logf!("Scrape: Begin {}", api.scrape_url());

    if let Err(e) = api.start_scrape() {
        loge!("Scrape: Error: {}", e);
        view.set_message(MSG_SCRAPE_ERROR);
        return Err(e);
    }

    logf!("Scrape: Started");
    view.set_message(MSG_SCRAPE_STARTED);
    load_and_render(api, view)
}
