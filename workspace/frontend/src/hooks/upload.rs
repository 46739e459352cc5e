use std::cell::RefCell;
use std::rc::Rc;

use common::upload::UPLOAD_FALLBACK_MESSAGE;
use common::{Candidate, FileMeta, UploadEffect, UploadMsg, UploadState};
use gloo_timers::callback::Timeout;
use web_sys::{File, FileList};
use yew::prelude::*;

use crate::api_client::upload::upload_csv;
use crate::api_client::ApiClient;
use crate::session::SessionContext;
use crate::settings;

pub type FileUploadState = UploadState<File>;

/// Drives `UploadState` for one upload widget.
#[derive(Clone)]
pub struct UploadDriver {
    state: Rc<RefCell<FileUploadState>>,
    rerender: UseForceUpdateHandle,
    client: ApiClient,
    on_success: Callback<()>,
}

impl UploadDriver {
    pub fn snapshot(&self) -> FileUploadState {
        self.state.borrow().clone()
    }

    pub fn dispatch(&self, msg: UploadMsg<File>) {
        let effect = self.state.borrow_mut().update(msg);
        self.rerender.force_update();
        if let Some(effect) = effect {
            self.run(effect);
        }
    }

    pub fn select(&self, files: Option<FileList>) {
        self.dispatch(UploadMsg::FilesSelected(candidates(files)));
    }

    fn run(&self, effect: UploadEffect<File>) {
        match effect {
            UploadEffect::Upload(candidate) => {
                let driver = self.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let msg = match upload_csv(&driver.client, &candidate.handle).await {
                        Ok(response) => UploadMsg::Succeeded {
                            rows_processed: response.rows_processed,
                        },
                        Err(err) => UploadMsg::Failed(err.user_message(UPLOAD_FALLBACK_MESSAGE)),
                    };
                    driver.dispatch(msg);
                });
            }
            UploadEffect::ScheduleCompletion => {
                let on_success = self.on_success.clone();
                let delay = settings::get_settings().upload_success_delay_ms;
                Timeout::new(delay, move || {
                    log::debug!("Upload confirmation elapsed");
                    on_success.emit(());
                })
                .forget();
            }
        }
    }
}

fn candidates(files: Option<FileList>) -> Vec<Candidate<File>> {
    let Some(files) = files else {
        return Vec::new();
    };
    (0..files.length())
        .filter_map(|index| files.get(index))
        .map(|file| Candidate {
            meta: FileMeta {
                name: file.name(),
                mime_type: file.type_(),
                size: file.size() as u64,
            },
            handle: file,
        })
        .collect()
}

#[hook]
pub fn use_upload(on_success: Callback<()>) -> UploadDriver {
    let state = use_mut_ref(FileUploadState::default);
    let rerender = use_force_update();
    let client = use_context::<SessionContext>()
        .map(|s| s.client())
        .unwrap_or_else(ApiClient::anonymous);

    UploadDriver {
        state,
        rerender,
        client,
        on_success,
    }
}
