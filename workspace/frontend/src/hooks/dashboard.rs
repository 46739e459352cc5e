use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use common::{DashboardEffect, DashboardMsg, DashboardState, DateRange, ExportQuery};
use yew::prelude::*;

use crate::api_client::export::export_to_excel;
use crate::api_client::metrics::get_dashboard_metrics;
use crate::api_client::ApiClient;
use crate::session::SessionContext;
use crate::ui::toast::ToastContext;

const EXPORT_FALLBACK_MESSAGE: &str = "Failed to export data";

/// Owns the dashboard screen state. Messages go through
/// `DashboardState::update`; the resulting effects run here.
#[derive(Clone)]
pub struct DashboardDriver {
    state: Rc<RefCell<DashboardState>>,
    rerender: UseForceUpdateHandle,
    client: ApiClient,
    toast: Option<ToastContext>,
}

impl DashboardDriver {
    pub fn snapshot(&self) -> DashboardState {
        self.state.borrow().clone()
    }

    pub fn dispatch(&self, msg: DashboardMsg) {
        let effect = self.state.borrow_mut().update(msg);
        self.rerender.force_update();
        if let Some(effect) = effect {
            self.run(effect);
        }
    }

    pub fn refresh(&self) -> Callback<()> {
        let driver = self.clone();
        Callback::from(move |_| driver.dispatch(DashboardMsg::Refresh))
    }

    pub fn change_range(&self) -> Callback<DateRange> {
        let driver = self.clone();
        Callback::from(move |range| driver.dispatch(DashboardMsg::RangeChanged(range)))
    }

    pub fn export(&self) -> Callback<()> {
        let driver = self.clone();
        Callback::from(move |_| driver.dispatch(DashboardMsg::ExportRequested))
    }

    fn run(&self, effect: DashboardEffect) {
        let driver = self.clone();
        match effect {
            DashboardEffect::FetchMetrics { seq, range } => {
                log::debug!("Fetching metrics #{}", seq);
                wasm_bindgen_futures::spawn_local(async move {
                    let msg = match get_dashboard_metrics(&driver.client, &range).await {
                        Ok(metrics) => DashboardMsg::MetricsLoaded { seq, metrics },
                        Err(_) => DashboardMsg::MetricsFailed { seq },
                    };
                    driver.dispatch(msg);
                });
            }
            DashboardEffect::Export { range } => {
                wasm_bindgen_futures::spawn_local(async move {
                    let query = ExportQuery::for_range(range);
                    match export_to_excel(&driver.client, &query).await {
                        Ok(file_name) => driver.notify_success(format!("Report saved as {}", file_name)),
                        // Already redirected to the login page.
                        Err(err) if err.is_unauthorized() => {}
                        Err(err) => driver.notify_error(err.user_message(EXPORT_FALLBACK_MESSAGE)),
                    }
                    driver.dispatch(DashboardMsg::ExportFinished);
                });
            }
        }
    }

    fn notify_success(&self, message: String) {
        if let Some(toast) = &self.toast {
            toast.show_success(message);
        }
    }

    fn notify_error(&self, message: String) {
        match &self.toast {
            Some(toast) => toast.show_error(message),
            None => log::error!("{}", message),
        }
    }
}

/// Creates the dashboard state for the signed-in user and issues the
/// first metrics fetch on mount.
#[hook]
pub fn use_dashboard() -> DashboardDriver {
    let state = use_mut_ref(|| DashboardState::new(DateRange::default_at(Utc::now())));
    let rerender = use_force_update();
    let session = use_context::<SessionContext>();
    let toast = use_context::<ToastContext>();

    let client = session
        .map(|s| s.client())
        .unwrap_or_else(ApiClient::anonymous);

    let driver = DashboardDriver {
        state,
        rerender,
        client,
        toast,
    };

    {
        let driver = driver.clone();
        use_effect_with((), move |_| {
            log::trace!("Dashboard mounted");
            driver.dispatch(DashboardMsg::Mounted);
            || ()
        });
    }

    driver
}
