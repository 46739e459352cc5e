//! Dashboard coordinator: single owner of range, snapshot and the
//! loading/export flags. All changes go through [`DashboardState::update`],
//! which returns the side effect the UI layer must run.
//!
//! Every fetch is tagged with an increasing sequence number and only the
//! response to the newest request is applied (last request wins).

use std::rc::Rc;

use crate::date_range::DateRange;
use crate::format::format_currency_whole;
use crate::metrics::DashboardMetrics;

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardMsg {
    Mounted,
    Refresh,
    RangeChanged(DateRange),
    MetricsLoaded { seq: u64, metrics: DashboardMetrics },
    MetricsFailed { seq: u64 },
    ExportRequested,
    ExportFinished,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DashboardEffect {
    FetchMetrics { seq: u64, range: DateRange },
    Export { range: DateRange },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardView {
    /// No data and nothing in flight: prompt for an upload.
    Empty,
    Populated,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KpiKind {
    TotalRevenue,
    TotalOrders,
    ItemsSold,
    UniqueCustomers,
}

impl KpiKind {
    pub fn title(self) -> &'static str {
        match self {
            KpiKind::TotalRevenue => "Total Revenue",
            KpiKind::TotalOrders => "Total Orders",
            KpiKind::ItemsSold => "Items Sold",
            KpiKind::UniqueCustomers => "Unique Customers",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            KpiKind::TotalRevenue => "Total sales revenue",
            KpiKind::TotalOrders => "Number of orders",
            KpiKind::ItemsSold => "Total units sold",
            KpiKind::UniqueCustomers => "Individual customers",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KpiCard {
    pub kind: KpiKind,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardState {
    range: DateRange,
    loading: bool,
    has_data: bool,
    exporting: bool,
    metrics: Option<Rc<DashboardMetrics>>,
    latest_seq: u64,
}

impl DashboardState {
    /// Starts in the loading state: the first fetch is issued on mount.
    pub fn new(range: DateRange) -> Self {
        Self {
            range,
            loading: true,
            has_data: false,
            exporting: false,
            metrics: None,
            latest_seq: 0,
        }
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_data(&self) -> bool {
        self.has_data
    }

    pub fn is_exporting(&self) -> bool {
        self.exporting
    }

    pub fn metrics(&self) -> Option<&DashboardMetrics> {
        self.metrics.as_deref()
    }

    /// Sequence number of the newest fetch issued so far.
    pub fn latest_seq(&self) -> u64 {
        self.latest_seq
    }

    pub fn can_export(&self) -> bool {
        self.has_data && !self.exporting
    }

    pub fn view(&self) -> DashboardView {
        if !self.has_data && !self.loading {
            DashboardView::Empty
        } else {
            DashboardView::Populated
        }
    }

    pub fn kpi_cards(&self) -> [KpiCard; 4] {
        kpi_cards(self.metrics())
    }

    pub fn update(&mut self, msg: DashboardMsg) -> Option<DashboardEffect> {
        match msg {
            DashboardMsg::Mounted | DashboardMsg::Refresh => Some(self.begin_fetch()),
            DashboardMsg::RangeChanged(range) => {
                tracing::debug!("Date range changed to {} .. {}", range.start_iso(), range.end_iso());
                self.range = range;
                Some(self.begin_fetch())
            }
            DashboardMsg::MetricsLoaded { seq, metrics } => {
                if !self.is_current(seq) {
                    return None;
                }
                self.metrics = Some(Rc::new(metrics));
                self.has_data = true;
                self.loading = false;
                None
            }
            DashboardMsg::MetricsFailed { seq } => {
                if !self.is_current(seq) {
                    return None;
                }
                self.has_data = false;
                self.loading = false;
                None
            }
            DashboardMsg::ExportRequested => {
                if !self.can_export() {
                    tracing::debug!("Export ignored (exporting={}, has_data={})", self.exporting, self.has_data);
                    return None;
                }
                self.exporting = true;
                Some(DashboardEffect::Export { range: self.range })
            }
            DashboardMsg::ExportFinished => {
                self.exporting = false;
                None
            }
        }
    }

    fn begin_fetch(&mut self) -> DashboardEffect {
        self.latest_seq += 1;
        self.loading = true;
        DashboardEffect::FetchMetrics {
            seq: self.latest_seq,
            range: self.range,
        }
    }

    fn is_current(&self, seq: u64) -> bool {
        if seq != self.latest_seq {
            tracing::warn!("Dropping stale metrics response #{} (latest #{})", seq, self.latest_seq);
            return false;
        }
        true
    }
}

/// The four summary cards; absent metrics show as zero.
pub fn kpi_cards(metrics: Option<&DashboardMetrics>) -> [KpiCard; 4] {
    let sales = metrics.map(|m| m.sales_metrics.clone()).unwrap_or_default();
    [
        KpiCard {
            kind: KpiKind::TotalRevenue,
            value: format_currency_whole(sales.total_revenue),
        },
        KpiCard {
            kind: KpiKind::TotalOrders,
            value: sales.total_orders.to_string(),
        },
        KpiCard {
            kind: KpiKind::ItemsSold,
            value: sales.total_items_sold.to_string(),
        },
        KpiCard {
            kind: KpiKind::UniqueCustomers,
            value: sales.unique_customers.to_string(),
        },
    ]
}
