//! Desk facade
//!
//! One handle the UI layer talks to. Wires config, store, documents and
//! the insights client together and hosts the user-level actions
//! (create from form, status buttons, collect payment, save/print).

use shared::util::now_millis;
use shared::{Order, OrderDraft, OrderStatus, ShopSettings, ShopSettingsUpdate};

use crate::config::Config;
use crate::documents::{self, DocumentError, DocumentKind};
use crate::insights::{self, InsightsClient};
use crate::lifecycle::{self, TransitionError};
use crate::stats::{self, DashboardStats};
use crate::store::{OrderStore, StoreError, StoreEvent};

#[derive(Debug, thiserror::Error)]
pub enum DeskError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Transition(#[from] TransitionError),

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("Order not found: {id}")]
    OrderNotFound { id: String },
}

pub type DeskResult<T> = Result<T, DeskError>;

/// Application state: everything a view needs. Cheap to clone.
#[derive(Clone)]
pub struct Desk {
    config: Config,
    store: OrderStore,
    insights: InsightsClient,
}

impl Desk {
    /// Open the desk with the given configuration, creating the data
    /// directory on first run.
    pub fn open(config: Config) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&config.data_dir)?;
        let store = OrderStore::open(config.db_path())?;
        let insights = InsightsClient::new(&config)?;
        Ok(Self {
            config,
            store,
            insights,
        })
    }

    /// In-memory desk (for testing)
    pub fn open_in_memory() -> anyhow::Result<Self> {
        let config = Config::default();
        let store = OrderStore::open_in_memory()?;
        let insights = InsightsClient::new(&config)?;
        Ok(Self {
            config,
            store,
            insights,
        })
    }

    pub fn store(&self) -> &OrderStore {
        &self.store
    }

    pub fn subscribe(&self) -> tokio::sync::broadcast::Receiver<StoreEvent> {
        self.store.subscribe()
    }

    // ========== Order Actions ==========

    /// Turn a submitted new-order form into a persisted Pending order.
    pub fn create_order(&self, draft: OrderDraft) -> DeskResult<Order> {
        let invoice_number = self.store.peek_invoice_number()?;
        let order = lifecycle::new_order(draft, invoice_number, now_millis())
            .map_err(StoreError::Validation)?;
        Ok(self.store.create(order)?)
    }

    /// Persist an edited order, re-deriving the money fields first.
    pub fn edit_order(&self, mut order: Order) -> DeskResult<Order> {
        lifecycle::apply_edit(&mut order, now_millis());
        Ok(self.store.update(order)?)
    }

    /// Move an order to a new status.
    pub fn set_status(&self, id: &str, to: OrderStatus) -> DeskResult<Order> {
        let mut order = self.require(id)?;
        lifecycle::transition(&mut order, to, now_millis())?;
        Ok(self.store.update(order)?)
    }

    /// Settle the outstanding balance of an order in full.
    pub fn collect_payment(&self, id: &str) -> DeskResult<Order> {
        let mut order = self.require(id)?;
        lifecycle::collect_payment(&mut order, now_millis());
        Ok(self.store.update(order)?)
    }

    pub fn delete_order(&self, id: &str) -> DeskResult<()> {
        Ok(self.store.delete(id)?)
    }

    // ========== Documents ==========

    /// Save a document into the configured output directory.
    pub fn save_document(&self, id: &str, kind: DocumentKind) -> DeskResult<std::path::PathBuf> {
        let order = self.require(id)?;
        let settings = self.store.settings()?;
        Ok(documents::save_document(
            &order,
            &settings,
            kind,
            &self.config.output_dir,
        )?)
    }

    /// Send a document to the platform print flow.
    pub fn print_document(&self, id: &str, kind: DocumentKind) -> DeskResult<std::path::PathBuf> {
        let order = self.require(id)?;
        let settings = self.store.settings()?;
        Ok(documents::print_document(&order, &settings, kind)?)
    }

    // ========== Settings ==========

    pub fn settings(&self) -> DeskResult<ShopSettings> {
        Ok(self.store.settings()?)
    }

    pub fn update_settings(&self, patch: ShopSettingsUpdate) -> DeskResult<ShopSettings> {
        Ok(self.store.update_settings(patch)?)
    }

    // ========== Dashboard ==========

    pub fn dashboard_stats(&self) -> DeskResult<DashboardStats> {
        let orders = self.store.list()?;
        Ok(stats::dashboard_stats(&orders, now_millis()))
    }

    /// Advisory text for the dashboard. Best-effort: a store read
    /// failure degrades to the same placeholder as a network failure.
    pub async fn business_insights(&self) -> String {
        match self.store.list() {
            Ok(orders) => self.insights.business_insights(&orders).await,
            Err(err) => {
                tracing::warn!(error = %err, "could not load orders for insights");
                insights::UNAVAILABLE.to_string()
            }
        }
    }

    fn require(&self, id: &str) -> DeskResult<Order> {
        self.store
            .get(id)?
            .ok_or_else(|| DeskError::OrderNotFound { id: id.to_string() })
    }
}
