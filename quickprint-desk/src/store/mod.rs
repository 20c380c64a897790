//! Order store
//!
//! Owns the canonical order collection and the shop settings record.
//! Every mutation is a read-modify-write of the whole collection
//! followed by a single commit, so readers never observe a partial
//! write. Mutations broadcast a [`StoreEvent`] so views can refresh.

pub mod seed;
pub mod storage;

use shared::money::validate_order;
use shared::util::{now_millis, token_id};
use shared::{Order, ShopSettings, ShopSettingsUpdate, ValidationError};
use tokio::sync::broadcast;

use crate::invoicing;
use storage::{DeskStorage, StorageError, ORDERS_KEY, SETTINGS_KEY};

/// Change notifications emitted after a successful commit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    OrdersChanged,
    SettingsChanged,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Handle to the order collection. Cheap to clone.
#[derive(Clone)]
pub struct OrderStore {
    storage: DeskStorage,
    events: broadcast::Sender<StoreEvent>,
}

impl OrderStore {
    /// Open the store at `path`, seeding sample data on first run.
    pub fn open(path: impl AsRef<std::path::Path>) -> StoreResult<Self> {
        Self::bootstrap(DeskStorage::open(path)?)
    }

    /// In-memory store (for testing)
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::bootstrap(DeskStorage::open_in_memory()?)
    }

    fn bootstrap(storage: DeskStorage) -> StoreResult<Self> {
        let (events, _) = broadcast::channel(32);
        let store = Self { storage, events };
        // Seeding happens here rather than lazily on first list() so a
        // fresh database is fully formed before any view reads it.
        let orders = store.load_orders()?;
        tracing::info!(orders = orders.len(), "order store ready");
        Ok(store)
    }

    /// Subscribe to change notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    // ========== Orders ==========

    /// All orders, newest first.
    pub fn list(&self) -> StoreResult<Vec<Order>> {
        let mut orders = self.load_orders()?;
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }

    /// Look up a single order by id.
    pub fn get(&self, id: &str) -> StoreResult<Option<Order>> {
        Ok(self
            .load_orders()?
            .into_iter()
            .find(|order| order.id.as_deref() == Some(id)))
    }

    /// Persist a new order and advance the invoice counter.
    ///
    /// Assigns an id if the order has none, and an invoice number if it
    /// is empty. An existing entry with the same id or invoice number is
    /// replaced rather than duplicated. The collection write and the
    /// counter advance commit in one transaction, so a number is only
    /// consumed by an order that actually landed on disk.
    pub fn create(&self, mut order: Order) -> StoreResult<Order> {
        validate_order(&order)?;

        if order.id.as_deref().map_or(true, str::is_empty) {
            order.id = Some(token_id());
        }
        if order.invoice_number.is_empty() {
            order.invoice_number = self.peek_invoice_number()?;
        }

        let mut orders = self.load_orders()?;
        orders.retain(|existing| {
            existing.id != order.id && existing.invoice_number != order.invoice_number
        });
        orders.push(order.clone());

        let bytes = serde_json::to_vec(&orders)?;
        let sequence = self
            .storage
            .write_orders_and_advance(&bytes, invoicing::current_year())?;
        tracing::info!(
            invoice = %order.invoice_number,
            sequence,
            customer = %order.customer_name,
            "order created"
        );

        let _ = self.events.send(StoreEvent::OrdersChanged);
        Ok(order)
    }

    /// Replace an existing order in place (matched by id).
    ///
    /// A non-matching id is not an error: last write wins and missing
    /// is harmless. The collection is persisted and a notification is
    /// sent either way.
    pub fn update(&self, order: Order) -> StoreResult<Order> {
        validate_order(&order)?;

        let mut orders = self.load_orders()?;
        match orders
            .iter_mut()
            .find(|existing| existing.id == order.id)
        {
            Some(slot) => *slot = order.clone(),
            None => tracing::warn!(id = ?order.id, "update for unknown order id ignored"),
        }
        self.persist_orders(&orders)?;

        let _ = self.events.send(StoreEvent::OrdersChanged);
        Ok(order)
    }

    /// Remove an order. Deleting an unknown id is a harmless no-op.
    pub fn delete(&self, id: &str) -> StoreResult<()> {
        let mut orders = self.load_orders()?;
        orders.retain(|order| order.id.as_deref() != Some(id));
        self.persist_orders(&orders)?;

        let _ = self.events.send(StoreEvent::OrdersChanged);
        Ok(())
    }

    // ========== Invoice Numbering ==========

    /// Propose the next invoice number without consuming it.
    ///
    /// Repeated calls return the same number until a `create` commits.
    pub fn peek_invoice_number(&self) -> StoreResult<String> {
        let settings = self.settings()?;
        let counter = self.storage.peek_sequence(invoicing::current_year())?;
        Ok(invoicing::format_invoice_number(
            &settings.invoice_prefix,
            counter + 1,
        ))
    }

    // ========== Settings ==========

    /// Current shop settings, falling back to defaults when nothing has
    /// been saved yet or the stored record cannot be read.
    pub fn settings(&self) -> StoreResult<ShopSettings> {
        Ok(match self.storage.read_state(SETTINGS_KEY)? {
            Some(bytes) => serde_json::from_slice(&bytes).unwrap_or_else(|err| {
                tracing::warn!(error = %err, "stored settings unreadable, using defaults");
                ShopSettings::default()
            }),
            None => ShopSettings::default(),
        })
    }

    /// Apply a partial settings update and persist the result.
    pub fn update_settings(&self, patch: ShopSettingsUpdate) -> StoreResult<ShopSettings> {
        let mut settings = self.settings()?;
        patch.apply(&mut settings);
        self.storage
            .write_state(SETTINGS_KEY, &serde_json::to_vec(&settings)?)?;

        let _ = self.events.send(StoreEvent::SettingsChanged);
        Ok(settings)
    }

    // ========== Internal ==========

    fn load_orders(&self) -> StoreResult<Vec<Order>> {
        match self.storage.read_state(ORDERS_KEY)? {
            Some(bytes) => match serde_json::from_slice(&bytes) {
                Ok(orders) => Ok(orders),
                Err(err) => {
                    tracing::warn!(error = %err, "order collection unreadable, reseeding");
                    self.seed()
                }
            },
            None => self.seed(),
        }
    }

    fn persist_orders(&self, orders: &[Order]) -> StoreResult<()> {
        let bytes = serde_json::to_vec(orders)?;
        self.storage.write_state(ORDERS_KEY, &bytes)?;
        Ok(())
    }

    fn seed(&self) -> StoreResult<Vec<Order>> {
        let settings = self.settings()?;
        let orders = seed::sample_orders(now_millis(), &settings.invoice_prefix);
        let bytes = serde_json::to_vec(&orders)?;
        self.storage.write_orders_with_sequence(
            &bytes,
            invoicing::current_year(),
            seed::SEED_SEQUENCE,
        )?;
        tracing::info!(orders = orders.len(), "seeded sample orders");
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{OrderItem, OrderStatus, PaymentMethod, Priority};

    fn test_order(id: Option<&str>, invoice: &str, created_at: i64) -> Order {
        Order {
            id: id.map(str::to_string),
            invoice_number: invoice.to_string(),
            created_at,
            updated_at: created_at,
            customer_name: "Test Customer".to_string(),
            customer_phone: "0300-0000000".to_string(),
            customer_address: None,
            items: vec![OrderItem {
                id: "item-1".to_string(),
                name: "Posters".to_string(),
                qty: 10,
                unit_price: 50.0,
                line_total: 500.0,
            }],
            subtotal: 500.0,
            discount: 0.0,
            tax: 0.0,
            total: 500.0,
            paid: 0.0,
            due: 500.0,
            payment_method: PaymentMethod::Cash,
            delivery_date: created_at,
            priority: Priority::Normal,
            notes: String::new(),
            status: OrderStatus::Pending,
            completion_date: None,
        }
    }

    #[test]
    fn test_fresh_store_is_seeded() {
        let store = OrderStore::open_in_memory().unwrap();
        let orders = store.list().unwrap();
        assert_eq!(orders.len(), 2);
        // Newest first
        assert!(orders[0].created_at >= orders[1].created_at);
        // Seed consumed two sequence slots
        assert!(store.peek_invoice_number().unwrap().ends_with("00003"));
    }

    #[test]
    fn test_create_assigns_id_and_invoice_number() {
        let store = OrderStore::open_in_memory().unwrap();
        let saved = store.create(test_order(None, "", 1_000)).unwrap();
        assert!(saved.id.is_some());
        assert_eq!(saved.invoice_number, "RT-2024-00003");
    }

    #[test]
    fn test_create_replaces_same_invoice_number() {
        let store = OrderStore::open_in_memory().unwrap();
        store.create(test_order(Some("a"), "QP-X", 1_000)).unwrap();
        store.create(test_order(Some("b"), "QP-X", 2_000)).unwrap();

        let matching: Vec<_> = store
            .list()
            .unwrap()
            .into_iter()
            .filter(|o| o.invoice_number == "QP-X")
            .collect();
        assert_eq!(matching.len(), 1);
        assert_eq!(matching[0].id.as_deref(), Some("b"));
    }

    #[test]
    fn test_numbering_stable_until_create() {
        let store = OrderStore::open_in_memory().unwrap();
        let first = store.peek_invoice_number().unwrap();
        assert_eq!(store.peek_invoice_number().unwrap(), first);

        store.create(test_order(None, "", 1_000)).unwrap();
        let second = store.peek_invoice_number().unwrap();
        assert_ne!(second, first);
        assert!(second.ends_with("00004"));
    }

    #[test]
    fn test_delete_is_idempotent() {
        let store = OrderStore::open_in_memory().unwrap();
        let saved = store.create(test_order(None, "", 1_000)).unwrap();
        let id = saved.id.unwrap();

        store.delete(&id).unwrap();
        assert!(store.get(&id).unwrap().is_none());
        store.delete(&id).unwrap();
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let store = OrderStore::open_in_memory().unwrap();
        let before = store.list().unwrap();
        store
            .update(test_order(Some("ghost"), "QP-GHOST", 1_000))
            .unwrap();
        let after = store.list().unwrap();
        assert_eq!(before.len(), after.len());
        assert!(store.get("ghost").unwrap().is_none());
    }

    #[test]
    fn test_update_replaces_in_place() {
        let store = OrderStore::open_in_memory().unwrap();
        let mut saved = store.create(test_order(None, "", 1_000)).unwrap();
        saved.customer_name = "Renamed".to_string();
        store.update(saved.clone()).unwrap();

        let fetched = store.get(saved.id.as_deref().unwrap()).unwrap().unwrap();
        assert_eq!(fetched.customer_name, "Renamed");
    }

    #[test]
    fn test_create_rejects_invalid_order() {
        let store = OrderStore::open_in_memory().unwrap();
        let mut order = test_order(None, "", 1_000);
        order.customer_name = String::new();
        let err = store.create(order).unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
    }

    #[test]
    fn test_corrupt_collection_reseeds() {
        let store = OrderStore::open_in_memory().unwrap();
        store.storage.write_state(ORDERS_KEY, b"not json").unwrap();

        let orders = store.list().unwrap();
        assert_eq!(orders.len(), 2);
    }

    #[test]
    fn test_reseed_after_corruption_keeps_counter_ahead() {
        let store = OrderStore::open_in_memory().unwrap();
        store.create(test_order(None, "", 1_000)).unwrap();
        store.create(test_order(None, "", 2_000)).unwrap();
        store.create(test_order(None, "", 3_000)).unwrap();
        assert!(store.peek_invoice_number().unwrap().ends_with("00006"));

        store.storage.write_state(ORDERS_KEY, b"not json").unwrap();
        assert_eq!(store.list().unwrap().len(), 2);

        // Issued numbers stay burned: the reseed must not hand out
        // 00003 a second time
        assert!(store.peek_invoice_number().unwrap().ends_with("00006"));
    }

    #[test]
    fn test_emptied_collection_does_not_reseed() {
        let store = OrderStore::open_in_memory().unwrap();
        for order in store.list().unwrap() {
            store.delete(order.id.as_deref().unwrap()).unwrap();
        }
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn test_settings_default_and_patch() {
        let store = OrderStore::open_in_memory().unwrap();
        let settings = store.settings().unwrap();
        assert_eq!(settings.name, "QuickPrint Pro");

        let updated = store
            .update_settings(ShopSettingsUpdate {
                invoice_prefix: Some("QP-".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(updated.invoice_prefix, "QP-");
        assert_eq!(store.settings().unwrap().invoice_prefix, "QP-");
        assert!(store.peek_invoice_number().unwrap().starts_with("QP-"));
    }

    #[test]
    fn test_events_broadcast_on_mutation() {
        let store = OrderStore::open_in_memory().unwrap();
        let mut rx = store.subscribe();

        store.create(test_order(None, "", 1_000)).unwrap();
        assert_eq!(rx.try_recv().unwrap(), StoreEvent::OrdersChanged);

        store
            .update_settings(ShopSettingsUpdate::default())
            .unwrap();
        assert_eq!(rx.try_recv().unwrap(), StoreEvent::SettingsChanged);
    }
}
