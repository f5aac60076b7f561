//! In-memory store for customers, accounts, and the transfer log
//!
//! All state lives behind a single `RwLock`: every mutating operation takes
//! the write guard, so concurrent mutations never interleave partial
//! updates. Read-only lookups take the read guard and may observe a balance
//! between the debit and credit of an in-flight transfer; callers get
//! read-committed data, nothing stronger.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::BankingError;
use crate::models::{Account, Customer, Transfer};

struct StoreInner {
    customers: HashMap<i64, Customer>,
    accounts: HashMap<String, Account>,
    transfers: Vec<Transfer>,
}

/// Thread-safe in-memory store.
///
/// Constructed explicitly and shared by reference; there is no ambient
/// global instance.
pub struct Store {
    inner: RwLock<StoreInner>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                customers: HashMap::new(),
                accounts: HashMap::new(),
                transfers: Vec::new(),
            }),
        }
    }

    /// Create a store pre-loaded with the fixed development dataset.
    pub fn seeded() -> Self {
        let store = Self::new();
        {
            let mut inner = store.write();
            for (id, name, email) in [
                (1, "Arisha Barron", "Arisha@dummy.com"),
                (2, "Branden Gibson", "Branden@dummy.com"),
                (3, "Rhonda Church", "Rhonda@dummy.com"),
                (4, "Georgina Hazel", "Georgina@dummy.com"),
            ] {
                inner.customers.insert(
                    id,
                    Customer {
                        customer_id: id,
                        name: name.to_string(),
                        email: email.to_string(),
                    },
                );
            }
            for (account_id, customer_id, cents) in [
                ("acc1-1234", 1, 1_000_00),
                ("acc2-5678", 2, 500_00),
                ("acc3-9012", 3, 750_50),
                ("acc4-3456", 4, 2_000_75),
                ("acc5-7890", 1, 250_00),
            ] {
                inner.accounts.insert(
                    account_id.to_string(),
                    Account {
                        account_id: account_id.to_string(),
                        customer_id,
                        balance: Decimal::new(cents, 2),
                    },
                );
            }
            inner.transfers.push(Transfer {
                transaction_id: "txn1-1111".to_string(),
                from_account_id: "acc1-1234".to_string(),
                to_account_id: "acc2-5678".to_string(),
                transfer_amount: Decimal::new(200_00, 2),
                timestamp: seed_timestamp(),
            });
        }
        let inner = store.read();
        tracing::info!(
            customers = inner.customers.len(),
            accounts = inner.accounts.len(),
            transfers = inner.transfers.len(),
            "initialized in-memory store with seed data"
        );
        drop(inner);
        store
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, StoreInner> {
        // Every mutation under the write guard is a single insert/push/add,
        // so a poisoned lock cannot hold a half-applied update; recover.
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, StoreInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Look up a customer by id.
    pub fn get_customer(&self, customer_id: i64) -> Option<Customer> {
        self.read().customers.get(&customer_id).cloned()
    }

    /// Look up an account by id.
    pub fn get_account(&self, account_id: &str) -> Option<Account> {
        self.read().accounts.get(account_id).cloned()
    }

    /// All accounts owned by a customer, in no particular order.
    pub fn accounts_by_customer(&self, customer_id: i64) -> Vec<Account> {
        self.read()
            .accounts
            .values()
            .filter(|acc| acc.customer_id == customer_id)
            .cloned()
            .collect()
    }

    /// Create a new account with a fresh unique id and the given opening
    /// balance. Caller is responsible for validating that the customer
    /// exists.
    pub fn create_account(&self, customer_id: i64, initial_deposit: Decimal) -> Account {
        let mut inner = self.write();
        let account_id = fresh_account_id();
        let account = Account {
            account_id: account_id.clone(),
            customer_id,
            balance: initial_deposit,
        };
        inner.accounts.insert(account_id.clone(), account.clone());
        tracing::info!(%account_id, customer_id, balance = %initial_deposit, "created account");
        account
    }

    /// Current balance of an account.
    pub fn get_balance(&self, account_id: &str) -> Result<Decimal, BankingError> {
        self.read()
            .accounts
            .get(account_id)
            .map(|acc| acc.balance)
            .ok_or_else(|| BankingError::AccountNotFound(account_id.to_string()))
    }

    /// Add `delta` (may be negative) to an account's balance.
    ///
    /// Fails loudly if the account is missing: the service pre-validates
    /// existence, so hitting this error means a debit or credit was about
    /// to vanish.
    pub fn update_balance(&self, account_id: &str, delta: Decimal) -> Result<(), BankingError> {
        let mut inner = self.write();
        let account = inner
            .accounts
            .get_mut(account_id)
            .ok_or_else(|| BankingError::AccountNotFound(account_id.to_string()))?;
        account.balance += delta;
        Ok(())
    }

    /// Append a transfer to the log.
    pub fn add_transfer(&self, transfer: Transfer) {
        self.write().transfers.push(transfer);
    }

    /// All transfers where the account is sender or receiver.
    pub fn transfers_by_account(&self, account_id: &str) -> Result<Vec<Transfer>, BankingError> {
        let inner = self.read();
        if !inner.accounts.contains_key(account_id) {
            return Err(BankingError::AccountNotFound(account_id.to_string()));
        }
        Ok(inner
            .transfers
            .iter()
            .filter(|t| t.involves(account_id))
            .cloned()
            .collect())
    }

    /// All transfers touching any of the customer's accounts.
    pub fn transfers_by_customer(&self, customer_id: i64) -> Result<Vec<Transfer>, BankingError> {
        let inner = self.read();
        if !inner.customers.contains_key(&customer_id) {
            return Err(BankingError::CustomerNotFound(customer_id));
        }
        let owned: Vec<&str> = inner
            .accounts
            .values()
            .filter(|acc| acc.customer_id == customer_id)
            .map(|acc| acc.account_id.as_str())
            .collect();
        Ok(inner
            .transfers
            .iter()
            .filter(|t| owned.iter().any(|id| t.involves(id)))
            .cloned()
            .collect())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

fn fresh_account_id() -> String {
    let hex = Uuid::new_v4().simple().to_string();
    format!("acc-{}", &hex[..8])
}

fn seed_timestamp() -> DateTime<Utc> {
    // 2025-03-23T10:00:00Z
    DateTime::from_timestamp(1_742_724_000, 0).unwrap_or_else(Utc::now)
}
