//! Banking service: business rules on top of the store
//!
//! The service enforces the invariants the store does not know about
//! (customer existence, self-transfer rejection, the funds pre-check) and
//! is the only place that composes the debit/credit pair of a transfer.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::error::BankingError;
use crate::models::{Account, Transfer};
use crate::store::Store;

pub struct BankingService {
    store: Arc<Store>,
}

impl BankingService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Open a new account for an existing customer.
    pub fn create_account(
        &self,
        customer_id: i64,
        initial_deposit: Decimal,
    ) -> Result<Account, BankingError> {
        if self.store.get_customer(customer_id).is_none() {
            tracing::warn!(customer_id, "account creation failed: customer not found");
            return Err(BankingError::CustomerNotFound(customer_id));
        }
        Ok(self.store.create_account(customer_id, initial_deposit))
    }

    /// Current balance of an account.
    pub fn get_balance(&self, account_id: &str) -> Result<Decimal, BankingError> {
        self.store.get_balance(account_id)
    }

    /// Transfer history of an account (sent and received).
    pub fn get_transfers(&self, account_id: &str) -> Result<Vec<Transfer>, BankingError> {
        self.store.transfers_by_account(account_id)
    }

    /// All accounts owned by an existing customer.
    pub fn customer_accounts(&self, customer_id: i64) -> Result<Vec<Account>, BankingError> {
        if self.store.get_customer(customer_id).is_none() {
            return Err(BankingError::CustomerNotFound(customer_id));
        }
        Ok(self.store.accounts_by_customer(customer_id))
    }

    /// Transfer history across all of a customer's accounts.
    pub fn customer_transfers(&self, customer_id: i64) -> Result<Vec<Transfer>, BankingError> {
        self.store.transfers_by_customer(customer_id)
    }

    /// Execute a transfer between two accounts.
    ///
    /// Order of checks: both accounts exist, source and destination differ,
    /// source covers the amount. Only then the balance pair is mutated and
    /// the transfer record appended.
    pub fn execute_transfer(
        &self,
        from_account_id: &str,
        to_account_id: &str,
        transfer_amount: Decimal,
    ) -> Result<Transfer, BankingError> {
        let from = self
            .store
            .get_account(from_account_id)
            .ok_or_else(|| BankingError::AccountNotFound(from_account_id.to_string()))?;
        let to = self
            .store
            .get_account(to_account_id)
            .ok_or_else(|| BankingError::AccountNotFound(to_account_id.to_string()))?;

        // Account ids are unique map keys, so id equality is identity
        if from.account_id == to.account_id {
            tracing::warn!(account_id = %from.account_id, "transfer rejected: self transfer");
            return Err(BankingError::SelfTransfer(from.account_id));
        }

        if from.balance < transfer_amount {
            tracing::warn!(
                from = %from.account_id,
                balance = %from.balance,
                amount = %transfer_amount,
                "transfer rejected: insufficient funds"
            );
            return Err(BankingError::InsufficientFunds(from.account_id));
        }

        self.store.update_balance(from_account_id, -transfer_amount)?;
        self.store.update_balance(to_account_id, transfer_amount)?;

        let transfer = Transfer {
            transaction_id: Uuid::new_v4().to_string(),
            from_account_id: from_account_id.to_string(),
            to_account_id: to_account_id.to_string(),
            transfer_amount,
            timestamp: Utc::now(),
        };
        self.store.add_transfer(transfer.clone());
        tracing::info!(
            transaction_id = %transfer.transaction_id,
            from = from_account_id,
            to = to_account_id,
            amount = %transfer_amount,
            "transfer executed"
        );
        Ok(transfer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn service() -> BankingService {
        BankingService::new(Arc::new(Store::seeded()))
    }

    #[test]
    fn test_create_account_for_existing_customer() {
        let svc = service();
        let account = svc.create_account(1, dec("100.50")).unwrap();
        assert_eq!(account.customer_id, 1);
        assert_eq!(account.balance, dec("100.50"));
        assert_eq!(svc.get_balance(&account.account_id).unwrap(), dec("100.50"));
    }

    #[test]
    fn test_create_account_unknown_customer() {
        let svc = service();
        assert_eq!(
            svc.create_account(99, dec("100.00")),
            Err(BankingError::CustomerNotFound(99))
        );
    }

    #[test]
    fn test_execute_transfer_moves_funds_and_records() {
        let svc = service();
        let transfer = svc
            .execute_transfer("acc1-1234", "acc2-5678", dec("100.00"))
            .unwrap();
        assert_eq!(transfer.transfer_amount, dec("100.00"));
        assert_eq!(transfer.from_account_id, "acc1-1234");
        assert_eq!(transfer.to_account_id, "acc2-5678");
        assert_eq!(svc.get_balance("acc1-1234").unwrap(), dec("900.00"));
        assert_eq!(svc.get_balance("acc2-5678").unwrap(), dec("600.00"));
        // Seeded transfer plus the new one
        let history = svc.get_transfers("acc1-1234").unwrap();
        assert_eq!(history.len(), 2);
        assert!(
            history
                .iter()
                .any(|t| t.transaction_id == transfer.transaction_id)
        );
    }

    #[test]
    fn test_execute_transfer_missing_accounts() {
        let svc = service();
        assert_eq!(
            svc.execute_transfer("acc-nope", "acc2-5678", dec("1.00")),
            Err(BankingError::AccountNotFound("acc-nope".to_string()))
        );
        assert_eq!(
            svc.execute_transfer("acc1-1234", "acc-nope", dec("1.00")),
            Err(BankingError::AccountNotFound("acc-nope".to_string()))
        );
    }

    #[test]
    fn test_execute_transfer_rejects_self_transfer() {
        let svc = service();
        assert_eq!(
            svc.execute_transfer("acc1-1234", "acc1-1234", dec("1.00")),
            Err(BankingError::SelfTransfer("acc1-1234".to_string()))
        );
        // Balance untouched
        assert_eq!(svc.get_balance("acc1-1234").unwrap(), dec("1000.00"));
    }

    #[test]
    fn test_execute_transfer_insufficient_funds_leaves_balances() {
        let svc = service();
        assert_eq!(
            svc.execute_transfer("acc2-5678", "acc1-1234", dec("500.01")),
            Err(BankingError::InsufficientFunds("acc2-5678".to_string()))
        );
        assert_eq!(svc.get_balance("acc2-5678").unwrap(), dec("500.00"));
        assert_eq!(svc.get_balance("acc1-1234").unwrap(), dec("1000.00"));
    }

    #[test]
    fn test_transfer_of_entire_balance_is_allowed() {
        let svc = service();
        svc.execute_transfer("acc2-5678", "acc1-1234", dec("500.00"))
            .unwrap();
        assert_eq!(svc.get_balance("acc2-5678").unwrap(), dec("0.00"));
    }

    #[test]
    fn test_customer_accounts_and_transfers() {
        let svc = service();
        assert_eq!(svc.customer_accounts(1).unwrap().len(), 2);
        assert_eq!(
            svc.customer_accounts(99),
            Err(BankingError::CustomerNotFound(99))
        );
        assert_eq!(svc.customer_transfers(2).unwrap().len(), 1);
        assert_eq!(
            svc.customer_transfers(99),
            Err(BankingError::CustomerNotFound(99))
        );
    }

    #[test]
    fn test_concurrent_opposing_transfers_conserve_sum() {
        let svc = Arc::new(service());
        let mut handles = Vec::new();
        for (from, to) in [("acc1-1234", "acc2-5678"), ("acc2-5678", "acc1-1234")] {
            let svc = Arc::clone(&svc);
            handles.push(std::thread::spawn(move || {
                for _ in 0..100 {
                    svc.execute_transfer(from, to, dec("1.00")).unwrap();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        // 100 each way nets out exactly; neither side can run dry with
        // seeded balances of 1000.00 and 500.00
        assert_eq!(svc.get_balance("acc1-1234").unwrap(), dec("1000.00"));
        assert_eq!(svc.get_balance("acc2-5678").unwrap(), dec("500.00"));
        assert_eq!(svc.get_transfers("acc1-1234").unwrap().len(), 201);
    }
}
