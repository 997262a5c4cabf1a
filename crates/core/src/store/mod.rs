//! In-memory ledger storage.
//!
//! Concurrent maps hold the canonical copies of balances, requests,
//! CET accounts and transfers. Readers get clones; writers put whole
//! records back. Cross-record consistency (balance plus request log)
//! is the engine's job, coordinated through per-user locks handed out
//! by [`LedgerStore::user_lock`].

use std::sync::{Arc, Mutex, RwLock};

use dashmap::DashMap;
use solde_shared::types::{CetTransferId, LeaveRequestId, UserId};

use crate::balance::LeaveBalanceRecord;
use crate::cet::{CetAccount, CetHistoryEntry, CetTransferRequest};
use crate::request::LeaveRequest;

/// Thread-safe store for every ledger collection.
///
/// Balance records and CET accounts are created lazily on first read,
/// so a user who never filed anything still reads back zeroed records.
#[derive(Default)]
pub struct LedgerStore {
    balances: DashMap<(UserId, i32), LeaveBalanceRecord>,
    requests: DashMap<LeaveRequestId, LeaveRequest>,
    cet_accounts: DashMap<UserId, CetAccount>,
    transfers: DashMap<CetTransferId, CetTransferRequest>,
    cet_history: RwLock<Vec<CetHistoryEntry>>,
    user_locks: DashMap<UserId, Arc<Mutex<()>>>,
}

impl LedgerStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the serialization lock for a user's ledger rows.
    ///
    /// Engine operations that read-modify-write a user's balance hold
    /// this lock for the whole operation.
    #[must_use]
    pub fn user_lock(&self, user: UserId) -> Arc<Mutex<()>> {
        self.user_locks
            .entry(user)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .value()
            .clone()
    }

    /// Returns a user's balance record for a year, creating a zeroed
    /// record on first access.
    #[must_use]
    pub fn balance(&self, user: UserId, year: i32) -> LeaveBalanceRecord {
        self.balances
            .entry((user, year))
            .or_insert_with(|| LeaveBalanceRecord::new(user, year))
            .value()
            .clone()
    }

    /// Writes a balance record back.
    pub fn put_balance(&self, record: LeaveBalanceRecord) {
        self.balances.insert((record.user, record.year), record);
    }

    /// Looks up a leave request by id.
    #[must_use]
    pub fn request(&self, id: LeaveRequestId) -> Option<LeaveRequest> {
        self.requests.get(&id).map(|r| r.value().clone())
    }

    /// Inserts or replaces a leave request.
    pub fn put_request(&self, request: LeaveRequest) {
        self.requests.insert(request.id, request);
    }

    /// Removes a leave request. Used for withdrawals.
    pub fn remove_request(&self, id: LeaveRequestId) -> Option<LeaveRequest> {
        self.requests.remove(&id).map(|(_, r)| r)
    }

    /// Returns a user's requests whose leave starts in the given year,
    /// ordered by start date.
    #[must_use]
    pub fn requests_for(&self, user: UserId, year: i32) -> Vec<LeaveRequest> {
        let mut out: Vec<LeaveRequest> = self
            .requests
            .iter()
            .filter(|r| r.user == user && r.year() == year)
            .map(|r| r.value().clone())
            .collect();
        out.sort_by_key(|r| (r.start_date, r.created_at));
        out
    }

    /// Returns every user with at least one request starting in the
    /// given year.
    #[must_use]
    pub fn users_with_requests(&self, year: i32) -> Vec<UserId> {
        let mut users: Vec<UserId> = self
            .requests
            .iter()
            .filter(|r| r.year() == year)
            .map(|r| r.user)
            .collect();
        users.sort();
        users.dedup();
        users
    }

    /// Returns every user holding a balance record for the given year.
    #[must_use]
    pub fn users_with_balances(&self, year: i32) -> Vec<UserId> {
        let mut users: Vec<UserId> = self
            .balances
            .iter()
            .filter(|entry| entry.key().1 == year)
            .map(|entry| entry.key().0)
            .collect();
        users.sort();
        users.dedup();
        users
    }

    /// Returns a user's CET account, creating an empty one on first
    /// access.
    #[must_use]
    pub fn cet_account(&self, user: UserId) -> CetAccount {
        self.cet_accounts
            .entry(user)
            .or_insert_with(|| CetAccount::new(user))
            .value()
            .clone()
    }

    /// Writes a CET account back.
    pub fn put_cet_account(&self, account: CetAccount) {
        self.cet_accounts.insert(account.user, account);
    }

    /// Looks up a CET transfer by id.
    #[must_use]
    pub fn transfer(&self, id: CetTransferId) -> Option<CetTransferRequest> {
        self.transfers.get(&id).map(|t| t.value().clone())
    }

    /// Inserts or replaces a CET transfer.
    pub fn put_transfer(&self, transfer: CetTransferRequest) {
        self.transfers.insert(transfer.id, transfer);
    }

    /// Returns a user's transfers, newest first.
    #[must_use]
    pub fn transfers_for(&self, user: UserId) -> Vec<CetTransferRequest> {
        let mut out: Vec<CetTransferRequest> = self
            .transfers
            .iter()
            .filter(|t| t.user == user)
            .map(|t| t.value().clone())
            .collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        out
    }

    /// Appends a CET movement to the history log.
    ///
    /// The log is append-only; nothing ever removes entries.
    pub fn append_cet_history(&self, entry: CetHistoryEntry) {
        let mut log = self
            .cet_history
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        log.push(entry);
    }

    /// Returns a user's CET movements in insertion order.
    #[must_use]
    pub fn cet_history_for(&self, user: UserId) -> Vec<CetHistoryEntry> {
        let log = self
            .cet_history
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        log.iter().filter(|e| e.user == user).cloned().collect()
    }
}
