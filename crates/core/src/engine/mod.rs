//! Ledger orchestration.
//!
//! `LeaveEngine` is the single entry point tying the calendar, accrual,
//! request, balance and CET services to the store. Every operation that
//! rewrites a user's balance serializes on that user's lock, reads
//! whole records, applies the pure service rules and writes whole
//! records back. Notifications are emitted after the ledger write and
//! never roll it back.

pub mod error;

use std::sync::{Arc, PoisonError};

use chrono::{Datelike, NaiveDate, Utc};
use solde_shared::config::PolicyConfig;
use solde_shared::types::{CetTransferId, Days, LeaveRequestId, Role, UserId};
use tracing::{info, warn};

use crate::accrual::AccrualCalculator;
use crate::balance::{BalanceComponent, BalanceService, LeaveBalanceRecord, ReconcileOutcome};
use crate::calendar;
use crate::cet::{
    CetAccount, CetEntryKind, CetHistoryEntry, CetService, CetTransferRequest, CetTransferStatus,
};
use crate::notify::{Notification, Notifier};
use crate::request::{LeaveRequest, RequestAction, RequestService};
use crate::store::LedgerStore;

pub use error::EngineError;

/// The acting user, as resolved by the authentication collaborator.
#[derive(Debug, Clone, Copy)]
pub struct Actor {
    /// The acting user's id.
    pub id: UserId,
    /// The acting user's role.
    pub role: Role,
}

impl Actor {
    /// Creates an actor.
    #[must_use]
    pub fn new(id: UserId, role: Role) -> Self {
        Self { id, role }
    }

    fn ensure_can_decide(&self, action: &'static str) -> Result<(), EngineError> {
        if self.role.can_decide() {
            Ok(())
        } else {
            Err(EngineError::Forbidden {
                role: self.role,
                action,
            })
        }
    }
}

/// The leave and time-savings ledger engine.
pub struct LeaveEngine {
    store: LedgerStore,
    accrual: AccrualCalculator,
    cet: CetService,
    notifier: Arc<dyn Notifier>,
}

impl LeaveEngine {
    /// Creates an engine from a policy and a notification backend.
    #[must_use]
    pub fn new(policy: PolicyConfig, notifier: Arc<dyn Notifier>) -> Self {
        let cet = CetService::new(Days::new(policy.cet_cap_days));
        Self {
            store: LedgerStore::new(),
            accrual: AccrualCalculator::new(policy),
            cet,
            notifier,
        }
    }

    // --- leave requests ---

    /// Files a pending leave request for the actor.
    ///
    /// The business-day price is computed against the holiday calendar
    /// of the years the leave spans and frozen on the request.
    pub fn submit_request(
        &self,
        actor: Actor,
        start_date: NaiveDate,
        end_date: NaiveDate,
        start_half_day: bool,
        end_half_day: bool,
    ) -> Result<LeaveRequest, EngineError> {
        let holidays = calendar::holiday_set(start_date.year(), end_date.year());
        let request = RequestService::create(
            actor.id,
            start_date,
            end_date,
            start_half_day,
            end_half_day,
            &holidays,
        )?;

        info!(
            user = %actor.id,
            request = %request.id,
            start = %start_date,
            end = %end_date,
            days = %request.business_days,
            "leave request submitted"
        );
        self.store.put_request(request.clone());
        Ok(request)
    }

    /// Approves a pending request and reconciles the owning balance.
    pub fn validate_request(
        &self,
        actor: Actor,
        id: LeaveRequestId,
        comment: Option<String>,
    ) -> Result<LeaveRequest, EngineError> {
        actor.ensure_can_decide("validate leave requests")?;
        self.decide_request(actor, id, comment, RequestService::validate)
    }

    /// Refuses a pending request. No balance write follows: a pending
    /// request was never counted.
    pub fn refuse_request(
        &self,
        actor: Actor,
        id: LeaveRequestId,
        comment: Option<String>,
    ) -> Result<LeaveRequest, EngineError> {
        actor.ensure_can_decide("refuse leave requests")?;
        self.decide_request(actor, id, comment, RequestService::refuse)
    }

    /// Cancels a pending or validated request, reconciling when the
    /// request was counted.
    pub fn cancel_request(
        &self,
        actor: Actor,
        id: LeaveRequestId,
        comment: Option<String>,
    ) -> Result<LeaveRequest, EngineError> {
        actor.ensure_can_decide("cancel leave requests")?;
        self.decide_request(actor, id, comment, RequestService::cancel)
    }

    /// Withdraws the actor's own pending, future-dated request,
    /// removing it from the ledger.
    pub fn withdraw_request(&self, actor: Actor, id: LeaveRequestId) -> Result<(), EngineError> {
        let user = self.load_request(id)?.user;
        let lock = self.store.user_lock(user);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        // Re-read under the lock: a concurrent decision may have landed
        // between the first load and the lock acquisition.
        let request = self.load_request(id)?;

        let today = Utc::now().date_naive();
        let action = RequestService::withdraw(&request, actor.id, today)?;
        debug_assert!(matches!(action, RequestAction::Withdraw));

        self.store.remove_request(id);
        info!(user = %request.user, request = %id, "leave request withdrawn");
        Ok(())
    }

    /// Looks up a leave request.
    pub fn request(&self, id: LeaveRequestId) -> Result<LeaveRequest, EngineError> {
        self.load_request(id)
    }

    /// Returns a user's requests starting in the given year, ordered by
    /// start date.
    #[must_use]
    pub fn requests_for(&self, user: UserId, year: i32) -> Vec<LeaveRequest> {
        self.store.requests_for(user, year)
    }

    fn decide_request(
        &self,
        actor: Actor,
        id: LeaveRequestId,
        comment: Option<String>,
        transition: impl Fn(
            crate::request::LeaveStatus,
            UserId,
            Option<String>,
        ) -> Result<RequestAction, crate::request::RequestError>,
    ) -> Result<LeaveRequest, EngineError> {
        let user = self.load_request(id)?.user;
        let lock = self.store.user_lock(user);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        // Re-read under the lock so the transition check sees the
        // committed status, not one a racing decision just replaced.
        let mut request = self.load_request(id)?;

        let action = transition(request.status, actor.id, comment)?;
        action.apply(&mut request);
        self.store.put_request(request.clone());

        let reconcile = match &action {
            RequestAction::Validate { .. } => true,
            RequestAction::Cancel {
                needs_reconcile, ..
            } => *needs_reconcile,
            RequestAction::Refuse { .. } | RequestAction::Withdraw => false,
        };
        if reconcile {
            let outcome = self.reconcile_locked(request.user, request.year());
            info!(
                user = %request.user,
                year = request.year(),
                taken = %outcome.taken,
                remaining = %outcome.remaining,
                "balance reconciled"
            );
        }

        info!(
            user = %request.user,
            request = %id,
            status = %request.status,
            decided_by = %actor.id,
            "leave request decided"
        );
        self.send(&Notification::LeaveDecided {
            user: request.user,
            status: request.status,
            start_date: request.start_date,
            end_date: request.end_date,
        });
        Ok(request)
    }

    // --- balances ---

    /// Returns a user's balance record for a year.
    #[must_use]
    pub fn balance(&self, user: UserId, year: i32) -> LeaveBalanceRecord {
        self.store.balance(user, year)
    }

    /// Writes an earned-day component and reconciles.
    pub fn set_component(
        &self,
        actor: Actor,
        user: UserId,
        year: i32,
        component: BalanceComponent,
        value: Days,
    ) -> Result<LeaveBalanceRecord, EngineError> {
        actor.ensure_can_decide("edit balance components")?;
        let lock = self.store.user_lock(user);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut record = self.store.balance(user, year);
        BalanceService::set_component(&mut record, component, value)?;
        self.store.put_balance(record);
        self.reconcile_locked(user, year);

        info!(
            user = %user,
            year,
            component = component.as_str(),
            value = %value,
            "balance component set"
        );
        Ok(self.store.balance(user, year))
    }

    /// Sets a user's accrual from full months worked this year.
    pub fn apply_monthly_accrual(
        &self,
        actor: Actor,
        user: UserId,
        year: i32,
        months_worked: u32,
    ) -> Result<LeaveBalanceRecord, EngineError> {
        let earned = self.accrual.monthly(months_worked);
        self.set_component(actor, user, year, BalanceComponent::Accrued, earned)
    }

    /// Sets a user's accrual from a fixed-term contract span.
    pub fn apply_contract_accrual(
        &self,
        actor: Actor,
        user: UserId,
        year: i32,
        contract_start: Option<NaiveDate>,
        contract_end: Option<NaiveDate>,
    ) -> Result<LeaveBalanceRecord, EngineError> {
        let earned = self.accrual.contract_entitlement(contract_start, contract_end);
        self.set_component(actor, user, year, BalanceComponent::Accrued, earned)
    }

    /// Recomputes one (user, year) balance from the request log.
    pub fn reconcile(&self, user: UserId, year: i32) -> ReconcileOutcome {
        let lock = self.store.user_lock(user);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.reconcile_locked(user, year)
    }

    /// Reconciles every known (user, year) pair: every user with a
    /// balance record for the year plus every user with requests
    /// starting in it. Returns how many records changed.
    pub fn reconcile_all(&self, year: i32) -> usize {
        let mut users = self.store.users_with_balances(year);
        users.extend(self.store.users_with_requests(year));
        users.sort();
        users.dedup();
        let total = users.len();
        let changed = users
            .into_iter()
            .filter(|user| self.reconcile(*user, year).changed)
            .count();
        info!(year, total, changed, "yearly reconciliation sweep");
        changed
    }

    fn reconcile_locked(&self, user: UserId, year: i32) -> ReconcileOutcome {
        let mut record = self.store.balance(user, year);
        let requests = self.store.requests_for(user, year);
        let outcome = BalanceService::reconcile(&mut record, &requests);
        self.store.put_balance(record);
        outcome
    }

    // --- CET ---

    /// Returns a user's CET account.
    #[must_use]
    pub fn cet_account(&self, user: UserId) -> CetAccount {
        self.store.cet_account(user)
    }

    /// Returns a user's CET movement history in insertion order.
    #[must_use]
    pub fn cet_history(&self, user: UserId) -> Vec<CetHistoryEntry> {
        self.store.cet_history_for(user)
    }

    /// Applies a direct administrative CET movement.
    pub fn cet_adjust(
        &self,
        actor: Actor,
        user: UserId,
        kind: CetEntryKind,
        days: Days,
        reason: &str,
    ) -> Result<CetAccount, EngineError> {
        actor.ensure_can_decide("adjust CET accounts")?;
        let lock = self.store.user_lock(user);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);

        let mut account = self.store.cet_account(user);
        let entry = self.cet.adjust(&mut account, kind, days, reason)?;
        self.store.put_cet_account(account.clone());
        self.store.append_cet_history(entry);

        info!(
            user = %user,
            kind = %kind,
            days = %days,
            balance = %account.balance,
            "CET adjusted"
        );
        Ok(account)
    }

    /// Files a pending CET transfer request for the actor.
    pub fn submit_transfer(
        &self,
        actor: Actor,
        kind: CetEntryKind,
        days: Days,
        reason: String,
    ) -> Result<CetTransferRequest, EngineError> {
        let transfer = CetService::new_transfer(actor.id, kind, days, reason)?;
        info!(
            user = %actor.id,
            transfer = %transfer.id,
            kind = %kind,
            days = %days,
            "CET transfer submitted"
        );
        self.store.put_transfer(transfer.clone());
        Ok(transfer)
    }

    /// Approves and executes a pending transfer.
    ///
    /// Capacity is checked here, at decision time. On a capacity error
    /// nothing is written and the transfer stays pending, so it can be
    /// decided again once room exists.
    pub fn approve_transfer(
        &self,
        actor: Actor,
        id: CetTransferId,
        comment: Option<String>,
    ) -> Result<CetTransferRequest, EngineError> {
        actor.ensure_can_decide("approve CET transfers")?;
        let user = self.load_transfer(id)?.user;
        let lock = self.store.user_lock(user);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        // Re-read under the lock: execution must see the committed
        // status and account balance.
        let mut transfer = self.load_transfer(id)?;

        let year = Utc::now().date_naive().year();
        let mut record = self.store.balance(transfer.user, year);
        let mut account = self.store.cet_account(transfer.user);

        let exec = self.cet.execute(&transfer, &mut account, record.remaining)?;

        record.remaining += exec.leave_delta;
        self.store.put_balance(record);
        self.store.put_cet_account(account);
        self.store.append_cet_history(exec.entry);

        transfer.status = CetTransferStatus::Validated;
        transfer.decided_by = Some(actor.id);
        transfer.decided_at = Some(Utc::now());
        transfer.comment = comment;
        self.store.put_transfer(transfer.clone());

        info!(
            user = %transfer.user,
            transfer = %id,
            kind = %transfer.kind,
            days = %transfer.days,
            balance = %exec.new_cet_balance,
            "CET transfer approved"
        );
        self.send(&Notification::CetDecided {
            user: transfer.user,
            kind: transfer.kind,
            status: transfer.status,
            days: transfer.days,
        });
        Ok(transfer)
    }

    /// Refuses a pending transfer. No ledger mutation happens.
    pub fn refuse_transfer(
        &self,
        actor: Actor,
        id: CetTransferId,
        comment: Option<String>,
    ) -> Result<CetTransferRequest, EngineError> {
        actor.ensure_can_decide("refuse CET transfers")?;
        let user = self.load_transfer(id)?.user;
        let lock = self.store.user_lock(user);
        let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut transfer = self.load_transfer(id)?;
        CetService::ensure_refusable(&transfer)?;

        transfer.status = CetTransferStatus::Refused;
        transfer.decided_by = Some(actor.id);
        transfer.decided_at = Some(Utc::now());
        transfer.comment = comment;
        self.store.put_transfer(transfer.clone());

        info!(user = %transfer.user, transfer = %id, "CET transfer refused");
        self.send(&Notification::CetDecided {
            user: transfer.user,
            kind: transfer.kind,
            status: transfer.status,
            days: transfer.days,
        });
        Ok(transfer)
    }

    /// Looks up a CET transfer.
    pub fn transfer(&self, id: CetTransferId) -> Result<CetTransferRequest, EngineError> {
        self.load_transfer(id)
    }

    /// Returns a user's transfers, newest first.
    #[must_use]
    pub fn transfers_for(&self, user: UserId) -> Vec<CetTransferRequest> {
        self.store.transfers_for(user)
    }

    // --- internals ---

    fn load_request(&self, id: LeaveRequestId) -> Result<LeaveRequest, EngineError> {
        self.store.request(id).ok_or_else(|| EngineError::NotFound {
            kind: "leave request",
            id: id.to_string(),
        })
    }

    fn load_transfer(&self, id: CetTransferId) -> Result<CetTransferRequest, EngineError> {
        self.store.transfer(id).ok_or_else(|| EngineError::NotFound {
            kind: "CET transfer",
            id: id.to_string(),
        })
    }

    fn send(&self, notification: &Notification) {
        if let Err(err) = self.notifier.notify(notification) {
            warn!(error = %err, "notification delivery failed");
        }
    }
}
