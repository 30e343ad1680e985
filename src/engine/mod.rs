//! Core rules and orchestration for the leave management engine.
//!
//! The submodules hold the pure rules: calendar-date arithmetic,
//! employee registration and lookup, and the leave request state
//! machine, all operating on an in-memory [`Snapshot`]. The
//! [`LeaveService`] wraps them with a [`Store`] so every operation is a
//! single load → validate/mutate → save cycle.

mod dates;
mod leaves;
mod registry;

pub use dates::{inclusive_day_count, parse_date, ranges_overlap};
pub use leaves::{approve, create, list, new_reference, reject, NewLeave};
pub use registry::{balance_summary, find_employee, register, NewEmployee};

use tokio::sync::Mutex;

use crate::error::EngineResult;
use crate::models::{BalanceSummary, Employee, LeaveRequest, Snapshot};
use crate::store::Store;

/// The store-backed leave management service.
///
/// Each operation loads the whole snapshot, applies the rules, and
/// saves the result before returning. A single async mutex guards the
/// store for the full read-modify-write cycle, so mutations are
/// serialized and the balance and overlap invariants hold even when
/// requests arrive concurrently. A failed validation returns before the
/// save, leaving the persisted snapshot untouched.
pub struct LeaveService {
    store: Mutex<Box<dyn Store>>,
}

impl LeaveService {
    /// Creates a service backed by the given store.
    pub fn new<S: Store + 'static>(store: S) -> Self {
        Self {
            store: Mutex::new(Box::new(store)),
        }
    }

    /// Registers a new employee and persists the snapshot.
    pub async fn register_employee(&self, input: NewEmployee) -> EngineResult<Employee> {
        let mut store = self.store.lock().await;
        let mut snapshot = store.load()?;
        let employee = register(&mut snapshot, input)?;
        store.save(&snapshot)?;
        Ok(employee)
    }

    /// Returns all employees in registration order.
    pub async fn list_employees(&self) -> EngineResult<Vec<Employee>> {
        let store = self.store.lock().await;
        Ok(store.load()?.employees)
    }

    /// Returns the balance view for one employee.
    pub async fn employee_balance(&self, id: u64) -> EngineResult<BalanceSummary> {
        let store = self.store.lock().await;
        let snapshot = store.load()?;
        balance_summary(&snapshot, id)
    }

    /// Validates and creates a leave request, persisting on success.
    pub async fn create_leave(&self, input: NewLeave) -> EngineResult<LeaveRequest> {
        let mut store = self.store.lock().await;
        let mut snapshot = store.load()?;
        let leave = create(&mut snapshot, input)?;
        store.save(&snapshot)?;
        Ok(leave)
    }

    /// Lists leave requests, optionally filtered to one employee.
    pub async fn list_leaves(&self, employee_id: Option<u64>) -> EngineResult<Vec<LeaveRequest>> {
        let store = self.store.lock().await;
        let snapshot = store.load()?;
        Ok(list(&snapshot, employee_id))
    }

    /// Approves a pending leave request, deducting the balance.
    pub async fn approve_leave(&self, id: u64) -> EngineResult<LeaveRequest> {
        let mut store = self.store.lock().await;
        let mut snapshot = store.load()?;
        let leave = approve(&mut snapshot, id)?;
        store.save(&snapshot)?;
        Ok(leave)
    }

    /// Rejects a pending leave request.
    pub async fn reject_leave(&self, id: u64) -> EngineResult<LeaveRequest> {
        let mut store = self.store.lock().await;
        let mut snapshot = store.load()?;
        let leave = reject(&mut snapshot, id)?;
        store.save(&snapshot)?;
        Ok(leave)
    }
}
