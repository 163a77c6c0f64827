//! The balance table and escrow pool.

use crate::error::LedgerError;
use rfcmon_types::{Amount, Principal};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Principal balances plus the single contract-held escrow pool.
///
/// Every mutation is checked arithmetic: either both sides of a transfer
/// apply, or the call errors and nothing changes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Ledger {
    balances: HashMap<Principal, Amount>,
    escrow: Amount,
}

impl Ledger {
    pub fn new() -> Self {
        Self {
            balances: HashMap::new(),
            escrow: Amount::ZERO,
        }
    }

    /// Mint `amount` into a principal's balance.
    ///
    /// This is the genesis/funding primitive — the only operation that
    /// increases total supply.
    pub fn deposit(&mut self, principal: &Principal, amount: Amount) -> Result<(), LedgerError> {
        let balance = self
            .balances
            .entry(principal.clone())
            .or_insert(Amount::ZERO);
        *balance = balance.checked_add(amount).ok_or(LedgerError::Overflow)?;
        Ok(())
    }

    /// The balance of a principal. Unknown principals hold zero.
    pub fn balance(&self, principal: &Principal) -> Amount {
        self.balances
            .get(principal)
            .copied()
            .unwrap_or(Amount::ZERO)
    }

    /// The amount currently held in the escrow pool.
    pub fn escrow_balance(&self) -> Amount {
        self.escrow
    }

    /// Debit `amount` from `from` into the escrow pool.
    pub fn escrow_lock(&mut self, from: &Principal, amount: Amount) -> Result<(), LedgerError> {
        let balance = self.balance(from);
        if balance < amount {
            return Err(LedgerError::InsufficientBalance {
                needed: amount.raw(),
                available: balance.raw(),
            });
        }
        // Compute both sides before writing either.
        let new_balance = balance.checked_sub(amount).ok_or(LedgerError::Overflow)?;
        let new_escrow = self
            .escrow
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        self.balances.insert(from.clone(), new_balance);
        self.escrow = new_escrow;
        Ok(())
    }

    /// Release `amount` from the escrow pool into `to`'s balance.
    pub fn escrow_release(&mut self, to: &Principal, amount: Amount) -> Result<(), LedgerError> {
        if self.escrow < amount {
            return Err(LedgerError::InsufficientEscrow {
                needed: amount.raw(),
                available: self.escrow.raw(),
            });
        }
        let new_escrow = self
            .escrow
            .checked_sub(amount)
            .ok_or(LedgerError::Overflow)?;
        let new_balance = self
            .balance(to)
            .checked_add(amount)
            .ok_or(LedgerError::Overflow)?;
        self.escrow = new_escrow;
        self.balances.insert(to.clone(), new_balance);
        Ok(())
    }

    /// Total supply — all balances plus the escrow pool.
    ///
    /// Invariant under lock/release; only `deposit` increases it.
    pub fn total_supply_checked(&self) -> Option<Amount> {
        let mut total = self.escrow;
        for amount in self.balances.values() {
            total = total.checked_add(*amount)?;
        }
        Some(total)
    }

    /// Total supply, returning zero on overflow.
    pub fn total_supply(&self) -> Amount {
        self.total_supply_checked().unwrap_or(Amount::ZERO)
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_principal(n: u8) -> Principal {
        Principal::new(format!("ST{:0>38}", n))
    }

    #[test]
    fn deposit_and_balance() {
        let mut ledger = Ledger::new();
        let alice = test_principal(1);
        ledger.deposit(&alice, Amount::new(1000)).unwrap();
        assert_eq!(ledger.balance(&alice), Amount::new(1000));
        ledger.deposit(&alice, Amount::new(500)).unwrap();
        assert_eq!(ledger.balance(&alice), Amount::new(1500));
    }

    #[test]
    fn unknown_principal_holds_zero() {
        let ledger = Ledger::new();
        assert_eq!(ledger.balance(&test_principal(9)), Amount::ZERO);
    }

    #[test]
    fn lock_moves_balance_into_escrow() {
        let mut ledger = Ledger::new();
        let alice = test_principal(1);
        ledger.deposit(&alice, Amount::new(1000)).unwrap();
        ledger.escrow_lock(&alice, Amount::new(400)).unwrap();
        assert_eq!(ledger.balance(&alice), Amount::new(600));
        assert_eq!(ledger.escrow_balance(), Amount::new(400));
    }

    #[test]
    fn lock_insufficient_balance_errors_without_change() {
        let mut ledger = Ledger::new();
        let alice = test_principal(1);
        ledger.deposit(&alice, Amount::new(100)).unwrap();
        let result = ledger.escrow_lock(&alice, Amount::new(500));
        match result.unwrap_err() {
            LedgerError::InsufficientBalance { needed, available } => {
                assert_eq!(needed, 500);
                assert_eq!(available, 100);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(ledger.balance(&alice), Amount::new(100));
        assert_eq!(ledger.escrow_balance(), Amount::ZERO);
    }

    #[test]
    fn release_credits_recipient() {
        let mut ledger = Ledger::new();
        let alice = test_principal(1);
        let bob = test_principal(2);
        ledger.deposit(&alice, Amount::new(1000)).unwrap();
        ledger.escrow_lock(&alice, Amount::new(1000)).unwrap();
        ledger.escrow_release(&bob, Amount::new(1000)).unwrap();
        assert_eq!(ledger.balance(&bob), Amount::new(1000));
        assert_eq!(ledger.escrow_balance(), Amount::ZERO);
    }

    #[test]
    fn release_more_than_escrowed_errors() {
        let mut ledger = Ledger::new();
        let bob = test_principal(2);
        let result = ledger.escrow_release(&bob, Amount::new(1));
        assert!(matches!(
            result.unwrap_err(),
            LedgerError::InsufficientEscrow { .. }
        ));
        assert_eq!(ledger.balance(&bob), Amount::ZERO);
    }

    #[test]
    fn lock_and_release_conserve_total_supply() {
        let mut ledger = Ledger::new();
        let alice = test_principal(1);
        let bob = test_principal(2);
        ledger.deposit(&alice, Amount::new(5000)).unwrap();
        let supply = ledger.total_supply();
        ledger.escrow_lock(&alice, Amount::new(3000)).unwrap();
        assert_eq!(ledger.total_supply(), supply);
        ledger.escrow_release(&bob, Amount::new(3000)).unwrap();
        assert_eq!(ledger.total_supply(), supply);
    }

    #[test]
    fn deposit_overflow_errors() {
        let mut ledger = Ledger::new();
        let alice = test_principal(1);
        ledger.deposit(&alice, Amount::new(u128::MAX)).unwrap();
        let result = ledger.deposit(&alice, Amount::new(1));
        assert!(matches!(result.unwrap_err(), LedgerError::Overflow));
    }
}
