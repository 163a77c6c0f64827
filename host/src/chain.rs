//! The simulated chain — serialized application of contract calls.

use crate::call::ContractCall;
use crate::receipt::{ErrorCode, Receipt, ReturnValue};
use rfcmon_ledger::{Ledger, LedgerError};
use rfcmon_registry::RegistryEngine;
use rfcmon_types::{Amount, Principal};

/// A simulated chain holding the registry engine and the ledger.
///
/// Calls are applied one at a time in block order, matching the
/// exclusive-writer model of contract execution. Engine operations
/// validate before mutating, so a failed call leaves no partial writes;
/// the receipt is the only observable effect.
pub struct Chain {
    engine: RegistryEngine,
    ledger: Ledger,
    height: u64,
}

impl Chain {
    /// A fresh chain at height 1 (the genesis block).
    pub fn new() -> Self {
        Self {
            engine: RegistryEngine::new(),
            ledger: Ledger::new(),
            height: 1,
        }
    }

    /// Genesis funding — mint into a principal's balance.
    pub fn fund(&mut self, principal: &Principal, amount: Amount) -> Result<(), LedgerError> {
        self.ledger.deposit(principal, amount)
    }

    pub fn balance(&self, principal: &Principal) -> Amount {
        self.ledger.balance(principal)
    }

    pub fn engine(&self) -> &RegistryEngine {
        &self.engine
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn height(&self) -> u64 {
        self.height
    }

    /// Mine a block: apply each call in order, then advance the height.
    ///
    /// Returns one receipt per call, in submission order.
    pub fn mine_block(&mut self, txs: Vec<(Principal, ContractCall)>) -> Vec<Receipt> {
        let receipts = txs
            .into_iter()
            .map(|(caller, call)| self.apply(&caller, call))
            .collect();
        self.height += 1;
        receipts
    }

    fn apply(&mut self, caller: &Principal, call: ContractCall) -> Receipt {
        let operation = call.name();
        tracing::debug!(caller = %caller, operation, "applying contract call");
        let result = match call {
            ContractCall::CreateProposal {
                title,
                description,
                bounty,
            } => self
                .engine
                .create_proposal(caller, &title, &description, bounty, &mut self.ledger)
                .map(ReturnValue::Uint),
            ContractCall::SubmitReview {
                proposal_id,
                content,
                score,
            } => self
                .engine
                .submit_review(caller, proposal_id, &content, score)
                .map(ReturnValue::Uint),
            ContractCall::CompleteReview { proposal_id } => self
                .engine
                .complete_review(caller, proposal_id, &mut self.ledger)
                .map(|()| ReturnValue::Unit),
        };
        let result = result.map_err(|err| {
            let code = ErrorCode::from(&err);
            tracing::warn!(caller = %caller, operation, error = %err, code = %code, "call rejected");
            code
        });
        Receipt { operation, result }
    }
}

impl Default for Chain {
    fn default() -> Self {
        Self::new()
    }
}
