//! # Transaction Application
//!
//! Computes every balance a transaction touches into one write set, then
//! stages the set as a unit. An identity that appears in more than one role
//! (sending to oneself, or paying tax to oneself) accumulates all of its
//! deltas in the same entry.

use crate::domain::errors::TxError;
use crate::domain::validator::ValidatedDelivery;
use shared_types::Amount;
use std::collections::BTreeMap;
use tl_01_signature_verification::Identity;
use tl_02_ledger_store::WorkingLedger;

struct WriteSet<'a, L> {
    ledger: &'a L,
    writes: BTreeMap<Identity, Amount>,
}

impl<'a, L: WorkingLedger> WriteSet<'a, L> {
    fn new(ledger: &'a L) -> Self {
        Self {
            ledger,
            writes: BTreeMap::new(),
        }
    }

    fn current(&self, identity: &Identity) -> Result<Amount, TxError> {
        match self.writes.get(identity) {
            Some(balance) => Ok(*balance),
            None => Ok(self.ledger.balance(identity)?),
        }
    }

    fn credit(&mut self, identity: Identity, amount: Amount) -> Result<(), TxError> {
        let next = self
            .current(&identity)?
            .checked_add(amount)
            .ok_or(TxError::Overflow)?;
        self.writes.insert(identity, next);
        Ok(())
    }

    fn debit(&mut self, identity: Identity, amount: Amount) -> Result<(), TxError> {
        let next = self
            .current(&identity)?
            .checked_sub(amount)
            .filter(|b| !b.is_negative())
            .ok_or(TxError::InsufficientBalance)?;
        self.writes.insert(identity, next);
        Ok(())
    }
}

/// Apply a validated transaction to `ledger`.
///
/// Returns the balances written. On any error nothing is staged.
pub fn apply<L: WorkingLedger>(
    ledger: &mut L,
    delivery: &ValidatedDelivery,
) -> Result<BTreeMap<Identity, Amount>, TxError> {
    let mut set = WriteSet::new(&*ledger);

    match *delivery {
        ValidatedDelivery::Mint { account, amount } => set.credit(account, amount)?,
        ValidatedDelivery::Burn { account, amount } => set.debit(account, amount)?,
        ValidatedDelivery::Transfer {
            from,
            to,
            amount,
            tax,
        } => {
            let tax_amount = amount.percentage_half_even(tax.percentage);
            let net = amount.checked_sub(tax_amount).ok_or(TxError::Overflow)?;
            set.debit(from, amount)?;
            set.credit(to, net)?;
            set.credit(tax.receiver, tax_amount)?;
        }
    }

    let writes = set.writes;
    ledger.stage(writes.clone())?;
    Ok(writes)
}
