use crate::engine::QueryError;
use crate::models::Transaction;
use crate::types::{Amount, IssueId, TransactionNumber};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use tracing::{debug, warn};

const TOP_TRANSACTIONS_LIMIT: usize = 3;

/// Read-only query view over a loaded transaction collection.
///
/// Every query scans the borrowed slice again; nothing is cached between calls
/// and the slice is never mutated.
#[derive(Debug, Clone, Copy)]
pub struct TransactionQueries<'a> {
    transactions: &'a [Transaction]
}

impl<'a> TransactionQueries<'a> {
    pub fn new(transactions: &'a [Transaction]) -> Self {
        Self { transactions }
    }

    /// Sum of the amounts of all distinct transactions (first record per number wins).
    ///
    /// # Errors
    /// Returns `QueryError::OperationNotSupported` when there are no transactions
    /// or when the total does not fit in an `Amount`.
    pub fn total_transaction_amount(&self) -> Result<Amount, QueryError> {
        if self.transactions.is_empty() {
            return Err(QueryError::OperationNotSupported);
        }

        self.distinct_first_seen().into_iter()
            .try_fold(Amount::ZERO, |total, transaction| total.checked_add(transaction.amount))
            .ok_or_else(|| {
                warn!("Total transaction amount overflowed");
                QueryError::OperationNotSupported
            })
    }

    /// Sum of the amounts sent by `sender_full_name`, counting each transaction number once.
    pub fn total_transaction_amount_sent_by(&self, sender_full_name: &str) -> Amount {
        let mut counted = HashSet::<TransactionNumber>::new();

        self.transactions.iter()
            .filter(|transaction| transaction.sender_full_name == sender_full_name)
            .filter(|transaction| counted.insert(transaction.transaction_number))
            .map(|transaction| transaction.amount)
            .sum()
    }

    /// Highest amount among distinct transactions, or zero when there are none.
    pub fn max_transaction_amount(&self) -> Amount {
        self.distinct_first_seen().into_iter()
            .map(|transaction| transaction.amount)
            .max()
            .unwrap_or(Amount::ZERO)
    }

    /// Number of distinct names appearing as sender or beneficiary.
    pub fn count_unique_clients(&self) -> usize {
        self.transactions.iter()
            .flat_map(|transaction| [transaction.sender_full_name.as_str(), transaction.beneficiary_full_name.as_str()])
            .collect::<HashSet<&str>>()
            .len()
    }

    /// Whether the party took part in any transaction whose issue is explicitly unsolved.
    pub fn has_open_compliance_issues(&self, client_full_name: &str) -> bool {
        self.transactions.iter()
            .any(|transaction| transaction.involves(client_full_name) && transaction.has_unsolved_issue())
    }

    /// Distinct transactions (first record per number wins) grouped by beneficiary.
    ///
    /// Each group keeps input order.
    pub fn transactions_by_beneficiary_name(&self) -> BTreeMap<&'a str, Vec<&'a Transaction>> {
        let mut groups = BTreeMap::<&'a str, Vec<&'a Transaction>>::new();

        for transaction in self.distinct_first_seen() {
            groups.entry(transaction.beneficiary_full_name.as_str())
                .or_default()
                .push(transaction);
        }

        groups
    }

    /// Identifiers of every issue explicitly marked unsolved.
    ///
    /// Records flagged unsolved without an issue id contribute nothing.
    pub fn unsolved_issue_ids(&self) -> BTreeSet<IssueId> {
        self.transactions.iter()
            .filter(|transaction| transaction.has_unsolved_issue())
            .filter_map(|transaction| transaction.issue_id)
            .collect()
    }

    /// Messages of every solved issue, in input order with duplicates kept.
    pub fn solved_issue_messages(&self) -> Vec<&'a str> {
        self.transactions.iter()
            .filter(|transaction| transaction.has_solved_issue())
            .filter_map(|transaction| transaction.issue_message.as_deref())
            .collect()
    }

    pub fn top3_transactions_by_amount(&self) -> Vec<&'a Transaction> {
        self.top_transactions_by_amount(TOP_TRANSACTIONS_LIMIT)
    }

    /// Up to `limit` distinct transactions sorted by amount, highest first.
    ///
    /// Records sharing a number collapse to the one with the greatest amount. Equal
    /// amounts keep the order in which their numbers first appeared.
    pub fn top_transactions_by_amount(&self, limit: usize) -> Vec<&'a Transaction> {
        let mut distinct = self.distinct_max_amount();

        distinct.sort_by(|left, right| right.amount.cmp(&left.amount));
        distinct.truncate(limit);

        distinct
    }

    /// Sender whose own largest transaction is the largest of all senders.
    ///
    /// Every record counts, without collapsing by number. When several senders share
    /// the greatest maximum, the one that appeared first in the input wins.
    pub fn top_sender(&self) -> Option<&'a str> {
        let mut senders = Vec::<(&'a str, Amount)>::new();
        let mut positions = HashMap::<&'a str, usize>::new();

        for transaction in self.transactions {
            let name = transaction.sender_full_name.as_str();

            match positions.get(name) {
                Some(&position) => {
                    let own_maximum = &mut senders[position].1;
                    if transaction.amount > *own_maximum {
                        *own_maximum = transaction.amount;
                    }
                }
                None => {
                    positions.insert(name, senders.len());
                    senders.push((name, transaction.amount));
                }
            }
        }

        let mut top: Option<(&'a str, Amount)> = None;

        for (name, own_maximum) in senders {
            if top.is_none_or(|(_, best)| own_maximum > best) {
                top = Some((name, own_maximum));
            }
        }

        top.map(|(name, _)| name)
    }

    /// Collapses records by transaction number, keeping the first record seen.
    fn distinct_first_seen(&self) -> Vec<&'a Transaction> {
        let mut seen = HashSet::<TransactionNumber>::with_capacity(self.transactions.len());

        let distinct: Vec<&'a Transaction> = self.transactions.iter()
            .filter(|transaction| seen.insert(transaction.transaction_number))
            .collect();

        debug!("Collapsed {} records into {} distinct transactions", self.transactions.len(), distinct.len());

        distinct
    }

    /// Collapses records by transaction number, keeping the greatest amount.
    /// Ties keep the earlier record; the result is ordered by first appearance.
    fn distinct_max_amount(&self) -> Vec<&'a Transaction> {
        let mut distinct = Vec::<&'a Transaction>::new();
        let mut positions = HashMap::<TransactionNumber, usize>::with_capacity(self.transactions.len());

        for transaction in self.transactions {
            match positions.get(&transaction.transaction_number) {
                Some(&position) => {
                    if transaction.amount > distinct[position].amount {
                        distinct[position] = transaction;
                    }
                }
                None => {
                    positions.insert(transaction.transaction_number, distinct.len());
                    distinct.push(transaction);
                }
            }
        }

        debug!("Collapsed {} records into {} distinct transactions by greatest amount", self.transactions.len(), distinct.len());

        distinct
    }
}
