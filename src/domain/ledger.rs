use serde::{Deserialize, Serialize};

use super::{as_amount, Cents, Transaction};

/// Net balance of a single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserBalance {
    pub user_id: String,
    #[serde(with = "as_amount")]
    pub total_amount: Cents,
}

/// Compute the balance of `user_id` from a list of transactions.
/// Balance = sum of deposits - sum of debits, over the user's own transactions only.
///
/// The sum is accumulated in `i128` and saturates at the `Cents` range.
pub fn compute_user_balance(user_id: &str, transactions: &[Transaction]) -> UserBalance {
    let total: i128 = transactions
        .iter()
        .filter(|t| t.user_id == user_id)
        .fold(0, |balance, transaction| {
            balance + i128::from(transaction.signed_amount())
        });
    let total_amount = Cents::try_from(total)
        .unwrap_or(if total < 0 { Cents::MIN } else { Cents::MAX });

    UserBalance {
        user_id: user_id.to_string(),
        total_amount,
    }
}
