/// EIP-1559 fee fields for one transaction.
///
/// Both unset means the broadcast path prices the transaction with a legacy
/// gas price instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeeParams {
    pub tip: Option<u128>,
    pub cap: Option<u128>,
}

/// Headroom multiplier on the tip when deriving the cap.
const TIP_MULTIPLIER: u128 = 2;

impl FeeParams {
    pub fn legacy() -> Self {
        Self::default()
    }

    /// `cap = 2 * priority_fee + base_fee`, `tip = priority_fee`; legacy when
    /// the head carries no base fee.
    pub fn from_market(priority_fee: u128, base_fee: Option<u128>) -> Self {
        match base_fee {
            Some(base_fee) => Self {
                tip: Some(priority_fee),
                cap: Some(priority_fee.saturating_mul(TIP_MULTIPLIER).saturating_add(base_fee)),
            },
            None => Self::legacy(),
        }
    }

    pub fn is_legacy(&self) -> bool {
        self.tip.is_none() && self.cap.is_none()
    }
}
