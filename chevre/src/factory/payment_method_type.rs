use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum PaymentMethodType {
    Account,
    Cash,
    CreditCard,
    EMoney,
    MovieTicket,
    Others,
}

impl PaymentMethodType {
    pub fn all() -> Vec<PaymentMethodType> {
        use self::PaymentMethodType::*;
        vec![Account, Cash, CreditCard, EMoney, MovieTicket, Others]
    }

    pub fn all_except(excluded: PaymentMethodType) -> Vec<PaymentMethodType> {
        PaymentMethodType::all()
            .into_iter()
            .filter(|p| *p != excluded)
            .collect()
    }
}

impl fmt::Display for PaymentMethodType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}
