mod money;

pub mod op;

pub use money::{Money, MoneyConversionError, DEFAULT_CURRENCY_CODE};
