pub mod quote;
pub mod response;
pub mod subscription;

pub use quote::{Stock, TickerQuote, TickerSnapshot, TickerState, STOCKS};
pub use response::{MessageResponse, NotifyRequest};
pub use subscription::{PushSubscription, SubscriptionKeys};
