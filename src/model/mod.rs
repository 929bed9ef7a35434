//! Plain data: the page session, what the shopper selected, what they typed,
//! and the order that comes out of a successful submission.

pub mod order;
pub mod order_form;
pub mod page;
pub mod selection;

pub use order::*;
pub use order_form::*;
pub use page::*;
pub use selection::*;
