//! Once-only initialization cells.
//!
//! Both cells guarantee that the initializer of a successful construction
//! runs exactly once, however many threads race on the first access, and
//! that a failed or panicking initializer leaves the cell empty so a later
//! caller can retry.
//!
//! | cell | read path | value handle |
//! |------|-----------|--------------|
//! | [`LockedCell<T>`] | takes the lock on every call | `Arc<T>` |
//! | [`DoubleCheckedCell<T>`] | lock-free acquire load once published | `&T` |

mod double_checked;
mod locked;

pub use double_checked::DoubleCheckedCell;
pub use locked::LockedCell;
