//! Randomized split of an hour budget across interchangeable tasks.
//!
//! Each draw picks an amount in `[0, remaining]` and a task at random, adds
//! the amount to that task and repeats until the budget is spent. Since an
//! amount of zero may be drawn any number of times, the loop stops after
//! [`MAX_ALLOCATION_DRAWS`] draws and hands whatever is left to one more
//! randomly chosen task.
//!
//! The random source is injected so that a seeded generator reproduces the
//! same split:
//!
//! ```rust
//! use autolog::libs::activity::ActivityType;
//! use autolog::libs::allocator::allocate;
//! use autolog::libs::task::{TaskTemplate, TotalHours};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let categories = vec![
//!     TaskTemplate::new(0, ActivityType::Development, "Dev + PRs"),
//!     TaskTemplate::new(0, ActivityType::SaasOperation, "Support Production"),
//! ];
//! let mut rng = StdRng::seed_from_u64(7);
//! let split = allocate(&mut rng, 3, &categories)?;
//! assert_eq!(split.total_hours(), 3);
//! # Ok::<(), autolog::libs::allocator::AllocationError>(())
//! ```

use super::task::TaskTemplate;
use rand::Rng;
use thiserror::Error;

/// Upper bound on random draws before the remainder is assigned in one go.
pub const MAX_ALLOCATION_DRAWS: usize = 32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AllocationError {
    #[error("cannot split {0} hour(s): no dynamic task is configured")]
    NoCategories(u32),
}

/// Splits `total_hours` across `slots` buckets, returning one amount per bucket.
///
/// Zero buckets is always an error, even for a zero budget.
pub fn split_hours<R: Rng + ?Sized>(rng: &mut R, total_hours: u32, slots: usize) -> Result<Vec<u32>, AllocationError> {
    if slots == 0 {
        return Err(AllocationError::NoCategories(total_hours));
    }

    let mut hours = vec![0u32; slots];
    let mut remaining = total_hours;
    let mut draws = 0;

    while remaining > 0 && draws < MAX_ALLOCATION_DRAWS {
        let amount = rng.random_range(0..=remaining);
        let slot = rng.random_range(0..slots);
        hours[slot] += amount;
        remaining -= amount;
        draws += 1;
    }

    if remaining > 0 {
        let slot = rng.random_range(0..slots);
        hours[slot] += remaining;
    }

    Ok(hours)
}

/// Distributes `total_hours` over fresh copies of `categories`.
///
/// The result keeps the order of `categories` and may contain zero-hour
/// templates; dropping them is up to the caller.
pub fn allocate<R: Rng + ?Sized>(
    rng: &mut R,
    total_hours: u32,
    categories: &[TaskTemplate],
) -> Result<Vec<TaskTemplate>, AllocationError> {
    let hours = split_hours(rng, total_hours, categories.len())?;
    Ok(categories.iter().zip(hours).map(|(task, hours)| task.with_hours(hours)).collect())
}
