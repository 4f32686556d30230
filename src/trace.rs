//! Synthetic page reference strings.
//!
//! [`generate`] produces a biased random walk over `[0, page_range)`: with
//! probability `locality_factor` the next page is a neighbour of the current
//! one (step of -1, 0 or +1, clamped at the edges), otherwise it is drawn
//! uniformly from the whole range. Higher locality means tighter clusters,
//! fewer distinct pages in flight, and fewer faults for any policy with
//! more than one frame.

use std::collections::BTreeSet;
use std::ops::Deref;

use rand::Rng;

use crate::common::{Error, PageId, Result};

/// An immutable, ordered sequence of page references.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Trace {
    pages: Vec<PageId>,
}

impl Trace {
    /// Build a trace from raw page numbers.
    ///
    /// # Example
    /// ```
    /// use pagesim::{PageId, Trace};
    ///
    /// let trace = Trace::from_pages([3, 3, 5]);
    /// assert_eq!(trace.len(), 3);
    /// assert_eq!(trace[2], PageId::new(5));
    /// ```
    pub fn from_pages<I>(pages: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        Self {
            pages: pages.into_iter().map(PageId::new).collect(),
        }
    }

    pub fn as_slice(&self) -> &[PageId] {
        &self.pages
    }

    /// The set of pages referenced at least once.
    pub fn distinct_pages(&self) -> BTreeSet<PageId> {
        self.pages.iter().copied().collect()
    }
}

impl Deref for Trace {
    type Target = [PageId];

    fn deref(&self) -> &[PageId] {
        &self.pages
    }
}

impl From<Vec<PageId>> for Trace {
    fn from(pages: Vec<PageId>) -> Self {
        Self { pages }
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a PageId;
    type IntoIter = std::slice::Iter<'a, PageId>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

/// Generate a `length`-step reference string over `[0, page_range)`.
///
/// All randomness is drawn from `rng`; pass a seeded generator for
/// reproducible traces.
///
/// # Errors
/// - [`Error::InvalidPageRange`] if `page_range` is zero.
/// - [`Error::InvalidLocality`] if `locality_factor` is not within `[0, 1]`.
///
/// # Example
/// ```
/// use pagesim::trace::generate;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let trace = generate(&mut rng, 100, 10, 0.6).unwrap();
/// assert_eq!(trace.len(), 100);
/// assert!(trace.iter().all(|p| p.0 < 10));
/// ```
pub fn generate<R>(rng: &mut R, length: usize, page_range: u32, locality_factor: f64) -> Result<Trace>
where
    R: Rng + ?Sized,
{
    validate_page_range(page_range)?;
    validate_locality(locality_factor)?;

    let last = page_range - 1;
    let mut current = rng.gen_range(0..page_range);
    let mut pages = Vec::with_capacity(length);

    for _ in 0..length {
        if rng.gen_bool(locality_factor) {
            current = match rng.gen_range(-1i8..=1) {
                -1 => current.saturating_sub(1),
                1 => (current + 1).min(last),
                _ => current,
            };
        } else {
            current = rng.gen_range(0..page_range);
        }
        pages.push(PageId::new(current));
    }

    Ok(Trace { pages })
}

pub(crate) fn validate_page_range(page_range: u32) -> Result<()> {
    if page_range == 0 {
        return Err(Error::InvalidPageRange(page_range));
    }
    Ok(())
}

pub(crate) fn validate_locality(locality_factor: f64) -> Result<()> {
    // NaN fails the range check too.
    if !(0.0..=1.0).contains(&locality_factor) {
        return Err(Error::InvalidLocality(locality_factor));
    }
    Ok(())
}
