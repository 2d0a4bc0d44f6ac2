use log::{debug, trace};

use crate::Id;

/// Mints process-unique, strictly increasing identifiers
///
/// The generator tracks a high-water mark. Fresh identifiers are always
/// minted above it, and identifiers restored from storage via
/// [`IdGenerator::generate_from`] raise it so later generations never
/// collide with them.
///
/// Construct one per session and pass it by `&mut` to every code path that
/// needs new identifiers.
///
/// # Example
///
/// ```
/// use ident::IdGenerator;
///
/// let mut ids = IdGenerator::new();
/// assert_eq!(ids.generate(), 1u64);
/// assert_eq!(ids.generate_from(45), 45u64);
/// assert_eq!(ids.generate_from(45), 46u64);
/// ```
#[derive(Debug, Default)]
pub struct IdGenerator {
    high_water: u64,
}

impl IdGenerator {
    /// Create a generator with a high-water mark of zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a fresh identifier
    ///
    /// # Panics
    ///
    /// Panics if the identifier space is exhausted.
    #[track_caller]
    pub fn generate(&mut self) -> Id {
        self.high_water = match self.high_water.checked_add(1) {
            Some(next) => next,
            None => panic!("identifier space exhausted"),
        };
        trace!("Generated id {}", self.high_water);
        Id::new(self.high_water)
    }

    /// Generate an identifier, restoring `seed` if it lies above the mark
    ///
    /// When `seed` is strictly greater than the current high-water mark the
    /// mark advances to `seed` and exactly that value is returned. Any other
    /// seed (including 0) is ignored and a fresh identifier is generated.
    #[track_caller]
    pub fn generate_from(&mut self, seed: u64) -> Id {
        if seed > self.high_water {
            debug!("Restoring id {} (mark was {})", seed, self.high_water);
            self.high_water = seed;
            return Id::new(seed);
        }
        self.generate()
    }

    /// Reset the high-water mark to zero
    ///
    /// Only meant for test isolation: identifiers still in use may be minted
    /// again afterwards.
    pub fn reset(&mut self) -> Id {
        debug!("Resetting id generator (mark was {})", self.high_water);
        self.high_water = 0;
        Id::INVALID
    }

    /// The highest identifier handed out so far
    pub fn high_water(&self) -> u64 {
        self.high_water
    }
}
