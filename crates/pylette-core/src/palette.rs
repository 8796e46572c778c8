//! Palette admission control.

use thiserror::Error;

/// Maximum number of palettes a board holds unless configured otherwise.
pub const DEFAULT_MAX_PALETTES: usize = 5;

/// Errors produced when registering palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("Maximum number of palettes ({max}) has been reached")]
    PaletteLimitReached { max: usize },
}

/// Result type for palette admission.
pub type PaletteResult<T> = Result<T, PaletteError>;

/// Counts palettes and admits new ones up to a fixed maximum.
///
/// The count only ever grows; a full registry stays full for its lifetime.
/// Mutation goes through `&mut self`, so sharing one registry between threads
/// needs external synchronization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteRegistry {
    count: usize,
    max_palettes: usize,
}

impl Default for PaletteRegistry {
    fn default() -> Self {
        Self::with_max(DEFAULT_MAX_PALETTES)
    }
}

impl PaletteRegistry {
    /// Create an empty registry with [`DEFAULT_MAX_PALETTES`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty registry with a custom maximum.
    pub fn with_max(max_palettes: usize) -> Self {
        Self {
            count: 0,
            max_palettes,
        }
    }

    /// Whether the next [`admit`](Self::admit) would succeed.
    pub fn can_admit(&self) -> bool {
        self.count < self.max_palettes
    }

    /// Register one more palette and return the new count.
    pub fn admit(&mut self) -> PaletteResult<usize> {
        if !self.can_admit() {
            return Err(PaletteError::PaletteLimitReached {
                max: self.max_palettes,
            });
        }
        self.count += 1;
        log::debug!("Admitted palette {}/{}", self.count, self.max_palettes);
        Ok(self.count)
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn max_palettes(&self) -> usize {
        self.max_palettes
    }

    /// Whether the registry has reached its maximum.
    pub fn is_full(&self) -> bool {
        !self.can_admit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry_is_empty() {
        let registry = PaletteRegistry::new();
        assert_eq!(registry.count(), 0);
        assert_eq!(registry.max_palettes(), DEFAULT_MAX_PALETTES);
        assert!(registry.can_admit());
    }

    #[test]
    fn test_admit_up_to_limit() {
        let mut registry = PaletteRegistry::new();
        for expected in 1..=5 {
            assert_eq!(registry.admit(), Ok(expected));
        }
        assert_eq!(
            registry.admit(),
            Err(PaletteError::PaletteLimitReached { max: 5 })
        );
        assert_eq!(registry.count(), 5);
        assert!(registry.is_full());
    }

    #[test]
    fn test_can_admit_predicts_admit() {
        let mut registry = PaletteRegistry::new();
        for _ in 0..=6 {
            let predicted = registry.can_admit();
            let before = registry.count();
            let result = registry.admit();
            assert_eq!(predicted, result.is_ok());
            if !predicted {
                assert_eq!(registry.count(), before);
            }
        }
    }

    #[test]
    fn test_zero_max_is_always_full() {
        let mut registry = PaletteRegistry::with_max(0);
        assert!(!registry.can_admit());
        assert!(registry.admit().is_err());
        assert_eq!(registry.count(), 0);
    }

    #[test]
    fn test_limit_message() {
        let err = PaletteError::PaletteLimitReached { max: 5 };
        assert_eq!(
            err.to_string(),
            "Maximum number of palettes (5) has been reached"
        );
    }
}
