//! Validation data sources and the round-robin batch cursor

/// Indexable sequence of `(features, labels)` validation batches.
pub trait BatchSequence<F, L> {
    /// Number of batches
    fn len(&self) -> usize;

    /// Batch at `index`, if in range
    fn batch(&self, index: usize) -> Option<(&F, &L)>;

    /// Check if the sequence holds no batches
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<F, L> BatchSequence<F, L> for Vec<(F, L)> {
    fn len(&self) -> usize {
        <[(F, L)]>::len(self)
    }

    fn batch(&self, index: usize) -> Option<(&F, &L)> {
        self.get(index).map(|(f, l)| (f, l))
    }
}

/// Where validation batches come from.
///
/// A source is either a batch sequence walked round-robin, or one fixed
/// `(features, labels)` pair evaluated every time.
pub enum ValidationSource<F, L> {
    /// Sequence of batches, visited by the validation cursor
    Batches(Box<dyn BatchSequence<F, L>>),
    /// Fixed validation pair
    Data {
        /// Validation inputs
        features: F,
        /// Validation targets
        labels: L,
    },
}

impl<F, L> ValidationSource<F, L> {
    /// Build a source from a batch sequence.
    pub fn batches<S: BatchSequence<F, L> + 'static>(sequence: S) -> Self {
        Self::Batches(Box::new(sequence))
    }

    /// Build a source from a fixed pair.
    pub fn data(features: F, labels: L) -> Self {
        Self::Data { features, labels }
    }

    /// Number of batches the cursor can visit. A fixed pair counts as one.
    pub fn len(&self) -> usize {
        match self {
            Self::Batches(sequence) => sequence.len(),
            Self::Data { .. } => 1,
        }
    }

    /// Check if there is nothing to evaluate on
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Batch selected by `cursor`. A fixed pair ignores the cursor.
    pub fn batch(&self, cursor: usize) -> Option<(&F, &L)> {
        match self {
            Self::Batches(sequence) => sequence.batch(cursor),
            Self::Data { features, labels } => Some((features, labels)),
        }
    }
}

impl<F, L> std::fmt::Debug for ValidationSource<F, L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Batches(sequence) => {
                f.debug_struct("Batches").field("len", &sequence.len()).finish()
            }
            Self::Data { .. } => f.write_str("Data"),
        }
    }
}

/// Next cursor position: advance while another batch exists, else wrap.
pub(crate) fn next_cursor(cursor: usize, len: Option<usize>) -> usize {
    match len {
        Some(len) if cursor + 1 < len => cursor + 1,
        _ => 0,
    }
}
