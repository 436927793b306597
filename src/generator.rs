//! Generating matrix of a binary linear block code and its derived structures.
//!
//! A binary linear [n, k] block code is the row space of a k x n generating
//! matrix over GF(2): the 2^k codewords are all linear combinations of the
//! matrix rows. Decoding works through the parity-check (control) matrix: a
//! received word's *syndrome* identifies which coset of the code it fell
//! into, and the weight of that coset's leader is the number of bit errors a
//! minimum-distance decoder would assume.
//!
//! This implementation provides:
//! - Row reduction of the generating matrix into systematic (standard) form
//! - Derivation of the control matrix from the systematic form
//! - A syndrome -> coset-leader-weight table for syndrome decoding
//! - Atomic reconfiguration: all derived structures are rebuilt into an
//!   immutable [`CodeSnapshot`] that is swapped in as a unit, so encoders and
//!   decoders never observe a half-updated code
//!
//! # Complexity
//!
//! Row reduction is O(n^2 * k). Building the coset leader weight table
//! enumerates words of increasing weight until all 2^(n-k) syndromes are
//! mapped, which is O(2^(n-k) * n) in the worst case - exponential in the
//! code redundancy. This is intended for the small code sizes used
//! interactively, not for long industrial codes.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use log::{debug, trace};

use crate::convert::bit_string;
use crate::error::{Error, Result};
use crate::matrix::BinaryMatrix;

/// Shared handle through which encoders and decoders observe the currently
/// configured code. Single-threaded by design; wrap reconfiguration and all
/// reads in one exclusive-access boundary before sharing across threads.
pub type SharedGeneratingMatrix = Rc<RefCell<GeneratingMatrix>>;

/// The generating matrix of the code together with everything derived from it.
///
/// Reconfiguring replaces the whole [`CodeSnapshot`] at once; readers that
/// fetched the previous snapshot keep a consistent view until they next ask
/// for one.
#[derive(Debug, Default)]
pub struct GeneratingMatrix {
    snapshot: Option<Rc<CodeSnapshot>>,
}

/// An immutable bundle of the generating matrix and its derived structures.
#[derive(Debug)]
pub struct CodeSnapshot {
    /// The raw generating matrix as configured (k rows, n columns)
    matrix: BinaryMatrix,
    /// The matrix row-reduced towards systematic form
    normalized: BinaryMatrix,
    /// Parity-check matrix (n - k rows, n columns)
    control: BinaryMatrix,
    /// Syndrome -> minimal weight of any word producing that syndrome
    coset_weights: HashMap<Vec<bool>, usize>,
}

impl GeneratingMatrix {
    /// Creates an unconfigured generating matrix.
    pub fn new() -> Self {
        GeneratingMatrix { snapshot: None }
    }

    /// Creates a shareable handle for use by an [`Encoder`](crate::Encoder)
    /// and [`Decoder`](crate::Decoder) alongside the configuring caller.
    pub fn shared() -> SharedGeneratingMatrix {
        Rc::new(RefCell::new(GeneratingMatrix::new()))
    }

    /// Replaces the generating matrix and recomputes the systematic form,
    /// control matrix and coset leader weight table.
    ///
    /// The derived structures are built completely before the previous
    /// configuration is replaced, so a failed `configure` leaves the old
    /// code intact.
    ///
    /// # Arguments
    ///
    /// * `matrix` - The new generating matrix; must have at least as many
    ///   columns as rows
    ///
    /// # Returns
    ///
    /// `Ok(())` on success, or an error describing why the matrix cannot
    /// define a code
    pub fn configure(&mut self, matrix: BinaryMatrix) -> Result<()> {
        let k = matrix.dimension();
        let n = matrix.vector_size();

        if k > n {
            return Err(Error::InvalidInput(format!(
                "Generating matrix must have at least as many columns as rows, got {} rows and {} columns",
                k, n
            )));
        }

        let redundancy = n - k;
        if redundancy >= usize::BITS as usize {
            return Err(Error::InvalidInput(format!(
                "Code redundancy {} is too large for coset table construction",
                redundancy
            )));
        }

        let normalized = normalize(&matrix);
        let control = derive_control_matrix(&normalized);
        let coset_weights = build_coset_weight_table(&control);

        debug!(
            "configured [{}, {}] code, {} of {} syndromes mapped",
            n,
            k,
            coset_weights.len(),
            1usize << redundancy
        );

        self.snapshot = Some(Rc::new(CodeSnapshot {
            matrix,
            normalized,
            control,
            coset_weights,
        }));

        Ok(())
    }

    /// Returns the current code snapshot, or [`Error::NotConfigured`] if no
    /// matrix has been set yet.
    pub fn snapshot(&self) -> Result<Rc<CodeSnapshot>> {
        self.snapshot.clone().ok_or(Error::NotConfigured)
    }

    /// Whether a matrix has been configured.
    pub fn is_configured(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Computes the syndrome of `word` against the current control matrix.
    pub fn syndrome(&self, word: &[bool]) -> Result<Vec<bool>> {
        self.snapshot()?.syndrome(word)
    }

    /// Looks up the coset leader weight for `word`'s syndrome.
    pub fn coset_leader_weight(&self, word: &[bool]) -> Result<usize> {
        self.snapshot()?.coset_leader_weight(word)
    }
}

impl CodeSnapshot {
    /// Number of message bits per block (k)
    pub fn dimension(&self) -> usize {
        self.matrix.dimension()
    }

    /// Number of codeword bits per block (n)
    pub fn vector_size(&self) -> usize {
        self.matrix.vector_size()
    }

    /// Number of parity bits per block (n - k)
    pub fn redundancy(&self) -> usize {
        self.vector_size() - self.dimension()
    }

    /// The generating matrix as configured
    pub fn matrix(&self) -> &BinaryMatrix {
        &self.matrix
    }

    /// The generating matrix row-reduced towards systematic form
    pub fn normalized(&self) -> &BinaryMatrix {
        &self.normalized
    }

    /// The parity-check matrix
    pub fn control_matrix(&self) -> &BinaryMatrix {
        &self.control
    }

    /// Computes `word * control^T mod 2`, one output bit per control matrix
    /// row. A zero syndrome means `word` is a codeword.
    ///
    /// # Arguments
    ///
    /// * `word` - A received word of exactly n bits
    ///
    /// # Returns
    ///
    /// The syndrome as an (n - k)-bit vector, or an error if `word` has the
    /// wrong length
    pub fn syndrome(&self, word: &[bool]) -> Result<Vec<bool>> {
        if word.len() != self.vector_size() {
            return Err(Error::InvalidInput(format!(
                "Word length {} does not match codeword length {}",
                word.len(),
                self.vector_size()
            )));
        }

        Ok(syndrome_bits(&self.control, word))
    }

    /// Returns the weight of the coset leader for `word`'s syndrome - the
    /// number of bit errors syndrome decoding assumes `word` carries.
    ///
    /// # Arguments
    ///
    /// * `word` - A received word of exactly n bits
    ///
    /// # Returns
    ///
    /// The coset leader weight, or [`Error::UnknownSyndrome`] if the table
    /// has no entry for the syndrome (possible only for degenerate codes
    /// whose table construction terminated early)
    pub fn coset_leader_weight(&self, word: &[bool]) -> Result<usize> {
        let syndrome = self.syndrome(word)?;

        self.coset_weights
            .get(&syndrome)
            .copied()
            .ok_or_else(|| Error::UnknownSyndrome(bit_string(&syndrome)))
    }
}

/// Row-reduces `matrix` towards systematic form using row swaps and row
/// additions only (no column swaps).
///
/// For each column i < k the rows below and including i are searched for a
/// pivot 1; the pivot row is swapped into position i and added into every
/// other row carrying a 1 in column i. A full-rank matrix ends up with the
/// identity in its first k columns. If no pivot exists for a column the
/// column is left as is - the generator is rank-deficient and the result is
/// not fully systematic.
fn normalize(matrix: &BinaryMatrix) -> BinaryMatrix {
    let mut normalized = matrix.clone();
    let k = normalized.dimension();

    for i in 0..k {
        let pivot = (i..k).find(|&row| normalized[row][i]);
        let Some(pivot) = pivot else {
            continue;
        };

        normalized.swap_rows(i, pivot);

        for row in 0..k {
            if row != i && normalized[row][i] {
                normalized.xor_row_into(i, row);
            }
        }
    }

    normalized
}

/// Derives the parity-check matrix from the normalized generating matrix.
///
/// The non-identity columns k..n of the normalized matrix are transposed and
/// right-appended with an (n - k) x (n - k) identity block. The textbook
/// derivation also negates the transposed block, but -x = x mod 2, so the
/// transpose is used directly. Every codeword multiplied by the transpose of
/// the result yields the zero vector.
fn derive_control_matrix(normalized: &BinaryMatrix) -> BinaryMatrix {
    let k = normalized.dimension();
    let n = normalized.vector_size();
    let redundancy = n - k;

    let mut rows = Vec::with_capacity(redundancy);
    for parity in 0..redundancy {
        let mut row = vec![false; n];
        for i in 0..k {
            row[i] = normalized[i][k + parity];
        }
        row[k + parity] = true;
        rows.push(row);
    }

    BinaryMatrix::from_parts(rows, n)
}

/// Multiplies `word` by the transpose of `control`, mod 2.
///
/// Callers guarantee `word` is as long as a control matrix row.
fn syndrome_bits(control: &BinaryMatrix, word: &[bool]) -> Vec<bool> {
    control
        .rows()
        .map(|row| {
            row.iter()
                .zip(word)
                .fold(false, |sum, (&h, &w)| sum ^ (h & w))
        })
        .collect()
}

/// Builds the syndrome -> coset leader weight table.
///
/// Words of GF(2)^n are enumerated in order of non-decreasing weight, so the
/// first word to produce a syndrome is a true coset leader and its weight is
/// recorded. Within one weight the words are generated by advancing a vector
/// of one-positions: the rightmost position that can still move advances by
/// one and all positions after it are reset to consecutive values. The
/// enumeration stops once all 2^(n-k) syndromes are mapped, or when the
/// candidate weight reaches n.
fn build_coset_weight_table(control: &BinaryMatrix) -> HashMap<Vec<bool>, usize> {
    let redundancy = control.dimension();
    let n = control.vector_size();
    let class_count = 1usize << redundancy;

    let mut table = HashMap::with_capacity(class_count);
    table.insert(vec![false; redundancy], 0);

    for weight in 1..n {
        if table.len() == class_count {
            break;
        }

        let mut ones: Vec<usize> = (0..weight).collect();

        loop {
            let mut word = vec![false; n];
            for &index in &ones {
                word[index] = true;
            }

            let syndrome = syndrome_bits(control, &word);
            table.entry(syndrome).or_insert(weight);

            if table.len() == class_count {
                break;
            }

            // Advance the rightmost one-position that has room left; the
            // positions after it restart directly behind it.
            match (0..ones.len()).rev().find(|&i| ones[i] != n - weight + i) {
                Some(i) => {
                    ones[i] += 1;
                    for j in i + 1..ones.len() {
                        ones[j] = ones[j - 1] + 1;
                    }
                }
                None => break,
            }
        }

        trace!(
            "coset table after weight {}: {} of {} syndromes",
            weight,
            table.len(),
            class_count
        );
    }

    table
}
