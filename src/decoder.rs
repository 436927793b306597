//! Syndrome-guided decoding of received codewords.

use crate::error::{Error, Result};
use crate::generator::SharedGeneratingMatrix;

/// Decodes received words back into message bits using the coset leader
/// weight table of the shared generating matrix.
///
/// Error correction is a greedy local search, not maximum-likelihood
/// decoding: each bit of a block is tentatively flipped once, and the flip is
/// kept only when it strictly lowers the coset leader weight. This corrects
/// every single-bit error of a code with minimum distance >= 3, but can miss
/// the nearest codeword for heavier error patterns; such blocks are emitted
/// with their residual errors instead of being dropped.
///
/// Message extraction takes the first k bits of each corrected block, which
/// is only correct when the configured matrix is in systematic form - the
/// same caller obligation the [`Encoder`](crate::Encoder) documents.
#[derive(Debug, Clone)]
pub struct Decoder {
    /// The shared code definition, observed anew on every call
    source: SharedGeneratingMatrix,
}

impl Decoder {
    /// Creates a decoder over the shared generating matrix handle.
    pub fn new(source: SharedGeneratingMatrix) -> Self {
        Decoder { source }
    }

    /// Decodes a received bit sequence into the original message.
    ///
    /// # Arguments
    ///
    /// * `received` - Received bits; the length must be a multiple of the
    ///   codeword length n
    /// * `original_len` - Length of the message before encoding; the output
    ///   is truncated to it, removing the padding added by the encoder
    ///
    /// # Returns
    ///
    /// The recovered message bits, or an error if no matrix is configured or
    /// the received length does not divide into codewords
    pub fn decode(&self, received: &[bool], original_len: usize) -> Result<Vec<bool>> {
        let snapshot = self.source.borrow().snapshot()?;
        let k = snapshot.dimension();
        let n = snapshot.vector_size();

        if received.len() % n != 0 {
            return Err(Error::InvalidInput(format!(
                "Received length {} is not a multiple of the codeword length {}",
                received.len(),
                n
            )));
        }

        let mut decoded = Vec::with_capacity(received.len() / n * k);
        for block in received.chunks(n) {
            let mut word = block.to_vec();
            let mut weight = snapshot.coset_leader_weight(&word)?;

            if weight > 0 {
                for position in 0..n {
                    word[position] = !word[position];

                    let flipped_weight = snapshot.coset_leader_weight(&word)?;
                    if flipped_weight < weight {
                        weight = flipped_weight;
                        if weight == 0 {
                            break;
                        }
                    } else {
                        word[position] = !word[position];
                    }
                }
            }

            decoded.extend_from_slice(&word[..k]);
        }

        decoded.truncate(original_len);
        Ok(decoded)
    }
}
