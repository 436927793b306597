//! Message encoding through the generating matrix.

use crate::error::Result;
use crate::generator::SharedGeneratingMatrix;

/// Encodes message bits into codewords block by block.
///
/// The encoder multiplies each message block by the generating matrix exactly
/// as configured. Message bits therefore only occupy the first k positions of
/// each codeword when the caller supplies a matrix that is already in
/// systematic form; the [`Decoder`](crate::Decoder) assumes they do, so
/// encoding with a non-systematic matrix produces codewords the decoder will
/// misread. Supplying a systematic matrix is a caller obligation.
#[derive(Debug, Clone)]
pub struct Encoder {
    /// The shared code definition, observed anew on every call
    source: SharedGeneratingMatrix,
}

impl Encoder {
    /// Creates an encoder over the shared generating matrix handle.
    pub fn new(source: SharedGeneratingMatrix) -> Self {
        Encoder { source }
    }

    /// Encodes a message into a sequence of codewords.
    ///
    /// The message is padded with zero bits up to the next multiple of the
    /// matrix dimension k (the caller's buffer is left untouched), then each
    /// k-bit block is mapped to an n-bit codeword:
    /// `codeword[j] = sum_i block[i] * matrix[i][j] mod 2`.
    ///
    /// # Arguments
    ///
    /// * `message` - Message bits of any length
    ///
    /// # Returns
    ///
    /// `ceil(|message| / k) * n` codeword bits, or an error if no matrix has
    /// been configured
    pub fn encode(&self, message: &[bool]) -> Result<Vec<bool>> {
        let snapshot = self.source.borrow().snapshot()?;
        let k = snapshot.dimension();
        let n = snapshot.vector_size();
        let matrix = snapshot.matrix();

        let mut padded = message.to_vec();
        while padded.len() % k != 0 {
            padded.push(false);
        }

        let mut encoded = Vec::with_capacity(padded.len() / k * n);
        for block in padded.chunks(k) {
            for j in 0..n {
                let bit = block
                    .iter()
                    .enumerate()
                    .fold(false, |sum, (i, &message_bit)| {
                        sum ^ (message_bit & matrix[i][j])
                    });
                encoded.push(bit);
            }
        }

        Ok(encoded)
    }
}
