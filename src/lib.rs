//! Binary linear block codes over a simulated noisy channel.
//!
//! This crate implements the full path a message takes through an
//! error-correcting transmission: a [`GeneratingMatrix`] defines the code and
//! derives its systematic form, parity-check matrix and coset leader weight
//! table; an [`Encoder`] turns message bits into codewords; a [`Channel`]
//! flips bits with a configurable probability (a binary symmetric channel);
//! and a [`Decoder`] locates likely errors through syndrome lookups and
//! strips the corrected codewords back down to message bits.
//!
//! Error correction uses a greedy bit-flip search over coset leader weights
//! rather than exhaustive nearest-codeword search, and the coset table grows
//! exponentially in the code redundancy, so the crate targets the small code
//! sizes used in teaching and experimentation.
//!
//! # Examples
//!
//! ```
//! use linear_code_channel::{BinaryMatrix, Channel, Decoder, Encoder, GeneratingMatrix};
//!
//! let matrix = BinaryMatrix::from_rows(vec![
//!     vec![true, false, true, false, true, false],
//!     vec![false, true, false, true, false, true],
//! ])
//! .unwrap();
//!
//! let code = GeneratingMatrix::shared();
//! code.borrow_mut().configure(matrix).unwrap();
//!
//! let encoder = Encoder::new(code.clone());
//! let decoder = Decoder::new(code.clone());
//!
//! let message = vec![true, false];
//! let sent = encoder.encode(&message).unwrap();
//!
//! let mut channel = Channel::with_seed(7);
//! channel.set_error_chance(0.0);
//! let received = channel.pass_message(&sent);
//!
//! assert_eq!(decoder.decode(&received, message.len()).unwrap(), message);
//! ```

pub mod channel;
pub mod convert;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod generator;
pub mod matrix;

pub use channel::Channel;
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{Error, Result};
pub use generator::{CodeSnapshot, GeneratingMatrix, SharedGeneratingMatrix};
pub use matrix::BinaryMatrix;
