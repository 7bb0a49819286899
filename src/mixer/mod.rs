//! Mixer state capture and restore through `tinymix`

mod control;
mod decode;
mod dialect;
mod encode;
pub mod error;
pub mod state;
mod tinymix;
mod value_type;

pub use control::{ControlRecord, BOOL_FALSE, BOOL_TRUE};
pub use decode::{decode, LINE_BUFFER_SIZE};
pub use dialect::{Dialect, DialectPreference};
pub use encode::{encode, encode_values};
pub use error::{DecodeError, EncodeError, MixerError};
pub use tinymix::{RestoreReport, Tinymix};
pub use value_type::{UnknownValueType, ValueType};
