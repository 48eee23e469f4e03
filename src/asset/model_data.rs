use tracing::debug;

// Bindings generated by build.rs from model/asl_alphabet_int8.tflite.
// The byte slice and its length constant are emitted together and must
// never be edited independently.
include!(concat!(env!("OUT_DIR"), "/model_data.rs"));

/// Handle over the embedded model asset.
///
/// The asset has a single permanent state: initialized at link time and
/// immutable for the life of the process. Any number of threads or interrupt
/// contexts may read it concurrently without synchronization, since no writer
/// exists after initialization.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModelAsset;

impl ModelAsset {
    /// Creates a handle to the embedded model.
    ///
    /// Never fails: the bytes are compiled into the program image.
    pub fn new() -> Self {
        debug!("Embedded ASL model asset: {} bytes", ASL_MODEL_DATA_LEN);
        ModelAsset
    }

    /// Returns the serialized model bytes.
    ///
    /// The slice is opaque at this layer; interpreting it is the consuming
    /// runtime's job.
    pub fn bytes(&self) -> &'static [u8] {
        ASL_MODEL_DATA
    }

    /// Returns the exact byte count of the serialized model.
    pub fn len(&self) -> usize {
        ASL_MODEL_DATA_LEN
    }

    /// Returns true when the embedded payload is empty.
    ///
    /// An empty payload is not rejected here; it surfaces in the consuming
    /// runtime as an invalid-model failure.
    pub fn is_empty(&self) -> bool {
        ASL_MODEL_DATA_LEN == 0
    }
}

impl AsRef<[u8]> for ModelAsset {
    fn as_ref(&self) -> &[u8] {
        ASL_MODEL_DATA
    }
}
