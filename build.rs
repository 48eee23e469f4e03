use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Model file embedded into the crate, relative to the manifest root.
const MODEL_FILE: &str = "model/asl_alphabet_int8.tflite";

/// Emits `$OUT_DIR/model_data.rs` with the data binding and its length
/// constant written in the same pass, so regenerating the model file can
/// never leave the pair out of sync.
fn main() -> Result<()> {
    println!("cargo:rerun-if-changed={}", MODEL_FILE);

    let manifest_dir = env::var("CARGO_MANIFEST_DIR").context("CARGO_MANIFEST_DIR not set")?;
    let model_path = PathBuf::from(manifest_dir).join(MODEL_FILE);

    // The payload is opaque at this layer. A zero-length file is embedded
    // as-is and surfaces downstream as the runtime's invalid-model failure.
    let byte_len = fs::metadata(&model_path)
        .with_context(|| format!("model file not found at {}", model_path.display()))?
        .len();

    let generated = format!(
        "/// Serialized ASL alphabet model, linked into the binary's read-only data.\n\
         pub static ASL_MODEL_DATA: &[u8] = include_bytes!({path:?});\n\
         \n\
         /// Exact byte count of [`ASL_MODEL_DATA`].\n\
         pub const ASL_MODEL_DATA_LEN: usize = {len};\n",
        path = model_path,
        len = byte_len,
    );

    let out_path = PathBuf::from(env::var("OUT_DIR").context("OUT_DIR not set")?).join("model_data.rs");
    fs::write(&out_path, generated)
        .with_context(|| format!("failed to write {}", out_path.display()))?;

    Ok(())
}
