mod model_data;

// Re-export from model_data
pub use model_data::{ModelAsset, ASL_MODEL_DATA, ASL_MODEL_DATA_LEN};
