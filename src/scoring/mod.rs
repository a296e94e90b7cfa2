pub mod band;
pub mod decode;
pub mod engine;
pub mod validation;
pub mod vocabulary;
pub mod weights;

pub use band::{distress_band, DistressBand};
pub use decode::{decode_list, encode_list, EncodedList};
pub use engine::{calculate_distress_score, CategoryScore, DistressDriver, ScoreBreakdown, ScoreResult};
pub use validation::{unknown_signals, validate_patch};
pub use weights::Category;
