pub mod cleaning;
pub mod formatting;
pub mod phonemes;
pub mod segmentation;
