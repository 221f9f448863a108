pub mod language;
pub mod market;
pub mod phrasebook;
pub mod score;
