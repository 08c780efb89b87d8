use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BlockError {
    #[error("Block width must be a positive finite number, got {0}.")]
    InvalidWidth(f32),
    #[error("Column set is empty or has no positive weight.")]
    InvalidColumns,
    #[error("Character {ch:?} at offset {offset} cannot be encoded as Code 128 subset B.")]
    UnencodableBarcode { ch: char, offset: usize },
    #[error("Barcode text is empty.")]
    EmptyBarcode,
    #[error("Required field '{0}' is missing or blank.")]
    MissingField(&'static str),
}
