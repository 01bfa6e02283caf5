/// Unified error type for all primitives operations.
///
/// Covers errors from bit-group packing; hashing and key stretching are
/// infallible.
#[derive(Debug, thiserror::Error)]
pub enum PrimitivesError {
    #[error("invalid bit width: {0} (must be between 1 and {max})", max = crate::util::MAX_GROUP_WIDTH)]
    InvalidBitWidth(u32),

    #[error("group value {value} does not fit in {width} bits")]
    GroupOverflow { value: u32, width: u32 },
}
