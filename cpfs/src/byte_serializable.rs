pub trait ByteSerializable {
    type BytesArrayType;

    fn to_bytes(&self) -> Self::BytesArrayType;
    fn from_bytes(bytes: &[u8]) -> Option<Self>
    where
        Self: core::marker::Sized;
    fn generic_bytes_rep(bytes: &Self::BytesArrayType) -> &[u8];

    /// The serialized size in bytes.
    fn serialized_size() -> u64;

    /// Serialize into a zero filled block, the structure sits at offset 0.
    fn to_block(&self) -> [u8; crate::BLOCK_SIZE] {
        let raw_bytes = self.to_bytes();
        let bytes = Self::generic_bytes_rep(&raw_bytes);

        let mut block = [0u8; crate::BLOCK_SIZE];
        let len = bytes.len().min(crate::BLOCK_SIZE);
        block[..len].copy_from_slice(&bytes[..len]);

        return block;
    }
}
