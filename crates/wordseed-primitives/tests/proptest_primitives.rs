use proptest::prelude::*;

use wordseed_primitives::hash::pbkdf2_sha512;
use wordseed_primitives::util::{BitGroupReader, BitGroupWriter};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn bit_groups_reassemble_to_original_prefix(
        data in prop::collection::vec(any::<u8>(), 0..64),
        width in 1u32..=16,
    ) {
        let mut writer = BitGroupWriter::new(width).unwrap();
        let mut groups = 0usize;
        for g in BitGroupReader::new(&data, width).unwrap() {
            prop_assert!(u32::from(g) < (1u32 << width));
            writer.write_group(g).unwrap();
            groups += 1;
        }
        prop_assert_eq!(groups, data.len() * 8 / width as usize);

        // Every byte fully covered by whole groups comes back unchanged.
        let bytes = writer.into_bytes();
        let covered = groups * width as usize / 8;
        prop_assert_eq!(&bytes[..covered], &data[..covered]);
    }

    #[test]
    fn pbkdf2_output_depends_on_salt(
        password in prop::collection::vec(any::<u8>(), 0..32),
        salt in prop::collection::vec(any::<u8>(), 1..32),
    ) {
        let mut other = salt.clone();
        other[0] ^= 0x01;
        prop_assert_ne!(
            pbkdf2_sha512(&password, &salt, 1),
            pbkdf2_sha512(&password, &other, 1)
        );
    }
}
