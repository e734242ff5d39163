use proptest::prelude::*;

use umbra_primitives::address::{self, Address};
use umbra_primitives::base58;
use umbra_primitives::util::{ByteReader, ByteWriter};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn text_roundtrip(key in prop::array::uniform32(any::<u8>())) {
        let addr = Address::from_key(&key).unwrap();
        let text = addr.text();
        // Every 33-byte buffer led by a valid opcode encodes to exactly
        // 45 Base58 characters.
        prop_assert_eq!(text.len(), 45);
        let parsed = Address::from_text(text).unwrap();
        prop_assert_eq!(&parsed, &addr);
        prop_assert!(address::is_valid_address_text(text));
    }

    #[test]
    fn binary_roundtrip(key in prop::array::uniform32(any::<u8>())) {
        let addr = Address::from_key(&key).unwrap();
        let mut writer = ByteWriter::new();
        addr.write(&mut writer);
        let data = writer.into_bytes();
        prop_assert_eq!(data.len(), 32);
        let mut reader = ByteReader::new(&data);
        let read_back = Address::read(&mut reader).unwrap();
        prop_assert_eq!(read_back, addr);
    }

    #[test]
    fn classification_is_exhaustive(key in prop::array::uniform32(any::<u8>())) {
        let addr = Address::from_key(&key).unwrap();
        // Exactly one class, except that null is a system address.
        let classes =
            addr.is_system() as u8 + addr.is_interop() as u8 + addr.is_user() as u8;
        prop_assert_eq!(classes, 1);
        if addr.is_null() {
            prop_assert!(addr.is_system());
        }
    }

    #[test]
    fn interop_roundtrip(
        name in "[a-z]{1,10}",
        data in prop::collection::vec(any::<u8>(), 0..=27),
    ) {
        prop_assume!(2 + name.len() + data.len() <= 32);
        let addr = Address::encode_interop(&name, &data).unwrap();
        prop_assert!(addr.is_interop());
        let (platform, decoded) = addr.decode_interop(data.len()).unwrap();
        prop_assert_eq!(platform, name);
        prop_assert_eq!(decoded, data);
    }

    #[test]
    fn wif_import_is_deterministic(seed in prop::array::uniform32(any::<u8>())) {
        let mut payload = vec![0x80];
        payload.extend_from_slice(&seed);
        payload.push(0x01);
        let wif = base58::check_encode(&payload);
        let a = Address::from_wif(&wif).unwrap();
        let b = Address::from_wif(&wif).unwrap();
        prop_assert_eq!(&a, &b);
        prop_assert!(address::is_valid_address_text(a.text()));
    }
}
