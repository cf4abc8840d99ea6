use proptest::prelude::*;

use rgbpp_script::{HashType, Script};

fn arb_hash_type() -> impl Strategy<Value = HashType> {
    prop_oneof![
        Just(HashType::Data),
        Just(HashType::Type),
        Just(HashType::Data1),
        Just(HashType::Data2),
    ]
}

prop_compose! {
    fn arb_script()(
        code_hash in prop::array::uniform32(any::<u8>()),
        hash_type in arb_hash_type(),
        args in prop::collection::vec(any::<u8>(), 0..128),
    ) -> Script {
        Script::new(code_hash, hash_type, args)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn script_molecule_roundtrip(script in arb_script()) {
        let bytes = script.to_bytes();
        prop_assert_eq!(bytes.len(), 16 + 32 + 1 + 4 + script.args.len());
        let back = Script::from_bytes(&bytes).unwrap();
        prop_assert_eq!(back, script);
    }

    #[test]
    fn script_json_roundtrip(script in arb_script()) {
        let json = serde_json::to_string(&script).unwrap();
        let back: Script = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, script);
    }
}
