//! Property-based tests for the CSV codec
//!
//! Uses proptest to verify that any collection of text fixlets survives an
//! encode/decode cycle unchanged.

use fixlet::{Fixlet, codec};
use proptest::prelude::*;

fn field() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,12}",
        "[a-z,\"]{1,8}",
        "[a-z]{1,4}(\r?\n)[a-z]{0,4}",
        "\\PC{0,10}",
    ]
}

fn fixlet_strategy() -> impl Strategy<Value = Fixlet> {
    (field(), field(), field(), field(), field())
        .prop_map(|(site, id, name, crit, count)| Fixlet::new(site, id, name, crit, count))
}

proptest! {
    /// Decoding an encoding yields the same fixlets in the same order
    #[test]
    fn decode_inverts_encode(fixlets in prop::collection::vec(fixlet_strategy(), 0..8)) {
        let mut buf = Vec::new();
        codec::encode(&mut buf, &fixlets).unwrap();
        prop_assert_eq!(codec::decode(buf.as_slice()).unwrap(), fixlets);
    }

    /// Every encoding begins with the fixed header line
    #[test]
    fn encoding_starts_with_header(fixlets in prop::collection::vec(fixlet_strategy(), 0..4)) {
        let mut buf = Vec::new();
        codec::encode(&mut buf, &fixlets).unwrap();
        let text = String::from_utf8(buf).unwrap();
        prop_assert!(text.starts_with("SiteID,FixletID,Name,Criticality,RelevantComputerCount\n"));
    }
}
