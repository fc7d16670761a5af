//! Property-based tests for snmp-oid.
//!
//! Text round trips exercise the parser and formatter; wire round trips
//! exercise the encoder and decoder under both root policies.

use proptest::prelude::*;
use snmp_oid::{Codec, Error, Oid, OidErrorKind, RootPolicy};

// =============================================================================
// Strategies
// =============================================================================

/// Arcs biased towards base-128 group boundaries (1, 2 and 3 groups).
fn arb_arc() -> impl Strategy<Value = u16> {
    prop_oneof![
        0u16..128,
        128u16..16384,
        16384u16..=u16::MAX,
        prop::sample::select(vec![0u16, 127, 128, 16383, 16384, u16::MAX]),
    ]
}

/// OIDs under the `.1.3` root, including ones past the 128-arc RFC 2578 ceiling.
fn arb_snmp_oid() -> impl Strategy<Value = Oid> {
    prop::collection::vec(arb_arc(), 0..=300).prop_map(|rest| {
        let mut arcs = vec![1u16, 3];
        arcs.extend(rest);
        Oid::new(arcs)
    })
}

/// OIDs with any root X.690 allows for 16-bit arcs.
fn arb_x690_oid() -> impl Strategy<Value = Oid> {
    let root = prop_oneof![
        (0u16..=1, 0u16..=39),
        (Just(2u16), any::<u16>()),
    ];
    (root, prop::collection::vec(arb_arc(), 0..=20)).prop_map(|((first, second), rest)| {
        let mut arcs = vec![first, second];
        arcs.extend(rest);
        Oid::new(arcs)
    })
}

fn wire_round_trip(codec: &Codec, oid: &Oid) -> (Oid, usize, usize) {
    let tlv = codec.encode(oid).unwrap();
    let mut source = &tlv[..];
    let (decoded, consumed) = codec.read_tlv(&mut source).unwrap();
    (decoded, consumed, tlv.len())
}

// =============================================================================
// Text
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    #[test]
    fn text_round_trip(arcs in prop::collection::vec(any::<u16>(), 1..=32)) {
        let oid = Oid::from_slice(&arcs);
        let text = oid.to_string();
        prop_assert!(text.starts_with('.'));
        prop_assert_eq!(Oid::parse(&text).unwrap(), oid.clone());
        // Leading dot is optional
        prop_assert_eq!(Oid::parse(&text[1..]).unwrap(), oid);
    }

    #[test]
    fn parse_rejects_wide_arcs(prefix in prop::collection::vec(any::<u16>(), 0..8), wide in 65536u32..) {
        let mut text: String = prefix.iter().map(|a| format!("{}.", a)).collect();
        text.push_str(&wide.to_string());
        match Oid::parse(&text) {
            Err(Error::InvalidOid { kind: OidErrorKind::ArcOutOfRange { position }, .. }) => {
                prop_assert_eq!(position, prefix.len());
            }
            other => prop_assert!(false, "expected ArcOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn parse_never_panics(s in "[0-9.+ a-]{0,40}") {
        let _ = Oid::parse(&s);
    }
}

// =============================================================================
// Wire
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(2000))]

    #[test]
    fn snmp_wire_round_trip(oid in arb_snmp_oid()) {
        let (decoded, consumed, len) = wire_round_trip(&Codec::default(), &oid);
        prop_assert_eq!(decoded, oid);
        prop_assert_eq!(consumed, len);
    }

    #[test]
    fn x690_wire_round_trip(oid in arb_x690_oid()) {
        let codec = Codec::builder().root_policy(RootPolicy::X690).build();
        let (decoded, consumed, len) = wire_round_trip(&codec, &oid);
        prop_assert_eq!(decoded, oid);
        prop_assert_eq!(consumed, len);
    }

    #[test]
    fn snmp_root_rejects_other_roots(first in any::<u16>(), second in any::<u16>(), rest in arb_arc()) {
        prop_assume!((first, second) != (1, 3));
        prop_assert!(Codec::default().encode(&Oid::new([first, second, rest])).is_err());
    }

    #[test]
    fn payload_decode_never_panics(data in prop::collection::vec(any::<u8>(), 0..64)) {
        // Either a valid OID or a structured error; never a panic or overread
        let mut source = &data[..];
        if let Err(err) = Codec::default().decode(data.len(), &mut source) {
            prop_assert!(matches!(err, Error::Decode { .. }), "unexpected {:?}", err);
        }
    }

    #[test]
    fn tlv_decode_never_panics(data in prop::collection::vec(any::<u8>(), 0..64)) {
        let mut source = &data[..];
        if let Err(err) = Codec::default().read_tlv(&mut source) {
            prop_assert!(err.consumed().unwrap() <= data.len());
        }
    }
}
